//! # Motor de Inferência por Regras
//!
//! O [`InferenceEngine`] percorre o [`RuleBook`] em ordem e avalia cada
//! regra contra as respostas da [`Session`], de forma **preguiçosa**: só
//! pergunta um traço quando a regra atual precisa dele.
//!
//! ## Avaliação em Três Estados
//!
//! ```text
//! para cada condição (traço, esperado) da regra, da esquerda para a direita:
//!   resposta ausente      → NeedsTrait(traço)   (pergunta e suspende)
//!   resposta ≠ esperado   → Refuted             (curto-circuito)
//! todas conferem          → Satisfied
//! ```
//!
//! "Desconhecido" nunca é convertido em `false`.
//!
//! ## Ciclo `advance()`
//!
//! ```text
//! para cada regra, do topo:
//!   NeedsTrait(T) → on_need_trait(T)  → AwaitingAnswer(T)
//!   Satisfied     → on_outcome(Matched) → Matched(espécie)   (primeira vence)
//!   Refuted       → próxima regra
//! todas refutadas → on_outcome(Unidentified) → Unidentified
//! ```
//!
//! Com todas as regras refutadas, traços ainda não perguntados não mudam
//! nenhuma regra, então o motor encerra em `Unidentified` sem perguntá-los.
//!
//! Cada resposta registrada reinicia a varredura do topo: um fato novo pode
//! resolver uma regra anterior antes de uma posterior.
//!
//! ## Performance
//!
//! O(regras × condições) por pergunta. Com 12 regras de até 4 condições é
//! instantâneo; vocabulários muito maiores pediriam indexar regras por traço.

use serde::Serialize;

use super::session::Session;
use super::surface::{PresentationSurface, Question};
use crate::core::{Rule, RuleBook, TraitId, TraitStore, Vocabulary};
use crate::error::{IdentificationError, Result};

/// Resultado da avaliação de uma regra.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evaluation {
    /// Todas as condições conhecidas e verdadeiras.
    Satisfied,
    /// Alguma condição conhecida e falsa.
    Refuted,
    /// Falta a resposta deste traço para decidir.
    NeedsTrait(TraitId),
}

/// Desfecho terminal de uma sessão.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "species")]
pub enum Outcome {
    Matched(&'static str),
    Unidentified,
}

/// Estado do motor para uma sessão.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum EngineState {
    NotStarted,
    AwaitingAnswer(TraitId),
    Matched(&'static str),
    Unidentified,
}

impl EngineState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, EngineState::Matched(_) | EngineState::Unidentified)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            EngineState::Matched(species) => Some(Outcome::Matched(*species)),
            EngineState::Unidentified => Some(Outcome::Unidentified),
            _ => None,
        }
    }
}

/// O que fazer quando um traço já respondido é respondido de novo.
///
/// Em ambos os casos a primeira resposta é preservada.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerPolicy {
    /// Rejeita com [`IdentificationError::DuplicateAnswer`].
    #[default]
    Strict,
    /// Ignora a repetição e segue a inferência.
    KeepFirst,
}

/// Motor de inferência: vocabulário + regras validadas + política.
///
/// O motor é imutável; todo estado mutável vive na [`Session`].
#[derive(Clone, Debug)]
pub struct InferenceEngine {
    vocabulary: Vocabulary,
    rules: RuleBook,
    policy: AnswerPolicy,
}

impl InferenceEngine {
    /// Cria um motor, validando que toda regra usa apenas traços do vocabulário.
    ///
    /// # Erros
    ///
    /// `UnknownTrait` se alguma regra citar um traço desconhecido,
    /// `EmptyRule` se alguma regra não tiver condições.
    pub fn new(vocabulary: Vocabulary, rules: RuleBook) -> Result<Self> {
        rules.validate(&vocabulary)?;
        tracing::debug!(
            traits = vocabulary.len(),
            rules = rules.len(),
            "Motor de inferência criado"
        );
        Ok(Self {
            vocabulary,
            rules,
            policy: AnswerPolicy::default(),
        })
    }

    /// Motor com o vocabulário e as regras de animais embutidos.
    pub fn animals() -> Result<Self> {
        Self::new(Vocabulary::animals(), RuleBook::animals())
    }

    pub fn with_policy(mut self, policy: AnswerPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn rules(&self) -> &RuleBook {
        &self.rules
    }

    pub fn policy(&self) -> AnswerPolicy {
        self.policy
    }

    /// Avalia a conjunção da regra da esquerda para a direita.
    pub fn evaluate_rule(&self, rule: &Rule, store: &TraitStore) -> Evaluation {
        for condition in &rule.conditions {
            match store.get(condition.trait_id) {
                None => return Evaluation::NeedsTrait(condition.trait_id),
                Some(value) if value != condition.expected => return Evaluation::Refuted,
                Some(_) => {}
            }
        }
        Evaluation::Satisfied
    }

    /// Reavalia as regras do topo e leva a sessão ao próximo estado.
    ///
    /// Em estado terminal apenas devolve o estado atual, sem reemitir o desfecho.
    pub fn advance(
        &self,
        session: &mut Session,
        surface: &mut impl PresentationSurface,
    ) -> Result<EngineState> {
        if session.state.is_terminal() {
            return Ok(session.state.clone());
        }

        for rule in self.rules.iter() {
            match self.evaluate_rule(rule, &session.store) {
                Evaluation::Refuted => {
                    tracing::trace!(species = rule.species, "Regra refutada");
                }
                Evaluation::NeedsTrait(trait_id) => {
                    let question = Question {
                        trait_id,
                        text: self.vocabulary.resolve(trait_id.as_str())?.question(),
                    };
                    if session.pending() != Some(trait_id) {
                        session.questions_asked += 1;
                    }
                    session.state = EngineState::AwaitingAnswer(trait_id);
                    tracing::debug!(
                        session = %session.id(),
                        species = rule.species,
                        trait_id = %trait_id,
                        "Aguardando resposta"
                    );
                    surface.on_need_trait(&question);
                    return Ok(session.state.clone());
                }
                Evaluation::Satisfied => {
                    session.state = EngineState::Matched(rule.species);
                    return Ok(self.finish(session, surface));
                }
            }
        }

        // Traços ainda não respondidos aqui não influenciam regra alguma.
        let unresolved = self
            .vocabulary
            .iter()
            .filter(|t| !session.store.contains(t.id))
            .count();
        tracing::debug!(unresolved, "Todas as regras refutadas");
        session.state = EngineState::Unidentified;
        Ok(self.finish(session, surface))
    }

    /// Registra uma resposta e reavalia a partir da primeira regra.
    ///
    /// Qualquer traço do vocabulário pode ser registrado, não só o pendente.
    ///
    /// # Erros
    ///
    /// - `UnknownTrait` — traço fora do vocabulário
    /// - `SessionClosed` — a sessão já tem desfecho
    /// - `DuplicateAnswer` — traço já respondido, com [`AnswerPolicy::Strict`]
    pub fn record_answer(
        &self,
        session: &mut Session,
        trait_id: &str,
        value: bool,
        surface: &mut impl PresentationSurface,
    ) -> Result<EngineState> {
        let trait_id = self.vocabulary.resolve(trait_id)?.id;
        if session.state.is_terminal() {
            return Err(IdentificationError::SessionClosed);
        }

        match (session.store.get(trait_id), self.policy) {
            (Some(previous), AnswerPolicy::Strict) => {
                tracing::warn!(trait_id = %trait_id, previous, value, "Resposta repetida rejeitada");
                return Err(IdentificationError::DuplicateAnswer {
                    trait_id: trait_id.to_string(),
                    previous,
                });
            }
            (Some(previous), AnswerPolicy::KeepFirst) => {
                tracing::warn!(trait_id = %trait_id, previous, value, "Resposta repetida ignorada");
            }
            (None, _) => {
                tracing::debug!(session = %session.id(), trait_id = %trait_id, value, "Resposta registrada");
                session.store.set(trait_id, value);
            }
        }

        self.advance(session, surface)
    }

    /// Volta a sessão a `NotStarted` com o store vazio.
    pub fn reset(&self, session: &mut Session) {
        session.reset();
    }

    fn finish(&self, session: &Session, surface: &mut impl PresentationSurface) -> EngineState {
        if let Some(outcome) = session.state.outcome() {
            tracing::info!(
                session = %session.id(),
                questions = session.questions_asked,
                outcome = ?outcome,
                "Identificação concluída"
            );
            surface.on_outcome(&outcome);
        }
        session.state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Trait;

    /// Superfície que guarda tudo o que o motor emitiu.
    #[derive(Default)]
    struct Recorder {
        asked: Vec<TraitId>,
        outcomes: Vec<Outcome>,
    }

    impl PresentationSurface for Recorder {
        fn on_need_trait(&mut self, question: &Question) {
            self.asked.push(question.trait_id);
        }

        fn on_outcome(&mut self, outcome: &Outcome) {
            self.outcomes.push(outcome.clone());
        }
    }

    fn id(s: &'static str) -> TraitId {
        TraitId::new(s)
    }

    fn lion_only() -> InferenceEngine {
        let vocab = Vocabulary::new([
            Trait::new("has_fur", "have fur"),
            Trait::new("eats_meat", "eat meat"),
            Trait::new("has_mane", "have a mane"),
        ]);
        let rules = RuleBook::new(vec![Rule::all("lion", &["has_fur", "eats_meat", "has_mane"])]);
        InferenceEngine::new(vocab, rules).unwrap()
    }

    /// Responde cada pergunta com `answer(traço)` até um desfecho.
    fn walk(
        engine: &InferenceEngine,
        answer: impl Fn(&str) -> bool,
    ) -> (EngineState, Recorder) {
        let mut session = Session::new();
        let mut recorder = Recorder::default();
        let mut state = engine.advance(&mut session, &mut recorder).unwrap();
        while let EngineState::AwaitingAnswer(t) = state {
            state = engine
                .record_answer(&mut session, t.as_str(), answer(t.as_str()), &mut recorder)
                .unwrap();
        }
        (state, recorder)
    }

    // ─── evaluate_rule ─────────────────────────────────────────

    #[test]
    fn evaluate_needs_first_missing_trait() {
        let engine = lion_only();
        let lion = engine.rules().iter().next().unwrap();
        let mut store = TraitStore::new();
        assert_eq!(engine.evaluate_rule(lion, &store), Evaluation::NeedsTrait(id("has_fur")));
        store.set(id("has_fur"), true);
        assert_eq!(engine.evaluate_rule(lion, &store), Evaluation::NeedsTrait(id("eats_meat")));
    }

    #[test]
    fn evaluate_short_circuits_on_false() {
        let engine = lion_only();
        let lion = engine.rules().iter().next().unwrap();
        let mut store = TraitStore::new();
        store.set(id("has_fur"), false);
        assert_eq!(engine.evaluate_rule(lion, &store), Evaluation::Refuted);
    }

    #[test]
    fn evaluate_respects_expected_false() {
        let vocab = Vocabulary::animals();
        let rules = RuleBook::new(vec![Rule::new("platypus").requires("has_fur").excludes("cannot_fly")]);
        let engine = InferenceEngine::new(vocab, rules).unwrap();
        let rule = engine.rules().iter().next().unwrap();
        let mut store = TraitStore::new();
        store.set(id("has_fur"), true);
        store.set(id("cannot_fly"), false);
        assert_eq!(engine.evaluate_rule(rule, &store), Evaluation::Satisfied);
        store.set(id("cannot_fly"), true);
        assert_eq!(engine.evaluate_rule(rule, &store), Evaluation::Refuted);
    }

    // ─── cenários ──────────────────────────────────────────────

    #[test]
    fn lion_after_exactly_three_questions() {
        let engine = lion_only();
        let mut session = Session::new();
        let mut recorder = Recorder::default();

        let state = engine.advance(&mut session, &mut recorder).unwrap();
        assert_eq!(state, EngineState::AwaitingAnswer(id("has_fur")));

        engine.record_answer(&mut session, "has_fur", true, &mut recorder).unwrap();
        engine.record_answer(&mut session, "eats_meat", true, &mut recorder).unwrap();
        let state = engine.record_answer(&mut session, "has_mane", true, &mut recorder).unwrap();

        assert_eq!(state, EngineState::Matched("lion"));
        assert_eq!(recorder.asked, vec![id("has_fur"), id("eats_meat"), id("has_mane")]);
        assert_eq!(recorder.outcomes, vec![Outcome::Matched("lion")]);
        assert_eq!(session.questions_asked(), 3);
    }

    #[test]
    fn sole_rule_refuted_is_unidentified() {
        let engine = lion_only();
        let (state, recorder) = walk(&engine, |_| false);
        assert_eq!(state, EngineState::Unidentified);
        assert_eq!(recorder.asked, vec![id("has_fur")]);
        assert_eq!(recorder.outcomes, vec![Outcome::Unidentified]);
    }

    #[test]
    fn all_rules_refuted_stops_before_asking_every_trait() {
        let engine = InferenceEngine::animals().unwrap();
        let (state, recorder) = walk(&engine, |_| false);
        assert_eq!(state, EngineState::Unidentified);
        assert!(recorder.asked.len() < engine.vocabulary().len());
        assert!(!recorder.asked.contains(&id("lays_eggs")));
        assert_eq!(recorder.outcomes, vec![Outcome::Unidentified]);
    }

    #[test]
    fn single_trait_vocabulary_exhausted() {
        let vocab = Vocabulary::new([Trait::new("has_fur", "have fur")]);
        let rules = RuleBook::new(vec![Rule::all("bear", &["has_fur"])]);
        let engine = InferenceEngine::new(vocab, rules).unwrap();
        let mut session = Session::new();
        engine.advance(&mut session, &mut ()).unwrap();
        let state = engine.record_answer(&mut session, "has_fur", false, &mut ()).unwrap();
        assert_eq!(state, EngineState::Unidentified);
        assert_eq!(session.store().len(), engine.vocabulary().len());
    }

    #[test]
    fn every_referenced_trait_known_without_match() {
        let engine = lion_only();
        let (state, _) = walk(&engine, |t| t != "has_mane");
        assert_eq!(state, EngineState::Unidentified);
    }

    #[test]
    fn every_builtin_species_is_reachable() {
        let engine = InferenceEngine::animals().unwrap();
        for rule in engine.rules().iter() {
            let (state, recorder) = walk(&engine, |t| rule.traits().any(|r| r.as_str() == t));
            assert_eq!(state, EngineState::Matched(rule.species), "{}", rule.species);
            assert_eq!(recorder.outcomes.len(), 1);
        }
    }

    #[test]
    fn all_no_gives_up_without_asking_irrelevant_traits() {
        let engine = InferenceEngine::animals().unwrap();
        let (state, recorder) = walk(&engine, |_| false);
        assert_eq!(state, EngineState::Unidentified);
        assert_eq!(
            recorder.asked,
            vec![id("has_fur"), id("has_scales"), id("has_feathers"), id("has_smooth_skin")]
        );
    }

    // ─── prioridade e minimalidade ─────────────────────────────

    #[test]
    fn earlier_rule_wins_regardless_of_answer_order() {
        let engine = InferenceEngine::animals().unwrap();
        let orders: [&[&str]; 2] = [
            &["barks", "has_mane", "eats_meat", "has_fur"],
            &["has_fur", "eats_meat", "barks", "has_mane"],
        ];
        for order in orders {
            let mut session = Session::new();
            let mut state = EngineState::NotStarted;
            for t in order {
                state = engine.record_answer(&mut session, t, true, &mut ()).unwrap();
            }
            assert_eq!(state, EngineState::Matched("lion"), "{order:?}");
        }
    }

    #[test]
    fn asks_only_traits_of_the_rule_being_evaluated() {
        let engine = InferenceEngine::animals().unwrap();
        let penguin = ["has_feathers", "eats_meat", "cannot_fly"];
        let mut session = Session::new();
        let mut state = engine.advance(&mut session, &mut ()).unwrap();
        while let EngineState::AwaitingAnswer(t) = state {
            let current = engine
                .rules()
                .iter()
                .find(|r| engine.evaluate_rule(r, session.store()) != Evaluation::Refuted)
                .unwrap();
            assert!(current.references(t), "{t} asked while evaluating {}", current.species);
            assert!(!session.store().contains(t), "{t} asked twice");
            state = engine
                .record_answer(&mut session, t.as_str(), penguin.contains(&t.as_str()), &mut ())
                .unwrap();
        }
        assert_eq!(state, EngineState::Matched("penguin"));
        assert!(!session.store().contains(id("lays_eggs")));
    }

    // ─── erros e políticas ─────────────────────────────────────

    #[test]
    fn unknown_trait_is_rejected() {
        let engine = InferenceEngine::animals().unwrap();
        let mut session = Session::new();
        engine.advance(&mut session, &mut ()).unwrap();
        let err = engine.record_answer(&mut session, "has_wheels", true, &mut ()).unwrap_err();
        assert_eq!(err, IdentificationError::UnknownTrait("has_wheels".into()));
        assert_eq!(session.pending(), Some(id("has_fur")));
        assert!(session.store().is_empty());
    }

    #[test]
    fn strict_policy_rejects_duplicates() {
        let engine = InferenceEngine::animals().unwrap();
        let mut session = Session::new();
        engine.record_answer(&mut session, "has_fur", true, &mut ()).unwrap();
        let err = engine.record_answer(&mut session, "has_fur", false, &mut ()).unwrap_err();
        assert_eq!(
            err,
            IdentificationError::DuplicateAnswer {
                trait_id: "has_fur".into(),
                previous: true
            }
        );
        assert_eq!(session.store().get(id("has_fur")), Some(true));
        assert_eq!(session.pending(), Some(id("eats_meat")));
    }

    #[test]
    fn keep_first_policy_ignores_duplicates() {
        let engine = InferenceEngine::animals()
            .unwrap()
            .with_policy(AnswerPolicy::KeepFirst);
        let mut session = Session::new();
        engine.record_answer(&mut session, "has_fur", true, &mut ()).unwrap();
        let state = engine.record_answer(&mut session, "has_fur", false, &mut ()).unwrap();
        assert_eq!(state, EngineState::AwaitingAnswer(id("eats_meat")));
        assert_eq!(session.store().get(id("has_fur")), Some(true));
    }

    #[test]
    fn finished_session_is_closed_until_reset() {
        let engine = lion_only();
        let mut session = Session::new();
        let mut recorder = Recorder::default();
        for t in ["has_fur", "eats_meat", "has_mane"] {
            engine.record_answer(&mut session, t, true, &mut recorder).unwrap();
        }
        assert!(session.is_finished());
        assert_eq!(
            engine.record_answer(&mut session, "has_fur", true, &mut recorder),
            Err(IdentificationError::SessionClosed)
        );

        // advance em estado terminal não reemite o desfecho
        let state = engine.advance(&mut session, &mut recorder).unwrap();
        assert_eq!(state, EngineState::Matched("lion"));
        assert_eq!(recorder.outcomes.len(), 1);

        engine.reset(&mut session);
        assert_eq!(session.state(), &EngineState::NotStarted);
        let state = engine.advance(&mut session, &mut recorder).unwrap();
        assert_eq!(state, EngineState::AwaitingAnswer(id("has_fur")));
    }

    #[test]
    fn repeated_advance_does_not_count_twice() {
        let engine = lion_only();
        let mut session = Session::new();
        engine.advance(&mut session, &mut ()).unwrap();
        engine.advance(&mut session, &mut ()).unwrap();
        assert_eq!(session.questions_asked(), 1);
    }

    #[test]
    fn construction_rejects_unknown_rule_trait() {
        let vocab = Vocabulary::new([Trait::new("has_fur", "have fur")]);
        let rules = RuleBook::new(vec![Rule::all("lion", &["has_fur", "has_mane"])]);
        assert_eq!(
            InferenceEngine::new(vocab, rules).unwrap_err(),
            IdentificationError::UnknownTrait("has_mane".into())
        );
    }

    #[test]
    fn state_serializes_with_kind_tag() {
        let json = serde_json::to_value(EngineState::AwaitingAnswer(id("has_fur"))).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "AwaitingAnswer", "value": "has_fur" }));
        let json = serde_json::to_value(EngineState::Unidentified).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "Unidentified" }));
    }
}
