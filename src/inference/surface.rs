//! # Superfície de Apresentação
//!
//! O motor não sabe desenhar nada. Quando precisa de um fato novo ou chega
//! a um desfecho, ele chama a [`PresentationSurface`] recebida e devolve o
//! controle ao chamador:
//!
//! ```text
//! InferenceEngine ──on_need_trait(Question)──▶ superfície (pergunta ao usuário)
//!                 ──on_outcome(Outcome)──────▶ superfície (mostra resultado)
//! superfície ──record_answer / reset──▶ InferenceEngine
//! ```
//!
//! `()` é a superfície silenciosa, útil quando só o estado retornado importa.

use serde::Serialize;

use super::engine::Outcome;
use crate::core::TraitId;

/// Pergunta sim/não pendente.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Question {
    pub trait_id: TraitId,
    pub text: String,
}

/// Quem apresenta perguntas e desfechos ao usuário.
pub trait PresentationSurface {
    /// O motor precisa da resposta para `question.trait_id`.
    fn on_need_trait(&mut self, question: &Question);

    /// A inferência terminou.
    fn on_outcome(&mut self, outcome: &Outcome);
}

impl PresentationSurface for () {
    fn on_need_trait(&mut self, _question: &Question) {}

    fn on_outcome(&mut self, _outcome: &Outcome) {}
}
