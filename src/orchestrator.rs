//! # Orquestrador — A Sessão Ligada à Superfície Web
//!
//! O [`Orchestrator`] junta as três peças que a camada web precisa:
//! o [`InferenceEngine`] (imutável), a [`Session`] corrente e o canal
//! broadcast por onde os eventos do motor saem para o frontend.
//!
//! ## Fluxo de uma Resposta
//!
//! ```text
//! POST /answer
//!   └── Orchestrator::answer(traço, valor)
//!         └── InferenceEngine::record_answer(session, …, EventSurface)
//!               ├── on_need_trait → SessionEvent::NeedTrait ─┐
//!               └── on_outcome    → SessionEvent::Outcome  ──┴─▶ broadcast → SSE
//! ```
//!
//! Existe uma única sessão por processo (um usuário por vez). O handler
//! adquire o `Mutex`, chama o orquestrador, tira um [`SessionSnapshot`] e
//! libera o lock antes de renderizar.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::core::TraitId;
use crate::error::Result;
use crate::inference::{
    EngineState, InferenceEngine, Outcome, PresentationSurface, Question, Session,
};
use crate::web::events::SessionEvent;

/// Superfície que publica os callbacks do motor no canal broadcast.
///
/// Envio sem assinantes é normal (ninguém no SSE) e é ignorado.
pub struct EventSurface<'a> {
    tx: &'a broadcast::Sender<SessionEvent>,
    session_id: Uuid,
}

impl<'a> EventSurface<'a> {
    pub fn new(tx: &'a broadcast::Sender<SessionEvent>, session_id: Uuid) -> Self {
        Self { tx, session_id }
    }
}

impl PresentationSurface for EventSurface<'_> {
    fn on_need_trait(&mut self, question: &Question) {
        let _ = self.tx.send(SessionEvent::NeedTrait {
            session_id: self.session_id,
            trait_id: question.trait_id,
            question: question.text.clone(),
        });
    }

    fn on_outcome(&mut self, outcome: &Outcome) {
        let _ = self.tx.send(SessionEvent::Outcome {
            session_id: self.session_id,
            outcome: outcome.clone(),
        });
    }
}

/// Resposta já dada, com a pergunta correspondente para exibição.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnswerView {
    pub trait_id: TraitId,
    pub question: String,
    pub value: bool,
}

/// Fotografia da sessão para os templates e para `/status`.
#[derive(Clone, Debug, Serialize)]
pub struct SessionSnapshot {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub state: EngineState,
    pub questions_asked: usize,
    /// Pergunta pendente, se o estado for `AwaitingAnswer`.
    pub question: Option<Question>,
    pub answers: Vec<AnswerView>,
}

/// Dono da sessão única do servidor.
pub struct Orchestrator {
    engine: InferenceEngine,
    session: Session,
    events_tx: Arc<broadcast::Sender<SessionEvent>>,
}

impl Orchestrator {
    pub fn new(engine: InferenceEngine, events_tx: Arc<broadcast::Sender<SessionEvent>>) -> Self {
        Self {
            engine,
            session: Session::new(),
            events_tx,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Estado atual; uma sessão `NotStarted` faz sua primeira pergunta aqui.
    pub fn current(&mut self) -> Result<EngineState> {
        if *self.session.state() != EngineState::NotStarted {
            return Ok(self.session.state().clone());
        }
        tracing::info!(session = %self.session.id(), "Sessão iniciada");
        let mut surface = EventSurface::new(&self.events_tx, self.session.id());
        self.engine.advance(&mut self.session, &mut surface)
    }

    /// Registra a resposta do usuário (ver [`InferenceEngine::record_answer`]).
    pub fn answer(&mut self, trait_id: &str, value: bool) -> Result<EngineState> {
        let mut surface = EventSurface::new(&self.events_tx, self.session.id());
        self.engine
            .record_answer(&mut self.session, trait_id, value, &mut surface)
    }

    /// Descarta a sessão, avisa os assinantes e já faz a primeira pergunta.
    pub fn reset(&mut self) -> Result<EngineState> {
        let previous = self.session.id();
        self.engine.reset(&mut self.session);
        let _ = self.events_tx.send(SessionEvent::Reset {
            previous_session_id: previous,
            session_id: self.session.id(),
        });
        self.current()
    }

    /// Pergunta pendente com o texto do vocabulário.
    pub fn question(&self) -> Option<Question> {
        let trait_id = self.session.pending()?;
        let t = self.engine.vocabulary().get(trait_id.as_str())?;
        Some(Question {
            trait_id,
            text: t.question(),
        })
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let vocabulary = self.engine.vocabulary();
        let answers = self
            .session
            .store()
            .answers()
            .map(|a| AnswerView {
                trait_id: a.trait_id,
                question: vocabulary
                    .get(a.trait_id.as_str())
                    .map(|t| t.question())
                    .unwrap_or_else(|| a.trait_id.to_string()),
                value: a.value,
            })
            .collect();

        SessionSnapshot {
            session_id: self.session.id(),
            started_at: self.session.started_at(),
            state: self.session.state().clone(),
            questions_asked: self.session.questions_asked(),
            question: self.question(),
            answers,
        }
    }
}
