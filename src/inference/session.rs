//! # Sessão de Identificação
//!
//! Uma [`Session`] é uma tentativa de identificação: da primeira pergunta
//! ao desfecho. Ela guarda as respostas ([`TraitStore`]), o estado do motor
//! e um identificador próprio. Não há estado global: cada chamador possui a
//! sua sessão e várias podem coexistir.
//!
//! ## Ciclo de Vida
//!
//! ```text
//! NotStarted → AwaitingAnswer(T) → … → Matched(espécie) | Unidentified
//!      ▲                                        │
//!      └──────────────── reset() ───────────────┘
//! ```

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::engine::EngineState;
use crate::core::{TraitId, TraitStore};

/// Estado mutável de uma tentativa de identificação.
#[derive(Clone, Debug)]
pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    pub(super) store: TraitStore,
    pub(super) state: EngineState,
    pub(super) questions_asked: usize,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            store: TraitStore::new(),
            state: EngineState::NotStarted,
            questions_asked: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn store(&self) -> &TraitStore {
        &self.store
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Traço aguardando resposta, se houver (no máximo um).
    pub fn pending(&self) -> Option<TraitId> {
        match self.state {
            EngineState::AwaitingAnswer(t) => Some(t),
            _ => None,
        }
    }

    /// Perguntas distintas feitas desde o início da sessão.
    pub fn questions_asked(&self) -> usize {
        self.questions_asked
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    /// Descarta todas as respostas e volta a `NotStarted` com novo id.
    pub fn reset(&mut self) {
        let previous = self.id;
        *self = Self::new();
        tracing::info!(previous = %previous, session = %self.id, "Sessão reiniciada");
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
