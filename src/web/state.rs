//! # Estado da Aplicação Web
//!
//! Define o estado compartilhado entre todos os handlers Axum: o
//! orquestrador da sessão única e o canal broadcast dos eventos SSE.
//!
//! ```text
//! AppState (Clone, barato)
//!  ├── orchestrator: Arc<Mutex<Orchestrator>>   → engine + session
//!  └── events_tx:    Arc<broadcast::Sender<…>>  → /events (SSE)
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::broadcast;

use crate::inference::InferenceEngine;
use crate::orchestrator::Orchestrator;
use crate::web::events::SessionEvent;

/// Capacidade do canal de eventos; assinantes lentos perdem os mais antigos.
const EVENT_CAPACITY: usize = 64;

/// Estado compartilhado da aplicação Axum.
#[derive(Clone)]
pub struct AppState {
    /// Orquestrador da sessão (acesso exclusivo, lock curto e síncrono).
    pub orchestrator: Arc<Mutex<Orchestrator>>,
    /// Canal broadcast para eventos SSE da sessão.
    pub events_tx: Arc<broadcast::Sender<SessionEvent>>,
}

impl AppState {
    pub fn new(engine: InferenceEngine) -> Self {
        let (events_tx, _) = broadcast::channel::<SessionEvent>(EVENT_CAPACITY);
        let events_tx = Arc::new(events_tx);
        let orchestrator = Orchestrator::new(engine, events_tx.clone());
        Self {
            orchestrator: Arc::new(Mutex::new(orchestrator)),
            events_tx,
        }
    }
}
