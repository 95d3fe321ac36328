//! # Eventos SSE da Sessão
//!
//! Define o enum [`SessionEvent`] — os dois callbacks do motor
//! (`on_need_trait`, `on_outcome`) e o reset, enviados em tempo real ao
//! frontend via Server-Sent Events.
//!
//! ## Ciclo de Vida dos Eventos
//!
//! ```text
//! NeedTrait* → Outcome → Reset → NeedTrait* → …
//! ```
//!
//! ## Serialização
//!
//! Usa `#[serde(tag = "type")]` para produzir JSON com discriminador:
//!
//! ```json
//! { "type": "NeedTrait", "session_id": "uuid", "trait_id": "has_fur",
//!   "question": "Does the animal have fur?" }
//! ```

use serde::Serialize;
use uuid::Uuid;

use crate::core::TraitId;
use crate::inference::Outcome;

/// Evento emitido pela sessão, enviado via SSE ao frontend.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type")]
pub enum SessionEvent {
    /// O motor precisa da resposta para um traço.
    NeedTrait {
        session_id: Uuid,
        trait_id: TraitId,
        /// Texto pronto para exibição.
        question: String,
    },

    /// A identificação terminou (espécie ou `Unidentified`).
    Outcome {
        session_id: Uuid,
        outcome: Outcome,
    },

    /// A sessão foi descartada e outra começou.
    Reset {
        previous_session_id: Uuid,
        session_id: Uuid,
    },
}
