//! # Módulo Inference — Motor de Identificação por Regras
//!
//! Este módulo contém o **motor de inferência** do identificador de animais:
//! percorre as regras de espécie em ordem, pergunta só os traços de que a
//! regra atual precisa e termina em `Matched(espécie)` ou `Unidentified`.
//!
//! ## Peças
//!
//! | Tipo | Papel |
//! |------|-------|
//! | [`InferenceEngine`] | Vocabulário + regras validadas, sem estado |
//! | [`Session`] | Respostas e estado de uma tentativa |
//! | [`PresentationSurface`] | Quem mostra perguntas e desfechos |
//!
//! ## Exemplo
//!
//! ```rust
//! let engine = InferenceEngine::animals()?;
//! let mut session = Session::new();
//! engine.advance(&mut session, &mut ())?;              // AwaitingAnswer(has_fur)
//! engine.record_answer(&mut session, "has_fur", true, &mut ())?;
//! ```

/// Sub-módulo com o motor e a avaliação em três estados.
pub mod engine;

/// Sub-módulo com a [`Session`].
pub mod session;

/// Sub-módulo com o contrato da superfície de apresentação.
pub mod surface;

pub use engine::{AnswerPolicy, EngineState, Evaluation, InferenceEngine, Outcome};
pub use session::Session;
pub use surface::{PresentationSurface, Question};
