//! # Erros do Motor de Identificação
//!
//! Todos os erros do núcleo (vocabulário, regras, sessão) passam pelo enum
//! [`IdentificationError`]. Não existem erros "de runtime" no caminho de
//! inferência: os dados são estáticos e em memória, então cada variante
//! aqui indica uso incorreto da API pelo chamador.
//!
//! | Variante | Quando ocorre | Recuperável? |
//! |----------|---------------|--------------|
//! | `UnknownTrait` | Traço fora do vocabulário | Não (erro de programação) |
//! | `DuplicateAnswer` | Resposta repetida em modo estrito | Sim (sessão intacta) |
//! | `SessionClosed` | Resposta após desfecho terminal | Sim (chamar `reset`) |
//! | `EmptyRule` | Regra sem condições | Não (erro de programação) |

use thiserror::Error;

/// Erro do núcleo de identificação.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentificationError {
    /// O traço não existe no vocabulário.
    #[error("unknown trait: {0}")]
    UnknownTrait(String),

    /// O traço já foi respondido nesta sessão.
    #[error("trait {trait_id} already answered ({previous})")]
    DuplicateAnswer {
        trait_id: String,
        previous: bool,
    },

    /// A sessão já chegou a um desfecho; só `reset` a reabre.
    #[error("session already finished, reset before answering")]
    SessionClosed,

    /// Regra sem nenhuma condição casaria sempre.
    #[error("rule for {0} has no conditions")]
    EmptyRule(String),
}

pub type Result<T> = std::result::Result<T, IdentificationError>;
