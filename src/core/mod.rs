//! # Módulo Core — Tipos Fundamentais do Domínio
//!
//! Os dados estáticos e o estado mínimo sobre os quais o motor trabalha:
//!
//! - [`Trait`] / [`TraitId`] — atributo booleano do animal ("has fur")
//! - [`Vocabulary`] — lista fixa e ordenada de traços perguntáveis
//! - [`Rule`] / [`RuleBook`] — espécie + conjunção de condições, em ordem de prioridade
//! - [`TraitStore`] — respostas já dadas na sessão atual
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use crate::core::{Rule, RuleBook, TraitStore, TraitId, Vocabulary};
//!
//! let vocab = Vocabulary::animals();
//! let rules = RuleBook::new(vec![Rule::all("lion", &["has_fur", "eats_meat", "has_mane"])]);
//! rules.validate(&vocab)?;
//!
//! let mut store = TraitStore::new();
//! store.set(TraitId::new("has_fur"), true);
//! ```

/// Sub-módulo com [`Trait`], [`TraitId`] e [`Vocabulary`].
pub mod vocabulary;

/// Sub-módulo com [`Rule`], [`Condition`] e [`RuleBook`].
pub mod rule;

/// Sub-módulo com o [`TraitStore`].
pub mod trait_store;

// Re-exports para conveniência — permite usar `crate::core::Rule` diretamente.
pub use rule::{Condition, Rule, RuleBook};
pub use trait_store::{Answer, TraitStore};
pub use vocabulary::{Trait, TraitId, Vocabulary, ANIMAL_TRAITS};
