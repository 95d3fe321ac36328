//! # Vocabulário de Traços
//!
//! O vocabulário é a lista **fixa e ordenada** de traços sobre os quais o
//! sistema pode perguntar. Cada [`Trait`] tem um identificador estável
//! (`has_fur`) e uma frase curta (`"have fur"`) usada para montar a pergunta
//! exibida ao usuário:
//!
//! ```text
//! has_fur  →  "Does the animal have fur?"
//! ```
//!
//! O vocabulário é imutável depois de construído. Traços que nenhuma regra
//! referencia (ex: `lays_eggs`) são válidos, apenas nunca são perguntados.

use std::fmt;

use serde::Serialize;

use crate::error::{IdentificationError, Result};

/// Identificador estável de um traço (ex: `has_fur`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TraitId(&'static str);

impl TraitId {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TraitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Um atributo booleano do animal desconhecido.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trait {
    /// Identificador usado nas regras e nos formulários.
    pub id: TraitId,
    /// Complemento verbal da pergunta ("have fur", "fly").
    pub phrase: &'static str,
}

impl Trait {
    pub const fn new(id: &'static str, phrase: &'static str) -> Self {
        Self {
            id: TraitId::new(id),
            phrase,
        }
    }

    /// Pergunta sim/não apresentada ao usuário.
    pub fn question(&self) -> String {
        format!("Does the animal {}?", self.phrase)
    }
}

/// Traços conhecidos pelo identificador de animais, na ordem de exibição.
pub const ANIMAL_TRAITS: &[Trait] = &[
    Trait::new("has_fur", "have fur"),
    Trait::new("has_feathers", "have feathers"),
    Trait::new("has_scales", "have scales"),
    Trait::new("has_smooth_skin", "have smooth skin"),
    Trait::new("lives_in_water", "live in water"),
    Trait::new("lays_eggs", "lay eggs"),
    Trait::new("cold_blooded", "have cold blood"),
    Trait::new("eats_meat", "eat meat"),
    Trait::new("eats_plants", "eat plants"),
    Trait::new("has_mane", "have a mane"),
    Trait::new("has_trunk", "have a trunk"),
    Trait::new("has_sharp_teeth", "have sharp teeth"),
    Trait::new("can_fly", "fly"),
    Trait::new("cannot_fly", "not fly"),
    Trait::new("can_jump", "jump"),
    Trait::new("barks", "bark"),
    Trait::new("meows", "meow"),
    Trait::new("gives_milk", "give milk"),
    Trait::new("can_cluck", "cluck"),
    Trait::new("has_shell", "have a shell"),
    Trait::new("moves_slow", "move slowly"),
    Trait::new("no_legs", "have no legs"),
    Trait::new("slithers", "slither"),
];

/// Conjunto ordenado de traços válidos para uma sessão.
///
/// Busca linear: o vocabulário tem algumas dezenas de entradas e a ordem
/// de declaração é preservada para exibição.
#[derive(Clone, Debug)]
pub struct Vocabulary {
    traits: Vec<Trait>,
}

impl Vocabulary {
    /// Cria um vocabulário; identificadores repetidos mantêm a primeira frase.
    pub fn new(traits: impl IntoIterator<Item = Trait>) -> Self {
        let mut kept: Vec<Trait> = Vec::new();
        for t in traits {
            if kept.iter().any(|k| k.id == t.id) {
                tracing::warn!(trait_id = %t.id, "Traço duplicado no vocabulário, ignorado");
                continue;
            }
            kept.push(t);
        }
        Self { traits: kept }
    }

    /// O vocabulário embutido de animais ([`ANIMAL_TRAITS`]).
    pub fn animals() -> Self {
        Self::new(ANIMAL_TRAITS.iter().copied())
    }

    pub fn get(&self, id: &str) -> Option<&Trait> {
        self.traits.iter().find(|t| t.id.as_str() == id)
    }

    /// Como [`get()`](Vocabulary::get), mas falha com `UnknownTrait`.
    pub fn resolve(&self, id: &str) -> Result<&Trait> {
        self.get(id)
            .ok_or_else(|| IdentificationError::UnknownTrait(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trait> {
        self.traits.iter()
    }

    pub fn len(&self) -> usize {
        self.traits.len()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::animals()
    }
}
