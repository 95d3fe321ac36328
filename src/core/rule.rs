//! # Regras de Espécie
//!
//! Cada [`Rule`] associa uma espécie a uma **conjunção ordenada** de
//! condições `traço == valor`. As regras são dados, não closures: o motor
//! avalia qualquer regra da mesma forma genérica.
//!
//! ```text
//! lion  ⇐  has_fur ∧ eats_meat ∧ has_mane
//! ```
//!
//! A ordem das regras no [`RuleBook`] é a prioridade: se duas regras
//! puderem casar com as mesmas respostas, vence a que aparece primeiro.
//! A ordem das condições dentro de uma regra define a ordem das perguntas.

use super::vocabulary::{TraitId, Vocabulary};
use crate::error::{IdentificationError, Result};

/// Uma condição `traço == esperado`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Condition {
    pub trait_id: TraitId,
    pub expected: bool,
}

/// Espécie + condições que precisam ser todas verdadeiras.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub species: &'static str,
    pub conditions: Vec<Condition>,
}

impl Rule {
    /// Regra vazia para `species`; condições são adicionadas em seguida.
    pub fn new(species: &'static str) -> Self {
        Self {
            species,
            conditions: Vec::new(),
        }
    }

    /// Regra em que todos os traços listados precisam ser `true`.
    pub fn all(species: &'static str, traits: &[&'static str]) -> Self {
        traits
            .iter()
            .fold(Self::new(species), |rule, t| rule.requires(*t))
    }

    /// Exige que o traço seja `true`.
    pub fn requires(mut self, trait_id: &'static str) -> Self {
        self.conditions.push(Condition {
            trait_id: TraitId::new(trait_id),
            expected: true,
        });
        self
    }

    /// Exige que o traço seja `false`.
    pub fn excludes(mut self, trait_id: &'static str) -> Self {
        self.conditions.push(Condition {
            trait_id: TraitId::new(trait_id),
            expected: false,
        });
        self
    }

    /// Traços referenciados, na ordem de avaliação.
    pub fn traits(&self) -> impl Iterator<Item = TraitId> + '_ {
        self.conditions.iter().map(|c| c.trait_id)
    }

    pub fn references(&self, trait_id: TraitId) -> bool {
        self.traits().any(|t| t == trait_id)
    }
}

/// Lista ordenada de regras; a posição é a prioridade.
#[derive(Clone, Debug, Default)]
pub struct RuleBook {
    rules: Vec<Rule>,
}

impl RuleBook {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// As doze espécies embutidas.
    pub fn animals() -> Self {
        Self::new(vec![
            Rule::all("lion", &["has_fur", "eats_meat", "has_mane"]),
            Rule::all("elephant", &["has_fur", "eats_plants", "has_trunk"]),
            Rule::all(
                "shark",
                &["has_scales", "lives_in_water", "eats_meat", "has_sharp_teeth"],
            ),
            Rule::all("eagle", &["has_feathers", "eats_meat", "can_fly"]),
            Rule::all("penguin", &["has_feathers", "eats_meat", "cannot_fly"]),
            Rule::all("frog", &["has_smooth_skin", "lives_in_water", "can_jump"]),
            Rule::all("dog", &["has_fur", "eats_meat", "barks"]),
            Rule::all("cat", &["has_fur", "eats_meat", "meows"]),
            Rule::all("cow", &["has_fur", "eats_plants", "gives_milk"]),
            Rule::all("chicken", &["has_feathers", "can_cluck", "cannot_fly"]),
            Rule::all(
                "turtle",
                &["has_scales", "eats_plants", "has_shell", "moves_slow"],
            ),
            Rule::all("snake", &["has_scales", "eats_meat", "no_legs", "slithers"]),
        ])
    }

    /// Confere que toda regra tem condições e só usa traços do vocabulário.
    pub fn validate(&self, vocabulary: &Vocabulary) -> Result<()> {
        for rule in &self.rules {
            if rule.conditions.is_empty() {
                return Err(IdentificationError::EmptyRule(rule.species.to_string()));
            }
            for t in rule.traits() {
                vocabulary.resolve(t.as_str())?;
            }
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}
