//! # TraitStore — Respostas Acumuladas da Sessão
//!
//! Mapa `TraitId → bool` preenchido sob demanda, conforme o usuário responde.
//! A ausência de uma chave significa "ainda não perguntado" e **nunca** é
//! tratada como `false`.
//!
//! O store em si sobrescreve escritas repetidas; quem garante que uma
//! resposta não muda dentro da sessão é o
//! [`InferenceEngine`](crate::inference::InferenceEngine).

use std::collections::HashMap;

use serde::Serialize;

use super::vocabulary::TraitId;

/// Uma resposta registrada, na forma exibida ao usuário.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub trait_id: TraitId,
    pub value: bool,
}

/// Respostas conhecidas de uma sessão.
#[derive(Clone, Debug, Default)]
pub struct TraitStore {
    answers: HashMap<TraitId, bool>,
    /// Ordem de chegada das respostas (para exibição).
    order: Vec<TraitId>,
}

impl TraitStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, trait_id: TraitId) -> Option<bool> {
        self.answers.get(&trait_id).copied()
    }

    /// Registra uma resposta. Uma segunda escrita para o mesmo traço
    /// sobrescreve o valor mas mantém a posição original.
    pub fn set(&mut self, trait_id: TraitId, value: bool) {
        if self.answers.insert(trait_id, value).is_none() {
            self.order.push(trait_id);
        }
    }

    pub fn contains(&self, trait_id: TraitId) -> bool {
        self.answers.contains_key(&trait_id)
    }

    pub fn reset(&mut self) {
        self.answers.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Respostas na ordem em que foram registradas.
    pub fn answers(&self) -> impl Iterator<Item = Answer> + '_ {
        self.order.iter().map(|id| Answer {
            trait_id: *id,
            value: self.answers[id],
        })
    }
}
