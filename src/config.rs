//! # Configuração — Variáveis de Ambiente
//!
//! Lida uma única vez na inicialização, em [`AppConfig::from_env()`].
//!
//! | Variável | Padrão | Efeito |
//! |----------|--------|--------|
//! | `ANIMAL_ID_ADDR` | `0.0.0.0:3000` | Endereço do servidor web |
//! | `ANIMAL_ID_ANSWER_POLICY` | `strict` | `strict` ou `keep-first` |
//! | `ANIMAL_ID_ASSETS` | `assets` | Diretório servido em `/assets` |
//!
//! O nível de log segue `RUST_LOG` (ver `main.rs`).

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::inference::AnswerPolicy;

const ADDR_VAR: &str = "ANIMAL_ID_ADDR";
const POLICY_VAR: &str = "ANIMAL_ID_ANSWER_POLICY";
const ASSETS_VAR: &str = "ANIMAL_ID_ASSETS";

const DEFAULT_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_ASSETS: &str = "assets";

/// Configuração do binário.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub answer_policy: AnswerPolicy,
    pub assets_dir: PathBuf,
}

impl AppConfig {
    /// Lê a configuração do ambiente do processo.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Monta a configuração a partir de uma função de busca (testável sem
    /// mexer no ambiente global).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let bind_addr = addr
            .parse()
            .with_context(|| format!("{ADDR_VAR} inválido: {addr}"))?;

        let answer_policy = match lookup(POLICY_VAR) {
            Some(raw) => parse_policy(&raw).with_context(|| format!("{POLICY_VAR} inválido"))?,
            None => AnswerPolicy::default(),
        };

        let assets_dir = lookup(ASSETS_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS));

        Ok(Self {
            bind_addr,
            answer_policy,
            assets_dir,
        })
    }
}

fn parse_policy(raw: &str) -> Result<AnswerPolicy> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "strict" => Ok(AnswerPolicy::Strict),
        "keep-first" | "keep_first" => Ok(AnswerPolicy::KeepFirst),
        other => bail!("política desconhecida: {other} (use strict ou keep-first)"),
    }
}
