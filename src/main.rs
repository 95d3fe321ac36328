#![allow(dead_code)]
#![allow(rustdoc::broken_intra_doc_links)]
//! # Animal Identifier
//!
//! **Ponto de entrada** do identificador de animais: um pequeno sistema
//! especialista que faz perguntas sim/não sobre os traços de um animal e
//! casa as respostas com regras fixas de espécie.
//!
//! ## Fluxo de Inicialização
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging (RUST_LOG)
//!   ├── Lê AppConfig do ambiente
//!   ├── Cria InferenceEngine (vocabulário + regras validados)
//!   ├── Monta AppState e Router
//!   └── Inicia servidor TCP
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! # Executar com logs padrão (info)
//! cargo run
//!
//! # Logs detalhados da inferência, outra porta
//! RUST_LOG=debug ANIMAL_ID_ADDR=127.0.0.1:8080 cargo run
//! ```

/// Módulo `config` — configuração via variáveis de ambiente.
mod config;

/// Módulo `core` — vocabulário de traços, regras e store de respostas.
mod core;

/// Módulo `error` — erros do núcleo de identificação.
mod error;

/// Módulo `inference` — motor de inferência, sessão e superfície.
mod inference;

/// Módulo `orchestrator` — sessão única do servidor ligada aos eventos.
mod orchestrator;

/// Módulo `web` — servidor axum, handlers, templates e SSE.
mod web;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::inference::InferenceEngine;
use crate::web::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Exemplo: RUST_LOG=debug cargo run
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🐾 Animal Identifier — Starting...");

    let config = AppConfig::from_env()?;
    if !config.assets_dir.is_dir() {
        tracing::warn!(dir = %config.assets_dir.display(), "Diretório de assets ausente, página sem estilo");
    }

    let engine = InferenceEngine::animals()
        .context("Regras embutidas inválidas")?
        .with_policy(config.answer_policy);
    tracing::info!(
        traits = engine.vocabulary().len(),
        rules = engine.rules().len(),
        policy = ?engine.policy(),
        "Motor de inferência pronto"
    );

    let state = AppState::new(engine);
    let app = web::create_router(state, &config.assets_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Falha ao abrir {}", config.bind_addr))?;
    tracing::info!("🚀 Server running at http://{}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
