//! # Módulo Web — A Superfície de Apresentação
//!
//! A camada web substitui a janela de diálogo: mostra a pergunta atual
//! com botões Yes/No, o desfecho com "Try Again" e publica os eventos do
//! motor via SSE. Construída com **Axum** + **Maud** + **SSE**.
//!
//! ## Rotas
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Axum Router (este módulo)                               │
//! │  ├── GET  /         → página (pergunta ou desfecho)     │
//! │  ├── POST /answer   → registra resposta, 303 → /        │
//! │  ├── POST /reset    → nova sessão, 303 → /              │
//! │  ├── GET  /status   → JSON: fotografia da sessão        │
//! │  └── GET  /events   → SSE stream (SessionEvent)         │
//! ├─────────────────────────────────────────────────────────┤
//! │ Static Assets (tower_http::ServeDir → /assets/)         │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Submódulos
//!
//! | Módulo | Responsabilidade |
//! |--------|------------------|
//! | [`state`] | Estado compartilhado (`AppState`) |
//! | [`events`] | Enum de eventos SSE da sessão |
//! | [`handlers`] | Handlers Axum para cada rota |
//! | [`templates`] | Templates Maud (HTML server-side) |

pub mod events;
pub mod handlers;
pub mod state;
pub mod templates;

use std::path::Path;

use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;

use state::AppState;

/// Cria o router Axum com todas as rotas da aplicação.
///
/// `assets_dir` é servido em `/assets`; se não existir, as requisições
/// de estilo recebem 404 e a página continua funcionando.
pub fn create_router(state: AppState, assets_dir: impl AsRef<Path>) -> Router {
    Router::new()
        // ── Página HTML ───────────────────────────────────────
        .route("/", get(handlers::index))
        // ── Formulários ───────────────────────────────────────
        .route("/answer", post(handlers::answer))
        .route("/reset", post(handlers::reset))
        // ── API JSON / SSE ────────────────────────────────────
        .route("/status", get(handlers::session_status))
        .route("/events", get(handlers::sse_events))
        // ── Arquivos estáticos ────────────────────────────────
        .nest_service("/assets", ServeDir::new(assets_dir.as_ref()))
        .with_state(state)
}
