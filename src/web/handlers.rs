//! # Handlers HTTP — Os Endpoints da Aplicação
//!
//! Cada função pública neste módulo é um handler Axum, mapeado a uma
//! rota em [`super::create_router()`].
//!
//! | Handler | Método | Retorno | Uso |
//! |---------|--------|---------|-----|
//! | `index` | GET | HTML completo | Pergunta atual ou desfecho |
//! | `answer` | POST | 303 → `/` | Registra Yes/No |
//! | `reset` | POST | 303 → `/` | "Try Again" |
//! | `session_status` | GET | JSON | Fotografia da sessão |
//! | `sse_events` | GET | SSE stream | `SessionEvent`s |
//!
//! ## Erros
//!
//! | Erro do núcleo | Status |
//! |----------------|--------|
//! | `UnknownTrait` / resposta inválida | 400 |
//! | `DuplicateAnswer` / `SessionClosed` | 409 |
//! | `EmptyRule` (não ocorre após validação) | 500 |
//!
//! Em erro a página é renderizada de novo com uma faixa de aviso, para
//! que o usuário continue de onde estava.

use std::convert::Infallible;
use std::time::Duration;

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::sse::{Event as SseEvent, KeepAlive, Sse};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use futures_util::stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;

use super::state::AppState;
use super::templates;
use crate::error::IdentificationError;
use crate::orchestrator::SessionSnapshot;

/// Dados do formulário de resposta.
#[derive(serde::Deserialize)]
pub struct AnswerForm {
    /// Traço perguntado (campo oculto do formulário).
    pub trait_id: String,
    /// `"yes"` ou `"no"`.
    pub answer: String,
}

/// Converte Maud Markup em resposta Html<String> do Axum.
fn markup_to_html(m: maud::Markup) -> Html<String> {
    Html(m.into_string())
}

fn parse_answer(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" => Some(true),
        "no" | "false" => Some(false),
        _ => None,
    }
}

fn error_status(err: &IdentificationError) -> StatusCode {
    match err {
        IdentificationError::UnknownTrait(_) => StatusCode::BAD_REQUEST,
        IdentificationError::DuplicateAnswer { .. } | IdentificationError::SessionClosed => {
            StatusCode::CONFLICT
        }
        IdentificationError::EmptyRule(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Re-renderiza a página atual com uma faixa de erro.
fn error_page(state: &AppState, status: StatusCode, message: &str) -> Response {
    let snapshot = state.orchestrator.lock().snapshot();
    (
        status,
        markup_to_html(templates::full_page(&snapshot, Some(message))),
    )
        .into_response()
}

/// GET `/` — Página principal.
///
/// Inicia a sessão (primeira pergunta) se ela ainda não começou.
pub async fn index(State(state): State<AppState>) -> Response {
    let snapshot = {
        let mut orchestrator = state.orchestrator.lock();
        if let Err(e) = orchestrator.current() {
            tracing::error!(error = %e, "Falha ao iniciar sessão");
        }
        orchestrator.snapshot()
    };
    markup_to_html(templates::full_page(&snapshot, None)).into_response()
}

/// POST `/answer` — Registra a resposta e volta para `/`.
pub async fn answer(
    State(state): State<AppState>,
    form: Result<Form<AnswerForm>, FormRejection>,
) -> Response {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Formulário de resposta inválido");
            return error_page(&state, StatusCode::BAD_REQUEST, "Please answer yes or no.");
        }
    };

    let Some(value) = parse_answer(&form.answer) else {
        tracing::warn!(answer = %form.answer, "Resposta inválida");
        return error_page(&state, StatusCode::BAD_REQUEST, "Please answer yes or no.");
    };

    // lock liberado ao fim da instrução
    let result = state.orchestrator.lock().answer(&form.trait_id, value);
    match result {
        Ok(engine_state) => {
            tracing::debug!(trait_id = %form.trait_id, value, state = ?engine_state, "Resposta aceita");
            Redirect::to("/").into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, trait_id = %form.trait_id, "Resposta rejeitada");
            error_page(&state, error_status(&e), &e.to_string())
        }
    }
}

/// POST `/reset` — "Try Again": nova sessão e primeira pergunta.
pub async fn reset(State(state): State<AppState>) -> Response {
    let result = state.orchestrator.lock().reset();
    match result {
        Ok(_) => Redirect::to("/").into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Falha ao reiniciar sessão");
            error_page(&state, error_status(&e), &e.to_string())
        }
    }
}

/// GET `/status` — Fotografia JSON da sessão.
pub async fn session_status(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.orchestrator.lock().snapshot())
}

/// GET `/events` — Stream SSE dos eventos da sessão.
///
/// Keep-alive a cada 15s; assinantes atrasados perdem eventos
/// (filter_map descarta `Lagged`).
pub async fn sse_events(
    State(state): State<AppState>,
) -> Sse<impl futures_util::Stream<Item = Result<SseEvent, Infallible>>> {
    let rx = state.events_tx.subscribe();
    let stream = BroadcastStream::new(rx).filter_map(|result| async move {
        match result {
            Ok(event) => {
                let data = serde_json::to_string(&event).ok()?;
                Some(Ok(SseEvent::default().data(data)))
            }
            Err(_) => None,
        }
    });
    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}
