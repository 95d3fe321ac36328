//! # Templates Maud — HTML Server-Side Rendering
//!
//! Templates HTML compilados em Rust pelo macro
//! [`maud`](https://maud.lambda.xyz/). A página é um formulário simples
//! (sem JavaScript): cada botão faz um POST e o servidor redireciona de
//! volta para `/`.
//!
//! ## Layout (`full_page`)
//!
//! ```text
//! ┌──────────── Animal Identifier ────────────┐
//! │  Does the animal have fur?                │
//! │        [ Yes ]        [ No ]              │
//! │  ── ou ──                                 │
//! │  I think your animal is a lion!           │
//! │             [ Try Again ]                 │
//! ├───────────────────────────────────────────┤
//! │  Your answers: have fur → yes, …          │
//! └───────────────────────────────────────────┘
//! ```
//!
//! Sem `/assets/style.css` a página continua funcional, apenas sem estilo.

use maud::{html, Markup, DOCTYPE};

use crate::inference::EngineState;
use crate::orchestrator::SessionSnapshot;

/// Página completa para o estado atual da sessão.
///
/// `error` aparece como faixa acima do cartão (ex: resposta repetida).
pub fn full_page(snapshot: &SessionSnapshot, error: Option<&str>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Animal Identifier" }
                link rel="stylesheet" href="/assets/style.css";
            }
            body {
                main class="card" {
                    h1 { "Animal Identifier" }
                    @if let Some(message) = error {
                        div class="banner error" { (message) }
                    }
                    (session_card(snapshot))
                    (answers_list(snapshot))
                }
            }
        }
    }
}

/// Pergunta pendente ou desfecho.
fn session_card(snapshot: &SessionSnapshot) -> Markup {
    match &snapshot.state {
        EngineState::AwaitingAnswer(_) => match &snapshot.question {
            Some(question) => html! {
                section class="question" {
                    p class="question-text" { (question.text) }
                    form method="post" action="/answer" class="answer-buttons" {
                        input type="hidden" name="trait_id" value=(question.trait_id.as_str());
                        button type="submit" name="answer" value="yes" { "Yes" }
                        button type="submit" name="answer" value="no" { "No" }
                    }
                }
            },
            None => html! {},
        },
        EngineState::Matched(species) => html! {
            section class="outcome matched" {
                p { "I think your animal is a " (species) "!" }
                (try_again())
            }
        },
        EngineState::Unidentified => html! {
            section class="outcome unidentified" {
                p { "Sorry, I could not identify your animal." }
                (try_again())
            }
        },
        EngineState::NotStarted => html! {
            section class="outcome" {
                p { "Think of an animal." }
                (try_again())
            }
        },
    }
}

fn try_again() -> Markup {
    html! {
        form method="post" action="/reset" {
            button type="submit" { "Try Again" }
        }
    }
}

fn answers_list(snapshot: &SessionSnapshot) -> Markup {
    html! {
        @if !snapshot.answers.is_empty() {
            section class="answers" {
                h2 { "Your answers" }
                ul {
                    @for answer in &snapshot.answers {
                        li {
                            (answer.question) " "
                            strong { @if answer.value { "yes" } @else { "no" } }
                        }
                    }
                }
            }
        }
    }
}
