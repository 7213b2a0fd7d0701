use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use serde_json::json;
use tera::{Context, Tera};
use uuid::Uuid;

use crate::provider::ClaudeClient;
use crate::session::{self, SessionStore};
use crate::web::models::{ChatRequest, ChatResponse, ConverseRequest, ConverseResponse};

// Chat page handler
pub async fn index(tera: web::Data<Tera>) -> impl Responder {
    match tera.render("index.html", &Context::new()) {
        Ok(html) => HttpResponse::Ok().content_type("text/html").body(html),
        Err(e) => {
            error!("Template error: {}", e);
            HttpResponse::InternalServerError().body("Template error")
        }
    }
}

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

/// Stateless chat endpoint. The caller supplies the whole conversation; it is
/// forwarded to the model verbatim and the reply text is returned. Nothing is
/// retained across requests.
pub async fn chat(client: web::Data<ClaudeClient>, req: web::Json<ChatRequest>) -> impl Responder {
    info!("Chat request with {} message(s)", req.messages.len());

    match client.complete(&req.messages).await {
        Ok(text) => HttpResponse::Ok().json(ChatResponse { response: text }),
        Err(e) => {
            error!("Provider call failed: {}", e);
            HttpResponse::InternalServerError().json(json!({ "error": e.to_string() }))
        }
    }
}

/// Interactive endpoint backing the chat page: one user turn against a
/// server-held session history. A request without a session id starts a new
/// session.
pub async fn converse(
    client: web::Data<ClaudeClient>,
    sessions: web::Data<SessionStore>,
    req: web::Json<ConverseRequest>,
) -> impl Responder {
    let session_id = req.session_id.unwrap_or_else(Uuid::new_v4);
    info!("Converse request for session {}", session_id);

    match session::run_turn(&client, &sessions, session_id, &req.message).await {
        Ok(text) => HttpResponse::Ok().json(ConverseResponse {
            response: text,
            session_id,
        }),
        Err(e) => {
            error!("Turn failed for session {}: {}", session_id, e);
            HttpResponse::InternalServerError().json(json!({ "error": e.to_string() }))
        }
    }
}
