use actix_web::{web, HttpResponse, Responder};
use log::{debug, error, info};
use uuid::Uuid;

use crate::web::error::ChatError;
use crate::web::models::{ChatRequest, ChatResponse};
use crate::AppState;

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().content_type("text/plain").body("ok")
}

// Chat API endpoint
pub async fn chat(
    data: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, ChatError> {
    let req = ChatRequest::from_json(&body)?;
    let request_id = Uuid::new_v4();

    info!(
        "Chat request {}: variant {}, {} messages",
        request_id,
        req.variant.as_str(),
        req.messages.len()
    );
    if let Some(meta) = &req.meta {
        debug!("Chat request {} meta: {:?}", request_id, meta);
    }

    let conversation = req.into_conversation();

    match data.gateway.complete(&conversation).await {
        Ok(reply) => {
            info!("Chat request {} answered", request_id);
            Ok(HttpResponse::Ok().json(ChatResponse { reply }))
        }
        Err(e) => {
            error!("Completion call failed for request {}: {}", request_id, e);
            Err(ChatError::Upstream(e))
        }
    }
}
