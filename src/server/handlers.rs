use crate::chat::{CORS_HEADERS, ChatHandler, HandlerResponse};
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderName, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub handler: Arc<ChatHandler>,
}

/// Single entry point for `/api/chat`. Method dispatch happens here rather
/// than in the router so non-POST methods get the JSON 405 body instead of
/// axum's default response.
pub async fn chat(State(state): State<AppState>, method: Method, body: Bytes) -> Response {
    let reply = match method {
        Method::OPTIONS => ChatHandler::preflight(),
        Method::POST => state.handler.handle_body(&body).await,
        other => ChatHandler::method_not_allowed(other.as_str()),
    };

    into_response(reply)
}

fn into_response(reply: HandlerResponse) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut response = match reply.body {
        Some(body) => (status, Json(body)).into_response(),
        None => status.into_response(),
    };

    let headers = response.headers_mut();
    for (name, value) in CORS_HEADERS {
        headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
    }

    response
}
