use astro_guru::{
    chat::{CORS_HEADERS, ChatHandler, HandlerResponse},
    config,
    llm::OpenAiClient,
};
use std::sync::Arc;
use vercel_runtime::{Body, Error, Request, Response, StatusCode, run};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().expect("valid default filter")),
        )
        .json()
        .init();

    run(handler).await
}

/// Serverless twin of the standalone server's `/api/chat` route: translates
/// the platform request/response shapes to and from the shared handler.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    into_platform_response(chat_reply(&req).await)
}

/// Produces the normalized response for a platform request. Setup failures
/// go through the shared error translation instead of escaping to the
/// platform runtime, so they keep the JSON body and CORS headers.
async fn chat_reply(req: &Request) -> HandlerResponse {
    let client = match OpenAiClient::new(config::load_llm()) {
        Ok(client) => client,
        Err(e) => return ChatHandler::failure(e),
    };
    let chat = ChatHandler::new(Arc::new(client));

    match req.method().as_str() {
        "OPTIONS" => ChatHandler::preflight(),
        "POST" => chat.handle_body(req.body()).await,
        other => ChatHandler::method_not_allowed(other),
    }
}

fn into_platform_response(reply: HandlerResponse) -> Result<Response<Body>, Error> {
    let mut builder = Response::builder()
        .status(StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR));

    for (name, value) in CORS_HEADERS {
        builder = builder.header(name, value);
    }

    match reply.body {
        Some(body) => Ok(builder
            .header("Content-Type", "application/json")
            .body(body.to_string().into())?),
        None => Ok(builder.body(Body::Empty)?),
    }
}
