use crate::error::{Error, Result};
use crate::requests::ChatBody;
use crate::tools::build_http_client;
use async_stream::stream;
use bytes::Bytes;
use common::config::{BackendConfig, DEFAULT_SYSTEM_PROMPT, DEFAULT_TEMPERATURE};
use common::data::RelayRequest;
use common::proxy::chat_relay::chat_relay;
use futures_util::{Stream, StreamExt, pin_mut};
use reqwest::StatusCode;
use tracing::{info, warn};
use volo_http::{
    response::Response,
    server::{
        IntoResponse,
        extract::Json,
        response::sse::{Event, Sse},
        route::{Router, post},
    },
};

/// The route the chat page talks to. Backend configuration is resolved from
/// the environment on every call, then one relay invocation is forwarded to
/// the client as SSE data frames.
async fn chat_handler(Json(body): Json<ChatBody>) -> Response {
    let config = match BackendConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response();
        }
    };
    let http_client = match build_http_client() {
        Ok(client) => client,
        Err(err) => {
            return (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response();
        }
    };

    let ChatBody {
        model,
        messages,
        key,
        prompt,
        temperature,
    } = body;
    info!(model=%model, history_len = messages.len(), "recv chat request");

    let request = RelayRequest {
        model,
        system_prompt: if prompt.is_empty() {
            DEFAULT_SYSTEM_PROMPT.into()
        } else {
            prompt
        },
        temperature: temperature.unwrap_or(DEFAULT_TEMPERATURE),
        api_key: key,
        history: messages,
    };

    match chat_relay(&http_client, &config, request).await {
        Ok(relay_stream) => create_sse_response(relay_stream).await.into_response(),
        Err(err) => {
            warn!("relay failed: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
        }
    }
}

async fn create_sse_response<S>(input: S) -> Sse<impl Stream<Item = Result<Event>>>
where
    S: Stream<Item = common::error::Result<Bytes>> + 'static,
{
    let stream = stream! {
        pin_mut!(input);
        while let Some(chunk) = input.next().await {
            match chunk {
                Ok(bytes) => {
                    let text = String::from_utf8_lossy(&bytes).into_owned();
                    yield Ok(Event::new().data(text));
                }
                Err(err) => {
                    warn!("relay stream error: {err}");
                    yield Err(Error::Relay(err));
                    break;
                }
            }
        }
    };

    Sse::new(stream)
}

pub fn chat_router() -> Router {
    Router::new().route("/api/chat", post(chat_handler))
}
