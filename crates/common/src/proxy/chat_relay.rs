use crate::config::{AzureSearchConfig, BackendConfig, MAX_TOKENS, ROLE_INFORMATION};
use crate::data::{ChatCompletionsBody, DataSource, RelayRequest, RequestData, SearchParameters};
use crate::error::{Error, Result};
use crate::messages::Message;
use crate::stream::sse::{SseMessage, SseParser};
use async_stream::try_stream;
use bytes::Bytes;
use faststr::FastStr;
use futures_util::{Stream, StreamExt};
use reqwest::RequestBuilder;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

enum EventOutcome {
    Text(String),
    EndTurn,
}

/// Issues one chat-completions request upstream and exposes the assistant
/// text as a lazily-pulled byte stream.
///
/// A non-success status fails the call before any stream exists. Once
/// streaming, errors surface through the stream's own error channel and end
/// it; there is no retry and no recovery. Dropping the stream drops the
/// upstream response with it, which releases the connection.
pub async fn chat_relay(
    client: &reqwest::Client,
    config: &BackendConfig,
    request: RelayRequest,
) -> Result<impl Stream<Item = Result<Bytes>> + use<>> {
    let request_data = prepare_chat_completions(config, request)?;
    let builder = request_builder(request_data, client);
    let res = builder.send().await?;

    let status = res.status();
    if !status.is_success() {
        let text = res.text().await?;
        return Err(parse_error_response(text, status.as_u16()));
    }

    let mut body = res.bytes_stream();
    Ok(try_stream! {
        let mut parser = SseParser::new();
        let mut skip_first = true;
        'read: while let Some(chunk) = body.next().await {
            let chunk = chunk?;
            parser.feed(&chunk);
            while let Some(message) = parser.next_event() {
                match handle_event(&message, &mut skip_first)? {
                    EventOutcome::EndTurn => break 'read,
                    EventOutcome::Text(text) => {
                        if !text.is_empty() {
                            yield Bytes::from(text);
                        }
                    }
                }
            }
        }
    })
}

fn request_builder(request_data: RequestData, client: &reqwest::Client) -> RequestBuilder {
    let RequestData { url, body, headers } = request_data;
    let mut builder = client.post(url.as_str());
    for (k, v) in headers {
        builder = builder.header(k.as_str(), v.as_str());
    }
    builder = builder.json(&body);
    builder
}

fn prepare_chat_completions(config: &BackendConfig, request: RelayRequest) -> Result<RequestData> {
    let RelayRequest {
        model,
        system_prompt,
        temperature,
        api_key,
        history,
    } = request;

    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(Message::system(system_prompt));
    messages.extend(history);

    let body = match config {
        BackendConfig::OpenAi { .. } => openai_body(model, messages, temperature),
        BackendConfig::Azure { search, .. } => azure_body(search, messages, temperature),
    };

    let mut request_data = RequestData::new(config.endpoint(), serde_json::to_value(&body)?);

    let key = if api_key.is_empty() {
        config.fallback_api_key().cloned()
    } else {
        Some(api_key)
    };
    match config {
        BackendConfig::OpenAi { organization, .. } => {
            if let Some(key) = key {
                request_data.bearer_auth(key);
            }
            if let Some(org) = organization {
                request_data.header("OpenAI-Organization", org.clone());
            }
        }
        BackendConfig::Azure { .. } => {
            if let Some(key) = key {
                request_data.api_key_auth(key);
            }
        }
    }
    Ok(request_data)
}

fn openai_body(model: FastStr, messages: Vec<Message>, temperature: f32) -> ChatCompletionsBody {
    ChatCompletionsBody {
        model: Some(model),
        data_sources: None,
        messages,
        max_tokens: MAX_TOKENS,
        temperature,
        stream: true,
    }
}

fn azure_body(
    search: &AzureSearchConfig,
    messages: Vec<Message>,
    temperature: f32,
) -> ChatCompletionsBody {
    let parameters = SearchParameters {
        query_type:             "semantic".into(),
        top_n_documents:        "10".into(),
        in_scope:               "true".into(),
        semantic_configuration: search.semantic_configuration.clone(),
        endpoint:               search.endpoint.clone(),
        key:                    search.key.clone(),
        index_name:             search.index_name.clone(),
        role_information:       ROLE_INFORMATION.into(),
    };
    ChatCompletionsBody {
        model: None,
        data_sources: Some(vec![DataSource {
            ty: "AzureCognitiveSearch".into(),
            parameters,
        }]),
        messages,
        max_tokens: MAX_TOKENS,
        temperature,
        stream: true,
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    message: Option<FastStr>,
    #[serde(default, rename = "type")]
    ty:      Option<FastStr>,
    #[serde(default)]
    param:   Option<FastStr>,
    #[serde(default)]
    code:    Option<FastStr>,
}

fn parse_error_response(text: String, status: u16) -> Error {
    match serde_json::from_str::<ErrorEnvelope>(&text) {
        Ok(ErrorEnvelope { error }) => Error::UpstreamApi {
            message:    error.message.unwrap_or_default(),
            error_type: error.ty.unwrap_or_default(),
            param:      error.param.unwrap_or_default(),
            code:       error.code.unwrap_or_default(),
        },
        Err(_) => Error::InvalidResponseData(text.into(), status),
    }
}

fn handle_event(message: &SseMessage, skip_first: &mut bool) -> Result<EventOutcome> {
    let data: Value = serde_json::from_str(&message.data)?;
    debug!("stream-data: {data}");
    if data["choices"][0]["messages"][0]["end_turn"]
        .as_bool()
        .unwrap_or_default()
    {
        return Ok(EventOutcome::EndTurn);
    }
    let mut text = String::new();
    if let Some(fragments) = data["choices"][0]["messages"].as_array() {
        for fragment in fragments {
            // the first fragment of the whole invocation is never forwarded
            if *skip_first {
                *skip_first = false;
                continue;
            }
            if let Some(content) = fragment["delta"]["content"].as_str() {
                text.push_str(content);
            }
        }
    }
    Ok(EventOutcome::Text(text))
}
