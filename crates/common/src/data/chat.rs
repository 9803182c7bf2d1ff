use crate::messages::Message;
use faststr::FastStr;
use serde::Serialize;

/// Everything one relay invocation needs. Built once per call and consumed
/// when the upstream request is issued.
#[derive(Debug, Clone)]
pub struct RelayRequest {
    pub model:         FastStr,
    pub system_prompt: FastStr,
    pub temperature:   f32,
    pub api_key:       FastStr,
    pub history:       Vec<Message>,
}

/// Upstream chat-completions body. `model` and `data_sources` are mutually
/// exclusive: the direct-vendor variant sets the former, the Azure
/// retrieval variant the latter.
#[derive(Debug, Serialize)]
pub struct ChatCompletionsBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model:        Option<FastStr>,
    #[serde(rename = "dataSources", skip_serializing_if = "Option::is_none")]
    pub data_sources: Option<Vec<DataSource>>,
    pub messages:     Vec<Message>,
    pub max_tokens:   i32,
    pub temperature:  f32,
    pub stream:       bool,
}

#[derive(Debug, Serialize)]
pub struct DataSource {
    #[serde(rename = "type")]
    pub ty:         FastStr,
    pub parameters: SearchParameters,
}

// topNDocuments and inScope go over the wire as strings, as the service
// expects them.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParameters {
    pub query_type:             FastStr,
    pub top_n_documents:        FastStr,
    pub in_scope:               FastStr,
    pub semantic_configuration: FastStr,
    pub endpoint:               FastStr,
    pub key:                    FastStr,
    pub index_name:             FastStr,
    pub role_information:       FastStr,
}
