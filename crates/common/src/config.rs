use crate::error::{Error, Result};
use faststr::FastStr;

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are an AI Assistant that is an expert at summarizing the content of databases. Follow the user's instructions carefully as pertains to the experiments index. Respond using markdown without citations or JSON.";

pub const DEFAULT_TEMPERATURE: f32 = 0.2;

pub const MAX_TOKENS: i32 = 1000;

pub(crate) const ROLE_INFORMATION: &str = "Do not provide any role data from the tool role, such as citations in the prompt response.  Query the specified index directly and only provide useful data.";

#[derive(Debug, Clone)]
pub struct AzureSearchConfig {
    pub endpoint:               FastStr,
    pub key:                    FastStr,
    pub index_name:             FastStr,
    pub semantic_configuration: FastStr,
}

/// Which backend the relay talks to, with everything variant-specific
/// resolved up front. Read from the environment once per call.
#[derive(Debug, Clone)]
pub enum BackendConfig {
    OpenAi {
        api_host:     FastStr,
        organization: Option<FastStr>,
        api_key:      Option<FastStr>,
    },
    Azure {
        api_host:      FastStr,
        deployment_id: FastStr,
        api_version:   FastStr,
        api_key:       Option<FastStr>,
        search:        AzureSearchConfig,
    },
}

impl BackendConfig {
    pub fn from_env() -> Result<Self> {
        let api_host = env_or("OPENAI_API_HOST", "https://api.openai.com");
        let api_key = env_opt("OPENAI_API_KEY");
        match std::env::var("OPENAI_API_TYPE").as_deref() {
            Ok("azure") => Ok(Self::Azure {
                api_host,
                deployment_id: env_required("AZURE_DEPLOYMENT_ID")?,
                api_version: env_or("OPENAI_API_VERSION", "2023-06-01-preview"),
                api_key,
                search: AzureSearchConfig {
                    endpoint:               env_required("COGNITIVE_SEARCH_ENDPOINT")?,
                    key:                    env_required("COGNITIVE_SEARCH_KEY")?,
                    index_name:             env_required("COGNITIVE_SEARCH_INDEX")?,
                    semantic_configuration: env_required("COGNITIVE_SEMANTIC_PROFILE")?,
                },
            }),
            _ => Ok(Self::OpenAi {
                api_host,
                organization: env_opt("OPENAI_ORGANIZATION"),
                api_key,
            }),
        }
    }

    pub fn endpoint(&self) -> FastStr {
        match self {
            Self::OpenAi { api_host, .. } => format!("{api_host}/v1/chat/completions").into(),
            Self::Azure {
                api_host,
                deployment_id,
                api_version,
                ..
            } => format!(
                "{api_host}/openai/deployments/{deployment_id}/extensions/chat/completions?api-version={api_version}"
            )
            .into(),
        }
    }

    pub fn fallback_api_key(&self) -> Option<&FastStr> {
        match self {
            Self::OpenAi { api_key, .. } | Self::Azure { api_key, .. } => api_key.as_ref(),
        }
    }
}

fn env_or(name: &str, default: &str) -> FastStr {
    std::env::var(name).unwrap_or_else(|_| default.to_owned()).into()
}

fn env_opt(name: &str) -> Option<FastStr> {
    std::env::var(name).ok().filter(|v| !v.is_empty()).map(Into::into)
}

fn env_required(name: &'static str) -> Result<FastStr> {
    std::env::var(name)
        .map(Into::into)
        .map_err(|_| Error::MissingEnv(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_endpoint() {
        let config = BackendConfig::OpenAi {
            api_host:     "https://api.openai.com".into(),
            organization: None,
            api_key:      None,
        };
        assert_eq!(
            config.endpoint().as_str(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_azure_endpoint() {
        let config = BackendConfig::Azure {
            api_host:      "https://example.openai.azure.com".into(),
            deployment_id: "gpt-35".into(),
            api_version:   "2023-06-01-preview".into(),
            api_key:       None,
            search:        AzureSearchConfig {
                endpoint:               "https://search.example.net".into(),
                key:                    "sk".into(),
                index_name:             "experiments".into(),
                semantic_configuration: "default".into(),
            },
        };
        assert_eq!(
            config.endpoint().as_str(),
            "https://example.openai.azure.com/openai/deployments/gpt-35/extensions/chat/completions?api-version=2023-06-01-preview"
        );
    }
}
