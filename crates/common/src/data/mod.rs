mod chat;
mod request;

pub use chat::{ChatCompletionsBody, DataSource, RelayRequest, SearchParameters};
pub use request::RequestData;
