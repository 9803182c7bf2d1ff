pub mod config;
pub mod data;
pub mod error;
pub mod messages;
pub mod proxy;
pub mod stream;

mod log;

pub use log::logging_stdout;
pub use reqwest::RequestBuilder;
