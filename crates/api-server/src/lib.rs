pub use common::logging_stdout;
use std::net::SocketAddr;
use volo_http::Address;
use volo_http::server::{Router, Server};

pub mod error;
pub mod handlers;
pub mod requests;
pub mod tools;

pub async fn run_api_server(addr: SocketAddr) {
    let app = Router::new().merge(handlers::chat_router());
    let addr = Address::from(addr);
    Server::new(app).run(addr).await.unwrap();
}
