use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
#[tokio::main]
async fn main() -> Result<()> {
    let _guard = api_server::logging_stdout();
    dotenv().ok();

    let api_server_addr: SocketAddr = "0.0.0.0:3000".parse()?;

    api_server::run_api_server(api_server_addr).await;

    Ok(())
}
