//! Serve command implementation

use crate::config::Config;
use crate::relay::AlertHandler;
use clap::Args;

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Override the configured bind address
    #[arg(short, long)]
    pub bind: Option<String>,
}

impl ServeArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let bind_addr = self
            .bind
            .clone()
            .unwrap_or_else(|| config.server.bind_addr.clone());

        let handler = AlertHandler::from_config(config);
        crate::server::start_server(handler, &bind_addr).await
    }
}
