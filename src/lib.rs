pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod pagination;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::config::settings::AppConfig;
use crate::services::ListingsService;

pub use crate::api::ListingsClient;
pub use crate::domain::models::{JobListing, Page, PositionFunction};
pub use crate::http::{HttpTransport, Transport};
pub use crate::pagination::PageSize;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn handle(cli: &Cli) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env().with_base_url(cli.base_url.clone());
        let mut service = ListingsService::new(config, cli.json)?;
        service.run(&cli.command).await
    })
}
