use super::export;
use crate::config::Config;
use crate::session_loader::parse_session_ids;
use crate::types::SheetFormat;
use anyhow::{Context, Result, bail};
use chatsheet_client::SessionClient;
use std::path::Path;
use tracing::{info, warn};

pub struct FetchOptions<'a> {
    pub ids: &'a [String],
    pub format: SheetFormat,
    pub output: Option<&'a Path>,
    pub base_url: Option<String>,
    pub concurrency: Option<usize>,
}

pub fn handle(config: Config, options: FetchOptions<'_>) -> Result<()> {
    let session_ids = parse_session_ids(options.ids);
    if session_ids.is_empty() {
        bail!("no session ids given");
    }

    let mut api = config.api;
    if let Some(base_url) = options.base_url {
        api.base_url = Some(base_url);
    }
    if let Some(concurrency) = options.concurrency {
        api.concurrency = concurrency;
    }

    let client = SessionClient::new(&api)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    info!(count = session_ids.len(), "fetching sessions");
    let sessions = runtime.block_on(client.fetch_sessions(&session_ids));

    if sessions.is_empty() {
        warn!("no sessions could be retrieved");
    }

    export::handle(sessions, options.format, options.output)
}
