use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Fetch {
            ids,
            format,
            output,
            base_url,
            concurrency,
        } => {
            let config = Config::load(cli.config.as_deref())?;
            handlers::fetch::handle(
                config,
                handlers::fetch::FetchOptions {
                    ids: &ids,
                    format,
                    output: output.as_deref(),
                    base_url,
                    concurrency,
                },
            )
        }

        Commands::Convert {
            input,
            format,
            output,
        } => handlers::convert::handle(&input, format, output.as_deref()),
    }
}
