use clap::Parser;
use dnsx_application::RunQueriesUseCase;
use dnsx_infrastructure::system::resolve_nameserver;
use dnsx_infrastructure::{TransportDispatcher, WireCodec};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::debug;

mod args;
mod bootstrap;
mod render;

use args::Cli;
use render::Renderer;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    bootstrap::init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("dnsx: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = bootstrap::load_config(cli.config.as_deref())?;
    let options = cli.into_options(&config)?;

    // Fail fast on malformed options before touching the network.
    options.validate()?;

    let kind = options.transport_kind();
    let protocol = resolve_nameserver(options.nameserver.as_deref(), kind)?;
    debug!(transport = %kind, nameserver = %protocol, "Resolved nameserver");

    let renderer = Renderer::new(&options);
    let use_case = RunQueriesUseCase::new(
        Arc::new(WireCodec::new()),
        Arc::new(TransportDispatcher::new(protocol)),
        options,
    );

    let outcomes = use_case.execute().await?;
    print!("{}", renderer.render(&outcomes));
    Ok(())
}
