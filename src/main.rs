use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use summarist::cli::{copy_to_clipboard, run_once, Cli};
use summarist::logging::{init_file_tracing, init_stderr_tracing};
use summarist::service::{HttpSummarizer, SummarizeService};
use summarist::ui;
use summarist::workflow::Workflow;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.is_one_shot() {
        init_stderr_tracing();
    } else {
        init_file_tracing();
    }

    let config = cli.load_config().context("Failed to load configuration")?;
    let service: Arc<dyn SummarizeService> = Arc::new(
        HttpSummarizer::from_config(&config.service).context("Failed to create HTTP client")?,
    );
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let mut workflow = Workflow::new(service, runtime.handle().clone());

    let Some(content) = cli.content()? else {
        ui::run(&config, workflow, cli.length)?;
        return Ok(());
    };

    tracing::debug!(mode = ?content.mode(), length = %cli.length, "One-shot run");
    let summary = runtime.block_on(run_once(&mut workflow, content, cli.length))?;
    println!("{}", summary);
    if cli.copy {
        copy_to_clipboard(&workflow);
    }
    Ok(())
}
