use std::sync::Arc;

use anyhow::Context;
use outbreak::cli;
use outbreak::console::Console;
use outbreak::io::StdoutWriter;
use outbreak::SessionStore;

fn init_logging(level: log::LevelFilter) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    // stdout carries frames, so logs go to stderr only
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .context("initialize logger")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::parse();
    init_logging(args.log_level.into())?;

    let config = args.store_config();
    log::info!(
        "idle timeout {:?}, sweep every {:?}",
        config.idle_timeout,
        config.sweep_interval
    );
    let store = Arc::new(SessionStore::new(config).context("load board")?);
    let sweeper = store.clone().spawn_sweeper();

    let mut console = Console::new(store, StdoutWriter);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let result = console.run(stdin).await.context("read stdin");

    sweeper.abort();
    result
}
