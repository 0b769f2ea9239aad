//! Minuta - review a generated deed draft in the terminal

mod runtime;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use minuta::cli::CliArgs;
use minuta::{LocalGenerator, ReviewConfig};

use runtime::App;

fn main() -> Result<()> {
    minuta::tracing::init();

    let args = CliArgs::parse();
    let startup = args.into_config().map_err(|e| anyhow!(e))?;
    let config = ReviewConfig::load();

    tracing::info!(
        source = ?startup.source,
        export_path = %config.export_path().display(),
        "starting review session"
    );

    let mut app = App::new(config, startup, LocalGenerator);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    app.run(stdin.lock(), stdout.lock())
        .context("review session failed")?;

    Ok(())
}
