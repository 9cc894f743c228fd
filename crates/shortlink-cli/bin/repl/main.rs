mod cli;

use crate::cli::{LogFormatArg, CLI};
use anyhow::Context;
use clap::Parser;
use shortlink_cli::{LinkFormatter, Session, Step};
use shortlink_generator::RandomGenerator;
use shortlink_store::{ShortLinkStore, StoreSettings};
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    init_tracing(config.log_format);

    info!(
        base_url = %config.base_url,
        token_length = config.token_length,
        max_attempts = config.max_attempts,
        "starting shortlink session"
    );

    let generator =
        RandomGenerator::new(config.token_length).context("invalid --token-length")?;
    let settings = StoreSettings::builder()
        .max_attempts(config.max_attempts)
        .build();
    let store = ShortLinkStore::new(generator, settings).context("invalid --max-attempts")?;
    let session = Session::new(
        store,
        LinkFormatter::new(config.base_url),
        config.output.into(),
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }

        match session.handle_line(&line) {
            Step::Continue(reply) => {
                writeln!(stdout, "{reply}").context("failed to write to stdout")?;
            }
            Step::Quit => break,
        }
    }

    info!(
        total_created = session.store().total_created(),
        "shortlink session finished"
    );
    Ok(())
}

fn init_tracing(format: LogFormatArg) {
    // logs go to stderr so replies on stdout stay clean
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    match format {
        LogFormatArg::Text => builder.init(),
        LogFormatArg::Json => builder.json().init(),
    }
}
