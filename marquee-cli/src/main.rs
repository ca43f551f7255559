//! `marquee`: recommend films similar to a chosen title.

mod cli;
mod commands;

use clap::Parser;

use marquee_core::MarqueeConfig;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = MarqueeConfig::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config.validate()?;

    marquee_observability::init_tracing(&config.observability);
    tracing::debug!(version = marquee_core::constants::VERSION, "marquee starting");

    commands::run(&cli, &config)
}
