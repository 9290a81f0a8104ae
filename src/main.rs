use anyhow::Context;
use clap::Parser;

use counter_variants::cli::Cli;
use counter_variants::config::Config;
use counter_variants::counters::RootComposer;
use counter_variants::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let path = cli.config_path();
    let mut config = Config::load_from(&path)
        .with_context(|| format!("loading {}", path.display()))?;
    cli.apply(&mut config);
    config.validate()?;

    if cli.print {
        print!("{}", RootComposer::from_config(&config).render_text());
        return Ok(());
    }

    tracing::info!(
        commit_mode = config.ui.commit_mode.as_str(),
        tick_rate_ms = config.ui.tick_rate_ms,
        "starting"
    );
    counter_variants::ui::runtime::run(&config)
}
