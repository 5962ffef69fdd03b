use clap::Parser;
use heatstack::{cli, config, i18n};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 명령을 실행한다.
fn main() {
    let args = cli::Cli::parse();
    if let Err(err) = try_run(&args) {
        let tr = i18n::Translator::new(&i18n::resolve_language(&args.lang, None));
        eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
        std::process::exit(1);
    }
}

fn try_run(args: &cli::Cli) -> Result<(), Box<dyn std::error::Error>> {
    let (cfg, outcome) = config::load_with_outcome(&args.config)?;
    init_logging(&cfg.log_filter);
    match outcome {
        config::LoadOutcome::Loaded => {
            tracing::debug!(path = %args.config.display(), "config loaded")
        }
        config::LoadOutcome::DefaultsWritten => {
            tracing::info!(path = %args.config.display(), "default config written")
        }
    }
    cli::dispatch(args, cfg)?;
    Ok(())
}

fn init_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
