use clap::Parser;
use simpletags::application::{ListTagsService, RenderService, UnresolvedPolicy};
use simpletags::cli::{format_tag_list, Cli, Commands};
use simpletags::error::SimpletagsError;
use std::str::FromStr;

fn main() {
    init_tracing();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr, only when `RUST_LOG` is set (e.g. `RUST_LOG=simpletags=debug`)
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn run(cli: Cli) -> Result<(), SimpletagsError> {
    match cli.command {
        Commands::Render { input, unresolved } => {
            let policy = UnresolvedPolicy::from_str(&unresolved).map_err(SimpletagsError::Config)?;
            let output = RenderService::new(input.into(), policy).execute()?;
            print!("{}", output);
            Ok(())
        }
        Commands::Tags { input } => {
            let parsed = ListTagsService::new(input.into()).execute()?;
            print!("{}", format_tag_list(&parsed.tags));
            Ok(())
        }
    }
}
