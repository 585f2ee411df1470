use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lingo_cli::cli::commands::{detect, populate, status, translate};
use lingo_cli::cli::{Args, Command};
use lingo_cli::output::{self, OutputConfig};
use lingo_cli::translation::{print_languages, validate_language};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || std::env::var("NO_COLOR").is_ok(),
    });

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Detect {
            file,
            endpoint,
            model,
        }) => {
            let options = detect::DetectOptions {
                file,
                endpoint,
                model,
            };
            detect::run_detect(options).await?;
        }
        Some(Command::Populate {
            to,
            file,
            endpoint,
            model,
        }) => {
            validate_language(&to)?;

            let options = populate::PopulateOptions {
                to,
                file,
                endpoint,
                model,
            };
            populate::run_populate(options).await?;
        }
        Some(Command::Status { to }) => {
            validate_language(&to)?;
            status::run_status(&to)?;
        }
        None => {
            if let Some(ref lang) = args.to {
                validate_language(lang)?;
            }

            let options = translate::TranslateOptions {
                file: args.file,
                to: args.to,
                endpoint: args.endpoint,
                model: args.model,
                no_cache: args.no_cache,
                typing: args.typing,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
