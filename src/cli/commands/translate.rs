use anyhow::{Result, bail};
use futures_util::StreamExt;
use std::io::{self, Write};

use crate::config::ResolveOptions;
use crate::engine::{TranslationResult, deliver};
use crate::input::InputReader;
use crate::ui::Spinner;

use super::{build_engine, load_config};

pub struct TranslateOptions {
    pub file: Option<String>,
    pub to: Option<String>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub no_cache: bool,
    pub typing: bool,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let config = load_config(ResolveOptions {
        to: options.to.clone(),
        endpoint: options.endpoint.clone(),
        model: options.model.clone(),
    })?;

    let Some(to) = config.target_language.clone() else {
        bail!(
            "Missing required configuration: 'to' (target language)\n\n\
             Please provide it via:\n  \
             - CLI option: lingo --to <lang> <file>\n  \
             - Config file: ~/.config/lingo/config.toml"
        )
    };

    let source_text = InputReader::read(options.file.as_deref())?;

    if source_text.is_empty() {
        bail!("Error: Input is empty");
    }

    let engine = build_engine(&config, !options.no_cache)?;

    let spinner = Spinner::new("Translating...");
    let result = engine.translate(&source_text, &to).await;
    spinner.stop();

    match result {
        TranslationResult::Error { reason } => bail!("{reason}"),
        TranslationResult::Success { text, .. } => {
            if options.typing {
                type_out(&text, &to).await?;
            } else {
                print!("{text}");
                io::stdout().flush()?;
            }

            if !text.ends_with('\n') {
                println!();
            }
        }
    }

    Ok(())
}

/// Prints the translation progressively, one character at a time.
async fn type_out(text: &str, language: &str) -> Result<()> {
    let mut printed = 0;
    let mut chunks = deliver(text, language);

    while let Some(prefix) = chunks.next().await {
        print!("{}", &prefix[printed..]);
        io::stdout().flush()?;
        printed = prefix.len();
    }

    Ok(())
}
