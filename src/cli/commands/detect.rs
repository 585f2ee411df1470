use anyhow::{Result, bail};

use crate::config::ResolveOptions;
use crate::input::InputReader;
use crate::translation::display_name;
use crate::ui::{Spinner, Style};

use super::{build_engine, load_config};

pub struct DetectOptions {
    pub file: Option<String>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
}

pub async fn run_detect(options: DetectOptions) -> Result<()> {
    let config = load_config(ResolveOptions {
        to: None,
        endpoint: options.endpoint.clone(),
        model: options.model.clone(),
    })?;

    let source_text = InputReader::read(options.file.as_deref())?;

    if source_text.is_empty() {
        bail!("Error: Input is empty");
    }

    // Detection never consults the cache
    let engine = build_engine(&config, false)?;

    let spinner = Spinner::new("Detecting...");
    let code = engine.detect_language(&source_text).await;
    spinner.stop();

    println!(
        "{} {}",
        Style::code(&code),
        Style::secondary(display_name(&code))
    );

    Ok(())
}
