use anyhow::Result;

use crate::config::ResolveOptions;
use crate::engine::COMMON_MESSAGES;
use crate::input::InputReader;
use crate::status;
use crate::ui::{Spinner, Style};

use super::{build_engine, load_config};

pub struct PopulateOptions {
    pub to: String,
    pub file: Option<String>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
}

pub async fn run_populate(options: PopulateOptions) -> Result<()> {
    let config = load_config(ResolveOptions {
        to: None,
        endpoint: options.endpoint.clone(),
        model: options.model.clone(),
    })?;

    let messages: Vec<String> = match &options.file {
        Some(path) => InputReader::read_lines(Some(path.as_str()))?,
        None => COMMON_MESSAGES.iter().map(ToString::to_string).collect(),
    };

    let engine = build_engine(&config, true)?;

    status!(
        "Populating cache for {} ({} messages)",
        Style::code(&options.to),
        messages.len()
    );

    let refs: Vec<&str> = messages.iter().map(String::as_str).collect();

    let spinner = Spinner::new("Populating...");
    let report = engine.populate_cache(&options.to, &refs).await;
    spinner.stop();

    status!(
        "{} {} translated, {} failed",
        Style::success("Done:"),
        report.succeeded(),
        report.failures.len()
    );

    for failure in &report.failures {
        crate::warn!(
            "{} {} ({})",
            Style::warning("Failed:"),
            failure.message,
            Style::secondary(&failure.reason)
        );
    }

    Ok(())
}
