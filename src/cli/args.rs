use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lingo")]
#[command(about = "Cache-first translation CLI with typing-style progressive output")]
#[command(version)]
pub struct Args {
    /// File to translate (reads from stdin if not provided)
    pub file: Option<String>,

    /// Target language code (ISO 639-1, e.g., ja, es, zh)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// API endpoint URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Disable cache
    #[arg(short = 'n', long)]
    pub no_cache: bool,

    /// Reveal the translation character by character
    #[arg(long)]
    pub typing: bool,

    /// Suppress non-essential output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported language codes
    Languages,
    /// Detect the language of input text
    Detect {
        /// File to inspect (reads from stdin if not provided)
        file: Option<String>,

        /// API endpoint URL
        #[arg(short = 'e', long)]
        endpoint: Option<String>,

        /// Model name
        #[arg(short = 'm', long)]
        model: Option<String>,
    },
    /// Pre-populate the translation cache for a language
    Populate {
        /// Target language code (ISO 639-1, e.g., ja, es, zh)
        #[arg(short = 't', long = "to")]
        to: String,

        /// File with one message per line (defaults to the built-in corpus)
        file: Option<String>,

        /// API endpoint URL
        #[arg(short = 'e', long)]
        endpoint: Option<String>,

        /// Model name
        #[arg(short = 'm', long)]
        model: Option<String>,
    },
    /// Show cache population status for a language
    Status {
        /// Target language code (ISO 639-1, e.g., ja, es, zh)
        #[arg(short = 't', long = "to")]
        to: String,
    },
}
