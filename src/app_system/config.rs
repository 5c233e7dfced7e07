use std::env;
use std::path::PathBuf;

use clap::Parser;

use crate::interpreter::PriceParser;

/// Languages whose locales write decimals with a comma.
const COMMA_DECIMAL_LANGUAGES: &[&str] = &[
    "bg", "ca", "cs", "da", "de", "el", "es", "et", "eu", "fi", "fr", "gl", "hr", "hu", "id",
    "it", "lt", "lv", "nb", "nl", "nn", "no", "pl", "pt", "ro", "ru", "sk", "sl", "sr", "sv",
    "tr", "uk", "vi",
];

/// Runtime configuration, read from the command line and the environment.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "property_registry",
    version,
    about = "In-memory registry of property owners and real-estate listings"
)]
pub struct Config {
    /// Directory searched for batch command files.
    #[arg(long, env = "PROPERTY_REGISTRY_INPUT_DIR", default_value = ".")]
    pub input_dir: PathBuf,

    /// File-name pattern of batch command files (`*` and `?` wildcards).
    #[arg(long, env = "PROPERTY_REGISTRY_PATTERN", default_value = "properties*.txt")]
    pub pattern: String,

    /// Exit after the batch files instead of reading commands from stdin.
    #[arg(long)]
    pub no_interactive: bool,

    /// Decimal separator tried when a price does not parse with a period.
    /// Derived from the locale environment when unset.
    #[arg(long, env = "PROPERTY_REGISTRY_DECIMAL_SEPARATOR")]
    pub decimal_separator: Option<char>,

    /// Tracing filter directives.
    #[arg(long, env = "RUST_LOG", default_value = "warn")]
    pub log_filter: String,

    /// Capacity of the registry request channel.
    #[arg(long, default_value_t = 32, value_parser = parse_buffer_size)]
    pub buffer_size: usize,
}

impl Config {
    pub fn price_parser(&self) -> PriceParser {
        PriceParser::new(self.decimal_separator.unwrap_or_else(locale_decimal_separator))
    }
}

fn parse_buffer_size(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("buffer size must be at least 1".to_string()),
        Ok(size) => Ok(size),
        Err(e) => Err(e.to_string()),
    }
}

/// Decimal separator of the numeric locale, following POSIX precedence
/// (`LC_ALL`, then `LC_NUMERIC`, then `LANG`).
pub fn locale_decimal_separator() -> char {
    ["LC_ALL", "LC_NUMERIC", "LANG"]
        .iter()
        .filter_map(|key| env::var(key).ok())
        .find(|value| !value.is_empty())
        .map_or('.', |locale| decimal_separator_for_locale(&locale))
}

/// Maps a locale name such as `es_ES.UTF-8` to its decimal separator.
pub fn decimal_separator_for_locale(locale: &str) -> char {
    let language = locale
        .split(['_', '-', '.', '@'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    if COMMA_DECIMAL_LANGUAGES.contains(&language.as_str()) {
        ','
    } else {
        '.'
    }
}
