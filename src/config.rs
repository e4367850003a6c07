use crate::error::Error;
use config::{Config, Environment};
use serde::Deserialize;

pub const ENV_PREFIX: &str = "SAME_SAME";
pub const DEFAULT_DIFF_TOOL: &str = "winmerge";

/// Session settings. Anything left unset here is asked for interactively.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_diff_tool")]
    pub diff_tool: String,
    #[serde(default)]
    pub root_dir: Option<String>,
    /// Space delimited, same syntax as the extensions prompt.
    #[serde(default)]
    pub extensions: Option<String>,
    /// Space delimited, same syntax as the file names prompt.
    #[serde(default)]
    pub file_names: Option<String>,
    #[serde(default = "default_progress")]
    pub progress: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            diff_tool: default_diff_tool(),
            root_dir: None,
            extensions: None,
            file_names: None,
            progress: default_progress(),
        }
    }
}

fn default_diff_tool() -> String {
    DEFAULT_DIFF_TOOL.to_string()
}

fn default_progress() -> bool {
    true
}

/// Reads `SAME_SAME_*` variables from the environment (after `.env` is loaded).
pub fn load_configuration() -> Result<AppConfig, Error> {
    load_from(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
}

fn load_from(source: Environment) -> Result<AppConfig, Error> {
    let builder = Config::builder().add_source(source).build()?;
    Ok(builder.try_deserialize::<AppConfig>()?)
}

/// Splits a space delimited filter answer. Blank input means "match all".
///
/// Leading whitespace yields an empty first fragment, so `" txt"` becomes
/// `["", "txt"]` and the joined alternation reads `|txt`.
pub fn split_filter_list(input: &str) -> Vec<String> {
    let mut parts: Vec<String> = input.split_whitespace().map(str::to_string).collect();
    if parts.is_empty() {
        return vec![".*".to_string()];
    }
    if input.starts_with(char::is_whitespace) {
        parts.insert(0, String::new());
    }
    parts
}
