//! Loader for actor tuning files (RON, or JSON by extension).

use ron::Options;
use std::fs;
use std::path::Path;

use crate::movement::ActorConfig;

/// Error type for config loading failures.
#[derive(Debug)]
pub struct ConfigLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ConfigLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse tuning from a string. `json` selects the JSON syntax.
pub fn parse_actor_config(
    contents: &str,
    json: bool,
    file_name: &str,
) -> Result<ActorConfig, ConfigLoadError> {
    let parsed = if json {
        serde_json::from_str::<ActorConfig>(contents).map_err(|e| e.to_string())
    } else {
        ron_options()
            .from_str::<ActorConfig>(contents)
            .map_err(|e| e.to_string())
    };

    parsed.map_err(|message| ConfigLoadError {
        file: file_name.to_string(),
        message: format!("Parse error: {}", message),
    })
}

/// Load tuning from disk. Missing fields take their defaults.
pub fn load_actor_config(path: &Path) -> Result<ActorConfig, ConfigLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ConfigLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    let json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    parse_actor_config(&contents, json, &file_name)
}
