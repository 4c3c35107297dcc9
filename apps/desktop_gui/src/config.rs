use std::{collections::HashMap, fs};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub api_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080/api/v1".into(),
        }
    }
}

/// Defaults, then `directory.toml` in the working directory, then
/// environment variables. The command-line flag is applied by the caller
/// and wins over everything here.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("directory.toml") {
        apply_file_config(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("DIRECTORY_API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Ok(v) = std::env::var("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }

    settings.api_base_url = normalize_base_url(&settings.api_base_url);
    settings
}

fn apply_file_config(settings: &mut Settings, raw: &str) {
    if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
        if let Some(v) = file_cfg.get("api_base_url") {
            settings.api_base_url = v.clone();
        }
    }
}

/// The collection path is appended by the client; a configured trailing
/// slash or blank value must not produce a malformed URL.
pub fn normalize_base_url(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return Settings::default().api_base_url;
    }
    raw.trim_end_matches('/').to_string()
}
