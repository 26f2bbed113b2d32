use crate::config::model::{SlugCollisions, ThemeOptions};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const CONTENT_PATH_VAR: &str = "EVENTS_CONTENT_PATH";
pub const BASE_PATH_VAR: &str = "EVENTS_BASE_PATH";
pub const OUTPUT_PATH_VAR: &str = "EVENTS_OUTPUT_PATH";
pub const SLUG_COLLISIONS_VAR: &str = "EVENTS_SLUG_COLLISIONS";

pub fn load_config() -> Result<ThemeOptions, ConfigError> {
    load_config_from(|name| env::var(name).ok())
}

/// Builds the options from any variable lookup, falling back to the defaults.
pub fn load_config_from<F>(lookup: F) -> Result<ThemeOptions, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = ThemeOptions::default();

    Ok(ThemeOptions {
        content_path: load_path_config(&lookup, CONTENT_PATH_VAR)?
            .unwrap_or(defaults.content_path),
        base_path: load_string_config(&lookup, BASE_PATH_VAR)?.unwrap_or(defaults.base_path),
        output_path: load_path_config(&lookup, OUTPUT_PATH_VAR)?
            .unwrap_or(defaults.output_path),
        slug_collisions: load_slug_collisions_config(&lookup)?
            .unwrap_or(defaults.slug_collisions),
    })
}

fn load_string_config<F>(lookup: &F, name: &'static str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Err(ConfigError::Empty(name)),
        Some(value) => Ok(Some(value)),
    }
}

fn load_path_config<F>(lookup: &F, name: &'static str) -> Result<Option<PathBuf>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    Ok(load_string_config(lookup, name)?.map(PathBuf::from))
}

fn load_slug_collisions_config<F>(lookup: &F) -> Result<Option<SlugCollisions>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match load_string_config(lookup, SLUG_COLLISIONS_VAR)? {
        None => Ok(None),
        Some(value) => SlugCollisions::from_str(&value.to_lowercase())
            .map(Some)
            .map_err(|_| ConfigError::InvalidSlugCollisions(value)),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid config '{0}'. Expected a non-empty value")]
    Empty(&'static str),
    #[error(
        "Invalid config 'EVENTS_SLUG_COLLISIONS': '{0}'. Expected 'allow', 'suffix' or 'reject'"
    )]
    InvalidSlugCollisions(String),
}
