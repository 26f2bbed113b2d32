use std::path::PathBuf;

pub const DEFAULT_CONTENT_PATH: &str = "data";
pub const DEFAULT_BASE_PATH: &str = "/";
pub const DEFAULT_OUTPUT_PATH: &str = "public";

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeOptions {
    /// Directory the event data files are read from
    pub content_path: PathBuf,
    /// URL prefix of the index page and every event page
    pub base_path: String,
    /// Where page data is written after the pages are created
    pub output_path: PathBuf,
    pub slug_collisions: SlugCollisions,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            content_path: PathBuf::from(DEFAULT_CONTENT_PATH),
            base_path: DEFAULT_BASE_PATH.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            slug_collisions: SlugCollisions::default(),
        }
    }
}

/// What to do when two events end up on the same page path.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    strum::EnumString,
    strum::Display,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum SlugCollisions {
    /// Keep every page on the shared path
    #[default]
    Allow,
    /// Append `-2`, `-3`, ... to the later pages
    Suffix,
    /// Fail the build
    Reject,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test_log::test]
    fn should_default_to_data_directory_and_root_base_path() {
        let options = ThemeOptions::default();

        assert_eq!(options.content_path, PathBuf::from("data"));
        assert_eq!(options.base_path, "/");
        assert_eq!(options.slug_collisions, SlugCollisions::Allow);
    }

    #[test_log::test]
    fn should_parse_collision_policy_names() {
        assert_eq!(SlugCollisions::from_str("suffix").unwrap(), SlugCollisions::Suffix);
        assert_eq!(SlugCollisions::from_str("reject").unwrap(), SlugCollisions::Reject);
        assert!(SlugCollisions::from_str("rename").is_err());
        assert_eq!(SlugCollisions::Allow.to_string(), "allow");
    }
}
