use std::fs;
use std::io;
use std::path::Path;
use tracing::info;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Provisioned {
    Created,
    AlreadyExists,
}

/// Makes sure the content directory exists before any content is read.
/// Only the last path component is created.
pub fn ensure_content_dir(content_path: &Path) -> io::Result<Provisioned> {
    if content_path.exists() {
        return Ok(Provisioned::AlreadyExists);
    }

    info!("creating the {} directory", content_path.display());
    fs::create_dir(content_path)?;

    Ok(Provisioned::Created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn when_directory_is_missing_should_create_it() {
        let root = TempDir::new().unwrap();
        let content_path = root.path().join("data");

        let result = ensure_content_dir(&content_path).unwrap();

        assert_eq!(result, Provisioned::Created);
        assert!(content_path.is_dir());
        assert!(logs_contain(&format!(
            "creating the {} directory",
            content_path.display()
        )));
    }

    #[test]
    #[traced_test]
    fn when_directory_exists_should_leave_it_untouched() {
        let root = TempDir::new().unwrap();
        let content_path = root.path().join("data");
        fs::create_dir(&content_path).unwrap();
        fs::write(content_path.join("events.yml"), "[]").unwrap();
        let modified_before = fs::metadata(&content_path).unwrap().modified().unwrap();

        let result = ensure_content_dir(&content_path).unwrap();

        assert_eq!(result, Provisioned::AlreadyExists);
        assert_eq!(
            fs::metadata(&content_path).unwrap().modified().unwrap(),
            modified_before
        );
        assert_eq!(fs::read_dir(&content_path).unwrap().count(), 1);
        assert!(!logs_contain("creating the"));
    }

    #[test_log::test]
    fn when_parent_is_missing_should_fail() {
        let root = TempDir::new().unwrap();
        let content_path = root.path().join("site").join("data");

        let result = ensure_content_dir(&content_path);

        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
