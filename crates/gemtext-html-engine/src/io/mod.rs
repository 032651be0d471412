use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error on {path}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl IoError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        IoError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Read a gemtext file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| IoError::io(path, source))
}

/// Write rendered HTML to a file, verbatim
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| IoError::io(parent, source))?;
    }

    fs::write(path, content).map_err(|source| IoError::io(path, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_dir, create_test_file};

    #[test]
    fn test_read_file_success() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "test.gmi", "# Test Content\n\nParagraph");

        let content = read_file(&path).unwrap();
        assert_eq!(content, "# Test Content\n\nParagraph");
    }

    #[test]
    fn test_read_file_not_found() {
        let dir = create_test_dir();
        let result = read_file(&dir.path().join("nonexistent.gmi"));
        assert!(result.is_err());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_read_directory_is_io_error() {
        let dir = create_test_dir();
        let result = read_file(dir.path());
        assert!(matches!(result, Err(IoError::Io { .. })));
    }

    #[test]
    fn test_read_invalid_utf8_is_io_error() {
        let dir = create_test_dir();
        let path = dir.path().join("binary.gmi");
        std::fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();

        let err = read_file(&path).unwrap_err();
        assert!(err.to_string().contains("binary.gmi"));
    }

    #[test]
    fn test_write_file_success() {
        let dir = create_test_dir();
        let path = dir.path().join("out.html");
        let content = "<p>hello</p>";

        write_file(&path, content).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_write_file_creates_parent_directories() {
        let dir = create_test_dir();
        let path = dir.path().join("site").join("posts").join("out.html");

        write_file(&path, "<p>nested</p>").unwrap();

        assert_eq!(read_file(&path).unwrap(), "<p>nested</p>");
        assert!(dir.path().join("site").join("posts").is_dir());
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "existing.html", "<p>old</p>");

        write_file(&path, "<p>new</p>").unwrap();

        assert_eq!(read_file(&path).unwrap(), "<p>new</p>");
    }

    #[test]
    fn test_write_into_file_as_directory_fails() {
        let dir = create_test_dir();
        let blocker = create_test_file(&dir, "blocker", "not a directory");

        let result = write_file(&blocker.join("out.html"), "<p></p>");
        assert!(matches!(result, Err(IoError::Io { .. })));
    }
}
