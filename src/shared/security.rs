use crate::shared::error::GraphError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest cache file we are willing to parse (50 MB).
///
/// A real dependency cache holds a few thousand short lists; anything bigger
/// is almost certainly not ours.
pub const MAX_CACHE_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Checks an existing file before it is read.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if the path cannot be inspected, is a symbolic link,
/// is not a regular file, or is larger than `max_size`.
pub fn validate_readable_file(path: &Path, file_description: &str, max_size: u64) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read {} metadata for {}: {}",
            file_description,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        return Err(GraphError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Point the option at a regular file instead of a link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > max_size {
        return Err(GraphError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "{} is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_description,
                metadata.len(),
                max_size
            ),
            hint: "Delete the file or choose another location".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Checks a path that is about to be replaced by an atomic rename.
///
/// A missing target is fine. An existing symbolic link is refused, since the
/// rename would silently replace the link rather than the file it points to.
/// The parent directory must exist.
pub fn validate_write_target(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if parent != Path::new("") && !parent.is_dir() {
            return Err(GraphError::FileWriteError {
                path: path.to_path_buf(),
                details: format!("Parent directory does not exist: {}", parent.display()),
            }
            .into());
        }
    }

    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => Err(GraphError::SecurityError {
            path: path.to_path_buf(),
            reason: "Target is a symbolic link; refusing to replace it".to_string(),
            hint: "Write to a regular file path instead".to_string(),
        }
        .into()),
        Ok(metadata) if metadata.is_dir() => Err(GraphError::FileWriteError {
            path: path.to_path_buf(),
            details: "Target is a directory".to_string(),
        }
        .into()),
        _ => Ok(()),
    }
}

/// Directory that will hold the temp file for an atomic write to `path`.
///
/// The temp file has to live on the same filesystem as the target for the
/// final rename to be atomic, so this is always the target's own directory.
pub fn staging_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if parent != Path::new("") => parent,
        _ => Path::new("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_readable_file_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("deps_cache.json");
        fs::write(&file_path, "{}").unwrap();

        let result = validate_readable_file(&file_path, "cache file", MAX_CACHE_FILE_SIZE);
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_readable_file_nonexistent() {
        let path = PathBuf::from("/nonexistent/deps_cache.json");
        let result = validate_readable_file(&path, "cache file", MAX_CACHE_FILE_SIZE);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_readable_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_readable_file(temp_dir.path(), "cache file", MAX_CACHE_FILE_SIZE);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[test]
    fn test_validate_readable_file_too_large() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("big.json");
        fs::write(&file_path, "0123456789").unwrap();

        let result = validate_readable_file(&file_path, "cache file", 4);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_readable_file_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = validate_readable_file(&link, "cache file", MAX_CACHE_FILE_SIZE);
        assert!(result.unwrap_err().to_string().contains("symbolic link"));
    }

    #[test]
    fn test_validate_write_target_missing_file_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_write_target(&temp_dir.path().join("new.png"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_write_target_missing_parent() {
        let result = validate_write_target(Path::new("/nonexistent/dir/graph.png"));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Parent directory does not exist"));
    }

    #[test]
    fn test_validate_write_target_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_write_target(temp_dir.path());
        assert!(result.unwrap_err().to_string().contains("directory"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_write_target_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.png");
        let link = temp_dir.path().join("link.png");
        fs::write(&target, "x").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = validate_write_target(&link);
        assert!(result.unwrap_err().to_string().contains("symbolic link"));
    }

    #[test]
    fn test_staging_dir() {
        assert_eq!(staging_dir(Path::new("graph.png")), Path::new("."));
        assert_eq!(staging_dir(Path::new("out/graph.png")), Path::new("out"));
    }
}
