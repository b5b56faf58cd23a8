use std::path::Path;

use crate::errors::{ReorderError, ReorderResult};

pub fn ensure_file_exists(path: &Path) -> ReorderResult<()> {
    if !path.exists() {
        Err(ReorderError::FileNotFound(path.to_path_buf()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_file_exists_missing_path() {
        let err = ensure_file_exists(Path::new("/no/such/classpath.txt")).unwrap_err();
        assert!(matches!(err, ReorderError::FileNotFound(_)));
    }
}
