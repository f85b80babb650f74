use std::fs;
use std::path::Path;

use tracing::debug;

use crate::errors::LoadError;

/// Read a source file into memory.
pub fn load(path: impl AsRef<Path>) -> Result<String, LoadError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| LoadError {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = source.len(), "loaded source");
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::load;

    #[test]
    fn missing_file_reports_path() {
        let err = load("definitely/not/here.lox").expect_err("file should be missing");
        assert!(err.to_string().starts_with("could not read 'definitely/not/here.lox'"));
    }
}
