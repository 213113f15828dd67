use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Prefix marking a token specifier as a file reference.
pub const FILE_PREFIX: char = '@';

/// Resolve a token specifier to the bearer token.
///
/// `@path` reads the first line of `path` with its line terminator removed.
/// Anything else is the token itself.
pub fn resolve_token(spec: &str) -> Result<String, AppError> {
    match spec.strip_prefix(FILE_PREFIX) {
        Some(path) => read_token_file(Path::new(path)),
        None => Ok(spec.to_string()),
    }
}

fn read_token_file(path: &Path) -> Result<String, AppError> {
    let file = File::open(path).map_err(|source| AppError::TokenFile {
        path: path.to_path_buf(),
        source,
    })?;

    let mut line = String::new();
    let read = BufReader::new(file)
        .read_line(&mut line)
        .map_err(|source| AppError::TokenFile {
            path: path.to_path_buf(),
            source,
        })?;
    if read == 0 {
        return Err(AppError::EmptyToken(PathBuf::from(path)));
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
