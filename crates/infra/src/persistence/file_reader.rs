use std::{fs, path::Path};

use salon_agg_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Read the whole file as UTF-8 text, stripping a leading byte order mark.
    pub fn read_to_string(path: &Path) -> InfraResult<String> {
        let mut text = fs::read_to_string(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        if text.starts_with('\u{feff}') {
            text.drain(..'\u{feff}'.len_utf8());
        }
        Ok(text)
    }
}
