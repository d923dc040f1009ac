//! Save functionality for vocabulary models.

use phonotok_core::{LexiconError, Result, VocabularyModel};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

/// Save a vocabulary model as JSON.
///
/// Parent directories are created as needed. Output is UTF-8 without forced
/// ASCII escaping; indentation is a presentation choice, not part of the
/// format contract.
pub fn save_vocabulary(model: &VocabularyModel, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| LexiconError::Io {
                path: parent.to_path_buf(),
                err,
            })?;
        }
    }

    let file = File::create(path).map_err(|err| LexiconError::Io {
        path: path.to_path_buf(),
        err,
    })?;

    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, model)?;

    Ok(())
}
