use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::codesystem::document::CodeSystem;
use crate::codesystem::CodeSystemError;

impl CodeSystem {
    /// Serialize to pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, CodeSystemError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid `CodeSystem`.
    pub fn load(path: &Path) -> Result<Self, CodeSystemError> {
        let file = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    /// Write to `path` atomically: the document goes to a temporary file in the same
    /// directory, which then replaces the target.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary file cannot be created or written, or if it
    /// cannot be moved over the target.
    pub fn save(&self, path: &Path) -> Result<(), CodeSystemError> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        let mut temp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, self)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        temp.as_file().sync_all()?;

        // NamedTempFile is created owner-only; published documents are world-readable
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            temp.as_file()
                .set_permissions(std::fs::Permissions::from_mode(0o644))?;
        }

        temp.persist(path)?;
        info!(path = %path.display(), concepts = self.count, "wrote CodeSystem");
        Ok(())
    }
}
