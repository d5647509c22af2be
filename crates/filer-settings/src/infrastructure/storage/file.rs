//! `std::fs` implementation of [`SettingsBackend`].

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::application::store::{SettingsBackend, StoreError};

use super::paths::ProfileResolver;

/// Reads and writes settings files on the local file system.
#[derive(Default)]
pub struct FileBackend {
    resolver: ProfileResolver,
}

impl FileBackend {
    /// A backend resolving paths from the real process environment.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolver(resolver: ProfileResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &ProfileResolver {
        &self.resolver
    }
}

impl SettingsBackend for FileBackend {
    fn settings_path(&self, profile: &str, use_fallback: bool) -> Result<PathBuf, StoreError> {
        self.resolver.settings_path(profile, use_fallback)
    }

    fn read(&self, path: &Path) -> Result<Option<String>, StoreError> {
        match std::fs::read(path) {
            Ok(bytes) => Ok(Some(decode(bytes, path))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), StoreError> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(|source| StoreError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(path, contents).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("wrote {} bytes to {}", contents.len(), path.display());
        Ok(())
    }
}

/// Decodes file contents as UTF-8, or as Latin-1 when that fails.
///
/// Latin-1 maps every byte to a char, so text written by a tool without a
/// UTF-8 codec survives a load/save cycle.
fn decode(bytes: Vec<u8>, path: &Path) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            debug!(
                "{} is not valid UTF-8 ({e}); reading it as Latin-1",
                path.display()
            );
            e.into_bytes().into_iter().map(char::from).collect()
        }
    }
}
