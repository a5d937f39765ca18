// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use directories::ProjectDirs;
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use traj_codec::CodecConfig;

use crate::{ConfigError, CODEC_KEY};

/// A directory of `<key>.json` config documents.
///
/// Nothing touches the filesystem until a document is loaded or saved; the
/// directory is created on first save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDir {
    base: PathBuf,
}

impl ConfigDir {
    /// The user config directory for `trajc` (e.g. `~/.config/trajc`).
    pub fn platform() -> Result<Self, ConfigError> {
        ProjectDirs::from("org", "traj", "trajc")
            .map(|proj| Self::at(proj.config_dir()))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// A config directory rooted at `base`.
    pub fn at(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Directory holding the documents.
    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Path of the document stored under `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, ConfigError> {
        if key.is_empty() || key == ".." || key.contains(['/', '\\']) {
            return Err(ConfigError::InvalidKey(key.to_owned()));
        }
        Ok(self.base.join(format!("{key}.json")))
    }

    /// Loads the codec settings; defaults when none were saved.
    pub fn load_codec(&self) -> Result<CodecConfig, ConfigError> {
        Ok(self.load_json(CODEC_KEY)?.unwrap_or_default())
    }

    /// Saves the codec settings and returns the path written.
    pub fn save_codec(&self, config: &CodecConfig) -> Result<PathBuf, ConfigError> {
        self.save_json(CODEC_KEY, config)
    }

    fn load_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ConfigError> {
        let path = self.path_for(key)?;
        debug!(path = %path.display(), "loading config");
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(ConfigError::Read { path, source }),
        };
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| ConfigError::Parse { path, source })
    }

    fn save_json<T: Serialize>(&self, key: &str, value: &T) -> Result<PathBuf, ConfigError> {
        let path = self.path_for(key)?;
        let mut data = serde_json::to_vec_pretty(value).map_err(ConfigError::Encode)?;
        data.push(b'\n');
        fs::create_dir_all(&self.base).map_err(|source| ConfigError::Write {
            path: self.base.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = data.len(), "saving config");
        match fs::write(&path, data) {
            Ok(()) => Ok(path),
            Err(source) => Err(ConfigError::Write { path, source }),
        }
    }
}
