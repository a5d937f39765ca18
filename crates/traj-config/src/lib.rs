// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Persisted codec settings for trajectory tools.
//!
//! [`ConfigDir`] keeps one JSON document per key under a base directory. The
//! only document today is [`CODEC_KEY`], holding a
//! [`CodecConfig`](traj_codec::CodecConfig). A missing or empty file loads as
//! the defaults; a malformed one is an error naming the file.

mod dir;

pub use dir::ConfigDir;

use std::path::PathBuf;
use thiserror::Error;

/// Key (file stem) of the persisted codec settings.
pub const CODEC_KEY: &str = "codec";

/// Failures while locating, reading, or writing config documents.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform has no user config directory (e.g. no home directory).
    #[error("no platform config directory is available")]
    NoConfigDir,
    /// Key would escape the base directory.
    #[error("invalid config key {0:?}")]
    InvalidKey(String),
    /// Reading an existing document failed.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// Document path.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// Creating the directory or writing the document failed.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Document path.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The document is not valid JSON for the expected type.
    #[error("malformed config in {}: {source}", .path.display())]
    Parse {
        /// Document path.
        path: PathBuf,
        /// Decoder failure.
        source: serde_json::Error,
    },
    /// The value could not be encoded as JSON.
    #[error("failed to encode config: {0}")]
    Encode(#[source] serde_json::Error),
}
