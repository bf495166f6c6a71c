use alloy_primitives::Address;
use std::path::PathBuf;
use thiserror::Error;

use crate::genesis::ContractName;

/// Configuration errors that abort a generation run.
///
/// None of these is recoverable: the run produces no output table at all.
#[derive(Debug, Error)]
pub enum GenesisError {
    /// No artifact is known under the requested name
    #[error("Artifact {0} not found")]
    MissingArtifact(String),

    /// Artifact file could not be read
    #[error("Failed to read artifact {path}: {source}")]
    ArtifactIo {
        /// Artifact file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Artifact JSON is malformed
    #[error("Invalid artifact {name}: {reason}")]
    InvalidArtifact {
        /// Artifact name
        name: String,
        /// What is wrong with it
        reason: String,
    },

    /// The address table has no entry for a contract a generator references
    #[error("No address allocated for {0}")]
    MissingAddress(ContractName),

    /// Two generated accounts claim the same address
    #[error("Address {address} is claimed twice (by {existing} and {duplicate})")]
    DuplicateAddress {
        /// Contested address
        address: Address,
        /// Contract already placed there
        existing: String,
        /// Contract trying to claim it again
        duplicate: String,
    },

    /// Generator configuration file could not be read
    #[error("Failed to read config {path}: {source}")]
    ConfigIo {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Generator configuration is malformed
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Base genesis file could not be read
    #[error("Failed to read base genesis {path}: {source}")]
    GenesisIo {
        /// Base genesis path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Base genesis has no object under the target key
    #[error("Base genesis has no object under key {0:?}")]
    MissingAllocKey(String),

    /// JSON (de)serialization error
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
