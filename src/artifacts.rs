//! Compiled contract artifacts.
//!
//! Artifacts are the Hardhat/Truffle JSON files emitted by the contracts build:
//! only `contractName`, `abi` and `deployedBytecode` are used. They are opaque
//! to the generator apart from the runtime code that lands in genesis and the
//! ABI used to check public accessors.

use alloy_json_abi::JsonAbi;
use alloy_primitives::Bytes;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::errors::GenesisError;

/// Compiled contract: runtime bytecode and ABI.
///
/// Cloning is cheap; every generator referencing the same contract shares one
/// loaded copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    inner: Arc<ArtifactData>,
}

#[derive(Debug, PartialEq, Eq)]
struct ArtifactData {
    name: String,
    code: Bytes,
    abi: JsonAbi,
}

impl Artifact {
    /// Build an artifact from its parts.
    pub fn new(name: impl Into<String>, code: Bytes, abi: JsonAbi) -> Self {
        Self { inner: Arc::new(ArtifactData { name: name.into(), code, abi }) }
    }

    /// Parse a Hardhat/Truffle artifact JSON document.
    pub fn from_json(name: &str, json: &str) -> Result<Self, GenesisError> {
        let file: ArtifactFile = serde_json::from_str(json).map_err(|e| {
            GenesisError::InvalidArtifact { name: name.to_string(), reason: e.to_string() }
        })?;
        Ok(Self::new(file.contract_name.unwrap_or_else(|| name.to_string()), file.deployed_bytecode, file.abi))
    }

    /// Contract name
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Runtime (deployed) bytecode
    pub fn code(&self) -> &Bytes {
        &self.inner.code
    }

    /// Contract ABI
    pub fn abi(&self) -> &JsonAbi {
        &self.inner.abi
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArtifactFile {
    contract_name: Option<String>,
    abi: JsonAbi,
    deployed_bytecode: Bytes,
}

/// Named lookup of compiled artifacts.
pub trait ArtifactSource {
    /// Return the artifact for `name`, or fail if it is unknown.
    fn artifact(&self, name: &str) -> Result<Artifact, GenesisError>;
}

/// Artifacts read from `<dir>/<Name>.json`, each file parsed at most once.
#[derive(Debug)]
pub struct ArtifactDir {
    dir: PathBuf,
    loaded: std::sync::Mutex<BTreeMap<String, Artifact>>,
}

impl ArtifactDir {
    /// Read artifacts from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), loaded: Default::default() }
    }

    /// Directory artifacts are read from.
    pub fn path(&self) -> &Path {
        &self.dir
    }

    fn load(&self, name: &str) -> Result<Artifact, GenesisError> {
        let path = self.dir.join(format!("{name}.json"));
        let json = match std::fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(GenesisError::MissingArtifact(name.to_string()))
            }
            Err(source) => return Err(GenesisError::ArtifactIo { path, source }),
        };
        Artifact::from_json(name, &json)
    }
}

impl ArtifactSource for ArtifactDir {
    fn artifact(&self, name: &str) -> Result<Artifact, GenesisError> {
        let mut loaded = self.loaded.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(artifact) = loaded.get(name) {
            return Ok(artifact.clone());
        }
        let artifact = self.load(name)?;
        loaded.insert(name.to_string(), artifact.clone());
        Ok(artifact)
    }
}

/// Artifacts held in memory, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryArtifacts {
    artifacts: BTreeMap<String, Artifact>,
}

impl InMemoryArtifacts {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add an artifact under its own name
    pub fn with_artifact(mut self, artifact: Artifact) -> Self {
        self.insert(artifact);
        self
    }

    /// Add an artifact under its own name.
    pub fn insert(&mut self, artifact: Artifact) {
        self.artifacts.insert(artifact.name().to_string(), artifact);
    }
}

impl ArtifactSource for InMemoryArtifacts {
    fn artifact(&self, name: &str) -> Result<Artifact, GenesisError> {
        self.artifacts
            .get(name)
            .cloned()
            .ok_or_else(|| GenesisError::MissingArtifact(name.to_string()))
    }
}
