//! Foundry build artifact model
//!
//! A build artifact is the JSON descriptor Foundry writes per compiled
//! contract under `out/<Name>.sol/<Name>.json`. Only the `abi` field is
//! consumed; everything else (bytecode, metadata, AST) is ignored.

use crate::error::{ExportError, Result};
use serde::Deserialize;
use serde_json::Value;
use std::{fs, path::Path};

/// Parsed view of a compiled contract artifact
#[derive(Debug, Clone, Deserialize)]
pub struct ContractArtifact {
    /// Interface descriptor, carried through opaquely. `null` when the
    /// artifact has no `abi` field at all.
    #[serde(default)]
    pub abi: Value,
}

impl ContractArtifact {
    /// Reads and parses an artifact file, naming the path on failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ExportError::Read {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| ExportError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Whether the `abi` field is usable for export.
    ///
    /// Absent, `null`, `false`, `0` and `""` all count as missing; an
    /// empty array or object counts as present.
    pub fn has_abi(&self) -> bool {
        match &self.abi {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64() != Some(0.0),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    pub fn into_abi(self) -> Value {
        self.abi
    }
}
