//! Two-phase ABI export pipeline
//!
//! Phase 1 walks the fixed contract list and collects every usable abi
//! into an in-memory map; phase 2 writes one file per collected entry.
//! Writing starts strictly after collection finishes, so a fatal
//! collection error produces zero output files for that run.

use crate::artifact::ContractArtifact;
use crate::error::{ExportError, Result};
use crate::naming::camel_to_snake;
use serde_json::Value;
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

/// Contracts whose ABIs the deploy pipeline consumes
pub const RELEVANT_ABIS: [&str; 11] = [
    "Party",
    "PartyBid",
    "PartyBuy",
    "PartyCollectionBuy",
    "PartyCrowdfundFactory",
    "PartyFactory",
    "PartyGovernance",
    "PartyGovernanceNFT",
    "PartyHelpers",
    "ProposalExecutionEngine",
    "TokenDistributor",
];

/// Foundry build output directory
pub const DEFAULT_OUT_DIR: &str = "./out";

/// Directory the deploy pipeline reads ABIs from
pub const DEFAULT_ABI_DIR: &str = "./deploy/deployed-contracts/abis";

/// Written to stdout once every ABI file has been persisted
pub const EXPORT_SUCCESS_MARKER: &str = "0x0000000000000000000000000000000000000001";

/// Summary of a completed export run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Output keys written, in output order
    pub written: Vec<String>,
    /// Contract names skipped because their artifact file was absent
    pub skipped: Vec<String>,
}

/// Exports contract ABIs from a Foundry `out/` tree
pub struct AbiExporter {
    out_dir: PathBuf,
    abi_dir: PathBuf,
}

impl Default for AbiExporter {
    fn default() -> Self {
        Self::new(DEFAULT_OUT_DIR, DEFAULT_ABI_DIR)
    }
}

impl AbiExporter {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(out_dir: P, abi_dir: Q) -> Self {
        Self { out_dir: out_dir.as_ref().to_path_buf(), abi_dir: abi_dir.as_ref().to_path_buf() }
    }

    /// Path of the build artifact for a contract name
    pub fn artifact_path(&self, name: &str) -> PathBuf {
        self.out_dir.join(format!("{}.sol", name)).join(format!("{}.json", name))
    }

    /// Path the exported ABI is written to for an output key
    pub fn output_path(&self, key: &str) -> PathBuf {
        self.abi_dir.join(format!("{}.json", key))
    }

    /// Runs the full export: collect every usable abi, then persist
    /// each one under its snake_case output key.
    pub fn export(&self) -> Result<ExportReport> {
        let mut abis: BTreeMap<String, Value> = BTreeMap::new();
        let mut skipped = Vec::new();

        for name in RELEVANT_ABIS {
            match self.collect_abi(name)? {
                Some(abi) => {
                    abis.insert(camel_to_snake(name), abi);
                }
                None => {
                    eprintln!("{} does not exist", self.artifact_path(name).display());
                    skipped.push(name.to_string());
                }
            }
        }

        let written = self.write_abis(&abis)?;

        Ok(ExportReport { written, skipped })
    }

    /// Loads one contract's abi. Returns `Ok(None)` when the artifact
    /// file is absent; an unusable abi in a present file is fatal.
    fn collect_abi(&self, name: &str) -> Result<Option<Value>> {
        let path = self.artifact_path(name);

        if !path.exists() {
            return Ok(None);
        }

        let artifact = ContractArtifact::load(&path)?;
        if !artifact.has_abi() {
            return Err(ExportError::missing_abi(path.display().to_string()));
        }

        Ok(Some(artifact.into_abi()))
    }

    /// Persists every collected abi, overwriting existing files
    fn write_abis(&self, abis: &BTreeMap<String, Value>) -> Result<Vec<String>> {
        fs::create_dir_all(&self.abi_dir)?;

        let mut written = Vec::with_capacity(abis.len());
        for (key, abi) in abis {
            let encoded = serde_json::to_string(abi)?;
            fs::write(self.output_path(key), encoded)?;
            written.push(key.clone());
        }

        Ok(written)
    }
}
