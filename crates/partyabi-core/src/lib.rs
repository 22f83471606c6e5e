//! PartyABI Core
//!
//! Extracts contract interface descriptors from Foundry build artifacts
//! and republishes them under deploy-friendly snake_case names. Used by
//! the `partyabi-export` binary after every contract build.

pub mod artifact;
pub mod error;
pub mod export;
pub mod naming;

// Re-export the public surface for convenience
pub use artifact::ContractArtifact;
pub use error::{ExportError, Result};
pub use export::{
    AbiExporter, ExportReport, DEFAULT_ABI_DIR, DEFAULT_OUT_DIR, EXPORT_SUCCESS_MARKER,
    RELEVANT_ABIS,
};
pub use naming::camel_to_snake;
