//! PartyABI Export CLI
//!
//! Runs after `forge build` in the deploy pipeline: pulls the abi field
//! out of each relevant build artifact and republishes it under
//! `deploy/deployed-contracts/abis/`. The deploy scripts watch stdout
//! for the sentinel address to know the export finished.

use anyhow::Result;
use clap::{Parser, Subcommand};
use partyabi_core::{
    camel_to_snake, AbiExporter, DEFAULT_ABI_DIR, DEFAULT_OUT_DIR, EXPORT_SUCCESS_MARKER,
    RELEVANT_ABIS,
};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "partyabi-export")]
#[command(about = "Export Party contract ABIs from Foundry build artifacts", long_about = None)]
struct Cli {
    /// Defaults to `export` with the standard directories
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract ABIs from build artifacts and write the renamed files
    Export {
        /// Foundry build output directory
        #[arg(long, default_value = DEFAULT_OUT_DIR)]
        out_dir: PathBuf,

        /// Directory the renamed ABI files are written to
        #[arg(long, default_value = DEFAULT_ABI_DIR)]
        abi_dir: PathBuf,
    },

    /// List the exported contracts and their output file names
    List,
}

fn run_export(out_dir: PathBuf, abi_dir: PathBuf) -> Result<()> {
    let exporter = AbiExporter::new(out_dir, abi_dir);
    exporter.export()?;

    // The deploy pipeline matches this token verbatim, so nothing else
    // may land on stdout and there is no trailing newline
    print!("{}", EXPORT_SUCCESS_MARKER);
    std::io::stdout().flush()?;

    Ok(())
}

fn list_contracts() {
    for name in RELEVANT_ABIS {
        println!("{} -> {}.json", name, camel_to_snake(name));
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Export { out_dir, abi_dir }) => run_export(out_dir, abi_dir)?,
        Some(Commands::List) => list_contracts(),
        None => run_export(PathBuf::from(DEFAULT_OUT_DIR), PathBuf::from(DEFAULT_ABI_DIR))?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_export_with_custom_dirs() {
        let temp = TempDir::new().unwrap();
        let out_dir = temp.path().join("out");
        let abi_dir = temp.path().join("abis");

        let artifact_dir = out_dir.join("Party.sol");
        fs::create_dir_all(&artifact_dir).unwrap();
        fs::write(
            artifact_dir.join("Party.json"),
            json!({"abi": [{"type": "fallback"}]}).to_string(),
        )
        .unwrap();

        run_export(out_dir, abi_dir.clone()).unwrap();

        assert!(abi_dir.join("party.json").exists());
    }

    #[test]
    fn test_run_export_fails_on_empty_abi() {
        let temp = TempDir::new().unwrap();
        let out_dir = temp.path().join("out");
        let abi_dir = temp.path().join("abis");

        let artifact_dir = out_dir.join("Party.sol");
        fs::create_dir_all(&artifact_dir).unwrap();
        fs::write(artifact_dir.join("Party.json"), json!({"abi": null}).to_string()).unwrap();

        let result = run_export(out_dir, abi_dir.clone());

        assert!(result.is_err());
        assert!(!abi_dir.exists());
    }

    #[test]
    fn test_list_contracts_does_not_panic() {
        list_contracts();
    }

    #[test]
    fn test_cli_parses_bare_invocation() {
        let cli = Cli::parse_from(["partyabi-export"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parses_export_overrides() {
        let cli = Cli::parse_from(["partyabi-export", "export", "--out-dir", "/tmp/out"]);
        match cli.command {
            Some(Commands::Export { out_dir, abi_dir }) => {
                assert_eq!(out_dir, PathBuf::from("/tmp/out"));
                assert_eq!(abi_dir, PathBuf::from(DEFAULT_ABI_DIR));
            }
            _ => panic!("expected export subcommand"),
        }
    }
}
