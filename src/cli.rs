use clap::Parser;
use std::path::PathBuf;

use crate::constants::DEFAULT_ALLOC_KEY;

/// CLI arguments for the generator
#[derive(Parser, Debug)]
#[command(
    name = "ima-predeployed",
    about = "Generate genesis accounts for the IMA predeployed contracts"
)]
pub struct Cli {
    /// Base genesis JSON the accounts are merged into
    pub base_genesis: PathBuf,

    /// Generator config JSON (`schain_owner`, `schain_name`, optional overrides)
    pub config: PathBuf,

    /// Directory of compiled artifacts (`<Name>.json`, Hardhat format)
    #[arg(long, default_value = "artifacts")]
    pub artifacts: PathBuf,

    /// Top-level genesis key the accounts are merged into
    #[arg(long, default_value = DEFAULT_ALLOC_KEY)]
    pub target_key: String,

    /// Write the genesis here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}
