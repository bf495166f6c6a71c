use ima_predeployed::artifacts::ArtifactDir;
use ima_predeployed::cli::Cli;
use ima_predeployed::config::GeneratorConfig;
use ima_predeployed::genesis;
use ima_predeployed::output;

use clap::Parser;

fn main() -> eyre::Result<()> {
    // Initialize tracing
    reth_tracing::init_test_tracing();

    let cli = Cli::parse();

    let config = GeneratorConfig::from_file(&cli.config)?;
    output::print_banner(&config);
    output::print_artifacts_dir(&cli.artifacts);

    // Generate everything before touching the output
    let artifacts = ArtifactDir::new(&cli.artifacts);
    let alloc = genesis::generate_contracts(&config, &artifacts)?;
    output::print_accounts(&alloc);

    let base = genesis::load_base_genesis(&cli.base_genesis)?;
    let merged = genesis::merge_into_genesis(base, &cli.target_key, alloc.accounts())?;
    output::print_merged(&cli.target_key, alloc.len());

    let json = genesis::genesis_to_json(&merged)?;
    match &cli.output {
        Some(path) => {
            std::fs::write(path, json)?;
            output::print_written(path);
        }
        None => print!("{json}"),
    }

    Ok(())
}
