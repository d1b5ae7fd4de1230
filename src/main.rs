//! Inspect and check the CosmWasm tooling manifest.
//!
//! - `networks`: list registry entries and where each alias points
//! - `show <name>`: print one network (alias or registry key) as JSON
//! - `accounts <name>`: list a network's test accounts
//! - `local <family>`: print the `docker` invocation for a local node
//! - `validate`: run data-shape checks over the whole manifest
//! - `export` / `schema`: print the exported configuration or its JSON Schema

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use cosmwasm_config_rs::{ConfigError, Manifest, NetworkAlias};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "cosmwasm-config")]
#[command(about = "Inspect the CosmWasm network and tooling manifest")]
struct Cli {
    /// JSON file overriding the exported configuration
    #[arg(short, long, env = "WASMKIT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every network in the registry and the alias targets
    Networks,

    /// Print a network entry as JSON
    Show {
        /// Alias (`testnet`) or registry key (`juno_testnet`)
        #[arg(env = "WASMKIT_NETWORK", default_value = "default")]
        network: String,
    },

    /// List the test accounts of a network
    Accounts {
        #[arg(env = "WASMKIT_NETWORK", default_value = "default")]
        network: String,

        /// Also check each address against the one its mnemonic derives to
        #[arg(long)]
        derive: bool,
    },

    /// Print the docker invocation that starts a local node
    Local {
        /// Chain family: juno, neutron or osmosis
        family: String,

        /// Container name, defaults to `<family>-localnet`
        #[arg(long)]
        name: Option<String>,
    },

    /// Check the manifest for malformed entries
    Validate {
        /// Also derive every account address from its mnemonic
        #[arg(long)]
        derive: bool,

        /// Also require every alias to match its built-in registry entry
        #[arg(long)]
        aliases: bool,
    },

    /// Print the exported configuration as JSON
    Export,

    /// Print the JSON Schema of the exported configuration
    Schema,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let manifest = match &cli.config {
        Some(path) => {
            info!("Loading config: {}", path.display());
            Manifest::from_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?
        }
        None => Manifest::builtin().context("Failed to build the built-in manifest")?,
    };

    match cli.command {
        Command::Networks => {
            for (id, network) in manifest.registry.iter() {
                println!(
                    "{:<18} {:<14} {:<42} {} account(s)",
                    id.to_string(),
                    network.chain_id,
                    network.endpoint,
                    network.accounts.len()
                );
            }
            println!();
            for alias in NetworkAlias::ALL {
                let target = manifest
                    .alias_target(alias)
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "(custom)".to_string());
                println!("{:<18} -> {}", alias.as_str(), target);
            }
        }
        Command::Show { network } => {
            let entry = manifest.network(&network)?;
            println!("{}", serde_json::to_string_pretty(entry)?);
        }
        Command::Accounts { network, derive } => {
            let entry = manifest.network(&network)?;
            if entry.accounts.is_empty() {
                warn!("Network {} has no accounts", network);
            }
            for account in &entry.accounts {
                if derive {
                    let status = match account.matches_mnemonic() {
                        Ok(true) => "ok".to_string(),
                        Ok(false) => "MISMATCH".to_string(),
                        Err(e) => format!("error: {e}"),
                    };
                    println!("{:<12} {} [{}]", account.name, account.address, status);
                } else {
                    println!("{:<12} {}", account.name, account.address);
                }
            }
        }
        Command::Local { family, name } => {
            let local = manifest.config.localnetworks.get(&family)?;
            let name = name.unwrap_or_else(|| format!("{family}-localnet"));
            println!("docker {}", local.docker_run_args(&name).join(" "));
            info!("RPC will listen on {}", local.rpc_url());
        }
        Command::Validate { derive, aliases } => {
            let mut violations = Vec::new();
            collect(manifest.validate(), &mut violations)?;
            if derive {
                collect(manifest.verify_accounts(), &mut violations)?;
            }
            if aliases {
                violations.extend(manifest.config.check_aliases(&manifest.registry));
            }

            if !violations.is_empty() {
                for violation in &violations {
                    println!("{violation}");
                }
                anyhow::bail!("{} violation(s) found", violations.len());
            }
            println!("Manifest is valid");
        }
        Command::Export => {
            println!("{}", manifest.config.to_json_pretty()?);
        }
        Command::Schema => {
            let schema = cosmwasm_schema::schema_for!(cosmwasm_config_rs::Config);
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }

    Ok(())
}

fn collect(
    result: cosmwasm_config_rs::Result<()>,
    violations: &mut Vec<cosmwasm_config_rs::error::Violation>,
) -> anyhow::Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(ConfigError::Validation(found)) => {
            violations.extend(found);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
