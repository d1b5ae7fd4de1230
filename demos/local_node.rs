use cosmwasm_config_rs::Manifest;
use tracing_subscriber::fmt;

fn main() -> anyhow::Result<()> {
    fmt::init();

    let manifest = Manifest::builtin()?;
    let localnet = &manifest.config.networks.localnet;

    for (family, node) in manifest.config.localnetworks.iter() {
        let name = format!("{family}-localnet");
        println!("docker {}", node.docker_run_args(&name).join(" "));
    }

    // The juno image funds the first localnet account on startup
    let account = localnet
        .accounts
        .first()
        .ok_or_else(|| anyhow::anyhow!("localnet has no accounts"))?;
    tracing::info!(
        "Use {} ({}) against {} on chain {}",
        account.name,
        account.address,
        localnet.endpoint,
        localnet.chain_id
    );

    Ok(())
}
