use cosmwasm_config_rs::{fees::FeeKind, Manifest, NetworkAlias};
use tracing_subscriber::fmt;

fn main() -> anyhow::Result<()> {
    // Setup logging
    fmt::init();

    let manifest = Manifest::builtin()?;

    for alias in NetworkAlias::ALL {
        let network = manifest.config.networks.get(alias);
        let upload = network.fees.get(FeeKind::Upload).to_cosmrs()?;

        tracing::info!(
            "{}: chain_id={}, endpoint={}, upload fee={}{} gas={}",
            alias,
            network.chain_id,
            network.endpoint,
            upload.amount[0].amount,
            upload.amount[0].denom,
            upload.gas_limit
        );
    }

    // Registry entries are reachable by key as well
    let osmosis = manifest.network("osmosis_testnet")?;
    println!("osmosis testnet chain id: {}", osmosis.chain_id);

    if let Err(e) = manifest.validate() {
        tracing::warn!("{}", e);
    }

    Ok(())
}
