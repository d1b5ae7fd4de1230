//! Data-shape checks over networks, accounts, fees and local node settings.
//!
//! Every check returns all the [`Violation`]s it finds.

use std::collections::HashSet;
use std::str::FromStr;

use cosmrs::Denom;
use url::Url;

use crate::chain::{ChainFamily, NetworkId, NetworkKind};
use crate::config::{Config, NetworkAlias};
use crate::error::Violation;
use crate::local::{LocalNetwork, LocalNetworks};
use crate::network::{Network, NetworkRegistry};

const MNEMONIC_WORD_COUNTS: [usize; 2] = [12, 24];

/// Checks the exported configuration.
///
/// Alias entries carry no registry key, so their chain family is inferred
/// from the upload fee denom.
pub fn config(config: &Config) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (alias, network) in config.networks.iter() {
        let family = network
            .fees
            .upload
            .denom()
            .and_then(ChainFamily::from_fee_denom);
        violations.extend(network_entry(&format!("networks.{alias}"), network, family));
    }

    for (family, local) in config.localnetworks.iter() {
        violations.extend(local_network(&format!("localnetworks.{family}"), local));
    }

    if config.mocha.timeout == 0 {
        violations.push(Violation::new("mocha.timeout", "must be greater than zero"));
    }
    if config.rust.version.trim().is_empty() {
        violations.push(Violation::new("rust.version", "must not be empty"));
    }
    if config.commands.compile.trim().is_empty() {
        violations.push(Violation::new("commands.compile", "must not be empty"));
    }
    if config.commands.schema.trim().is_empty() {
        violations.push(Violation::new("commands.schema", "must not be empty"));
    }

    tracing::debug!("Configuration checked: {} violation(s)", violations.len());
    violations
}

/// Checks that every alias still equals the registry entry it is built on.
pub fn aliases(config: &Config, registry: &NetworkRegistry) -> Vec<Violation> {
    NetworkAlias::ALL
        .into_iter()
        .filter_map(|alias| {
            let expected = alias.builtin_target();
            let found = registry.find(config.networks.get(alias));
            if found == Some(expected) {
                return None;
            }

            let found = found
                .map(|id| id.to_string())
                .unwrap_or_else(|| "no registry entry".to_string());
            Some(Violation::new(
                format!("networks.{alias}"),
                format!("points at {found}, expected {expected}"),
            ))
        })
        .collect()
}

pub fn registry(registry: &NetworkRegistry) -> Vec<Violation> {
    let violations: Vec<_> = registry
        .iter()
        .flat_map(|(id, network)| network_entry(&id.to_string(), network, Some(id.family)))
        .collect();

    tracing::debug!(
        "Registry of {} network(s) checked: {} violation(s)",
        registry.len(),
        violations.len()
    );
    violations
}

/// Checks a single network entry. With a known `family`, account addresses must
/// carry that family's bech32 prefix.
pub fn network_entry(
    location: &str,
    network: &Network,
    family: Option<ChainFamily>,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    match Url::parse(&network.endpoint) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => violations.push(Violation::new(
            format!("{location}.endpoint"),
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => violations.push(Violation::new(
            format!("{location}.endpoint"),
            format!("invalid URL '{}': {e}", network.endpoint),
        )),
    }

    if network.chain_id.is_empty() {
        violations.push(Violation::new(format!("{location}.chainId"), "must not be empty"));
    } else if let Err(e) = tendermint::chain::Id::try_from(network.chain_id.clone()) {
        violations.push(Violation::new(format!("{location}.chainId"), e.to_string()));
    }

    let mut names = HashSet::new();
    for (i, account) in network.accounts.iter().enumerate() {
        let at = format!("{location}.accounts[{i}]");

        if account.name.is_empty() {
            violations.push(Violation::new(format!("{at}.name"), "must not be empty"));
        } else if !names.insert(account.name.as_str()) {
            violations.push(Violation::new(
                format!("{at}.name"),
                format!("duplicate account name '{}'", account.name),
            ));
        }

        if let Err(e) = account.account_id() {
            violations.push(Violation::new(format!("{at}.address"), e.to_string()));
        }

        if let Some(family) = family {
            if account.prefix() != Some(family.account_prefix()) {
                violations.push(Violation::new(
                    format!("{at}.address"),
                    format!(
                        "'{}' does not carry the '{}' prefix",
                        account.address,
                        family.account_prefix()
                    ),
                ));
            }
        }

        let words = account.word_count();
        if !MNEMONIC_WORD_COUNTS.contains(&words) {
            violations.push(Violation::new(
                format!("{at}.mnemonic"),
                format!("expected 12 or 24 words, found {words}"),
            ));
        }
    }

    for (kind, fee) in network.fees.iter() {
        let at = format!("{location}.fees.{kind}");

        if fee.amount.is_empty() {
            violations.push(Violation::new(format!("{at}.amount"), "no coins"));
        }
        for (i, coin) in fee.amount.iter().enumerate() {
            if let Err(e) = Denom::from_str(&coin.denom) {
                violations.push(Violation::new(
                    format!("{at}.amount[{i}].denom"),
                    format!("invalid denom '{}': {e}", coin.denom),
                ));
            }
        }
    }

    violations
}

pub fn local_network(location: &str, local: &LocalNetwork) -> Vec<Violation> {
    let mut violations = Vec::new();

    if local.docker_image.trim().is_empty() {
        violations.push(Violation::new(format!("{location}.docker_image"), "must not be empty"));
    }
    if local.rpc_port == 0 {
        violations.push(Violation::new(format!("{location}.rpc_port"), "must not be zero"));
    }
    if local.rest_port == 0 {
        violations.push(Violation::new(format!("{location}.rest_port"), "must not be zero"));
    }
    if local.rpc_port == local.rest_port {
        violations.push(Violation::new(
            format!("{location}.rest_port"),
            "must differ from rpc_port",
        ));
    }
    for (i, flag) in local.flags.iter().enumerate() {
        if !flag.split_once('=').is_some_and(|(key, _)| !key.is_empty()) {
            violations.push(Violation::new(
                format!("{location}.flags[{i}]"),
                format!("expected KEY=VALUE, found '{flag}'"),
            ));
        }
    }

    violations
}

/// The juno node image funds the address passed to its setup script; it has to be
/// the first juno localnet account.
pub fn local_command_address(
    local: &LocalNetworks,
    registry: &NetworkRegistry,
) -> Vec<Violation> {
    let id = NetworkId::new(ChainFamily::Juno, NetworkKind::Localnet);
    let Ok(network) = registry.get_id(id) else {
        return Vec::new();
    };
    let Some(expected) = network.accounts.first() else {
        return Vec::new();
    };

    match local.juno.command_argument() {
        Some(address) if address == expected.address => Vec::new(),
        found => vec![Violation::new(
            "localnetworks.juno.docker_command",
            format!(
                "expected to end with {} ({id} {}), found {}",
                expected.address,
                expected.name,
                found.unwrap_or("no argument")
            ),
        )],
    }
}

/// Derives every account's address from its mnemonic and compares it to the
/// stored one.
pub fn derived_addresses(registry: &NetworkRegistry) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (id, network) in registry.iter() {
        for (i, account) in network.accounts.iter().enumerate() {
            let at = format!("{id}.accounts[{i}]");
            let derived = match account.derive_account_id(id.family.account_prefix()) {
                Ok(derived) => derived,
                Err(e) => {
                    violations.push(Violation::new(format!("{at}.mnemonic"), e.to_string()));
                    continue;
                }
            };

            if derived.as_ref() != account.address {
                violations.push(Violation::new(
                    format!("{at}.address"),
                    format!("mnemonic derives to {derived}, found {}", account.address),
                ));
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fees::Fees;
    use crate::wallet::Account;

    const MNEMONIC: &str =
        "category fine rapid trumpet dune early wish under nothing dance property wreck";

    fn network(endpoint: &str, chain_id: &str, accounts: Vec<Account>) -> Network {
        Network {
            endpoint: endpoint.to_string(),
            chain_id: chain_id.to_string(),
            accounts,
            fees: Fees::standard("untrn"),
        }
    }

    #[test]
    fn test_valid_network_entry() {
        let entry = network(
            "https://rpc-palvus.pion-1.ntrn.tech/",
            "pion-1",
            vec![Account::new(
                "account_0",
                "neutron1jtdje5vq42sknl22r4wu9sahryu5wcrdqsccjh",
                MNEMONIC,
            )],
        );

        assert!(network_entry("neutron_testnet", &entry, Some(ChainFamily::Neutron)).is_empty());
    }

    #[test]
    fn test_bad_endpoint_and_chain_id() {
        let entry = network("not a url", "", vec![]);
        let violations = network_entry("n", &entry, None);

        let locations: Vec<_> = violations.iter().map(|v| v.location.as_str()).collect();
        assert_eq!(locations, vec!["n.endpoint", "n.chainId"]);

        let entry = network("ws://localhost:26657/websocket", "testing-1", vec![]);
        let violations = network_entry("n", &entry, None);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("ws"));
    }

    #[test]
    fn test_prefix_must_match_family() {
        let entry = network(
            "http://localhost:26657/",
            "testing-1",
            vec![Account::new(
                "account_0",
                "neutron1jtdje5vq42sknl22r4wu9sahryu5wcrdqsccjh",
                MNEMONIC,
            )],
        );

        let violations = network_entry("juno_localnet", &entry, Some(ChainFamily::Juno));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location, "juno_localnet.accounts[0].address");

        // without a family only the checksum is checked
        assert!(network_entry("x", &entry, None).is_empty());
    }

    #[test]
    fn test_mnemonic_word_count_and_duplicate_names() {
        let address = "neutron1jtdje5vq42sknl22r4wu9sahryu5wcrdqsccjh";
        let entry = network(
            "http://localhost:26657/",
            "testing-1",
            vec![
                Account::new("account_0", address, "one two three"),
                Account::new("account_0", address, MNEMONIC),
            ],
        );

        let violations = network_entry("n", &entry, Some(ChainFamily::Neutron));
        let locations: Vec<_> = violations.iter().map(|v| v.location.as_str()).collect();
        assert_eq!(locations, vec!["n.accounts[0].mnemonic", "n.accounts[1].name"]);
    }

    #[test]
    fn test_fee_checks() {
        let mut entry = network("http://localhost:26657/", "testing-1", vec![]);
        entry.fees.init.amount.clear();
        entry.fees.exec.amount[0].denom = "bad denom".to_string();

        let violations = network_entry("n", &entry, None);
        let locations: Vec<_> = violations.iter().map(|v| v.location.as_str()).collect();
        assert_eq!(locations, vec!["n.fees.init.amount", "n.fees.exec.amount[0].denom"]);
    }

    #[test]
    fn test_local_network_checks() {
        let mut local = LocalNetworks::builtin().juno;
        assert!(local_network("localnetworks.juno", &local).is_empty());

        local.rest_port = local.rpc_port;
        local.flags.push("NOVALUE".to_string());
        local.docker_image.clear();

        let violations = local_network("l", &local);
        let locations: Vec<_> = violations.iter().map(|v| v.location.as_str()).collect();
        assert_eq!(locations, vec!["l.docker_image", "l.rest_port", "l.flags[3]"]);
    }

    #[test]
    fn test_local_command_address() {
        let registry = NetworkRegistry::builtin();
        let mut local = LocalNetworks::builtin();
        assert!(local_command_address(&local, &registry).is_empty());

        local.juno.docker_command = Some("./setup_and_run.sh juno1evpfprq0mre5n0zysj6cf74xl6psk96gus7dp5".to_string());
        let violations = local_command_address(&local, &registry);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location, "localnetworks.juno.docker_command");

        local.juno.docker_command = None;
        assert_eq!(local_command_address(&local, &registry).len(), 1);
    }
}
