//! The exported configuration object and the manifest that backs it.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use cosmwasm_schema::cw_serde;

use crate::chain::NetworkId;
use crate::error::{ConfigError, Result, Violation};
use crate::local::LocalNetworks;
use crate::manifest;
use crate::network::{Network, NetworkRegistry};
use crate::validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkAlias {
    Default,
    Testnet,
    Localnet,
    Mainnet,
}

impl NetworkAlias {
    pub const ALL: [NetworkAlias; 4] = [
        NetworkAlias::Default,
        NetworkAlias::Testnet,
        NetworkAlias::Localnet,
        NetworkAlias::Mainnet,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            NetworkAlias::Default => "default",
            NetworkAlias::Testnet => "testnet",
            NetworkAlias::Localnet => "localnet",
            NetworkAlias::Mainnet => "mainnet",
        }
    }

    /// Registry entry the built-in manifest points this alias at.
    pub const fn builtin_target(self) -> NetworkId {
        match self {
            NetworkAlias::Default => manifest::DEFAULT_NETWORK,
            NetworkAlias::Testnet => manifest::TESTNET_NETWORK,
            NetworkAlias::Localnet => manifest::LOCALNET_NETWORK,
            NetworkAlias::Mainnet => manifest::MAINNET_NETWORK,
        }
    }
}

impl fmt::Display for NetworkAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkAlias {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|alias| alias.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownAlias(s.to_string()))
    }
}

/// The four networks the tooling addresses by alias.
#[cw_serde]
#[serde(deny_unknown_fields)]
pub struct Networks {
    pub default: Network,
    pub testnet: Network,
    pub localnet: Network,
    pub mainnet: Network,
}

impl Networks {
    pub fn from_registry(registry: &NetworkRegistry) -> Result<Self> {
        let target = |alias: NetworkAlias| registry.get_id(alias.builtin_target()).cloned();

        Ok(Self {
            default: target(NetworkAlias::Default)?,
            testnet: target(NetworkAlias::Testnet)?,
            localnet: target(NetworkAlias::Localnet)?,
            mainnet: target(NetworkAlias::Mainnet)?,
        })
    }

    pub fn get(&self, alias: NetworkAlias) -> &Network {
        match alias {
            NetworkAlias::Default => &self.default,
            NetworkAlias::Testnet => &self.testnet,
            NetworkAlias::Localnet => &self.localnet,
            NetworkAlias::Mainnet => &self.mainnet,
        }
    }

    pub fn resolve(&self, alias: &str) -> Result<&Network> {
        alias.parse().map(|alias| self.get(alias))
    }

    pub fn iter(&self) -> impl Iterator<Item = (NetworkAlias, &Network)> {
        NetworkAlias::ALL
            .into_iter()
            .map(move |alias| (alias, self.get(alias)))
    }
}

/// Test runner settings.
#[cw_serde]
#[serde(deny_unknown_fields)]
pub struct Mocha {
    /// Milliseconds
    pub timeout: u64,
}

impl Mocha {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout)
    }
}

#[cw_serde]
#[serde(deny_unknown_fields)]
pub struct RustToolchain {
    pub version: String,
}

/// Shell commands the tooling runs inside a contract directory.
#[cw_serde]
#[serde(deny_unknown_fields)]
pub struct Commands {
    pub compile: String,
    pub schema: String,
}

#[cw_serde]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub networks: Networks,
    pub localnetworks: LocalNetworks,
    pub mocha: Mocha,
    pub rust: RustToolchain,
    pub commands: Commands,
}

impl Config {
    pub fn builtin() -> Result<Self> {
        Self::from_registry(&NetworkRegistry::builtin())
    }

    pub fn from_registry(registry: &NetworkRegistry) -> Result<Self> {
        Ok(Self {
            networks: Networks::from_registry(registry)?,
            localnetworks: LocalNetworks::builtin(),
            mocha: Mocha {
                timeout: manifest::MOCHA_TIMEOUT_MS,
            },
            rust: RustToolchain {
                version: manifest::RUST_VERSION.to_string(),
            },
            commands: Commands {
                compile: manifest::COMPILE_COMMAND.to_string(),
                schema: manifest::SCHEMA_COMMAND.to_string(),
            },
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading configuration from {}", path.display());

        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        into_result(validate::config(self))
    }

    /// Reports every alias that no longer points at its built-in registry entry.
    pub fn check_aliases(&self, registry: &NetworkRegistry) -> Vec<Violation> {
        validate::aliases(self, registry)
    }
}

/// Exported configuration together with the full network registry it was cut from.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    pub config: Config,
    pub registry: NetworkRegistry,
}

impl Manifest {
    pub fn builtin() -> Result<Self> {
        let registry = NetworkRegistry::builtin();
        let config = Config::from_registry(&registry)?;

        Ok(Self { config, registry })
    }

    /// Loads the exported configuration from a file; registry names keep resolving
    /// against the built-in registry.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self {
            config: Config::from_file(path)?,
            registry: NetworkRegistry::builtin(),
        })
    }

    /// Resolves an alias (`testnet`) or a registry key (`juno_testnet`).
    pub fn network(&self, name: &str) -> Result<&Network> {
        match name.parse::<NetworkAlias>() {
            Ok(alias) => Ok(self.config.networks.get(alias)),
            Err(_) => self.registry.get(name),
        }
    }

    /// Registry key of the entry an alias currently points at, if any entry matches.
    pub fn alias_target(&self, alias: NetworkAlias) -> Option<NetworkId> {
        self.registry.find(self.config.networks.get(alias))
    }

    pub fn validate(&self) -> Result<()> {
        let mut violations = validate::config(&self.config);
        violations.extend(validate::registry(&self.registry));
        violations.extend(validate::local_command_address(
            &self.config.localnetworks,
            &self.registry,
        ));

        into_result(violations)
    }

    /// Checks that every stored address is the one its mnemonic derives to.
    pub fn verify_accounts(&self) -> Result<()> {
        into_result(validate::derived_addresses(&self.registry))
    }
}

fn into_result(violations: Vec<Violation>) -> Result<()> {
    if violations.is_empty() {
        Ok(())
    } else {
        for violation in &violations {
            tracing::debug!("{}", violation);
        }
        Err(ConfigError::Validation(violations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{ChainFamily, NetworkKind};

    #[test]
    fn test_builtin_aliases() {
        let registry = NetworkRegistry::builtin();
        let config = Config::builtin().unwrap();

        let neutron_testnet = registry.get("neutron_testnet").unwrap();
        assert_eq!(&config.networks.default, neutron_testnet);
        assert_eq!(&config.networks.testnet, neutron_testnet);
        assert_eq!(config.networks.default, config.networks.testnet);
        assert_eq!(&config.networks.localnet, registry.get("juno_localnet").unwrap());
        assert_eq!(&config.networks.mainnet, registry.get("neutron_mainnet").unwrap());
    }

    #[test]
    fn test_tool_settings() {
        let config = Config::builtin().unwrap();

        assert_eq!(config.mocha.timeout(), Duration::from_secs(60));
        assert_eq!(config.rust.version, "1.71.0");
        assert_eq!(config.commands.schema, "cargo run --example schema");
        assert!(config
            .commands
            .compile
            .ends_with("--target wasm32-unknown-unknown"));
    }

    #[test]
    fn test_alias_parsing() {
        assert_eq!("localnet".parse::<NetworkAlias>().unwrap(), NetworkAlias::Localnet);
        assert!(matches!(
            "devnet".parse::<NetworkAlias>(),
            Err(ConfigError::UnknownAlias(_))
        ));

        let config = Config::builtin().unwrap();
        assert_eq!(config.networks.resolve("mainnet").unwrap().chain_id, "neutron-1");
        assert!(config.networks.resolve("juno_testnet").is_err());
    }

    #[test]
    fn test_manifest_resolves_aliases_and_registry_keys() {
        let manifest = Manifest::builtin().unwrap();

        assert_eq!(manifest.network("testnet").unwrap().chain_id, "pion-1");
        assert_eq!(manifest.network("osmosis_mainnet").unwrap().chain_id, "osmosis-1");
        assert!(matches!(
            manifest.network("nowhere"),
            Err(ConfigError::UnknownNetwork(_))
        ));
    }

    #[test]
    fn test_alias_target() {
        let manifest = Manifest::builtin().unwrap();

        assert_eq!(
            manifest.alias_target(NetworkAlias::Localnet),
            Some(NetworkId::new(ChainFamily::Juno, NetworkKind::Localnet))
        );
        for alias in NetworkAlias::ALL {
            assert_eq!(manifest.alias_target(alias), Some(alias.builtin_target()));
        }
    }

    #[test]
    fn test_check_aliases() {
        let registry = NetworkRegistry::builtin();
        let mut config = Config::builtin().unwrap();
        assert!(config.check_aliases(&registry).is_empty());

        config.networks.default = registry.get("juno_testnet").unwrap().clone();
        let violations = config.check_aliases(&registry);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location, "networks.default");
        assert!(violations[0].message.contains("juno_testnet"));

        config.networks.mainnet.chain_id = "neutron-2".to_string();
        let violations = config.check_aliases(&registry);
        let locations: Vec<_> = violations.iter().map(|v| v.location.as_str()).collect();
        assert_eq!(locations, vec!["networks.default", "networks.mainnet"]);
        assert!(violations[1].message.contains("no registry entry"));
    }

    #[test]
    fn test_json_round_trip() {
        let config = Config::builtin().unwrap();
        let json = config.to_json_pretty().unwrap();

        assert_eq!(Config::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let mut value = serde_json::to_value(Config::builtin().unwrap()).unwrap();
        value["mocha"]["retries"] = serde_json::json!(3);

        assert!(matches!(
            Config::from_json(&value.to_string()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_misspelled_nested_keys() {
        let mut value = serde_json::to_value(Config::builtin().unwrap()).unwrap();
        let osmosis = value["localnetworks"]["osmosis"].as_object_mut().unwrap();
        let command = osmosis.remove("docker_command").unwrap();
        osmosis.insert("docker_comand".to_string(), command);

        assert!(matches!(
            Config::from_json(&value.to_string()),
            Err(ConfigError::ParseError(_))
        ));

        let mut value = serde_json::to_value(Config::builtin().unwrap()).unwrap();
        value["networks"]["testnet"]["fees"]["exec"]["gas_limit"] = serde_json::json!("1");
        assert!(Config::from_json(&value.to_string()).is_err());

        let mut value = serde_json::to_value(Config::builtin().unwrap()).unwrap();
        value["networks"]["localnet"]["accounts"][0]["mnemonics"] = serde_json::json!("x");
        assert!(Config::from_json(&value.to_string()).is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Config::from_file("does/not/exist.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
