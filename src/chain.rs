//! Chain families and network kinds known to the manifest.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

pub const DEFAULT_RPC_PORT: u16 = 26657;
pub const DEFAULT_REST_PORT: u16 = 1317;

/// Chain ID every local node image boots with.
pub const LOCAL_CHAIN_ID: &str = "testing-1";
pub const LOCAL_ENDPOINT: &str = "http://localhost:26657/";

pub const UPLOAD_GAS: u64 = 3_000_000;
pub const UPLOAD_AMOUNT: u128 = 750_000;
pub const INIT_GAS: u64 = 1_000_000;
pub const INIT_AMOUNT: u128 = 250_000;
pub const EXEC_GAS: u64 = 1_000_000;
pub const EXEC_AMOUNT: u128 = 250_000;

/// Cosmos-SDK coin type used on the HD path of every supported family.
pub const COSMOS_COIN_TYPE: u32 = 118;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainFamily {
    Juno,
    Neutron,
    Archway,
    Osmosis,
}

impl ChainFamily {
    pub const ALL: [ChainFamily; 4] = [
        ChainFamily::Juno,
        ChainFamily::Neutron,
        ChainFamily::Archway,
        ChainFamily::Osmosis,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ChainFamily::Juno => "juno",
            ChainFamily::Neutron => "neutron",
            ChainFamily::Archway => "archway",
            ChainFamily::Osmosis => "osmosis",
        }
    }

    /// Bech32 human-readable part used by account addresses of this family.
    pub const fn account_prefix(self) -> &'static str {
        self.as_str()
    }

    /// Fee denom paid on the given kind of network.
    pub const fn fee_denom(self, kind: NetworkKind) -> &'static str {
        match (self, kind) {
            (ChainFamily::Juno, NetworkKind::Mainnet) => "ujuno",
            (ChainFamily::Juno, _) => "ujunox",
            (ChainFamily::Neutron, _) => "untrn",
            (ChainFamily::Archway, _) => "uconst",
            (ChainFamily::Osmosis, _) => "uosmo",
        }
    }

    /// Reverse lookup of [`ChainFamily::fee_denom`].
    pub fn from_fee_denom(denom: &str) -> Option<Self> {
        match denom {
            "ujuno" | "ujunox" => Some(ChainFamily::Juno),
            "untrn" => Some(ChainFamily::Neutron),
            "uconst" => Some(ChainFamily::Archway),
            "uosmo" => Some(ChainFamily::Osmosis),
            _ => None,
        }
    }
}

impl fmt::Display for ChainFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainFamily {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|family| family.as_str() == s)
            .ok_or_else(|| ConfigError::invalid("chain family", format!("unknown family '{s}'")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkKind {
    Localnet,
    Testnet,
    Mainnet,
}

impl NetworkKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            NetworkKind::Localnet => "localnet",
            NetworkKind::Testnet => "testnet",
            NetworkKind::Mainnet => "mainnet",
        }
    }
}

impl fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "localnet" => Ok(NetworkKind::Localnet),
            "testnet" => Ok(NetworkKind::Testnet),
            "mainnet" => Ok(NetworkKind::Mainnet),
            other => Err(ConfigError::invalid(
                "network kind",
                format!("unknown kind '{other}'"),
            )),
        }
    }
}

/// Registry key of a network, rendered as `<family>_<kind>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NetworkId {
    pub family: ChainFamily,
    pub kind: NetworkKind,
}

impl NetworkId {
    pub const fn new(family: ChainFamily, kind: NetworkKind) -> Self {
        Self { family, kind }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.family, self.kind)
    }
}

impl FromStr for NetworkId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let (family, kind) = s
            .split_once('_')
            .ok_or_else(|| ConfigError::UnknownNetwork(s.to_string()))?;

        let family = family
            .parse()
            .map_err(|_| ConfigError::UnknownNetwork(s.to_string()))?;
        let kind = kind
            .parse()
            .map_err(|_| ConfigError::UnknownNetwork(s.to_string()))?;

        Ok(Self { family, kind })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_id_round_trips_through_registry_key() {
        let id: NetworkId = "neutron_testnet".parse().unwrap();
        assert_eq!(id, NetworkId::new(ChainFamily::Neutron, NetworkKind::Testnet));
        assert_eq!(id.to_string(), "neutron_testnet");
    }

    #[test]
    fn test_network_id_rejects_unknown_keys() {
        assert!(matches!(
            "cosmoshub_testnet".parse::<NetworkId>(),
            Err(ConfigError::UnknownNetwork(_))
        ));
        assert!(matches!(
            "juno".parse::<NetworkId>(),
            Err(ConfigError::UnknownNetwork(_))
        ));
        assert!(matches!(
            "juno_devnet".parse::<NetworkId>(),
            Err(ConfigError::UnknownNetwork(_))
        ));
    }

    #[test]
    fn test_fee_denoms() {
        assert_eq!(ChainFamily::Juno.fee_denom(NetworkKind::Testnet), "ujunox");
        assert_eq!(ChainFamily::Juno.fee_denom(NetworkKind::Localnet), "ujunox");
        assert_eq!(ChainFamily::Juno.fee_denom(NetworkKind::Mainnet), "ujuno");
        assert_eq!(ChainFamily::Neutron.fee_denom(NetworkKind::Mainnet), "untrn");

        for family in ChainFamily::ALL {
            for kind in [NetworkKind::Localnet, NetworkKind::Testnet, NetworkKind::Mainnet] {
                assert_eq!(
                    ChainFamily::from_fee_denom(family.fee_denom(kind)),
                    Some(family)
                );
            }
        }
        assert_eq!(ChainFamily::from_fee_denom("uatom"), None);
    }
}
