//! Network entries and the registry of every network the manifest knows.

use std::collections::BTreeMap;

use cosmwasm_schema::cw_serde;
use url::Url;

use crate::chain::NetworkId;
use crate::error::{ConfigError, Result};
use crate::fees::Fees;
use crate::manifest::{self, NetworkRecord};
use crate::wallet::Account;

#[cw_serde]
#[serde(deny_unknown_fields)]
pub struct Network {
    /// Tendermint RPC endpoint
    pub endpoint: String,
    #[serde(rename = "chainId")]
    pub chain_id: String,
    pub accounts: Vec<Account>,
    pub fees: Fees,
}

impl Network {
    pub fn endpoint_url(&self) -> Result<Url> {
        Url::parse(&self.endpoint).map_err(|e| ConfigError::invalid("endpoint", e))
    }

    pub fn account(&self, name: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.name == name)
    }

    /// True when the endpoint points at this machine.
    pub fn is_local(&self) -> bool {
        self.endpoint_url()
            .ok()
            .and_then(|url| url.host_str().map(|host| host == "localhost" || host == "127.0.0.1"))
            .unwrap_or(false)
    }

    pub(crate) fn from_record(record: &NetworkRecord) -> Self {
        let denom = record.id.family.fee_denom(record.id.kind);

        Self {
            endpoint: record.endpoint.to_string(),
            chain_id: record.chain_id.to_string(),
            accounts: record
                .accounts
                .iter()
                .map(|(name, address, mnemonic)| Account::new(name, address, mnemonic))
                .collect(),
            fees: Fees::standard(denom),
        }
    }
}

/// Lookup table from `<family>_<kind>` to network entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NetworkRegistry {
    networks: BTreeMap<NetworkId, Network>,
}

impl NetworkRegistry {
    pub fn builtin() -> Self {
        manifest::NETWORKS
            .iter()
            .map(|record| (record.id, Network::from_record(record)))
            .collect()
    }

    /// Looks up a network by registry key, e.g. `juno_testnet`.
    pub fn get(&self, name: &str) -> Result<&Network> {
        let id: NetworkId = name.parse()?;
        self.networks
            .get(&id)
            .ok_or_else(|| ConfigError::UnknownNetwork(name.to_string()))
    }

    pub fn get_id(&self, id: NetworkId) -> Result<&Network> {
        self.networks
            .get(&id)
            .ok_or_else(|| ConfigError::UnknownNetwork(id.to_string()))
    }

    /// Registry key of the entry equal to `network`.
    pub fn find(&self, network: &Network) -> Option<NetworkId> {
        self.networks
            .iter()
            .find(|(_, entry)| *entry == network)
            .map(|(id, _)| *id)
    }

    pub fn names(&self) -> Vec<String> {
        self.networks.keys().map(NetworkId::to_string).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NetworkId, &Network)> {
        self.networks.iter().map(|(id, network)| (*id, network))
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

impl FromIterator<(NetworkId, Network)> for NetworkRegistry {
    fn from_iter<I: IntoIterator<Item = (NetworkId, Network)>>(iter: I) -> Self {
        Self {
            networks: iter.into_iter().collect(),
        }
    }
}
