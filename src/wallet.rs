use std::str::FromStr;

use cosmrs::{
    bip32::{DerivationPath, XPrv},
    crypto::secp256k1::SigningKey,
    AccountId,
};
use cosmwasm_schema::cw_serde;

use crate::chain::COSMOS_COIN_TYPE;
use crate::error::{ConfigError, Result};

/// A named test account: bech32 address plus the BIP-39 phrase it was derived from.
#[cw_serde]
#[serde(deny_unknown_fields)]
pub struct Account {
    pub name: String,
    pub address: String,
    pub mnemonic: String,
}

impl Account {
    pub fn new(name: &str, address: &str, mnemonic: &str) -> Self {
        Self {
            name: name.to_string(),
            address: address.to_string(),
            mnemonic: mnemonic.to_string(),
        }
    }

    /// Human-readable part of the address (`juno` for `juno1...`).
    pub fn prefix(&self) -> Option<&str> {
        self.address
            .rsplit_once('1')
            .map(|(hrp, _)| hrp)
            .filter(|hrp| !hrp.is_empty())
    }

    /// Parses the address, verifying its bech32 checksum.
    pub fn account_id(&self) -> Result<AccountId> {
        AccountId::from_str(&self.address).map_err(|e| ConfigError::invalid("address", e))
    }

    pub fn word_count(&self) -> usize {
        self.mnemonic.split_whitespace().count()
    }

    /// Derives the address the mnemonic yields under `prefix` on `m/44'/118'/0'/0/0`.
    pub fn derive_account_id(&self, prefix: &str) -> Result<AccountId> {
        let mnemonic = bip39::Mnemonic::parse_normalized(&self.mnemonic)
            .map_err(|e| ConfigError::DerivationError(format!("Invalid mnemonic: {e}")))?;
        let seed = mnemonic.to_seed_normalized("");

        let path = DerivationPath::from_str(&hd_path(0))
            .map_err(|e| ConfigError::DerivationError(format!("Invalid HD path: {e}")))?;
        let xprv = XPrv::derive_from_path(seed, &path)
            .map_err(|e| ConfigError::DerivationError(format!("Failed to derive key: {e}")))?;

        let signing_key = SigningKey::from_slice(&xprv.to_bytes())
            .map_err(|e| ConfigError::DerivationError(format!("Failed to parse signing key: {e}")))?;

        signing_key
            .public_key()
            .account_id(prefix)
            .map_err(|e| ConfigError::DerivationError(format!("Failed to generate account ID: {e}")))
    }

    /// Whether the stored address is the one the stored mnemonic derives to.
    pub fn matches_mnemonic(&self) -> Result<bool> {
        let prefix = self
            .prefix()
            .ok_or_else(|| ConfigError::invalid("address", "missing bech32 prefix"))?;
        let derived = self.derive_account_id(prefix)?;

        Ok(derived.as_ref() == self.address)
    }
}

fn hd_path(index: u32) -> String {
    format!("m/44'/{COSMOS_COIN_TYPE}'/0'/0/{index}")
}
