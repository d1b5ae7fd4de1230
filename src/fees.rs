use std::fmt;
use std::str::FromStr;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Coin, Uint64};
use cosmrs::Denom;

use crate::chain::{EXEC_AMOUNT, EXEC_GAS, INIT_AMOUNT, INIT_GAS, UPLOAD_AMOUNT, UPLOAD_GAS};
use crate::error::{ConfigError, Result};

/// Fee attached to one kind of contract transaction.
///
/// Amounts and gas are string-encoded integers on the wire, e.g.
/// `{"amount": [{"amount": "750000", "denom": "untrn"}], "gas": "3000000"}`.
#[cw_serde]
#[serde(deny_unknown_fields)]
pub struct Fee {
    pub amount: Vec<Coin>,
    pub gas: Uint64,
}

impl Fee {
    pub fn new(amount: u128, denom: &str, gas: u64) -> Self {
        Self {
            amount: vec![Coin::new(amount, denom)],
            gas: Uint64::new(gas),
        }
    }

    /// Denom of the first coin, which is the one the tooling pays with.
    pub fn denom(&self) -> Option<&str> {
        self.amount.first().map(|coin| coin.denom.as_str())
    }

    pub fn gas_limit(&self) -> u64 {
        self.gas.u64()
    }

    /// Converts the fee into the transaction fee type consumed by `cosmrs`.
    pub fn to_cosmrs(&self) -> Result<cosmrs::tx::Fee> {
        let mut coins = self.amount.iter().map(|coin| -> Result<cosmrs::Coin> {
            let denom = Denom::from_str(&coin.denom)
                .map_err(|e| ConfigError::invalid("fee denom", e))?;
            Ok(cosmrs::Coin {
                denom,
                amount: coin.amount.u128(),
            })
        });

        let first = coins
            .next()
            .ok_or_else(|| ConfigError::invalid("fee amount", "no coins"))??;

        let mut fee = cosmrs::tx::Fee::from_amount_and_gas(first, self.gas_limit());
        for coin in coins {
            fee.amount.push(coin?);
        }

        Ok(fee)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeeKind {
    Upload,
    Init,
    Exec,
}

impl FeeKind {
    pub const ALL: [FeeKind; 3] = [FeeKind::Upload, FeeKind::Init, FeeKind::Exec];

    pub const fn as_str(self) -> &'static str {
        match self {
            FeeKind::Upload => "upload",
            FeeKind::Init => "init",
            FeeKind::Exec => "exec",
        }
    }
}

impl fmt::Display for FeeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeeKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownFeeKind(s.to_string()))
    }
}

/// Fee schedule of a network, one fee per transaction kind.
#[cw_serde]
#[serde(deny_unknown_fields)]
pub struct Fees {
    pub upload: Fee,
    pub init: Fee,
    pub exec: Fee,
}

impl Fees {
    /// The schedule every built-in network uses, paid in `denom`.
    pub fn standard(denom: &str) -> Self {
        Self {
            upload: Fee::new(UPLOAD_AMOUNT, denom, UPLOAD_GAS),
            init: Fee::new(INIT_AMOUNT, denom, INIT_GAS),
            exec: Fee::new(EXEC_AMOUNT, denom, EXEC_GAS),
        }
    }

    pub fn get(&self, kind: FeeKind) -> &Fee {
        match kind {
            FeeKind::Upload => &self.upload,
            FeeKind::Init => &self.init,
            FeeKind::Exec => &self.exec,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (FeeKind, &Fee)> {
        FeeKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}
