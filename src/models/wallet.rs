use serde::{Deserialize, Serialize};

use crate::wallets::chains::Chain;

/// A wallet address a contributor has linked to their profile
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WalletLink {
    pub chain: Chain,
    pub address: String,
}

impl WalletLink {
    pub fn new(chain: Chain, address: impl Into<String>) -> Self {
        Self {
            chain,
            address: address.into(),
        }
    }

    /// CAIP-10 account identifier, e.g. `eip155:1:0xabc...`
    pub fn account_id(&self) -> String {
        crate::wallets::linking::create_account_id(self.chain.chain_id(), &self.address)
    }

    pub fn is_valid(&self) -> bool {
        self.chain.validate(&self.address)
    }
}

/// JSON shape emitted to consumers that key wallets by CAIP-10 id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedWallet {
    pub chain: Chain,
    pub chain_id: String,
    pub address: String,
    pub account_id: String,
}

impl From<&WalletLink> for LinkedWallet {
    fn from(link: &WalletLink) -> Self {
        Self {
            chain: link.chain,
            chain_id: link.chain.chain_id().to_string(),
            address: link.address.clone(),
            account_id: link.account_id(),
        }
    }
}
