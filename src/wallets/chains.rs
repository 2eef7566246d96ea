use ethers::core::types::Address;
use ethers::utils::to_checksum;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Supported chains for wallet linking.
/// Chain ids are CAIP-2 mainnet identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chain {
    Ethereum,
    Solana,
}

pub const SUPPORTED_CHAINS: [Chain; 2] = [Chain::Ethereum, Chain::Solana];

static SOLANA_ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9A-HJ-NP-Za-km-z]{32,44}$").expect("valid regex"));

/// Lower-cased chain name -> chain, built once at startup
static CHAINS_BY_NAME: Lazy<HashMap<&'static str, Chain>> =
    Lazy::new(|| SUPPORTED_CHAINS.iter().map(|c| (c.name(), *c)).collect());

impl Chain {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ethereum => "ethereum",
            Self::Solana => "solana",
        }
    }

    /// CAIP-2 chain identifier
    pub fn chain_id(&self) -> &'static str {
        match self {
            Self::Ethereum => "eip155:1",
            Self::Solana => "solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp",
        }
    }

    /// Case-insensitive lookup by chain name
    pub fn from_name(name: &str) -> Option<Chain> {
        CHAINS_BY_NAME.get(name.trim().to_ascii_lowercase().as_str()).copied()
    }

    pub fn from_chain_id(chain_id: &str) -> Option<Chain> {
        SUPPORTED_CHAINS.iter().copied().find(|c| c.chain_id() == chain_id)
    }

    /// Syntactic address check only; nothing is looked up on chain.
    pub fn validate(&self, address: &str) -> bool {
        match self {
            Self::Ethereum => is_valid_evm_address(address),
            Self::Solana => SOLANA_ADDRESS_RE.is_match(address),
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// EIP-55: all-lowercase and all-uppercase hex are accepted as unchecksummed,
/// mixed case must match the checksum exactly.
fn is_valid_evm_address(address: &str) -> bool {
    let Some(hex) = address.strip_prefix("0x") else {
        return false;
    };
    if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return false;
    }

    let parsed = match address.parse::<Address>() {
        Ok(parsed) => parsed,
        Err(_) => return false,
    };

    let has_lower = hex.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = hex.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        to_checksum(&parsed, None) == address
    } else {
        true
    }
}

/// CAIP-2 id for a chain name, or an empty string when the chain is unsupported
pub fn chain_id(name: &str) -> &'static str {
    Chain::from_name(name).map(|c| c.chain_id()).unwrap_or("")
}

/// Chain name for a CAIP-2 id, or an empty string when unknown
pub fn chain_by_chain_id(chain_id: &str) -> &'static str {
    Chain::from_chain_id(chain_id).map(|c| c.name()).unwrap_or("")
}

/// False for unknown chains as well as malformed addresses
pub fn validate_address(address: &str, chain_name: &str) -> bool {
    Chain::from_name(chain_name)
        .map(|c| c.validate(address))
        .unwrap_or(false)
}
