// Wallet identity linking: chain registry plus the README wallet section codec

pub mod chains;
pub mod linking;

pub use chains::{chain_by_chain_id, chain_id, validate_address, Chain, SUPPORTED_CHAINS};
pub use linking::{
    build_wallet_section, create_account_id, extract_wallet_section, parse_account_id,
    parse_wallet_section, upsert_wallet_section,
};
