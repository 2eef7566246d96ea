use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use super::chains::Chain;
use crate::models::WalletLink;

/// Version written into the begin marker. Bump when the line syntax changes.
pub const WALLET_SECTION_VERSION: u32 = 1;

pub const WALLET_SECTION_END_MARKER: &str = "<!-- END CONTRIBUTOR_WALLETS -->";
const WALLET_SECTION_HEADING: &str = "### Linked Wallets";

static BEGIN_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<!--\s*BEGIN CONTRIBUTOR_WALLETS(?:\s+v([0-9]+))?\s*-->").expect("valid regex")
});

static END_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<!--\s*END CONTRIBUTOR_WALLETS\s*-->").expect("valid regex"));

// - ethereum: `eip155:1:0x...`
static WALLET_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*[-*]\s*([A-Za-z0-9_-]+)\s*:\s*`([^`]+)`\s*$").expect("valid regex")
});

pub fn wallet_section_begin_marker() -> String {
    format!("<!-- BEGIN CONTRIBUTOR_WALLETS v{} -->", WALLET_SECTION_VERSION)
}

/// CAIP-10 account id: `chain_id + ":" + address`. No validation happens here.
pub fn create_account_id(chain_id: &str, address: &str) -> String {
    format!("{}:{}", chain_id, address)
}

/// Parse a CAIP-10 account id back into a link. Unknown chains and invalid
/// addresses yield `None`.
pub fn parse_account_id(account_id: &str) -> Option<WalletLink> {
    let (chain_id, address) = account_id.trim().rsplit_once(':')?;
    let chain = Chain::from_chain_id(chain_id)?;
    chain
        .validate(address)
        .then(|| WalletLink::new(chain, address))
}

/// Byte offsets of a wallet section inside a larger document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SectionBounds {
    start: usize,
    body_start: usize,
    body_end: usize,
    end: usize,
    /// `None` when the marker carries a version number we cannot read
    version: Option<u32>,
}

fn locate_section(text: &str) -> Option<SectionBounds> {
    let first_begin = BEGIN_MARKER_RE.find(text)?;
    let end_match = END_MARKER_RE.find_at(text, first_begin.end())?;

    // The section opens at the begin marker nearest the end marker. Earlier
    // dangling begin markers are left as ordinary text.
    let begin = BEGIN_MARKER_RE
        .captures_iter(&text[..end_match.start()])
        .last()?;
    let begin_match = begin.get(0)?;

    // A missing version predates versioned markers and reads as v1
    let version = match begin.get(1) {
        Some(v) => v.as_str().parse::<u32>().ok(),
        None => Some(WALLET_SECTION_VERSION),
    };

    Some(SectionBounds {
        start: begin_match.start(),
        body_start: begin_match.end(),
        body_end: end_match.start(),
        end: end_match.end(),
        version,
    })
}

/// Text between the wallet section markers, if the document has a section
pub fn extract_wallet_section(readme: &str) -> Option<&str> {
    locate_section(readme)
        .map(|b| readme[b.body_start..b.body_end].trim_matches(|c: char| c == '\n' || c == '\r'))
}

/// Render links as a delimited block. Line order follows `links`.
pub fn build_wallet_section(links: &[WalletLink]) -> String {
    let mut lines = Vec::with_capacity(links.len() + 3);
    lines.push(wallet_section_begin_marker());
    lines.push(WALLET_SECTION_HEADING.to_string());
    for link in links {
        lines.push(format!("- {}: `{}`", link.chain.name(), link.account_id()));
    }
    lines.push(WALLET_SECTION_END_MARKER.to_string());
    lines.join("\n")
}

fn parse_wallet_line(line: &str) -> Option<WalletLink> {
    let caps = WALLET_LINE_RE.captures(line)?;
    let declared = caps.get(1)?.as_str();
    let value = caps.get(2)?.as_str().trim();

    let Some(chain) = Chain::from_name(declared) else {
        debug!(chain = declared, "Skipping wallet line for unsupported chain");
        return None;
    };

    // Accept either the CAIP-10 id or a bare address
    let address = match value
        .strip_prefix(chain.chain_id())
        .and_then(|rest| rest.strip_prefix(':'))
    {
        Some(address) => address,
        None if value.contains(':') => {
            debug!(chain = declared, value, "Skipping wallet line with mismatched chain id");
            return None;
        }
        None => value,
    };

    if !chain.validate(address) {
        debug!(chain = declared, address, "Skipping wallet line with invalid address");
        return None;
    }

    Some(WalletLink::new(chain, address))
}

/// Extract wallet links from free-form text.
///
/// When the text contains a wallet section only its body is scanned, otherwise
/// every line is. Lines naming an unsupported chain or carrying an invalid
/// address are dropped. Output order is the order lines appear in.
pub fn parse_wallet_section(text: &str) -> Vec<WalletLink> {
    let body = match locate_section(text) {
        Some(bounds) if bounds.version != Some(WALLET_SECTION_VERSION) => {
            warn!(
                version = ?bounds.version,
                supported = WALLET_SECTION_VERSION,
                "Unsupported wallet section version, ignoring section"
            );
            return Vec::new();
        }
        Some(bounds) => &text[bounds.body_start..bounds.body_end],
        None => text,
    };

    body.lines().filter_map(parse_wallet_line).collect()
}

/// Replace the wallet section of a README, or append one if it has none.
pub fn upsert_wallet_section(readme: &str, links: &[WalletLink]) -> String {
    let section = build_wallet_section(links);

    match locate_section(readme) {
        Some(bounds) => format!("{}{}{}", &readme[..bounds.start], section, &readme[bounds.end..]),
        None if readme.trim().is_empty() => format!("{}\n", section),
        None => format!("{}\n\n{}\n", readme.trim_end(), section),
    }
}
