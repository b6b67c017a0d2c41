//! Content pointer validation.
//!
//! CIDs are opaque to the registry except for their bounds. The only rules
//! are the ones that keep ledger usage bounded:
//! - Must not be empty
//! - At most `MAX_CID_LENGTH` bytes

use soroban_sdk::String;

/// Maximum CID length in bytes.
pub const MAX_CID_LENGTH: u32 = 256;

/// Validate a content pointer.
///
/// Returns true if the CID is non-empty and within the length bound.
pub fn validate_cid(cid: &String) -> bool {
    let len = cid.len();
    len > 0 && len <= MAX_CID_LENGTH
}
