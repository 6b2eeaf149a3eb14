//! Ticket keys, asset codes and image seeds

use crate::io::configuration::{ASSET_CODE_PREFIX, MAX_ISSUED, ORDINAL_DIGITS, TICKET_CODE_PREFIX};
use crate::io::error::{Result, format_error, ticket_error};

/// Store key of the open ticket with the given ordinal
pub fn ticket_code(ordinal: u32) -> String {
    format!("{TICKET_CODE_PREFIX}{ordinal:0ORDINAL_DIGITS$}")
}

/// Code of the image asset redeemed from the given ordinal
pub fn asset_code(ordinal: u32) -> String {
    format!("{ASSET_CODE_PREFIX}{ordinal:0ORDINAL_DIGITS$}")
}

/// Whether a store key names an open ticket
pub fn is_ticket_code(key: &str) -> bool {
    key.starts_with(TICKET_CODE_PREFIX)
}

/// Parse the ordinal from the trailing digits of a code
///
/// # Errors
///
/// Returns a format error if the code is shorter than the ordinal suffix or
/// the suffix is not decimal
pub fn ordinal_from_code(code: &str) -> Result<u32> {
    let start = code
        .char_indices()
        .rev()
        .nth(ORDINAL_DIGITS - 1)
        .map(|(index, _)| index)
        .ok_or_else(|| format_error("ticket code", &format!("'{code}' is too short")))?;
    let suffix = code.get(start..).unwrap_or_default();

    if !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format_error(
            "ticket code",
            &format!("'{code}' does not end in {ORDINAL_DIGITS} digits"),
        ));
    }
    suffix
        .parse()
        .map_err(|e| format_error("ticket code", &e))
}

/// Derive an image seed from a hex transaction hash
///
/// The seed is the last four bytes read big-endian.
///
/// # Errors
///
/// Returns a format error if the hash is not hex or decodes to fewer than
/// four bytes
pub fn seed_from_transaction_hash(hash: &str) -> Result<u32> {
    let bytes = hex::decode(hash).map_err(|e| format_error("transaction hash", &e))?;
    let tail = bytes
        .len()
        .checked_sub(4)
        .and_then(|start| bytes.get(start..))
        .and_then(|tail| <[u8; 4]>::try_from(tail).ok())
        .ok_or_else(|| {
            format_error(
                "transaction hash",
                &format!("need at least 4 bytes, got {}", bytes.len()),
            )
        })?;
    Ok(u32::from_be_bytes(tail))
}

/// Reject issuance once the ticket supply is exhausted
///
/// # Errors
///
/// Returns a ticket error if `issued` has reached the maximum supply
pub fn check_capacity(issued: u32) -> Result<()> {
    if issued >= MAX_ISSUED {
        Err(ticket_error(&format!(
            "all {MAX_ISSUED} tickets have been issued"
        )))
    } else {
        Ok(())
    }
}
