//! Ticket records stored in the external key-value store
//!
//! Two consumers store parameters under different, incompatible layouts.
//! Callers pick the layout; nothing is inferred from the bytes.

use crate::codec::attributes::OwnerId;
use crate::codec::fixed::FixedRecord;
use crate::codec::flagged::FlaggedRecord;
use crate::io::configuration::{OWNER_ID_SIZE, RECORD_SIZE};
use crate::io::error::{GenerationError, Result, format_error};

/// Layout of an encoded ticket record
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordProfile {
    /// Presence bitmap followed by optional attribute bytes
    Flagged,
    /// Mandatory width, height, price and timestamp
    Fixed,
}

impl RecordProfile {
    /// Profile name used in error messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Flagged => "flagged",
            Self::Fixed => "fixed",
        }
    }
}

/// A decoded ticket record of either profile
#[derive(Clone, Debug, PartialEq)]
pub enum TicketRecord {
    /// Optional-attribute record
    Flagged(FlaggedRecord),
    /// Fixed-field record
    Fixed(FixedRecord),
}

impl TicketRecord {
    /// Profile this record encodes with
    pub const fn profile(&self) -> RecordProfile {
        match self {
            Self::Flagged(_) => RecordProfile::Flagged,
            Self::Fixed(_) => RecordProfile::Fixed,
        }
    }

    /// Identity of the ticket owner
    pub const fn owner(&self) -> &OwnerId {
        match self {
            Self::Flagged(record) => &record.owner,
            Self::Fixed(record) => &record.owner,
        }
    }

    /// Encode into the profile's fixed-size layout
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Flagged(record) => record.encode(),
            Self::Fixed(record) => record.encode(),
        }
    }

    /// Decode bytes under the given profile
    ///
    /// # Errors
    ///
    /// Returns a format error if the length differs from the profile size
    pub fn decode(profile: RecordProfile, bytes: &[u8]) -> Result<Self> {
        match profile {
            RecordProfile::Flagged => FlaggedRecord::decode(bytes).map(Self::Flagged),
            RecordProfile::Fixed => FixedRecord::decode(bytes).map(Self::Fixed),
        }
    }
}

/// Reject input whose length is not exactly one record
pub(crate) fn check_length(profile: RecordProfile, bytes: &[u8]) -> Result<()> {
    if bytes.len() == RECORD_SIZE {
        Ok(())
    } else {
        Err(GenerationError::RecordLength {
            profile: profile.name(),
            expected: RECORD_SIZE,
            actual: bytes.len(),
        })
    }
}

/// Copy `N` bytes starting at `offset`
pub(crate) fn read_array<const N: usize>(bytes: &[u8], offset: usize) -> Result<[u8; N]> {
    bytes
        .get(offset..offset + N)
        .and_then(|slice| <[u8; N]>::try_from(slice).ok())
        .ok_or_else(|| format_error("record", &format!("truncated at offset {offset}")))
}

/// Read the owner identity prefix
pub(crate) fn read_owner(bytes: &[u8]) -> Result<OwnerId> {
    read_array::<OWNER_ID_SIZE>(bytes, 0).map(OwnerId::new)
}
