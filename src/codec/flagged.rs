//! Bitmap-driven record layout
//!
//! `[owner: 32][presence: u16 BE][one byte per field][zero fill]`, 64 bytes
//! in total. Unset fields leave their byte at zero and decode as absent.

use crate::codec::attributes::{AttributeField, AttributeSet, OwnerId, PresenceBitmap};
use crate::codec::record::{RecordProfile, check_length, read_array, read_owner};
use crate::io::configuration::{OWNER_ID_SIZE, RECORD_SIZE};
use crate::io::error::Result;

const BITMAP_OFFSET: usize = OWNER_ID_SIZE;
const FIELDS_OFFSET: usize = BITMAP_OFFSET + 2;

/// Owner plus optional attributes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlaggedRecord {
    /// Identity of the ticket owner
    pub owner: OwnerId,
    /// Requested attributes
    pub attributes: AttributeSet,
}

impl FlaggedRecord {
    /// Pair an owner with requested attributes
    pub const fn new(owner: OwnerId, attributes: AttributeSet) -> Self {
        Self { owner, attributes }
    }

    /// Encode into a 64-byte record
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(RECORD_SIZE);
        bytes.extend_from_slice(self.owner.as_bytes());
        bytes.extend_from_slice(&self.attributes.presence().bits().to_be_bytes());
        for field in AttributeField::ALL {
            bytes.push(self.attributes.field_byte(field).unwrap_or(0));
        }
        bytes.resize(RECORD_SIZE, 0);
        bytes
    }

    /// Decode a 64-byte record
    ///
    /// Only fields flagged in the bitmap are read; filler bytes of unset
    /// fields are ignored whatever they contain.
    ///
    /// # Errors
    ///
    /// Returns a format error if the input is not exactly 64 bytes
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        check_length(RecordProfile::Flagged, bytes)?;
        let owner = read_owner(bytes)?;
        let presence = PresenceBitmap::from_bits(u16::from_be_bytes(read_array(
            bytes,
            BITMAP_OFFSET,
        )?));

        let mut attributes = AttributeSet::default();
        for field in presence.fields() {
            let [byte] = read_array::<1>(bytes, FIELDS_OFFSET + field.slot())?;
            attributes.set_field_byte(field, byte);
        }

        Ok(Self { owner, attributes })
    }
}
