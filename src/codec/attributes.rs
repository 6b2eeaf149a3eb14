//! Optional image attributes, their owner, and the presence bitmap

use std::fmt;

use bitvec::prelude::*;

use crate::io::configuration::OWNER_ID_SIZE;
use crate::io::error::{Result, format_error, invalid_parameter};

/// Opaque 32-byte public identity of a ticket owner
///
/// Passed through unchanged; never generated here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OwnerId([u8; OWNER_ID_SIZE]);

impl OwnerId {
    /// Wrap raw identity bytes
    pub const fn new(bytes: [u8; OWNER_ID_SIZE]) -> Self {
        Self(bytes)
    }

    /// Raw identity bytes
    pub const fn as_bytes(&self) -> &[u8; OWNER_ID_SIZE] {
        &self.0
    }

    /// Parse a hex-encoded identity
    ///
    /// # Errors
    ///
    /// Returns a format error if the text is not hex or not 32 bytes long
    pub fn from_hex(text: &str) -> Result<Self> {
        let bytes = hex::decode(text).map_err(|e| format_error("owner identity", &e))?;
        let array: [u8; OWNER_ID_SIZE] = bytes.try_into().map_err(|rejected: Vec<u8>| {
            format_error(
                "owner identity",
                &format!("expected {OWNER_ID_SIZE} bytes, got {}", rejected.len()),
            )
        })?;
        Ok(Self(array))
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// One optional field of an [`AttributeSet`], in encoding order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeField {
    /// Index into the size table
    SizeIndex,
    /// Number of base colors
    NumColors,
    /// Recursion depth of symmetrical tiling
    SymmetryDepth,
    /// Restrict corruption to channel inversion and rotation
    Clean,
    /// Extra amount added to the ticket price
    Tip,
}

impl AttributeField {
    /// All fields in bitmap and byte-slot order
    pub const ALL: [Self; 5] = [
        Self::SizeIndex,
        Self::NumColors,
        Self::SymmetryDepth,
        Self::Clean,
        Self::Tip,
    ];

    /// Bit position in the presence bitmap and byte slot in the record
    pub const fn slot(self) -> usize {
        match self {
            Self::SizeIndex => 0,
            Self::NumColors => 1,
            Self::SymmetryDepth => 2,
            Self::Clean => 3,
            Self::Tip => 4,
        }
    }

    /// Field name used in error messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::SizeIndex => "size_index",
            Self::NumColors => "num_colors",
            Self::SymmetryDepth => "symmetry_depth",
            Self::Clean => "clean",
            Self::Tip => "tip",
        }
    }
}

/// 16-bit mask recording which attribute fields are set
///
/// Bit `n` corresponds to the field with slot `n`; bits above the last
/// field are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PresenceBitmap(u16);

impl PresenceBitmap {
    /// Interpret raw bitmap bits
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Raw bitmap bits
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Test whether a field is marked present
    pub fn contains(self, field: AttributeField) -> bool {
        self.0.view_bits::<Lsb0>().get(field.slot()).as_deref() == Some(&true)
    }

    /// Mark a field present
    pub fn insert(&mut self, field: AttributeField) {
        self.0.view_bits_mut::<Lsb0>().set(field.slot(), true);
    }

    /// Fields marked present, in slot order
    pub fn fields(self) -> Vec<AttributeField> {
        AttributeField::ALL
            .into_iter()
            .filter(|&field| self.contains(field))
            .collect()
    }
}

/// Optional parameters of one requested image
///
/// Each field is independently optional; `None` means "resolve at
/// generation time", which is distinct from zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AttributeSet {
    /// Index into the size table
    pub size_index: Option<u8>,
    /// Number of base colors
    pub num_colors: Option<u8>,
    /// Recursion depth of symmetrical tiling
    pub symmetry_depth: Option<u8>,
    /// Restrict corruption to channel inversion and rotation
    pub clean: Option<bool>,
    /// Extra amount added to the ticket price
    pub tip: Option<u8>,
}

impl AttributeSet {
    /// Bitmap of the fields that are set
    pub fn presence(&self) -> PresenceBitmap {
        let mut bitmap = PresenceBitmap::default();
        for field in AttributeField::ALL {
            if self.field_byte(field).is_some() {
                bitmap.insert(field);
            }
        }
        bitmap
    }

    /// Encoded byte of a field, if set
    pub fn field_byte(&self, field: AttributeField) -> Option<u8> {
        match field {
            AttributeField::SizeIndex => self.size_index,
            AttributeField::NumColors => self.num_colors,
            AttributeField::SymmetryDepth => self.symmetry_depth,
            AttributeField::Clean => self.clean.map(u8::from),
            AttributeField::Tip => self.tip,
        }
    }

    /// Set a field from its encoded byte
    ///
    /// A clean byte decodes as `true` only when it equals 1.
    pub fn set_field_byte(&mut self, field: AttributeField, byte: u8) {
        match field {
            AttributeField::SizeIndex => self.size_index = Some(byte),
            AttributeField::NumColors => self.num_colors = Some(byte),
            AttributeField::SymmetryDepth => self.symmetry_depth = Some(byte),
            AttributeField::Clean => self.clean = Some(byte == 1),
            AttributeField::Tip => self.tip = Some(byte),
        }
    }

    /// Number of fields that are set, excluding the tip
    pub fn priced_field_count(&self) -> u64 {
        self.presence()
            .fields()
            .into_iter()
            .filter(|&field| field != AttributeField::Tip)
            .count() as u64
    }
}

/// Unvalidated attribute input as received from a caller
///
/// Numeric fields are wide so out-of-range requests can be rejected
/// rather than silently truncated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawAttributes {
    /// Requested size index
    pub size_index: Option<i64>,
    /// Requested base color count
    pub num_colors: Option<i64>,
    /// Requested symmetry depth
    pub symmetry_depth: Option<i64>,
    /// Requested cleanliness
    pub clean: Option<bool>,
    /// Requested tip
    pub tip: Option<i64>,
}

impl RawAttributes {
    /// Check every numeric field fits in 8 bits
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error naming the first field that is
    /// negative or above 255
    pub fn validate(&self) -> Result<AttributeSet> {
        Ok(AttributeSet {
            size_index: narrow(AttributeField::SizeIndex, self.size_index)?,
            num_colors: narrow(AttributeField::NumColors, self.num_colors)?,
            symmetry_depth: narrow(AttributeField::SymmetryDepth, self.symmetry_depth)?,
            clean: self.clean,
            tip: narrow(AttributeField::Tip, self.tip)?,
        })
    }
}

impl From<AttributeSet> for RawAttributes {
    fn from(attributes: AttributeSet) -> Self {
        Self {
            size_index: attributes.size_index.map(i64::from),
            num_colors: attributes.num_colors.map(i64::from),
            symmetry_depth: attributes.symmetry_depth.map(i64::from),
            clean: attributes.clean,
            tip: attributes.tip.map(i64::from),
        }
    }
}

fn narrow(field: AttributeField, value: Option<i64>) -> Result<Option<u8>> {
    value
        .map(|v| {
            u8::try_from(v).map_err(|_out_of_range| {
                invalid_parameter(field.name(), &v, &"must be between 0 and 255")
            })
        })
        .transpose()
}
