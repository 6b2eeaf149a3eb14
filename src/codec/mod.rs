//! Binary ticket record codecs
//!
//! Records travel through an external key-value store as opaque 64-byte
//! blobs.

/// Attribute set, owner identity and presence bitmap
pub mod attributes;
/// Fixed-field record layout
pub mod fixed;
/// Bitmap-driven record layout
pub mod flagged;
/// Profile selection and shared decoding helpers
pub mod record;

pub use attributes::{AttributeField, AttributeSet, OwnerId, PresenceBitmap, RawAttributes};
pub use record::{RecordProfile, TicketRecord};
