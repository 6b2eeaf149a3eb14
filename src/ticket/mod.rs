//! Ticket pricing, naming and bookkeeping
//!
//! A ticket is a paid request for one image. It is issued with optional
//! attributes and later redeemed into a generated image.

/// Ticket keys, asset codes and seeds
pub mod naming;
/// Ticket prices
pub mod pricing;
/// Key-value store and ticket book
pub mod store;

pub use pricing::Price;
pub use store::{IssuedTicket, KeyValueStore, MemoryStore, Redemption, TicketBook};
