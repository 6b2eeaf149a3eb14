//! Ticket issuance and redemption over an external key-value store
//!
//! Open tickets live in the store under `ticketNNN` keys as flagged
//! records. A separate counter key tracks how many tickets were ever
//! issued, since redeemed tickets are removed.

use std::collections::BTreeMap;

use crate::codec::attributes::{OwnerId, RawAttributes};
use crate::codec::flagged::FlaggedRecord;
use crate::io::error::{Result, ticket_error};
use crate::synthesis::orchestrator::{Synthesis, synthesize};
use crate::ticket::naming::{
    asset_code, check_capacity, is_ticket_code, ordinal_from_code, seed_from_transaction_hash,
    ticket_code,
};
use crate::ticket::pricing::{Price, verify_expected_price};

/// Store key of the issued-ticket counter
pub const ISSUED_COUNT_KEY: &str = "numIssuedAssets";

/// Opaque byte store addressed by string keys
pub trait KeyValueStore {
    /// Value under `key`, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Write `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()>;

    /// Delete `key`, returning its previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written
    fn remove(&mut self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Every key currently present
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read
    fn keys(&self) -> Result<Vec<String>>;
}

/// In-process store with sorted keys
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Vec<u8>) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.remove(key))
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }
}

/// A ticket written by [`TicketBook::issue`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IssuedTicket {
    /// Store key of the ticket
    pub code: String,
    /// Issue ordinal
    pub ordinal: u32,
    /// Price charged, excluding the locked amount
    pub price: Price,
    /// Record stored under the key
    pub record: FlaggedRecord,
}

/// Result of [`TicketBook::redeem`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redemption {
    /// Code of the created image asset
    pub asset_code: String,
    /// Issue ordinal of the redeemed ticket
    pub ordinal: u32,
    /// Seed derived from the transaction hash
    pub seed: u32,
    /// Record the ticket held
    pub record: FlaggedRecord,
    /// Re-encoded record to attach to the image asset
    pub data: Vec<u8>,
    /// Generated image
    pub synthesis: Synthesis,
}

/// Issues and redeems tickets against a store
#[derive(Debug)]
pub struct TicketBook<S> {
    store: S,
}

impl<S: KeyValueStore> TicketBook<S> {
    /// Manage tickets in `store`
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying store
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Release the underlying store
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Number of tickets ever issued
    ///
    /// The counter is read from its leading decimal digits, so `"12abc"`
    /// counts 12. A missing counter or one without leading digits counts as
    /// zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read
    pub fn issued_count(&self) -> Result<u32> {
        Ok(self
            .store
            .get(ISSUED_COUNT_KEY)?
            .map_or(0, |bytes| leading_count(&String::from_utf8_lossy(&bytes))))
    }

    /// Key of the open ticket held by `owner`, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or a ticket record is
    /// malformed
    pub fn open_ticket(&self, owner: &OwnerId) -> Result<Option<String>> {
        for key in self.store.keys()? {
            if !is_ticket_code(&key) {
                continue;
            }
            let Some(bytes) = self.store.get(&key)? else {
                continue;
            };
            if FlaggedRecord::decode(&bytes)?.owner == *owner {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }

    /// Issue a ticket for `owner`
    ///
    /// Checks run in order: attribute validation, expected price, supply,
    /// then one open ticket per owner. Nothing is written unless every
    /// check passes.
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error for out-of-range attributes or a
    /// mismatched expected price, and a ticket error when the supply is
    /// exhausted or the owner already holds an open ticket
    pub fn issue(
        &mut self,
        owner: OwnerId,
        attributes: &RawAttributes,
        expected_price: Price,
    ) -> Result<IssuedTicket> {
        let attributes = attributes.validate()?;
        let record = FlaggedRecord::new(owner, attributes);
        let price = verify_expected_price(&attributes, expected_price)?;

        let ordinal = self.issued_count()?;
        check_capacity(ordinal)?;
        if let Some(code) = self.open_ticket(&owner)? {
            return Err(ticket_error(&format!("{owner} already holds {code}")));
        }

        let code = ticket_code(ordinal);
        self.store.set(&code, record.encode())?;
        self.store
            .set(ISSUED_COUNT_KEY, (ordinal + 1).to_string().into_bytes())?;
        log::info!("issued {code} at {price}");

        Ok(IssuedTicket {
            code,
            ordinal,
            price,
            record,
        })
    }

    /// Redeem the open ticket `code` into an image
    ///
    /// The image seed comes from the paying transaction's hash and the
    /// ticket ordinal from its code. The ticket is removed once the image
    /// is generated.
    ///
    /// # Errors
    ///
    /// Returns a ticket error if no such ticket is open, and a format error
    /// if the code, the hash or the stored record is malformed
    pub fn redeem(&mut self, code: &str, transaction_hash: &str) -> Result<Redemption> {
        let bytes = self
            .store
            .get(code)?
            .filter(|_| is_ticket_code(code))
            .ok_or_else(|| ticket_error(&format!("no open ticket '{code}'")))?;
        let record = FlaggedRecord::decode(&bytes)?;
        let ordinal = ordinal_from_code(code)?;
        let seed = seed_from_transaction_hash(transaction_hash)?;

        let synthesis = synthesize(seed, ordinal, &record.attributes);
        self.store.remove(code)?;
        log::info!(
            "redeemed {code} as {} with seed {seed} ({})",
            asset_code(ordinal),
            synthesis.strategy
        );

        Ok(Redemption {
            asset_code: asset_code(ordinal),
            ordinal,
            seed,
            record,
            data: record.encode(),
            synthesis,
        })
    }
}

/// Leading decimal count of a stored counter, saturating at `u32::MAX`
fn leading_count(text: &str) -> u32 {
    let text = text.trim_start();
    let text = text.strip_prefix('+').unwrap_or(text);
    text.chars()
        .map_while(|c| c.to_digit(10))
        .fold(0, |count: u32, digit| {
            count.saturating_mul(10).saturating_add(digit)
        })
}
