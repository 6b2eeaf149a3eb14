//! Fixed-field record layout
//!
//! `[owner: 32][pad: 1][width: 1][height: 1][price: f32 BE][timestamp: i64 BE][zero fill]`,
//! 64 bytes in total. Every field is mandatory.

use crate::codec::attributes::OwnerId;
use crate::codec::record::{RecordProfile, check_length, read_array, read_owner};
use crate::io::configuration::{
    MAX_PIXEL_PRICE, MIN_PIXEL_PRICE, OWNER_ID_SIZE, RECORD_SIZE, RUN_WINDOW_MS,
};
use crate::io::error::{Result, invalid_parameter};

const WIDTH_OFFSET: usize = OWNER_ID_SIZE + 1;
const HEIGHT_OFFSET: usize = WIDTH_OFFSET + 1;
const PRICE_OFFSET: usize = HEIGHT_OFFSET + 1;
const TIMESTAMP_OFFSET: usize = PRICE_OFFSET + 4;

/// Owner plus explicit image dimensions, pixel price and issue time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedRecord {
    /// Identity of the ticket owner
    pub owner: OwnerId,
    /// Image width in pixels
    pub width: u8,
    /// Image height in pixels
    pub height: u8,
    /// Price per pixel
    pub pixel_price: f32,
    /// Issue time in milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl FixedRecord {
    /// Build a record from unchecked caller input
    ///
    /// `now_ms` is the caller's clock; the timestamp must be no older than
    /// the run window.
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error if a dimension does not fit in
    /// 8 bits, the price is outside `[0.01, 999999)`, or the timestamp is
    /// negative or stale
    pub fn validated(
        owner: OwnerId,
        width: i64,
        height: i64,
        pixel_price: f64,
        timestamp: i64,
        now_ms: i64,
    ) -> Result<Self> {
        let width = u8::try_from(width)
            .map_err(|_out_of_range| invalid_parameter("width", &width, &"must be below 256"))?;
        let height = u8::try_from(height)
            .map_err(|_out_of_range| invalid_parameter("height", &height, &"must be below 256"))?;

        if !(MIN_PIXEL_PRICE..MAX_PIXEL_PRICE).contains(&pixel_price) {
            return Err(invalid_parameter(
                "pixel_price",
                &pixel_price,
                &format!("must be in [{MIN_PIXEL_PRICE}, {MAX_PIXEL_PRICE})"),
            ));
        }
        if timestamp < 0 {
            return Err(invalid_parameter(
                "timestamp",
                &timestamp,
                &"must not be negative",
            ));
        }
        if now_ms.saturating_sub(timestamp) > RUN_WINDOW_MS {
            return Err(invalid_parameter(
                "timestamp",
                &timestamp,
                &format!("older than the {RUN_WINDOW_MS} ms run window"),
            ));
        }

        Ok(Self {
            owner,
            width,
            height,
            pixel_price: pixel_price as f32,
            timestamp,
        })
    }

    /// Seed for legacy noise generation: the low 32 bits of the timestamp
    pub const fn image_seed(&self) -> u32 {
        self.timestamp as u32
    }

    /// Validate caller input and price the whole image from the caller's
    /// pixel price rather than its stored single-precision form
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`FixedRecord::validated`]
    pub fn quote(
        owner: OwnerId,
        width: i64,
        height: i64,
        pixel_price: f64,
        timestamp: i64,
        now_ms: i64,
    ) -> Result<FixedQuote> {
        let record = Self::validated(owner, width, height, pixel_price, timestamp, now_ms)?;
        Ok(FixedQuote {
            record,
            total_price: total_price_for(pixel_price, record.width, record.height),
        })
    }

    /// Whole-unit price of every pixel, rounded up
    ///
    /// Works from the shortest decimal form of the stored price, so a
    /// stored `0.1` prices as one tenth and not its binary neighbour.
    pub fn total_price(&self) -> u64 {
        ceil_decimal_total(&self.pixel_price.to_string(), self.width, self.height)
    }

    /// Encode into a 64-byte record
    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(RECORD_SIZE);
        bytes.extend_from_slice(self.owner.as_bytes());
        bytes.push(0);
        bytes.push(self.width);
        bytes.push(self.height);
        bytes.extend_from_slice(&self.pixel_price.to_be_bytes());
        bytes.extend_from_slice(&self.timestamp.to_be_bytes());
        bytes.resize(RECORD_SIZE, 0);
        bytes
    }

    /// Decode a 64-byte record
    ///
    /// # Errors
    ///
    /// Returns a format error if the input is not exactly 64 bytes
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        check_length(RecordProfile::Fixed, bytes)?;
        let [width] = read_array::<1>(bytes, WIDTH_OFFSET)?;
        let [height] = read_array::<1>(bytes, HEIGHT_OFFSET)?;

        Ok(Self {
            owner: read_owner(bytes)?,
            width,
            height,
            pixel_price: f32::from_be_bytes(read_array(bytes, PRICE_OFFSET)?),
            timestamp: i64::from_be_bytes(read_array(bytes, TIMESTAMP_OFFSET)?),
        })
    }
}

/// A validated record with the total owed for it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedQuote {
    /// Record to store
    pub record: FixedRecord,
    /// Whole units owed for every pixel
    pub total_price: u64,
}

/// Whole units owed for `width * height` pixels at `pixel_price`, rounded up
///
/// The price is multiplied exactly in decimal, so `0.1 * 10` owes 1.
/// Prices that are negative, non-finite or too long to hold exactly owe 0.
pub fn total_price_for(pixel_price: f64, width: u8, height: u8) -> u64 {
    ceil_decimal_total(&pixel_price.to_string(), width, height)
}

fn ceil_decimal_total(price: &str, width: u8, height: u8) -> u64 {
    let Some((digits, scale)) = decimal_digits(price) else {
        return 0;
    };
    let Some(divisor) = 10_u128.checked_pow(scale) else {
        return 0;
    };
    let pixels = u128::from(width) * u128::from(height);
    digits
        .checked_mul(pixels)
        .map_or(u64::MAX, |scaled| {
            u64::try_from(scaled.div_ceil(divisor)).unwrap_or(u64::MAX)
        })
}

/// Digits of a plain decimal string and the number of fraction digits
fn decimal_digits(text: &str) -> Option<(u128, u32)> {
    let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
    let digits = whole
        .chars()
        .chain(fraction.chars())
        .try_fold(0_u128, |acc, c| {
            acc.checked_mul(10)?.checked_add(u128::from(c.to_digit(10)?))
        })?;
    Some((digits, u32::try_from(fraction.len()).ok()?))
}
