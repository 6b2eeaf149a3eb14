//! Fixed generation tables, record layout constants and runtime defaults

// Generation tables
/// Image dimensions `(width, height)` addressable by a size index
pub const SIZE_TABLE: [(u32, u32); 11] = [
    (1, 1),
    (1, 8),
    (8, 1),
    (8, 8),
    (16, 16),
    (32, 32),
    (64, 64),
    (128, 128),
    (256, 256),
    (512, 512),
    (1024, 1024),
];

/// Base color counts drawn from when no color count is requested
pub const COLOR_COUNTS: [u8; 5] = [2, 3, 4, 8, 16];

/// Channel dominance patterns for shaded output, in red/green/blue order
///
/// Every non-empty combination of dominant channels appears once.
pub const SHADE_DOMINANCE: [[bool; 3]; 7] = [
    [true, false, false],
    [false, true, false],
    [false, false, true],
    [true, true, false],
    [true, false, true],
    [false, true, true],
    [true, true, true],
];

/// Exclusive upper bound on corruption points per pass
pub const MAX_CORRUPTION_POINTS: u32 = 3;

/// Corruption radius is drawn below `width / CORRUPTION_RADIUS_DIVISOR`
pub const CORRUPTION_RADIUS_DIVISOR: f64 = 4.0;

/// Largest edge length that still draws between noise and shades only
pub const NOISE_TIER_MAX: u32 = 8;
/// Largest edge length that draws among all flat strategies
pub const FLAT_TIER_MAX: u32 = 16;
/// Largest edge length that may skip symmetrical tiling
pub const BLEND_TIER_MAX: u32 = 32;

// Record layout
/// Size of the owner identity prefix in bytes
pub const OWNER_ID_SIZE: usize = 32;
/// Size of every encoded ticket record in bytes
pub const RECORD_SIZE: usize = 64;

// Ticket issuance
/// Maximum number of tickets ever issued
pub const MAX_ISSUED: u32 = 255;
/// Ticket price before optional attributes, in tenths
pub const BASE_PRICE_TENTHS: u64 = 25;
/// Surcharge for each requested attribute, in tenths
pub const ATTRIBUTE_PRICE_TENTHS: u64 = 50;
/// Amount locked alongside every ticket payment, in tenths
pub const LOCKED_AMOUNT_TENTHS: u64 = 25;
/// Key prefix of open ticket records
pub const TICKET_CODE_PREFIX: &str = "ticket";
/// Code prefix of redeemed image assets
pub const ASSET_CODE_PREFIX: &str = "RndPxls";
/// Digits of the zero-padded ordinal suffix
pub const ORDINAL_DIGITS: usize = 3;

// Fixed-layout ticket validation
/// Smallest accepted per-pixel price
pub const MIN_PIXEL_PRICE: f64 = 0.01;
/// Exclusive upper bound on per-pixel price
pub const MAX_PIXEL_PRICE: f64 = 999_999.0;
/// Maximum age of a ticket timestamp in milliseconds
pub const RUN_WINDOW_MS: i64 = 60_000;

// Runtime defaults
/// Ordinal used when none is supplied
pub const DEFAULT_ORDINAL: u32 = 0;
/// Number of images generated per invocation
pub const DEFAULT_COUNT: u32 = 1;
/// Directory receiving generated images
pub const DEFAULT_OUTPUT_DIR: &str = "output";
/// Prefix of generated image file names
pub const OUTPUT_PREFIX: &str = "rndpxls";
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
