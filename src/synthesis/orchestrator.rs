//! Attribute resolution and end-to-end synthesis
//!
//! One seeded random source drives a whole run. Unset attributes are drawn
//! in a fixed order (size, colors, depth), then the strategy, then every
//! draw the strategy itself makes. Validation happens before the source is
//! created, so a rejected request consumes nothing.

use crate::codec::attributes::{AttributeSet, RawAttributes};
use crate::generation::buffer::PixelBuffer;
use crate::io::configuration::COLOR_COUNTS;
use crate::io::error::Result;
use crate::random::Sfmt;
use crate::synthesis::sizes::{clamp_index, dimensions, draw_index};
use crate::synthesis::strategy::Strategy;

/// Attributes with every generation input filled in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedAttributes {
    /// Size table index actually used
    pub size_index: u8,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Base colors for palette strategies
    pub num_colors: u8,
    /// Symmetrical recursion depth, at most `log2(width)`
    pub symmetry_depth: u32,
    /// Cleanliness as requested; absent counts as not clean
    pub clean: Option<bool>,
}

impl ResolvedAttributes {
    /// Fill unset attributes from the random source
    pub fn resolve(ordinal: u32, attributes: &AttributeSet, random: &mut Sfmt) -> Self {
        let size_index = attributes
            .size_index
            .map_or_else(|| draw_index(ordinal, random), clamp_index);
        let (width, height) = dimensions(size_index);

        let num_colors = attributes.num_colors.unwrap_or_else(|| {
            COLOR_COUNTS
                .get(random.index(COLOR_COUNTS.len()))
                .copied()
                .unwrap_or(COLOR_COUNTS[0])
        });

        let max_depth = width.ilog2();
        let symmetry_depth = attributes
            .symmetry_depth
            .map_or_else(
                || {
                    random
                        .ranged(1.0, f64::from(max_depth) + 1.0)
                        .max(0)
                        .unsigned_abs()
                },
                u32::from,
            )
            .min(max_depth);

        Self {
            size_index,
            width,
            height,
            num_colors,
            symmetry_depth,
            clean: attributes.clean,
        }
    }

    /// Whether corruption is restricted to clean variations
    pub fn is_clean(&self) -> bool {
        self.clean == Some(true)
    }
}

/// Outcome of one synthesis run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Synthesis {
    /// Attributes the image was generated with
    pub resolved: ResolvedAttributes,
    /// Strategy that filled the buffer
    pub strategy: Strategy,
    /// Generated RGB pixels
    pub buffer: PixelBuffer,
}

/// Generate an image from a seed, an issue ordinal and requested attributes
///
/// Identical inputs always produce identical buffers.
pub fn synthesize(seed: u32, ordinal: u32, attributes: &AttributeSet) -> Synthesis {
    let mut random = Sfmt::new(seed);
    synthesize_with(&mut random, ordinal, attributes)
}

/// Generate from an already-seeded random source, leaving it positioned
/// after the last draw
pub fn synthesize_with(random: &mut Sfmt, ordinal: u32, attributes: &AttributeSet) -> Synthesis {
    let resolved = ResolvedAttributes::resolve(ordinal, attributes, random);
    let strategy = Strategy::select(resolved.width, resolved.height, resolved.clean, random);
    log::debug!(
        "resolved {}x{} (size {}), {} colors, depth {}, strategy {strategy}",
        resolved.width,
        resolved.height,
        resolved.size_index,
        resolved.num_colors,
        resolved.symmetry_depth
    );

    let buffer = strategy.render(
        resolved.width,
        resolved.height,
        resolved.symmetry_depth,
        resolved.num_colors,
        resolved.is_clean(),
        random,
    );

    Synthesis {
        resolved,
        strategy,
        buffer,
    }
}

/// Validate caller input, then generate
///
/// # Errors
///
/// Returns an invalid parameter error if any numeric attribute is negative
/// or above 255; no random draw happens in that case
pub fn synthesize_raw(seed: u32, ordinal: u32, attributes: &RawAttributes) -> Result<Synthesis> {
    let attributes = attributes.validate()?;
    Ok(synthesize(seed, ordinal, &attributes))
}
