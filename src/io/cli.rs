//! Command-line interface for generating batches of images

use std::path::PathBuf;

use clap::Parser;

use crate::codec::attributes::{AttributeSet, RawAttributes};
use crate::io::configuration::{DEFAULT_COUNT, DEFAULT_ORDINAL, DEFAULT_OUTPUT_DIR, OUTPUT_PREFIX};
use crate::io::error::Result;
use crate::io::image::save_png;
use crate::io::progress::ProgressManager;
use crate::synthesis::orchestrator::synthesize;

#[derive(Parser, Debug)]
#[command(name = "rndpxls")]
#[command(
    author,
    version,
    about = "Generate deterministic random pixel images from a seed"
)]
/// Command-line arguments for the image generator
pub struct Cli {
    /// Seed of the first image; drawn at random when omitted
    #[arg(short, long)]
    pub seed: Option<u32>,

    /// Issue ordinal used to derive the size range
    #[arg(long, default_value_t = DEFAULT_ORDINAL)]
    pub ordinal: u32,

    /// Size table index
    #[arg(short = 'z', long, allow_hyphen_values = true)]
    pub size_index: Option<i64>,

    /// Number of base colors
    #[arg(short, long, allow_hyphen_values = true)]
    pub colors: Option<i64>,

    /// Symmetrical tiling depth
    #[arg(short = 'd', long, allow_hyphen_values = true)]
    pub symmetry_depth: Option<i64>,

    /// Restrict corruption to inversion and rotation
    #[arg(long)]
    pub clean: Option<bool>,

    /// Number of images, generated from consecutive seeds
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    pub count: u32,

    /// Directory receiving the images
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Write RGBA images with an opaque alpha channel
    #[arg(short, long)]
    pub alpha: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Requested attributes, unvalidated
    pub const fn raw_attributes(&self) -> RawAttributes {
        RawAttributes {
            size_index: self.size_index,
            num_colors: self.colors,
            symmetry_depth: self.symmetry_depth,
            clean: self.clean,
            tip: None,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Generates and writes every image a command line asks for
pub struct BatchGenerator {
    cli: Cli,
    first_seed: u32,
}

impl BatchGenerator {
    /// Prepare a batch, fixing the first seed
    pub fn new(cli: Cli) -> Self {
        let first_seed = cli.seed.unwrap_or_else(rand::random);
        Self { cli, first_seed }
    }

    /// Seeds of every image in the batch, wrapping past `u32::MAX`
    pub fn seeds(&self) -> impl Iterator<Item = u32> + '_ {
        (0..self.cli.count).map(|offset| self.first_seed.wrapping_add(offset))
    }

    /// Path an image generated from `seed` is written to
    pub fn output_path(&self, seed: u32) -> PathBuf {
        self.cli.output.join(format!("{OUTPUT_PREFIX}_{seed}.png"))
    }

    /// Generate and write the batch
    ///
    /// Attributes are validated once, before any image is generated.
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error for out-of-range attributes, or
    /// an error if an image cannot be written
    pub fn run(&self) -> Result<Vec<PathBuf>> {
        let attributes = self.cli.raw_attributes().validate()?;
        let total = u64::from(self.cli.count);
        let progress = if self.cli.should_show_progress() {
            ProgressManager::new(total)
        } else {
            ProgressManager::hidden(total)
        };

        let mut written = Vec::new();
        for seed in self.seeds() {
            written.push(self.write_image(seed, &attributes)?);
            progress.complete_image(seed);
        }
        progress.finish();
        Ok(written)
    }

    fn write_image(&self, seed: u32, attributes: &AttributeSet) -> Result<PathBuf> {
        let synthesis = synthesize(seed, self.cli.ordinal, attributes);
        let buffer = if self.cli.alpha {
            synthesis.buffer.to_rgba()
        } else {
            synthesis.buffer
        };

        let path = self.output_path(seed);
        save_png(&buffer, &path)?;
        log::info!(
            "wrote {} ({}x{}, {})",
            path.display(),
            buffer.width(),
            buffer.height(),
            synthesis.strategy
        );
        Ok(path)
    }
}
