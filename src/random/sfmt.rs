//! SIMD-oriented Fast Mersenne Twister (SFMT-19937), 32-bit word output
//!
//! The generator keeps 624 words of state and hands them out in order,
//! regenerating the whole block once it is exhausted. Output for a given
//! seed is fixed forever: generated images depend on every word.

use rand::{RngCore, SeedableRng};

/// Number of 32-bit words of generator state
pub const N32: usize = 624;

/// Word offset of the middle term in the block recurrence
const POS1_WORDS: usize = 122 * 4;
/// Left shift applied to the last block term
const SL1: u32 = 18;
/// Right shift applied to the middle block term
const SR1: u32 = 11;
/// Per-lane masks for the middle block term
const MSK: [u32; 4] = [0xdfff_ffef, 0xddfe_cb7f, 0xbffa_ffff, 0xbfff_fff6];
/// Period certification vector
pub const PARITY: [u32; 4] = [0x0000_0001, 0x0000_0000, 0x0000_0000, 0x13c9_e684];
/// Multiplier of the state initialization recurrence
const INIT_MULTIPLIER: u32 = 0x6C07_8965;

/// Deterministic 32-bit word generator
///
/// Every draw advances the state; callers must consume draws in a fixed
/// order to reproduce an output.
#[derive(Clone)]
pub struct Sfmt {
    state: [u32; N32],
    index: usize,
}

impl Sfmt {
    /// Seed a generator
    ///
    /// The first draw regenerates the state block before returning a word.
    pub fn new(seed: u32) -> Self {
        let mut state = [0; N32];
        let mut word = seed;
        for (i, slot) in state.iter_mut().enumerate() {
            if i > 0 {
                word = (word ^ (word >> 30))
                    .wrapping_mul(INIT_MULTIPLIER)
                    .wrapping_add(i as u32);
            }
            *slot = word;
        }

        let mut sfmt = Self { state, index: N32 };
        sfmt.certify();
        sfmt
    }

    /// Draw the next 32-bit word
    pub fn next_word(&mut self) -> u32 {
        if self.index >= N32 {
            self.regenerate();
            self.index = 0;
        }
        let word = self.state.get(self.index).copied().unwrap_or_default();
        self.index += 1;
        word
    }

    /// Whether the current state lies on the full-period orbit
    pub fn is_period_certified(&self) -> bool {
        parity_bit(&self.state) == 1
    }

    /// Raw generator state, for inspection
    pub const fn state(&self) -> &[u32; N32] {
        &self.state
    }

    // Flips one state bit when the parity check fails. The search covers at
    // most 4 x 32 candidate bits.
    fn certify(&mut self) {
        if parity_bit(&self.state) == 1 {
            return;
        }

        if let Some((word, parity)) = self
            .state
            .iter_mut()
            .zip(PARITY)
            .find(|(_, parity)| *parity != 0)
        {
            *word ^= 1 << parity.trailing_zeros();
        }
    }

    // Block recurrence over four-word lanes. Lanes are updated high word
    // first so each word reads its lower neighbour before that neighbour
    // is overwritten.
    #[allow(clippy::indexing_slicing)] // lane offsets stay below N32
    fn regenerate(&mut self) {
        let s = &mut self.state;
        let mut a = 0;
        let mut b = POS1_WORDS;
        let mut c = N32 - 8;
        let mut d = N32 - 4;

        while a < N32 {
            s[a + 3] = s[a + 3]
                ^ (s[a + 3] << 8)
                ^ (s[a + 2] >> 24)
                ^ (s[c + 3] >> 8)
                ^ ((s[b + 3] >> SR1) & MSK[3])
                ^ (s[d + 3] << SL1);
            s[a + 2] = s[a + 2]
                ^ (s[a + 2] << 8)
                ^ (s[a + 1] >> 24)
                ^ (s[c + 3] << 24)
                ^ (s[c + 2] >> 8)
                ^ ((s[b + 2] >> SR1) & MSK[2])
                ^ (s[d + 2] << SL1);
            s[a + 1] = s[a + 1]
                ^ (s[a + 1] << 8)
                ^ (s[a] >> 24)
                ^ (s[c + 2] << 24)
                ^ (s[c + 1] >> 8)
                ^ ((s[b + 1] >> SR1) & MSK[1])
                ^ (s[d + 1] << SL1);
            s[a] = s[a]
                ^ (s[a] << 8)
                ^ (s[c + 1] << 24)
                ^ (s[c] >> 8)
                ^ ((s[b] >> SR1) & MSK[0])
                ^ (s[d] << SL1);

            c = d;
            d = a;
            a += 4;
            b += 4;
            if b >= N32 {
                b = 0;
            }
        }
    }
}

// Folds the masked leading words down to their combined parity
fn parity_bit(state: &[u32; N32]) -> u32 {
    let mut inner = state
        .iter()
        .zip(PARITY)
        .fold(0, |acc, (word, parity)| acc ^ (word & parity));

    let mut shift = 16;
    while shift > 0 {
        inner ^= inner >> shift;
        shift >>= 1;
    }
    inner & 1
}

impl std::fmt::Debug for Sfmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sfmt")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

impl RngCore for Sfmt {
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    // Low word is drawn first
    fn next_u64(&mut self) -> u64 {
        let lower = u64::from(self.next_word());
        let upper = u64::from(self.next_word());
        (upper << 32) | lower
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_word().to_le_bytes();
            for (target, byte) in chunk.iter_mut().zip(bytes) {
                *target = byte;
            }
        }
    }
}

impl SeedableRng for Sfmt {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
