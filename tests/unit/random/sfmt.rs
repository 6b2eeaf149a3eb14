//! Tests for the SFMT-19937 word stream

#[cfg(test)]
mod tests {
    use rand::{RngCore, SeedableRng};
    use rndpxls::random::Sfmt;
    use rndpxls::random::sfmt::N32;

    fn words(seed: u32, count: usize) -> Vec<u32> {
        let mut random = Sfmt::new(seed);
        (0..count).map(|_| random.next_word()).collect()
    }

    // Tests the stream matches the reference SFMT-19937 output
    // Verified by changing the SR1 shift
    #[test]
    fn test_reference_stream_seed_1234() {
        assert_eq!(
            words(1234, 8),
            vec![
                3_440_181_298,
                1_564_997_079,
                1_510_669_302,
                2_930_277_156,
                1_452_439_940,
                3_796_268_453,
                423_124_208,
                2_143_818_589,
            ]
        );
    }

    // Tests the stream stays correct across block regeneration
    // Verified by resetting the index to 1 after regeneration
    #[test]
    fn test_stream_after_regeneration() {
        let mut random = Sfmt::new(1234);
        for _ in 0..1000 {
            random.next_word();
        }
        assert_eq!(random.next_word(), 2_920_566_502);

        let mut zero = Sfmt::new(0);
        assert_eq!(zero.next_word(), 772_581_976);
        assert_eq!(zero.next_word(), 265_233_418);
        for _ in 2..1000 {
            zero.next_word();
        }
        assert_eq!(zero.next_word(), 1_127_708_848);
    }

    // Tests extreme seeds produce their reference streams
    // Verified by initializing with a wrapping subtraction
    #[test]
    fn test_reference_stream_max_seed() {
        let mut random = Sfmt::new(u32::MAX);
        assert_eq!(random.next_word(), 1_234_197_681);
        assert_eq!(random.next_word(), 2_588_249_148);
        for _ in 2..1000 {
            random.next_word();
        }
        assert_eq!(random.next_word(), 2_353_653_155);
    }

    // Tests two generators with the same seed agree word for word
    // Verified by mixing the call count into the output
    #[test]
    fn test_reproducible_streams() {
        assert_eq!(words(987_654, 2 * N32 + 5), words(987_654, 2 * N32 + 5));
        assert_ne!(words(1, 16), words(2, 16));
    }

    // Tests seeded states are certified onto the full period
    // Verified by skipping certification
    #[test]
    fn test_period_certification() {
        for seed in [0, 1, 1234, 4357, u32::MAX] {
            assert!(Sfmt::new(seed).is_period_certified(), "seed {seed}");
        }

        let state = Sfmt::new(1234).state().to_owned();
        assert_eq!(state[1], 3_159_640_283);
        assert_eq!(state.len(), N32);
    }

    // Tests rand trait adapters draw from the same stream
    // Verified by drawing the high word first in next_u64
    #[test]
    fn test_rng_core_adapters() {
        let mut random = Sfmt::from_seed(1234_u32.to_le_bytes());
        assert_eq!(random.next_u32(), 3_440_181_298);

        let combined = random.next_u64();
        assert_eq!(combined & 0xffff_ffff, 1_564_997_079);
        assert_eq!(combined >> 32, 1_510_669_302);

        let mut bytes = [0_u8; 6];
        random.fill_bytes(&mut bytes);
        assert_eq!(bytes[..4], 2_930_277_156_u32.to_le_bytes());
        assert_eq!(bytes[4..], 1_452_439_940_u32.to_le_bytes()[..2]);
    }
}
