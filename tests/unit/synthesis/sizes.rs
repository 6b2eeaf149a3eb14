//! Tests for size table lookup and ordinal-derived size ranges

#[cfg(test)]
mod tests {
    use rndpxls::random::Sfmt;
    use rndpxls::synthesis::sizes::{
        LAST_SIZE_INDEX, candidate_range, clamp_index, dimensions, draw_index,
    };

    // Tests table entries and clamping past the end
    // Verified by wrapping large indices modulo the table length
    #[test]
    fn test_dimensions() {
        assert_eq!(dimensions(0), (1, 1));
        assert_eq!(dimensions(1), (1, 8));
        assert_eq!(dimensions(2), (8, 1));
        assert_eq!(dimensions(3), (8, 8));
        assert_eq!(dimensions(10), (1024, 1024));
        assert_eq!(dimensions(20), (1024, 1024));
        assert_eq!(clamp_index(u8::MAX), LAST_SIZE_INDEX);
    }

    // Tests ranges grow with the log of the ordinal
    // Verified by rounding the logarithm instead of truncating
    #[test]
    fn test_candidate_range() {
        assert_eq!(candidate_range(0), (0, 0));
        assert_eq!(candidate_range(1), (-2, 0));
        assert_eq!(candidate_range(4), (0, 2));
        assert_eq!(candidate_range(40), (3, 5));
        assert_eq!(candidate_range(200), (5, 7));
        assert_eq!(candidate_range(10_000), (10, 10));
    }

    // Tests drawn indices stay inside the candidate range and the table
    // Verified by letting negative draws wrap to large indices
    #[test]
    fn test_draw_index_bounds() {
        let mut random = Sfmt::new(8);
        for ordinal in [0, 1, 2, 3, 40, 254] {
            let (min, max) = candidate_range(ordinal);
            for _ in 0..200 {
                let index = i32::from(draw_index(ordinal, &mut random));
                assert!(index >= min.max(0) && index <= max, "ordinal {ordinal}: {index}");
            }
        }
    }
}
