//! Tests for corruption draws and pixel rewrites

#[cfg(test)]
mod tests {
    use crate::fnv1a;
    use rndpxls::generation::PixelBuffer;
    use rndpxls::generation::corruption::{
        CorruptionPoint, CorruptionSpec, Variation, corrupt,
    };
    use rndpxls::generation::noise::{shades, uniform};
    use rndpxls::math::distance::DistanceMetric;
    use rndpxls::random::Sfmt;

    fn gradient_fill(width: u32, height: u32) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                buffer.set_rgb(x, y, [(x * 20) as u8, (y * 20) as u8, 77]);
            }
        }
        buffer
    }

    // Tests a pass that draws zero points leaves the buffer untouched
    // Verified by applying the variation to the whole buffer
    #[test]
    fn test_zero_points_is_noop() {
        let original = gradient_fill(8, 8);
        let mut buffer = original.clone();
        let mut random = Sfmt::new(0);

        let spec = corrupt(&mut buffer, false, &mut random);
        assert!(spec.points.is_empty());
        assert_eq!(buffer, original);
    }

    // Tests a full pass against the reference output
    // Verified by drawing the metric before the variation
    #[test]
    fn test_corruption_reference_output() {
        let mut random = Sfmt::new(314);
        let mut buffer = uniform(8, 8, &mut random);
        assert_eq!(fnv1a(&buffer.to_bytes()), 12_251_621_155_267_640_707);

        corrupt(&mut buffer, false, &mut random);
        assert_eq!(fnv1a(&buffer.to_bytes()), 12_236_731_316_799_084_179);
        assert_eq!(random.next_word(), 4_280_940_492);
    }

    // Tests a clean pass against the reference output
    // Verified by drawing among four variations when clean
    #[test]
    fn test_clean_corruption_reference_output() {
        let mut random = Sfmt::new(271);
        let mut buffer = shades(8, 8, &mut random);

        let spec = corrupt(&mut buffer, true, &mut random);
        assert!(matches!(spec.variation, Variation::Invert | Variation::Rotate));
        assert_eq!(fnv1a(&buffer.to_bytes()), 12_893_980_693_061_565_546);
        assert_eq!(random.next_word(), 4_270_733_062);
    }

    // Tests clean passes only ever invert or rotate
    // Verified by ignoring the clean flag
    #[test]
    fn test_clean_restricts_variations() {
        let mut random = Sfmt::new(5);
        for _ in 0..200 {
            let spec = CorruptionSpec::draw(16, 16, true, &mut random);
            assert!(spec.points.len() < 3);
            assert!(matches!(spec.variation, Variation::Invert | Variation::Rotate));
            for point in &spec.points {
                assert!(point.x < 16 && point.y < 16);
                assert!((1..4).contains(&point.radius));
            }
        }
    }

    // Tests invert and rotate rewrite channels exactly
    // Verified by rotating the other direction
    #[test]
    fn test_deterministic_variations() {
        let mut random = Sfmt::new(1);
        assert_eq!(
            Variation::Invert.apply([0, 100, 255], 0.0, 1, &mut random),
            [255, 155, 0]
        );
        assert_eq!(
            Variation::Rotate.apply([1, 2, 3], 0.0, 1, &mut random),
            [2, 3, 1]
        );
        assert_eq!(random.next_word(), Sfmt::new(1).next_word());
    }

    // Tests random blend at the center takes the fresh draws outright
    // Verified by weighting toward the old pixel at the center
    #[test]
    fn test_random_blend_weights_center() {
        let mut expected = Sfmt::new(1234);
        let fresh = [0; 3].map(|_: u8| expected.ranged_uint(0, 256) as u8);

        let mut random = Sfmt::new(1234);
        let blended = Variation::RandomBlend.apply([7, 7, 7], 0.0, 2, &mut random);
        assert_eq!(blended, fresh);

        // A zero radius divides by zero at the center; NaN stores zero
        let mut random = Sfmt::new(1234);
        assert_eq!(
            Variation::RandomBlend.apply([7, 7, 7], 0.0, 0, &mut random),
            [0, 0, 0]
        );
    }

    // Tests overlapping regions apply the variation once per region
    // Verified by breaking after the first matching point
    #[test]
    fn test_overlapping_points_apply_twice() {
        let mut buffer = gradient_fill(4, 4);
        let original = buffer.clone();
        let point = CorruptionPoint { x: 1, y: 1, radius: 1 };
        let spec = CorruptionSpec {
            points: vec![point, point],
            variation: Variation::Invert,
            metric: DistanceMetric::Euclidean,
        };

        spec.apply(&mut buffer, &mut Sfmt::new(0));
        assert_eq!(buffer, original);

        let single = CorruptionSpec {
            points: vec![point],
            ..spec
        };
        single.apply(&mut buffer, &mut Sfmt::new(0));
        assert_eq!(buffer.rgb(1, 1), Some([235, 235, 178]));
        assert_eq!(buffer.rgb(2, 1), Some([215, 235, 178]));
        assert_eq!(buffer.rgb(2, 2), original.rgb(2, 2));
    }
}
