//! Tests for the fixed-field record layout and its validation

#[cfg(test)]
mod tests {
    use rndpxls::codec::OwnerId;
    use rndpxls::codec::fixed::{FixedRecord, total_price_for};

    const NOW: i64 = 1_700_000_000_000;

    fn record() -> FixedRecord {
        FixedRecord {
            owner: OwnerId::new([0x5a; 32]),
            width: 12,
            height: 34,
            pixel_price: 1.5,
            timestamp: 0x0102_0304_0506_0708,
        }
    }

    // Tests fields land at their fixed big-endian offsets
    // Verified by dropping the pad byte before the width
    #[test]
    fn test_encode_layout() {
        let bytes = record().encode();

        assert_eq!(bytes.len(), 64);
        assert_eq!(&bytes[..32], &[0x5a; 32]);
        assert_eq!(bytes[32], 0);
        assert_eq!(bytes[33], 12);
        assert_eq!(bytes[34], 34);
        assert_eq!(&bytes[35..39], &1.5_f32.to_be_bytes());
        assert_eq!(&bytes[39..47], &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(bytes[47..].iter().all(|&b| b == 0));
    }

    // Tests a decoded record equals the encoded one
    // Verified by reading the timestamp little-endian
    #[test]
    fn test_round_trip() {
        let decoded = FixedRecord::decode(&record().encode()).unwrap();
        assert_eq!(decoded, record());
    }

    // Tests decode refuses a truncated record
    // Verified by removing the length check
    #[test]
    fn test_decode_rejects_wrong_length() {
        let bytes = record().encode();
        let error = FixedRecord::decode(&bytes[..47]).unwrap_err();
        assert!(error.is_format());
        assert!(error.to_string().contains("64"));
    }

    // Tests validation of dimensions, price and timestamp
    // Verified by making the price upper bound inclusive
    #[test]
    fn test_validated_bounds() {
        let owner = OwnerId::new([1; 32]);

        let ok = FixedRecord::validated(owner, 255, 0, 0.01, NOW - 60_000, NOW).unwrap();
        assert_eq!((ok.width, ok.height), (255, 0));

        assert!(FixedRecord::validated(owner, 256, 8, 1.0, NOW, NOW).unwrap_err().is_validation());
        assert!(FixedRecord::validated(owner, 8, -1, 1.0, NOW, NOW).unwrap_err().is_validation());
        assert!(FixedRecord::validated(owner, 8, 8, 0.001, NOW, NOW).is_err());
        assert!(FixedRecord::validated(owner, 8, 8, 999_999.0, NOW, NOW).is_err());
        assert!(FixedRecord::validated(owner, 8, 8, 1.0, -5, NOW).is_err());
        assert!(FixedRecord::validated(owner, 8, 8, 1.0, NOW - 60_001, NOW).is_err());
    }

    // Tests the legacy seed and total price derivations
    // Verified by taking the high timestamp word as seed
    #[test]
    fn test_seed_and_total_price() {
        let record = FixedRecord {
            width: 3,
            height: 3,
            pixel_price: 0.5,
            timestamp: 0x0000_0001_0000_002a,
            ..record()
        };
        assert_eq!(record.image_seed(), 42);
        assert_eq!(record.total_price(), 5);
    }

    // Tests totals multiply the decimal price exactly before rounding up
    // Verified by multiplying the single-precision price in floating point
    #[test]
    fn test_total_price_is_decimal_exact() {
        assert_eq!(total_price_for(0.1, 10, 1), 1);
        assert_eq!(total_price_for(0.7, 3, 1), 3);
        assert_eq!(total_price_for(1.3, 255, 255), 84_533);
        assert_eq!(total_price_for(0.01, 0, 200), 0);
        assert_eq!(total_price_for(999_998.99, 255, 255), 65_024_934_325);

        let stored = FixedRecord {
            width: 10,
            height: 1,
            pixel_price: 0.1,
            ..record()
        };
        assert_eq!(stored.total_price(), 1);
    }

    // Tests a quote carries the validated record and its exact total
    // Verified by pricing the quote from the stored single-precision price
    #[test]
    fn test_quote() {
        let owner = OwnerId::new([2; 32]);
        let quote = FixedRecord::quote(owner, 10, 1, 0.1, NOW, NOW).unwrap();
        assert_eq!(quote.total_price, 1);
        assert_eq!(
            quote.record,
            FixedRecord::validated(owner, 10, 1, 0.1, NOW, NOW).unwrap()
        );

        let quote = FixedRecord::quote(owner, 255, 255, 1.3, NOW, NOW).unwrap();
        assert_eq!(quote.total_price, 84_533);

        assert!(FixedRecord::quote(owner, 10, 1, 0.001, NOW, NOW).unwrap_err().is_validation());
    }
}
