//! Tests for attribute sets, presence bitmaps and owner identities

#[cfg(test)]
mod tests {
    use rndpxls::codec::{AttributeField, AttributeSet, OwnerId, PresenceBitmap, RawAttributes};

    // Tests bitmap bits follow field order
    // Verified by assigning the tip to bit 0
    #[test]
    fn test_presence_bits_follow_field_order() {
        let attributes = AttributeSet {
            size_index: Some(3),
            clean: Some(false),
            tip: Some(0),
            ..AttributeSet::default()
        };

        let presence = attributes.presence();
        assert_eq!(presence.bits(), 0b1_1001);
        assert_eq!(
            presence.fields(),
            vec![AttributeField::SizeIndex, AttributeField::Clean, AttributeField::Tip]
        );
    }

    // Tests bits above the last field are ignored
    // Verified by iterating all sixteen bits
    #[test]
    fn test_presence_ignores_high_bits() {
        let presence = PresenceBitmap::from_bits(0xffe0);
        assert!(presence.fields().is_empty());
        assert!(!presence.contains(AttributeField::SizeIndex));

        let mut presence = PresenceBitmap::default();
        presence.insert(AttributeField::SymmetryDepth);
        assert_eq!(presence.bits(), 0b100);
    }

    // Tests clean decodes true only for byte 1
    // Verified by treating any non-zero byte as true
    #[test]
    fn test_clean_byte_decoding() {
        let mut attributes = AttributeSet::default();
        attributes.set_field_byte(AttributeField::Clean, 1);
        assert_eq!(attributes.clean, Some(true));

        attributes.set_field_byte(AttributeField::Clean, 2);
        assert_eq!(attributes.clean, Some(false));
        assert_eq!(attributes.field_byte(AttributeField::Clean), Some(0));
    }

    // Tests priced fields exclude the tip
    // Verified by counting every present field
    #[test]
    fn test_priced_field_count() {
        let attributes = AttributeSet {
            num_colors: Some(4),
            symmetry_depth: Some(0),
            tip: Some(9),
            ..AttributeSet::default()
        };
        assert_eq!(attributes.priced_field_count(), 2);
    }

    // Tests raw attributes reject values outside 8 bits by field name
    // Verified by wrapping 256 to 0
    #[test]
    fn test_validate_rejects_out_of_range() {
        let error = RawAttributes {
            num_colors: Some(256),
            ..RawAttributes::default()
        }
        .validate()
        .unwrap_err();
        assert!(error.is_validation());
        assert!(error.to_string().contains("num_colors"));

        let error = RawAttributes {
            tip: Some(-1),
            ..RawAttributes::default()
        }
        .validate()
        .unwrap_err();
        assert!(error.to_string().contains("tip"));
    }

    // Tests in-range raw attributes validate unchanged
    // Verified by dropping the clean flag during validation
    #[test]
    fn test_validate_accepts_bounds() {
        let raw = RawAttributes {
            size_index: Some(0),
            num_colors: Some(255),
            symmetry_depth: None,
            clean: Some(true),
            tip: Some(12),
        };
        let attributes = raw.validate().unwrap();

        assert_eq!(attributes.size_index, Some(0));
        assert_eq!(attributes.num_colors, Some(255));
        assert_eq!(attributes.symmetry_depth, None);
        assert_eq!(attributes.clean, Some(true));
        assert_eq!(RawAttributes::from(attributes), raw);
    }

    // Tests owner identities parse from 32-byte hex only
    // Verified by truncating long input
    #[test]
    fn test_owner_from_hex() {
        let hex = "ab".repeat(32);
        let owner = OwnerId::from_hex(&hex).unwrap();
        assert_eq!(owner.as_bytes(), &[0xab; 32]);
        assert_eq!(owner.to_string(), hex);

        assert!(OwnerId::from_hex("abcd").unwrap_err().is_format());
        assert!(OwnerId::from_hex(&"zz".repeat(32)).unwrap_err().is_format());
    }
}
