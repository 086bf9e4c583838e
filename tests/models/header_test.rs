#[cfg(test)]
mod tests {
    use ged_reader::models::Field;
    use ged_reader::{Encoding, Header, Submitter};

    #[test]
    fn test_encoding_tags_round_trip_through_names() {
        for (tag, encoding) in [
            ("ANSEL", Encoding::Ansel),
            ("UTF-8", Encoding::Utf8),
            ("UNICODE", Encoding::Unicode),
            ("ASCII", Encoding::Ascii),
        ] {
            assert_eq!(Encoding::from_tag(tag), Some(encoding));
            assert_eq!(encoding.name(), tag);
        }
        assert_eq!(Encoding::from_tag("UTF8"), Some(Encoding::Utf8));
        assert_eq!(Encoding::from_tag(" ansel "), None);
        assert_eq!(Encoding::from_tag("EBCDIC"), None);
    }

    #[test]
    fn test_header_renders_source_version_and_encoding() {
        let header = Header::new("FamilyTracker 2.1", "5.5", Encoding::Unicode);
        assert_eq!(
            header.to_string(),
            "HEADER:\nSource: FamilyTracker 2.1\nVersion: 5.5\nEncoding: UNICODE"
        );
    }

    #[test]
    fn test_submitter_without_address_renders_name_and_fields_only() {
        let mut submitter = Submitter::new("Grace Hopper");
        submitter.other_fields.push(Field::new("LANG", "English"));
        assert_eq!(
            submitter.to_string(),
            "SUBMITTER:\nName: Grace Hopper\nLANG: English"
        );
    }

    #[test]
    fn test_full_header_block_keeps_document_order() {
        let mut submitter = Submitter::new("Grace Hopper");
        submitter.address = Some("1 Navy Way".to_string());
        let mut header = Header::new("FamilyTracker 2.1", "5.5.1", Encoding::Utf8);
        header.submitter = Some(submitter);
        header.other_fields.push(Field::new("DATE", "12 AUG 2001"));
        header.other_fields.push(Field::new("FILE", "smith.ged"));

        assert_eq!(
            header.to_string(),
            "HEADER:\nSource: FamilyTracker 2.1\nVersion: 5.5.1\nEncoding: UTF-8\n\
             SUBMITTER:\nName: Grace Hopper\nAddress: 1 Navy Way\n\
             DATE: 12 AUG 2001\nFILE: smith.ged"
        );
    }

    #[test]
    fn test_field_display_joins_tag_and_value() {
        assert_eq!(Field::new("PHON", "555-0100").to_string(), "PHON: 555-0100");
        assert_eq!(Field::new("NOTE", "").to_string(), "NOTE: ");
    }
}
