#[cfg(test)]
mod tests {
    use ged_reader::{Encoding, FamId, GedcomError, GedcomReaderConfig, IndiId, parse_str};

    fn lenient() -> GedcomReaderConfig {
        GedcomReaderConfig {
            validate_structure: false,
            ..GedcomReaderConfig::default()
        }
    }

    #[test]
    fn test_individual_events_carry_date_place_and_extra_fields() {
        let source = "0 @I1@ INDI\n1 NAME Carol /Smith/\n\
                      1 BIRT\n2 DATE 1 JAN 1990\n2 PLAC Guelph\n2 AGNC Hospital\n\
                      1 DEAT\n2 DATE 3 MAR 2050";
        let graph = parse_str(source, &lenient()).unwrap();

        let carol = graph.individual(IndiId(0));
        assert_eq!(carol.events.len(), 2);
        assert_eq!(carol.events[0].tag, "BIRT");
        assert_eq!(carol.events[0].date.as_deref(), Some("1 JAN 1990"));
        assert_eq!(carol.events[0].place.as_deref(), Some("Guelph"));
        assert_eq!(carol.events[0].other_fields[0].tag, "AGNC");
        assert_eq!(carol.events[1].tag, "DEAT");
        assert_eq!(carol.birth_date(), Some("1 JAN 1990"));
    }

    #[test]
    fn test_unrecognised_tags_are_kept_in_document_order() {
        let source = "0 @I1@ INDI\n1 NAME Alice /Smith/\n1 SEX F\n1 NOTE kept\n1 OCCU Engineer";
        let graph = parse_str(source, &lenient()).unwrap();

        let tags: Vec<&str> = graph
            .individual(IndiId(0))
            .other_fields
            .iter()
            .map(|f| f.tag.as_str())
            .collect();
        assert_eq!(tags, vec!["SEX", "NOTE", "OCCU"]);
    }

    #[test]
    fn test_family_records_link_spouses_children_and_events() {
        let source = "0 @I1@ INDI\n1 NAME Alice /Smith/\n\
                      0 @I2@ INDI\n1 NAME Bob /Smith/\n\
                      0 @I3@ INDI\n1 NAME Carol /Smith/\n\
                      0 @F1@ FAM\n1 HUSB @I2@\n1 WIFE @I1@\n1 CHIL @I3@\n\
                      1 MARR\n2 DATE 12 JUN 1985\n1 NCHI 1";
        let graph = parse_str(source, &lenient()).unwrap();

        let family = graph.family(FamId(0));
        assert_eq!(family.wife, Some(IndiId(0)));
        assert_eq!(family.husband, Some(IndiId(1)));
        assert_eq!(family.children, vec![IndiId(2)]);
        assert_eq!(family.events[0].tag, "MARR");
        assert_eq!(family.events[0].date.as_deref(), Some("12 JUN 1985"));
        assert_eq!(family.other_fields[0].tag, "NCHI");
        // Memberships are back-filled from the family side.
        for id in [IndiId(0), IndiId(1), IndiId(2)] {
            assert_eq!(graph.individual(id).families.as_slice(), &[FamId(0)]);
        }
    }

    #[test]
    fn test_fams_and_famc_agree_with_family_links() {
        let source = "0 @I1@ INDI\n1 NAME Alice /Smith/\n1 FAMS @F1@\n1 FAMC @F2@\n\
                      0 @F1@ FAM\n1 WIFE @I1@\n\
                      0 @F2@ FAM\n1 CHIL @I1@";
        let graph = parse_str(source, &lenient()).unwrap();

        assert_eq!(
            graph.individual(IndiId(0)).families.as_slice(),
            &[FamId(0), FamId(1)]
        );
        assert_eq!(graph.family(FamId(0)).wife, Some(IndiId(0)));
        assert_eq!(graph.family(FamId(1)).children, vec![IndiId(0)]);
    }

    #[test]
    fn test_family_with_only_children_parses_as_spouseless() {
        let source = "0 @I1@ INDI\n1 NAME Carol /Smith/\n0 @F1@ FAM\n1 CHIL @I1@";
        let graph = parse_str(source, &lenient()).unwrap();

        let family = graph.family(FamId(0));
        assert_eq!(family.wife, None);
        assert_eq!(family.husband, None);
        assert_eq!(family.children, vec![IndiId(0)]);
        assert_eq!(graph.individual(IndiId(0)).families.as_slice(), &[FamId(0)]);
    }

    #[test]
    fn test_header_and_submitter_are_fully_extracted() {
        let source = "0 HEAD\n1 SOUR FamilyTracker\n1 GEDC\n2 VERS 5.5\n1 CHAR UTF-8\n1 SUBM @U1@\n\
                      0 @U1@ SUBM\n1 NAME Grace Hopper\n1 ADDR 12 Maple St\n2 CONT Guelph, ON\n\
                      0 TRLR";
        let graph = parse_str(source, &GedcomReaderConfig::default()).unwrap();

        let header = graph.header().expect("header should be present");
        assert_eq!(header.source, "FamilyTracker");
        assert_eq!(header.gedc_version, "5.5");
        assert_eq!(header.encoding, Encoding::Utf8);
        let submitter = header.submitter.as_ref().expect("submitter resolved");
        assert_eq!(submitter.name, "Grace Hopper");
        assert_eq!(submitter.address.as_deref(), Some("12 Maple St\nGuelph, ON"));
    }

    #[test]
    fn test_missing_header_pieces_are_invalid_when_validating() {
        let no_char = "0 HEAD\n1 SOUR T\n1 GEDC\n2 VERS 5.5\n0 TRLR";
        let err = parse_str(no_char, &GedcomReaderConfig::default()).unwrap_err();
        assert!(matches!(err, GedcomError::InvalidHeader { .. }));

        let bad_char = "0 HEAD\n1 SOUR T\n1 GEDC\n2 VERS 5.5\n1 CHAR EBCDIC\n0 TRLR";
        let err = parse_str(bad_char, &GedcomReaderConfig::default()).unwrap_err();
        match err {
            GedcomError::InvalidHeader { line, .. } => assert_eq!(line, 5),
            other => panic!("expected InvalidHeader, got {other:?}"),
        }
    }

    #[test]
    fn test_submitter_requirement_is_opt_in() {
        let source = "0 HEAD\n1 SOUR T\n1 GEDC\n2 VERS 5.5\n1 CHAR ASCII\n0 TRLR";
        assert!(parse_str(source, &GedcomReaderConfig::default()).is_ok());

        let strict = GedcomReaderConfig {
            require_submitter: true,
            ..GedcomReaderConfig::default()
        };
        let err = parse_str(source, &strict).unwrap_err();
        assert!(matches!(err, GedcomError::InvalidHeader { .. }));
    }

    #[test]
    fn test_duplicate_cross_references_are_rejected() {
        let source = "0 @I1@ INDI\n1 NAME Alice /Smith/\n0 @I1@ INDI\n1 NAME Bob /Smith/";
        let err = parse_str(source, &lenient()).unwrap_err();
        assert!(matches!(err, GedcomError::InvalidRecord { line: 3, .. }));
    }

    #[test]
    fn test_pointer_to_the_wrong_record_type_is_rejected() {
        let source = "0 @I1@ INDI\n1 NAME Alice /Smith/\n0 @F1@ FAM\n1 WIFE @F1@";
        let err = parse_str(source, &lenient()).unwrap_err();
        match err {
            GedcomError::InvalidRecord { reason, line } => {
                assert_eq!(line, 4);
                assert!(reason.contains("not an individual"));
            }
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_error_messages_name_reason_and_line() {
        let source = "0 @F1@ FAM\n1 CHIL @I9@";
        let err = parse_str(source, &lenient()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("@I9@"));
        assert!(message.contains("line 2"));
    }
}
