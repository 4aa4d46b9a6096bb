use placekey::*;

fn shape_only() -> PlaceKeyCodec {
    let config = PlaceKeyConfig {
        validation: ValidationMode::Shape,
        ..PlaceKeyConfig::default()
    };
    PlaceKeyCodec::with_config(H3oProvider::new(), config).unwrap()
}

#[test]
fn format_is_valid_table() {
    let codec = PlaceKeyCodec::h3o().unwrap();
    let cases = [
        ("222-227@dvt-smp-tvz", true),
        ("5vg-7gq-tvz", true),
        ("@5vg-7gq-tvz", true),
        ("zzz@5vg-7gq-tvz", true),
        ("222-zzz@5vg-7gq-tvz", true),
        ("2222-zzz@5vg-7gq-tvz", false),
        ("222-zzzz@5vg-7gq-tvz", false),
        ("22222222-zzzzzzzzz@5vg-7gq-tvz", false),
        ("@123-456-789", false),
        ("@abc", false),
        ("abc-xyz", false),
        ("abcxyz234", false),
        ("abc-345@abc-234-xyz", false),
        ("ebc-345@abc-234-xyz", false),
        ("bcd-345@", false),
        ("22-zzz@abc-234-xyz", false),
        ("222-zz@abc-234-xyz", false),
        ("@abc-234-xyz", false),
    ];
    for (key, want) in cases {
        assert_eq!(codec.format_is_valid(key), want, "{}", key);
    }
}

#[test]
fn shape_only_accepts_well_formed_non_cells() {
    let codec = shape_only();
    assert!(codec.format_is_valid("@abc-234-xyz"));
    assert!(codec.format_is_valid("222-227@abc-234-xyz"));
    // Shape failures still fail.
    assert!(!codec.format_is_valid("@123-456-789"));
    assert!(!codec.format_is_valid("abc-345@abc-234-xyz"));
    assert!(!codec.format_is_valid("bcd-345@"));
}

#[test]
fn multiple_separators_are_invalid() {
    let codec = PlaceKeyCodec::h3o().unwrap();
    assert!(!codec.format_is_valid("222@227@dvt-smp-tvz"));
    assert!(!codec.format_is_valid("@@dvt-smp-tvz"));
}

#[test]
fn empty_what_part_is_allowed() {
    let codec = PlaceKeyCodec::h3o().unwrap();
    assert!(codec.format_is_valid("@dvt-smp-tvz"));
    assert_eq!(split_parts("@dvt-smp-tvz").unwrap(), (None, "dvt-smp-tvz"));
    assert_eq!(
        split_parts("222-227@dvt-smp-tvz").unwrap(),
        (Some("222-227"), "dvt-smp-tvz")
    );
}

#[test]
fn invalid_cell_decodes_but_is_not_a_cell() {
    let codec = PlaceKeyCodec::h3o().unwrap();
    let index = codec.to_h3_int("@abc-234-xyz").unwrap();
    assert_eq!(index, 0x8a01448f3d807ff);
    assert!(!codec.provider().is_valid_index(index));
    assert!(matches!(
        codec.to_geo("@abc-234-xyz"),
        Err(PlaceKeyError::IndexInvalid(_))
    ));
}

#[test]
fn parsed_keys_round_trip_through_display() {
    let key: PlaceKey = "222-227@dvt-smp-tvz".parse().unwrap();
    assert_eq!(key.what(), Some("222-227"));
    assert_eq!(key.to_string(), "222-227@dvt-smp-tvz");
    assert_eq!(key.to_where_only().to_string(), "@dvt-smp-tvz");

    assert!("2222-zzz@5vg-7gq-tvz".parse::<PlaceKey>().is_err());
}
