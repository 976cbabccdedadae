use fretboard_rs::core::{Fingering, FrettedNote, Marker, Mute, encode_fingering, parse_fingering};
use fretboard_rs::error::FretboardError;

fn assert_fretted_note(expected_string: u32, expected_fret: u32, marker: Marker) {
    let note = marker.as_fretted_note().expect("fretted note");
    assert_eq!(note.string_number(), expected_string);
    assert_eq!(note.fret_number(), expected_fret);
}

fn assert_muted_string(expected_string: u32, marker: Marker) {
    let mute = marker.as_mute().expect("muted string");
    assert_eq!(mute.string_number(), expected_string);
}

#[test]
fn parses_six_string_fingering() {
    let fingering = parse_fingering("2|3|2|0|x|x").expect("fingering");

    assert_eq!(fingering.len(), 6);
    assert_fretted_note(1, 2, fingering[0]);
    assert_fretted_note(2, 3, fingering[1]);
    assert_fretted_note(3, 2, fingering[2]);
    assert_fretted_note(4, 0, fingering[3]);
    assert_muted_string(5, fingering[4]);
    assert_muted_string(6, fingering[5]);
}

#[test]
fn parses_four_string_fingering() {
    let fingering = parse_fingering("2|3|2|0").expect("fingering");

    assert_eq!(fingering.len(), 4);
    assert_fretted_note(1, 2, fingering[0]);
    assert_fretted_note(2, 3, fingering[1]);
    assert_fretted_note(3, 2, fingering[2]);
    assert_fretted_note(4, 0, fingering[3]);
}

#[test]
fn parses_seven_string_fingering() {
    let fingering = parse_fingering("2|3|2|0|x|x|12").expect("fingering");

    assert_eq!(fingering.len(), 7);
    assert_muted_string(5, fingering[4]);
    assert_muted_string(6, fingering[5]);
    assert_fretted_note(7, 12, fingering[6]);
}

#[test]
fn encodes_back_to_original_dsl() {
    for input in ["2|3|2|0|x|x", "2|3|2|0", "2|3|2|0|x|x|12", "x", "0"] {
        let markers = parse_fingering(input).expect("fingering");
        assert_eq!(encode_fingering(&markers), input);
    }
}

#[test]
fn encode_ignores_string_numbers() {
    let markers = vec![
        Marker::from(FrettedNote::new(3, 5).expect("note")),
        Marker::from(Mute::new(1).expect("mute")),
    ];
    assert_eq!(encode_fingering(&markers), "5|x");
}

#[test]
fn uppercase_mute_is_not_accepted() {
    assert_eq!(
        parse_fingering("2|X"),
        Err(FretboardError::InvalidFingeringFormat {
            segment: "X".to_owned()
        })
    );
}

#[test]
fn negative_fret_is_rejected() {
    let err = "0|-2".parse::<Fingering>().expect_err("negative fret");
    assert_eq!(err.to_string(), "invalid fingering format: `-2`");
}

#[test]
fn duplicate_strings_are_kept_in_order() {
    let fingering = Fingering::new(vec![
        Marker::fretted(1, 3).expect("first"),
        Marker::fretted(1, 5).expect("second"),
    ]);
    assert_eq!(fingering.len(), 2);
    assert_eq!(fingering.to_string(), "3|5");
    assert_eq!(
        fingering.find_fretted_note(1, 3).map(FrettedNote::fret_number),
        Some(3)
    );
}
