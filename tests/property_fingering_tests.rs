use fretboard_rs::core::{
    Fingering, Marker, encode_fingering, find_fretted_note, find_muted_string, find_open_string,
    parse_fingering,
};
use proptest::prelude::*;

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("x".to_owned()),
        (0u32..25).prop_map(|fret| fret.to_string()),
    ]
}

proptest! {
    #[test]
    fn decode_then_encode_reproduces_input(segments in prop::collection::vec(segment(), 1..10)) {
        let input = segments.join("|");
        let markers = parse_fingering(&input).expect("valid fingering");

        prop_assert_eq!(markers.len(), segments.len());
        for (index, marker) in markers.iter().enumerate() {
            prop_assert_eq!(marker.string_number() as usize, index + 1);
        }
        prop_assert_eq!(encode_fingering(&markers), input);
    }

    #[test]
    fn replace_keeps_length_and_other_strings(
        segments in prop::collection::vec(segment(), 1..10),
        target in 0usize..10,
        fret in prop::option::of(0u32..25),
    ) {
        let input = segments.join("|");
        let mut chord: Fingering = input.parse().expect("valid fingering");
        let string_number = (target % segments.len()) as u32 + 1;
        let marker = match fret {
            Some(fret) => Marker::fretted(string_number, fret).expect("note"),
            None => Marker::mute(string_number).expect("mute"),
        };

        chord.replace_on_same_string(marker);

        prop_assert_eq!(chord.len(), segments.len());
        let encoded = chord.encode();
        let after: Vec<&str> = encoded.split('|').collect();
        for (index, (before, after)) in segments.iter().zip(&after).enumerate() {
            if index + 1 == string_number as usize {
                prop_assert_eq!(*after, marker.to_string());
            } else {
                prop_assert_eq!(before.as_str(), *after);
            }
        }
    }

    #[test]
    fn lookups_are_exclusive_in_parsed_chords(segments in prop::collection::vec(segment(), 1..10)) {
        let markers = parse_fingering(&segments.join("|")).expect("valid fingering");
        for string_number in 1..=segments.len() as u32 {
            let muted = find_muted_string(&markers, string_number).is_some();
            let open = find_open_string(&markers, string_number).is_some();
            let fretted = (1..25).any(|fret| find_fretted_note(&markers, string_number, fret).is_some());
            prop_assert!(!(muted && (open || fretted)));
            prop_assert!(muted || open || fretted);
        }
    }

    #[test]
    fn arbitrary_text_never_panics(text in ".{0,40}") {
        if let Ok(markers) = parse_fingering(&text) {
            prop_assert_eq!(markers.len(), text.split('|').count());
        }
    }
}
