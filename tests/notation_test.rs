use playsort::ranking::{Letter, Notation, rank_by_notation, to_notation};
use playsort::types::Track;

// Helper function to create a track with key and mode
fn create_test_track(id: &str, key: Option<i32>, mode: Option<i32>) -> Track {
    Track {
        key,
        mode,
        ..Track::new(id, format!("Track {}", id), "Artist")
    }
}

fn ids(tracks: &[Track]) -> Vec<&str> {
    tracks.iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn test_to_notation_full_table() {
    let major = [
        "8B", "3B", "10B", "5B", "12B", "7B", "2B", "9B", "4B", "11B", "6B", "1B",
    ];
    let minor = [
        "5A", "12A", "7A", "2A", "9A", "4A", "11A", "6A", "1A", "8A", "3A", "10A",
    ];

    for pitch_class in 0..12 {
        let idx = pitch_class as usize;
        assert_eq!(
            to_notation(pitch_class, 1).map(|n| n.to_string()).as_deref(),
            Some(major[idx]),
            "major pitch class {}",
            pitch_class
        );
        assert_eq!(
            to_notation(pitch_class, 0).map(|n| n.to_string()).as_deref(),
            Some(minor[idx]),
            "minor pitch class {}",
            pitch_class
        );
    }
}

#[test]
fn test_to_notation_out_of_domain() {
    // Spotify reports -1 when no key was detected
    assert_eq!(to_notation(-1, 1), None);
    assert_eq!(to_notation(12, 0), None);
    assert_eq!(to_notation(100, 1), None);
    assert_eq!(to_notation(0, 2), None);
    assert_eq!(to_notation(5, -1), None);
}

#[test]
fn test_to_notation_rings() {
    let c_major = to_notation(0, 1).unwrap();
    assert_eq!(c_major.position(), 8);
    assert_eq!(c_major.letter(), Letter::B);

    let a_minor = to_notation(9, 0).unwrap();
    assert_eq!(a_minor.position(), 8);
    assert_eq!(a_minor.letter(), Letter::A);

    // relative major/minor share a position
    assert_eq!(c_major.relative(), a_minor);
}

#[test]
fn test_rank_by_notation_end_to_end() {
    let tracks = vec![
        create_test_track("A", Some(0), Some(1)),
        create_test_track("B", Some(1), Some(1)),
        create_test_track("C", Some(0), Some(0)),
    ];

    let ranked = rank_by_notation(tracks);

    // 3B, 5A, 8B: ascending wheel position
    assert_eq!(ids(&ranked), vec!["B", "C", "A"]);
    let notations: Vec<String> = ranked
        .iter()
        .map(|t| t.notation.unwrap().to_string())
        .collect();
    assert_eq!(notations, vec!["3B", "5A", "8B"]);
}

#[test]
fn test_rank_by_notation_is_numeric() {
    let tracks = vec![
        create_test_track("ten", Some(2), Some(1)),
        create_test_track("eleven", Some(9), Some(1)),
        create_test_track("nine", Some(7), Some(1)),
        create_test_track("one", Some(11), Some(1)),
    ];

    let ranked = rank_by_notation(tracks);

    // lexical order would put "10B" and "11B" before "9B"
    assert_eq!(ids(&ranked), vec!["one", "nine", "ten", "eleven"]);
}

#[test]
fn test_rank_by_notation_letter_tie_break() {
    let tracks = vec![
        create_test_track("major", Some(0), Some(1)),
        create_test_track("minor", Some(9), Some(0)),
    ];

    let ranked = rank_by_notation(tracks);

    // both at position 8, A before B
    assert_eq!(ids(&ranked), vec!["minor", "major"]);
}

#[test]
fn test_rank_by_notation_is_stable() {
    let tracks = vec![
        create_test_track("first", Some(0), Some(1)),
        create_test_track("other", Some(7), Some(1)),
        create_test_track("second", Some(0), Some(1)),
    ];
    assert_eq!(
        ids(&rank_by_notation(tracks)),
        vec!["first", "second", "other"]
    );

    let tracks = vec![
        create_test_track("second", Some(0), Some(1)),
        create_test_track("other", Some(7), Some(1)),
        create_test_track("first", Some(0), Some(1)),
    ];
    assert_eq!(
        ids(&rank_by_notation(tracks)),
        vec!["second", "first", "other"]
    );
}

#[test]
fn test_rank_by_notation_unknown_keys_go_last() {
    let tracks = vec![
        create_test_track("no-key", None, None),
        create_test_track("undetected", Some(-1), Some(1)),
        create_test_track("known", Some(4), Some(1)),
        create_test_track("no-mode", Some(4), None),
    ];

    let ranked = rank_by_notation(tracks);

    assert_eq!(
        ids(&ranked),
        vec!["known", "no-key", "undetected", "no-mode"]
    );
    assert!(ranked[0].notation.is_some());
    assert!(ranked[1..].iter().all(|t| t.notation.is_none()));
}

#[test]
fn test_rank_by_notation_empty() {
    assert!(rank_by_notation(Vec::new()).is_empty());
}

#[test]
fn test_notation_ordering() {
    let n = |s: &str| s.parse::<Notation>().unwrap();

    assert!(n("9B") < n("10B"));
    assert!(n("10B") < n("11B"));
    assert!(n("10A") < n("10B"));
    assert!(n("9B") < n("10A"));
}

#[test]
fn test_notation_parse() {
    assert_eq!(
        "10a".parse::<Notation>().unwrap(),
        Notation::new(10, Letter::A).unwrap()
    );
    assert_eq!(
        " 1B ".parse::<Notation>().unwrap(),
        Notation::new(1, Letter::B).unwrap()
    );

    assert!("13B".parse::<Notation>().is_err());
    assert!("0A".parse::<Notation>().is_err());
    assert!("B".parse::<Notation>().is_err());
    assert!("8C".parse::<Notation>().is_err());
    assert!("".parse::<Notation>().is_err());
}

#[test]
fn test_notation_new_rejects_positions() {
    assert!(Notation::new(0, Letter::A).is_none());
    assert!(Notation::new(13, Letter::B).is_none());
    assert!(Notation::new(12, Letter::B).is_some());
}

#[test]
fn test_notation_compatibility() {
    let n = |s: &str| s.parse::<Notation>().unwrap();

    let compatible: Vec<String> = n("8B").compatible().iter().map(|c| c.to_string()).collect();
    assert_eq!(compatible, vec!["8B", "7B", "9B", "8A"]);

    // the wheel wraps around
    assert!(n("12A").is_compatible(n("1A")));
    assert!(n("1B").is_compatible(n("12B")));
    assert_eq!(n("1B").rotate(-1), n("12B"));
    assert_eq!(n("12A").rotate(1), n("1A"));

    assert!(n("5A").is_compatible(n("5B")));
    assert!(!n("8B").is_compatible(n("10B")));
    assert!(!n("8B").is_compatible(n("9A")));
}

#[test]
fn test_notation_serializes_as_string() {
    let notation = to_notation(0, 1).unwrap();
    assert_eq!(serde_json::to_string(&notation).unwrap(), "\"8B\"");

    let parsed: Notation = serde_json::from_str("\"11A\"").unwrap();
    assert_eq!(parsed, to_notation(6, 0).unwrap());

    assert!(serde_json::from_str::<Notation>("\"14A\"").is_err());
}
