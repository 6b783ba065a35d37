// Continuity detection between the last beat and a candidate

use kinetic_notation_wasm::continuity::{classify_continuity, ReversalCategory};
use kinetic_notation_wasm::models::{Beat, GridMode, Location, Motion, MotionKind, Orientation, Prop, Sequence};

/// Helper to build a pro/pro beat from blue and red (start, end) pairs
fn shift_beat(letter: &str, blue: (Location, Location), red: (Location, Location)) -> Beat {
    Beat::new(
        letter,
        Motion::new(Prop::Blue, MotionKind::Pro, blue.0, blue.1, Orientation::In),
        Motion::new(Prop::Red, MotionKind::Pro, red.0, red.1, Orientation::In),
    )
}

fn single_beat_sequence(beat: Beat) -> Sequence {
    Sequence::from_beats(GridMode::Diamond, vec![beat]).unwrap()
}

#[test]
fn test_empty_sequence_always_not_applicable() {
    let empty = Sequence::new(GridMode::Diamond);
    let candidates = vec![
        shift_beat("A", (Location::S, Location::W), (Location::N, Location::E)),
        shift_beat("B", (Location::S, Location::E), (Location::N, Location::W)),
        Beat::letter_only("Φ", None),
    ];
    for candidate in &candidates {
        assert_eq!(classify_continuity(&empty, candidate), None);
    }
}

#[test]
fn test_primary_continuous_secondary_reversed() {
    // Last beat: blue cw, red cw
    let last = shift_beat("A", (Location::N, Location::E), (Location::S, Location::W));
    assert_eq!(last.blue_motion.unwrap().rotation(), kinetic_notation_wasm::RotationSense::Clockwise);
    assert_eq!(last.red_motion.unwrap().rotation(), kinetic_notation_wasm::RotationSense::Clockwise);

    // Candidate: blue cw, red ccw
    let candidate = shift_beat("B", (Location::E, Location::S), (Location::W, Location::S));
    assert_eq!(
        classify_continuity(&single_beat_sequence(last), &candidate),
        Some(ReversalCategory::OneReversal)
    );
}

#[test]
fn test_prop_order_does_not_matter() {
    let last = shift_beat("A", (Location::N, Location::E), (Location::S, Location::W));
    let blue_reversed = shift_beat("B", (Location::E, Location::N), (Location::W, Location::N));
    let red_reversed = shift_beat("C", (Location::E, Location::S), (Location::W, Location::S));

    let sequence = single_beat_sequence(last);
    assert_eq!(classify_continuity(&sequence, &blue_reversed), Some(ReversalCategory::OneReversal));
    assert_eq!(classify_continuity(&sequence, &red_reversed), Some(ReversalCategory::OneReversal));
}

#[test]
fn test_static_after_static_is_continuous() {
    let hold = Beat::new(
        "α",
        Motion::stationary(Prop::Blue, Location::N, Orientation::In),
        Motion::stationary(Prop::Red, Location::S, Orientation::In),
    );
    let sequence = single_beat_sequence(hold.clone());
    assert_eq!(classify_continuity(&sequence, &hold), Some(ReversalCategory::Continuous));
}

#[test]
fn test_only_last_beat_matters() {
    let first = shift_beat("A", (Location::S, Location::W), (Location::N, Location::E));
    let second = shift_beat("B", (Location::W, Location::N), (Location::E, Location::S));
    let sequence = Sequence::from_beats(GridMode::Diamond, vec![first, second]).unwrap();

    // second is blue cw, red cw; candidate reverses both
    let candidate = shift_beat("C", (Location::N, Location::W), (Location::S, Location::E));
    assert_eq!(classify_continuity(&sequence, &candidate), Some(ReversalCategory::TwoReversals));
}
