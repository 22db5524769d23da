use rs_wordle_suggest::*;

use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

fn result<'a>(guess: &'a str, feedback: &str) -> GuessResult<'a> {
    GuessResult::from_feedback(guess, feedback).unwrap()
}

#[test]
fn filter_words_empty_snapshot_returns_dictionary() {
    let dictionary = ["CRANE", "SLATE", "TRACE", "GRACE"];

    assert_eq!(
        filter_words(&dictionary, &ConstraintSnapshot::new()),
        dictionary.to_vec()
    );
}

#[test]
fn filter_words_empty_dictionary() {
    let dictionary: [&str; 0] = [];
    let snapshot = ConstraintSnapshot::from_result(&result("CRANE", ".g...")).unwrap();

    assert!(filter_words(&dictionary, &snapshot).is_empty());
}

#[test]
fn filter_words_only_removes_tried_words_without_other_constraints() {
    let mut snapshot = ConstraintSnapshot::new();
    snapshot.tried_words.insert(Arc::from("SLATE"));

    assert_eq!(
        filter_words(&["CRANE", "SLATE", "TRACE", "SLATE"], &snapshot),
        vec!["CRANE", "TRACE"]
    );
}

#[test]
fn filter_words_keeps_duplicates_in_order() {
    assert_eq!(
        filter_words(&["TRACE", "CRANE", "TRACE"], &ConstraintSnapshot::new()),
        vec!["TRACE", "CRANE", "TRACE"]
    );
}

#[test]
fn filter_words_never_returns_tried_words() {
    let mut snapshot = ConstraintSnapshot::new();
    snapshot.known_positions[1] = Some('R');
    snapshot.present_letters.insert('R');
    snapshot.tried_words.insert(Arc::from("TRACE"));

    assert_eq!(
        filter_words(&["TRACE", "GRACE", "SLATE"], &snapshot),
        vec!["GRACE"]
    );
}

#[test]
fn filter_words_green_positions() {
    let mut snapshot = ConstraintSnapshot::new();
    snapshot.known_positions[0] = Some('G');
    snapshot.known_positions[4] = Some('E');

    assert_eq!(
        filter_words(&["CRANE", "GRACE", "GUIDE", "GRAND"], &snapshot),
        vec!["GRACE", "GUIDE"]
    );
}

#[test]
fn filter_words_redundant_green_keeps_consistent_words() {
    let dictionary = ["CRANE", "GRACE", "GUIDE", "GRAND"];
    let mut snapshot = ConstraintSnapshot::new();
    snapshot.absent_letters.insert('U');
    let before = filter_words(&dictionary, &snapshot);
    assert!(before.contains(&"GRACE"));

    snapshot.known_positions[2] = Some('A');

    assert!(filter_words(&dictionary, &snapshot).contains(&"GRACE"));
}

#[test]
fn filter_words_present_letters() {
    let mut snapshot = ConstraintSnapshot::new();
    snapshot.present_letters = HashSet::from(['A', 'T']);

    assert_eq!(
        filter_words(&["CRANE", "SLATE", "TRACE", "TOKEN"], &snapshot),
        vec!["SLATE", "TRACE"]
    );
}

#[test]
fn filter_words_forbidden_position_excludes_even_if_letter_elsewhere() {
    let mut snapshot = ConstraintSnapshot::new();
    snapshot.present_letters.insert('A');
    snapshot
        .forbidden_positions
        .insert(LocatedLetter::new('A', 2));

    assert_eq!(
        filter_words(&["ABACK", "BASIC", "BRINK", "CRANE"], &snapshot),
        vec!["BASIC"]
    );
}

#[test]
fn filter_words_absent_letters() {
    let mut snapshot = ConstraintSnapshot::new();
    snapshot.absent_letters = HashSet::from(['E', 'S']);

    assert_eq!(
        filter_words(&["CRANE", "BRINK", "TRUNK", "SLATE"], &snapshot),
        vec!["BRINK", "TRUNK"]
    );
}

#[test]
fn filter_words_exact_count_overrides_absent() {
    let mut snapshot = ConstraintSnapshot::new();
    snapshot.absent_letters.insert('E');
    snapshot.exact_counts.insert('E', 1);

    assert_eq!(
        filter_words(&["TOKEN", "QUEEN", "BRAWN", "EERIE"], &snapshot),
        vec!["TOKEN"]
    );
}

#[test]
fn filter_words_exact_count_of_two() {
    let mut snapshot = ConstraintSnapshot::new();
    snapshot.exact_counts = HashMap::from([('E', 2)]);

    assert_eq!(
        filter_words(&["TOKEN", "QUEEN", "EERIE", "GEESE"], &snapshot),
        vec!["QUEEN"]
    );
}

#[test]
fn filter_words_repeated_letter_feedback() -> Result<(), WordleError> {
    let dictionary = ["SPEED", "ABIDE", "EAGER", "TOKEN", "QUEEN"];
    let snapshot = ConstraintSnapshot::from_result(&result("SPEED", "...g."))?;

    assert_eq!(snapshot.exact_counts.get(&'E'), Some(&1));
    assert_eq!(filter_words(&dictionary, &snapshot), vec!["TOKEN"]);
    Ok(())
}

#[test]
fn filter_words_crane_scenario_leaves_nothing() -> Result<(), WordleError> {
    let dictionary = ["CRANE", "SLATE", "TRACE", "GRACE"];
    let snapshot = ConstraintSnapshot::from_result(&result("CRANE", ".g..."))?;

    assert_eq!(snapshot.known_positions, [None, Some('R'), None, None, None]);
    assert_eq!(snapshot.present_letters, HashSet::from(['R']));
    assert_eq!(snapshot.absent_letters, HashSet::from(['C', 'A', 'N', 'E']));
    assert!(filter_words(&dictionary, &snapshot).is_empty());
    Ok(())
}

#[test]
fn filter_words_contradictory_constraints_leave_nothing() {
    let mut snapshot = ConstraintSnapshot::new();
    snapshot.known_positions = [Some('C'), Some('R'), Some('A'), Some('N'), Some('E')];
    snapshot.present_letters.insert('Z');

    assert!(filter_words(&["CRANE", "ZEBRA"], &snapshot).is_empty());
}

#[test]
fn filter_words_is_idempotent() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(["CRANE", "BRINK", "TRUNK", "SLATE", "DRINK"]);
    let mut snapshot = ConstraintSnapshot::new();
    snapshot.update(&result("CRANE", ".g.g."))?;
    let snapshot_before = snapshot.clone();

    let first = filter_words(&bank, &snapshot);
    let second = filter_words(&bank, &snapshot);

    assert_eq!(first, second);
    assert_eq!(snapshot, snapshot_before);
    Ok(())
}

#[test]
fn filter_words_after_several_guesses() -> Result<(), WordleError> {
    let bank = WordBank::from_iterator(["CRANE", "BRINK", "TRUNK", "DRINK", "PRINT", "GRUNT"]);
    let mut snapshot = ConstraintSnapshot::new();

    snapshot.update(&result("CRANE", ".g.g."))?;
    assert_eq!(filter_words(&bank, &snapshot).len(), 5);

    snapshot.update(&result("TRUNK", ".g.gg"))?;
    let candidates = filter_words(&bank, &snapshot);

    assert_eq!(
        candidates,
        vec![Arc::<str>::from("BRINK"), Arc::<str>::from("DRINK")]
    );
    Ok(())
}

#[test]
fn filter_words_par_matches_filter_words() -> Result<(), WordleError> {
    let words: Vec<String> = (b'A'..=b'Z')
        .flat_map(|first| {
            ["RANE", "RINK", "RUNK", "LATE", "EEDS"]
                .iter()
                .map(move |rest| format!("{}{}", first as char, rest))
        })
        .collect();
    let mut snapshot = ConstraintSnapshot::new();
    snapshot.update(&result("CRANE", ".g.g."))?;

    let sequential = filter_words(&words, &snapshot);
    let parallel = filter_words_par(&words, &snapshot);

    assert!(!sequential.is_empty());
    assert_eq!(sequential, parallel);
    Ok(())
}
