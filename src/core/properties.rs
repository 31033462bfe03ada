//! Property tests for the evaluation engine

use super::{Category, HiddenWord, KeyboardHints, Mode, evaluate_guess};
use proptest::prelude::*;

/// Small alphabet so duplicate letters show up often
const ALPHABET: &[u8] = b"aenrst";

fn letters(len: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(ALPHABET), len)
}

prop_compose! {
    /// A hidden word of length 6-8 plus a guess that carries its sequence
    fn arb_game()(
        len in 6usize..=8,
        seq_frac in 0.0f64..1.0,
        word in letters(8..=8),
        before in letters(0..=5),
        after in letters(0..=5),
    ) -> (HiddenWord, String) {
        let word = &word[..len];
        let index = ((len - 2) as f64 * seq_frac) as usize;
        let text = String::from_utf8(word.to_vec()).unwrap();
        let sequence = &text[index..index + 3];
        let hidden = HiddenWord::with_index(text.clone(), sequence, index).unwrap();

        // Keep the guess within 4..=8 letters
        let room = 5;
        let before_len = before.len().min(room);
        let after_len = after.len().min(room - before_len);
        let mut guess = before[..before_len].to_vec();
        guess.extend_from_slice(sequence.as_bytes());
        guess.extend_from_slice(&after[..after_len]);
        if guess.len() < 4 {
            guess.push(b'a');
        }

        (hidden, String::from_utf8(guess).unwrap())
    }
}

fn arb_mode() -> impl Strategy<Value = Mode> {
    prop_oneof![Just(Mode::Normal), Just(Mode::Hard)]
}

proptest! {
    #[test]
    fn prop_occurrence_bound((hidden, guess) in arb_game(), mode in arb_mode()) {
        let eval = evaluate_guess(&hidden, &guess, mode);

        for &letter in ALPHABET {
            let credited = eval
                .verdicts
                .iter()
                .filter(|v| v.letter == char::from(letter) && v.category.is_present())
                .count();
            prop_assert!(
                credited <= hidden.count_of(letter),
                "{} credited {} times in '{}' vs '{}'",
                char::from(letter), credited, guess, hidden
            );
        }
    }

    #[test]
    fn prop_sequence_integrity((hidden, guess) in arb_game(), mode in arb_mode()) {
        let eval = evaluate_guess(&hidden, &guess, mode);
        let flagged: Vec<_> = eval.verdicts.iter().filter(|v| v.is_sequence).collect();

        prop_assert_eq!(flagged.len(), 3);
        for verdict in flagged {
            prop_assert!(matches!(verdict.category, Category::Sequence | Category::Correct));
        }
    }

    #[test]
    fn prop_window_matches_guess_length((hidden, guess) in arb_game(), mode in arb_mode()) {
        let eval = evaluate_guess(&hidden, &guess, mode);
        prop_assert_eq!(eval.len(), guess.len());
        let letters: String = eval.verdicts.iter().map(|v| v.letter).collect();
        prop_assert_eq!(letters, guess);
    }

    #[test]
    fn prop_hard_mode_silence((hidden, guess) in arb_game()) {
        let eval = evaluate_guess(&hidden, &guess, Mode::Hard);

        for verdict in &eval.verdicts {
            prop_assert!(!matches!(
                verdict.category,
                Category::MisplacedEmpty | Category::IncorrectEmpty
            ));
        }
        for (_, category) in eval.hints.sorted() {
            prop_assert!(!matches!(
                category,
                Category::MisplacedEmpty | Category::IncorrectEmpty
            ));
        }
    }

    #[test]
    fn prop_win_detection((hidden, guess) in arb_game(), mode in arb_mode()) {
        let exact = evaluate_guess(&hidden, hidden.text(), mode);
        prop_assert!(exact.won);
        prop_assert!(exact.verdicts.iter().all(|v| v.category == Category::Correct));

        let other = evaluate_guess(&hidden, &guess, mode);
        prop_assert_eq!(other.won, guess == hidden.text());
    }

    #[test]
    fn prop_hint_monotonicity(
        games in prop::collection::vec(arb_game(), 1..6),
        mode in arb_mode(),
    ) {
        let mut hints = KeyboardHints::new();

        for (hidden, guess) in games {
            let before = hints.clone();
            hints.merge(&evaluate_guess(&hidden, &guess, mode).hints);

            for (letter, old) in before.sorted() {
                let new = hints.get(letter).unwrap();
                prop_assert!(!old.outranks(new), "{letter}: {old} demoted to {new}");
            }
        }
    }
}
