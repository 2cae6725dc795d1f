//! Property tests for guess evaluation

use neno::core::{GuessResult, LetterState, Word};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = Word> {
    // Small alphabet so repeated letters are common
    "[a-e]{5}".prop_map(|s| Word::new(s).unwrap())
}

fn count_letter(word: &Word, letter: u8) -> usize {
    word.text().matches(char::from(letter)).count()
}

proptest! {
    #[test]
    fn correct_marks_exactly_matching_positions(guess in word(), solution in word()) {
        let result = GuessResult::evaluate(&guess, &solution).unwrap();
        for (i, state) in result.states().iter().enumerate() {
            let same = guess.letters()[i] == solution.letters()[i];
            prop_assert_eq!(*state == LetterState::Correct, same);
        }
    }

    #[test]
    fn marked_letters_match_shared_multiplicity(guess in word(), solution in word()) {
        let result = GuessResult::evaluate(&guess, &solution).unwrap();
        for letter in b'a'..=b'e' {
            let marked = guess
                .letters()
                .iter()
                .zip(result.states())
                .filter(|(b, s)| **b == letter && **s != LetterState::Absent)
                .count();
            let expected = count_letter(&guess, letter).min(count_letter(&solution, letter));
            prop_assert_eq!(marked, expected);
        }
    }

    #[test]
    fn solution_against_itself_is_solved(solution in word()) {
        let result = GuessResult::evaluate(&solution, &solution).unwrap();
        prop_assert!(result.is_solved());
        prop_assert_eq!(result.count(LetterState::Correct), 5);
    }

    #[test]
    fn emoji_row_has_one_symbol_per_letter(guess in word(), solution in word()) {
        let result = GuessResult::evaluate(&guess, &solution).unwrap();
        prop_assert_eq!(result.to_emoji().chars().count(), 5);
    }
}
