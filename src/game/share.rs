//! Shareable result text and end-of-game messages

use super::{Attempt, GameConfig};
use crate::core::Word;
use std::fmt::Write;

/// Render the spoiler-free result grid
///
/// ```text
/// Neno 3/6
///
/// ⬜🟨⬜⬜🟩
/// 🟩🟩⬜🟨🟩
/// 🟩🟩🟩🟩🟩
///
/// #Neno
/// ```
#[must_use]
pub fn render_share_text(config: &GameConfig, attempts: &[Attempt]) -> String {
    let mut text = format!(
        "{} {}/{}\n\n",
        config.title,
        attempts.len(),
        config.max_attempts
    );
    for attempt in attempts {
        let _ = writeln!(text, "{}", attempt.result.to_emoji());
    }
    if !config.share_reference.is_empty() {
        let _ = write!(text, "\n{}", config.share_reference);
    }
    text
}

/// Web search for the meaning of a revealed solution
#[must_use]
pub fn meaning_url(solution: &Word) -> String {
    format!("https://www.google.com/search?q=meaning+of+{solution}+in+swahili")
}

/// Congratulation shown after a win in `attempts` guesses
#[must_use]
pub const fn win_message(attempts: usize) -> &'static str {
    match attempts {
        1 => "Gwiji! (Genius)",
        2 => "Bora Sana! (Magnificent)",
        3 => "Vizuri Sana! (Impressive)",
        4 => "Vizuri! (Splendid)",
        5 => "Sawa! (Great)",
        6 => "Hatimaye! (Phew)",
        _ => "Hongera! (Congratulations)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GuessResult, Word};

    fn attempt(guess: &str, solution: &str) -> Attempt {
        let guess = Word::new(guess).unwrap();
        let result = GuessResult::evaluate(&guess, &Word::new(solution).unwrap()).unwrap();
        Attempt { guess, result }
    }

    #[test]
    fn renders_header_rows_and_reference() {
        let attempts = [attempt("mbuzi", "simba"), attempt("simba", "simba")];
        let text = render_share_text(&GameConfig::default(), &attempts);
        assert_eq!(text, "Neno 2/6\n\n🟨🟨⬜⬜🟨\n🟩🟩🟩🟩🟩\n\n#Neno");
    }

    #[test]
    fn empty_reference_is_omitted() {
        let config = GameConfig {
            share_reference: String::new(),
            ..GameConfig::default()
        };
        let text = render_share_text(&config, &[attempt("tembo", "simba")]);
        assert_eq!(text, "Neno 1/6\n\n⬜⬜🟩🟩⬜\n");
    }

    #[test]
    fn meaning_link_names_the_word() {
        assert_eq!(
            meaning_url(&Word::new("twiga").unwrap()),
            "https://www.google.com/search?q=meaning+of+twiga+in+swahili"
        );
    }

    #[test]
    fn win_messages_by_attempt() {
        assert_eq!(win_message(1), "Gwiji! (Genius)");
        assert_eq!(win_message(6), "Hatimaye! (Phew)");
        assert_eq!(win_message(9), "Hongera! (Congratulations)");
    }
}
