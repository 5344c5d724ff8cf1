//! Text checks over free-form resume fields.

use crate::ats::policy::{ACHIEVEMENT_WORDS, ACTION_VERBS, BULLET_MARKERS};

/// True when the text carries a measurable outcome.
///
/// Matches any of:
/// - a number followed by `%` (`40%`)
/// - a number followed by `+` (`100+`)
/// - a currency amount (`$50,000`)
/// - an achievement word (`increased`, `improved`, `reduced`, `achieved`)
pub fn has_quantified_achievement(text: &str) -> bool {
    has_percentage(text)
        || has_plus_suffixed_number(text)
        || has_dollar_amount(text)
        || has_achievement_word(text)
}

fn digit_followed_by(text: &str, suffix: char) -> bool {
    let chars: Vec<char> = text.chars().collect();
    chars
        .windows(2)
        .any(|w| w[0].is_ascii_digit() && w[1] == suffix)
}

fn has_percentage(text: &str) -> bool {
    digit_followed_by(text, '%')
}

fn has_plus_suffixed_number(text: &str) -> bool {
    digit_followed_by(text, '+')
}

fn has_dollar_amount(text: &str) -> bool {
    let chars: Vec<char> = text.chars().collect();
    chars
        .windows(2)
        .any(|w| w[0] == '$' && w[1].is_ascii_digit())
}

fn has_achievement_word(text: &str) -> bool {
    let lower = text.to_lowercase();
    ACHIEVEMENT_WORDS.iter().any(|word| lower.contains(word))
}

/// True when the first non-blank line opens with an action verb,
/// optionally after a bullet marker.
pub fn starts_with_action_verb(text: &str) -> bool {
    let Some(line) = text.lines().map(str::trim).find(|l| !l.is_empty()) else {
        return false;
    };
    let line = line.trim_start_matches(BULLET_MARKERS).trim_start();

    // Plain prefix match: "Leading" and "Ledger" both open with "Led".
    ACTION_VERBS.iter().any(|verb| {
        line.get(..verb.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(verb))
    })
}

/// Parses the leading decimal number of a string, ignoring trailing text
/// (`"3.8/4.0"` → 3.8). Returns `None` when no digits lead the string.
pub fn parse_leading_number(text: &str) -> Option<f64> {
    let text = text.trim();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (i, c) in text.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }

    if !seen_digit {
        return None;
    }
    text[..end].trim_end_matches('.').parse().ok()
}
