use std::sync::LazyLock;

use regex::Regex;

use crate::models::BookingIntent;
use crate::services::dates;

/// Turns a free-form booking sentence into whatever booking fields it can find.
pub trait IntentExtractor: Send + Sync {
    fn extract(&self, sentence: &str) -> BookingIntent;
}

const ROOM_TYPES: [&str; 3] = ["deluxe", "suite", "standard"];

static FOR_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)for (\w+)").expect("name pattern is valid"));

static CAPITALIZED_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z][a-z]+)\b").expect("capitalized pattern is valid"));

/// Literal pattern matching over the sentence.
///
/// The name fallback takes the first capitalized word anywhere, so a sentence
/// without "for <name>" can yield "Book" or a room type as the name.
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternIntentExtractor;

impl IntentExtractor for PatternIntentExtractor {
    fn extract(&self, sentence: &str) -> BookingIntent {
        let candidates = dates::find_date_candidates(sentence);
        BookingIntent {
            name: parse_name(sentence),
            room_type: parse_room_type(sentence),
            check_in: candidates
                .first()
                .and_then(|c| dates::extract_date_from_text(c)),
            check_out: candidates
                .get(1)
                .and_then(|c| dates::extract_date_from_text(c)),
        }
    }
}

pub fn parse_name(text: &str) -> Option<String> {
    if let Some(caps) = FOR_NAME.captures(text) {
        return Some(capitalize(&caps[1]));
    }
    CAPITALIZED_WORD
        .captures(text)
        .map(|caps| caps[1].to_string())
}

pub fn parse_room_type(text: &str) -> Option<String> {
    let lower = text.to_lowercase();
    ROOM_TYPES
        .iter()
        .find(|room| lower.contains(*room))
        .map(|room| capitalize(room))
}

fn capitalize(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().to_string() + &c.as_str().to_lowercase(),
    }
}
