use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use unicode_normalization::UnicodeNormalization;

// A word is a run of cased letters; digits, punctuation and uncased scripts split words.
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{Cased}+").unwrap());

/// Upper-case the first letter of every word and lower-case the rest.
///
/// `"SCI-FI"` becomes `"Sci-Fi"`, `"o'neil"` becomes `"O'Neil"`. Input is
/// NFC-composed first so that decomposed accents stay attached to their letter.
pub fn title_case(input: &str) -> String {
    let composed: String = input.nfc().collect();
    WORD_RE
        .replace_all(&composed, |caps: &Captures| capitalize(&caps[0]))
        .into_owned()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = String::with_capacity(word.len());
    match title_form(first) {
        Some(title) => out.push(title),
        None => {
            // Multi-char upper mappings (e.g. 'ß' -> "SS") keep only their head upper-cased.
            let mut upper = first.to_uppercase();
            if let Some(head) = upper.next() {
                out.push(head);
            }
            out.extend(upper.flat_map(char::to_lowercase));
        }
    }
    out.push_str(&chars.as_str().to_lowercase());
    out
}

/// Latin digraphs whose title-case form differs from their upper-case form.
fn title_form(c: char) -> Option<char> {
    match c {
        '\u{01C4}'..='\u{01C6}' => Some('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => Some('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => Some('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => Some('\u{01F2}'),
        _ => None,
    }
}

pub fn upper_case(input: &str) -> String {
    input.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_cases_words() {
        assert_eq!(title_case("action"), "Action");
        assert_eq!(title_case("SCI-FI"), "Sci-Fi");
        assert_eq!(title_case("science fiction"), "Science Fiction");
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(title_case("jean-PAUL belmondo"), "Jean-Paul Belmondo");
    }

    #[test]
    fn digits_split_words() {
        assert_eq!(title_case("1st unit"), "1St Unit");
    }

    #[test]
    fn uncased_letters_split_words() {
        assert_eq!(title_case("あa"), "あA");
        assert_eq!(title_case("東京story"), "東京Story");
    }

    #[test]
    fn digraphs_take_their_title_form() {
        assert_eq!(title_case("ǆungla"), "ǅungla");
        assert_eq!(title_case("ǄUNGLA"), "ǅungla");
        assert_eq!(title_case("ǉubav"), "ǈubav");
    }

    #[test]
    fn handles_non_ascii() {
        assert_eq!(title_case("ÉMILIE"), "Émilie");
        assert_eq!(title_case("straße"), "Straße");
        assert_eq!(title_case("ßa"), "Ssa");
        assert_eq!(title_case("e\u{301}cole"), "École");
    }

    #[test]
    fn empty_and_blank_inputs() {
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("  "), "  ");
    }

    #[test]
    fn title_case_is_idempotent() {
        for raw in ["action", "SCI-FI", "o'neil", "ßa", "1st unit", "あa", "ǆungla", "mandarin chinese"] {
            let once = title_case(raw);
            assert_eq!(title_case(&once), once);
        }
    }

    #[test]
    fn upper_cases_codes() {
        assert_eq!(upper_case("usa"), "USA");
        assert_eq!(upper_case(&upper_case("fRa")), "FRA");
    }
}
