//! String normalization applied on the create paths only.
//!
//! Updates deliberately store whatever the client sends; only creation
//! normalizes.

/// Capitalize each whitespace-separated word: first character uppercased,
/// the rest lowercased, words joined by single spaces.
///
/// Used for usernames: " john dOE " becomes "John Doe".
pub fn capitalize_words(s: &str) -> String {
    s.split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Uppercase only the first character; the rest of the string is unchanged.
///
/// Used for outfit names: "beach day" becomes "Beach day".
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(capitalize_words("john doe"), "John Doe");
        assert_eq!(capitalize_words("alice"), "Alice");
    }

    #[test]
    fn lowercases_word_tails() {
        assert_eq!(capitalize_words("jOHN dOE"), "John Doe");
        assert_eq!(capitalize_words("McDonald"), "Mcdonald");
    }

    #[test]
    fn collapses_interior_whitespace() {
        assert_eq!(capitalize_words("  alice   smith  "), "Alice Smith");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(capitalize_words(""), "");
        assert_eq!(capitalize_words("   "), "");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn capitalize_first_leaves_tail_alone() {
        assert_eq!(capitalize_first("beach day"), "Beach day");
        assert_eq!(capitalize_first("Beach Day"), "Beach Day");
        assert_eq!(capitalize_first("x"), "X");
    }
}
