//! # Collation
//!
//! Locale-aware ordering for the title and artist sorts.
//!
//! Visitors expect "de Vries" next to "De Vries" and "Één" next to "Een",
//! not after every capitalised or unaccented name. Strings are compared in
//! three levels, the way a collator does for Western European text:
//!
//! ```text
//! 1. primary   base letters, case and accents folded   ("een" == "Één")
//! 2. secondary unaccented before accented              ("een" <  "één")
//! 3. tertiary  lowercase before uppercase              ("een" <  "Een")
//! ```
//!
//! Only Latin-1 and Latin Extended-A accents are folded; other scripts fall
//! back to code point order after lowercasing.

use std::cmp::Ordering;

/// Compares two strings for display ordering.
///
/// ## Example
/// ```rust
/// use atelier_core::collate::compare;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare("amsterdam", "Dutch"), Ordering::Less);
/// assert_eq!(compare("Écluse", "Eindhoven"), Ordering::Less);
/// ```
pub fn compare(a: &str, b: &str) -> Ordering {
    let primary = a
        .chars()
        .flat_map(fold)
        .cmp(b.chars().flat_map(fold));
    if primary != Ordering::Equal {
        return primary;
    }

    let secondary = a
        .chars()
        .map(|c| base_letter(c).is_some())
        .cmp(b.chars().map(|c| base_letter(c).is_some()));
    if secondary != Ordering::Equal {
        return secondary;
    }

    a.chars()
        .map(char::is_uppercase)
        .cmp(b.chars().map(char::is_uppercase))
}

/// Primary collation key for one character.
fn fold(c: char) -> impl Iterator<Item = char> {
    base_letter(c).unwrap_or(c).to_lowercase()
}

/// Base letter of an accented Latin character, if it has one.
fn base_letter(c: char) -> Option<char> {
    let base = match c {
        'À'..='Å' | 'Ā' | 'Ă' | 'Ą' => 'A',
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'Ç' | 'Ć' | 'Č' => 'C',
        'ç' | 'ć' | 'č' => 'c',
        'È'..='Ë' | 'Ē' | 'Ė' | 'Ę' | 'Ě' => 'E',
        'è'..='ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'Ì'..='Ï' | 'Ī' | 'Į' => 'I',
        'ì'..='ï' | 'ī' | 'į' => 'i',
        'Ñ' | 'Ń' | 'Ň' => 'N',
        'ñ' | 'ń' | 'ň' => 'n',
        'Ò'..='Ö' | 'Ø' | 'Ō' | 'Ő' => 'O',
        'ò'..='ö' | 'ø' | 'ō' | 'ő' => 'o',
        'Ù'..='Ü' | 'Ū' | 'Ů' | 'Ű' => 'U',
        'ù'..='ü' | 'ū' | 'ů' | 'ű' => 'u',
        'Ý' | 'Ÿ' => 'Y',
        'ý' | 'ÿ' => 'y',
        'Š' => 'S',
        'š' => 's',
        'Ž' => 'Z',
        'ž' => 'z',
        _ => return None,
    };
    Some(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_is_folded_at_primary_level() {
        assert_eq!(compare("amsterdam Sunset", "Dutch Windmills"), Ordering::Less);
        assert_eq!(compare("Zee", "appel"), Ordering::Greater);
    }

    #[test]
    fn test_lowercase_sorts_before_uppercase_on_tie() {
        assert_eq!(compare("de Vries", "De Vries"), Ordering::Less);
        assert_eq!(compare("De Vries", "De Vries"), Ordering::Equal);
    }

    #[test]
    fn test_accents_fold_then_break_ties() {
        assert_eq!(compare("Écluse", "Eindhoven"), Ordering::Less);
        assert_eq!(compare("een", "één"), Ordering::Less);
        assert_eq!(compare("café", "cafe"), Ordering::Greater);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(compare("Sun", "Sunny Days"), Ordering::Less);
    }
}
