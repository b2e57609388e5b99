/// Tests whether the ASCII alphanumeric content of `text` reads the same
/// backwards.
///
/// The text is lowercased first, then everything outside `[a-z0-9]` is
/// dropped, non-ASCII letters included. Absent or empty input is not a
/// palindrome, and neither is input with no alphanumeric characters left
/// after filtering (`"!!!"`), even though an empty string equals its reverse.
///
/// ```rust
/// use analysis::is_palindrome;
///
/// assert!(is_palindrome(Some("A man, a plan, a canal: Panama")));
/// assert!(!is_palindrome(Some("hello")));
/// assert!(!is_palindrome(Some("!!!")));
/// ```
pub fn is_palindrome(text: Option<&str>) -> bool {
    let text = match text {
        Some(text) if !text.is_empty() => text,
        _ => return false,
    };

    let filtered: Vec<u8> = text
        .to_lowercase()
        .bytes()
        .filter(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        .collect();

    if filtered.is_empty() {
        return false;
    }

    filtered.iter().eq(filtered.iter().rev())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_sentence() {
        assert!(is_palindrome(Some("A man, a plan, a canal: Panama")));
        assert!(is_palindrome(Some("Was it a car or a cat I saw?")));
    }

    #[test]
    fn single_words() {
        assert!(is_palindrome(Some("racecar")));
        assert!(is_palindrome(Some("RaceCar")));
        assert!(!is_palindrome(Some("hello")));
        assert!(is_palindrome(Some("x")));
    }

    #[test]
    fn digits_participate() {
        assert!(is_palindrome(Some("12321")));
        assert!(is_palindrome(Some("1a2-2a1")));
        assert!(!is_palindrome(Some("123")));
    }

    #[test]
    fn nothing_left_after_filtering() {
        assert!(!is_palindrome(Some("!!!")));
        assert!(!is_palindrome(Some("   ")));
        assert!(!is_palindrome(Some("")));
        assert!(!is_palindrome(None));
    }

    #[test]
    fn non_ascii_letters_are_dropped() {
        // Only "ab" + "ba" survive from the accented text.
        assert!(is_palindrome(Some("abé ba")));
        assert!(!is_palindrome(Some("éta")));
        // Only "t" survives.
        assert!(is_palindrome(Some("été")));
        assert!(!is_palindrome(Some("日本日")));
    }

    #[test]
    fn lowercasing_runs_before_filtering() {
        // KELVIN SIGN lowercases to ASCII 'k'.
        assert!(is_palindrome(Some("\u{212A}ayak")));
    }
}
