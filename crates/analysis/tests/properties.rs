//! Property checks over arbitrary Unicode input.

use analysis::{
    count_chars, count_unique_chars, count_unique_words, entropy, is_palindrome, is_whitespace,
    normalize, Operation, OperationRequest,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn every_operation_is_total(text in any::<String>()) {
        let request = OperationRequest::new(text);
        for op in Operation::ALL {
            let result = op.handle(&request);
            prop_assert_eq!(result.key, op.key());
            prop_assert!(!result.cache_hit);
        }
    }

    #[test]
    fn entropy_within_bounds(text in any::<String>()) {
        let bits = entropy(Some(&text));
        prop_assert!(bits >= 0.0);

        let distinct = count_unique_chars(Some(&text));
        if distinct > 0 {
            // Rounding may push the value up by half a millibit.
            prop_assert!(bits <= (distinct as f64).log2() + 0.0006);
        }
    }

    #[test]
    fn entropy_of_repeated_char_is_zero(ch in any::<char>(), n in 1usize..64) {
        let text: String = std::iter::repeat(ch).take(n).collect();
        prop_assert_eq!(entropy(Some(&text)), 0.0);
    }

    #[test]
    fn normalize_is_idempotent(text in any::<String>()) {
        if let Some(once) = normalize(Some(&text)) {
            prop_assert_eq!(normalize(Some(&once)), Some(once.clone()));
            prop_assert!(!once.starts_with(' '));
            prop_assert!(!once.ends_with(' '));
            prop_assert!(!once.contains("  "));
        }
    }

    #[test]
    fn mirrored_ascii_is_palindrome(half in "[a-zA-Z0-9]{1,32}", junk in "[ ,.!?:;-]{0,4}") {
        let reversed: String = half.chars().rev().collect();
        let text = format!("{half}{junk}{reversed}");
        prop_assert!(is_palindrome(Some(&text)));
    }

    #[test]
    fn unique_counts_never_exceed_totals(text in any::<String>()) {
        let unique = count_unique_chars(Some(&text));
        prop_assert!(unique <= count_chars(Some(&text)));
        let tokens = text.split(is_whitespace).filter(|w| !w.is_empty()).count();
        prop_assert!(count_unique_words(Some(&text)) <= tokens);
    }
}
