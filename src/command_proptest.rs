//! Property-based tests for the command tokenizer.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::command::tokenize;
    use proptest::prelude::*;

    proptest! {
        /// Property: words without spaces or quotes come back unchanged and in order
        #[test]
        fn tokenize_plain_words_roundtrip(words in prop::collection::vec("[a-zA-Z0-9_.=/-]+", 1..8)) {
            let command = words.join(" ");
            let tokens = tokenize(&command).unwrap();
            prop_assert_eq!(tokens, words);
        }

        /// Property: a quoted span of words becomes exactly one token
        #[test]
        fn tokenize_quoted_span_is_one_token(
            prefix in prop::collection::vec("[a-z-]+", 0..4),
            quoted in prop::collection::vec("[a-zA-Z0-9.]+", 1..6),
        ) {
            let command = if prefix.is_empty() {
                format!("\"{}\"", quoted.join(" "))
            } else {
                format!("{} \"{}\"", prefix.join(" "), quoted.join(" "))
            };
            let tokens = tokenize(&command).unwrap();
            prop_assert_eq!(tokens.len(), prefix.len() + 1);
            prop_assert_eq!(&tokens[..prefix.len()], &prefix[..]);
            prop_assert_eq!(tokens.last().unwrap(), &quoted.join(" "));
        }

        /// Property: an opening quote that is never closed is always rejected
        #[test]
        fn tokenize_unterminated_quote_fails(
            prefix in prop::collection::vec("[a-z-]+", 0..4),
            rest in prop::collection::vec("[a-z]+", 1..5),
        ) {
            let mut pieces = prefix;
            pieces.push(format!("\"{}", rest.join(" ")));
            let command = pieces.join(" ");
            prop_assert!(tokenize(&command).is_err());
        }

        /// Property: the number of tokens never exceeds the number of pieces
        #[test]
        fn tokenize_never_adds_tokens(input in "[a-z \"]*") {
            if let Ok(tokens) = tokenize(&input) {
                prop_assert!(tokens.len() <= input.split(' ').count());
                prop_assert!(!tokens.is_empty());
            }
        }

        /// Property: tokenize never panics on arbitrary input
        #[test]
        fn tokenize_never_panics(input in ".*") {
            let _ = tokenize(&input);
        }
    }
}
