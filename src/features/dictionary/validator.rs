use crate::features::dictionary::ValidationError;

pub const MAX_WORD_LENGTH: usize = 50;

/// Checks a raw search term and returns it trimmed (case is preserved).
///
/// Hyphens and apostrophes are allowed anywhere; every other character must
/// be alphabetic.
pub fn validate_word(word: &str) -> Result<String, ValidationError> {
    let trimmed = word.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    if trimmed.chars().count() > MAX_WORD_LENGTH {
        return Err(ValidationError::TooLong);
    }

    let alphabetic = trimmed
        .chars()
        .filter(|c| !matches!(c, '-' | '\''))
        .all(char::is_alphabetic);
    if !alphabetic {
        return Err(ValidationError::InvalidCharacters);
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_input() {
        assert_eq!(validate_word(""), Err(ValidationError::Empty));
        let err = validate_word("   ").unwrap_err();
        assert!(err.to_string().to_lowercase().contains("enter a word"));
    }

    #[test]
    fn rejects_long_words() {
        let long = "a".repeat(51);
        let err = validate_word(&long).unwrap_err();
        assert!(err.to_string().contains("too long"));
        assert_eq!(validate_word(&"a".repeat(50)), Ok("a".repeat(50)));
    }

    #[test]
    fn length_is_measured_after_trimming() {
        let padded = format!("  {}  ", "b".repeat(50));
        assert_eq!(validate_word(&padded), Ok("b".repeat(50)));
    }

    #[test]
    fn rejects_digits_and_symbols() {
        assert_eq!(validate_word("hello123"), Err(ValidationError::InvalidCharacters));
        assert_eq!(validate_word("@#$%"), Err(ValidationError::InvalidCharacters));
        assert_eq!(validate_word("two words"), Err(ValidationError::InvalidCharacters));
    }

    #[test]
    fn accepts_hyphens_and_apostrophes() {
        assert_eq!(validate_word("can't"), Ok("can't".to_string()));
        assert_eq!(validate_word("mother-in-law"), Ok("mother-in-law".to_string()));
        assert_eq!(validate_word("   Hello   "), Ok("Hello".to_string()));
    }

    #[test]
    fn accepts_every_ascii_word_shape() {
        for word in ["a", "Z", "-", "'", "o'clock", "X-ray", "ABC-def'g"] {
            assert_eq!(validate_word(word), Ok(word.to_string()), "{word}");
        }
    }
}
