use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Terms that must never appear in the three favorite words.
/// Korean and English, covering violence and sexual content.
const BANNED_PATTERNS: &[&str] = &[
    "살인",
    "죽이",
    "폭력",
    "피바다",
    "학대",
    "총",
    "칼",
    "폭탄",
    "kill",
    "murder",
    "gun",
    "knife",
    "blood",
    "assault",
    "bomb",
    r"성\s*행위",
    "야동",
    "포르노",
    "음란",
    "가슴",
    "성기",
    "자위",
    "porn",
    "sex",
    "xxx",
    "nude",
    "naked",
];

static BAN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("(?i){}", BANNED_PATTERNS.join("|")))
        .expect("banned-word patterns compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Please enter all 3 words.")]
    Missing,
    #[error("That word is not appropriate. Please try again.")]
    Banned,
}

/// Check the three favorite words. For each word in order, emptiness is
/// checked before banned content. No side effects.
pub fn validate_words(words: &[&str; 3]) -> Result<(), WordError> {
    for word in words {
        let word = word.trim();
        if word.is_empty() {
            return Err(WordError::Missing);
        }
        if BAN_RE.is_match(word) {
            return Err(WordError::Banned);
        }
    }
    Ok(())
}
