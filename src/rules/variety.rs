//! Character variety rules - uppercase, lowercase, digits, symbols.

use super::Candidate;

pub(crate) fn has_lower(candidate: &Candidate<'_>) -> bool {
    candidate.chars().iter().any(|c| c.is_lowercase())
}

pub(crate) fn has_upper(candidate: &Candidate<'_>) -> bool {
    candidate.chars().iter().any(|c| c.is_uppercase())
}

pub(crate) fn has_digit(candidate: &Candidate<'_>) -> bool {
    candidate.chars().iter().any(|c| c.is_ascii_digit())
}

/// Any character that is neither alphanumeric nor whitespace.
pub(crate) fn has_symbol(candidate: &Candidate<'_>) -> bool {
    candidate
        .chars()
        .iter()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace())
}
