//! Length rule - checks password minimum length.

use super::Candidate;

pub const MIN_LENGTH: usize = 12;

/// Satisfied when the password has at least [`MIN_LENGTH`] characters.
pub(crate) fn min_length(candidate: &Candidate<'_>) -> bool {
    candidate.len() >= MIN_LENGTH
}

/// Proportional credit for passwords still short of [`MIN_LENGTH`].
pub(crate) fn length_credit(candidate: &Candidate<'_>, weight: u32) -> u32 {
    let len = candidate.len().min(MIN_LENGTH) as u32;
    weight * len / MIN_LENGTH as u32
}
