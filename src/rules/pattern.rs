//! Pattern analysis - detects repeated and sequential characters.

use std::collections::HashSet;

use super::Candidate;
use super::length::MIN_LENGTH;

/// Highest redundancy still accepted by the `lowRedundancy` rule.
pub const MAX_REDUNDANCY: u8 = 20;

/// Percentage (0-100) of characters that add little information.
///
/// A character is redundant when it repeats the previous one, continues an
/// ascending or descending run (`abc`, `321`), or already appeared earlier
/// in the password.
pub fn redundancy(chars: &[char]) -> u8 {
    if chars.is_empty() {
        return 0;
    }

    let mut seen = HashSet::with_capacity(chars.len());
    let mut redundant = 0usize;

    for (i, &c) in chars.iter().enumerate() {
        let repeated = i >= 1 && chars[i - 1] == c;
        let sequential = i >= 2 && {
            let prev = chars[i - 1] as i64 - chars[i - 2] as i64;
            let curr = c as i64 - chars[i - 1] as i64;
            prev == curr && curr.abs() == 1
        };
        let reused = !seen.insert(c);

        if repeated || sequential || reused {
            redundant += 1;
        }
    }

    (redundant * 100 / chars.len()) as u8
}

/// Satisfied once the password has [`MIN_LENGTH`] characters and a
/// redundancy of at most [`MAX_REDUNDANCY`].
pub(crate) fn low_redundancy(candidate: &Candidate<'_>) -> bool {
    candidate.len() >= MIN_LENGTH && candidate.redundancy() <= MAX_REDUNDANCY
}
