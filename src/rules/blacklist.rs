//! Blacklist rule - checks the password against the common password list.

use super::Candidate;

/// Satisfied for non-empty passwords absent from the configured blacklist.
/// Without a blacklist any non-empty password passes.
pub(crate) fn not_common(candidate: &Candidate<'_>) -> bool {
    if candidate.is_empty() {
        return false;
    }
    !candidate
        .blacklist
        .is_some_and(|bl| bl.contains(candidate.password))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blacklist::Blacklist;

    #[test]
    fn test_not_common_blacklisted_password() {
        let blacklist = Blacklist::from_words(["password", "123456", "qwerty"]);
        assert!(!not_common(&Candidate::new("password", Some(&blacklist))));
        assert!(!not_common(&Candidate::new("QWERTY", Some(&blacklist))));
        assert!(!not_common(&Candidate::new(" password ", Some(&blacklist))));
    }

    #[test]
    fn test_not_common_strong_password() {
        let blacklist = Blacklist::from_words(["password", "123456", "qwerty"]);
        assert!(not_common(&Candidate::new(
            "CorrectHorseBatteryStaple!123",
            Some(&blacklist)
        )));
    }

    #[test]
    fn test_not_common_without_blacklist() {
        assert!(not_common(&Candidate::new("password", None)));
        assert!(!not_common(&Candidate::new("", None)));
    }
}
