//! Evaluation result types.

use std::fmt;

/// Identifier of a password rule.
///
/// Variants are declared in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleId {
    MinLength,
    HasLower,
    HasUpper,
    HasDigit,
    HasSymbol,
    NotCommon,
    LowRedundancy,
}

impl RuleId {
    /// Stable identifier used by UI layers (e.g. `"minLength"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::MinLength => "minLength",
            RuleId::HasLower => "hasLower",
            RuleId::HasUpper => "hasUpper",
            RuleId::HasDigit => "hasDigit",
            RuleId::HasSymbol => "hasSymbol",
            RuleId::NotCommon => "notCommon",
            RuleId::LowRedundancy => "lowRedundancy",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single rule for one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintResult {
    pub rule: RuleId,
    pub label: &'static str,
    pub satisfied: bool,
}

/// Progress-bar values derived from a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StrengthScore {
    /// 0 to 100.
    pub entropy: u8,
    /// 0 to 100, lower is better.
    pub redundancy: u8,
}

/// Full evaluation: ordered hints plus scores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub hints: Vec<HintResult>,
    pub score: StrengthScore,
}

impl PasswordEvaluation {
    pub fn entropy(&self) -> u8 {
        self.score.entropy
    }

    pub fn redundancy(&self) -> u8 {
        self.score.redundancy
    }

    /// True when every hint is satisfied.
    pub fn all_satisfied(&self) -> bool {
        self.hints.iter().all(|h| h.satisfied)
    }

    /// Rules the password still fails, in display order.
    pub fn unsatisfied(&self) -> impl Iterator<Item = RuleId> + '_ {
        self.hints.iter().filter(|h| !h.satisfied).map(|h| h.rule)
    }

    /// Looks up the hint for a given rule.
    pub fn hint(&self, rule: RuleId) -> Option<&HintResult> {
        self.hints.iter().find(|h| h.rule == rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hint(rule: RuleId, satisfied: bool) -> HintResult {
        HintResult { rule, label: "", satisfied }
    }

    #[test]
    fn test_rule_id_strings() {
        assert_eq!(RuleId::MinLength.as_str(), "minLength");
        assert_eq!(RuleId::LowRedundancy.to_string(), "lowRedundancy");
    }

    #[test]
    fn test_unsatisfied_keeps_order() {
        let evaluation = PasswordEvaluation {
            hints: vec![
                hint(RuleId::MinLength, false),
                hint(RuleId::HasLower, true),
                hint(RuleId::HasDigit, false),
            ],
            score: StrengthScore::default(),
        };
        let missing: Vec<_> = evaluation.unsatisfied().collect();
        assert_eq!(missing, vec![RuleId::MinLength, RuleId::HasDigit]);
        assert!(!evaluation.all_satisfied());
        assert_eq!(evaluation.hint(RuleId::HasLower).map(|h| h.satisfied), Some(true));
        assert!(evaluation.hint(RuleId::HasSymbol).is_none());
    }
}
