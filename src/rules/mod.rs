//! Password rules
//!
//! Each submodule checks one aspect of a password. [`RULES`] fixes the
//! order in which hints are reported.

mod blacklist;
mod length;
mod pattern;
mod variety;

use std::fmt;

use crate::blacklist::Blacklist;
use crate::types::RuleId;

pub use length::MIN_LENGTH;
pub use pattern::{MAX_REDUNDANCY, redundancy};

/// Password prepared once per evaluation and shared by every rule.
pub(crate) struct Candidate<'a> {
    password: &'a str,
    chars: Vec<char>,
    redundancy: u8,
    blacklist: Option<&'a Blacklist>,
}

impl<'a> Candidate<'a> {
    pub(crate) fn new(password: &'a str, blacklist: Option<&'a Blacklist>) -> Self {
        let chars: Vec<char> = password.chars().collect();
        let redundancy = pattern::redundancy(&chars);
        Self {
            password,
            chars,
            redundancy,
            blacklist,
        }
    }

    pub(crate) fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Length in chars, not bytes.
    pub(crate) fn len(&self) -> usize {
        self.chars.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub(crate) fn redundancy(&self) -> u8 {
        self.redundancy
    }
}

type Check = fn(&Candidate<'_>) -> bool;
type PartialCredit = fn(&Candidate<'_>, u32) -> u32;

/// A single rule: identifier, label and predicate, plus the points it is
/// worth towards the entropy score.
pub struct PasswordRule {
    id: RuleId,
    label: &'static str,
    weight: u32,
    check: Check,
    partial: Option<PartialCredit>,
}

impl PasswordRule {
    pub fn id(&self) -> RuleId {
        self.id
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Entropy points awarded when the rule is satisfied.
    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub(crate) fn is_satisfied(&self, candidate: &Candidate<'_>) -> bool {
        (self.check)(candidate)
    }

    /// Points for an unsatisfied rule. Only rules with a partial credit
    /// function earn anything here.
    pub(crate) fn partial_credit(&self, candidate: &Candidate<'_>) -> u32 {
        self.partial
            .map(|f| f(candidate, self.weight).min(self.weight))
            .unwrap_or(0)
    }
}

impl fmt::Debug for PasswordRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordRule")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("weight", &self.weight)
            .finish()
    }
}

/// Rules in display order. Weights add up to 100.
pub static RULES: [PasswordRule; 7] = [
    PasswordRule {
        id: RuleId::MinLength,
        label: "At least 12 characters",
        weight: 30,
        check: length::min_length,
        partial: Some(length::length_credit),
    },
    PasswordRule {
        id: RuleId::HasLower,
        label: "Contains a lowercase letter",
        weight: 12,
        check: variety::has_lower,
        partial: None,
    },
    PasswordRule {
        id: RuleId::HasUpper,
        label: "Contains an uppercase letter",
        weight: 12,
        check: variety::has_upper,
        partial: None,
    },
    PasswordRule {
        id: RuleId::HasDigit,
        label: "Contains a digit",
        weight: 12,
        check: variety::has_digit,
        partial: None,
    },
    PasswordRule {
        id: RuleId::HasSymbol,
        label: "Contains a symbol",
        weight: 12,
        check: variety::has_symbol,
        partial: None,
    },
    PasswordRule {
        id: RuleId::NotCommon,
        label: "Not a commonly used password",
        weight: 11,
        check: blacklist::not_common,
        partial: None,
    },
    PasswordRule {
        id: RuleId::LowRedundancy,
        label: "No repeated or sequential runs",
        weight: 11,
        check: pattern::low_redundancy,
        partial: None,
    },
];
