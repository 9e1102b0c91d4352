//! Built-in self-checks.
//!
//! Each check builds a few strands from literals and verifies one operation
//! against a known answer. The CLI runs them through `dnastrand check`.

use crate::base::Strand;
use log::{debug, warn};

/// A named self-check.
#[derive(Debug, Clone, Copy)]
pub struct Check {
    pub name: &'static str,
    pub description: &'static str,
    pub run: fn() -> bool,
}

/// Result of running one [`Check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOutcome {
    pub name: &'static str,
    pub description: &'static str,
    pub passed: bool,
}

/// All checks, in the order they are reported.
pub const CHECKS: [Check; 5] = [
    Check {
        name: "plus",
        description: "sum of two strands of equal length",
        run: check_plus,
    },
    Check {
        name: "plus_diff_lengths",
        description: "sum of two strands of unequal length, both orders",
        run: check_plus_diff_lengths,
    },
    Check {
        name: "substr",
        description: "substring taken from a 1-based position",
        run: check_substr,
    },
    Check {
        name: "find",
        description: "position of a substring at the end of a strand",
        run: check_find,
    },
    Check {
        name: "reverse",
        description: "strand read in opposite order",
        run: check_reverse,
    },
];

/// Run every check in [`CHECKS`].
pub fn run_all() -> Vec<CheckOutcome> {
    CHECKS.iter().map(Check::outcome).collect()
}

impl Check {
    /// Run this check and record the outcome.
    pub fn outcome(&self) -> CheckOutcome {
        let passed = (self.run)();
        if passed {
            debug!("check {} passed", self.name);
        } else {
            warn!("check {} failed", self.name);
        }
        CheckOutcome {
            name: self.name,
            description: self.description,
            passed,
        }
    }
}

// Literals are token-safe, so `from_text` and parsing agree on them.
fn strand(text: &str) -> Strand {
    Strand::from_text(text)
}

fn check_plus() -> bool {
    let a = strand("ACGT");
    let b = strand("CGTA");
    &a + &b == strand("ACGTCGTA")
}

fn check_plus_diff_lengths() -> bool {
    let c = strand("ACCTAG");
    let d = strand("TCGA");
    &c + &d == strand("ACCTAGTCGA") && &d + &c == strand("TCGAACCTAG")
}

fn check_substr() -> bool {
    strand("ACGAAGTCAGGGT").substr(10, 4) == strand("GGGT")
}

fn check_find() -> bool {
    strand("ACTTGACTAGCAACGT").find(&strand("ACGT")) == Some(13)
}

fn check_reverse() -> bool {
    strand("GCATGGCT").reversed() == strand("TCGGTACG")
}
