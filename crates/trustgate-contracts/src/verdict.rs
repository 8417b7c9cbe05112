//! Verdicts, trust reports, and the engine's decision.
//!
//! One `Verdict` is produced per enabled evaluator per pass. A `TrustReport`
//! is either complete (every enabled evaluator ran) or never built at all.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The heuristic checks the engine knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckKind {
    Emulator,
    DeveloperMode,
    UsbDebugging,
    Carrier,
}

impl CheckKind {
    /// Evaluation order within a pass.
    pub const ALL: [CheckKind; 4] = [
        CheckKind::Emulator,
        CheckKind::DeveloperMode,
        CheckKind::UsbDebugging,
        CheckKind::Carrier,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckKind::Emulator => "emulator",
            CheckKind::DeveloperMode => "developer-mode",
            CheckKind::UsbDebugging => "usb-debugging",
            CheckKind::Carrier => "carrier",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CheckKind::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown check '{}'", s))
    }
}

/// The outcome of one evaluator.
///
/// `result` is true when the checked condition holds (e.g. "is an emulator",
/// "developer mode is on", "carrier is allowed"). `reason` is a stable,
/// machine-readable code naming the sub-check that decided the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub check: CheckKind,
    pub result: bool,
    pub reason: String,
}

impl Verdict {
    pub fn new(check: CheckKind, result: bool, reason: impl Into<String>) -> Self {
        Self { check, result, reason: reason.into() }
    }

    /// True when this verdict counts against the environment. The carrier
    /// check is inverted: a disallowed carrier is the finding.
    pub fn is_flagged(&self) -> bool {
        match self.check {
            CheckKind::Carrier => !self.result,
            _ => self.result,
        }
    }
}

/// Identifier of a single evaluation pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportId(pub uuid::Uuid);

impl ReportId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

/// Every verdict from one evaluation pass, in evaluation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrustReport {
    pub report_id: ReportId,
    pub verdicts: Vec<Verdict>,
    pub evaluated_at: DateTime<Utc>,
}

impl TrustReport {
    pub fn new(verdicts: Vec<Verdict>) -> Self {
        Self {
            report_id: ReportId::new(),
            verdicts,
            evaluated_at: Utc::now(),
        }
    }

    /// Look up the verdict for `check`, if that check was enabled.
    pub fn verdict(&self, check: CheckKind) -> Option<&Verdict> {
        self.verdicts.iter().find(|v| v.check == check)
    }

    /// True if any of `checks` produced a positive verdict.
    pub fn any_positive(&self, checks: &[CheckKind]) -> bool {
        self.verdicts
            .iter()
            .any(|v| v.result && checks.contains(&v.check))
    }

    /// Aggregate for the emulator/tamper group.
    pub fn is_untrusted(&self) -> bool {
        self.any_positive(&[CheckKind::Emulator])
    }
}

/// What the engine concluded from a report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "kebab-case")]
pub enum TrustDecision {
    /// The environment may run protected content. Advisory verdicts remain
    /// available in the report.
    Accept { report: TrustReport },

    /// The environment is untrusted. The shell must terminate.
    Reject {
        report: TrustReport,
        /// Reason codes of the fatal verdicts, joined with "; ".
        reason: String,
    },
}

impl TrustDecision {
    pub fn report(&self) -> &TrustReport {
        match self {
            TrustDecision::Accept { report } | TrustDecision::Reject { report, .. } => report,
        }
    }

    pub fn is_reject(&self) -> bool {
        matches!(self, TrustDecision::Reject { .. })
    }
}
