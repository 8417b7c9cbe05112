//! The trust decision engine.
//!
//! On application start the engine runs every enabled check once and
//! decides:
//!
//!   Evaluating → Decided(Accept | Reject)
//!
//! Only checks listed as fatal in the config can reject; by default that is
//! the emulator check alone. Developer-mode, debug-bridge, and carrier
//! verdicts are still reported so the shell can surface them as warnings.
//! A rejection is terminal: the shell releases foreground resources and
//! terminates the process, with no retry.

use std::sync::Arc;

use tracing::{debug, info, warn};

use trustgate_contracts::{
    error::TrustGateResult,
    verdict::{TrustDecision, TrustReport},
};
use trustgate_policy::TrustConfig;

use crate::{
    bridge::CommandBridge,
    runner::CheckRunner,
    traits::{Shell, SignalSource},
};

/// Where the engine is in its single decision pass.
#[derive(Debug, Clone)]
pub enum EngineState {
    Evaluating,
    Decided(TrustDecision),
}

pub struct TrustEngine {
    runner: CheckRunner,
    state: EngineState,
}

impl TrustEngine {
    pub fn new(config: TrustConfig, source: Arc<dyn SignalSource>) -> Self {
        Self {
            runner: CheckRunner::new(Arc::new(config), source),
            state: EngineState::Evaluating,
        }
    }

    /// Build an engine from a fallible adapter constructor.
    ///
    /// If the adapter cannot be built the error is returned and no report
    /// is ever produced.
    pub fn try_new<F>(config: TrustConfig, make_source: F) -> TrustGateResult<Self>
    where
        F: FnOnce() -> TrustGateResult<Arc<dyn SignalSource>>,
    {
        let source = make_source()?;
        Ok(Self::new(config, source))
    }

    /// True only once the decision pass has accepted the environment.
    /// Before a decision, and after a rejection, protected content must not
    /// render.
    pub fn may_render(&self) -> bool {
        matches!(self.state, EngineState::Decided(TrustDecision::Accept { .. }))
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn config(&self) -> &TrustConfig {
        self.runner.config()
    }

    /// A command bridge answering from the same config and signal source.
    pub fn bridge(&self) -> CommandBridge {
        CommandBridge::new(self.runner.clone())
    }

    /// Run every enabled check into a fresh report, without deciding.
    pub fn evaluate(&self) -> TrustReport {
        self.runner.report()
    }

    /// Run the decision pass and record the outcome.
    pub fn decide(&mut self) -> TrustDecision {
        self.state = EngineState::Evaluating;
        let report = self.runner.report();
        let config = self.runner.config();

        for verdict in &report.verdicts {
            debug!(
                report_id = %report.report_id.0,
                check = %verdict.check,
                result = verdict.result,
                reason = %verdict.reason,
                fatal = config.is_fatal(verdict.check),
                "verdict"
            );
        }

        let fatal: Vec<String> = report
            .verdicts
            .iter()
            .filter(|v| v.is_flagged() && config.is_fatal(v.check))
            .map(|v| format!("{}:{}", v.check, v.reason))
            .collect();

        let decision = if fatal.is_empty() {
            info!(report_id = %report.report_id.0, "environment trusted");
            TrustDecision::Accept { report }
        } else {
            let reason = fatal.join("; ");
            warn!(report_id = %report.report_id.0, reason = %reason, "environment untrusted");
            TrustDecision::Reject { report, reason }
        };

        self.state = EngineState::Decided(decision.clone());
        decision
    }

    /// The startup gate.
    ///
    /// 1. Mark the window secure, before any content can render.
    /// 2. Run the decision pass.
    /// 3. On reject, release foreground resources and terminate.
    ///
    /// A production shell exits the process inside `Shell::terminate`. A shell
    /// that returns from `terminate` (a test or reference host) must treat a
    /// returned `Reject` as final: no protected content may render afterwards,
    /// and [`TrustEngine::may_render`] stays false for this engine.
    ///
    /// # Errors
    ///
    /// Returns `Err` only if the shell cannot set the secure-window flag; in
    /// that case no checks run.
    pub fn enforce_startup(&mut self, shell: &dyn Shell) -> TrustGateResult<TrustDecision> {
        shell.set_secure_window()?;

        let decision = self.decide();
        if let TrustDecision::Reject { reason, .. } = &decision {
            warn!(reason = %reason, "terminating: untrusted environment");
            shell.release_foreground();
            shell.terminate(reason);
        }
        Ok(decision)
    }
}
