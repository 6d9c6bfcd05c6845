// trestle-core/src/domain/diagnostics.rs

use serde::Serialize;
use tracing::warn;

/// A non-fatal deprecation signal. Collected and returned with the build
/// result so the host may log or ignore it; never aborts the build.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct DeprecationNotice {
    /// The configuration surface being deprecated, e.g. `operator_args.env`.
    pub subject: String,
    pub detail: String,
}

/// Collects deprecation notices during a conversion, mirroring each one to
/// the log as it is recorded.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    notices: Vec<DeprecationNotice>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deprecate(&mut self, subject: &str, detail: &str) {
        warn!(subject, "{}", detail);
        self.notices.push(DeprecationNotice {
            subject: subject.to_string(),
            detail: detail.to_string(),
        });
    }

    pub fn notices(&self) -> &[DeprecationNotice] {
        &self.notices
    }

    pub fn into_notices(self) -> Vec<DeprecationNotice> {
        self.notices
    }
}
