use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::report::error::ReportError;
use crate::run::run_model::{CommandExecution, StepResult, TestOutcome, TestStatus, TrustedHtml};

// ============================================================================
// Run statistics — aggregate counts over a sequence of outcomes
// ============================================================================

/// Summary counts for a test run.
///
/// Recomputed from the outcome sequence on every assembly, never persisted
/// on its own. Statuses other than pass/fail (skip, abort, error, block,
/// neutral, info) count toward `total` only: a run of nothing but skips
/// reports a success rate of 0.0, not "not applicable".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunStatistics {
    /// Total number of tests
    pub total: usize,

    /// Number of tests with status pass
    pub passed: usize,

    /// Number of tests with status fail
    pub failed: usize,

    /// `passed / total * 100`, or 0.0 for an empty run. Kept as a float;
    /// formatted to one decimal at render time (Rust `{:.1}` formatting,
    /// round-half-to-even).
    pub success_rate: f64,
}

impl RunStatistics {
    /// Whether no test failed. Non-fail statuses do not count against this.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Reduce an ordered sequence of outcomes to summary counts.
///
/// Pure; empty input is valid and yields all zeros.
pub fn aggregate(outcomes: &[TestOutcome]) -> RunStatistics {
    let total = outcomes.len();
    let passed = outcomes
        .iter()
        .filter(|o| o.status == TestStatus::Pass)
        .count();
    let failed = outcomes
        .iter()
        .filter(|o| o.status == TestStatus::Fail)
        .count();
    let success_rate = if total == 0 {
        0.0
    } else {
        passed as f64 / total as f64 * 100.0
    };

    RunStatistics {
        total,
        passed,
        failed,
        success_rate,
    }
}

// ============================================================================
// Documents — assembled report trees, ready for rendering
// ============================================================================

/// The all-tests overview report: statistics plus one row per test,
/// in input order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryDocument {
    /// When this report was generated (caller-supplied)
    pub generated_at: DateTime<Utc>,

    /// Aggregate counts over `outcomes`
    pub statistics: RunStatistics,

    /// One entry per test, input order preserved
    pub outcomes: Vec<TestOutcome>,
}

/// The single-test deep report: narrative sections, step results and
/// device command transcripts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetailDocument {
    /// Test title
    pub title: String,

    /// Overall outcome, rendered as the status banner
    pub status: TestStatus,

    /// Narrative sections, pre-rendered and trusted
    pub description: TrustedHtml,
    pub setup: TrustedHtml,
    pub procedure: TrustedHtml,
    pub criteria: TrustedHtml,

    /// Step results, input order preserved
    pub results: Vec<StepResult>,

    /// Command transcripts, input order preserved. Empty means the whole
    /// Command Executions section is suppressed at render time.
    pub command_executions: Vec<CommandExecution>,

    /// When this report was generated (caller-supplied)
    pub generated_at: DateTime<Utc>,
}

/// Build a summary document from outcome rows.
///
/// Validates every row up front and aggregates once. A bad row aborts the
/// whole assembly with its index and title, so a summary can never silently
/// drop entries.
pub fn assemble_summary(
    outcomes: Vec<TestOutcome>,
    generated_at: DateTime<Utc>,
) -> Result<SummaryDocument, ReportError> {
    for (index, outcome) in outcomes.iter().enumerate() {
        if outcome.title.trim().is_empty() {
            return Err(ReportError::InputShape {
                index,
                title: outcome.title.clone(),
                reason: "title must not be empty".to_string(),
            });
        }
        if outcome.detail_link_path.is_empty() {
            return Err(ReportError::InputShape {
                index,
                title: outcome.title.clone(),
                reason: "detail link path must not be empty".to_string(),
            });
        }
    }

    let statistics = aggregate(&outcomes);

    Ok(SummaryDocument {
        generated_at,
        statistics,
        outcomes,
    })
}

/// Build a detail document from one test's input bundle.
///
/// Structural copy plus shape validation; parsed data inside the command
/// executions is opaque here and only examined by the renderer.
pub fn assemble_detail(
    title: &str,
    status: TestStatus,
    description: TrustedHtml,
    setup: TrustedHtml,
    procedure: TrustedHtml,
    criteria: TrustedHtml,
    results: Vec<StepResult>,
    command_executions: Vec<CommandExecution>,
    generated_at: DateTime<Utc>,
) -> Result<DetailDocument, ReportError> {
    if title.trim().is_empty() {
        return Err(ReportError::InputShape {
            index: 0,
            title: title.to_string(),
            reason: "title must not be empty".to_string(),
        });
    }

    Ok(DetailDocument {
        title: title.to_string(),
        status,
        description,
        setup,
        procedure,
        criteria,
        results,
        command_executions,
        generated_at,
    })
}
