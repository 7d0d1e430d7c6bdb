use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome kind of a test or a single verification step.
///
/// Closed set: the collector normalizes whatever its execution engine emits
/// into one of these before handing data to this crate. Deserialization of
/// any other token fails, so no "unknown status" value can reach rendering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    Pass,
    Fail,
    Skip,
    Abort,
    Error,
    Block,
    Neutral,
    Info,
}

impl TestStatus {
    /// Every member, in declaration order. Used by totality tests.
    pub const ALL: [TestStatus; 8] = [
        TestStatus::Pass,
        TestStatus::Fail,
        TestStatus::Skip,
        TestStatus::Abort,
        TestStatus::Error,
        TestStatus::Block,
        TestStatus::Neutral,
        TestStatus::Info,
    ];
}

/// A fragment of markup already rendered safe by the upstream collector
/// (markdown conversion happens on its side). Embedded verbatim by the
/// renderer, never escaped again.
///
/// Plain strings get escaped; only values wrapped in this type bypass
/// escaping. Wrapping untrusted input here is an injection hole on the
/// caller's side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One row of the summary report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestOutcome {
    /// Test title (non-empty, validated at assembly time)
    pub title: String,

    /// Overall outcome of the test
    pub status: TestStatus,

    /// When the test finished. Render order follows input order, so
    /// out-of-order timestamps are rendered as given, not re-sorted.
    pub timestamp: DateTime<Utc>,

    /// Relative path to this test's detail report, embedded verbatim
    /// in the summary row. Resolution is the surrounding tooling's job.
    pub detail_link_path: String,
}

/// One entry in a detail report's Results section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepResult {
    /// Outcome of this verification step
    pub status: TestStatus,

    /// Upstream-rendered message markup, passed through verbatim
    pub message: TrustedHtml,
}

/// One device command transcript in a detail report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommandExecution {
    /// Device the command ran on
    pub device_name: String,

    /// The command line as sent to the device
    pub command: String,

    /// Raw terminal output, whitespace and newlines preserved exactly
    pub output: String,

    /// Structured data parsed from the output, of arbitrary nesting
    /// (null | bool | number | string | sequence | map). Absent when the
    /// command has no parser.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed_data: Option<serde_json::Value>,
}

/// The full per-test input bundle handed over by the collector. Carries
/// everything the detail report needs plus the summary-row fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestRecord {
    /// Test title
    pub title: String,

    /// Overall outcome
    pub status: TestStatus,

    /// When the test finished
    pub timestamp: DateTime<Utc>,

    /// Narrative sections, pre-rendered to HTML by the collector
    pub description: TrustedHtml,
    pub setup: TrustedHtml,
    pub procedure: TrustedHtml,
    pub criteria: TrustedHtml,

    /// Per-step results, in execution order
    #[serde(default)]
    pub results: Vec<StepResult>,

    /// Device command transcripts, in execution order. May be empty.
    #[serde(default)]
    pub command_executions: Vec<CommandExecution>,
}

/// A complete test run: what a run file on disk deserializes into.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestRun {
    /// Report generation time. When absent the CLI stamps the current
    /// time; the assembly layer itself never reads the clock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,

    /// All test records, in execution order
    pub tests: Vec<TestRecord>,
}
