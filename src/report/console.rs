use crate::report::html::format_timestamp;
use crate::report::report_model::SummaryDocument;
use crate::report::status::classify;
use crate::run::run_model::TestStatus;

// ============================================================================
// Console reporter — formatted terminal output for the summary view
// ============================================================================

/// Format the summary document for terminal output.
///
/// Produces output like:
/// ```text
/// === Test Results Summary ===
///
/// ✓ Pass     OSPF Neighbor Status  [2026-08-04 09:15:02]
/// ✗ Fail     BGP Session State  [2026-08-04 09:16:41]
/// - Skip     Interface Errors  [2026-08-04 09:17:10]
///
/// === Results: 1 passed, 1 failed (3 total, 33.3% success rate) ===
/// ```
pub fn render_console_summary(doc: &SummaryDocument) -> String {
    let mut out = String::new();

    out.push_str("=== Test Results Summary ===\n\n");

    for outcome in &doc.outcomes {
        let category = classify(outcome.status);
        let marker = match outcome.status {
            TestStatus::Pass => "\u{2713}",
            TestStatus::Fail => "\u{2717}",
            _ => "-",
        };

        out.push_str(&format!(
            "{} {:<8} {}  [{}]\n",
            marker,
            category.display_text,
            outcome.title,
            format_timestamp(&outcome.timestamp)
        ));
    }

    out.push_str(&format!(
        "\n=== Results: {} passed, {} failed ({} total, {:.1}% success rate) ===\n",
        doc.statistics.passed,
        doc.statistics.failed,
        doc.statistics.total,
        doc.statistics.success_rate
    ));

    out
}
