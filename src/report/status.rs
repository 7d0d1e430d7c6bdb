use crate::run::run_model::TestStatus;

// ============================================================================
// Status classifier — one status, one presentation category
// ============================================================================

/// Presentation category for a status: a stable CSS tag plus display text.
///
/// Derived on demand, never stored. Both rendering contexts (summary rows
/// and detail blocks) consume this one table; their differing CSS naming
/// conventions are derivations via `row_class` / `block_class`, so the
/// mapping cannot drift between the two views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCategory {
    /// Stable symbolic tag, one per status
    pub css_class: &'static str,

    /// Human-readable label
    pub display_text: &'static str,
}

impl StatusCategory {
    /// Class name used on summary rows, e.g. `status-pass`.
    pub fn row_class(&self) -> String {
        format!("status-{}", self.css_class)
    }

    /// Class name used on detail banners and step blocks, e.g. `result-pass`.
    pub fn block_class(&self) -> String {
        format!("result-{}", self.css_class)
    }
}

/// Map a status to its presentation category.
///
/// Total over the enum and referentially transparent: the same status
/// always yields the same category. The display strings are designer
/// choices preserved as data.
pub fn classify(status: TestStatus) -> StatusCategory {
    match status {
        TestStatus::Pass => StatusCategory {
            css_class: "pass",
            display_text: "Pass",
        },
        TestStatus::Fail => StatusCategory {
            css_class: "fail",
            display_text: "Fail",
        },
        TestStatus::Skip => StatusCategory {
            css_class: "skip",
            display_text: "Skip",
        },
        TestStatus::Abort => StatusCategory {
            css_class: "abort",
            display_text: "Abort",
        },
        TestStatus::Error => StatusCategory {
            css_class: "error",
            display_text: "Error",
        },
        TestStatus::Block => StatusCategory {
            css_class: "block",
            display_text: "Block",
        },
        TestStatus::Neutral => StatusCategory {
            css_class: "neutral",
            display_text: "Neutral",
        },
        TestStatus::Info => StatusCategory {
            css_class: "info",
            display_text: "Info",
        },
    }
}
