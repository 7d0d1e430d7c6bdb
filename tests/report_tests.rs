use chrono::{DateTime, Utc};
use testrun_report::report::console::render_console_summary;
use testrun_report::report::error::ReportError;
use testrun_report::report::report_model::{
    aggregate, assemble_detail, assemble_summary, SummaryDocument,
};
use testrun_report::run::run_model::{
    CommandExecution, StepResult, TestOutcome, TestStatus, TrustedHtml,
};

// ============================================================================
// Helper builders
// ============================================================================

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn outcome(title: &str, status: TestStatus) -> TestOutcome {
    TestOutcome {
        title: title.to_string(),
        status,
        timestamp: ts("2026-08-04T09:15:02Z"),
        detail_link_path: format!("results/{}.html", title.to_lowercase()),
    }
}

fn mixed_outcomes() -> Vec<TestOutcome> {
    vec![
        outcome("T1", TestStatus::Pass),
        outcome("T2", TestStatus::Fail),
        outcome("T3", TestStatus::Skip),
    ]
}

// ============================================================================
// 1. Aggregation counts
// ============================================================================

#[test]
fn aggregate_total_matches_length() {
    let outcomes = vec![
        outcome("A", TestStatus::Pass),
        outcome("B", TestStatus::Fail),
        outcome("C", TestStatus::Error),
        outcome("D", TestStatus::Info),
        outcome("E", TestStatus::Pass),
    ];
    let stats = aggregate(&outcomes);
    assert_eq!(stats.total, 5);
    assert_eq!(stats.passed, 2);
    assert_eq!(stats.failed, 1);
}

#[test]
fn aggregate_empty_run() {
    let stats = aggregate(&[]);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.passed, 0);
    assert_eq!(stats.failed, 0);
    assert_eq!(stats.success_rate, 0.0);
    assert!(stats.all_passed());
}

#[test]
fn aggregate_all_pass_is_hundred() {
    let outcomes = vec![outcome("A", TestStatus::Pass), outcome("B", TestStatus::Pass)];
    let stats = aggregate(&outcomes);
    assert_eq!(stats.success_rate, 100.0);
    assert!(stats.all_passed());
}

// ============================================================================
// 2. Non-binary statuses count toward total only
// ============================================================================

#[test]
fn aggregate_only_non_binary_statuses() {
    let outcomes = vec![
        outcome("A", TestStatus::Skip),
        outcome("B", TestStatus::Abort),
        outcome("C", TestStatus::Error),
        outcome("D", TestStatus::Block),
        outcome("E", TestStatus::Neutral),
        outcome("F", TestStatus::Info),
    ];
    let stats = aggregate(&outcomes);
    assert_eq!(stats.total, 6);
    assert_eq!(stats.passed, 0);
    assert_eq!(stats.failed, 0);
    assert_eq!(stats.success_rate, 0.0);
}

// ============================================================================
// 3. Rate formatting at one decimal
// ============================================================================

#[test]
fn aggregate_one_third_formats_to_33_3() {
    let stats = aggregate(&mixed_outcomes());
    assert_eq!(stats.total, 3);
    assert_eq!(stats.passed, 1);
    assert_eq!(stats.failed, 1);
    assert_eq!(format!("{:.1}", stats.success_rate), "33.3");
}

#[test]
fn aggregate_two_thirds_formats_to_66_7() {
    let outcomes = vec![
        outcome("A", TestStatus::Pass),
        outcome("B", TestStatus::Pass),
        outcome("C", TestStatus::Fail),
    ];
    let stats = aggregate(&outcomes);
    assert_eq!(format!("{:.1}", stats.success_rate), "66.7");
}

// ============================================================================
// 4. Summary assembly
// ============================================================================

#[test]
fn assemble_summary_preserves_input_order() {
    let doc = assemble_summary(mixed_outcomes(), ts("2026-08-04T10:00:00Z")).unwrap();
    let titles: Vec<&str> = doc.outcomes.iter().map(|o| o.title.as_str()).collect();
    assert_eq!(titles, vec!["T1", "T2", "T3"]);
    assert_eq!(doc.statistics.total, 3);
}

#[test]
fn assemble_summary_rejects_empty_title() {
    let mut outcomes = mixed_outcomes();
    outcomes[1].title = "  ".to_string();

    let err = assemble_summary(outcomes, ts("2026-08-04T10:00:00Z")).unwrap_err();
    match err {
        ReportError::InputShape { index, .. } => assert_eq!(index, 1),
        other => panic!("Expected InputShape, got {:?}", other),
    }
}

#[test]
fn assemble_summary_rejects_empty_link() {
    let mut outcomes = mixed_outcomes();
    outcomes[2].detail_link_path = String::new();

    let err = assemble_summary(outcomes, ts("2026-08-04T10:00:00Z")).unwrap_err();
    match err {
        ReportError::InputShape { index, title, .. } => {
            assert_eq!(index, 2);
            assert_eq!(title, "T3");
        }
        other => panic!("Expected InputShape, got {:?}", other),
    }
}

#[test]
fn input_shape_error_names_the_record() {
    let mut outcomes = mixed_outcomes();
    outcomes[0].detail_link_path = String::new();

    let err = assemble_summary(outcomes, ts("2026-08-04T10:00:00Z")).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("#0"));
    assert!(message.contains("T1"));
}

// ============================================================================
// 5. Detail assembly
// ============================================================================

#[test]
fn assemble_detail_minimal() {
    let doc = assemble_detail(
        "OSPF Neighbor Status",
        TestStatus::Pass,
        TrustedHtml::new("<p>desc</p>"),
        TrustedHtml::new("<p>setup</p>"),
        TrustedHtml::new("<p>procedure</p>"),
        TrustedHtml::new("<p>criteria</p>"),
        vec![StepResult {
            status: TestStatus::Pass,
            message: TrustedHtml::new("Neighbor 10.0.0.2 is FULL"),
        }],
        vec![],
        ts("2026-08-04T10:00:00Z"),
    )
    .unwrap();

    assert_eq!(doc.title, "OSPF Neighbor Status");
    assert_eq!(doc.results.len(), 1);
    assert!(doc.command_executions.is_empty());
}

#[test]
fn assemble_detail_rejects_empty_title() {
    let err = assemble_detail(
        "",
        TestStatus::Pass,
        TrustedHtml::new(""),
        TrustedHtml::new(""),
        TrustedHtml::new(""),
        TrustedHtml::new(""),
        vec![],
        vec![],
        ts("2026-08-04T10:00:00Z"),
    )
    .unwrap_err();

    assert!(matches!(err, ReportError::InputShape { .. }));
}

#[test]
fn assemble_detail_preserves_execution_order() {
    let executions = vec![
        CommandExecution {
            device_name: "r1".to_string(),
            command: "show ip ospf neighbor".to_string(),
            output: "Neighbor ID  Pri  State".to_string(),
            parsed_data: None,
        },
        CommandExecution {
            device_name: "r2".to_string(),
            command: "show ip interface brief".to_string(),
            output: "Interface  IP-Address".to_string(),
            parsed_data: None,
        },
    ];

    let doc = assemble_detail(
        "Ordered",
        TestStatus::Pass,
        TrustedHtml::new(""),
        TrustedHtml::new(""),
        TrustedHtml::new(""),
        TrustedHtml::new(""),
        vec![],
        executions,
        ts("2026-08-04T10:00:00Z"),
    )
    .unwrap();

    assert_eq!(doc.command_executions[0].device_name, "r1");
    assert_eq!(doc.command_executions[1].device_name, "r2");
}

// ============================================================================
// 6. JSON roundtrip
// ============================================================================

#[test]
fn summary_document_json_roundtrip() {
    let doc = assemble_summary(mixed_outcomes(), ts("2026-08-04T10:00:00Z")).unwrap();
    let json = serde_json::to_string(&doc).unwrap();
    let parsed: SummaryDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, doc);
}

// ============================================================================
// 7. Console summary
// ============================================================================

#[test]
fn console_summary_markers() {
    let doc = assemble_summary(mixed_outcomes(), ts("2026-08-04T10:00:00Z")).unwrap();
    let output = render_console_summary(&doc);
    assert!(output.contains("\u{2713} Pass"));
    assert!(output.contains("\u{2717} Fail"));
    assert!(output.contains("- Skip"));
}

#[test]
fn console_summary_totals_line() {
    let doc = assemble_summary(mixed_outcomes(), ts("2026-08-04T10:00:00Z")).unwrap();
    let output = render_console_summary(&doc);
    assert!(output.contains("1 passed, 1 failed (3 total, 33.3% success rate)"));
}
