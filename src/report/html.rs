use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::report::error::ReportError;
use crate::report::report_model::{DetailDocument, SummaryDocument};
use crate::report::status::classify;

// ============================================================================
// HTML renderer — self-contained summary and detail reports
// ============================================================================

/// Maximum nesting depth accepted when serializing parsed data. Anything
/// deeper fails that block with a `Serialization` error.
const MAX_PARSED_DEPTH: usize = 64;

/// Render a timestamp as a stable, sortable human-readable string.
pub fn format_timestamp(t: &DateTime<Utc>) -> String {
    t.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Generate the self-contained summary page.
///
/// Features:
/// - Executive summary with total/passed/failed counts and success rate
/// - One row per test in input order, colored by status category
/// - Relative link to each test's detail page, embedded verbatim
/// - Inline CSS (no external dependencies)
///
/// Deterministic: identical input produces byte-identical output. All
/// fallible validation happens in `assemble_summary`, so rendering a
/// validated document cannot fail or drop rows.
pub fn render_summary(doc: &SummaryDocument) -> String {
    let mut rows = String::new();
    for outcome in &doc.outcomes {
        let category = classify(outcome.status);
        rows.push_str(&format!(
            r#"<div class="test-result">
<h3>{title}</h3>
<p class="{class}">Status: {status}</p>
<p class="timestamp">{timestamp}</p>
<p><a href="{link}">View Detailed Results</a></p>
</div>
"#,
            title = escape_html(&outcome.title),
            class = category.row_class(),
            status = category.display_text,
            timestamp = format_timestamp(&outcome.timestamp),
            link = escape_html(&outcome.detail_link_path),
        ));
    }

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Test Results Summary</title>
<style>
body {{ font-family: Arial, sans-serif; margin: 40px; }}
.summary {{ margin: 20px 0; padding: 20px; background: #f8f9fa; }}
.test-result {{ margin: 10px 0; padding: 10px 16px; border-left: 4px solid #ccc; }}
.test-result h3 {{ margin: 0 0 6px 0; }}
.test-result p {{ margin: 4px 0; }}
.timestamp {{ color: #666; font-size: 14px; }}
.status-pass {{ color: #28a745; font-weight: bold; }}
.status-fail {{ color: #dc3545; font-weight: bold; }}
.status-skip {{ color: #6c757d; font-weight: bold; }}
.status-abort {{ color: #fd7e14; font-weight: bold; }}
.status-error {{ color: #b02a37; font-weight: bold; }}
.status-block {{ color: #6610f2; font-weight: bold; }}
.status-neutral {{ color: #adb5bd; font-weight: bold; }}
.status-info {{ color: #0d6efd; font-weight: bold; }}
</style>
</head>
<body>
<h1>Test Results Summary</h1>
<div class="summary">
<h2>Executive Summary</h2>
<p>Total Tests: {total}</p>
<p>Passed: {passed}</p>
<p>Failed: {failed}</p>
<p>Success Rate: {rate:.1}%</p>
</div>
<h2>Test Results</h2>
<div class="test-results">
{rows}</div>
<footer>
<p>Generated: {generated}</p>
</footer>
</body>
</html>
"##,
        total = doc.statistics.total,
        passed = doc.statistics.passed,
        failed = doc.statistics.failed,
        rate = doc.statistics.success_rate,
        rows = rows,
        generated = format_timestamp(&doc.generated_at),
    )
}

/// Generate the self-contained detail page for one test.
///
/// The four narrative sections are trusted fragments and embedded verbatim;
/// everything else (title, device names, commands, raw output, parsed data)
/// is escaped. An empty `command_executions` sequence suppresses the whole
/// Command Executions section rather than rendering an empty header.
///
/// A parsed-data value that fails to serialize is replaced by a placeholder
/// naming the device, and the rest of the document still renders; one
/// malformed transcript never blocks a report.
pub fn render_detail(doc: &DetailDocument) -> String {
    let banner = classify(doc.status);

    let mut results = String::new();
    for step in &doc.results {
        let category = classify(step.status);
        results.push_str(&format!(
            "<div class=\"{class}\">\n{message}\n</div>\n",
            class = category.block_class(),
            message = step.message.as_str(),
        ));
    }

    let mut executions = String::new();
    if !doc.command_executions.is_empty() {
        executions.push_str("<section>\n<h2>Command Executions</h2>\n");
        for exec in &doc.command_executions {
            executions.push_str(&format!(
                "<details class=\"command-execution\">\n<summary>{device}: <code>{command}</code></summary>\n<pre>{output}</pre>\n",
                device = escape_html(&exec.device_name),
                command = escape_html(&exec.command),
                output = escape_html(&exec.output),
            ));

            if let Some(ref value) = exec.parsed_data {
                match render_parsed_data(&exec.device_name, value) {
                    Ok(html) => {
                        executions.push_str(&format!(
                            "<div class=\"parsed-data\">\n<h4>Parsed Data</h4>\n{}\n</div>\n",
                            html
                        ));
                    }
                    Err(e) => {
                        executions.push_str(&format!(
                            "<div class=\"parsed-data-error\">Parsed data unavailable: {}</div>\n",
                            escape_html(&e.to_string())
                        ));
                    }
                }
            }

            executions.push_str("</details>\n");
        }
        executions.push_str("</section>\n");
    }

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title} - Test Results</title>
<style>
body {{ font-family: Arial, sans-serif; margin: 40px; }}
section {{ margin-bottom: 30px; }}
pre {{ background-color: #f5f5f5; padding: 10px; border-radius: 5px; overflow: auto; }}
code {{ font-family: Consolas, Monaco, 'Andale Mono', monospace; }}
table {{ border-collapse: collapse; width: 100%; margin: 15px 0; }}
th, td {{ border: 1px solid #ddd; padding: 8px; text-align: left; }}
th {{ background-color: #f2f2f2; }}
.result-pass {{ color: #28a745; font-weight: bold; }}
.result-fail {{ color: #dc3545; font-weight: bold; }}
.result-skip {{ color: #6c757d; font-weight: bold; }}
.result-abort {{ color: #fd7e14; font-weight: bold; }}
.result-error {{ color: #b02a37; font-weight: bold; }}
.result-block {{ color: #6610f2; font-weight: bold; }}
.result-neutral {{ color: #adb5bd; font-weight: bold; }}
.result-info {{ color: #0d6efd; font-weight: bold; }}
.command-execution {{ margin: 12px 0; padding: 8px 12px; background: #fafafa; border: 1px solid #e0e0e0; border-radius: 5px; }}
.parsed-data {{ margin: 8px 0 4px 0; }}
.parsed-data h4 {{ margin: 4px 0; }}
.parsed-data-error {{ color: #b02a37; font-style: italic; margin: 8px 0 4px 0; }}
.parsed-seq {{ margin: 4px 0; }}
.parsed-map {{ margin: 4px 0 4px 16px; }}
.parsed-map dt {{ font-weight: bold; }}
.parsed-map dd {{ margin: 0 0 4px 16px; }}
</style>
</head>
<body>
<h1>{title}</h1>
<div class="{banner_class}">
Test Status: {banner_text}
</div>

<section>
<h2>Description</h2>
{description}
</section>

<section>
<h2>Setup</h2>
{setup}
</section>

<section>
<h2>Procedure</h2>
{procedure}
</section>

<section>
<h2>Pass/Fail Criteria</h2>
{criteria}
</section>

<section>
<h2>Results</h2>
{results}</section>

{executions}<footer>
<p>Generated: {generated}</p>
</footer>
</body>
</html>
"##,
        title = escape_html(&doc.title),
        banner_class = banner.block_class(),
        banner_text = banner.display_text,
        description = doc.description.as_str(),
        setup = doc.setup.as_str(),
        procedure = doc.procedure.as_str(),
        criteria = doc.criteria.as_str(),
        results = results,
        executions = executions,
        generated = format_timestamp(&doc.generated_at),
    )
}

// ============================================================================
// Parsed-data serializer — recursive, total over the value union
// ============================================================================

/// Serialize a parsed-data value to nested HTML.
///
/// Maps render as definition lists with their keys in stable (sorted)
/// order, sequences as ordered lists, scalars as typed spans. Values nested
/// deeper than `MAX_PARSED_DEPTH` fail with a `Serialization` error
/// attributed to `device_name`; the caller decides whether that fails the
/// document or just this block.
pub fn render_parsed_data(device_name: &str, value: &Value) -> Result<String, ReportError> {
    let mut out = String::new();
    write_parsed_value(&mut out, value, 0).map_err(|reason| ReportError::Serialization {
        device_name: device_name.to_string(),
        reason,
    })?;
    Ok(out)
}

fn write_parsed_value(out: &mut String, value: &Value, depth: usize) -> Result<(), String> {
    if depth > MAX_PARSED_DEPTH {
        return Err(format!("nesting exceeds {} levels", MAX_PARSED_DEPTH));
    }

    match value {
        Value::Null => out.push_str("<span class=\"parsed-null\">null</span>"),
        Value::Bool(b) => out.push_str(&format!("<span class=\"parsed-bool\">{}</span>", b)),
        Value::Number(n) => {
            out.push_str(&format!("<span class=\"parsed-number\">{}</span>", n))
        }
        Value::String(s) => out.push_str(&format!(
            "<span class=\"parsed-string\">{}</span>",
            escape_html(s)
        )),
        Value::Array(items) => {
            if items.is_empty() {
                out.push_str("<span class=\"parsed-empty\">(empty list)</span>");
            } else {
                out.push_str("<ol class=\"parsed-seq\">");
                for item in items {
                    out.push_str("<li>");
                    write_parsed_value(out, item, depth + 1)?;
                    out.push_str("</li>");
                }
                out.push_str("</ol>");
            }
        }
        Value::Object(map) => {
            if map.is_empty() {
                out.push_str("<span class=\"parsed-empty\">(no entries)</span>");
            } else {
                // serde_json objects iterate in key order, which keeps the
                // rendering stable across runs.
                out.push_str("<dl class=\"parsed-map\">");
                for (key, item) in map {
                    out.push_str(&format!("<dt>{}</dt><dd>", escape_html(key)));
                    write_parsed_value(out, item, depth + 1)?;
                    out.push_str("</dd>");
                }
                out.push_str("</dl>");
            }
        }
    }

    Ok(())
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
