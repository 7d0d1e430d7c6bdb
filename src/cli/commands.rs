use std::path::Path;

use chrono::Utc;

use crate::report::console::render_console_summary;
use crate::report::html::{render_detail, render_summary};
use crate::report::report_model::{assemble_detail, assemble_summary};
use crate::run::run_model::{TestOutcome, TestRun};

// ============================================================================
// render subcommand
// ============================================================================

/// Render a test run into a report and return whether no test failed.
///
/// For the `html` format this writes `index.html` plus one detail page per
/// test under `<output_dir>/results/`; the summary rows link to those pages
/// by relative path. The `console` format prints the summary to stdout and
/// writes nothing.
pub fn cmd_render(
    run_path: &str,
    format: &str,
    output_dir: &str,
    verbose: u8,
) -> Result<bool, Box<dyn std::error::Error>> {
    let run = load_run(run_path)?;
    let generated_at = run.generated_at.unwrap_or_else(Utc::now);

    if verbose > 0 {
        eprintln!("Rendering {} test records...", run.tests.len());
    }

    // Summary rows link to the detail files written below, so the two
    // sides derive the same filename per record.
    let outcomes: Vec<TestOutcome> = run
        .tests
        .iter()
        .enumerate()
        .map(|(i, record)| TestOutcome {
            title: record.title.clone(),
            status: record.status,
            timestamp: record.timestamp,
            detail_link_path: format!("results/{}", detail_filename(i, &record.title)),
        })
        .collect();

    let summary = assemble_summary(outcomes, generated_at)?;
    let no_failures = summary.statistics.all_passed();

    match format {
        "console" => {
            print!("{}", render_console_summary(&summary));
        }
        "html" => {
            ensure_report_dirs(output_dir)?;

            for (i, record) in run.tests.iter().enumerate() {
                let detail = assemble_detail(
                    &record.title,
                    record.status,
                    record.description.clone(),
                    record.setup.clone(),
                    record.procedure.clone(),
                    record.criteria.clone(),
                    record.results.clone(),
                    record.command_executions.clone(),
                    generated_at,
                )?;

                let path = Path::new(output_dir)
                    .join("results")
                    .join(detail_filename(i, &record.title));
                std::fs::write(&path, render_detail(&detail))?;

                if verbose > 0 {
                    eprintln!("  Wrote: {}", path.display());
                }
            }

            let index_path = Path::new(output_dir).join("index.html");
            std::fs::write(&index_path, render_summary(&summary))?;

            println!(
                "Rendered {} detail reports in {}/",
                run.tests.len(),
                output_dir
            );
        }
        other => {
            return Err(format!("Unknown output format: {}", other).into());
        }
    }

    Ok(no_failures)
}

/// Load a test run from a JSON file, or YAML when the extension says so.
pub fn load_run(path: &str) -> Result<TestRun, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let run = if Path::new(path)
        .extension()
        .map_or(false, |e| e == "yaml" || e == "yml")
    {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    Ok(run)
}

/// Create the report directory tree if it does not exist.
pub fn ensure_report_dirs(output_dir: &str) -> std::io::Result<()> {
    std::fs::create_dir_all(Path::new(output_dir).join("results"))
}

/// Filename of the detail page for record `i`. The index prefix keeps
/// files unique when two tests sanitize to the same name.
pub fn detail_filename(i: usize, title: &str) -> String {
    format!("{:03}_{}_results.html", i + 1, sanitize_filename(title))
}

/// Sanitize a test title into a safe filename.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .to_lowercase()
}
