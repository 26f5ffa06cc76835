use std::path::Path;

use formpack::application::RebuildReport;

use crate::ui::error::format_failure;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_build_report(
    report: &RebuildReport,
    output: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    for failure in &report.failures {
        out.push_str(&format_failure(failure, supports_color, supports_unicode));
        if report.retained.contains(&failure.name) {
            out.push_str("  previous version kept in bundle\n");
        }
        out.push('\n');
    }
    for name in &report.pruned {
        out.push_str(&format!(
            "{} Removed: {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            name
        ));
    }

    match (&report.write_error, report.bytes_written) {
        (Some(message), _) => out.push_str(&format!(
            "{} {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            message
        )),
        (None, Some(bytes)) => out.push_str(&format!(
            "{} Wrote {} ({} bytes)\n",
            Icon::Success.colored(supports_color, supports_unicode),
            output.display(),
            bytes
        )),
        (None, None) => {}
    }

    let summary = format!(
        "{} compiled, {} failed, {} in bundle",
        report.compiled.len(),
        report.failures.len(),
        report.templates
    );
    let summary = if report.is_success() {
        ColoredText::success(summary).render(supports_color)
    } else {
        ColoredText::warning(summary).render(supports_color)
    };
    out.push_str(&format!("{}\n", summary));
    out
}

pub fn build_json(report: &RebuildReport, output: &Path) -> serde_json::Value {
    let failures: Vec<serde_json::Value> = report
        .failures
        .iter()
        .map(|f| {
            serde_json::json!({
                "name": f.name,
                "path": f.path.display().to_string(),
                "message": f.error.to_string(),
                "retained": report.retained.contains(&f.name),
            })
        })
        .collect();

    serde_json::json!({
        "event": "build",
        "status": if report.is_success() { "success" } else { "partial" },
        "output": output.display().to_string(),
        "compiled": report.compiled,
        "failures": failures,
        "pruned": report.pruned,
        "templates": report.templates,
        "bytes_written": report.bytes_written,
        "write_error": report.write_error,
    })
}
