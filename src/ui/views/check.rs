use formpack::application::CheckReport;

use crate::ui::error::format_failure;
use crate::ui::primitives::icon::Icon;

pub fn render_check_report(
    report: &CheckReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    for name in &report.checked {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            name
        ));
    }
    if !report.failures.is_empty() {
        out.push('\n');
    }
    for failure in &report.failures {
        out.push_str(&format_failure(failure, supports_color, supports_unicode));
        out.push('\n');
    }

    let icon = if report.is_success() {
        Icon::Success
    } else {
        Icon::Error
    };
    out.push_str(&format!(
        "{} {} of {} templates compile\n",
        icon.colored(supports_color, supports_unicode),
        report.checked.len(),
        report.total()
    ));
    out
}

pub fn check_json(report: &CheckReport) -> serde_json::Value {
    let failures: Vec<serde_json::Value> = report
        .failures
        .iter()
        .map(|f| {
            let mut value = serde_json::json!({
                "name": f.name,
                "path": f.path.display().to_string(),
                "message": f.error.to_string(),
            });
            if let formpack::FormpackError::Compile(err) = &f.error {
                value["line"] = serde_json::json!(err.line);
                value["column"] = serde_json::json!(err.column);
            }
            value
        })
        .collect();

    serde_json::json!({
        "event": "check",
        "status": if report.is_success() { "success" } else { "failure" },
        "checked": report.checked,
        "failures": failures,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use formpack::application::TemplateFailure;
    use formpack::CompileError;

    fn failing_report() -> CheckReport {
        CheckReport {
            checked: vec!["a".to_string()],
            failures: vec![TemplateFailure::new(
                "b",
                "form_templates/b.form",
                CompileError::new("b", "x\n{/y}", "unexpected closing tag '{/y}'", 2, 1).into(),
            )],
        }
    }

    #[test]
    fn renders_summary_line() {
        let rendered = render_check_report(&failing_report(), false, false);

        assert!(rendered.contains("[OK] a\n"));
        assert!(rendered.contains("[FAIL] form_templates/b.form:2:1"));
        assert!(rendered.ends_with("[FAIL] 1 of 2 templates compile\n"));
    }

    #[test]
    fn json_includes_position() {
        let json = check_json(&failing_report());

        assert_eq!(json["status"], "failure");
        assert_eq!(json["failures"][0]["line"], 2);
        assert_eq!(json["failures"][0]["column"], 1);
    }
}
