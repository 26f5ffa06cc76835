use formpack::application::TemplateFailure;
use formpack::FormpackError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::primitives::icon::Icon;

/// Render one template that failed during a rebuild or check.
pub fn format_failure(
    failure: &TemplateFailure,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    match &failure.error {
        FormpackError::Compile(err) => ErrorBlock::new(&failure.path, err.message.as_str())
            .with_position(err.line, err.column)
            .with_source_context(&err.content, 2, 1)
            .render(supports_color, supports_unicode),
        FormpackError::Read { source, .. } => {
            ErrorBlock::new(&failure.path, format!("could not read template: {source}"))
                .render(supports_color, supports_unicode)
        }
        other => ErrorBlock::new(&failure.path, other.to_string())
            .render(supports_color, supports_unicode),
    }
}

fn format_formpack_error_with(
    err: &FormpackError,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    match err {
        FormpackError::DirectoryNotFound { path } => {
            ErrorBlock::new(path, "template directory does not exist")
                .with_fix("Create it, or point `source.dir` in formpack.toml (or --source) at an existing directory.")
                .render(supports_color, supports_unicode)
        }
        FormpackError::Config { file, message } => ErrorBlock::new(file, message.as_str())
            .with_fix("Fix the TOML and try again.")
            .render(supports_color, supports_unicode),
        FormpackError::Watch { path, message } => ErrorBlock::new(path, message.as_str())
            .render(supports_color, supports_unicode),
        other => format!(
            "{} {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            other
        ),
    }
}

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    if let Some(formpack) = err.downcast_ref::<FormpackError>() {
        return format_formpack_error_with(formpack, supports_color, supports_unicode);
    }

    format!(
        "{} {:#}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        err
    )
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{err:#}"),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    let color = caps.supports_color && !caps.is_ci;
    eprint!("{}", format_error(err, color, caps.supports_unicode));
}
