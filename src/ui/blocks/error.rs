use std::path::PathBuf;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// A located error with optional source excerpt and fix hint
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    file: PathBuf,
    position: Option<(usize, usize)>,
    message: String,
    code_context: Option<Vec<(usize, String, bool)>>, // (line_no, content, highlight)
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            position: None,
            message: message.into(),
            code_context: None,
            fix: None,
        }
    }

    /// 1-based line and column; a zero line means no position
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        if line > 0 {
            self.position = Some((line, column));
        }
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    /// Show `before`/`after` lines of `source` around the error line
    pub fn with_source_context(mut self, source: &str, before: usize, after: usize) -> Self {
        let Some((line, _)) = self.position else {
            return self;
        };
        self.code_context = code_context(source, line, before, after);
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();

        let location = match self.position {
            Some((line, column)) => format!("{}:{}:{}", self.file.display(), line, column),
            None => self.file.display().to_string(),
        };
        out.push_str(&format!(
            "{} {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(location).bold().render(supports_color)
        ));
        out.push_str(&format!("  {}\n", self.message));

        if let Some(lines) = &self.code_context {
            out.push('\n');
            for (no, text, highlight) in lines {
                let prefix = if *highlight {
                    Icon::Pointer.render(supports_unicode)
                } else {
                    " "
                };
                let rendered_line = if *highlight {
                    ColoredText::error(text.as_str()).render(supports_color)
                } else {
                    text.clone()
                };
                out.push_str(&format!("{prefix} {:>4} | {}\n", no, rendered_line));
            }
        }

        if let Some(fix) = &self.fix {
            out.push('\n');
            out.push_str(&format!("  FIX: {}\n", fix));
        }

        out
    }
}

fn code_context(
    source: &str,
    line: usize,
    before: usize,
    after: usize,
) -> Option<Vec<(usize, String, bool)>> {
    let lines: Vec<&str> = source.lines().collect();
    if line == 0 || line > lines.len() {
        return None;
    }

    let start = line.saturating_sub(before).saturating_sub(1);
    let end = (line + after).min(lines.len());

    let out = lines[start..end]
        .iter()
        .enumerate()
        .map(|(idx, text)| {
            let line_no = start + idx + 1;
            (line_no, (*text).to_string(), line_no == line)
        })
        .collect();
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "first\nsecond\nthird\nfourth\n";

    #[test]
    fn renders_pointer_for_highlighted_line() {
        let rendered = ErrorBlock::new("form_templates/a.form", "bad")
            .with_position(2, 1)
            .with_source_context(SOURCE, 1, 1)
            .render(false, true);

        assert!(rendered.contains("form_templates/a.form:2:1"));
        assert!(rendered.contains(&format!(
            "{}    2 | second",
            Icon::Pointer.render(true)
        )));
        assert!(rendered.contains("     1 | first"));
        assert!(!rendered.contains("fourth"));
    }

    #[test]
    fn renders_ascii_pointer_when_unicode_unsupported() {
        let rendered = ErrorBlock::new("a.form", "bad")
            .with_position(2, 1)
            .with_source_context(SOURCE, 1, 1)
            .render(false, false);

        assert!(rendered.contains("^    2 | second"));
        assert!(rendered.starts_with("[FAIL] a.form:2:1"));
    }

    #[test]
    fn zero_line_has_no_position_or_context() {
        let rendered = ErrorBlock::new("a.form", "template name must not be empty")
            .with_position(0, 0)
            .with_source_context(SOURCE, 1, 1)
            .with_fix("rename the file")
            .render(false, false);

        assert!(rendered.starts_with("[FAIL] a.form\n"));
        assert!(!rendered.contains(" | "));
        assert!(rendered.contains("FIX: rename the file"));
    }
}
