use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use formpack::application::{RebuildOptions, RebuildUseCase};
use formpack::{DustCompiler, LocalFs};

use super::setup::{load_project_config, Overrides};
use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::check::{check_json, render_check_report};

/// Compile every template and report; never writes the bundle.
pub fn cmd_check(
    config_path: Option<&Path>,
    source: Option<PathBuf>,
    ui: &UiContext,
) -> Result<ExitCode> {
    let config = load_project_config(
        config_path,
        Overrides {
            source,
            ..Overrides::default()
        },
        ui,
    )?;

    if !ui.json {
        let mut header = CommandHeader::new(Icon::Check, "formpack check");
        header.add("Source", config.source.dir.display().to_string());
        print!("{}", header.render(ui.color, ui.unicode));
    }

    let use_case = RebuildUseCase::new(
        LocalFs::new(),
        DustCompiler::new(),
        RebuildOptions::from_config(&config),
    );
    let report = use_case.check()?;

    if ui.json {
        crate::ui::json::emit(check_json(&report))?;
    } else {
        print!("{}", render_check_report(&report, ui.color, ui.unicode));
    }

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
