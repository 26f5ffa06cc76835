use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use formpack::application::{RebuildOptions, RebuildUseCase};
use formpack::{DustCompiler, LocalFs};

use super::setup::{load_project_config, Overrides};
use crate::cli::PathArgs;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::build::{build_json, render_build_report};

/// One rebuild, then exit. Exit code 1 when any template failed or the
/// bundle could not be written.
pub fn cmd_build(config_path: Option<&Path>, paths: &PathArgs, ui: &UiContext) -> Result<ExitCode> {
    let config = load_project_config(
        config_path,
        Overrides {
            source: paths.source.clone(),
            output: paths.output.clone(),
            prune_missing: false,
        },
        ui,
    )?;

    if !ui.json {
        let mut header = CommandHeader::new(Icon::Build, "formpack build");
        header.add("Source", config.source.dir.display().to_string());
        header.add("Output", config.output.path.display().to_string());
        print!("{}", header.render(ui.color, ui.unicode));
    }

    let options = RebuildOptions::from_config(&config);
    let mut use_case = RebuildUseCase::new(LocalFs::new(), DustCompiler::new(), options);
    let report = use_case.rebuild_all()?;

    if ui.json {
        crate::ui::json::emit(build_json(&report, &config.output.path))?;
    } else {
        print!(
            "{}",
            render_build_report(&report, &config.output.path, ui.color, ui.unicode)
        );
    }

    Ok(if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
