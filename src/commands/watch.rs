use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use formpack::application::{RebuildOptions, WatchEvent, WatchOptions, WatchUseCase};
use formpack::{DustCompiler, LocalFs};

use super::setup::{load_project_config, Overrides};
use crate::cli::PathArgs;
use crate::ui::context::UiContext;
use crate::ui::views::watch::{render_watch_event, render_watch_header};

pub fn cmd_watch(
    config_path: Option<&Path>,
    paths: &PathArgs,
    prune: bool,
    ui: &UiContext,
) -> Result<()> {
    let config = load_project_config(
        config_path,
        Overrides {
            source: paths.source.clone(),
            output: paths.output.clone(),
            prune_missing: prune,
        },
        ui,
    )?;

    let options = WatchOptions::new(RebuildOptions::from_config(&config));

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to install Ctrl+C handler")?;

    if !ui.json {
        print!(
            "{}",
            render_watch_header(
                &config.source.dir.display().to_string(),
                &config.output.path.display().to_string(),
                ui.color,
                ui.unicode
            )
        );
    }

    let json = ui.json;
    let (color, unicode) = (ui.color, ui.unicode);
    let mut use_case = WatchUseCase::new(LocalFs::new(), DustCompiler::new(), options);
    use_case.start(running, |event| {
        if json {
            let _ = crate::ui::json::emit_line(&event.to_json());
            return;
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        let rendered = render_watch_event(&timestamp, &event, color, unicode);
        match event {
            WatchEvent::Error { .. } | WatchEvent::TemplateFailed { .. } => eprint!("{rendered}"),
            _ => print!("{rendered}"),
        }
    })?;

    Ok(())
}
