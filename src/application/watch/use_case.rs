//! Watch Use Case implementation

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, RecvTimeoutError};
use std::sync::Arc;

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::application::rebuild::RebuildUseCase;
use crate::domain::ports::{FileSystem, TemplateCompiler};
use crate::domain::value_objects::TemplateMatcher;
use crate::error::{FormpackError, FormpackResult};

use super::event::{WatchEvent, WatchOptions};

/// The template path an event is about, if it should trigger a rebuild.
///
/// Only creations and modifications of files matching the template rule
/// count. Removals never trigger a rebuild.
pub fn is_relevant_event<'a>(event: &'a Event, matcher: &TemplateMatcher) -> Option<&'a Path> {
    match event.kind {
        EventKind::Create(_) | EventKind::Modify(_) => event
            .paths
            .iter()
            .map(|p| p.as_path())
            .find(|p| matcher.matches_path(p)),
        _ => None,
    }
}

/// Watch Use Case
///
/// Orchestrates continuous file watching with automatic rebuilds.
/// This is the main entry point for the `formpack watch` command.
pub struct WatchUseCase<FS, C>
where
    FS: FileSystem + Clone,
    C: TemplateCompiler,
{
    options: WatchOptions,
    rebuild: RebuildUseCase<FS, C>,
}

impl<FS, C> WatchUseCase<FS, C>
where
    FS: FileSystem + Clone,
    C: TemplateCompiler,
{
    pub fn new(fs: FS, compiler: C, options: WatchOptions) -> Self {
        let rebuild = RebuildUseCase::new(fs, compiler, options.rebuild.clone());
        Self { options, rebuild }
    }

    /// Templates as of the last rebuild
    pub fn rebuild(&self) -> &RebuildUseCase<FS, C> {
        &self.rebuild
    }

    /// Start watching (blocking)
    ///
    /// Registers the watcher, then runs one rebuild immediately and one per
    /// relevant file event until the running flag is cleared. Changes made
    /// while the initial rebuild runs are queued and trigger another rebuild.
    /// Fails up front with `DirectoryNotFound` when the source directory is
    /// missing.
    pub fn start<F>(&mut self, running: Arc<AtomicBool>, on_event: F) -> FormpackResult<()>
    where
        F: Fn(WatchEvent),
    {
        let source = self.options.rebuild.source.clone();
        self.rebuild.ensure_source()?;

        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| {
                let _ = tx.send(res);
            },
            notify::Config::default(),
        )
        .map_err(|e| FormpackError::Watch {
            path: source.clone(),
            message: e.to_string(),
        })?;

        watcher
            .watch(&source, RecursiveMode::NonRecursive)
            .map_err(|e| FormpackError::Watch {
                path: source.clone(),
                message: e.to_string(),
            })?;
        tracing::info!(source = %source.display(), "watching for template changes");

        on_event(WatchEvent::WatchStarted {
            source: source.display().to_string(),
            output: self.options.rebuild.output.display().to_string(),
        });

        self.do_rebuild(&on_event)?;

        while running.load(Ordering::SeqCst) {
            match rx.recv_timeout(self.options.poll_interval) {
                Ok(Ok(event)) => {
                    let Some(path) = is_relevant_event(&event, &self.options.rebuild.matcher)
                    else {
                        tracing::trace!(?event.kind, "ignored event");
                        continue;
                    };
                    tracing::debug!(path = %path.display(), "template changed");
                    on_event(WatchEvent::FileChanged {
                        path: path.display().to_string(),
                    });
                    self.do_rebuild(&on_event)?;
                }
                Ok(Err(err)) => {
                    tracing::warn!("watcher error: {err}");
                    on_event(WatchEvent::Error {
                        message: err.to_string(),
                    });
                }
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    tracing::warn!("watcher channel closed");
                    break;
                }
            }
        }

        on_event(WatchEvent::Shutdown);
        Ok(())
    }

    fn do_rebuild(&mut self, callback: &impl Fn(WatchEvent)) -> FormpackResult<()> {
        callback(WatchEvent::RebuildStarted);

        let report = match self.rebuild.rebuild_all() {
            Ok(report) => report,
            Err(e) => {
                callback(WatchEvent::Error {
                    message: e.to_string(),
                });
                return Err(e);
            }
        };

        for event in WatchEvent::from_report(&report) {
            callback(event);
        }
        Ok(())
    }
}
