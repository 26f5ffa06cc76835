//! Rebuild Use Case implementation

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use crate::domain::entities::{TemplateFile, TemplateRegistry};
use crate::domain::ports::{FileSystem, FsError, TemplateCompiler};
use crate::domain::services::Bundler;
use crate::error::{FormpackError, FormpackResult};

use super::options::RebuildOptions;
use super::report::{CheckReport, RebuildReport, TemplateFailure};
use super::writer::BundleWriter;

/// Rebuild Use Case
///
/// Owns the template registry for the lifetime of the process. Each call to
/// [`rebuild_all`](Self::rebuild_all) rescans the whole directory; there is no
/// incremental path.
pub struct RebuildUseCase<FS, C>
where
    FS: FileSystem + Clone,
    C: TemplateCompiler,
{
    fs: FS,
    compiler: C,
    options: RebuildOptions,
    registry: TemplateRegistry,
    bundler: Bundler,
    writer: BundleWriter<FS>,
}

impl<FS, C> RebuildUseCase<FS, C>
where
    FS: FileSystem + Clone,
    C: TemplateCompiler,
{
    pub fn new(fs: FS, compiler: C, options: RebuildOptions) -> Self {
        let writer = BundleWriter::new(fs.clone(), &options.output);
        let bundler = Bundler::new(options.separator);
        Self {
            fs,
            compiler,
            options,
            registry: TemplateRegistry::new(),
            bundler,
            writer,
        }
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Rescan the source directory, recompile every template, then bundle
    /// and write once.
    ///
    /// Only a missing source directory is an error. Per-template failures
    /// and write failures are logged and recorded in the report.
    pub fn rebuild_all(&mut self) -> FormpackResult<RebuildReport> {
        let entries = self.scan()?;
        let mut report = RebuildReport::default();
        let mut present = BTreeSet::new();

        for (name, path) in entries {
            present.insert(name.clone());

            let template = match self.load(&name, &path) {
                Ok(template) => template,
                Err(err) => {
                    tracing::error!(template = %name, "{err}");
                    if self.registry.contains(&name) {
                        report.retained.push(name.clone());
                    }
                    report.failures.push(TemplateFailure::new(name, path, err));
                    continue;
                }
            };

            match self.compiler.compile(template.name(), template.raw_content()) {
                Ok(compiled) => {
                    tracing::debug!(template = %name, "compiled");
                    self.registry.upsert(compiled);
                    report.compiled.push(name);
                }
                Err(err) => {
                    tracing::error!(
                        template = %name,
                        file = %template.path().display(),
                        "compile failed: {err}\n{}",
                        template.raw_content()
                    );
                    if self.registry.contains(&name) {
                        report.retained.push(name.clone());
                    }
                    report
                        .failures
                        .push(TemplateFailure::new(name, path, err.into()));
                }
            }
        }

        if self.options.prune_missing {
            report.pruned = self.registry.retain(|name| present.contains(name));
            for name in &report.pruned {
                tracing::info!(template = %name, "source removed, dropped from bundle");
            }
        }

        let bundle = self.bundler.bundle(&self.registry);
        report.templates = self.registry.len();
        match self.writer.write(&bundle) {
            Ok(bytes) => report.bytes_written = Some(bytes),
            Err(err) => {
                tracing::error!("{err}");
                report.write_error = Some(err.to_string());
            }
        }

        tracing::info!(
            compiled = report.compiled.len(),
            failed = report.failures.len(),
            templates = report.templates,
            "rebuild complete"
        );
        Ok(report)
    }

    /// Compile every template without touching the registry or the bundle.
    pub fn check(&self) -> FormpackResult<CheckReport> {
        let mut report = CheckReport::default();
        for (name, path) in self.scan()? {
            let result = self.load(&name, &path).and_then(|template| {
                self.compiler
                    .compile(template.name(), template.raw_content())
                    .map_err(FormpackError::from)
            });
            match result {
                Ok(_) => report.checked.push(name),
                Err(err) => report.failures.push(TemplateFailure::new(name, path, err)),
            }
        }
        Ok(report)
    }

    /// Fail with `DirectoryNotFound` unless the source directory exists.
    pub fn ensure_source(&self) -> FormpackResult<()> {
        if self.fs.is_dir(&self.options.source) {
            Ok(())
        } else {
            Err(FormpackError::DirectoryNotFound {
                path: self.options.source.clone(),
            })
        }
    }

    /// Template files in the source directory as `(name, path)`, in name
    /// order. When two files map to the same name, the later file in file
    /// name order wins and the other is skipped.
    fn scan(&self) -> FormpackResult<Vec<(String, PathBuf)>> {
        self.ensure_source()?;
        let source = &self.options.source;
        let files = self.fs.list_files(source).map_err(|e| match e {
            FsError::NotFound(_) => FormpackError::DirectoryNotFound {
                path: source.clone(),
            },
            other => FormpackError::Io(other.into_io()),
        })?;

        let matcher = &self.options.matcher;
        let mut templates: BTreeMap<String, PathBuf> = BTreeMap::new();
        for path in files {
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(name) = matcher.template_name(file_name) else {
                tracing::trace!(file = %path.display(), "not a template, skipped");
                continue;
            };
            if let Some(shadowed) = templates.insert(name.clone(), path) {
                tracing::warn!(
                    template = %name,
                    file = %shadowed.display(),
                    "another file has the same template name, skipped"
                );
            }
        }
        Ok(templates.into_iter().collect())
    }

    fn load(&self, name: &str, path: &Path) -> FormpackResult<TemplateFile> {
        let content = self.fs.read(path).map_err(|e| FormpackError::Read {
            path: path.to_path_buf(),
            source: e.into_io(),
        })?;
        Ok(TemplateFile::new(name, path, content))
    }
}
