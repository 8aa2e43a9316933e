use crate::config::Config;
use crate::context::gather;
use crate::context::types::FileContents;
use crate::error::BundleError;
use crate::output;
use globset::{Glob, GlobSet, GlobSetBuilder};
use path_slash::PathExt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Builds one bundle: resolve sources, transform them, render, write.
///
/// Sources are ordered folders first, then explicit files, then the algo
/// directory. Nothing touches the output path until the whole bundle is in
/// memory.
#[derive(Debug)]
pub struct Pipeline {
    config: Config,
    excludes: GlobSet,
    sources: Vec<PathBuf>,
    file_data: Vec<FileContents>,
    bundle: Option<String>,
}

impl Pipeline {
    pub fn new(config: Config) -> Result<Self, BundleError> {
        let excludes = build_excludes(&config.exclude)?;
        Ok(Pipeline {
            config,
            excludes,
            sources: Vec::new(),
            file_data: Vec::new(),
            bundle: None,
        })
    }

    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    pub fn file_data(&self) -> &[FileContents] {
        &self.file_data
    }

    pub fn bundle(&self) -> Option<&str> {
        self.bundle.as_deref()
    }

    /// Resolve the ordered list of files to bundle.
    pub fn collect_sources(&mut self) -> Result<(), BundleError> {
        let base_dir = &self.config.base_dir;
        let mut sources = Vec::new();

        for folder in &self.config.folders {
            sources.extend(self.list_folder(&base_dir.join(folder))?);
        }
        for entry in &self.config.files {
            sources.extend(gather::expand_file_entry(base_dir, entry)?);
        }
        sources.extend(self.list_folder(&self.config.algo_dir())?);

        debug!(count = sources.len(), "resolved sources");
        self.sources = sources;
        Ok(())
    }

    /// Read and transform every resolved source, in order.
    pub fn transform_sources(&mut self) -> Result<(), BundleError> {
        self.file_data = self
            .sources
            .iter()
            .map(|path| gather::read_file(path))
            .collect::<Result<_, _>>()?;
        Ok(())
    }

    /// Wrap the transformed sources with the configured prepend and append.
    pub fn build_bundle(&mut self) -> &str {
        let out = &self.config.output;
        let bundle = output::render(&out.prepend, &self.file_data, &out.append);
        let chars = output::check_submission_size(&bundle);
        debug!(chars, files = self.file_data.len(), "rendered bundle");
        self.bundle.insert(bundle).as_str()
    }

    /// Write the rendered bundle to the configured output path.
    pub fn write(&self) -> Result<&Path, BundleError> {
        let path = self.config.output.path.as_path();
        output::write_bundle(path, self.bundle.as_deref().unwrap_or_default())?;
        info!(
            path = %path.display(),
            files = self.file_data.len(),
            "wrote bundle"
        );
        Ok(path)
    }

    fn list_folder(
        &self,
        dir: &Path,
    ) -> Result<Vec<PathBuf>, BundleError> {
        let mut files = gather::list_directory(dir, self.config.sort)?;
        if !self.excludes.is_empty() {
            files.retain(|path| !self.is_excluded(path));
        }
        Ok(files)
    }

    fn is_excluded(
        &self,
        path: &Path,
    ) -> bool {
        let rel = path.strip_prefix(&self.config.base_dir).unwrap_or(path);
        let excluded = self.excludes.is_match(&*rel.to_slash_lossy());
        if excluded {
            debug!(path = %path.display(), "excluded");
        }
        excluded
    }
}

/// Runs every step and returns the bundle text without writing it.
pub fn render(config: Config) -> Result<String, BundleError> {
    let mut pipeline = Pipeline::new(config)?;
    pipeline.collect_sources()?;
    pipeline.transform_sources()?;
    Ok(pipeline.build_bundle().to_string())
}

/// Runs every step and writes the bundle to the configured output path.
pub fn combine(config: Config) -> Result<PathBuf, BundleError> {
    let mut pipeline = Pipeline::new(config)?;
    pipeline.collect_sources()?;
    pipeline.transform_sources()?;
    pipeline.build_bundle();
    Ok(pipeline.write()?.to_path_buf())
}

fn build_excludes(patterns: &[String]) -> Result<GlobSet, BundleError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        // Normalize Windows path separators for glob patterns
        let normalized = pattern.replace('\\', "/");
        let glob = Glob::new(&normalized).map_err(|e| BundleError::Pattern {
            pattern: pattern.clone(),
            reason: e.kind().to_string(),
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| BundleError::Pattern {
        pattern: patterns.join(", "),
        reason: e.to_string(),
    })
}
