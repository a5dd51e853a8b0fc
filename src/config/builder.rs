// src/config/builder.rs

use super::{
    parsing::{normalize_excludes, normalize_extensions},
    path_resolve::{default_label, resolve_path},
    validation::{validate_base_directory, validate_label},
    Config, OutputDestination, Preset,
};
use crate::cli::Cli;
use crate::core_types::TraversalRequest;
use crate::errors::Result;
use std::path::PathBuf;

/// A builder for creating a `Config` programmatically or from the command line.
///
/// Unset options take their defaults in [`ConfigBuilder::build`]: the current
/// directory as base, the base itself as the only root, the base's name as
/// label, gitignore enabled.
///
/// # Examples
///
/// ```no_run
/// use content_collector::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .base_directory("/path/to/project")
///     .roots(vec!["src".to_string()])
///     .extensions(vec!["rs".to_string()])
///     .build()?;
/// assert_eq!(config.request.project_label, "project");
/// # Ok::<(), content_collector::errors::Error>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    roots: Vec<String>,
    base_directory: Option<String>,
    label: Option<String>,
    extensions: Vec<String>,
    excludes: Vec<String>,
    use_gitignore: Option<bool>,
    sort_entries: Option<bool>,
    output_file: Option<String>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a builder from parsed command-line arguments.
    ///
    /// The `--preset` flag is not resolved here since it needs a preset store;
    /// see [`ConfigBuilder::apply_preset`].
    pub fn from_cli(cli: Cli) -> Self {
        let mut builder = Self {
            roots: cli.paths,
            base_directory: cli.base_directory,
            label: cli.label,
            extensions: cli.extensions.unwrap_or_default(),
            excludes: cli.excludes.unwrap_or_default(),
            use_gitignore: None,
            sort_entries: Some(cli.sort),
            output_file: cli.output_file,
        };
        if cli.no_gitignore {
            builder.use_gitignore = Some(false);
        }
        builder
    }

    /// Layers a preset under the current settings.
    ///
    /// The preset's extensions and excludes are added to the ones already
    /// set. Its gitignore flag applies only if none was set explicitly.
    pub fn apply_preset(mut self, preset: &Preset) -> Self {
        let mut extensions = preset.extension_list();
        extensions.append(&mut self.extensions);
        self.extensions = extensions;

        let mut excludes = preset.exclude_list();
        excludes.append(&mut self.excludes);
        self.excludes = excludes;

        if self.use_gitignore.is_none() {
            self.use_gitignore = Some(preset.use_gitignore);
        }
        self
    }

    pub fn roots(mut self, roots: Vec<String>) -> Self {
        self.roots = roots;
        self
    }

    pub fn base_directory(mut self, base: impl Into<String>) -> Self {
        self.base_directory = Some(base.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn excludes(mut self, excludes: Vec<String>) -> Self {
        self.excludes = excludes;
        self
    }

    pub fn use_gitignore(mut self, use_gitignore: bool) -> Self {
        self.use_gitignore = Some(use_gitignore);
        self
    }

    pub fn sort_entries(mut self, sort: bool) -> Self {
        self.sort_entries = Some(sort);
        self
    }

    pub fn output_file(mut self, path: impl Into<String>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Resolves paths, validates and produces the final `Config`.
    pub fn build(self) -> Result<Config> {
        let base_directory = resolve_path(self.base_directory.as_deref().unwrap_or("."))?;
        validate_base_directory(&base_directory)?;

        let project_label = match self.label {
            Some(label) => label.trim().to_string(),
            None => default_label(&base_directory),
        };
        validate_label(&project_label)?;

        // Relative roots are taken relative to the working directory, like
        // any other command-line path.
        let roots = if self.roots.is_empty() {
            vec![base_directory.clone()]
        } else {
            self.roots
                .iter()
                .map(|root| resolve_path(root))
                .collect::<Result<Vec<PathBuf>>>()?
        };

        let request = TraversalRequest::new(base_directory, project_label)
            .with_roots(roots)
            .with_extensions(normalize_extensions(&self.extensions))
            .with_user_excludes(normalize_excludes(&self.excludes))
            .with_gitignore(self.use_gitignore.unwrap_or(true))
            .with_sorted_entries(self.sort_entries.unwrap_or(false));

        let output_destination = match self.output_file {
            Some(path) => OutputDestination::File(PathBuf::from(path)),
            None => OutputDestination::Stdout,
        };

        log::debug!("Built request: {:?}", request);
        Ok(Config {
            request,
            output_destination,
        })
    }
}
