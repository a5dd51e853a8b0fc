use crate::core_types::{TraversalRequest, VisitedSet};
use crate::filtering::{
    normalize_separators, passes_extension_filter, relativize, ExclusionRules,
};
use crate::fs::FileSystem;
use crate::output::OutputBuffer;
use log::{debug, trace, warn};
use std::path::Path;

/// State threaded through one depth-first walk.
pub(super) struct Walk<'a, F: FileSystem + ?Sized> {
    pub(super) fs: &'a F,
    pub(super) request: &'a TraversalRequest,
    pub(super) rules: &'a ExclusionRules,
    pub(super) visited: VisitedSet,
    pub(super) output: OutputBuffer,
}

impl<F: FileSystem + ?Sized> Walk<'_, F> {
    /// Visits one node and, for directories, everything below it.
    pub(super) fn visit(&mut self, path: &Path) {
        if !self.visited.mark(path) {
            trace!("Already visited: {}", path.display());
            return;
        }

        if self.fs.is_symlink(path) {
            debug!("Skipping symbolic link: {}", path.display());
            return;
        }

        let relative = match relativize(&self.request.base_directory, path) {
            Ok(relative) => relative,
            Err(e) => {
                debug!("Skipping node: {}", e);
                return;
            }
        };

        if self.rules.should_skip(&relative) {
            debug!("Excluded: '{}'", relative);
            return;
        }

        if self.fs.is_dir(path) {
            self.visit_children(path);
        } else if passes_extension_filter(path, &self.request.extension_filter) {
            let display_path =
                normalize_separators(&format!("{}/{}", self.request.project_label, relative));
            let content = self.fs.read(path);
            self.output.emit(&display_path, content);
        } else {
            trace!("Skipping file due to extension filter: '{}'", relative);
        }
    }

    fn visit_children(&mut self, dir: &Path) {
        let mut children = match self.fs.read_dir(dir) {
            Ok(children) => children,
            Err(e) => {
                warn!("Could not list directory {}: {}", dir.display(), e);
                return;
            }
        };

        if self.request.sort_entries {
            children.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }

        for child in &children {
            self.visit(child);
        }
    }
}
