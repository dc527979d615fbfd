//! Loading plan files from disk.
//!
//! [`load_plan`] reads one file and validates it. [`PlanLocator`] picks the
//! default plan when the caller did not name one: `<root>/.atp.json` if it
//! exists, otherwise the first `*.atp.json` file found below the root
//! (dependency and VCS directories excluded).

use std::path::{Path, PathBuf};

use log::debug;

use crate::{
    error::{AtpError, FailureKind, Result, ValidationFailure},
    models::Plan,
    report::{GraphMessage, ParseReport},
    schema::validate,
};

/// File name suffix of ATP plan documents.
pub const PLAN_FILE_SUFFIX: &str = ".atp.json";

/// Directories never searched for plans.
const EXCLUDED_DIRS: [&str; 2] = ["node_modules", ".git"];

/// Read and validate the plan at `path`.
///
/// `None` means no plan was selected. A read failure carries the I/O error
/// message as its only issue.
pub fn load_plan(path: Option<&Path>) -> std::result::Result<Plan, ValidationFailure> {
    let Some(path) = path else {
        return Err(ValidationFailure::new(FailureKind::NoPlanSelected, Vec::new()));
    };

    debug!("loading plan from {}", path.display());
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ValidationFailure::single(FailureKind::ReadFailed, e.to_string()))?;
    validate(&raw)
}

/// A load attempt together with the file it was made against.
#[derive(Debug, Clone)]
pub struct LoadedPlan {
    pub path: Option<PathBuf>,
    pub result: std::result::Result<Plan, ValidationFailure>,
}

impl LoadedPlan {
    /// Wrap the outcome for the presentation layer.
    pub fn into_message(self) -> GraphMessage {
        let plan_path = self.path.map(|p| p.display().to_string());
        GraphMessage::new(plan_path, ParseReport::from(self.result))
    }
}

/// Finds the default plan file under one or more search roots.
#[derive(Debug, Clone, Default)]
pub struct PlanLocator {
    roots: Vec<PathBuf>,
}

impl PlanLocator {
    /// Creates a locator with no explicit roots; [`PlanLocator::locate`]
    /// then searches the current directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a search root. Roots are searched in the order added.
    pub fn with_root<P: AsRef<Path>>(mut self, root: P) -> Self {
        self.roots.push(root.as_ref().to_path_buf());
        self
    }

    /// Adds several search roots.
    pub fn with_roots<I, P>(self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        roots.into_iter().fold(self, Self::with_root)
    }

    /// Returns the default plan path, or `None` if no root holds one.
    ///
    /// # Errors
    ///
    /// Returns `AtpError::FileSystem` if the current directory is needed and
    /// cannot be determined, and `AtpError::Discovery` if a root cannot be
    /// turned into a search pattern.
    pub fn locate(&self) -> Result<Option<PathBuf>> {
        for root in self.search_roots()? {
            let candidate = root.join(PLAN_FILE_SUFFIX);
            if candidate.is_file() {
                debug!("found root plan {}", candidate.display());
                return Ok(Some(candidate));
            }

            if let Some(found) = Self::search(&root)? {
                debug!("found plan {}", found.display());
                return Ok(Some(found));
            }
        }

        debug!("no plan found");
        Ok(None)
    }

    /// Load the given plan, or the default plan when `explicit` is `None`.
    ///
    /// # Errors
    ///
    /// Only discovery errors are returned here; read and validation failures
    /// are part of the [`LoadedPlan`].
    pub fn load(&self, explicit: Option<&Path>) -> Result<LoadedPlan> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => self.locate()?,
        };
        let result = load_plan(path.as_deref());
        Ok(LoadedPlan { path, result })
    }

    fn search_roots(&self) -> Result<Vec<PathBuf>> {
        if !self.roots.is_empty() {
            return Ok(self.roots.clone());
        }

        let cwd = std::env::current_dir().map_err(|e| AtpError::FileSystem {
            path: PathBuf::from("."),
            source: e,
        })?;
        Ok(vec![cwd])
    }

    fn search(root: &Path) -> Result<Option<PathBuf>> {
        let root_str = root
            .to_str()
            .ok_or_else(|| AtpError::discovery(root.display().to_string(), "path is not valid UTF-8"))?;
        let pattern = format!("{}/**/*{PLAN_FILE_SUFFIX}", glob::Pattern::escape(root_str));

        let paths = glob::glob(&pattern).map_err(|e| AtpError::discovery(&pattern, e))?;
        let mut matches: Vec<PathBuf> = paths
            .filter_map(|entry| entry.ok())
            .filter(|path| path.is_file() && !is_excluded(root, path))
            .collect();
        matches.sort();

        Ok(matches.into_iter().next())
    }
}

fn is_excluded(root: &Path, path: &Path) -> bool {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .any(|c| EXCLUDED_DIRS.iter().any(|dir| c.as_os_str() == *dir))
}
