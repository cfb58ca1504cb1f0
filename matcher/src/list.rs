//! Recursive file listing filtered by include/exclude matchers.

use std::fs;
use std::path::{Path, PathBuf};

use path_absolutize::Absolutize;
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

use crate::error::{MatcherError, Result};
use crate::matcher::Matcher;

/// Lists the entries under `dir` whose relative path matches `include` and
/// does not match `exclude`.
///
/// `dir` may be relative or absolute and is used as the base directory; the
/// returned paths are relative to it, with the base itself reported as `.`.
/// Files and directories are both visited. A missing `include` selects
/// nothing, while a missing `exclude` excludes nothing.
///
/// Any failure during the walk aborts the listing and discards partial results.
pub fn list_files(
    dir: impl AsRef<Path>,
    include: Option<&dyn Matcher>,
    exclude: Option<&dyn Matcher>,
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let base = dir
        .absolutize()
        .map_err(|source| MatcherError::PathResolution {
            path: dir.to_path_buf(),
            source,
        })?
        .into_owned();

    let metadata = fs::metadata(&base).map_err(|source| MatcherError::Stat {
        path: base.clone(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(MatcherError::NotADirectory(base));
    }

    debug!("Listing files under {}", base.display());

    let mut paths = Vec::new();
    for entry in WalkDir::new(&base).sort_by_file_name() {
        let entry = entry.map_err(|source| {
            let path = source
                .path()
                .map_or_else(|| base.clone(), Path::to_path_buf);
            warn!("Walk failed at {}: {source}", path.display());
            MatcherError::Traversal { path, source }
        })?;

        let rel_path = relative_path(&base, entry.path())?;

        // Nothing is selected without an include matcher.
        let Some(include) = include else {
            continue;
        };
        if include.matches(&rel_path) && !exclude.is_some_and(|m| m.matches(&rel_path)) {
            trace!("Including {}", rel_path.display());
            paths.push(rel_path);
        }
    }

    debug!("Matched {} paths under {}", paths.len(), base.display());
    Ok(paths)
}

/// Expresses `path` relative to `base`, reporting the base itself as `.`.
fn relative_path(base: &Path, path: &Path) -> Result<PathBuf> {
    let rel = path
        .strip_prefix(base)
        .map_err(|_| MatcherError::RelativePath {
            path: path.to_path_buf(),
            base: base.to_path_buf(),
        })?;

    if rel.as_os_str().is_empty() {
        Ok(PathBuf::from("."))
    } else {
        Ok(rel.to_path_buf())
    }
}
