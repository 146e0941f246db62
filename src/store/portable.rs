//! Home-directory collapsing for file keys written to disk.

use crate::types::FileKey;
use std::path::{Component, Path, PathBuf};

/// Sentinel standing in for the user's home directory in stored keys.
pub const HOME_SENTINEL: &str = "~";

/// Converts file keys to and from their portable stored form.
#[derive(Debug, Clone)]
pub struct PortablePaths {
    home: Option<PathBuf>,
}

impl PortablePaths {
    /// Use the current user's home directory
    pub fn from_env() -> Self {
        let home = directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        Self { home }
    }

    pub fn with_home(home: Option<PathBuf>) -> Self {
        Self { home }
    }

    /// `/home/me/src/a.py` becomes `~/src/a.py`. Keys outside home are kept verbatim.
    pub fn collapse(&self, key: &Path) -> String {
        let rest = match self.home.as_deref().and_then(|home| key.strip_prefix(home).ok()) {
            Some(rest) => rest,
            None => return key.to_string_lossy().into_owned(),
        };
        let mut portable = String::from(HOME_SENTINEL);
        for component in rest.components() {
            if let Component::Normal(name) = component {
                portable.push('/');
                portable.push_str(&name.to_string_lossy());
            }
        }
        portable
    }

    /// Inverse of [`collapse`](Self::collapse).
    pub fn expand(&self, portable: &str) -> FileKey {
        let home = match &self.home {
            Some(home) => home,
            None => return PathBuf::from(portable),
        };
        if portable == HOME_SENTINEL {
            return home.clone();
        }
        match portable
            .strip_prefix("~/")
            .or_else(|| portable.strip_prefix("~\\"))
        {
            Some(rest) => rest
                .split(['/', '\\'])
                .filter(|segment| !segment.is_empty())
                .fold(home.clone(), |path, segment| path.join(segment)),
            None => PathBuf::from(portable),
        }
    }
}
