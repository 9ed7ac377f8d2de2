//! File-system path classification and existence.

use std::fmt;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::patterns;

/// Longest path accepted after the `X:\` drive prefix.
const WIN_MAX_PATH: usize = 32_767;

/// Which path grammar a string was recognised under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    Windows,
    Unix,
    Unknown,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Windows => "windows",
            Self::Unix => "unix",
            Self::Unknown => "unknown",
        })
    }
}

/// Classifies `s` as an absolute Windows or Unix path.
///
/// Windows paths (`C:\dir\file`) are checked first and are invalid when the
/// part after the drive prefix exceeds 32767 bytes. Anything that matches
/// neither grammar is `(false, PathKind::Unknown)`.
///
/// ```
/// use verity_validator::is::{self, PathKind};
///
/// assert_eq!(is::file_path(r"c:\path\file"), (true, PathKind::Windows));
/// assert_eq!(is::file_path("/path/file/"), (true, PathKind::Unix));
/// assert_eq!(is::file_path("c:/path/file/"), (false, PathKind::Unknown));
/// ```
pub fn file_path(s: &str) -> (bool, PathKind) {
    if patterns::WIN_PATH.is_match(s) {
        let within_limit = s.get(3..).is_some_and(|rest| rest.len() <= WIN_MAX_PATH);
        return (within_limit, PathKind::Windows);
    }
    if patterns::UNIX_PATH.is_match(s) {
        return (true, PathKind::Unix);
    }
    (false, PathKind::Unknown)
}

/// Whether something exists at `path`.
///
/// `NotFound` maps to `Ok(false)`; any other failure (permissions, broken
/// mounts) is returned as is.
pub fn exists(path: impl AsRef<Path>) -> io::Result<bool> {
    let path = path.as_ref();
    match path.try_exists() {
        Ok(found) => Ok(found),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "stat failed");
            Err(e)
        }
    }
}
