//! Common sub-path reduction for Windows-style paths: drive letters
//! (`c:\...`), UNC roots (`\\host\share\...`), case-insensitive segments and
//! `/` accepted as an alternate separator
//!
//! All results come back lowercased with `\` as the separator.

#[cfg(not(feature = "std"))]
use ::alloc::{borrow::ToOwned, string::String, vec::Vec};

use crate::error::{CommonPathError, CommonPathResult};

const SEPARATOR: &str = "\\";
const ALT_SEPARATOR: &str = "/";
const CURRENT_DIR: &str = ".";
const UNC_PREFIX: &str = r"\\";

/// A path string decomposed for comparison: its drive (`c:` or
/// `\\host\share`, lowercased, possibly empty), whether it is rooted within
/// that drive, and its filtered segment sequence
#[derive(Debug, Clone, PartialEq, Eq)]
struct PathComponents {
    drive: String,
    rooted: bool,
    parts: Vec<String>,
}

/// Returns the longest common sub-path of `paths` under Windows conventions.
///
/// All paths must share one drive (or UNC host/share) and agree on being
/// rooted. Comparison is case-insensitive; the result is lowercased.
pub fn common_sub_path<S>(paths: &[S]) -> CommonPathResult<String>
where
    S: AsRef<str>,
{
    let first = match paths.first() {
        Some(path) => path.as_ref(),
        None => {
            log::error!("Empty path sequence");
            return Err(CommonPathError::EmptyInput);
        }
    };

    let components: Vec<PathComponents> = paths
        .iter()
        .map(|path| normalize(path.as_ref()))
        .collect();
    log::trace!("Normalized path components: {:?}", components);

    let drive = &components[0].drive;
    let rooted = components[0].rooted;

    // a UNC prefix that never resolved to a host/share pair
    if drive.is_empty() && first.starts_with(UNC_PREFIX) {
        log::error!("UNC path {:?} lacks a host/share pair", first);
        return Err(CommonPathError::InvalidUncPath);
    }

    for component in &components[1..] {
        if &component.drive != drive {
            log::error!(
                "Drive {:?} doesn't match the expected {:?}",
                component.drive,
                drive
            );
            return Err(CommonPathError::DriveMismatch);
        }
        if component.rooted != rooted {
            return Err(if drive.is_empty() {
                CommonPathError::MixedRootedNotRooted
            } else {
                CommonPathError::MixedAbsoluteRelative
            });
        }
    }

    let mut common: &[String] = &components[0].parts;
    for component in &components[1..] {
        let shared = common
            .iter()
            .zip(&component.parts)
            .take_while(|(ours, theirs)| ours == theirs)
            .count();
        common = &common[..shared];
    }

    let result = if common.is_empty() && !rooted {
        let mut result = drive.clone();
        result.push_str(SEPARATOR);
        result
    } else if common.is_empty() && rooted && drive.starts_with(UNC_PREFIX) {
        // the host/share pair already anchors the path, a trailing separator
        // would denote the share's root directory instead
        drive.clone()
    } else {
        let mut result = String::with_capacity(first.len());
        result.push_str(drive);
        if rooted {
            result.push_str(SEPARATOR);
        }
        result.push_str(&common.join(SEPARATOR));
        result.truncate(result.trim_end_matches(SEPARATOR).len());
        result
    };

    log::debug!("Common sub-path of {} paths is {:?}", paths.len(), result);
    Ok(result)
}

fn normalize(path: &str) -> PathComponents {
    let lowercased = path
        .replace(ALT_SEPARATOR, SEPARATOR)
        .trim_end_matches(SEPARATOR)
        .to_lowercase();

    let (drive, rest) = split_drive(&lowercased);
    let (rooted, rest) = match rest.strip_prefix(SEPARATOR) {
        Some(stripped) => (true, stripped),
        None => (false, rest),
    };

    PathComponents {
        drive: drive.to_owned(),
        rooted,
        parts: rest
            .split(SEPARATOR)
            .filter(|part| !part.is_empty() && *part != CURRENT_DIR)
            .map(ToOwned::to_owned)
            .collect(),
    }
}

/// Splits a path into its drive (`c:` or `\\host\share`) and the remainder.
///
/// A UNC prefix followed by fewer than two components yields an empty drive
/// and remainder; the caller reports this as an invalid UNC path.
fn split_drive(path: &str) -> (&str, &str) {
    if path.as_bytes().get(1) == Some(&b':') {
        return path.split_at(2);
    }

    if path.starts_with(UNC_PREFIX) {
        let host_end = match path[UNC_PREFIX.len()..].find(SEPARATOR) {
            Some(index) => index + UNC_PREFIX.len(),
            None => return ("", ""),
        };
        let share_end = match path[host_end + 1..].find(SEPARATOR) {
            Some(index) => index + host_end + 1,
            None => return ("", ""),
        };
        return path.split_at(share_end);
    }

    ("", path)
}

#[test]
fn common_path_on_same_drive() {
    assert_eq!(
        common_sub_path(&[r"C:\x\y\z", r"C:\x\y\m"]).unwrap(),
        r"c:\x\y"
    );
}

#[test]
fn segments_compare_case_insensitively() {
    assert_eq!(
        common_sub_path(&[r"C:\A\B\C", r"c:\a\b\d"]).unwrap(),
        r"c:\a\b"
    );
}

#[test]
fn unc_paths_share_their_host_and_share() {
    assert_eq!(
        common_sub_path(&[r"\\server\share\folder1\sub", r"\\server\share\folder2"]).unwrap(),
        r"\\server\share"
    );
}

#[test]
fn alternate_separators_are_normalized() {
    assert_eq!(
        common_sub_path(&["C:/x/y/z", r"C:\x\y\m"]).unwrap(),
        r"c:\x\y"
    );
}

#[test]
fn bare_drive_gets_a_root_separator() {
    assert_eq!(common_sub_path(&["C:"]).unwrap(), "c:\\");
}

#[test]
fn reject_differing_drives() {
    assert_eq!(
        common_sub_path(&[r"C:\x", r"D:\y"]).unwrap_err(),
        CommonPathError::DriveMismatch
    );
}

#[test]
fn reject_unc_path_without_a_share() {
    assert_eq!(
        common_sub_path(&[r"\\host"]).unwrap_err(),
        CommonPathError::InvalidUncPath
    );
}

#[test]
fn reject_drive_absolute_vs_drive_relative() {
    assert_eq!(
        common_sub_path(&[r"C:\foo", r"C:bar"]).unwrap_err(),
        CommonPathError::MixedAbsoluteRelative
    );
}

#[test]
fn reject_rooted_vs_not_rooted() {
    assert_eq!(
        common_sub_path(&[r"\foo\bar", r"foo\bar"]).unwrap_err(),
        CommonPathError::MixedRootedNotRooted
    );
}

// Divergent drive-less relative paths reduce to a bare separator. The POSIX
// reducer returns an empty string for the analogous input; this asymmetry is
// kept for compatibility with existing callers.
#[test]
fn divergent_relative_paths_reduce_to_a_bare_separator() {
    assert_eq!(common_sub_path(&[r"foo\a", r"bar\b"]).unwrap(), "\\");
}
