//! Common sub-path reduction for POSIX-style paths (single `/` root, `/` as
//! the only separator, case-sensitive segments)

#[cfg(not(feature = "std"))]
use ::alloc::{string::String, vec::Vec};

use crate::error::{CommonPathError, CommonPathResult};

const SEPARATOR: &str = "/";
const CURRENT_DIR: &str = ".";

/// Returns the longest common sub-path of `paths` under POSIX conventions.
///
/// All paths must agree on being absolute or relative. If no segments are
/// shared, the result is `/` for absolute inputs and the empty string for
/// relative ones.
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

    let is_absolute = first.starts_with(SEPARATOR);
    for path in paths {
        if path.as_ref().starts_with(SEPARATOR) != is_absolute {
            log::error!("Path {:?} disagrees with the rest on absoluteness", path.as_ref());
            return Err(CommonPathError::MixedAbsoluteRelative);
        }
    }

    let split_paths: Vec<Vec<&str>> = paths
        .iter()
        .map(|path| split_segments(path.as_ref()))
        .collect();

    // The common prefix of the whole set equals the common prefix of its two
    // lexicographic extremes: every other sequence sorts between them, so it
    // can't diverge from both before they diverge from each other. Slice
    // ordering already compares segment-by-segment with a strict prefix
    // sorting before its extension.
    // `split_paths` is non-empty, we checked above
    let lo = split_paths.iter().min().unwrap();
    let hi = split_paths.iter().max().unwrap();

    let mut common: &[&str] = lo;
    for (index, segment) in lo.iter().enumerate() {
        if hi.get(index) != Some(segment) {
            common = &lo[..index];
            break;
        }
    }

    let mut result = String::with_capacity(first.len());
    if is_absolute {
        result.push_str(SEPARATOR);
    }
    result.push_str(&common.join(SEPARATOR));

    log::debug!("Common sub-path of {} paths is {:?}", paths.len(), result);
    Ok(result)
}

// Repeated and trailing separators produce empty segments, which (like `.`)
// don't affect ancestry
fn split_segments(path: &str) -> Vec<&str> {
    path.split(SEPARATOR)
        .filter(|segment| !segment.is_empty() && *segment != CURRENT_DIR)
        .collect()
}

#[test]
fn nested_common_ancestor() {
    assert_eq!(
        common_sub_path(&["/a/b/c/d", "/a/b/c/e", "/a/b/c/f/g"]).unwrap(),
        "/a/b/c"
    );
}

#[test]
fn absolute_paths_with_nothing_in_common_share_the_root() {
    assert_eq!(common_sub_path(&["/foo", "/bar"]).unwrap(), "/");
}

#[test]
fn relative_paths_with_nothing_in_common() {
    assert_eq!(common_sub_path(&["foo", "bar", "baz"]).unwrap(), "");
}

#[test]
fn single_path_is_returned_normalized() {
    assert_eq!(common_sub_path(&["/a//b/./c/"]).unwrap(), "/a/b/c");
}

#[test]
fn reject_empty_sequence() {
    assert_eq!(
        common_sub_path::<&str>(&[]).unwrap_err(),
        CommonPathError::EmptyInput
    );
}

#[test]
fn reject_mixed_absolute_and_relative() {
    assert_eq!(
        common_sub_path(&["a/b", "/a/b"]).unwrap_err(),
        CommonPathError::MixedAbsoluteRelative
    );
}

#[test]
fn shorter_path_bounds_the_prefix() {
    assert_eq!(common_sub_path(&["a", "a/b", "a/b/c"]).unwrap(), "a");
}
