#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod error;
pub mod posix;
pub mod windows;

pub use error::*;

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Returns the longest common sub-path of `paths` under the path conventions
/// of the host platform.
///
/// See [`posix::common_sub_path`] and [`windows::common_sub_path`]; both are
/// available on every platform, this merely picks the native one.
pub fn common_sub_path<S>(paths: &[S]) -> CommonPathResult<String>
where
    S: AsRef<str>,
{
    if cfg!(windows) {
        windows::common_sub_path(paths)
    } else {
        posix::common_sub_path(paths)
    }
}
