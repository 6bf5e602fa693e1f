//! Core launch logic for the Timeline Editor launcher.
//!
//! A run is one linear procedure with two decision points:
//!
//! ```text
//! START -> probe interpreter -> AVAILABLE -> launch module -> EXIT_OK
//!                            -> NOT_AVAILABLE              -> EXIT_FAIL_NO_RUNTIME
//!                                          launch module  -> EXIT_FAIL_LAUNCH
//! ```
//!
//! All OS access goes through the [`Host`] trait. [`SystemHost`] is the real
//! implementation; tests substitute a recording fake.

mod attempt;
pub mod errors;
mod host;
mod launcher;
mod target;

pub use attempt::{ChildExit, LaunchAttempt};
pub use errors::LaunchError;
pub use host::{Host, SystemHost};
pub use launcher::Launcher;
pub use target::{
    DEFAULT_MANIFEST, DEFAULT_MODULE, DEFAULT_RUNTIME_NAME, LaunchTarget, default_interpreters,
};
