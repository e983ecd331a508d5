//! Music folder scanning.
//!
//! `scan`/`build` walk a folder for audio files; `ScanWorker` runs the same walk
//! off the event loop and drops results that a newer request has superseded.

mod model;
mod scan;
mod worker;

pub use model::Track;
pub use scan::{BuildReport, build, scan};
pub use worker::{ScanDone, ScanWorker};
