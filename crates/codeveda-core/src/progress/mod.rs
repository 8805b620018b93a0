//! Local progress for the DSA tracker.
//!
//! Each problem carries two flags, `completed` and `starred`, stored together
//! as one JSON object under the `dsa_progress` store key:
//! `{ "<id>": { "completed": bool, "starred": bool }, ... }`.
//!
//! Updates merge field by field, so toggling one flag never resets the other.

pub mod stats;
pub mod tracker;

pub use stats::{pick_random, progress_stats, ProgressStats};
pub use tracker::{ProgressMap, ProgressRecord, ProgressTracker, ProgressUpdate, PROGRESS_KEY};
