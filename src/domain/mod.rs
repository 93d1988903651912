//! Domain logic: the verdict table and status translation.

mod verdict;

pub use verdict::{parse_status, verdict_for, VERDICTS};
