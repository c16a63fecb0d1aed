//! Incremental tour construction over planar points.
//! Points arrive one at a time and are spliced into a closed [`TourRing`]
//! using one of the [`InsertionHeuristic`] strategies.

mod error;
mod heuristic;
mod io;
pub mod logging;
mod point;
pub mod ring;
mod tour;

pub(crate) use io::options;

pub use error::{Error, Result};
pub use heuristic::InsertionHeuristic;
pub use io::input::{parse_points, read_points};
pub use io::options::{LogFormat, LogLevel, RunOptions};
pub use point::Point;
pub use ring::TourRing;
pub use tour::TourMetrics;
