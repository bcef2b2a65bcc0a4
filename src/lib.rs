pub mod error;
pub mod geoalg;
pub mod metrics;
pub mod evaluation;
pub mod table;
pub mod statistics;
pub mod linear;
pub mod config;
pub mod experiment;
pub mod timed;

pub use error::{Error, MetricError, Result};
