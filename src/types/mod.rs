//! Shared data types for the forecasting core and API surface

mod decline;

pub use decline::*;
