//! FibEng library — device front end and benchmarking client over the
//! fixed-width Fibonacci engine.

pub mod app;
pub mod config;
pub mod device;
pub mod sweep;
