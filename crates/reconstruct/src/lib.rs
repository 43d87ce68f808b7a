#![doc = include_str!("../README.md")]

pub mod ansi;
pub mod assemble;
pub mod config;
pub mod error;
pub mod flatten;
pub mod group;
pub mod otlp;
pub mod reconstructor;
pub mod severity;
pub mod timestamp;

mod environment;
mod http;

pub use assemble::SCOPE_NAME;
pub use config::ReconstructConfig;
pub use error::ReconstructError;
pub use reconstructor::OtelReconstructor;
