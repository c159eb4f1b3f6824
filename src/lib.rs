//! Layout analysis for SVG documents.
//!
//! [`svg::analyze`] is the engine: markup text in, [`svg::AnalysisResult`]
//! out. The remaining modules wrap it for command-line use: document intake
//! rules, report records, configuration, and a concurrent batch runner.

pub mod batch;
pub mod config;
pub mod intake;
pub mod report;
pub mod svg;

pub use svg::{AnalysisResult, ParseError, analyze};
