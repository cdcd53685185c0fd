//! Input and output around the stones engine.
//!
//! - [`parse_values`] / [`read_values`]: whitespace-delimited stone values
//!   from text or a file.
//! - [`tally`]: values to an initial [`Histogram`].
//! - [`render`] / [`render_section`] / [`render_total`]: `{value, count}`
//!   lines and the total.
//!
//! Negative and malformed numbers are rejected here, so the engine only
//! ever sees non-negative values.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod parse;
pub mod render;

pub use error::InputError;
pub use parse::{parse_values, read_values, tally};
pub use render::{
    render, render_section, render_total, HEADER_END, HEADER_INITIAL, HEADER_TOTAL,
};

pub use stones_engine::Histogram;
