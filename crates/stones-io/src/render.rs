//! Rendering histograms as text.
//!
//! Output format:
//!
//! ```text
//! ~~END HISTOGRAM~~
//! {1, 1}
//! {7, 1}
//! {253000, 1}
//! ~~Total Count~~
//! 3
//! ```
//!
//! Entries are written ascending by value so output is stable across runs.

use std::io::{self, Write};

use stones_core::Count;
use stones_engine::Histogram;

/// Header preceding the initial histogram.
pub const HEADER_INITIAL: &str = "INITIAL HISTOGRAM";

/// Header preceding the final histogram.
pub const HEADER_END: &str = "END HISTOGRAM";

/// Header preceding the total.
pub const HEADER_TOTAL: &str = "Total Count";

/// Write `~~title~~` followed by one `{value, count}` line per entry.
pub fn render_section<W: Write>(out: &mut W, title: &str, histogram: &Histogram) -> io::Result<()> {
    writeln!(out, "~~{title}~~")?;
    write_entries(out, histogram)
}

/// Write one `{value, count}` line per entry, then the total under its
/// own header.
pub fn render<W: Write>(out: &mut W, histogram: &Histogram, total: Count) -> io::Result<()> {
    write_entries(out, histogram)?;
    render_total(out, total)
}

/// Write the total under its header.
pub fn render_total<W: Write>(out: &mut W, total: Count) -> io::Result<()> {
    writeln!(out, "~~{HEADER_TOTAL}~~")?;
    writeln!(out, "{total}")
}

fn write_entries<W: Write>(out: &mut W, histogram: &Histogram) -> io::Result<()> {
    for (value, count) in histogram.sorted() {
        writeln!(out, "{{{value}, {count}}}")?;
    }
    Ok(())
}
