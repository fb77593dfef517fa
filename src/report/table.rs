//! Paginated text table of the series and the summary block

use crate::projection::{ProjectionSummary, SeriesEntry};
use std::fmt::Write;

/// One page of series entries
#[derive(Debug, Clone, Copy)]
pub struct Page<'a> {
    /// 1-based page number after clamping
    pub number: usize,
    pub page_count: usize,
    pub entries: &'a [SeriesEntry],
}

/// Number of pages needed for `len` entries (always at least one)
pub fn page_count(len: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    len.div_ceil(size).max(1)
}

/// Slice out a page; out-of-range page numbers are clamped to the first/last page
pub fn page(series: &[SeriesEntry], page_number: usize, page_size: usize) -> Page<'_> {
    let size = page_size.max(1);
    let count = page_count(series.len(), size);
    let number = page_number.clamp(1, count);
    let start = ((number - 1) * size).min(series.len());
    let end = (start + size).min(series.len());

    Page {
        number,
        page_count: count,
        entries: &series[start..end],
    }
}

/// Render a page as aligned text columns
pub fn render_page(page: &Page<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>5} {:>16} {:>16} {:>16}",
        "Month", "Contributed", "Interest", "Total value"
    );
    let _ = writeln!(out, "{}", "-".repeat(56));

    for entry in page.entries {
        let _ = writeln!(
            out,
            "{:>5} {:>16.2} {:>16.2} {:>16.2}",
            entry.month, entry.total_contributed, entry.interest_accumulated, entry.total_value
        );
    }

    let _ = write!(out, "Page {}/{}", page.number, page.page_count);
    out
}

/// Render the summary metrics block
pub fn render_summary(summary: &ProjectionSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  Net annual rate:     {:.4}%", summary.net_annual_rate * 100.0);
    let _ = writeln!(out, "  Monthly rate:        {:.6}%", summary.monthly_rate * 100.0);
    let _ = writeln!(out, "  Months:              {}", summary.total_months);
    let _ = writeln!(out, "  Total contributed:   {:.2}", summary.total_contributed);
    let _ = writeln!(out, "  Total growth:        {:.2}", summary.total_growth);
    let _ = writeln!(out, "  Future value:        {:.2}", summary.future_value);
    let _ = write!(out, "  Future value (real): {:.2}", summary.future_value_real);
    out
}
