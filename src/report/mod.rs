//! Presentation of a projection: paginated table, chart, CSV export

pub mod chart;
pub mod csv_export;
pub mod table;

pub use chart::{render_chart, ChartData, Palette};
pub use csv_export::{export_series, write_series, CSV_HEADER};
pub use table::{page, page_count, render_page, render_summary, Page};

/// Display settings shared by the table, chart and export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Series entries per table page
    pub page_size: usize,

    /// Columns in the text chart
    pub chart_width: usize,

    /// Rows in the text chart
    pub chart_height: usize,

    /// Decimal places for exported amounts
    pub csv_decimals: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            page_size: 12,
            chart_width: 60,
            chart_height: 12,
            csv_decimals: 2,
        }
    }
}
