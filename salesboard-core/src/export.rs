//! Exporter — filtered view to delimited text.
//!
//! The output re-loads through the cleaning pipeline: same column names,
//! ISO dates, plain decimal numbers with no currency decoration. A derived
//! `Month` column is appended (and ignored by the loader on re-import).

use std::path::Path;

use crate::filter::FilteredView;

/// Default download name for the filtered report.
pub const EXPORT_FILE_NAME: &str = "filtered_sales_report.csv";

/// MIME type for the delimited export.
pub const EXPORT_MIME: &str = "text/csv";

/// Export column order: the source schema plus the derived month label.
const EXPORT_COLUMNS: [&str; 8] = [
    "Date",
    "Country",
    "Product",
    "Units_Sold",
    "Unit_Price",
    "Total_Sale",
    "Sales_After_Discount",
    "Month",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("export is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize a filtered view as CSV text. An empty view still succeeds,
/// producing a header-only document.
pub fn to_csv(view: &FilteredView) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record(EXPORT_COLUMNS)?;

    for record in view.iter() {
        writer.write_record([
            record.date.format("%Y-%m-%d").to_string(),
            record.country.clone(),
            record.product.clone(),
            record.units_sold.to_string(),
            format!("{:.2}", record.unit_price),
            format!("{:.2}", record.total_sale),
            format!("{:.2}", record.sales_after_discount),
            record.month_label(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Io(std::io::Error::other(e.to_string())))?;
    Ok(String::from_utf8(bytes)?)
}

/// Write the filtered report to disk.
pub fn write_csv(view: &FilteredView, path: &Path) -> Result<(), ExportError> {
    let text = to_csv(view)?;
    std::fs::write(path, text)?;
    Ok(())
}
