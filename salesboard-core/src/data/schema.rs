//! Fixed, explicitly validated source schema.
//!
//! The source file must carry all seven required columns; order is irrelevant
//! and header names are trimmed before matching. Resolution fails fast with
//! the first missing column so a misconfigured source never reaches the
//! aggregation stage. Unknown extra columns (e.g. a derived `Month` column
//! from a previous export) are ignored.

use csv::StringRecord;

/// Required source columns, in canonical export order.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Date",
    "Country",
    "Product",
    "Units_Sold",
    "Unit_Price",
    "Total_Sale",
    "Sales_After_Discount",
];

/// Resolved positions of the required columns within a header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub date: usize,
    pub country: usize,
    pub product: usize,
    pub units_sold: usize,
    pub unit_price: usize,
    pub total_sale: usize,
    pub sales_after_discount: usize,
}

impl ColumnMap {
    /// Resolve required column positions from a header row.
    pub fn resolve(headers: &StringRecord) -> Result<Self, SchemaError> {
        let find = |name: &str| -> Result<usize, SchemaError> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| SchemaError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            date: find("Date")?,
            country: find("Country")?,
            product: find("Product")?,
            units_sold: find("Units_Sold")?,
            unit_price: find("Unit_Price")?,
            total_sale: find("Total_Sale")?,
            sales_after_discount: find("Sales_After_Discount")?,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("missing required column: {0}")]
    MissingColumn(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_reordered_columns() {
        let headers = StringRecord::from(vec![
            "Product",
            "Sales_After_Discount",
            "Date",
            "Units_Sold",
            "Country",
            "Total_Sale",
            "Unit_Price",
        ]);
        let map = ColumnMap::resolve(&headers).unwrap();
        assert_eq!(map.product, 0);
        assert_eq!(map.sales_after_discount, 1);
        assert_eq!(map.date, 2);
        assert_eq!(map.unit_price, 6);
    }

    #[test]
    fn trims_header_whitespace() {
        let headers = StringRecord::from(vec![
            " Date ",
            "Country",
            "Product",
            "Units_Sold ",
            " Unit_Price",
            "Total_Sale",
            "Sales_After_Discount",
        ]);
        assert!(ColumnMap::resolve(&headers).is_ok());
    }

    #[test]
    fn ignores_extra_columns() {
        let mut names: Vec<&str> = REQUIRED_COLUMNS.to_vec();
        names.push("Month");
        names.push("Region");
        assert!(ColumnMap::resolve(&StringRecord::from(names)).is_ok());
    }

    #[test]
    fn reports_first_missing_column() {
        let headers = StringRecord::from(vec!["Date", "Country", "Product"]);
        let err = ColumnMap::resolve(&headers).unwrap_err();
        assert!(err.to_string().contains("Units_Sold"));
    }
}
