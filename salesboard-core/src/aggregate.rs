//! Aggregator — scalar KPIs and grouped net-revenue totals.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::filter::FilteredView;

/// Summary metrics for one filtered view. Recomputed on every filter change;
/// never cached beyond a single render cycle.
///
/// Grouped maps are keyed by country, product, and `"YYYY-MM"` month label;
/// months with no records simply do not appear. Each grouped map partitions
/// `net_revenue`, so its values sum back to that scalar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateSummary {
    pub gross_revenue: f64,
    pub net_revenue: f64,
    /// Kept fractional; truncation toward zero happens at display time.
    pub total_units: f64,
    pub by_country: BTreeMap<String, f64>,
    pub by_product: BTreeMap<String, f64>,
    pub by_month: BTreeMap<String, f64>,
}

/// Reduce a filtered view to its summary. An empty view yields zeros and
/// empty maps.
pub fn summarize(view: &FilteredView) -> AggregateSummary {
    let mut summary = AggregateSummary::default();

    for record in view.iter() {
        summary.gross_revenue += record.total_sale;
        summary.net_revenue += record.sales_after_discount;
        summary.total_units += record.units_sold;

        let net = record.sales_after_discount;
        *summary.by_country.entry(record.country.clone()).or_default() += net;
        *summary.by_product.entry(record.product.clone()).or_default() += net;
        *summary.by_month.entry(record.month_label()).or_default() += net;
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Dataset, FilterCriteria, SalesRecord};
    use crate::filter;
    use chrono::NaiveDate;
    use std::collections::BTreeSet;

    const TOLERANCE: f64 = 1e-9;

    fn record(
        date: (i32, u32, u32),
        country: &str,
        product: &str,
        units: f64,
        net: f64,
    ) -> SalesRecord {
        SalesRecord {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            country: country.into(),
            product: product.into(),
            units_sold: units,
            unit_price: net / units.max(1.0),
            total_sale: net * 1.1,
            sales_after_discount: net,
        }
    }

    /// The worked example from the reporting contract: three records, filter
    /// to US over the full span.
    #[test]
    fn us_filter_worked_example() {
        let ds = Dataset::new(
            vec![
                record((2024, 1, 5), "US", "Widget", 10.0, 90.0),
                record((2024, 1, 20), "US", "Gadget", 5.0, 40.0),
                record((2024, 2, 1), "UK", "Widget", 2.0, 20.0),
            ],
            0,
        );
        let criteria = FilterCriteria {
            countries: BTreeSet::from(["US".to_string()]),
            ..FilterCriteria::full_span(&ds)
        };
        let view = filter::apply(&ds, &criteria);
        assert_eq!(view.len(), 2);

        let summary = summarize(&view);
        assert!((summary.net_revenue - 130.0).abs() < TOLERANCE);
        assert_eq!(summary.by_product.get("Widget"), Some(&90.0));
        assert_eq!(summary.by_product.get("Gadget"), Some(&40.0));
        assert_eq!(summary.by_month.len(), 1);
        assert!((summary.by_month["2024-01"] - 130.0).abs() < TOLERANCE);
    }

    #[test]
    fn grouped_totals_reconcile_with_net_revenue() {
        let ds = Dataset::new(
            vec![
                record((2024, 1, 5), "US", "Widget", 10.0, 90.25),
                record((2024, 1, 20), "US", "Gadget", 5.0, 40.5),
                record((2024, 2, 1), "UK", "Widget", 2.0, 20.125),
                record((2024, 3, 9), "DE", "Gizmo", 7.0, 61.75),
            ],
            0,
        );
        let view = filter::apply(&ds, &FilterCriteria::full_span(&ds));
        let summary = summarize(&view);

        for map in [&summary.by_country, &summary.by_product, &summary.by_month] {
            let total: f64 = map.values().sum();
            assert!((total - summary.net_revenue).abs() < TOLERANCE);
        }
    }

    #[test]
    fn empty_view_yields_zeroes() {
        let ds = Dataset::new(Vec::new(), 0);
        let view = filter::apply(&ds, &FilterCriteria::full_span(&ds));
        let summary = summarize(&view);
        assert_eq!(summary, AggregateSummary::default());
    }

    #[test]
    fn month_keys_sort_chronologically() {
        let ds = Dataset::new(
            vec![
                record((2024, 11, 1), "US", "Widget", 1.0, 10.0),
                record((2024, 2, 1), "US", "Widget", 1.0, 10.0),
                record((2023, 12, 1), "US", "Widget", 1.0, 10.0),
            ],
            0,
        );
        let view = filter::apply(&ds, &FilterCriteria::full_span(&ds));
        let summary = summarize(&view);
        let keys: Vec<&String> = summary.by_month.keys().collect();
        assert_eq!(keys, vec!["2023-12", "2024-02", "2024-11"]);
    }
}
