//! End-to-end pipeline tests on a decorated, partially malformed fixture:
//! load → clean → filter → aggregate → export → re-load.

use std::collections::BTreeSet;
use std::io::Write;

use chrono::NaiveDate;
use salesboard_core::{apply, load, render, summarize, FilterCriteria};

const TOLERANCE: f64 = 1e-9;

/// Day-first dates, currency decoration, quoted thousands separators, and
/// three malformed rows (bad date, bad currency, missing product).
const FIXTURE: &str = "\
Date,Country,Product,Units_Sold,Unit_Price,Total_Sale,Sales_After_Discount
05/01/2024,US,Widget,10,$10.00,\"$100.00\",\"$90.00\"
20/01/2024,US,Gadget,5,$8.00,$40.00,$40.00
01/02/2024,UK,Widget,2,$10.00,$20.00,$20.00
15/02/2024,UK,Gadget,\"1,000\",$2.00,\"$2,000.00\",\"$1,900.00\"
not-a-date,US,Widget,1,$1.00,$1.00,$1.00
10/03/2024,DE,Widget,3,oops,$30.00,$28.00
11/03/2024,DE,,3,$10.00,$30.00,$28.00
";

fn fixture_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{FIXTURE}").unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn load_is_idempotent_and_drops_bad_rows() {
    let file = fixture_file();
    let first = load(file.path()).unwrap();
    let second = load(file.path()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), 4);
    assert_eq!(first.dropped_rows(), 3);

    // Day-first convention: 05/01/2024 is 5 January.
    assert_eq!(
        first.records()[0].date,
        NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
    );
    // Decoration is stripped, values normalized.
    assert_eq!(first.records()[3].units_sold, 1000.0);
    assert_eq!(first.records()[3].total_sale, 2000.0);
}

#[test]
fn default_criteria_returns_whole_dataset() {
    let file = fixture_file();
    let ds = load(file.path()).unwrap();
    let view = apply(&ds, &FilterCriteria::full_span(&ds));
    assert_eq!(view.len(), ds.len());
}

#[test]
fn filter_conjunction_exactly_selects_satisfying_rows() {
    let file = fixture_file();
    let ds = load(file.path()).unwrap();
    let criteria = FilterCriteria {
        start: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        end: NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
        countries: BTreeSet::from(["UK".to_string()]),
        products: BTreeSet::new(),
    };
    let view = apply(&ds, &criteria);

    // Every record in the view satisfies all predicates.
    for record in view.iter() {
        assert!(criteria.matches(record));
    }
    // Every satisfying record of the dataset appears exactly once, in order.
    let expected: Vec<_> = ds.records().iter().filter(|r| criteria.matches(r)).collect();
    assert_eq!(view.records(), expected.as_slice());
    assert_eq!(view.len(), 2);
}

#[test]
fn grouped_totals_reconcile() {
    let file = fixture_file();
    let ds = load(file.path()).unwrap();
    let view = apply(&ds, &FilterCriteria::full_span(&ds));
    let summary = summarize(&view);

    assert!((summary.gross_revenue - 2160.0).abs() < TOLERANCE);
    assert!((summary.net_revenue - 2050.0).abs() < TOLERANCE);
    assert!((summary.total_units - 1017.0).abs() < TOLERANCE);

    for map in [&summary.by_country, &summary.by_product, &summary.by_month] {
        let total: f64 = map.values().sum();
        assert!((total - summary.net_revenue).abs() < TOLERANCE);
    }

    // No zero-filling: only months with records appear.
    let months: Vec<&String> = summary.by_month.keys().collect();
    assert_eq!(months, vec!["2024-01", "2024-02"]);
}

#[test]
fn export_roundtrip_preserves_the_view() {
    let file = fixture_file();
    let ds = load(file.path()).unwrap();
    let criteria = FilterCriteria {
        countries: BTreeSet::from(["US".to_string(), "UK".to_string()]),
        ..FilterCriteria::full_span(&ds)
    };
    let view = apply(&ds, &criteria);

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join(salesboard_core::export::EXPORT_FILE_NAME);
    salesboard_core::export::write_csv(&view, &out).unwrap();

    let reloaded = load(&out).unwrap();
    assert_eq!(reloaded.len(), view.len());
    assert_eq!(reloaded.dropped_rows(), 0);
    for (got, want) in reloaded.records().iter().zip(view.iter()) {
        assert_eq!(got.date, want.date);
        assert!((got.sales_after_discount - want.sales_after_discount).abs() < TOLERANCE);
        assert!((got.total_sale - want.total_sale).abs() < TOLERANCE);
        assert!((got.units_sold - want.units_sold).abs() < TOLERANCE);
    }

    // Aggregates computed from the re-import match the original view.
    let original = summarize(&view);
    let reimported = render(&reloaded, &FilterCriteria::full_span(&reloaded)).summary;
    assert!((original.net_revenue - reimported.net_revenue).abs() < TOLERANCE);
}

#[test]
fn empty_filter_export_is_header_only() {
    let file = fixture_file();
    let ds = load(file.path()).unwrap();
    let criteria = FilterCriteria {
        countries: BTreeSet::from(["FR".to_string()]),
        ..FilterCriteria::full_span(&ds)
    };
    let view = apply(&ds, &criteria);
    assert!(view.is_empty());

    let csv_text = salesboard_core::export::to_csv(&view).unwrap();
    assert_eq!(csv_text.lines().count(), 1);

    // Empty views aggregate to zeros without raising.
    let summary = summarize(&view);
    assert_eq!(summary.net_revenue, 0.0);
    assert!(summary.by_month.is_empty());
}
