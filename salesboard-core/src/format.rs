//! Display formatting for KPI values.
//!
//! Currency displays rounded to whole units with thousands separators
//! (`$1,234`); unit counts truncate toward zero. Exported files never use
//! these — export stays plain decimal text.

/// Group an integer with thousands separators: `1234567` → `"1,234,567"`.
pub fn thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Currency metric: rounded to whole units, grouped, `$` prefixed.
pub fn currency(amount: f64) -> String {
    format!("${}", thousands(amount.round() as i64))
}

/// Unit-count metric: truncated toward zero, grouped.
pub fn units(count: f64) -> String {
    thousands(count.trunc() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1_000), "1,000");
        assert_eq!(thousands(1_234_567), "1,234,567");
        assert_eq!(thousands(-1_234), "-1,234");
    }

    #[test]
    fn currency_rounds_to_whole_units() {
        assert_eq!(currency(1234.56), "$1,235");
        assert_eq!(currency(0.4), "$0");
        assert_eq!(currency(-950.5), "$-951");
    }

    #[test]
    fn units_truncate_toward_zero() {
        assert_eq!(units(10.9), "10");
        assert_eq!(units(-2.9), "-2");
        assert_eq!(units(1500.0), "1,500");
    }
}
