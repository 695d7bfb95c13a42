// Analyzer module: moving averages and dividend statistics.

pub mod dividends;
pub mod moving_average;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::model::Table;

/// Stock analytics over an in-memory table. Every operation is a
/// read-only scan; the table is never mutated.
pub struct StockAnalyzer;

impl StockAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// True when the decimal digits of `from` or `to` appear anywhere
    /// in any field of any row. This is substring containment, not a
    /// parsed-year comparison: "2020" inside a price or volume column
    /// counts as a match.
    pub fn years_exist(&self, table: &Table, from: i32, to: i32) -> bool {
        let from = from.to_string();
        let to = to.to_string();
        table
            .rows
            .iter()
            .any(|row| row.contains(&from) || row.contains(&to))
    }
}

impl Default for StockAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Divides `num` by `den`, rounding half-up to the scale of the
/// numerator, the behavior of fixed-point division with an explicit
/// HALF_UP mode and no target scale.
///
/// Panics on a zero divisor; callers that want a guard check first.
pub(crate) fn divide_half_up(num: Decimal, den: Decimal) -> Decimal {
    let mut quotient =
        (num / den).round_dp_with_strategy(num.scale(), RoundingStrategy::MidpointAwayFromZero);
    quotient.rescale(num.scale());
    quotient
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Row;

    fn table(rows: &[&[&str]]) -> Table {
        Table {
            rows: rows
                .iter()
                .map(|fields| Row::new(fields.iter().map(|s| s.to_string()).collect()))
                .collect(),
        }
    }

    #[test]
    fn years_exist_is_false_when_neither_year_appears() {
        let data = table(&[
            &["1980-12-12", "0.128348", "0.128906", "0.128348", "0.128348", "0.100453", "469033600"],
            &["1980-12-15", "0.122210", "0.122210", "0.121652", "0.121652", "0.095213", "175884800"],
        ]);

        assert!(!StockAnalyzer::new().years_exist(&data, 2019, 2020));
    }

    #[test]
    fn years_exist_is_true_when_a_year_appears() {
        let data = table(&[
            &["1980-12-12", "0.128348", "0.128906", "0.128348", "0.128348", "0.100453", "469033600"],
            &["1984-12-15", "0.122210", "0.122210", "0.121652", "0.121652", "0.095213", "175884800"],
        ]);

        assert!(StockAnalyzer::new().years_exist(&data, 1980, 1984));
    }

    #[test]
    fn years_exist_matches_digits_outside_the_date_field() {
        // 4690 never occurs as a year, but the volume column starts
        // with those digits, and containment looks at every field.
        let data = table(&[
            &["1980-12-12", "0.128348", "0.128906", "0.128348", "0.128348", "0.100453", "469033600"],
        ]);

        assert!(StockAnalyzer::new().years_exist(&data, 4690, 4690));
    }

    #[test]
    fn divide_half_up_rounds_to_the_numerator_scale() {
        let num: Decimal = "1.672500".parse().unwrap();
        let den = Decimal::from(8);

        assert_eq!(divide_half_up(num, den).to_string(), "0.209063");
    }

    #[test]
    fn divide_half_up_pads_exact_quotients() {
        let num: Decimal = "2.00".parse().unwrap();
        let den = Decimal::from(4);

        assert_eq!(divide_half_up(num, den).to_string(), "0.50");
    }
}
