use chrono::Datelike;
use rust_decimal::Decimal;

use super::{StockAnalyzer, divide_half_up};
use crate::model::{AnalyticsError, DIVIDEND_FIELD, Table};

impl StockAnalyzer {
    /// Average payout over the inclusive `[from, to]` year range.
    /// Zero when the years are absent from the table or no row falls
    /// inside the range.
    pub fn average_dividends(
        &self,
        table: &Table,
        from: i32,
        to: i32,
    ) -> Result<Decimal, AnalyticsError> {
        if !self.years_exist(table, from, to) {
            return Ok(Decimal::ZERO);
        }

        let mut dividends = Decimal::ZERO;
        let mut count = Decimal::ZERO;

        for row in &table.rows {
            let year = row.date()?.year();
            if year >= from && year <= to {
                dividends += row.decimal(DIVIDEND_FIELD)?;
                count += Decimal::ONE;
            }
        }

        if count.is_zero() {
            return Ok(Decimal::ZERO);
        }
        Ok(divide_half_up(dividends, count))
    }

    /// Average gap in whole months between consecutive payouts,
    /// truncated.
    ///
    /// Every later row sharing row `i`'s calendar year re-adds the
    /// month delta between rows `i` and `i + 1`, so a year with n
    /// payouts weights its first gap n - 1 times, the next n - 2, and
    /// so on. That accumulation is the shipped figure.
    pub fn dividend_distribution_frequency(&self, table: &Table) -> Result<i32, AnalyticsError> {
        let rows = &table.rows;
        let mut months = 0i32;
        let mut counter = 0i32;

        for i in 0..rows.len() {
            let first = rows[i].date()?;

            for j in (i + 1)..rows.len() {
                let second_year = rows[j].date()?.year();

                if first.year() == second_year && i + 1 != rows.len() {
                    let second_month = rows[i + 1].date()?.month() as i32;
                    months += (second_month - first.month() as i32).abs();
                    counter += 1;
                }
            }
        }

        if counter == 0 {
            return Ok(0);
        }
        Ok(months / counter)
    }
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

    fn dividend_fixture() -> Table {
        table(&[
            &["2020-02-07", "0.192500"],
            &["2020-05-08", "0.205000"],
            &["2020-08-07", "0.205000"],
            &["2020-11-06", "0.205000"],
            &["2021-02-05", "0.205000"],
            &["2021-05-07", "0.220000"],
            &["2021-08-06", "0.220000"],
            &["2021-11-05", "0.220000"],
        ])
    }

    #[test]
    fn average_dividends_over_the_full_range() {
        let result = StockAnalyzer::new()
            .average_dividends(&dividend_fixture(), 2020, 2021)
            .unwrap();

        assert_eq!(result.to_string(), "0.209063");
    }

    #[test]
    fn average_dividends_is_zero_when_the_years_are_absent() {
        let result = StockAnalyzer::new()
            .average_dividends(&dividend_fixture(), 1999, 2001)
            .unwrap();

        assert_eq!(result, Decimal::ZERO);
    }

    #[test]
    fn average_dividends_is_zero_when_no_row_falls_in_the_range() {
        // The gate passes via substring containment ("22" occurs in
        // the payout column) even though no parsed year is in range.
        let result = StockAnalyzer::new()
            .average_dividends(&dividend_fixture(), 22, 22)
            .unwrap();

        assert_eq!(result, Decimal::ZERO);
    }

    #[test]
    fn frequency_of_quarterly_payouts_is_three_months() {
        let result = StockAnalyzer::new()
            .dividend_distribution_frequency(&dividend_fixture())
            .unwrap();

        assert_eq!(result, 3);
    }

    #[test]
    fn frequency_of_an_empty_table_is_zero() {
        let result = StockAnalyzer::new()
            .dividend_distribution_frequency(&Table::default())
            .unwrap();

        assert_eq!(result, 0);
    }

    #[test]
    fn a_malformed_payout_amount_surfaces_a_parse_error() {
        let data = table(&[&["2020-02-07", "n/a"]]);
        let result = StockAnalyzer::new().average_dividends(&data, 2020, 2020);

        assert!(matches!(result, Err(AnalyticsError::Number(_))));
    }
}
