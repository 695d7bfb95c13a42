use chrono::Datelike;
use rust_decimal::{Decimal, RoundingStrategy};

use super::{StockAnalyzer, divide_half_up};
use crate::model::{AnalyticsError, CLOSE_FIELD, Table};

impl StockAnalyzer {
    /// Simple moving average of the closing price over the whole
    /// table.
    ///
    /// An empty table divides by zero and panics; the guard lives in
    /// the callers that need one, not here.
    pub fn sma(&self, table: &Table) -> Result<Decimal, AnalyticsError> {
        let mut sum_close = Decimal::ZERO;
        for row in &table.rows {
            sum_close += row.decimal(CLOSE_FIELD)?;
        }

        Ok(divide_half_up(sum_close, Decimal::from(table.rows.len())))
    }

    /// SMA over a span of years, zero when neither year's digits
    /// appear anywhere in the table.
    pub fn sma_of_period(
        &self,
        table: &Table,
        from: i32,
        to: i32,
    ) -> Result<Decimal, AnalyticsError> {
        if !self.years_exist(table, from, to) {
            return Ok(Decimal::ZERO);
        }

        let mut sum_close = Decimal::ZERO;
        let mut days = Decimal::ZERO;

        for row in &table.rows {
            let year = row.date()?.year();
            // Disjunction, not a range check: every year passes unless
            // from > to.
            if year >= from || year <= to {
                sum_close += row.decimal(CLOSE_FIELD)?;
                days += Decimal::ONE;
            }
        }

        Ok(divide_half_up(sum_close, days))
    }

    /// SMA over every row whose date field contains `year` as a
    /// substring, so "20" matches "2020-12-03" as well.
    pub fn sma_year(&self, table: &Table, year: &str) -> Result<Decimal, AnalyticsError> {
        let year_number: i32 = year.parse()?;
        if !self.years_exist(table, year_number, year_number) {
            return Ok(Decimal::ZERO);
        }

        let mut sum_close = Decimal::ZERO;
        let mut days = Decimal::ZERO;

        for row in &table.rows {
            if row.fields.first().is_some_and(|date| date.contains(year)) {
                sum_close += row.decimal(CLOSE_FIELD)?;
                days += Decimal::ONE;
            }
        }

        Ok(divide_half_up(sum_close, days))
    }

    /// Exponential moving average of the closing price, seeded at the
    /// row matching the given calendar date.
    ///
    /// The smoothing factor is `2.00 / (days + 1)`, half-up at two
    /// decimals. When the date is absent the run silently starts at
    /// row 0. A window reaching past the end of the table panics on
    /// the out-of-range index. The result carries six fractional
    /// digits, half-up.
    pub fn exponential_moving_average(
        &self,
        table: &Table,
        start_year: i32,
        month: u32,
        day: u32,
        days: usize,
    ) -> Result<Decimal, AnalyticsError> {
        if !self.years_exist(table, start_year, start_year) {
            return Ok(Decimal::ZERO);
        }

        let smoothing = divide_half_up(Decimal::new(200, 2), Decimal::from(days + 1));

        let index = self.index_of_date(table, start_year, month, day)?;
        let mut ema = table.rows[index].decimal(CLOSE_FIELD)?;

        for i in index..index + days {
            ema = ema * (Decimal::ONE - smoothing)
                + smoothing * table.rows[i].decimal(CLOSE_FIELD)?;
        }

        let mut ema = ema.round_dp_with_strategy(6, RoundingStrategy::MidpointAwayFromZero);
        ema.rescale(6);
        Ok(ema)
    }

    /// Index of the first row dated exactly `year-month-day`, or 0
    /// when no row matches, indistinguishable from a hit on the first
    /// row.
    pub fn index_of_date(
        &self,
        table: &Table,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<usize, AnalyticsError> {
        for (i, row) in table.rows.iter().enumerate() {
            let date = row.date()?;
            if date.year() == year && date.month() == month && date.day() == day {
                return Ok(i);
            }
        }

        Ok(0)
    }
}
