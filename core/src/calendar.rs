// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::{ToSpan, Zoned, civil::Date};

/// Column headers of the month grid, weeks start on Sunday.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// One row of the month grid. Days outside the displayed month are `None`.
pub type Week = [Option<Date>; 7];

/// A month-grid calendar with a cursor on one day.
///
/// The displayed month is always the month of the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    cursor: Date,
}

impl MonthView {
    pub fn new(cursor: Date) -> Self {
        Self { cursor }
    }

    /// Opens on the given date, or on today when there is none.
    pub fn open_at(date: Option<Date>) -> Self {
        Self::new(date.unwrap_or_else(|| Zoned::now().date()))
    }

    pub fn cursor(&self) -> Date {
        self.cursor
    }

    pub fn set_cursor(&mut self, date: Date) {
        self.cursor = date;
    }

    /// Title of the displayed month, e.g. `March 2025`.
    pub fn title(&self) -> String {
        self.cursor.strftime("%B %Y").to_string()
    }

    /// The weeks of the displayed month, first row holding the 1st.
    pub fn weeks(&self) -> Vec<Week> {
        let first = self.cursor.first_of_month();
        let lead = first.weekday().to_sunday_zero_offset() as usize;
        let days = (1..=self.cursor.days_in_month())
            .filter_map(|day| Date::new(first.year(), first.month(), day).ok());

        let cells: Vec<Option<Date>> = std::iter::repeat_n(None, lead)
            .chain(days.map(Some))
            .collect();

        cells
            .chunks(7)
            .map(|chunk| {
                let mut week: Week = [None; 7];
                week[..chunk.len()].copy_from_slice(chunk);
                week
            })
            .collect()
    }

    /// Position of the cursor in [`weeks`](Self::weeks) as (row, column).
    pub fn cursor_cell(&self) -> (usize, usize) {
        let lead = self.cursor.first_of_month().weekday().to_sunday_zero_offset() as usize;
        let index = lead + self.cursor.day() as usize - 1;
        (index / 7, index % 7)
    }

    /// Moves the cursor by whole days, crossing month boundaries.
    pub fn move_days(&mut self, days: i64) {
        match self.cursor.checked_add(days.days()) {
            Ok(date) => self.cursor = date,
            Err(e) => tracing::debug!(err = %e, "cursor out of range"),
        }
    }

    /// Moves the cursor by whole months, clamping the day to the target month.
    pub fn move_months(&mut self, months: i32) {
        match self.cursor.checked_add(months.months()) {
            Ok(date) => self.cursor = date,
            Err(e) => tracing::debug!(err = %e, "cursor out of range"),
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn hides_outside_days() {
        // March 2025 starts on a Saturday and has 31 days
        let view = MonthView::new(date(2025, 3, 10));
        let weeks = view.weeks();

        assert_eq!(weeks.len(), 6);
        assert_eq!(weeks[0][..6], [None; 6]);
        assert_eq!(weeks[0][6], Some(date(2025, 3, 1)));
        assert_eq!(weeks[5][1], Some(date(2025, 3, 31)));
        assert_eq!(weeks[5][2..], [None; 5]);

        let count = weeks.iter().flatten().flatten().count();
        assert_eq!(count, 31);
    }

    #[test]
    fn month_starting_on_sunday_has_no_leading_blanks() {
        // June 2025 starts on a Sunday
        let weeks = MonthView::new(date(2025, 6, 15)).weeks();
        assert_eq!(weeks[0][0], Some(date(2025, 6, 1)));
        assert_eq!(weeks.len(), 5);
    }

    #[test]
    fn cursor_cell_matches_grid() {
        let view = MonthView::new(date(2025, 3, 10));
        let (row, col) = view.cursor_cell();
        assert_eq!(view.weeks()[row][col], Some(date(2025, 3, 10)));
    }

    #[test]
    fn moves_across_month_boundaries() {
        let mut view = MonthView::new(date(2025, 1, 31));
        view.move_days(1);
        assert_eq!(view.cursor(), date(2025, 2, 1));
        view.move_days(-7);
        assert_eq!(view.cursor(), date(2025, 1, 25));
        assert_eq!(view.title(), "January 2025");
    }

    #[test]
    fn month_paging_clamps_day() {
        let mut view = MonthView::new(date(2025, 1, 31));
        view.move_months(1);
        assert_eq!(view.cursor(), date(2025, 2, 28));

        let mut view = MonthView::new(date(2024, 3, 31));
        view.move_months(-1);
        assert_eq!(view.cursor(), date(2024, 2, 29));
    }
}
