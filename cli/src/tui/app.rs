use chrono::{Datelike, Local};
use safecal_core::{shape, year_options, DailyRecord, MonthlyView, Palette};

/// View state for the calendar: the loaded records plus the selected
/// year/month. The year selector is an 11-option window centered on
/// the year at startup, computed once.
pub struct App {
    pub records: Vec<DailyRecord>,
    pub view: MonthlyView,
    pub year: i32,
    pub month0: u32,
    pub year_center: i32,
    pub palette: Palette,
}

impl App {
    pub fn new(records: Vec<DailyRecord>) -> App {
        let now = Local::now();
        let year = now.year();
        let month0 = now.month0();
        let view = MonthlyView::new(year, month0, shape(&records, year, month0));
        App {
            records,
            view,
            year,
            month0,
            year_center: year,
            palette: Palette::default(),
        }
    }

    pub fn next_month(&mut self) {
        self.month0 = (self.month0 + 1) % 12;
        self.reshape();
    }

    pub fn previous_month(&mut self) {
        self.month0 = (self.month0 + 11) % 12;
        self.reshape();
    }

    pub fn next_year(&mut self) {
        if self.can_next_year() {
            self.year += 1;
            self.reshape();
        }
    }

    pub fn previous_year(&mut self) {
        if self.can_previous_year() {
            self.year -= 1;
            self.reshape();
        }
    }

    pub fn can_next_year(&self) -> bool {
        year_options(self.year_center)
            .last()
            .is_some_and(|last| self.year < *last)
    }

    pub fn can_previous_year(&self) -> bool {
        year_options(self.year_center)
            .first()
            .is_some_and(|first| self.year > *first)
    }

    // Every selection change re-shapes the full dataset.
    fn reshape(&mut self) {
        self.view = MonthlyView::new(
            self.year,
            self.month0,
            shape(&self.records, self.year, self.month0),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_month_cycles_within_year() {
        let mut app = App::new(Vec::new());
        let year = app.year;
        app.month0 = 11;
        app.next_month();
        assert_eq!(app.month0, 0);
        assert_eq!(app.year, year);
        app.previous_month();
        assert_eq!(app.month0, 11);
        assert_eq!(app.year, year);
    }

    #[test]
    fn test_year_clamped_to_window() {
        let mut app = App::new(Vec::new());
        let center = app.year_center;
        for _ in 0..20 {
            app.next_year();
        }
        assert_eq!(app.year, center + 5);
        for _ in 0..20 {
            app.previous_year();
        }
        assert_eq!(app.year, center - 5);
    }

    #[test]
    fn test_selection_change_reshapes() {
        let now = Local::now();
        let date = NaiveDate::from_ymd_opt(now.year(), now.month(), 15).unwrap();
        let mut app = App::new(vec![DailyRecord::new(date, 2.0, 0.0)]);
        assert_eq!(app.view.points.len(), 1);
        app.next_month();
        assert!(app.view.points.is_empty());
        app.previous_month();
        assert_eq!(app.view.points.len(), 1);
    }
}
