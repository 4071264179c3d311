use anyhow::Result;

use crate::repository::RecordRepository;
use crate::service::dto::MonthlyView;
use crate::service::shaper::shape;

/// Loads records from the store and shapes them for one month.
pub struct MonthlyViewUseCase<'a, R: RecordRepository> {
    repo: &'a R,
}

impl<'a, R: RecordRepository> MonthlyViewUseCase<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    pub fn month_view(&self, year: i32, month0: u32) -> Result<MonthlyView> {
        let records = self.repo.load()?;
        let points = shape(&records, year, month0);
        Ok(MonthlyView::new(year, month0, points))
    }
}
