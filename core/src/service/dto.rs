use chrono::Datelike;

use crate::model::record::FilteredPoint;

/// Month-level rollup shown next to the calendar.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MonthSummary {
    pub total_incidents: f64,
    pub total_risks: f64,
    pub incident_days: usize,
    pub risk_days: usize,
}

impl MonthSummary {
    pub fn from_points(points: &[FilteredPoint]) -> Self {
        let mut summary = MonthSummary::default();
        for point in points {
            summary.total_incidents += point.counts.incidents;
            summary.total_risks += point.counts.risks;
            if point.counts.incidents > 0.0 {
                summary.incident_days += 1;
            }
            if point.counts.risks > 0.0 {
                summary.risk_days += 1;
            }
        }
        summary
    }
}

/// Everything the front end needs to draw one month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyView {
    pub year: i32,
    pub month0: u32,
    pub points: Vec<FilteredPoint>,
    pub summary: MonthSummary,
}

impl MonthlyView {
    pub fn new(year: i32, month0: u32, points: Vec<FilteredPoint>) -> Self {
        let summary = MonthSummary::from_points(&points);
        Self {
            year,
            month0,
            points,
            summary,
        }
    }

    /// Look up the shaped point for a day of the month, if any.
    pub fn point_for_day(&self, day: u32) -> Option<&FilteredPoint> {
        self.points.iter().find(|p| p.date.day() == day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::{DayCounts, FilteredPoint};
    use chrono::NaiveDate;

    fn point(day: u32, incidents: f64, risks: f64) -> FilteredPoint {
        FilteredPoint {
            date: NaiveDate::from_ymd_opt(2025, 2, day).unwrap(),
            counts: DayCounts { incidents, risks },
        }
    }

    #[test]
    fn test_summary_totals_and_alert_days() {
        let points = vec![point(1, 2.0, 0.0), point(2, 0.0, 3.0), point(3, 1.0, 1.0)];
        let summary = MonthSummary::from_points(&points);
        assert_eq!(summary.total_incidents, 3.0);
        assert_eq!(summary.total_risks, 4.0);
        assert_eq!(summary.incident_days, 2);
        assert_eq!(summary.risk_days, 2);
    }

    #[test]
    fn test_point_for_day() {
        let view = MonthlyView::new(2025, 1, vec![point(24, 1.0, 0.0)]);
        assert!(view.point_for_day(24).is_some());
        assert!(view.point_for_day(25).is_none());
    }
}
