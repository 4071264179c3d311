use chrono::Datelike;

use crate::model::record::{DailyRecord, DayCounts, FilteredPoint};

/// Filter records down to the selected (year, month) and coalesce the
/// counts. `month0` is zero-based (0 = January). Output follows input
/// order; records whose date does not resolve or does not match are
/// dropped silently.
pub fn shape(records: &[DailyRecord], year: i32, month0: u32) -> Vec<FilteredPoint> {
    let mut points = Vec::new();
    for record in records {
        let Some(date) = record.date.resolve() else {
            continue;
        };
        if date.year() != year || date.month0() != month0 {
            continue;
        }
        points.push(FilteredPoint {
            date,
            counts: DayCounts {
                incidents: coalesce(record.incidents),
                risks: coalesce(record.risks),
            },
        });
    }
    points
}

// Absent, NaN, and zero all collapse to zero.
fn coalesce(raw: Option<f64>) -> f64 {
    match raw {
        Some(v) if v != 0.0 && !v.is_nan() => v,
        _ => 0.0,
    }
}
