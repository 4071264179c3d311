pub mod input;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use input::{parse_entry, ParsedEntry};
pub use model::palette::{Palette, Rgb};
pub use model::record::{DailyRecord, DateField, DayCounts, FilteredPoint};
pub use repository::{FileRecordRepository, RecordRepository};
pub use service::dto::{MonthSummary, MonthlyView};
pub use service::renderer::{render_cell, CellGeometry, CellScene};
pub use service::shaper::shape;
pub use time::{days_in_month, year_options, MONTH_NAMES};
pub use usecase::monthly::MonthlyViewUseCase;
