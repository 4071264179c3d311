pub mod records;

pub use records::FileRecordRepository;
pub use records::RecordRepository;
