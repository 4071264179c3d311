use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use serde_json;

use crate::model::record::DailyRecord;

const RECORDS_FILE_NAME: &str = "records.json";

pub trait RecordRepository {
    fn load(&self) -> Result<Vec<DailyRecord>>;
    fn upsert(&self, record: DailyRecord) -> Result<()>;
}

/// JSON-file backed record store, one flat array of daily records.
pub struct FileRecordRepository {
    file_path: PathBuf,
}

impl FileRecordRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".safecal")
            }
        };
        fs::create_dir_all(&path)?;
        path.push(RECORDS_FILE_NAME);

        if !path.exists() {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &Vec::<DailyRecord>::new())?;
            writer.flush()?;
        }

        Ok(FileRecordRepository { file_path: path })
    }

    fn read_records(&self) -> Result<Vec<DailyRecord>> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let records: Vec<DailyRecord> = serde_json::from_reader(reader)?;
        Ok(records)
    }

    fn write_records(&self, records: &[DailyRecord]) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, records)?;
        writer.flush()?;
        Ok(())
    }
}

impl RecordRepository for FileRecordRepository {
    fn load(&self) -> Result<Vec<DailyRecord>> {
        self.read_records()
    }

    fn upsert(&self, record: DailyRecord) -> Result<()> {
        let date = record
            .date
            .resolve()
            .ok_or_else(|| anyhow!("Cannot store a record with an unrecognized date"))?;

        let mut records = self.read_records()?;
        if let Some(pos) = records
            .iter()
            .position(|r| r.date.resolve() == Some(date))
        {
            records[pos] = record;
        } else {
            records.push(record);
        }
        self.write_records(&records)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::env;

    fn temp_base(tag: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("safecal-test-{}-{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_new_seeds_empty_store() {
        let base = temp_base("seed");
        let repo = FileRecordRepository::new(Some(base.clone())).unwrap();
        assert!(repo.load().unwrap().is_empty());
        fs::remove_dir_all(&base).unwrap();
    }

    #[test]
    fn test_upsert_replaces_same_date() {
        let base = temp_base("upsert");
        let repo = FileRecordRepository::new(Some(base.clone())).unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 2, 24).unwrap();

        repo.upsert(DailyRecord::new(date, 1.0, 0.0)).unwrap();
        repo.upsert(DailyRecord::new(date, 3.0, 2.0)).unwrap();

        let records = repo.load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].incidents, Some(3.0));
        assert_eq!(records[0].risks, Some(2.0));
        fs::remove_dir_all(&base).unwrap();
    }

    #[test]
    fn test_upsert_rejects_unresolvable_date() {
        let base = temp_base("baddate");
        let repo = FileRecordRepository::new(Some(base.clone())).unwrap();
        let record = DailyRecord {
            date: crate::model::record::DateField::Text("nope".to_string()),
            incidents: Some(1.0),
            risks: None,
        };
        assert!(repo.upsert(record).is_err());
        fs::remove_dir_all(&base).unwrap();
    }
}
