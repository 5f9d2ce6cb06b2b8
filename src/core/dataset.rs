use crate::domain::model::{Dog, DogData, Sex};
use crate::utils::error::{Result, WuffError};
use csv::StringRecord;
use std::io::Read;

pub const COLUMN_NAME: &str = "HundenameText";
pub const COLUMN_SEX: &str = "SexHundCd";
pub const COLUMN_BIRTH_YEAR: &str = "GebDatHundJahr";
pub const COLUMN_RECORD_YEAR: &str = "StichtagDatJahr";
pub const COLUMN_COUNT: &str = "AnzHunde";

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Positions of the required columns within a header row.
struct ColumnIndex {
    name: usize,
    sex: usize,
    birth_year: usize,
    record_year: usize,
    count: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h.trim() == column)
                .ok_or_else(|| WuffError::MissingColumn {
                    column: column.to_string(),
                })
        };

        Ok(Self {
            name: find(COLUMN_NAME)?,
            sex: find(COLUMN_SEX)?,
            birth_year: find(COLUMN_BIRTH_YEAR)?,
            record_year: find(COLUMN_RECORD_YEAR)?,
            count: find(COLUMN_COUNT)?,
        })
    }

    fn parse(&self, record: &StringRecord, line: u64) -> Result<Dog> {
        let sex_code = field(record, self.sex, COLUMN_SEX, line)?;
        let sex = Sex::from_code(sex_code).ok_or_else(|| WuffError::InvalidRecord {
            line,
            message: format!("unknown sex code '{}'", sex_code),
        })?;

        let count = number(record, self.count, COLUMN_COUNT, line)?;
        let count = u32::try_from(count).map_err(|_| WuffError::InvalidRecord {
            line,
            message: format!("{} out of range: {}", COLUMN_COUNT, count),
        })?;

        Ok(Dog {
            name: field(record, self.name, COLUMN_NAME, line)?.to_string(),
            sex,
            birth_year: year(number(record, self.birth_year, COLUMN_BIRTH_YEAR, line)?, line)?,
            record_year: year(number(record, self.record_year, COLUMN_RECORD_YEAR, line)?, line)?,
            count,
        })
    }
}

fn field<'r>(record: &'r StringRecord, index: usize, column: &str, line: u64) -> Result<&'r str> {
    record.get(index).ok_or_else(|| WuffError::InvalidRecord {
        line,
        message: format!("missing value for {}", column),
    })
}

fn number(record: &StringRecord, index: usize, column: &str, line: u64) -> Result<i64> {
    let raw = field(record, index, column, line)?;
    raw.trim().parse::<i64>().map_err(|_| WuffError::InvalidRecord {
        line,
        message: format!("{} is not a number: '{}'", column, raw),
    })
}

fn year(value: i64, line: u64) -> Result<i32> {
    i32::try_from(value).map_err(|_| WuffError::InvalidRecord {
        line,
        message: format!("year out of range: {}", value),
    })
}

impl DogData {
    pub fn new(dogs: Vec<Dog>) -> Result<Self> {
        if dogs.is_empty() {
            return Err(WuffError::EmptyDataset);
        }
        Ok(Self { dogs })
    }

    /// Decodes raw registry bytes strictly as UTF-8 before parsing them.
    pub fn from_csv_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_csv_str(std::str::from_utf8(bytes)?)
    }

    /// Parses the registry CSV export. A leading byte order mark is ignored.
    pub fn from_csv_str(text: &str) -> Result<Self> {
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
        Self::from_reader(text.as_bytes())
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        let records = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;
        tracing::debug!("read {} CSV rows with {} columns", records.len(), headers.len());

        // an empty body is reported before the header check, so text that
        // is not CSV at all counts as "no data" rather than "wrong columns"
        if records.is_empty() {
            return Err(WuffError::EmptyDataset);
        }

        let columns = ColumnIndex::from_headers(&headers)?;
        let dogs = records
            .iter()
            .map(|record| {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                columns.parse(record, line)
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(dogs)
    }
}
