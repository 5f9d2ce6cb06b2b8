use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Placeholder the registry uses for dogs whose name is not known.
pub const UNKNOWN_NAME: &str = "?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

impl Sex {
    /// Maps the registry's `SexHundCd` code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "1" => Some(Sex::Male),
            "2" => Some(Sex::Female),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "m",
            Sex::Female => "f",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the registry: `count` dogs sharing name, sex and birth year
/// in a reporting year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub name: String,
    pub sex: Sex,
    pub birth_year: i32,
    pub record_year: i32,
    pub count: u32,
}

impl Dog {
    pub fn new(name: impl Into<String>, sex: Sex, birth_year: i32, record_year: i32, count: u32) -> Self {
        Self {
            name: name.into(),
            sex,
            birth_year,
            record_year,
            count,
        }
    }

    pub fn has_known_name(&self) -> bool {
        self.name != UNKNOWN_NAME
    }
}

/// The registry dataset. Never empty once constructed through
/// [`DogData::new`] or the CSV readers in `core::dataset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DogData {
    pub(crate) dogs: Vec<Dog>,
}

impl DogData {
    pub fn iter(&self) -> std::slice::Iter<'_, Dog> {
        self.dogs.iter()
    }

    pub fn as_slice(&self) -> &[Dog] {
        &self.dogs
    }

    pub fn len(&self) -> usize {
        self.dogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dogs.is_empty()
    }

    /// Distinct reporting years, ascending.
    pub fn record_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.dogs.iter().map(|d| d.record_year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }
}

impl<'a> IntoIterator for &'a DogData {
    type Item = &'a Dog;
    type IntoIter = std::slice::Iter<'a, Dog>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameCount {
    pub name: String,
    pub count: u64,
}

impl NameCount {
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DogStats {
    pub name_longest: Option<String>,
    pub name_shortest: Option<String>,
    pub top_names_male: Vec<NameCount>,
    pub top_names_female: Vec<NameCount>,
    pub top_names_overall: Vec<NameCount>,
    pub dog_count_male: u64,
    pub dog_count_female: u64,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
    pub top_limit: usize,
}

impl DogStats {
    pub fn dog_count_overall(&self) -> u64 {
        self.dog_count_male + self.dog_count_female
    }

    pub fn has_data(&self) -> bool {
        self.first_year.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntheticDog {
    pub name: String,
    pub sex: Sex,
    pub birth_year: i32,
}

impl SyntheticDog {
    /// Age in whole years at the end of `year`. Negative if the dog was
    /// born after `year`.
    pub fn age_in(&self, year: i32) -> i32 {
        year - self.birth_year
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatedDog {
    #[serde(flatten)]
    pub dog: SyntheticDog,
    pub picture: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchOutcome {
    NoName { name: String },
    NoYear { name: String, year: i32 },
    Found { year: i32, dogs: Vec<Dog> },
}
