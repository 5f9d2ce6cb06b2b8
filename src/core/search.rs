use crate::domain::model::{Dog, SearchOutcome};

/// Looks up dogs by exact name.
///
/// Without an explicit `year` the latest reporting year in which the name
/// occurs is used.
pub fn find<'a, I>(dogs: I, name: &str, year: Option<i32>) -> SearchOutcome
where
    I: IntoIterator<Item = &'a Dog>,
{
    let matching: Vec<&Dog> = dogs.into_iter().filter(|dog| dog.name == name).collect();

    let latest = match matching.iter().map(|dog| dog.record_year).max() {
        Some(latest) => latest,
        None => {
            return SearchOutcome::NoName {
                name: name.to_string(),
            }
        }
    };
    let year = year.unwrap_or(latest);

    let dogs: Vec<Dog> = matching
        .into_iter()
        .filter(|dog| dog.record_year == year)
        .cloned()
        .collect();

    if dogs.is_empty() {
        SearchOutcome::NoYear {
            name: name.to_string(),
            year,
        }
    } else {
        SearchOutcome::Found { year, dogs }
    }
}
