use crate::domain::model::{Dog, DogStats, NameCount, Sex};
use std::collections::HashMap;

pub const TOP_LIMIT: usize = 10;

/// Name counts that remember the order in which names were first seen, so
/// equal counts rank in dataset order.
#[derive(Default)]
struct NameTally {
    index: HashMap<String, usize>,
    counts: Vec<NameCount>,
}

impl NameTally {
    fn add(&mut self, name: &str, count: u64) {
        match self.index.get(name) {
            Some(&i) => self.counts[i].count += count,
            None => {
                self.index.insert(name.to_string(), self.counts.len());
                self.counts.push(NameCount::new(name, count));
            }
        }
    }

    fn top(mut self, limit: usize) -> Vec<NameCount> {
        // sort_by is stable
        self.counts.sort_by(|a, b| b.count.cmp(&a.count));
        self.counts.truncate(limit);
        self.counts
    }
}

/// Computes statistics over the registry, limited to one reporting year
/// when `year` is set. Dogs with an unknown name are left out.
pub fn analyze<'a, I>(dogs: I, year: Option<i32>) -> DogStats
where
    I: IntoIterator<Item = &'a Dog>,
{
    let mut name_longest: Option<(&str, usize)> = None;
    let mut name_shortest: Option<(&str, usize)> = None;
    let mut male = NameTally::default();
    let mut female = NameTally::default();
    let mut overall = NameTally::default();
    let mut dog_count_male = 0u64;
    let mut dog_count_female = 0u64;
    let mut first_year: Option<i32> = None;
    let mut last_year: Option<i32> = None;

    let selected = dogs
        .into_iter()
        .filter(|dog| year.map_or(true, |y| dog.record_year == y))
        .filter(|dog| dog.has_known_name());

    for dog in selected {
        let length = dog.name.chars().count();
        if name_longest.map_or(true, |(_, longest)| length > longest) {
            name_longest = Some((dog.name.as_str(), length));
        }
        if name_shortest.map_or(true, |(_, shortest)| length < shortest) {
            name_shortest = Some((dog.name.as_str(), length));
        }

        first_year = Some(first_year.map_or(dog.record_year, |y| y.min(dog.record_year)));
        last_year = Some(last_year.map_or(dog.record_year, |y| y.max(dog.record_year)));

        let count = u64::from(dog.count);
        match dog.sex {
            Sex::Male => {
                male.add(&dog.name, count);
                dog_count_male += count;
            }
            Sex::Female => {
                female.add(&dog.name, count);
                dog_count_female += count;
            }
        }
        overall.add(&dog.name, count);
    }

    tracing::debug!(
        "analyzed {} male and {} female dogs{}",
        dog_count_male,
        dog_count_female,
        year.map(|y| format!(" in {}", y)).unwrap_or_default()
    );

    DogStats {
        name_longest: name_longest.map(|(name, _)| name.to_string()),
        name_shortest: name_shortest.map(|(name, _)| name.to_string()),
        top_names_male: male.top(TOP_LIMIT),
        top_names_female: female.top(TOP_LIMIT),
        top_names_overall: overall.top(TOP_LIMIT),
        dog_count_male,
        dog_count_female,
        first_year,
        last_year,
        top_limit: TOP_LIMIT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, u64)]) -> Vec<NameCount> {
        pairs.iter().map(|(n, c)| NameCount::new(*n, *c)).collect()
    }

    #[test]
    fn test_analyze() {
        let dogs = vec![
            Dog::new("Max", Sex::Male, 2003, 2020, 3),
            Dog::new("Leila", Sex::Female, 2016, 2021, 1),
            Dog::new("Mia", Sex::Female, 2015, 2023, 2),
        ];
        let s = analyze(&dogs, None);

        assert_eq!(s.name_longest.as_deref(), Some("Leila"));
        // first of the shortest names wins
        assert_eq!(s.name_shortest.as_deref(), Some("Max"));
        assert_eq!(s.top_names_male, counts(&[("Max", 3)]));
        assert_eq!(s.top_names_female, counts(&[("Mia", 2), ("Leila", 1)]));
        assert_eq!(
            s.top_names_overall,
            counts(&[("Max", 3), ("Mia", 2), ("Leila", 1)])
        );
        assert_eq!(s.dog_count_male, 3);
        assert_eq!(s.dog_count_female, 3);
        assert_eq!(s.dog_count_overall(), 6);
        assert_eq!(s.first_year, Some(2020));
        assert_eq!(s.last_year, Some(2023));
    }

    #[test]
    fn test_analyze_with_year() {
        let dogs = vec![
            Dog::new("Max", Sex::Male, 2003, 2020, 3),
            Dog::new("Leila", Sex::Female, 2016, 2021, 1),
            Dog::new("Leila", Sex::Female, 2015, 2020, 2),
            Dog::new("Mi", Sex::Female, 2015, 2023, 2),
        ];
        let s = analyze(&dogs, Some(2020));

        assert_eq!(s.name_longest.as_deref(), Some("Leila"));
        // Mi belongs to another year
        assert_eq!(s.name_shortest.as_deref(), Some("Max"));
        assert_eq!(s.top_names_male, counts(&[("Max", 3)]));
        assert_eq!(s.top_names_female, counts(&[("Leila", 2)]));
        assert_eq!(s.top_names_overall, counts(&[("Max", 3), ("Leila", 2)]));
        assert_eq!(s.dog_count_male, 3);
        assert_eq!(s.dog_count_female, 2);
        assert_eq!(s.dog_count_overall(), 5);
        assert_eq!(s.first_year, Some(2020));
        assert_eq!(s.last_year, Some(2020));
    }

    #[test]
    fn test_unknown_names_are_skipped() {
        let dogs = vec![
            Dog::new("?", Sex::Female, 2009, 2015, 4),
            Dog::new("Bobby", Sex::Male, 2010, 2016, 1),
        ];
        let s = analyze(&dogs, None);

        assert_eq!(s.name_shortest.as_deref(), Some("Bobby"));
        assert_eq!(s.dog_count_female, 0);
        assert_eq!(s.first_year, Some(2016));
    }

    #[test]
    fn test_overall_merges_sexes_and_limits() {
        let mut dogs = vec![
            Dog::new("Kim", Sex::Male, 2010, 2020, 2),
            Dog::new("Kim", Sex::Female, 2011, 2020, 2),
        ];
        for i in 0..12 {
            dogs.push(Dog::new(format!("Dog{}", i), Sex::Male, 2010, 2020, 1));
        }
        let s = analyze(&dogs, None);

        assert_eq!(s.top_names_overall.len(), TOP_LIMIT);
        assert_eq!(s.top_names_overall[0], NameCount::new("Kim", 4));
        // ties keep dataset order
        assert_eq!(s.top_names_overall[1], NameCount::new("Dog0", 1));
        assert_eq!(s.top_names_male.len(), TOP_LIMIT);
        assert_eq!(s.top_names_male[0], NameCount::new("Kim", 2));
    }

    #[test]
    fn test_no_data_for_year() {
        let dogs = vec![Dog::new("Max", Sex::Male, 2003, 2020, 3)];
        let s = analyze(&dogs, Some(1999));

        assert!(!s.has_data());
        assert_eq!(s.name_longest, None);
        assert_eq!(s.dog_count_overall(), 0);
        assert!(s.top_names_overall.is_empty());
    }

    #[test]
    fn test_name_length_counts_characters() {
        let dogs = vec![
            Dog::new("Zoë", Sex::Female, 2010, 2020, 1),
            Dog::new("Hugo", Sex::Male, 2010, 2020, 1),
        ];
        let s = analyze(&dogs, None);
        assert_eq!(s.name_shortest.as_deref(), Some("Zoë"));
        assert_eq!(s.name_longest.as_deref(), Some("Hugo"));
    }
}
