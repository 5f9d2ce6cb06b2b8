use crate::domain::model::{Dog, Sex, SyntheticDog};
use crate::utils::error::{Result, WuffError};
use rand::seq::SliceRandom;
use rand::Rng;
use std::path::Path;

/// Makes up a dog: a random sex, then a name and a birth year drawn
/// independently from real dogs of that sex.
pub fn synthesize<'a, I, R>(dogs: I, year: Option<i32>, rng: &mut R) -> Result<SyntheticDog>
where
    I: IntoIterator<Item = &'a Dog>,
    R: Rng + ?Sized,
{
    let sex = if rng.gen_bool(0.5) {
        Sex::Male
    } else {
        Sex::Female
    };

    let pool: Vec<&Dog> = dogs
        .into_iter()
        .filter(|dog| dog.sex == sex)
        .filter(|dog| year.map_or(true, |y| dog.record_year == y))
        .filter(|dog| dog.has_known_name())
        .collect();
    tracing::debug!("picking a {} dog from {} candidates", sex, pool.len());

    let no_match = || WuffError::NoMatchingDogs {
        sex: sex.to_string(),
        year,
    };
    let name = pool.choose(rng).ok_or_else(no_match)?.name.clone();
    let birth_year = pool.choose(rng).ok_or_else(no_match)?.birth_year;

    Ok(SyntheticDog {
        name,
        sex,
        birth_year,
    })
}

/// Extension of `name` with a leading dot, as written.
fn suffix_of(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext))
}

/// Picks a random picture whose suffix is one of `allowed_suffixes`.
pub fn pick_image<R>(names: &[String], allowed_suffixes: &[String], rng: &mut R) -> Result<String>
where
    R: Rng + ?Sized,
{
    let images: Vec<&String> = names
        .iter()
        .filter(|name| {
            suffix_of(name).is_some_and(|suffix| {
                allowed_suffixes
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(&suffix))
            })
        })
        .collect();
    tracing::debug!("{} of {} files are pictures", images.len(), names.len());

    images
        .choose(rng)
        .map(|name| name.to_string())
        .ok_or(WuffError::NoImages)
}

/// File name the picture of `dog` is saved under: `{name}_{birth_year}{ext}`.
pub fn picture_file_name(dog: &SyntheticDog, image_name: &str) -> String {
    let suffix = suffix_of(image_name).unwrap_or_default();
    let name: String = dog
        .name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{}_{}{}", name, dog.birth_year, suffix)
}
