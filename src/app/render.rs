use crate::domain::model::{CreatedDog, Dog, DogStats, NameCount, SearchOutcome};
use colored::{ColoredString, Colorize};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};

const WIDTH: usize = 80;

/// Horizontal line across the terminal with `title` in the middle.
fn rule(title: &str, style: fn(&str) -> ColoredString) -> String {
    if title.is_empty() {
        return "─".repeat(WIDTH);
    }
    let used = title.chars().count() + 2;
    let left = WIDTH.saturating_sub(used) / 2;
    let right = WIDTH.saturating_sub(used + left);
    format!("{} {} {}", "─".repeat(left), style(title), "─".repeat(right))
}

fn centered(text: &str) -> String {
    let pad = WIDTH.saturating_sub(text.chars().count()) / 2;
    format!("{}{}", " ".repeat(pad), text.cyan().bold())
}

fn dog_table(dogs: &[Dog]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("Birth Year").add_attribute(Attribute::Bold),
        Cell::new("Sex").add_attribute(Attribute::Bold),
    ]);
    for dog in dogs {
        table.add_row(vec![
            Cell::new(&dog.name).fg(Color::Cyan),
            Cell::new(dog.birth_year).fg(Color::Green),
            Cell::new(dog.sex).fg(Color::Magenta),
        ]);
    }
    table
}

fn name_table(names: &[NameCount]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Rank", "Name", "Count"]);
    for (rank, entry) in names.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1).fg(Color::Blue),
            Cell::new(&entry.name).fg(Color::Cyan),
            Cell::new(entry.count)
                .fg(Color::Green)
                .set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

pub fn search_report(outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::NoName { name } => {
            rule(&format!("No result for name {}.", name), |t| t.red().bold())
        }
        SearchOutcome::NoYear { year, .. } => {
            rule(&format!("No result for year {}.", year), |t| t.red().bold())
        }
        SearchOutcome::Found { year, dogs } => format!(
            "{}\n{}\n{}",
            rule(&format!("Results for {}", year), |t| t.normal()),
            dog_table(dogs),
            rule("", |t| t.normal())
        ),
    }
}

pub fn stats_report(stats: &DogStats, year: Option<i32>) -> String {
    let (first_year, last_year) = match (stats.first_year, stats.last_year) {
        (Some(first), Some(last)) => (first, last),
        _ => {
            let year = year.map(|y| y.to_string()).unwrap_or_else(|| "any".to_string());
            return format!("No data available for year: {}", year).red().to_string();
        }
    };

    let mut lines = Vec::new();
    match year {
        Some(year) => lines.push(rule(&format!("Showing stats for year: {}", year), |t| {
            t.bold()
        })),
        None => lines.push(rule(
            &format!("Showing stats for years: {} to {}", first_year, last_year),
            |t| t.bold(),
        )),
    }

    let facts = [
        (
            "The longest dog name is:",
            stats.name_longest.clone().unwrap_or_default(),
        ),
        (
            "The shortest dog name is:",
            stats.name_shortest.clone().unwrap_or_default(),
        ),
        (
            "Total number of female dogs:",
            stats.dog_count_female.to_string(),
        ),
        ("Total number of male dogs:", stats.dog_count_male.to_string()),
        ("Total number of dogs:", stats.dog_count_overall().to_string()),
    ];
    for (title, value) in facts {
        lines.push(String::new());
        lines.push(rule(title, |t| t.blue()));
        lines.push(centered(&value));
    }

    let tables = [
        ("Most Common Names Overall", &stats.top_names_overall),
        ("Most Common Female Names", &stats.top_names_female),
        ("Most Common Male Names", &stats.top_names_male),
    ];
    for (title, names) in tables {
        lines.push(String::new());
        lines.push(rule(&format!("Top {} {}", stats.top_limit, title), |t| {
            t.bold()
        }));
        lines.push(name_table(names).to_string());
    }

    lines.join("\n")
}

pub fn created_report(created: &CreatedDog) -> String {
    format!(
        "{} {} ({}) [{}]",
        created.dog.name.cyan().bold(),
        created.dog.birth_year,
        created.dog.sex,
        created.picture.display()
    )
}
