use anyhow::{Context, Result};
use csv::WriterBuilder;

const HOUSES: [(&str, &str); 5] = [
    ("Dumbledore's Army", "Dumbledore"),
    ("Gryffindor", "McGonagall"),
    ("Hufflepuff", "Sprout"),
    ("Ravenclaw", "Flitwick"),
    ("Slytherin", "Snape"),
];

const COHORTS: [&str; 4] = ["Fall 2015", "Winter 2016", "Spring 2016", "Summer 2016"];

const FIRST_NAMES: [&str; 12] = [
    "Alicia", "Cormac", "Dean", "Hannah", "Lee", "Marcus", "Padma", "Roger", "Susan", "Terry",
    "Vincent", "Zacharias",
];

const LAST_NAMES: [&str; 9] = [
    "Abbott", "Bones", "Boot", "Creevey", "Davies", "Patil", "Pucey", "Spinnet", "Weasley",
];

const INSTRUCTORS: [(&str, &str); 4] = [
    ("Minerva", "McGonagall"),
    ("Severus", "Snape"),
    ("Filius", "Flitwick"),
    ("Pomona", "Sprout"),
];

const GHOSTS: [(&str, &str); 3] = [
    ("Nearly Headless", "Nick"),
    ("Fat", "Friar"),
    ("Grey", "Lady"),
];

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "cohort_data.txt".to_string());

    let mut writer = WriterBuilder::new()
        .delimiter(b'|')
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;

    // (i % 12, 7i % 9) only repeats after 36 rows: full names stay unique
    // while surnames repeat.
    let mut students = 0usize;
    for (h, &(house, advisor)) in HOUSES.iter().enumerate() {
        for (c, &cohort) in COHORTS.iter().enumerate() {
            let i = h * COHORTS.len() + c;
            let first = FIRST_NAMES[i % FIRST_NAMES.len()];
            let last = LAST_NAMES[(i * 7) % LAST_NAMES.len()];
            writer.write_record([first, last, house, advisor, cohort])?;
            students += 1;
        }
    }

    for (first, last) in INSTRUCTORS {
        writer.write_record([first, last, "", "", "I"])?;
    }
    for (first, last) in GHOSTS {
        writer.write_record([first, last, "", "", "G"])?;
    }
    writer.flush().context("flushing roster")?;

    println!(
        "Wrote {} students, {} instructors and {} ghosts to {output_path}",
        students,
        INSTRUCTORS.len(),
        GHOSTS.len()
    );
    Ok(())
}
