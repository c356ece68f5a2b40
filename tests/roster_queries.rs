//! File-level query tests against temporary roster files.

use std::collections::BTreeSet;
use std::io::Write;

use rstest::{fixture, rstest};
use tempfile::NamedTempFile;

use roster_query::{
    all_data, all_houses, all_names_by_house, find_duped_last_names, get_cohort_for,
    get_housemates_for, students_by_cohort, RosterError, ALL_COHORTS,
};

const COHORT_DATA: &str = "\
Harry|Potter|Gryffindor|McGonagall|Fall 2015
Ron|Weasley|Gryffindor|McGonagall|Fall 2015
Hermione|Granger|Gryffindor|McGonagall|Fall 2015
Ginny|Weasley|Gryffindor|McGonagall|Spring 2016
Colin|Creevey|Gryffindor|McGonagall|Winter 2016
Dennis|Creevey|Hufflepuff|Sprout|Summer 2016
Padma|Patil|Ravenclaw|Flitwick|Winter 2016
Parvati|Patil|Gryffindor|McGonagall|Winter 2016
Cho|Chang|Ravenclaw|Flitwick|Fall 2015
Hannah|Abbott|Hufflepuff|Sprout|Winter 2016
Luna|Lovegood|Dumbledore's Army|Dumbledore|Summer 2016
Draco|Malfoy|Slytherin|Snape|Fall 2015
Theodore|Nott|Slytherin|Snape|Fall 2015
Minerva|McGonagall|||I
Severus|Snape|||I
Filius|Flitwick|||I
Nearly Headless|Nick|||G
Fat|Friar|||G
";

fn write_roster(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

fn names(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[fixture]
fn cohort_file() -> NamedTempFile {
    write_roster(COHORT_DATA)
}

// =========================================================================
// all_houses
// =========================================================================

#[rstest]
fn all_houses_lists_the_five_houses(cohort_file: NamedTempFile) {
    let houses = all_houses(cohort_file.path()).unwrap();
    assert_eq!(
        houses,
        names(&[
            "Dumbledore's Army",
            "Gryffindor",
            "Hufflepuff",
            "Ravenclaw",
            "Slytherin"
        ])
    );
}

#[rstest]
fn all_houses_ignores_staff_with_a_house() {
    let file = write_roster(
        "Harry|Potter|Gryffindor|McGonagall|Fall 2015\n\
         Horace|Slughorn|Slytherin||I\n\
         Grey|Lady|Ravenclaw||G\n",
    );
    assert_eq!(all_houses(file.path()).unwrap(), names(&["Gryffindor"]));
}

// =========================================================================
// students_by_cohort
// =========================================================================

#[rstest]
#[case("Fall 2015", &["Cho Chang", "Draco Malfoy", "Harry Potter", "Hermione Granger", "Ron Weasley", "Theodore Nott"])]
#[case("Winter 2016", &["Colin Creevey", "Hannah Abbott", "Padma Patil", "Parvati Patil"])]
#[case("Spring 2016", &["Ginny Weasley"])]
#[case("Summer 2016", &["Dennis Creevey", "Luna Lovegood"])]
#[case("Autumn 1991", &[])]
#[case("I", &[])]
#[case("G", &[])]
fn students_by_cohort_matches_exact_label(
    cohort_file: NamedTempFile,
    #[case] cohort: &str,
    #[case] expected: &[&str],
) {
    assert_eq!(
        students_by_cohort(cohort_file.path(), cohort).unwrap(),
        expected
    );
}

#[rstest]
fn students_by_cohort_all_is_union_of_cohorts(cohort_file: NamedTempFile) {
    let all = students_by_cohort(cohort_file.path(), ALL_COHORTS).unwrap();
    assert_eq!(all.len(), 13);
    assert_eq!(all.first().map(String::as_str), Some("Cho Chang"));
    assert_eq!(all.last().map(String::as_str), Some("Theodore Nott"));

    let mut union = Vec::new();
    for cohort in ["Fall 2015", "Winter 2016", "Spring 2016", "Summer 2016"] {
        union.extend(students_by_cohort(cohort_file.path(), cohort).unwrap());
    }
    union.sort();
    assert_eq!(all, union);
}

// =========================================================================
// all_names_by_house
// =========================================================================

#[rstest]
fn all_names_by_house_returns_seven_sorted_rosters(cohort_file: NamedTempFile) {
    let rosters = all_names_by_house(cohort_file.path()).unwrap();
    assert_eq!(rosters.len(), 7);
    assert_eq!(rosters[0], ["Luna Lovegood"]);
    assert_eq!(
        rosters[1],
        [
            "Colin Creevey",
            "Ginny Weasley",
            "Harry Potter",
            "Hermione Granger",
            "Parvati Patil",
            "Ron Weasley"
        ]
    );
    assert_eq!(rosters[2], ["Dennis Creevey", "Hannah Abbott"]);
    assert_eq!(rosters[3], ["Cho Chang", "Padma Patil"]);
    assert_eq!(rosters[4], ["Draco Malfoy", "Theodore Nott"]);
    assert_eq!(rosters[5], ["Fat Friar", "Nearly Headless Nick"]);
    assert_eq!(
        rosters[6],
        ["Filius Flitwick", "Minerva McGonagall", "Severus Snape"]
    );

    let total: usize = rosters.iter().map(Vec::len).sum();
    assert_eq!(total, COHORT_DATA.lines().count());
}

#[rstest]
fn all_names_by_house_drops_unknown_house() {
    let file = write_roster(
        "Viktor|Krum|Durmstrang|Karkaroff|Fall 2015\n\
         Cedric|Diggory|Hufflepuff|Sprout|Fall 2015\n",
    );
    let rosters = all_names_by_house(file.path()).unwrap();
    assert_eq!(rosters[2], ["Cedric Diggory"]);
    assert_eq!(rosters.iter().map(Vec::len).sum::<usize>(), 1);
}

// =========================================================================
// all_data
// =========================================================================

#[rstest]
fn all_data_single_line() {
    let file = write_roster("A|B|Slytherin|Snape|Fall 2015\n");
    assert_eq!(
        all_data(file.path()).unwrap(),
        vec![(
            "A B".to_string(),
            "Slytherin".to_string(),
            "Snape".to_string(),
            "Fall 2015".to_string()
        )]
    );
}

#[rstest]
fn all_data_preserves_file_order(cohort_file: NamedTempFile) {
    let rows = all_data(cohort_file.path()).unwrap();
    assert_eq!(rows.len(), COHORT_DATA.lines().count());
    assert_eq!(rows[0].0, "Harry Potter");
    assert_eq!(rows[13].0, "Minerva McGonagall");
    assert_eq!(rows[13].1, "");
    assert_eq!(rows[13].3, "I");
    assert_eq!(rows[17].0, "Fat Friar");
}

// =========================================================================
// get_cohort_for
// =========================================================================

#[rstest]
#[case("Harry Potter", Some("Fall 2015"))]
#[case("Hannah Abbott", Some("Winter 2016"))]
#[case("Severus Snape", Some("I"))]
#[case("Nearly Headless Nick", Some("G"))]
#[case("harry potter", None)]
#[case("Someone else", None)]
fn get_cohort_for_exact_name(
    cohort_file: NamedTempFile,
    #[case] name: &str,
    #[case] expected: Option<&str>,
) {
    assert_eq!(
        get_cohort_for(cohort_file.path(), name).unwrap().as_deref(),
        expected
    );
}

// =========================================================================
// find_duped_last_names
// =========================================================================

#[rstest]
fn find_duped_last_names_in_cohort_data(cohort_file: NamedTempFile) {
    assert_eq!(
        find_duped_last_names(cohort_file.path()).unwrap(),
        names(&["Creevey", "Patil", "Weasley"])
    );
}

#[rstest]
fn find_duped_last_names_counts_staff_too() {
    let file = write_roster(
        "Severus|Snape|||I\n\
         Sam|Snape|Slytherin|Snape|Fall 2015\n",
    );
    assert_eq!(
        find_duped_last_names(file.path()).unwrap(),
        names(&["Snape"])
    );
}

// =========================================================================
// get_housemates_for
// =========================================================================

#[rstest]
fn get_housemates_for_two_person_roster() {
    let file = write_roster(
        "Harry|Potter|Gryffindor|McGonagall|Fall 2015\n\
         Ron|Weasley|Gryffindor|McGonagall|Fall 2015\n",
    );
    assert_eq!(
        get_housemates_for(file.path(), "Harry Potter").unwrap(),
        names(&["Ron Weasley"])
    );
}

#[rstest]
fn get_housemates_for_excludes_other_cohorts_and_self(cohort_file: NamedTempFile) {
    let mates = get_housemates_for(cohort_file.path(), "Hermione Granger").unwrap();
    assert_eq!(mates, names(&["Harry Potter", "Ron Weasley"]));
    assert!(!mates.contains("Hermione Granger"));
}

#[rstest]
fn get_housemates_for_unknown_name_is_empty(cohort_file: NamedTempFile) {
    assert!(get_housemates_for(cohort_file.path(), "Tom Riddle")
        .unwrap()
        .is_empty());
}

// =========================================================================
// Errors
// =========================================================================

#[rstest]
fn missing_file_surfaces_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let err = all_houses(&path).unwrap_err();
    assert!(err.is_not_found());
    assert!(matches!(err, RosterError::Io { .. }));
    assert!(get_cohort_for(&path, "Harry Potter").is_err());
}

#[rstest]
#[case("Harry|Potter|Gryffindor|Fall 2015\n", 1, 4)]
#[case("A|B|Slytherin|Snape|Fall 2015\nC|D|E|F|G|H\n", 2, 6)]
#[case("A|B|Slytherin|Snape|Fall 2015\nlonely\n", 2, 1)]
#[case("A|B|Slytherin|Snape|Fall 2015\n\nC|D|Ravenclaw|Flitwick|Fall 2015\n", 2, 1)]
#[case("A|B|Slytherin|Snape|Fall 2015\n\n", 2, 1)]
fn malformed_line_is_a_parse_error(
    #[case] content: &str,
    #[case] expected_line: u64,
    #[case] expected_found: usize,
) {
    let file = write_roster(content);
    match all_data(file.path()).unwrap_err() {
        RosterError::FieldCount { line, found } => {
            assert_eq!(line, expected_line);
            assert_eq!(found, expected_found);
        }
        other => panic!("expected FieldCount, got {other:?}"),
    }
    // Every query fails the same way; none return partial results.
    assert!(get_housemates_for(file.path(), "A B").is_err());
    assert!(all_names_by_house(file.path()).is_err());
}
