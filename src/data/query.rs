use std::collections::{BTreeMap, BTreeSet};

use super::model::{Bucket, DataRow, Roster};

/// Cohort selector meaning "every student".
pub const ALL_COHORTS: &str = "All";

/// Distinct non-empty house names of students.
pub fn houses(roster: &Roster) -> BTreeSet<String> {
    roster
        .students()
        .filter(|r| !r.house.is_empty())
        .map(|r| r.house.clone())
        .collect()
}

/// Sorted full names of students in `cohort`, or of every student when
/// `cohort` is [`ALL_COHORTS`].
pub fn students_by_cohort(roster: &Roster, cohort: &str) -> Vec<String> {
    let mut names: Vec<String> = roster
        .students()
        .filter(|r| cohort == ALL_COHORTS || r.cohort.as_str() == cohort)
        .map(|r| r.full_name())
        .collect();
    names.sort();
    names
}

/// Seven sorted rosters in [`Bucket::ORDER`].
///
/// Students whose house is not one of the five known names belong to no
/// bucket and are left out.
pub fn names_by_house(roster: &Roster) -> Vec<Vec<String>> {
    let mut buckets: BTreeMap<Bucket, Vec<String>> =
        Bucket::ORDER.iter().map(|b| (*b, Vec::new())).collect();

    for record in &roster.records {
        match Bucket::for_record(record) {
            Some(bucket) => buckets.entry(bucket).or_default().push(record.full_name()),
            None => log::warn!(
                "Dropping {} from house rosters: unknown house {:?}",
                record.full_name(),
                record.house
            ),
        }
    }

    buckets
        .into_values()
        .map(|mut names| {
            names.sort();
            names
        })
        .collect()
}

/// Every record as `(full_name, house, advisor, cohort)`, in file order.
pub fn all_data(roster: &Roster) -> Vec<DataRow> {
    roster.records.iter().map(|r| r.to_row()).collect()
}

/// Cohort of the first record named `name`.
pub fn cohort_for(roster: &Roster, name: &str) -> Option<String> {
    roster.find(name).map(|r| r.cohort.to_string())
}

/// Last names carried by two or more records.
pub fn duped_last_names(roster: &Roster) -> BTreeSet<String> {
    let mut seen = BTreeSet::new();
    let mut dupes = BTreeSet::new();
    for surname in roster.records.iter().filter_map(|r| r.surname()) {
        if !seen.insert(surname.clone()) {
            dupes.insert(surname);
        }
    }
    dupes
}

/// Everyone else with the same house and cohort as `name`. Empty when
/// `name` is not on the roster.
pub fn housemates_for(roster: &Roster, name: &str) -> BTreeSet<String> {
    let Some(target) = roster.find(name) else {
        return BTreeSet::new();
    };

    roster
        .records
        .iter()
        .filter(|r| r.house == target.house && r.cohort == target.cohort)
        .map(|r| r.full_name())
        .filter(|full_name| full_name != name)
        .collect()
}
