use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::data::model::{Bucket, Roster};
use crate::data::query::{self, ALL_COHORTS};

// ---------------------------------------------------------------------------
// Summary – what the roster contains
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct BucketSize {
    pub bucket: &'static str,
    pub size: usize,
}

/// Aggregate view of a roster, printed as JSON by the self-test binary.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub records: usize,
    pub houses: BTreeSet<String>,
    /// Term label → number of students.
    pub cohorts: BTreeMap<String, usize>,
    pub buckets: Vec<BucketSize>,
    pub duped_last_names: BTreeSet<String>,
}

impl Summary {
    pub fn of(roster: &Roster) -> Self {
        let mut cohorts: BTreeMap<String, usize> = BTreeMap::new();
        for record in roster.students() {
            *cohorts.entry(record.cohort.to_string()).or_default() += 1;
        }

        let buckets = Bucket::ORDER
            .iter()
            .zip(query::names_by_house(roster))
            .map(|(bucket, names)| BucketSize {
                bucket: bucket.label(),
                size: names.len(),
            })
            .collect();

        Summary {
            records: roster.len(),
            houses: query::houses(roster),
            cohorts,
            buckets,
            duped_last_names: query::duped_last_names(roster),
        }
    }
}

// ---------------------------------------------------------------------------
// Checks – properties every well-formed roster satisfies
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Check {
    pub name: &'static str,
    /// Empty when the check passed.
    pub failures: Vec<String>,
}

impl Check {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Report {
    pub summary: Summary,
    pub checks: Vec<Check>,
}

impl Report {
    pub fn run(roster: &Roster) -> Self {
        let checks = vec![
            check("houses_exclude_staff_markers", houses_exclude_staff_markers(roster)),
            check("all_cohort_is_union_of_terms", all_cohort_is_union_of_terms(roster)),
            check("buckets_cover_known_records", buckets_cover_known_records(roster)),
            check("cohort_lookup_matches_records", cohort_lookup_matches_records(roster)),
            check("duped_last_names_match_counts", duped_last_names_match_counts(roster)),
            check("housemates_share_house_and_cohort", housemates_share_house_and_cohort(roster)),
        ];
        Report {
            summary: Summary::of(roster),
            checks,
        }
    }

    pub fn passed(&self) -> bool {
        self.checks.iter().all(Check::passed)
    }

    pub fn failed_checks(&self) -> impl Iterator<Item = &Check> {
        self.checks.iter().filter(|c| !c.passed())
    }
}

fn check(name: &'static str, failures: Vec<String>) -> Check {
    Check { name, failures }
}

fn houses_exclude_staff_markers(roster: &Roster) -> Vec<String> {
    query::houses(roster)
        .into_iter()
        .filter(|h| h.is_empty() || h == "I" || h == "G")
        .map(|h| format!("unexpected house {h:?}"))
        .collect()
}

fn all_cohort_is_union_of_terms(roster: &Roster) -> Vec<String> {
    let terms: BTreeSet<String> = roster.students().map(|r| r.cohort.to_string()).collect();
    let mut union: Vec<String> = terms
        .iter()
        .flat_map(|term| query::students_by_cohort(roster, term))
        .collect();
    union.sort();

    let all = query::students_by_cohort(roster, ALL_COHORTS);
    if all == union {
        Vec::new()
    } else {
        vec![format!(
            "{ALL_COHORTS} has {} students, cohorts add up to {}",
            all.len(),
            union.len()
        )]
    }
}

fn buckets_cover_known_records(roster: &Roster) -> Vec<String> {
    let expected = roster
        .records
        .iter()
        .filter(|r| Bucket::for_record(r).is_some())
        .count();
    let total: usize = query::names_by_house(roster).iter().map(Vec::len).sum();
    if total == expected {
        Vec::new()
    } else {
        vec![format!("rosters hold {total} names, expected {expected}")]
    }
}

fn cohort_lookup_matches_records(roster: &Roster) -> Vec<String> {
    let mut failures = Vec::new();
    let mut seen = BTreeSet::new();
    for record in &roster.records {
        let name = record.full_name();
        if !seen.insert(name.clone()) {
            failures.push(format!("{name} appears more than once"));
            continue;
        }
        let found = query::cohort_for(roster, &name);
        if found.as_deref() != Some(record.cohort.as_str()) {
            failures.push(format!("{name}: cohort lookup gave {found:?}"));
        }
    }
    failures
}

fn duped_last_names_match_counts(roster: &Roster) -> Vec<String> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for surname in roster.records.iter().filter_map(|r| r.surname()) {
        *counts.entry(surname).or_default() += 1;
    }
    let expected: BTreeSet<String> = counts
        .into_iter()
        .filter(|(_, n)| *n >= 2)
        .map(|(surname, _)| surname)
        .collect();

    let found = query::duped_last_names(roster);
    expected
        .symmetric_difference(&found)
        .map(|surname| format!("{surname} misclassified as duplicated/unique"))
        .collect()
}

fn housemates_share_house_and_cohort(roster: &Roster) -> Vec<String> {
    let mut failures = Vec::new();
    for record in &roster.records {
        let name = record.full_name();
        for mate in query::housemates_for(roster, &name) {
            if mate == name {
                failures.push(format!("{name} is listed as their own housemate"));
                continue;
            }
            match roster.find(&mate) {
                Some(other) if other.house == record.house && other.cohort == record.cohort => {}
                _ => failures.push(format!("{mate} is not a housemate of {name}")),
            }
        }
    }
    failures
}
