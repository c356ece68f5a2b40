//! File-level queries.
//!
//! Every function here opens `filename`, parses it completely and closes it
//! again before answering. Nothing is cached between calls. To run several
//! queries over one file, call [`load_file`](crate::data::loader::load_file)
//! once and use the functions in [`crate::data::query`].

use std::collections::BTreeSet;
use std::path::Path;

use crate::data::error::Result;
use crate::data::loader::load_file;
use crate::data::model::DataRow;
use crate::data::query;

/// Distinct house names of students.
pub fn all_houses(filename: impl AsRef<Path>) -> Result<BTreeSet<String>> {
    Ok(query::houses(&load_file(filename.as_ref())?))
}

/// Sorted full names of the students in `cohort`. Pass
/// [`ALL_COHORTS`](crate::ALL_COHORTS) for every student.
pub fn students_by_cohort(filename: impl AsRef<Path>, cohort: &str) -> Result<Vec<String>> {
    Ok(query::students_by_cohort(&load_file(filename.as_ref())?, cohort))
}

/// Rosters for Dumbledore's Army, Gryffindor, Hufflepuff, Ravenclaw,
/// Slytherin, ghosts and instructors, in that order, each sorted.
pub fn all_names_by_house(filename: impl AsRef<Path>) -> Result<Vec<Vec<String>>> {
    Ok(query::names_by_house(&load_file(filename.as_ref())?))
}

/// `(full_name, house, advisor, cohort)` for every line, in file order.
pub fn all_data(filename: impl AsRef<Path>) -> Result<Vec<DataRow>> {
    Ok(query::all_data(&load_file(filename.as_ref())?))
}

/// Cohort of `name` (`I`/`G` for staff), or `None` if nobody has that name.
pub fn get_cohort_for(filename: impl AsRef<Path>, name: &str) -> Result<Option<String>> {
    Ok(query::cohort_for(&load_file(filename.as_ref())?, name))
}

/// Last names shared by two or more people, staff included.
pub fn find_duped_last_names(filename: impl AsRef<Path>) -> Result<BTreeSet<String>> {
    Ok(query::duped_last_names(&load_file(filename.as_ref())?))
}

/// Others in the same house and cohort as `name`; empty if `name` is absent.
pub fn get_housemates_for(filename: impl AsRef<Path>, name: &str) -> Result<BTreeSet<String>> {
    Ok(query::housemates_for(&load_file(filename.as_ref())?, name))
}
