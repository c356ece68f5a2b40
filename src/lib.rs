//! roster-query - house and cohort queries over pipe-delimited roster files.
//!
//! ```no_run
//! let houses = roster_query::all_houses("cohort_data.txt")?;
//! let fall = roster_query::students_by_cohort("cohort_data.txt", "Fall 2015")?;
//! # Ok::<(), roster_query::RosterError>(())
//! ```

pub mod data;
pub mod roster;
pub mod selftest;

pub use data::error::RosterError;
pub use data::loader::{load_file, parse_str};
pub use data::model::{Bucket, Cohort, DataRow, House, Record, Roster};
pub use data::query::ALL_COHORTS;
pub use roster::{
    all_data, all_houses, all_names_by_house, find_duped_last_names, get_cohort_for,
    get_housemates_for, students_by_cohort,
};
