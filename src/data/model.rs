use std::fmt;

// ---------------------------------------------------------------------------
// Cohort – term label or staff sentinel
// ---------------------------------------------------------------------------

/// The cohort column of a record.
///
/// On disk instructors and ghosts are marked with the single letters `I` and
/// `G`; every other value is a term label such as `"Fall 2015"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cohort {
    Instructor,
    Ghost,
    Term(String),
}

impl Cohort {
    pub const INSTRUCTOR_MARKER: &'static str = "I";
    pub const GHOST_MARKER: &'static str = "G";

    /// Interpret a raw cohort field.
    pub fn parse(raw: &str) -> Self {
        match raw {
            Self::INSTRUCTOR_MARKER => Cohort::Instructor,
            Self::GHOST_MARKER => Cohort::Ghost,
            term => Cohort::Term(term.to_string()),
        }
    }

    /// Students are everyone who is neither an instructor nor a ghost.
    pub fn is_student(&self) -> bool {
        matches!(self, Cohort::Term(_))
    }

    /// The cohort as it appears in the file.
    pub fn as_str(&self) -> &str {
        match self {
            Cohort::Instructor => Self::INSTRUCTOR_MARKER,
            Cohort::Ghost => Self::GHOST_MARKER,
            Cohort::Term(term) => term,
        }
    }
}

impl fmt::Display for Cohort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// House
// ---------------------------------------------------------------------------

/// The five student affiliations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum House {
    DumbledoresArmy,
    Gryffindor,
    Hufflepuff,
    Ravenclaw,
    Slytherin,
}

impl House {
    pub const ALL: [House; 5] = [
        House::DumbledoresArmy,
        House::Gryffindor,
        House::Hufflepuff,
        House::Ravenclaw,
        House::Slytherin,
    ];

    /// Exact, case-sensitive match against the canonical house names.
    pub fn from_name(name: &str) -> Option<Self> {
        House::ALL.into_iter().find(|h| h.name() == name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            House::DumbledoresArmy => "Dumbledore's Army",
            House::Gryffindor => "Gryffindor",
            House::Hufflepuff => "Hufflepuff",
            House::Ravenclaw => "Ravenclaw",
            House::Slytherin => "Slytherin",
        }
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Bucket – one roster of `names_by_house`
// ---------------------------------------------------------------------------

/// Roster buckets, declared in output order so `Ord` matches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bucket {
    House(House),
    Ghosts,
    Instructors,
}

impl Bucket {
    pub const ORDER: [Bucket; 7] = [
        Bucket::House(House::DumbledoresArmy),
        Bucket::House(House::Gryffindor),
        Bucket::House(House::Hufflepuff),
        Bucket::House(House::Ravenclaw),
        Bucket::House(House::Slytherin),
        Bucket::Ghosts,
        Bucket::Instructors,
    ];

    /// Instructor beats ghost beats house. `None` when a student's house
    /// is not one of the five known names.
    pub fn for_record(record: &Record) -> Option<Self> {
        match record.cohort {
            Cohort::Instructor => Some(Bucket::Instructors),
            Cohort::Ghost => Some(Bucket::Ghosts),
            Cohort::Term(_) => House::from_name(&record.house).map(Bucket::House),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Bucket::House(house) => house.name(),
            Bucket::Ghosts => "Ghosts",
            Bucket::Instructors => "Instructors",
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one line of the roster file
// ---------------------------------------------------------------------------

/// `(full_name, house, advisor, cohort)` as returned by `all_data`.
pub type DataRow = (String, String, String, String);

/// A single person (one line of the source file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub first_name: String,
    pub last_name: String,
    /// Raw house column; empty for instructors and ghosts.
    pub house: String,
    pub advisor: String,
    pub cohort: Cohort,
}

impl Record {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Trailing whitespace-separated token of the full name.
    pub fn surname(&self) -> Option<String> {
        self.full_name()
            .split_whitespace()
            .next_back()
            .map(str::to_string)
    }

    pub fn to_row(&self) -> DataRow {
        (
            self.full_name(),
            self.house.clone(),
            self.advisor.clone(),
            self.cohort.to_string(),
        )
    }
}

// ---------------------------------------------------------------------------
// Roster – the complete loaded file
// ---------------------------------------------------------------------------

/// Every record of a roster file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pub records: Vec<Record>,
}

impl Roster {
    pub fn from_records(records: Vec<Record>) -> Self {
        Roster { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record whose full name equals `name` exactly.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.full_name() == name)
    }

    pub fn students(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(|r| r.cohort.is_student())
    }
}
