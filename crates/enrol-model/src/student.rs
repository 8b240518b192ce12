use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::categories::{ClassName, Dormitory, Program};

/// Where a student lives during the school year. Exactly one of the three
/// applies to every student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Residency {
    /// Housed in one of the institution's dormitories.
    Resident(Dormitory),
    /// Lives in town with their family.
    Local,
    /// Travels in from outside town.
    Commuter,
}

/// Intake data collected by the enrollment form.
///
/// The form layer guarantees every field is populated before this value is
/// handed to the registry; the core performs no validation of its own.
#[derive(Debug, Clone)]
pub struct Enrollment {
    pub full_name: String,
    pub birth_place: String,
    pub birth_date: NaiveDate,
    pub mother_name: String,
    pub address: String,
    pub enrollment_date: NaiveDate,
    pub program: Option<Program>,
    pub class_name: Option<ClassName>,
    pub residency: Residency,
}

/// One enrolled student.
///
/// `journal_number` and `record_number` are owned by the numbering engine
/// and rewritten wholesale on every renumbering pass; everything else is
/// caller-supplied and immutable for the lifetime of the record.
///
/// `dormitory_name` is present iff `is_resident` is true. The invariant is
/// established in [`StudentRecord::new`], the only construction path apart
/// from deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub journal_number: u32,
    pub record_number: String,
    pub full_name: String,
    pub birth_place: String,
    pub birth_date: NaiveDate,
    pub mother_name: String,
    pub address: String,
    pub enrollment_date: NaiveDate,
    pub program: Option<Program>,
    pub class_name: Option<ClassName>,
    pub is_resident: bool,
    pub dormitory_name: Option<Dormitory>,
    pub is_local: bool,
}

impl StudentRecord {
    /// Build an un-numbered record from intake data.
    ///
    /// The derived identifiers stay zeroed until the next renumbering
    /// pass; callers must not persist a record that has not been through
    /// the engine.
    pub fn new(enrollment: Enrollment) -> Self {
        let (is_resident, dormitory_name, is_local) = match enrollment.residency {
            Residency::Resident(dormitory) => (true, Some(dormitory), false),
            Residency::Local => (false, None, true),
            Residency::Commuter => (false, None, false),
        };
        Self {
            journal_number: 0,
            record_number: String::new(),
            full_name: enrollment.full_name,
            birth_place: enrollment.birth_place,
            birth_date: enrollment.birth_date,
            mother_name: enrollment.mother_name,
            address: enrollment.address,
            enrollment_date: enrollment.enrollment_date,
            program: enrollment.program,
            class_name: enrollment.class_name,
            is_resident,
            dormitory_name,
            is_local,
        }
    }

    /// Calendar year of enrollment; the cohort key and the suffix of the
    /// record number.
    pub fn enrollment_year(&self) -> i32 {
        self.enrollment_date.year()
    }

    /// Residency category derived from the stored flags.
    pub fn residency(&self) -> Residency {
        match (self.is_resident, self.dormitory_name, self.is_local) {
            (true, Some(dormitory), _) => Residency::Resident(dormitory),
            (false, _, true) => Residency::Local,
            _ => Residency::Commuter,
        }
    }
}
