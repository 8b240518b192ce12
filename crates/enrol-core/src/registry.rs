use anyhow::{Context, Result};
use thiserror::Error;
use tracing::info;

use enrol_model::{Enrollment, StudentRecord};
use enrol_report::summarize;
use enrol_store::JsonStore;

use crate::numbering::{NumberingPolicy, renumber};

/// Caller-side misuse of the registry surface. Everything else that can
/// fail is a store failure and arrives wrapped from `enrol-store`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no student at position {0}")]
    NoSuchStudent(usize),
}

/// Identifiers assigned to a newly enrolled student, reported back to the
/// operator after a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentReceipt {
    pub journal_number: u32,
    pub record_number: String,
}

/// Owns the in-memory collection and keeps it numbered and persisted.
///
/// Every mutation renumbers the whole collection before it is written
/// out, so the store never sees stale identifiers. A failed save leaves
/// the in-memory state valid and renumbered; nothing is rolled back.
pub struct Registry {
    records: Vec<StudentRecord>,
    policy: NumberingPolicy,
    store: JsonStore,
}

impl Registry {
    /// Load the persisted collection and bring its numbering up to date.
    pub fn open(policy: NumberingPolicy, store: JsonStore) -> Self {
        let mut records = store.load();
        renumber(policy, &mut records);
        info!(students = records.len(), "registry opened");
        Self {
            records,
            policy,
            store,
        }
    }

    /// Read-only view of the current collection.
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Append a new student, renumber the collection, persist it.
    pub fn add_student(&mut self, enrollment: Enrollment) -> Result<EnrollmentReceipt> {
        self.records.push(StudentRecord::new(enrollment));
        let position = self.records.len() - 1;
        renumber(self.policy, &mut self.records);
        self.persist()?;

        // Renumbering never reorders the collection, so the appended
        // record is still at the tail.
        let record = &self.records[position];
        info!(
            student = %record.full_name,
            journal = record.journal_number,
            record_number = %record.record_number,
            "student enrolled"
        );
        Ok(EnrollmentReceipt {
            journal_number: record.journal_number,
            record_number: record.record_number.clone(),
        })
    }

    /// Remove the student at `position`, renumber, persist. Returns the
    /// removed record so the caller can confirm who was dropped.
    pub fn remove_student(&mut self, position: usize) -> Result<StudentRecord> {
        if position >= self.records.len() {
            return Err(RegistryError::NoSuchStudent(position).into());
        }
        let removed = self.records.remove(position);
        renumber(self.policy, &mut self.records);
        self.persist()?;
        info!(
            student = %removed.full_name,
            journal = removed.journal_number,
            "student removed"
        );
        Ok(removed)
    }

    /// Drop the in-memory state, re-read the store, and renumber.
    pub fn refresh(&mut self) -> &[StudentRecord] {
        self.records = self.store.load();
        renumber(self.policy, &mut self.records);
        &self.records
    }

    /// Render the statistics report for the current collection.
    pub fn statistics_report(&self) -> String {
        summarize(&self.records).to_string()
    }

    fn persist(&self) -> Result<()> {
        self.store
            .save(&self.records)
            .with_context(|| format!("saving registry to {}", self.store.path().display()))
    }
}
