use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use enrol_model::{ClassName, StudentRecord};

/// Cohort strategy in force for a deployment, chosen when the registry is
/// constructed.
///
/// The two policies disagree on which side of the cutoff September 1
/// itself falls: [`NumberingPolicy::YearCohort`] counts it as late,
/// [`NumberingPolicy::ClassCohort`] counts it as early. The difference is
/// historical and is preserved rather than reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberingPolicy {
    /// Cohorts are enrollment years; one dense sequence runs across the
    /// whole collection in year order.
    #[default]
    YearCohort,
    /// Cohorts are class sections; the sequence restarts at 1 in every
    /// section, with unassigned students forming their own section.
    ClassCohort,
}

/// Recompute `journal_number` and `record_number` on every record.
///
/// Deterministic in the input field values and independent of any prior
/// numbering. Records are never reordered in the collection; only the
/// derived fields change. All internal sorts are stable, so records with
/// equal keys keep their relative insertion order.
pub fn renumber(policy: NumberingPolicy, records: &mut [StudentRecord]) {
    if records.is_empty() {
        return;
    }
    match policy {
        NumberingPolicy::YearCohort => renumber_by_year(records),
        NumberingPolicy::ClassCohort => renumber_by_class(records),
    }
}

/// September 1 of the given year, the boundary between the name-ordered
/// and date-ordered halves of a cohort.
fn autumn_cutoff(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 9, 1).expect("September 1 exists in every year")
}

fn renumber_by_year(records: &mut [StudentRecord]) {
    let mut cohorts: BTreeMap<i32, Vec<usize>> = BTreeMap::new();
    for (idx, record) in records.iter().enumerate() {
        cohorts.entry(record.enrollment_year()).or_default().push(idx);
    }

    let mut sequence = 0u32;
    for (year, members) in cohorts {
        let cutoff = autumn_cutoff(year);
        let (mut early, mut late): (Vec<usize>, Vec<usize>) = members
            .into_iter()
            .partition(|&idx| records[idx].enrollment_date < cutoff);

        // Pre-cutoff enrollments run in name order, the rest in the order
        // they enrolled.
        early.sort_by(|&a, &b| records[a].full_name.cmp(&records[b].full_name));
        late.sort_by(|&a, &b| {
            let left = (records[a].enrollment_date, records[a].full_name.as_str());
            let right = (records[b].enrollment_date, records[b].full_name.as_str());
            left.cmp(&right)
        });

        for idx in early.into_iter().chain(late) {
            sequence += 1;
            assign(&mut records[idx], sequence);
        }
    }
    debug!(students = sequence, "journal numbers reassigned across year cohorts");
}

fn renumber_by_class(records: &mut [StudentRecord]) {
    let mut sections: BTreeMap<Option<ClassName>, Vec<usize>> = BTreeMap::new();
    for (idx, record) in records.iter().enumerate() {
        sections.entry(record.class_name).or_default().push(idx);
    }

    for (section, members) in sections {
        let (mut early, mut late): (Vec<usize>, Vec<usize>) =
            members.into_iter().partition(|&idx| {
                let record = &records[idx];
                record.enrollment_date <= autumn_cutoff(record.enrollment_year())
            });

        early.sort_by(|&a, &b| records[a].full_name.cmp(&records[b].full_name));
        late.sort_by(|&a, &b| records[a].enrollment_date.cmp(&records[b].enrollment_date));

        let mut sequence = 0u32;
        for idx in early.into_iter().chain(late) {
            sequence += 1;
            assign(&mut records[idx], sequence);
        }
        debug!(
            section = section.map(|class| class.as_str()).unwrap_or("unset"),
            students = sequence,
            "journal numbers reassigned within section"
        );
    }
}

fn assign(record: &mut StudentRecord, sequence: u32) {
    record.journal_number = sequence;
    record.record_number = format!("{sequence}/{}", record.enrollment_year());
}
