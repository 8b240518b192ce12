use chrono::NaiveDate;

use enrol_core::{NumberingPolicy, renumber};
use enrol_model::{ClassName, Enrollment, Residency, StudentRecord};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn student_in_class(name: &str, enrolled: NaiveDate, class: Option<ClassName>) -> StudentRecord {
    StudentRecord::new(Enrollment {
        full_name: name.to_string(),
        birth_place: "Miskolc".to_string(),
        birth_date: date(2008, 11, 5),
        mother_name: "Balogh Agnes".to_string(),
        address: "Arany Janos utca 9, Miskolc".to_string(),
        enrollment_date: enrolled,
        program: None,
        class_name: class,
        residency: Residency::Commuter,
    })
}

fn student(name: &str, enrolled: NaiveDate) -> StudentRecord {
    student_in_class(name, enrolled, None)
}

fn numbers_by_name<'a>(records: &'a [StudentRecord], name: &str) -> (u32, &'a str) {
    let record = records
        .iter()
        .find(|record| record.full_name == name)
        .expect("student present");
    (record.journal_number, record.record_number.as_str())
}

#[test]
fn year_cohort_orders_early_by_name_then_late_by_date() {
    // Inserted out of order on purpose; the engine must not care.
    let mut records = vec![
        student("Csilla", date(2024, 9, 5)),
        student("Anna", date(2024, 6, 1)),
        student("Bela", date(2024, 9, 1)),
    ];

    renumber(NumberingPolicy::YearCohort, &mut records);

    assert_eq!(numbers_by_name(&records, "Anna"), (1, "1/2024"));
    assert_eq!(numbers_by_name(&records, "Bela"), (2, "2/2024"));
    assert_eq!(numbers_by_name(&records, "Csilla"), (3, "3/2024"));
}

#[test]
fn year_cohort_early_partition_is_name_ordered() {
    let mut records = vec![
        student("Zsofia", date(2024, 3, 2)),
        student("Anna", date(2024, 8, 30)),
    ];

    renumber(NumberingPolicy::YearCohort, &mut records);

    assert_eq!(numbers_by_name(&records, "Anna").0, 1);
    assert_eq!(numbers_by_name(&records, "Zsofia").0, 2);
}

#[test]
fn year_cohort_september_first_belongs_to_the_late_partition() {
    // Zsofia enrolled on the cutoff day itself; were Sep 1 early she
    // would sort behind nobody by name and ahead of the June student.
    let mut records = vec![
        student("Zsofia", date(2024, 9, 1)),
        student("Anna", date(2024, 6, 15)),
        student("Bela", date(2024, 9, 2)),
    ];

    renumber(NumberingPolicy::YearCohort, &mut records);

    assert_eq!(numbers_by_name(&records, "Anna").0, 1);
    assert_eq!(numbers_by_name(&records, "Zsofia").0, 2);
    assert_eq!(numbers_by_name(&records, "Bela").0, 3);
}

#[test]
fn year_cohort_late_ties_break_by_name() {
    let mut records = vec![
        student("Zsofia", date(2024, 9, 10)),
        student("Anna", date(2024, 9, 10)),
    ];

    renumber(NumberingPolicy::YearCohort, &mut records);

    assert_eq!(numbers_by_name(&records, "Anna").0, 1);
    assert_eq!(numbers_by_name(&records, "Zsofia").0, 2);
}

#[test]
fn year_cohorts_run_in_ascending_year_order() {
    let mut records = vec![
        student("Anna", date(2024, 5, 1)),
        student("Bela", date(2023, 10, 7)),
    ];

    renumber(NumberingPolicy::YearCohort, &mut records);

    assert_eq!(numbers_by_name(&records, "Bela"), (1, "1/2023"));
    assert_eq!(numbers_by_name(&records, "Anna"), (2, "2/2024"));
}

#[test]
fn class_cohort_restarts_numbering_per_section() {
    let mut records = vec![
        student_in_class("Anna", date(2024, 5, 1), Some(ClassName::NineA)),
        student_in_class("Bela", date(2024, 5, 2), Some(ClassName::NineB)),
        student_in_class("Csilla", date(2024, 5, 3), Some(ClassName::NineA)),
    ];

    renumber(NumberingPolicy::ClassCohort, &mut records);

    assert_eq!(numbers_by_name(&records, "Anna"), (1, "1/2024"));
    assert_eq!(numbers_by_name(&records, "Csilla"), (2, "2/2024"));
    assert_eq!(numbers_by_name(&records, "Bela"), (1, "1/2024"));
}

#[test]
fn class_cohort_september_first_belongs_to_the_early_partition() {
    let mut records = vec![
        student_in_class("Zsofia", date(2024, 9, 1), Some(ClassName::NineA)),
        student_in_class("Anna", date(2024, 9, 5), Some(ClassName::NineA)),
        student_in_class("Bela", date(2024, 6, 20), Some(ClassName::NineA)),
    ];

    renumber(NumberingPolicy::ClassCohort, &mut records);

    // Early partition is {Bela, Zsofia} in name order; Anna is late.
    assert_eq!(numbers_by_name(&records, "Bela").0, 1);
    assert_eq!(numbers_by_name(&records, "Zsofia").0, 2);
    assert_eq!(numbers_by_name(&records, "Anna").0, 3);
}

#[test]
fn class_cohort_late_partition_keeps_insertion_order_on_equal_dates() {
    // No name tie-break here: same enrollment day stays in input order.
    let mut records = vec![
        student_in_class("Zsofia", date(2024, 9, 10), Some(ClassName::NineA)),
        student_in_class("Anna", date(2024, 9, 10), Some(ClassName::NineA)),
    ];

    renumber(NumberingPolicy::ClassCohort, &mut records);

    assert_eq!(numbers_by_name(&records, "Zsofia").0, 1);
    assert_eq!(numbers_by_name(&records, "Anna").0, 2);
}

#[test]
fn class_cohort_cutoff_follows_each_records_own_year() {
    // Same section, different years: each record is split against
    // September 1 of its own enrollment year.
    let mut records = vec![
        student_in_class("Anna", date(2023, 9, 2), Some(ClassName::TenA)),
        student_in_class("Bela", date(2024, 8, 31), Some(ClassName::TenA)),
    ];

    renumber(NumberingPolicy::ClassCohort, &mut records);

    // Bela (early, name-ordered) precedes Anna (late).
    assert_eq!(numbers_by_name(&records, "Bela"), (1, "1/2024"));
    assert_eq!(numbers_by_name(&records, "Anna"), (2, "2/2023"));
}

#[test]
fn class_cohort_unassigned_students_form_their_own_section() {
    let mut records = vec![
        student_in_class("Anna", date(2024, 5, 1), None),
        student_in_class("Bela", date(2024, 5, 2), Some(ClassName::NineA)),
        student_in_class("Csilla", date(2024, 5, 3), None),
    ];

    renumber(NumberingPolicy::ClassCohort, &mut records);

    assert_eq!(numbers_by_name(&records, "Anna").0, 1);
    assert_eq!(numbers_by_name(&records, "Csilla").0, 2);
    assert_eq!(numbers_by_name(&records, "Bela").0, 1);
}

#[test]
fn renumber_is_idempotent() {
    for policy in [NumberingPolicy::YearCohort, NumberingPolicy::ClassCohort] {
        let mut records = vec![
            student_in_class("Csilla", date(2024, 9, 5), Some(ClassName::NineA)),
            student_in_class("Anna", date(2024, 6, 1), None),
            student_in_class("Bela", date(2023, 9, 1), Some(ClassName::NineB)),
        ];

        renumber(policy, &mut records);
        let first_pass = records.clone();
        renumber(policy, &mut records);

        assert_eq!(records, first_pass);
    }
}

#[test]
fn renumber_never_reorders_the_collection() {
    let mut records = vec![
        student("Csilla", date(2024, 9, 5)),
        student("Anna", date(2024, 6, 1)),
        student("Bela", date(2023, 9, 1)),
    ];

    renumber(NumberingPolicy::YearCohort, &mut records);

    let names: Vec<&str> = records.iter().map(|record| record.full_name.as_str()).collect();
    assert_eq!(names, vec!["Csilla", "Anna", "Bela"]);
}

#[test]
fn empty_collection_is_a_noop() {
    let mut records: Vec<StudentRecord> = Vec::new();
    renumber(NumberingPolicy::YearCohort, &mut records);
    renumber(NumberingPolicy::ClassCohort, &mut records);
    assert!(records.is_empty());
}

#[test]
fn identical_records_keep_their_relative_input_order() {
    // Equal partition and equal sort key throughout; stability is the
    // only thing distinguishing the two.
    let mut records = vec![
        student("Anna", date(2024, 4, 4)),
        student("Anna", date(2024, 4, 4)),
    ];
    records[0].address = "first".to_string();
    records[1].address = "second".to_string();

    renumber(NumberingPolicy::YearCohort, &mut records);

    assert_eq!(records[0].journal_number, 1);
    assert_eq!(records[0].address, "first");
    assert_eq!(records[1].journal_number, 2);
    assert_eq!(records[1].address, "second");
}
