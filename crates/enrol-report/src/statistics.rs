use std::collections::BTreeMap;
use std::fmt;

use enrol_model::{Program, StudentRecord};

/// Enrollment counts for one calendar year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearBreakdown {
    /// Count per program, keyed in program-name order. Records with an
    /// unset program contribute to `total` only.
    pub by_program: BTreeMap<Program, usize>,
    /// Every student enrolled in the year.
    pub total: usize,
}

/// Aggregate counts over the full collection.
///
/// Built by [`summarize`]; the `Display` impl renders the operator-facing
/// text report. The grouping and ordering of the counts are contractual,
/// the surrounding text is presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatisticsReport {
    pub total: usize,
    pub residents: usize,
    pub locals: usize,
    pub commuters: usize,
    /// Ascending by enrollment year.
    pub by_year: BTreeMap<i32, YearBreakdown>,
}

impl StatisticsReport {
    /// Compact one-line summary for a status bar.
    pub fn overview_line(&self) -> String {
        if self.total == 0 {
            return "No students enrolled yet.".to_string();
        }
        format!(
            "Total students: {} | Residents: {} | Locals: {} | Commuters: {}",
            self.total, self.residents, self.locals, self.commuters
        )
    }
}

/// Compute enrollment statistics over the collection.
///
/// Read-only; the input is left untouched. A student counts as resident
/// ahead of local when both flags are set, and the commuter count is the
/// remainder, so the three categories always sum to the total.
pub fn summarize(records: &[StudentRecord]) -> StatisticsReport {
    let mut report = StatisticsReport {
        total: records.len(),
        ..StatisticsReport::default()
    };
    for record in records {
        if record.is_resident {
            report.residents += 1;
        } else if record.is_local {
            report.locals += 1;
        }
        let year = report.by_year.entry(record.enrollment_year()).or_default();
        year.total += 1;
        if let Some(program) = record.program {
            *year.by_program.entry(program).or_default() += 1;
        }
    }
    report.commuters = report.total - report.residents - report.locals;
    report
}

impl fmt::Display for StatisticsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== STATISTICS ===")?;
        writeln!(f)?;
        writeln!(f, "Resident students: {}", self.residents)?;
        writeln!(f, "Local students: {}", self.locals)?;
        writeln!(f, "Commuters: {}", self.commuters)?;
        writeln!(f, "Total students: {}", self.total)?;
        writeln!(f)?;
        write!(f, "=== ENROLLMENT BY YEAR AND PROGRAM ===")?;
        for (year, breakdown) in &self.by_year {
            writeln!(f)?;
            writeln!(f)?;
            writeln!(f, "{year}:")?;
            for (program, count) in &breakdown.by_program {
                writeln!(f, "  {program}: {count}")?;
            }
            write!(f, "  Total: {}", breakdown.total)?;
        }
        Ok(())
    }
}
