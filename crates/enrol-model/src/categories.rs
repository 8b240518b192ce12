use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Study programs offered by the institution.
///
/// The registry only ever stores values from this closed set; an absent
/// program is represented by `Option::None` on the record, not by a
/// sentinel string. Variants are declared in lexicographic order of their
/// display name so the derived `Ord` matches report ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Program {
    Electronics,
    Finance,
    #[serde(rename = "IT")]
    InformationTechnology,
    Mechatronics,
}

impl Program {
    /// Returns the program name as it appears on forms and in the data file.
    pub fn as_str(&self) -> &'static str {
        match self {
            Program::Electronics => "Electronics",
            Program::Finance => "Finance",
            Program::InformationTechnology => "IT",
            Program::Mechatronics => "Mechatronics",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Program {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ELECTRONICS" => Ok(Program::Electronics),
            "FINANCE" => Ok(Program::Finance),
            "IT" | "INFORMATION TECHNOLOGY" => Ok(Program::InformationTechnology),
            "MECHATRONICS" => Ok(Program::Mechatronics),
            _ => Err(format!("Unknown program: {}", s)),
        }
    }
}

/// Class sections a student can be assigned to.
///
/// Variant order follows grade then section, so iterating a sorted
/// collection visits sections in timetable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClassName {
    #[serde(rename = "9.A")]
    NineA,
    #[serde(rename = "9.B")]
    NineB,
    #[serde(rename = "10.A")]
    TenA,
    #[serde(rename = "10.B")]
    TenB,
    #[serde(rename = "11.A")]
    ElevenA,
    #[serde(rename = "11.B")]
    ElevenB,
}

impl ClassName {
    /// Returns the section label as it appears on forms and in the data file.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassName::NineA => "9.A",
            ClassName::NineB => "9.B",
            ClassName::TenA => "10.A",
            ClassName::TenB => "10.B",
            ClassName::ElevenA => "11.A",
            ClassName::ElevenB => "11.B",
        }
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ClassName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "9.A" => Ok(ClassName::NineA),
            "9.B" => Ok(ClassName::NineB),
            "10.A" => Ok(ClassName::TenA),
            "10.B" => Ok(ClassName::TenB),
            "11.A" => Ok(ClassName::ElevenA),
            "11.B" => Ok(ClassName::ElevenB),
            _ => Err(format!("Unknown class: {}", s)),
        }
    }
}

/// Dormitories available to resident students.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dormitory {
    Northern,
    Riverside,
    Southern,
}

impl Dormitory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dormitory::Northern => "Northern",
            Dormitory::Riverside => "Riverside",
            Dormitory::Southern => "Southern",
        }
    }
}

impl fmt::Display for Dormitory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Dormitory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NORTHERN" => Ok(Dormitory::Northern),
            "RIVERSIDE" => Ok(Dormitory::Riverside),
            "SOUTHERN" => Ok(Dormitory::Southern),
            _ => Err(format!("Unknown dormitory: {}", s)),
        }
    }
}
