//! Categorical vocabulary for the passenger dataset
//!
//! Each feature column has a fixed token set mapped to zero-based integer
//! codes. Parsing validates against the vocabulary and fails on anything
//! outside it; codes convert back to the canonical token so the encoding
//! round-trips.

use crate::error::{LifeboatError, Result};
use serde::{Deserialize, Serialize};

/// Column names of the feature vector, in encoding order
pub const FEATURE_NAMES: [&str; 3] = ["class", "age", "sex"];

/// Number of features per record
pub const N_FEATURES: usize = 3;

/// Ticket class: 1st/2nd/3rd, codes 0/1/2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketClass {
    First,
    Second,
    Third,
}

impl TicketClass {
    /// Parse a class token. Matches on the `1st`/`2nd`/`3rd` prefix, so
    /// both `"1st class"` and `"1st"` are accepted.
    pub fn parse(token: &str) -> Result<Self> {
        let t = normalize(token);
        if t.starts_with("1st") {
            Ok(TicketClass::First)
        } else if t.starts_with("2nd") {
            Ok(TicketClass::Second)
        } else if t.starts_with("3rd") {
            Ok(TicketClass::Third)
        } else {
            Err(unknown("class", token))
        }
    }

    pub fn from_code(code: usize) -> Result<Self> {
        match code {
            0 => Ok(TicketClass::First),
            1 => Ok(TicketClass::Second),
            2 => Ok(TicketClass::Third),
            _ => Err(unknown("class", &code.to_string())),
        }
    }

    pub fn code(&self) -> usize {
        match self {
            TicketClass::First => 0,
            TicketClass::Second => 1,
            TicketClass::Third => 2,
        }
    }

    /// Canonical token as it appears in the source data
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketClass::First => "1st class",
            TicketClass::Second => "2nd class",
            TicketClass::Third => "3rd class",
        }
    }
}

/// Age group: child (0) or adult (1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeGroup {
    Child,
    Adult,
}

impl AgeGroup {
    /// Parse an age token. The source data spells the adult category
    /// `adults`; the singular form is accepted as an alias.
    pub fn parse(token: &str) -> Result<Self> {
        match normalize(token).as_str() {
            "child" => Ok(AgeGroup::Child),
            "adults" | "adult" => Ok(AgeGroup::Adult),
            _ => Err(unknown("age", token)),
        }
    }

    pub fn from_code(code: usize) -> Result<Self> {
        match code {
            0 => Ok(AgeGroup::Child),
            1 => Ok(AgeGroup::Adult),
            _ => Err(unknown("age", &code.to_string())),
        }
    }

    pub fn code(&self) -> usize {
        match self {
            AgeGroup::Child => 0,
            AgeGroup::Adult => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Child => "child",
            AgeGroup::Adult => "adults",
        }
    }
}

/// Gender: man (0) or woman (1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Man,
    Woman,
}

impl Gender {
    /// Parse a sex token. The source data spells the category `women`;
    /// the singular form is accepted as an alias.
    pub fn parse(token: &str) -> Result<Self> {
        match normalize(token).as_str() {
            "man" => Ok(Gender::Man),
            "women" | "woman" => Ok(Gender::Woman),
            _ => Err(unknown("sex", token)),
        }
    }

    pub fn from_code(code: usize) -> Result<Self> {
        match code {
            0 => Ok(Gender::Man),
            1 => Ok(Gender::Woman),
            _ => Err(unknown("sex", &code.to_string())),
        }
    }

    pub fn code(&self) -> usize {
        match self {
            Gender::Man => 0,
            Gender::Woman => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Man => "man",
            Gender::Woman => "women",
        }
    }
}

/// Survival outcome: the binary label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Survival {
    No,
    Yes,
}

impl Survival {
    pub fn parse(token: &str) -> Result<Self> {
        match normalize(token).as_str() {
            "no" => Ok(Survival::No),
            "yes" => Ok(Survival::Yes),
            _ => Err(unknown("survived", token)),
        }
    }

    pub fn from_label(label: usize) -> Result<Self> {
        match label {
            0 => Ok(Survival::No),
            1 => Ok(Survival::Yes),
            _ => Err(unknown("survived", &label.to_string())),
        }
    }

    /// Label value: 0 = did not survive, 1 = survived
    pub fn label(&self) -> usize {
        match self {
            Survival::No => 0,
            Survival::Yes => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Survival::No => "no",
            Survival::Yes => "yes",
        }
    }
}

fn normalize(token: &str) -> String {
    token.trim().to_lowercase()
}

fn unknown(field: &'static str, value: &str) -> LifeboatError {
    LifeboatError::UnknownCategory {
        field,
        value: value.to_string(),
    }
}
