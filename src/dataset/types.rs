//! Dataset Types
//!
//! Row types and in-memory tables for the two source files. Both tables are
//! built once at start-up and never mutated afterwards; handlers only ever
//! borrow rows out of them.

use serde::{Deserialize, Serialize};

/// The six happiness indicators tracked per country-year.
///
/// The variant labels double as the CSV column contract: [`Indicator::column_name`]
/// must match the source file headers exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Indicator {
    LifeLadder,
    LogGdpPerCapita,
    SocialSupport,
    HealthyLifeExpectancy,
    FreedomToMakeLifeChoices,
    Generosity,
}

impl Indicator {
    /// All six indicators, in dashboard display order
    pub const ALL: [Indicator; 6] = [
        Indicator::LifeLadder,
        Indicator::LogGdpPerCapita,
        Indicator::SocialSupport,
        Indicator::HealthyLifeExpectancy,
        Indicator::FreedomToMakeLifeChoices,
        Indicator::Generosity,
    ];

    /// Exact column header in the happiness CSV (also the UI label)
    pub fn column_name(&self) -> &'static str {
        match self {
            Indicator::LifeLadder => "Life Ladder",
            Indicator::LogGdpPerCapita => "Log GDP per capita",
            Indicator::SocialSupport => "Social support",
            Indicator::HealthyLifeExpectancy => "Healthy life expectancy at birth",
            Indicator::FreedomToMakeLifeChoices => "Freedom to make life choices",
            Indicator::Generosity => "Generosity",
        }
    }

    /// Parse a column label back into an indicator
    pub fn from_column_name(name: &str) -> Option<Indicator> {
        Indicator::ALL.into_iter().find(|i| i.column_name() == name)
    }
}

impl std::fmt::Display for Indicator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column_name())
    }
}

/// One row of the happiness table: a single (country, year) observation.
///
/// Indicator cells may be empty in the source file, so each is an `Option`.
/// `(code, year)` is not guaranteed unique; the loader performs no dedup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HappinessRecord {
    #[serde(rename = "Country name")]
    pub country_name: String,

    #[serde(rename = "Code")]
    pub code: String,

    #[serde(rename = "year")]
    pub year: i32,

    #[serde(rename = "Life Ladder")]
    pub life_ladder: Option<f64>,

    #[serde(rename = "Log GDP per capita")]
    pub log_gdp_per_capita: Option<f64>,

    #[serde(rename = "Social support")]
    pub social_support: Option<f64>,

    #[serde(rename = "Healthy life expectancy at birth")]
    pub healthy_life_expectancy: Option<f64>,

    #[serde(rename = "Freedom to make life choices")]
    pub freedom_to_make_life_choices: Option<f64>,

    #[serde(rename = "Generosity")]
    pub generosity: Option<f64>,
}

impl HappinessRecord {
    /// Value of the given indicator for this row, if present
    pub fn indicator(&self, indicator: Indicator) -> Option<f64> {
        match indicator {
            Indicator::LifeLadder => self.life_ladder,
            Indicator::LogGdpPerCapita => self.log_gdp_per_capita,
            Indicator::SocialSupport => self.social_support,
            Indicator::HealthyLifeExpectancy => self.healthy_life_expectancy,
            Indicator::FreedomToMakeLifeChoices => self.freedom_to_make_life_choices,
            Indicator::Generosity => self.generosity,
        }
    }
}

/// One row of the country-code lookup table
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CountryCodeEntry {
    #[serde(rename = "Code3")]
    pub code: String,

    #[serde(rename = "Country")]
    pub country: String,
}

/// The primary table: all (country, year) observations, in file order
#[derive(Debug, Clone, PartialEq)]
pub struct HappinessTable {
    rows: Vec<HappinessRecord>,
}

impl HappinessTable {
    pub(crate) fn new(rows: Vec<HappinessRecord>) -> Self {
        Self { rows }
    }

    /// All rows whose `year` equals the given year; empty if none match
    pub fn filter_by_year(&self, year: i32) -> Vec<&HappinessRecord> {
        self.rows.iter().filter(|r| r.year == year).collect()
    }

    /// All rows whose country code equals the given string, across all years
    pub fn filter_by_code(&self, code: &str) -> Vec<&HappinessRecord> {
        self.rows.iter().filter(|r| r.code == code).collect()
    }

    /// Sorted distinct years present in the table (the slider mark set)
    pub fn distinct_years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.rows.iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// Number of rows in the table
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows, in load order
    pub fn rows(&self) -> &[HappinessRecord] {
        &self.rows
    }
}

/// The country-code lookup table
#[derive(Debug, Clone, PartialEq)]
pub struct CodeTable {
    entries: Vec<CountryCodeEntry>,
}

impl CodeTable {
    pub(crate) fn new(entries: Vec<CountryCodeEntry>) -> Self {
        Self { entries }
    }

    /// Display name for a 3-letter country code.
    ///
    /// Case-sensitive exact match after trimming whitespace on the stored
    /// code. Returns the first match, or the empty string when the code is
    /// unknown; a miss is a sentinel, not a failure.
    pub fn country_name_for_code(&self, code: &str) -> String {
        self.entries
            .iter()
            .find(|e| e.code.trim() == code)
            .map(|e| e.country.clone())
            .unwrap_or_default()
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
