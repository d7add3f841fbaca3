use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_list, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunable heuristics for the parsers and the CSV projection. Defaults
/// match the built-in constants; a TOML file overrides per table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParserOptions {
    #[serde(default)]
    pub experience: ExperienceOptions,
    #[serde(default)]
    pub education: EducationOptions,
    #[serde(default)]
    pub convert: ConvertOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceOptions {
    /// Tokens (besides a plain comma) that mark a line as a location.
    #[serde(default = "default_location_cues")]
    pub location_cues: Vec<String>,
    /// How many lines after the date line to scan for a location.
    #[serde(default = "default_location_lookahead")]
    pub location_lookahead: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationOptions {
    /// A block is kept only when its first line contains one of these.
    #[serde(default = "default_institution_keywords")]
    pub institution_keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// Character budget for the About column.
    #[serde(default = "default_about_limit")]
    pub about_limit: usize,
    /// Delimiter between flattened experience/education entries.
    #[serde(default = "default_join_delimiter")]
    pub join_delimiter: String,
}

fn default_location_cues() -> Vec<String> {
    [
        "United Kingdom",
        "UK",
        "London",
        "Area",
        "Remote",
        "Hybrid",
        "China",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_location_lookahead() -> usize {
    4
}

fn default_institution_keywords() -> Vec<String> {
    [
        "university",
        "college",
        "school",
        "institute",
        "academy",
        "kaplan",
        "icaew",
        "acca",
        "cima",
        "imperial",
        "mba",
        "phd",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_about_limit() -> usize {
    500
}

fn default_join_delimiter() -> String {
    " | ".to_string()
}

impl Default for ExperienceOptions {
    fn default() -> Self {
        Self {
            location_cues: default_location_cues(),
            location_lookahead: default_location_lookahead(),
        }
    }
}

impl Default for EducationOptions {
    fn default() -> Self {
        Self {
            institution_keywords: default_institution_keywords(),
        }
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            about_limit: default_about_limit(),
            join_delimiter: default_join_delimiter(),
        }
    }
}

impl ParserOptions {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let options: ParserOptions = toml::from_str(&content)?;
        options.validate()?;
        Ok(options)
    }
}

impl Validate for ParserOptions {
    fn validate(&self) -> Result<()> {
        validate_range(
            "experience.location_lookahead",
            self.experience.location_lookahead,
            1,
            20,
        )?;
        validate_non_empty_list(
            "education.institution_keywords",
            &self.education.institution_keywords,
        )?;
        validate_range("convert.about_limit", self.convert.about_limit, 1, 100_000)?;
        Ok(())
    }
}
