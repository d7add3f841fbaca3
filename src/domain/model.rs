use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One extracted profile record. The six core keys are always serialized;
/// the remaining fields are passthrough values produced by the capture
/// tooling (filename token, page metadata) and only appear when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub experience: Vec<Role>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub activity: Option<String>,

    #[serde(rename = "profileId", default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connections: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// A single position. Only blocks containing a recognizable date span
/// become roles, so `title` is always present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Role {
    #[serde(default)]
    pub company: Option<String>,
    pub title: String,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub time_in_role: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

/// Flat CSV row for the general export. Field order fixes the column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRow {
    #[serde(rename = "Profile ID")]
    pub profile_id: String,
    #[serde(rename = "Full Name")]
    pub full_name: String,
    #[serde(rename = "First Name")]
    pub first_name: String,
    #[serde(rename = "Last Name")]
    pub last_name: String,
    #[serde(rename = "Headline")]
    pub headline: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "LinkedIn URL")]
    pub linkedin_url: String,
    #[serde(rename = "About")]
    pub about: String,
    #[serde(rename = "Current Role")]
    pub current_role: String,
    #[serde(rename = "Current Company")]
    pub current_company: String,
    #[serde(rename = "All Experience")]
    pub all_experience: String,
    #[serde(rename = "All Education")]
    pub all_education: String,
    #[serde(rename = "Connections")]
    pub connections: String,
    #[serde(rename = "Extraction Date")]
    pub extraction_date: String,
}

impl ProfileRow {
    /// Column names in serialization order. Written explicitly so the
    /// header row survives an empty batch.
    pub const HEADERS: [&'static str; 14] = [
        "Profile ID",
        "Full Name",
        "First Name",
        "Last Name",
        "Headline",
        "Location",
        "LinkedIn URL",
        "About",
        "Current Role",
        "Current Company",
        "All Experience",
        "All Education",
        "Connections",
        "Extraction Date",
    ];
}

/// Lead-import row in the external schema, derived from a [`ProfileRow`]
/// by a static rename table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadRow {
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "LeadSource")]
    pub lead_source: String,
    #[serde(rename = "Website")]
    pub website: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone")]
    pub phone: String,
}

impl LeadRow {
    pub const HEADERS: [&'static str; 9] = [
        "FirstName",
        "LastName",
        "Title",
        "Company",
        "Description",
        "LeadSource",
        "Website",
        "Email",
        "Phone",
    ];
}

/// One permissively decoded input file.
#[derive(Debug, Clone)]
pub struct SourceDoc {
    pub path: PathBuf,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileFailure {
    pub path: String,
    pub error: String,
}

/// Transform output: successfully processed items plus the per-file
/// failures that were isolated along the way.
#[derive(Debug, Clone)]
pub struct Batch<T> {
    pub items: Vec<T>,
    pub failures: Vec<FileFailure>,
}

impl<T> Batch<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<T> Default for Batch<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub written: Vec<String>,
    pub failures: Vec<FileFailure>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_json_round_trip_is_lossless() {
        let profile = Profile {
            name: Some("Jane Doe".to_string()),
            headline: Some("Engineering Lead".to_string()),
            about: Some("Builds data tooling.".to_string()),
            experience: vec![Role {
                company: Some("Acme Corp".to_string()),
                title: "Software Engineer".to_string(),
                start: Some("Jan 2020".to_string()),
                end: Some("Present".to_string()),
                time_in_role: Some("4 yrs".to_string()),
                location: Some("London, UK".to_string()),
                description: Some("Built things".to_string()),
            }],
            education: vec![EducationEntry {
                institution: "Example University".to_string(),
                course: Some("BSc Computer Science".to_string()),
                start: Some("2014".to_string()),
                end: Some("2018".to_string()),
            }],
            activity: None,
            profile_id: Some("jane_doe".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string_pretty(&profile).unwrap();
        let reloaded: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, reloaded);
    }

    #[test]
    fn profile_core_keys_always_serialized() {
        let json = serde_json::to_value(Profile::default()).unwrap();
        let obj = json.as_object().unwrap();
        for key in ["name", "headline", "about", "experience", "education", "activity"] {
            assert!(obj.contains_key(key), "missing core key {key}");
        }
        // Passthrough keys are omitted when absent.
        assert!(!obj.contains_key("profileId"));
        assert!(!obj.contains_key("url"));
    }

    #[test]
    fn header_consts_match_serde_renames() {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(ProfileRow::default()).unwrap();
        let data = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(data.lines().next().unwrap(), ProfileRow::HEADERS.join(","));

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.serialize(LeadRow::default()).unwrap();
        let data = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        assert_eq!(data.lines().next().unwrap(), LeadRow::HEADERS.join(","));
    }

    #[test]
    fn profile_deserializes_with_missing_optional_keys() {
        let profile: Profile = serde_json::from_str(r#"{"name": "Jane Doe"}"#).unwrap();
        assert_eq!(profile.name.as_deref(), Some("Jane Doe"));
        assert!(profile.experience.is_empty());
        assert!(profile.timestamp.is_none());
    }
}
