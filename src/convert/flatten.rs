use crate::config::options::ConvertOptions;
use crate::domain::model::{EducationEntry, Profile, ProfileRow, Role};

/// Project a profile onto the flat 14-column row. Pure mapping, no
/// heuristics: the first experience entry is taken as the current role
/// (document order, assumed most-recent-first).
pub fn profile_row(profile: &Profile, opts: &ConvertOptions) -> ProfileRow {
    let full_name = profile.name.clone().unwrap_or_default();
    let (first_name, last_name) = split_name(&full_name);
    let current = profile.experience.first();

    ProfileRow {
        profile_id: profile.profile_id.clone().unwrap_or_default(),
        full_name,
        first_name,
        last_name,
        headline: profile.headline.clone().unwrap_or_default(),
        location: profile.location.clone().unwrap_or_default(),
        linkedin_url: profile.url.clone().unwrap_or_default(),
        about: truncate_chars(profile.about.as_deref().unwrap_or_default(), opts.about_limit),
        current_role: current.map(|r| r.title.clone()).unwrap_or_default(),
        current_company: current
            .and_then(|r| r.company.clone())
            .unwrap_or_default(),
        all_experience: flatten_experience(&profile.experience, &opts.join_delimiter),
        all_education: flatten_education(&profile.education, &opts.join_delimiter),
        connections: profile.connections.clone().unwrap_or_default(),
        extraction_date: profile.timestamp.clone().unwrap_or_default(),
    }
}

/// First/last name split on the first space.
pub fn split_name(full_name: &str) -> (String, String) {
    match full_name.split_once(' ') {
        Some((first, last)) => (first.to_string(), last.to_string()),
        None => (full_name.to_string(), String::new()),
    }
}

/// Character-budget truncation, safe on multi-byte text.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

fn flatten_experience(roles: &[Role], delimiter: &str) -> String {
    roles
        .iter()
        .map(|role| {
            format!(
                "{} at {} ({})",
                role.title,
                role.company.as_deref().unwrap_or_default(),
                role_duration(role)
            )
        })
        .collect::<Vec<_>>()
        .join(delimiter)
}

fn role_duration(role: &Role) -> String {
    if let Some(duration) = &role.time_in_role {
        return duration.clone();
    }
    match (&role.start, &role.end) {
        (Some(start), Some(end)) => format!("{start} - {end}"),
        (Some(start), None) => start.clone(),
        _ => String::new(),
    }
}

fn flatten_education(entries: &[EducationEntry], delimiter: &str) -> String {
    entries
        .iter()
        .map(|edu| {
            let years = match (&edu.start, &edu.end) {
                (Some(start), Some(end)) => format!("{start} - {end}"),
                (Some(start), None) => start.clone(),
                _ => String::new(),
            };
            format!(
                "{} - {} ({})",
                edu.institution,
                edu.course.as_deref().unwrap_or_default(),
                years
            )
        })
        .collect::<Vec<_>>()
        .join(delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> Profile {
        Profile {
            name: Some("Jane Ann Doe".to_string()),
            headline: Some("Engineering Lead".to_string()),
            about: Some("Builds data tooling.".to_string()),
            experience: vec![
                Role {
                    company: Some("Acme Corp".to_string()),
                    title: "Engineering Lead".to_string(),
                    start: Some("Jan 2020".to_string()),
                    end: Some("Present".to_string()),
                    time_in_role: Some("4 yrs".to_string()),
                    ..Default::default()
                },
                Role {
                    company: Some("Globex".to_string()),
                    title: "Engineer".to_string(),
                    start: Some("2016".to_string()),
                    end: Some("2019".to_string()),
                    ..Default::default()
                },
            ],
            education: vec![EducationEntry {
                institution: "Example University".to_string(),
                course: Some("BSc Computer Science".to_string()),
                start: Some("2014".to_string()),
                end: Some("2018".to_string()),
            }],
            profile_id: Some("jane_doe".to_string()),
            url: Some("https://example.com/in/jane_doe".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn projects_fixed_columns() {
        let row = profile_row(&sample_profile(), &ConvertOptions::default());
        assert_eq!(row.profile_id, "jane_doe");
        assert_eq!(row.full_name, "Jane Ann Doe");
        assert_eq!(row.first_name, "Jane");
        assert_eq!(row.last_name, "Ann Doe");
        assert_eq!(row.current_role, "Engineering Lead");
        assert_eq!(row.current_company, "Acme Corp");
        assert_eq!(
            row.all_experience,
            "Engineering Lead at Acme Corp (4 yrs) | Engineer at Globex (2016 - 2019)"
        );
        assert_eq!(
            row.all_education,
            "Example University - BSc Computer Science (2014 - 2018)"
        );
        assert_eq!(row.extraction_date, "");
    }

    #[test]
    fn split_name_on_first_space_only() {
        assert_eq!(
            split_name("Jane Ann Doe"),
            ("Jane".to_string(), "Ann Doe".to_string())
        );
        assert_eq!(split_name("Madonna"), ("Madonna".to_string(), String::new()));
        assert_eq!(split_name(""), (String::new(), String::new()));
    }

    #[test]
    fn about_is_truncated_to_character_budget() {
        let mut profile = sample_profile();
        profile.about = Some("é".repeat(600));
        let row = profile_row(
            &profile,
            &ConvertOptions {
                about_limit: 500,
                ..Default::default()
            },
        );
        assert_eq!(row.about.chars().count(), 500);
    }

    #[test]
    fn empty_profile_projects_empty_strings() {
        let row = profile_row(&Profile::default(), &ConvertOptions::default());
        assert_eq!(row.full_name, "");
        assert_eq!(row.current_role, "");
        assert_eq!(row.all_experience, "");
        assert_eq!(row.all_education, "");
    }
}
