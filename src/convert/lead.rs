use crate::domain::model::{LeadRow, ProfileRow};

pub const LEAD_SOURCE: &str = "LinkedIn";

/// Static field-rename table from the general row to the lead-import
/// schema. Email and Phone are not extracted and stay empty.
pub fn lead_row(row: &ProfileRow) -> LeadRow {
    LeadRow {
        first_name: row.first_name.clone(),
        last_name: row.last_name.clone(),
        title: row.current_role.clone(),
        company: row.current_company.clone(),
        description: row.about.clone(),
        lead_source: LEAD_SOURCE.to_string(),
        website: row.linkedin_url.clone(),
        email: String::new(),
        phone: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_fields_by_rename_table() {
        let row = ProfileRow {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            current_role: "Engineering Lead".to_string(),
            current_company: "Acme Corp".to_string(),
            about: "Builds data tooling.".to_string(),
            linkedin_url: "https://example.com/in/jane_doe".to_string(),
            ..Default::default()
        };

        let lead = lead_row(&row);
        assert_eq!(lead.first_name, "Jane");
        assert_eq!(lead.last_name, "Doe");
        assert_eq!(lead.title, "Engineering Lead");
        assert_eq!(lead.company, "Acme Corp");
        assert_eq!(lead.description, "Builds data tooling.");
        assert_eq!(lead.website, "https://example.com/in/jane_doe");
        assert_eq!(lead.lead_source, "LinkedIn");
        assert_eq!(lead.email, "");
        assert_eq!(lead.phone, "");
    }
}
