use serde::{Deserialize, Serialize};

/// 個人簡介，hero 與 footer 區塊使用
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub years: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub link: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_deserializes_from_api_shape() {
        let json = r#"{"name": "Ada", "title": "Engineer", "summary": "builds things"}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.title, "Engineer");
        assert_eq!(profile.summary, "builds things");
    }

    #[test]
    fn test_profile_tolerates_extra_fields() {
        let json = r#"{"name": "Ada", "title": "Engineer", "summary": "s", "avatar": "x.png"}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name, "Ada");
    }

    #[test]
    fn test_experience_and_project_deserialize_from_arrays() {
        let json = r#"[{"role": "Eng", "company": "Acme", "years": "2020-2023", "description": "built stuff"}]"#;
        let entries: Vec<ExperienceEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company, "Acme");

        let json = r#"[{"title": "X", "link": "http://x", "description": "d"}]"#;
        let projects: Vec<Project> = serde_json::from_str(json).unwrap();
        assert_eq!(projects[0].link, "http://x");
    }
}
