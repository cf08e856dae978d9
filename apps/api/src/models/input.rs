use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Requested resolution tier for the generated avatar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSize {
    #[default]
    #[serde(rename = "1K")]
    OneK,
    #[serde(rename = "2K")]
    TwoK,
    #[serde(rename = "4K")]
    FourK,
}

impl ImageSize {
    /// The token the image endpoint expects in `imageConfig.imageSize`.
    pub fn as_token(&self) -> &'static str {
        match self {
            ImageSize::OneK => "1K",
            ImageSize::TwoK => "2K",
            ImageSize::FourK => "4K",
        }
    }
}

/// One raw work-history entry as typed into the form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceInput {
    /// Form-local identifier; only meaningful for list editing.
    pub id: String,
    pub company: String,
    pub role: String,
    pub duration: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    pub id: String,
    pub title: String,
    /// Free text, usually comma separated.
    pub tech_stack: String,
    pub description: String,
}

/// Everything the user submitted. Immutable once handed to the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInput {
    pub full_name: String,
    pub current_role: String,
    pub bio_raw: String,
    /// Comma separated.
    pub skills_raw: String,
    #[serde(default)]
    pub experience: Vec<ExperienceInput>,
    #[serde(default)]
    pub projects: Vec<ProjectInput>,
    pub contact_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default)]
    pub image_size: ImageSize,
}

impl UserInput {
    /// Checks the field constraints the form is expected to enforce.
    /// Returns the first violation as a human-readable message.
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            ("fullName", &self.full_name),
            ("currentRole", &self.current_role),
            ("bioRaw", &self.bio_raw),
            ("skillsRaw", &self.skills_raw),
            ("contactEmail", &self.contact_email),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(format!("{field} cannot be empty"));
            }
        }

        for (field, value) in [
            ("githubUrl", self.github_url()),
            ("linkedinUrl", self.linkedin_url()),
        ] {
            if let Some(url) = value {
                let parsed = Url::parse(url).map_err(|e| format!("{field} is not a valid URL: {e}"))?;
                if !matches!(parsed.scheme(), "http" | "https") {
                    return Err(format!("{field} must be an http(s) URL"));
                }
            }
        }

        Ok(())
    }

    /// GitHub link, treating an empty form field as absent.
    pub fn github_url(&self) -> Option<&str> {
        non_blank(self.github_url.as_deref())
    }

    pub fn linkedin_url(&self) -> Option<&str> {
        non_blank(self.linkedin_url.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn sample_input() -> UserInput {
        UserInput {
            full_name: "Ada Lovelace".to_string(),
            current_role: "Senior Rust Engineer".to_string(),
            bio_raw: "I build fast backend systems and like compilers.".to_string(),
            skills_raw: "Rust, Tokio, PostgreSQL, Leadership".to_string(),
            experience: vec![ExperienceInput {
                id: "1700000000000".to_string(),
                company: "Analytical Engines Ltd".to_string(),
                role: "Backend Engineer".to_string(),
                duration: "2020 - Present".to_string(),
                description: "worked on the payments api, made it faster".to_string(),
            }],
            projects: vec![ProjectInput {
                id: "1700000000001".to_string(),
                title: "difference-engine".to_string(),
                tech_stack: "Rust, WASM".to_string(),
                description: "a calculator".to_string(),
            }],
            contact_email: "ada@example.com".to_string(),
            github_url: Some("https://github.com/ada".to_string()),
            linkedin_url: None,
            image_size: ImageSize::TwoK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::sample_input;
    use super::*;

    #[test]
    fn test_user_input_deserializes_from_form_payload() {
        let json = serde_json::json!({
            "fullName": "Ada Lovelace",
            "currentRole": "Engineer",
            "bioRaw": "bio",
            "skillsRaw": "Rust, Go",
            "experience": [
                {"id": "1", "company": "Acme", "role": "Dev", "duration": "2019 - 2021", "description": "stuff"}
            ],
            "projects": [
                {"id": "2", "title": "Thing", "techStack": "Rust", "description": "does things"}
            ],
            "contactEmail": "ada@example.com",
            "githubUrl": "",
            "imageSize": "4K"
        });
        let input: UserInput = serde_json::from_value(json).unwrap();
        assert_eq!(input.image_size, ImageSize::FourK);
        assert_eq!(input.projects[0].tech_stack, "Rust");
        assert!(input.github_url().is_none());
        assert!(input.linkedin_url.is_none());
    }

    #[test]
    fn test_image_size_defaults_to_1k() {
        let json = serde_json::json!({
            "fullName": "A", "currentRole": "B", "bioRaw": "C",
            "skillsRaw": "D", "contactEmail": "e@x.io"
        });
        let input: UserInput = serde_json::from_value(json).unwrap();
        assert_eq!(input.image_size, ImageSize::OneK);
        assert!(input.experience.is_empty());
        assert!(input.projects.is_empty());
    }

    #[test]
    fn test_unknown_image_size_rejected() {
        let result: Result<ImageSize, _> = serde_json::from_str("\"8K\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_accepts_sample() {
        assert!(sample_input().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_required_field() {
        let mut input = sample_input();
        input.skills_raw = "   ".to_string();
        let err = input.validate().unwrap_err();
        assert!(err.contains("skillsRaw"), "{err}");
    }

    #[test]
    fn test_validate_rejects_malformed_url() {
        let mut input = sample_input();
        input.linkedin_url = Some("linkedin dot com slash ada".to_string());
        let err = input.validate().unwrap_err();
        assert!(err.contains("linkedinUrl"), "{err}");
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let mut input = sample_input();
        input.github_url = Some("ftp://github.com/ada".to_string());
        assert!(input.validate().is_err());
    }
}
