use serde::{Deserialize, Serialize};

// Every field below is required: a model response missing any of them fails
// deserialization and is reported as an unparseable response.

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalBrand {
    pub tagline: String,
    pub professional_summary: String,
    pub key_strengths: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<String>,
}

/// An AI-rewritten work-history entry. No link back to the `ExperienceInput`
/// it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    /// Free text as the model returned it, e.g. "Jan 2020 - Present".
    pub duration: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub impact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactBlock {
    pub cta_message: String,
}

/// The enriched portfolio. Built once per generation and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPortfolio {
    pub personal_brand: PersonalBrand,
    pub skills: Vec<SkillCategory>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub contact: ContactBlock,
    /// `data:<mime>;base64,<payload>`. Not part of the model's schema; set by
    /// the orchestrator when image synthesis produced something.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
}


#[cfg(test)]
mod tests {
    use super::fixtures::sample_portfolio;
    use super::*;

    #[test]
    fn test_portfolio_uses_camel_case_keys() {
        let value = serde_json::to_value(sample_portfolio()).unwrap();
        assert!(value["personalBrand"]["professionalSummary"].is_string());
        assert!(value["projects"][0]["techStack"].is_array());
        assert!(value["contact"]["ctaMessage"].is_string());
        assert!(value.get("heroImage").is_none());
    }

    #[test]
    fn test_missing_nested_field_fails_deserialization() {
        let mut value = serde_json::to_value(sample_portfolio()).unwrap();
        value["projects"][0]
            .as_object_mut()
            .unwrap()
            .remove("impact");
        let result: Result<GeneratedPortfolio, _> = serde_json::from_value(value);
        assert!(result.is_err(), "a project without impact must be rejected");
    }

    #[test]
    fn test_hero_image_is_optional_on_input() {
        let mut value = serde_json::to_value(sample_portfolio()).unwrap();
        value["heroImage"] = serde_json::json!("data:image/png;base64,AAAA");
        let portfolio: GeneratedPortfolio = serde_json::from_value(value).unwrap();
        assert_eq!(portfolio.hero_image.as_deref(), Some("data:image/png;base64,AAAA"));
    }
}
