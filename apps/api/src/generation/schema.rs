//! Response schema for the enrichment call.
//!
//! Mirrors `GeneratedPortfolio` minus `heroImage`, in the OpenAPI subset the
//! Gemini `responseSchema` field accepts. Every property is required at every
//! level.

use serde_json::{json, Value};

fn string() -> Value {
    json!({ "type": "STRING" })
}

fn string_array() -> Value {
    json!({ "type": "ARRAY", "items": string() })
}

fn object(properties: &[(&str, Value)]) -> Value {
    let required: Vec<&str> = properties.iter().map(|(name, _)| *name).collect();
    let properties: serde_json::Map<String, Value> = properties
        .iter()
        .map(|(name, schema)| (name.to_string(), schema.clone()))
        .collect();
    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": required,
    })
}

fn array_of(item: Value) -> Value {
    json!({ "type": "ARRAY", "items": item })
}

pub fn portfolio_response_schema() -> Value {
    object(&[
        (
            "personalBrand",
            object(&[
                ("tagline", string()),
                ("professionalSummary", string()),
                ("keyStrengths", string_array()),
            ]),
        ),
        (
            "skills",
            array_of(object(&[("category", string()), ("items", string_array())])),
        ),
        (
            "experience",
            array_of(object(&[
                ("company", string()),
                ("role", string()),
                ("duration", string()),
                ("achievements", string_array()),
            ])),
        ),
        (
            "projects",
            array_of(object(&[
                ("title", string()),
                ("description", string()),
                ("techStack", string_array()),
                ("impact", string()),
            ])),
        ),
        ("contact", object(&[("ctaMessage", string())])),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::fixtures::sample_portfolio;

    /// Walks the schema and asserts every OBJECT lists all its properties as required.
    fn assert_all_required(schema: &Value, path: &str) {
        match schema["type"].as_str() {
            Some("OBJECT") => {
                let props = schema["properties"].as_object().unwrap();
                let required: Vec<&str> = schema["required"]
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|v| v.as_str().unwrap())
                    .collect();
                for (name, child) in props {
                    assert!(required.contains(&name.as_str()), "{path}.{name} not required");
                    assert_all_required(child, &format!("{path}.{name}"));
                }
            }
            Some("ARRAY") => assert_all_required(&schema["items"], &format!("{path}[]")),
            _ => {}
        }
    }

    #[test]
    fn test_every_level_is_required() {
        assert_all_required(&portfolio_response_schema(), "$");
    }

    #[test]
    fn test_schema_excludes_hero_image() {
        let schema = portfolio_response_schema();
        assert!(schema["properties"].get("heroImage").is_none());
    }

    #[test]
    fn test_schema_keys_match_serialized_portfolio() {
        let schema = portfolio_response_schema();
        let value = serde_json::to_value(sample_portfolio()).unwrap();
        let mut schema_keys: Vec<&String> = schema["properties"].as_object().unwrap().keys().collect();
        let mut model_keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        schema_keys.sort();
        model_keys.sort();
        assert_eq!(schema_keys, model_keys);

        let project_schema: Vec<&String> = schema["properties"]["projects"]["items"]["properties"]
            .as_object()
            .unwrap()
            .keys()
            .collect();
        for key in value["projects"][0].as_object().unwrap().keys() {
            assert!(project_schema.contains(&key), "schema missing projects[].{key}");
        }
    }
}
