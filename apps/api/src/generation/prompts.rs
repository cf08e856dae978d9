// All LLM prompt constants for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Enrichment prompt template.
/// Placeholders: {full_name}, {current_role}, {bio_raw}, {skills_raw},
///               {experience_json}, {projects_json}
pub const ENRICHMENT_PROMPT_TEMPLATE: &str = r#"You are an expert Career Coach and Senior Technical Recruiter.
Transform the following raw user data into a world-class, high-impact professional portfolio structure.

User Data:
Name: {full_name}
Role: {current_role}
Raw Bio: {bio_raw}
Raw Skills: {skills_raw}

Experience:
{experience_json}

Projects:
{projects_json}

Directives:
1. Create a catchy, professional 'tagline'.
2. Rewrite the 'professionalSummary' to be engaging and impactful (approx 3-4 sentences).
3. Categorize the skills logically (e.g., "Frontend", "Backend", "Tools", "Soft Skills").
4. Enhance experience bullet points to focus on achievements and metrics if possible.
5. Enhance project descriptions to sound professional and identify a specific "impact" or "result" for each project.
6. Ensure the tone is confident and modern."#;

/// Avatar prompt template. Placeholders: {current_role}, {skills_raw}
pub const IMAGE_PROMPT_TEMPLATE: &str = r#"A high-quality, abstract, 3D artistic representation of a {current_role} professional.
The image should visually represent proficiency in {skills_raw}.
Style: Modern, Minimalist, Tech-Noir, with a color palette of Deep Blue, Rust Orange, and Honey Gold.
Lighting: Cinematic, Volumetric.
This image will be used as a profile avatar for a professional portfolio."#;

/// Fills `{key}` placeholders in a single pass, so user-supplied values that
/// happen to contain `{...}` are never expanded a second time.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let hit = values
            .iter()
            .find(|(key, _)| tail.starts_with(key) && tail[key.len()..].starts_with('}'));
        match hit {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}
