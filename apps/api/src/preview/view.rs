//! View model for the rendered portfolio page.
//!
//! Everything here is a pure derivation of the submitted `UserInput` and the
//! `GeneratedPortfolio`; none of it can fail, whatever lists are empty.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{ExperienceEntry, GeneratedPortfolio, UserInput};
use crate::preview::recency::{filter_by_recency, RecencyWindow, WINDOW_OPTIONS};

/// Visible fraction of the skills section that triggers its reveal animation.
pub const REVEAL_THRESHOLD: f32 = 0.15;

const DARK_BACKGROUND: &str = "#020617";
const LIGHT_BACKGROUND: &str = "#f8fafc";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Follows the client's colour-scheme preference; dark when unknown.
    pub fn initial(prefers_dark: Option<bool>) -> Self {
        match prefers_dark {
            Some(false) => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Page background used when exporting, so the PDF matches the screen.
    pub fn export_background(self) -> &'static str {
        match self {
            Theme::Light => LIGHT_BACKGROUND,
            Theme::Dark => DARK_BACKGROUND,
        }
    }
}

/// One-shot latch for the skills reveal: once triggered it stays on.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn new(revealed: bool) -> Self {
        Self { revealed }
    }

    /// Feeds an observed visible ratio; returns whether the section is revealed.
    pub fn observe(&mut self, visible_ratio: f32) -> bool {
        if visible_ratio >= REVEAL_THRESHOLD {
            self.revealed = true;
        }
        self.revealed
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// What sits in the hero avatar frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum HeroVisual {
    Image { src: String },
    Initials { text: String },
}

/// Settings handed to the browser's HTML-to-PDF export.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSettings {
    pub filename: String,
    pub unit: &'static str,
    pub format: &'static str,
    pub orientation: &'static str,
    pub margin: u32,
    pub image_type: &'static str,
    pub image_quality: f32,
    pub scale: u32,
    pub window_width: u32,
    pub background_color: &'static str,
    pub enable_links: bool,
}

impl ExportSettings {
    pub fn for_user(full_name: &str, theme: Theme) -> Self {
        Self {
            filename: export_filename(full_name),
            unit: "pt",
            format: "a4",
            orientation: "portrait",
            margin: 0,
            image_type: "jpeg",
            image_quality: 0.98,
            scale: 2,
            // Desktop width keeps the layout intact in the export.
            window_width: 1440,
            background_color: theme.export_background(),
            enable_links: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowOption {
    pub label: &'static str,
    pub value: RecencyWindow,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    pub email: String,
}

/// Client-side state the view depends on.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewOptions {
    #[serde(default)]
    pub window: RecencyWindow,
    pub theme: Option<Theme>,
    pub prefers_dark: Option<bool>,
    #[serde(default)]
    pub skills_revealed: bool,
    pub skills_visible_ratio: Option<f32>,
}

/// Everything the page needs beyond the raw portfolio copy.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioView {
    pub brand_label: String,
    pub hero: HeroVisual,
    pub theme: Theme,
    /// Theme the toggle button switches to.
    pub toggle_target: Theme,
    pub experience_count: usize,
    pub project_count: usize,
    pub window: RecencyWindow,
    pub window_options: Vec<WindowOption>,
    pub timeline: Vec<ExperienceEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline_empty_message: Option<String>,
    pub skills_revealed: bool,
    pub links: SocialLinks,
    pub export: ExportSettings,
    pub footer: String,
}

/// First letter of each name part, at most two, uppercased.
pub fn initials(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Navigation brand: the first name plus ".folio".
pub fn brand_label(full_name: &str) -> String {
    let first = full_name.split_whitespace().next().unwrap_or_default();
    format!("{first}.folio")
}

pub fn export_filename(full_name: &str) -> String {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    let whitespace =
        WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("static pattern compiles"));
    format!("{}_Portfolio.pdf", whitespace.replace_all(full_name, "_"))
}

pub fn hero_visual(user: &UserInput, portfolio: &GeneratedPortfolio) -> HeroVisual {
    match portfolio.hero_image.as_deref().map(str::trim) {
        Some(src) if !src.is_empty() => HeroVisual::Image {
            src: src.to_string(),
        },
        _ => HeroVisual::Initials {
            text: initials(&user.full_name),
        },
    }
}

pub fn build_view(
    user: &UserInput,
    portfolio: &GeneratedPortfolio,
    options: &ViewOptions,
    current_year: i32,
) -> PortfolioView {
    let theme = options
        .theme
        .unwrap_or_else(|| Theme::initial(options.prefers_dark));

    let timeline: Vec<ExperienceEntry> =
        filter_by_recency(&portfolio.experience, options.window, current_year)
            .into_iter()
            .cloned()
            .collect();

    let timeline_empty_message = match options.window {
        RecencyWindow::Years(n) if timeline.is_empty() => {
            Some(format!("No experience found within the last {n} years."))
        }
        _ => None,
    };

    let mut latch = RevealLatch::new(options.skills_revealed);
    if let Some(ratio) = options.skills_visible_ratio {
        latch.observe(ratio);
    }

    PortfolioView {
        brand_label: brand_label(&user.full_name),
        hero: hero_visual(user, portfolio),
        theme,
        toggle_target: theme.toggle(),
        experience_count: user.experience.len(),
        project_count: user.projects.len(),
        window: options.window,
        window_options: WINDOW_OPTIONS
            .iter()
            .map(|(label, value)| WindowOption {
                label: *label,
                value: *value,
                selected: *value == options.window,
            })
            .collect(),
        timeline,
        timeline_empty_message,
        skills_revealed: latch.is_revealed(),
        links: SocialLinks {
            github: user.github_url().map(str::to_string),
            linkedin: user.linkedin_url().map(str::to_string),
            email: user.contact_email.clone(),
        },
        export: ExportSettings::for_user(&user.full_name, theme),
        footer: format!("Generated by FolioGen AI • {current_year}"),
    }
}
