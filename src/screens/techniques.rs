// ABOUTME: Technique library listing and detail lookup

use crate::content::Content;
use gymgo_core::models::Technique;
use serde::Serialize;

/// Emoji shown in the list when a technique has none
const LIST_EMOJI: &str = "📌";

/// Emoji shown in the detail title when a technique has none
const DETAIL_EMOJI: &str = "📚";

/// Library entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechniqueCard {
    /// Technique id
    pub id: String,
    /// Emoji
    pub emoji: String,
    /// Label
    pub label: String,
    /// One-line summary
    pub summary: String,
}

/// Full technique card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechniqueDetail {
    /// Technique id
    pub id: String,
    /// `<emoji> <label>`
    pub title: String,
    /// One-line summary
    pub summary: String,
    /// Steps
    pub howto: Vec<String>,
    /// Worked example
    pub example: String,
}

fn emoji_or(technique: &Technique, fallback: &str) -> String {
    technique
        .emoji
        .as_deref()
        .filter(|emoji| !emoji.is_empty())
        .unwrap_or(fallback)
        .to_owned()
}

/// List every technique in library order
#[must_use]
pub fn render(content: &Content) -> Vec<TechniqueCard> {
    content
        .techniques
        .iter()
        .map(|technique| TechniqueCard {
            id: technique.id.clone(),
            emoji: emoji_or(technique, LIST_EMOJI),
            label: technique.label.clone(),
            summary: technique.summary.clone(),
        })
        .collect()
}

/// Detail card for `id`
#[must_use]
pub fn detail(content: &Content, id: &str) -> Option<TechniqueDetail> {
    let technique = content.find_technique(id)?;
    Some(TechniqueDetail {
        id: technique.id.clone(),
        title: format!("{} {}", emoji_or(technique, DETAIL_EMOJI), technique.label),
        summary: technique.summary.clone(),
        howto: technique.howto.clone(),
        example: technique.example.clone(),
    })
}
