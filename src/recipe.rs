use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::spoonacular::{RecipeCandidate, RecipeDetail};

/// Display-ready recipe, merged from a search candidate and its detail fetch.
///
/// `id` is always the external API's numeric id coerced to a string, and the
/// bookkeeping fields (timestamps, favorite flag) keep the shape compatible
/// with the saved-recipe store.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub used_ingredients: Vec<String>,
    pub missed_ingredients: Vec<String>,
    pub used_ingredient_count: u32,
    pub missed_ingredient_count: u32,
    pub pairings: Vec<String>,
    pub source_url: Option<String>,
    pub is_favorite: bool,
    pub search_mode: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RecipeRecord {
    pub fn from_parts(candidate: &RecipeCandidate, detail: &RecipeDetail) -> Self {
        let now = Utc::now();

        Self {
            id: candidate.id.to_string(),
            title: candidate.title.clone(),
            image_url: candidate.image.clone(),
            ingredients: detail
                .extended_ingredients
                .iter()
                .map(|ingredient| ingredient.original.clone())
                .collect(),
            instructions: detail
                .instructions
                .as_deref()
                .map(split_instructions)
                .unwrap_or_default(),
            used_ingredients: candidate
                .used_ingredients
                .iter()
                .map(|ingredient| ingredient.name.clone())
                .collect(),
            missed_ingredients: candidate
                .missed_ingredients
                .iter()
                .map(|ingredient| ingredient.name.clone())
                .collect(),
            used_ingredient_count: candidate.used_ingredient_count,
            missed_ingredient_count: candidate.missed_ingredient_count,
            pairings: Vec::new(),
            source_url: detail.source_url.clone(),
            is_favorite: false,
            search_mode: true,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Split free-form instruction text into steps, one per line, dropping blank
/// segments.
pub fn split_instructions(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splitting_drops_blank_segments() {
        assert_eq!(
            split_instructions("Step one\n\nStep two\n"),
            vec!["Step one", "Step two"]
        );
    }

    #[test]
    fn splitting_empty_text_yields_no_steps() {
        assert!(split_instructions("").is_empty());
    }
}
