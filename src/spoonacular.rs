//! Two-phase recipe lookup against the Spoonacular-style API: one
//! `findByIngredients` search, then one `{id}/information` fetch per
//! candidate, dispatched concurrently and joined all-or-nothing.

use std::time::Duration;

use futures::future::try_join_all;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    config::Config,
    error::{AppError, Result},
    recipe::RecipeRecord,
    selection::Selection,
};

#[derive(Debug, Clone, Deserialize)]
pub struct MatchedIngredient {
    pub name: String,
}

/// Raw result of the search-by-ingredients call, before detail enrichment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCandidate {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub used_ingredients: Vec<MatchedIngredient>,
    #[serde(default)]
    pub missed_ingredients: Vec<MatchedIngredient>,
    #[serde(default)]
    pub used_ingredient_count: u32,
    #[serde(default)]
    pub missed_ingredient_count: u32,
}

/// Raw result of the per-id information call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    #[serde(default)]
    pub extended_ingredients: Vec<ExtendedIngredient>,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtendedIngredient {
    pub original: String,
}

pub struct SearchClient {
    client: Client,
    config: Config,
}

impl SearchClient {
    pub fn new(config: Config) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(AppError::MissingApiKey);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Turn the selected ingredients into enriched recipe records.
    ///
    /// Fails fast on an empty selection without touching the network. Any
    /// failed detail fetch fails the whole search; no partial list is ever
    /// returned. Zero candidates is not an error.
    pub async fn search(&self, selection: &Selection) -> Result<Vec<RecipeRecord>> {
        if selection.is_empty() {
            return Err(AppError::NoIngredientsSelected);
        }

        let candidates = self.find_by_ingredients(selection).await?;
        debug!(count = candidates.len(), "candidate recipes fetched");

        let details =
            try_join_all(candidates.iter().map(|candidate| self.information(candidate.id)))
                .await?;

        Ok(candidates
            .iter()
            .zip(details.iter())
            .map(|(candidate, detail)| RecipeRecord::from_parts(candidate, detail))
            .collect())
    }

    async fn find_by_ingredients(&self, selection: &Selection) -> Result<Vec<RecipeCandidate>> {
        let ingredients = selection.join_for_query();
        let number = self.config.result_cap.to_string();

        let response = self
            .client
            .get(format!("{}/findByIngredients", self.config.recipe_base_url))
            .query(&[
                ("apiKey", self.config.api_key.as_str()),
                ("ingredients", ingredients.as_str()),
                ("number", number.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::RecipeLookup(response.status()));
        }

        Ok(response.json().await?)
    }

    async fn information(&self, id: u64) -> Result<RecipeDetail> {
        let response = self
            .client
            .get(format!("{}/{}/information", self.config.recipe_base_url, id))
            .query(&[("apiKey", self.config.api_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::RecipeLookup(response.status()));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_an_empty_api_key() {
        let config = Config {
            api_key: String::new(),
            recipe_base_url: "http://localhost".into(),
            backend_base_url: String::new(),
            result_cap: 6,
            timeout_secs: 5,
        };

        assert!(matches!(
            SearchClient::new(config),
            Err(AppError::MissingApiKey)
        ));
    }
}
