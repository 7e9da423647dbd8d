//! Thin client for the backend saved-recipes collection. Every request is
//! bearer-authenticated with a token supplied by the auth collaborator.
//!
//! Error policy is deliberately asymmetric and part of the interface: `list`
//! fails soft (logs and degrades to empty), `save` and `remove` fail loud
//! (the caller must handle the error).

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, warn};

use crate::error::{AppError, Result};

/// Auth collaborator: supplies the bearer token attached to every request.
pub trait TokenSource: Send + Sync {
    fn token(&self) -> String;
}

/// Persisted saved-recipe row as the backend returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecipe {
    pub id: String,
    pub user_name: String,
    pub recipe_id: String,
}

pub struct SavedRecipeClient<A> {
    client: Client,
    base_url: String,
    auth: A,
}

impl<A: TokenSource> SavedRecipeClient<A> {
    pub fn new(base_url: impl Into<String>, auth: A) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            auth,
        }
    }

    fn collection_url(&self, user_id: &str) -> String {
        format!("{}/api/users/{}/saved-recipes", self.base_url, user_id)
    }

    /// Fail soft: any transport or status error is logged and degrades to an
    /// empty list.
    pub async fn list(&self, user_id: &str) -> Vec<SavedRecipe> {
        match self.try_list(user_id).await {
            Ok(saved) => saved,
            Err(e) => {
                warn!(%user_id, "failed to retrieve saved recipes: {e}");
                Vec::new()
            }
        }
    }

    async fn try_list(&self, user_id: &str) -> Result<Vec<SavedRecipe>> {
        let response = self
            .client
            .get(self.collection_url(user_id))
            .bearer_auth(self.auth.token())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::SavedRecipes(response.status()));
        }

        Ok(response.json().await?)
    }

    /// Fail loud: a failed save is logged and returned to the caller.
    pub async fn save(&self, user_id: &str, recipe_id: &str) -> Result<SavedRecipe> {
        let response = self
            .client
            .post(self.collection_url(user_id))
            .bearer_auth(self.auth.token())
            .json(&json!({ "recipeId": recipe_id }))
            .send()
            .await?;

        if !response.status().is_success() {
            error!(%user_id, %recipe_id, status = %response.status(), "failed to save recipe");
            return Err(AppError::SavedRecipes(response.status()));
        }

        Ok(response.json().await?)
    }

    /// Fail loud, mirroring `save`.
    pub async fn remove(&self, user_id: &str, recipe_id: &str) -> Result<()> {
        let response = self
            .client
            .delete(format!("{}/{}", self.collection_url(user_id), recipe_id))
            .bearer_auth(self.auth.token())
            .send()
            .await?;

        if !response.status().is_success() {
            error!(%user_id, %recipe_id, status = %response.status(), "failed to remove saved recipe");
            return Err(AppError::SavedRecipes(response.status()));
        }

        Ok(())
    }
}
