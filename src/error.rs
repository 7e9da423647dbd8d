use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("SPOONACULAR_API_KEY is not set")]
    MissingApiKey,

    #[error("Invalid value for environment variable {0}")]
    InvalidConfig(&'static str),

    #[error("Please select at least one ingredient")]
    NoIngredientsSelected,

    #[error("Failed to fetch recipes (status {0})")]
    RecipeLookup(StatusCode),

    #[error("Saved-recipes request failed (status {0})")]
    SavedRecipes(StatusCode),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
