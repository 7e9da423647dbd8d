//! # Dishcover
//!
//! Ingredient-driven recipe discovery: browse a categorized ingredient
//! catalog, select ingredients, search a Spoonacular-style API, and manage
//! saved recipes against a backend collection.
//!
//! The flow runs selection → [`spoonacular::SearchClient`] →
//! [`recipe::RecipeRecord`] → [`card::compose`], with
//! [`saved::SavedRecipeClient`] handling the save/remove follow-on actions.
//! [`session::SearchSession`] is the error-absorbing boundary around the
//! whole search: callers always get a record list plus an optional
//! user-facing message, never an error.

pub mod card;
pub mod catalog;
pub mod config;
pub mod error;
pub mod recipe;
pub mod saved;
pub mod selection;
pub mod session;
pub mod spoonacular;
