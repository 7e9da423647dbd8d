//! Page-level search session: owns the selection and the current record
//! list, absorbs every search error at this boundary, and guards against
//! stale responses from overlapping searches with a generation counter.

use tracing::{debug, error};

use crate::{
    error::Result, recipe::RecipeRecord, selection::Selection, spoonacular::SearchClient,
};

pub const SELECT_AT_LEAST_ONE: &str = "Please select at least one ingredient";
pub const NO_RECIPES_FOUND: &str = "No recipes found with selected ingredients";

#[derive(Debug, Default)]
pub struct SearchSession {
    selection: Selection,
    records: Vec<RecipeRecord>,
    message: Option<String>,
    loading: bool,
    generation: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, name: &str) {
        self.selection.toggle(name);
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn records(&self) -> &[RecipeRecord] {
        &self.records
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Start a search. Returns the generation token to pass to [`apply`],
    /// or `None` (with the validation message set) if nothing is selected —
    /// in which case no network call should be made.
    ///
    /// [`apply`]: SearchSession::apply
    pub fn begin_search(&mut self) -> Option<u64> {
        if self.selection.is_empty() {
            self.message = Some(SELECT_AT_LEAST_ONE.to_string());
            return None;
        }

        self.message = None;
        self.loading = true;
        self.generation += 1;
        Some(self.generation)
    }

    /// Fold a search outcome back into the session. Outcomes carrying a
    /// superseded generation are dropped so a slow response can never
    /// overwrite a newer search.
    ///
    /// Errors stop here: the caller always ends up with a (possibly empty)
    /// record list plus a user-facing message, never an error value.
    pub fn apply(&mut self, generation: u64, outcome: Result<Vec<RecipeRecord>>) {
        if generation != self.generation {
            debug!(generation, current = self.generation, "discarding stale search result");
            return;
        }

        self.loading = false;
        match outcome {
            Ok(records) => {
                if records.is_empty() {
                    self.message = Some(NO_RECIPES_FOUND.to_string());
                }
                self.records = records;
            }
            Err(e) => {
                error!("recipe search failed: {e}");
                self.message = Some(e.to_string());
                self.records = Vec::new();
            }
        }
    }

    /// Convenience path for callers without overlapping searches: begin,
    /// run the client, apply.
    pub async fn run_search(&mut self, client: &SearchClient) {
        let Some(generation) = self.begin_search() else {
            return;
        };

        let outcome = client.search(&self.selection).await;
        self.apply(generation, outcome);
    }
}
