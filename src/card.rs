//! Pure display composition for a recipe card: which tags, steps, counts,
//! and action control a renderer should show. No I/O.

use crate::recipe::RecipeRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardAction {
    Save,
    Remove,
}

#[derive(Debug, Clone)]
pub struct CardView {
    pub title: String,
    pub image_url: Option<String>,
    pub ingredient_tags: Vec<String>,
    /// Numbered steps, 1-based.
    pub steps: Vec<(usize, String)>,
    pub matching_count: Option<u32>,
    pub missing_count: Option<u32>,
    pub pairings: Vec<String>,
    pub source_url: Option<String>,
    /// Exactly one action when the control row is visible, never both.
    pub action: Option<CardAction>,
}

/// An absent recipe renders nothing. `show_actions` independently controls
/// whether the save/remove row appears at all.
pub fn compose(
    recipe: Option<&RecipeRecord>,
    is_saved: bool,
    show_actions: bool,
) -> Option<CardView> {
    let recipe = recipe?;

    let ingredient_tags = if !recipe.missed_ingredients.is_empty() {
        recipe
            .used_ingredients
            .iter()
            .chain(&recipe.missed_ingredients)
            .cloned()
            .collect()
    } else {
        recipe.ingredients.clone()
    };

    Some(CardView {
        title: recipe.title.clone(),
        image_url: (!recipe.image_url.is_empty()).then(|| recipe.image_url.clone()),
        ingredient_tags,
        steps: recipe
            .instructions
            .iter()
            .enumerate()
            .map(|(i, step)| (i + 1, step.clone()))
            .collect(),
        matching_count: recipe.search_mode.then_some(recipe.used_ingredient_count),
        missing_count: recipe.search_mode.then_some(recipe.missed_ingredient_count),
        pairings: recipe.pairings.clone(),
        source_url: recipe.source_url.clone(),
        action: show_actions.then(|| {
            if is_saved {
                CardAction::Remove
            } else {
                CardAction::Save
            }
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record() -> RecipeRecord {
        let now = Utc::now();
        RecipeRecord {
            id: "101".into(),
            title: "Garlic Chicken".into(),
            image_url: "http://img/101.jpg".into(),
            ingredients: vec!["2 cloves garlic".into(), "1 lb chicken".into()],
            instructions: vec!["Step one".into(), "Step two".into()],
            used_ingredients: vec!["chicken".into(), "garlic".into()],
            missed_ingredients: vec!["thyme".into()],
            used_ingredient_count: 2,
            missed_ingredient_count: 1,
            pairings: Vec::new(),
            source_url: Some("http://recipes/101".into()),
            is_favorite: false,
            search_mode: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn absent_recipe_renders_nothing() {
        assert!(compose(None, false, true).is_none());
    }

    #[test]
    fn search_mode_merges_used_and_missed_tags() {
        let view = compose(Some(&record()), false, true).unwrap();
        assert_eq!(view.ingredient_tags, vec!["chicken", "garlic", "thyme"]);
        assert_eq!(view.matching_count, Some(2));
        assert_eq!(view.missing_count, Some(1));
    }

    #[test]
    fn plain_ingredients_when_nothing_missed() {
        let mut r = record();
        r.missed_ingredients.clear();
        let view = compose(Some(&r), false, true).unwrap();
        assert_eq!(view.ingredient_tags, vec!["2 cloves garlic", "1 lb chicken"]);
    }

    #[test]
    fn exactly_one_action_depending_on_saved_state() {
        let r = record();
        assert_eq!(compose(Some(&r), false, true).unwrap().action, Some(CardAction::Save));
        assert_eq!(compose(Some(&r), true, true).unwrap().action, Some(CardAction::Remove));
    }

    #[test]
    fn action_row_can_be_hidden() {
        assert_eq!(compose(Some(&record()), true, false).unwrap().action, None);
    }

    #[test]
    fn steps_are_numbered_from_one() {
        let view = compose(Some(&record()), false, false).unwrap();
        assert_eq!(view.steps[0], (1, "Step one".to_string()));
        assert_eq!(view.steps[1], (2, "Step two".to_string()));
    }
}
