//! Recipe listing API
//!
//! [REQ-RR-F-020]: Populates the selection dropdowns on both comparison
//! views; recipes appear in dataset order.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

/// One selectable recipe with its recorded metric names
#[derive(Debug, Serialize)]
pub struct RecipeInfo {
    pub id: String,
    /// Metric names in document order; empty for a recipe without metadata
    pub metrics: Vec<String>,
}

/// Recipe list response
#[derive(Debug, Serialize)]
pub struct RecipesResponse {
    pub recipes: Vec<RecipeInfo>,
}

/// GET /api/recipes
///
/// Returns the recipe list in presentation order with per-recipe metric
/// names for the RCA parameter dropdown.
pub async fn list_recipes(State(state): State<AppState>) -> Json<RecipesResponse> {
    let recipes = state
        .dataset
        .recipes
        .iter()
        .map(|id| RecipeInfo {
            id: id.clone(),
            metrics: state
                .dataset
                .metric_names(id)
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
        .collect();

    Json(RecipesResponse { recipes })
}
