use crate::api::errors::{bad_request, not_found, ApiError};
use crate::auth::AuthGate;
use crate::db::{Database, DrinkLong, DrinkRepository, DrinkShort, NewDrink, RecipeIngredient};
use axum::extract::{Extension, Path};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

/// Represents the request payload for creating a new drink
#[derive(Deserialize)]
pub struct CreateDrinkRequest {
    pub title: String,
    pub recipe: Vec<RecipeIngredient>,
}

/// Represents the request payload for renaming a drink
#[derive(Deserialize)]
pub struct UpdateDrinkRequest {
    #[serde(default)]
    pub title: Option<String>,
}

/// Public drink listing in the short-form representation
#[derive(Serialize)]
pub struct DrinkListResponse {
    pub success: bool,
    pub drinks: Vec<DrinkShort>,
}

/// Privileged drink listing in the long-form representation
#[derive(Serialize)]
pub struct DrinkDetailResponse {
    pub success: bool,
    pub drinks: Vec<DrinkLong>,
}

/// Acknowledgement returned after deleting a drink
#[derive(Serialize)]
pub struct DeleteDrinkResponse {
    pub success: bool,
    pub deleted: i32,
}

/// Lists every drink in the short-form representation
///
/// Public endpoint. An empty menu is reported as not-found.
#[axum::debug_handler]
pub async fn get_drinks(
    Extension(database): Extension<Database>,
) -> Result<Json<DrinkListResponse>, ApiError> {
    let mut conn = database.get_conn()?;
    let mut repo = DrinkRepository::new(&mut conn);

    let all = repo.all()?;
    if all.is_empty() {
        return Err(not_found());
    }

    let drinks = all
        .iter()
        .map(|drink| drink.short())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(DrinkListResponse {
        success: true,
        drinks,
    }))
}

/// Lists every drink in the long-form representation
///
/// Requires the `get:drinkdetails` permission.
#[axum::debug_handler]
pub async fn get_drink_details(
    Extension(database): Extension<Database>,
    Extension(gate): Extension<AuthGate>,
    headers: HeaderMap,
) -> Result<Json<DrinkDetailResponse>, ApiError> {
    gate.authorize(&headers, "get:drinkdetails")?;

    let mut conn = database.get_conn()?;
    let mut repo = DrinkRepository::new(&mut conn);

    let all = repo.all()?;
    if all.is_empty() {
        return Err(not_found());
    }

    let drinks = all
        .iter()
        .map(|drink| drink.long())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(DrinkDetailResponse {
        success: true,
        drinks,
    }))
}

/// Creates a new drink and returns it in the long-form representation
///
/// Requires the `post:drinks` permission. A duplicate title is reported as
/// unprocessable by the store's unique constraint.
#[axum::debug_handler]
pub async fn create_drink(
    Extension(database): Extension<Database>,
    Extension(gate): Extension<AuthGate>,
    headers: HeaderMap,
    body: Option<Json<CreateDrinkRequest>>,
) -> Result<Json<DrinkDetailResponse>, ApiError> {
    gate.authorize(&headers, "post:drinks")?;

    let Json(payload) = body.ok_or_else(bad_request)?;
    if payload.title.is_empty() {
        return Err(bad_request());
    }
    let recipe = serde_json::to_string(&payload.recipe)?;

    let mut conn = database.get_conn()?;
    let mut repo = DrinkRepository::new(&mut conn);

    let stored = repo.insert(NewDrink {
        title: payload.title,
        recipe,
    })?;

    Ok(Json(DrinkDetailResponse {
        success: true,
        drinks: vec![stored.long()?],
    }))
}

/// Renames an existing drink and returns it in the long-form representation
///
/// Requires the `patch:drinks` permission.
#[axum::debug_handler]
pub async fn update_drink(
    Extension(database): Extension<Database>,
    Extension(gate): Extension<AuthGate>,
    Path(drink_id): Path<i32>,
    headers: HeaderMap,
    body: Option<Json<UpdateDrinkRequest>>,
) -> Result<Json<DrinkDetailResponse>, ApiError> {
    gate.authorize(&headers, "patch:drinks")?;

    let Json(payload) = body.ok_or_else(bad_request)?;
    let new_title = payload
        .title
        .filter(|title| !title.is_empty())
        .ok_or_else(bad_request)?;

    let mut conn = database.get_conn()?;
    let mut repo = DrinkRepository::new(&mut conn);

    if repo.find(drink_id)?.is_none() {
        return Err(not_found());
    }
    let updated = repo.update_title(drink_id, &new_title)?;

    Ok(Json(DrinkDetailResponse {
        success: true,
        drinks: vec![updated.long()?],
    }))
}

/// Deletes a drink by id
///
/// Requires the `delete:drinks` permission.
#[axum::debug_handler]
pub async fn delete_drink(
    Extension(database): Extension<Database>,
    Extension(gate): Extension<AuthGate>,
    Path(drink_id): Path<i32>,
    headers: HeaderMap,
) -> Result<Json<DeleteDrinkResponse>, ApiError> {
    gate.authorize(&headers, "delete:drinks")?;

    let mut conn = database.get_conn()?;
    let mut repo = DrinkRepository::new(&mut conn);

    let removed = repo.delete(drink_id)?;
    if removed == 0 {
        return Err(not_found());
    }

    Ok(Json(DeleteDrinkResponse {
        success: true,
        deleted: drink_id,
    }))
}
