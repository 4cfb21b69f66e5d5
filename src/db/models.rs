use crate::schema::{categories, drinks, questions};
use diesel::{AsChangeset, Identifiable, Insertable, Queryable};
use serde::{Deserialize, Serialize};

/// Represents a drink on the menu
#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Identifiable, AsChangeset)]
#[diesel(table_name = drinks)]
pub struct Drink {
    /// Unique identifier for the drink
    pub id: i32,
    /// Display title, unique across the menu
    pub title: String,
    /// JSON serialized ingredient list
    pub recipe: String,
}

/// Insertable payload for a new drink row
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = drinks)]
pub struct NewDrink {
    pub title: String,
    pub recipe: String,
}

/// Represents a trivia question
#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Identifiable, AsChangeset)]
#[diesel(table_name = questions)]
pub struct Question {
    /// Unique identifier for the question
    pub id: i32,
    /// Question text shown to the player
    pub question: String,
    /// Answer text
    pub answer: String,
    /// Referenced category id
    pub category: i32,
    /// Difficulty rating
    pub difficulty: i32,
}

/// Insertable payload for a new question row
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = questions)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Represents a question category
#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Identifiable)]
#[diesel(table_name = categories)]
pub struct Category {
    /// Unique identifier for the category
    pub id: i32,
    /// Category label
    #[serde(rename = "type")]
    pub type_: String,
}

/// One ingredient of a drink recipe as stored in the `recipe` column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    pub color: String,
    pub parts: i64,
}

/// Short-form ingredient projection, title and name stripped
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredientShort {
    pub color: String,
    pub parts: i64,
}

/// Short-form drink representation returned by the public listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrinkShort {
    pub id: i32,
    pub title: String,
    pub recipe: Vec<RecipeIngredientShort>,
}

/// Long-form drink representation returned to privileged clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrinkLong {
    pub id: i32,
    pub title: String,
    pub recipe: Vec<RecipeIngredient>,
}

impl Drink {
    /// Parses the stored recipe column back into its ingredient list
    pub fn ingredients(&self) -> Result<Vec<RecipeIngredient>, serde_json::Error> {
        serde_json::from_str(&self.recipe)
    }

    /// Reduced field projection: ingredient names are omitted
    pub fn short(&self) -> Result<DrinkShort, serde_json::Error> {
        let recipe = self
            .ingredients()?
            .into_iter()
            .map(|ingredient| RecipeIngredientShort {
                color: ingredient.color,
                parts: ingredient.parts,
            })
            .collect();

        Ok(DrinkShort {
            id: self.id,
            title: self.title.clone(),
            recipe,
        })
    }

    /// Full field projection including ingredient names
    pub fn long(&self) -> Result<DrinkLong, serde_json::Error> {
        Ok(DrinkLong {
            id: self.id,
            title: self.title.clone(),
            recipe: self.ingredients()?,
        })
    }
}
