use crate::db::models::{Drink, NewDrink};
use crate::errors::Error;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

/// Repository for managing drink records in the SQLite database
pub struct DrinkRepository<'a> {
    /// Database connection
    pub conn: &'a mut SqliteConnection,
}

impl<'a> DrinkRepository<'a> {
    /// Creates a new DrinkRepository instance
    ///
    /// # Arguments
    ///
    /// * `conn` - Mutable reference to SQLite database connection
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        DrinkRepository { conn }
    }

    /// Retrieves every drink ordered by primary key
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn all(&mut self) -> Result<Vec<Drink>, Error> {
        use crate::schema::drinks::dsl::*;

        let found = drinks.order_by(id.asc()).load::<Drink>(self.conn)?;
        Ok(found)
    }

    /// Retrieves a single drink by primary key, `None` when no row matches
    ///
    /// # Arguments
    ///
    /// * `drink_id` - The drink id to look up
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn find(&mut self, drink_id: i32) -> Result<Option<Drink>, Error> {
        use crate::schema::drinks::dsl::*;

        let found = drinks
            .filter(id.eq(drink_id))
            .first::<Drink>(self.conn)
            .optional()?;
        Ok(found)
    }

    /// Inserts a new drink and returns the stored row.
    ///
    /// The row is read back through the unique `title` column, which SQLite
    /// fills in with the generated id.
    ///
    /// # Arguments
    ///
    /// * `new_drink` - Title and serialized recipe to insert
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail, including a unique
    /// constraint violation on a duplicate title
    pub fn insert(&mut self, new_drink: NewDrink) -> Result<Drink, Error> {
        use crate::schema::drinks::dsl::*;

        diesel::insert_into(drinks)
            .values(&new_drink)
            .execute(self.conn)?;

        let stored = drinks
            .filter(title.eq(&new_drink.title))
            .first::<Drink>(self.conn)?;
        Ok(stored)
    }

    /// Updates the title of a drink and returns the updated row
    ///
    /// # Arguments
    ///
    /// * `drink_id` - The drink id to update
    /// * `new_title` - The new title to set
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail or the row vanished
    pub fn update_title(&mut self, drink_id: i32, new_title: &str) -> Result<Drink, Error> {
        use crate::schema::drinks::dsl::*;

        diesel::update(drinks.filter(id.eq(drink_id)))
            .set(title.eq(new_title))
            .execute(self.conn)?;

        let updated = drinks.filter(id.eq(drink_id)).first::<Drink>(self.conn)?;
        Ok(updated)
    }

    /// Deletes a drink by primary key
    ///
    /// # Arguments
    ///
    /// * `drink_id` - The drink id to delete
    ///
    /// # Returns
    ///
    /// The number of rows removed (0 when the id was unknown)
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn delete(&mut self, drink_id: i32) -> Result<usize, Error> {
        use crate::schema::drinks::dsl::*;

        let removed = diesel::delete(drinks.filter(id.eq(drink_id))).execute(self.conn)?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    fn recipe_json() -> String {
        r#"[{"name":"espresso","color":"brown","parts":1},{"name":"milk","color":"white","parts":3}]"#
            .to_string()
    }

    #[test]
    fn insert_and_list_drinks() {
        let database = Database::new_in_memory();
        database.init_schema().unwrap();
        let mut conn = database.get_conn().unwrap();
        let mut repo = DrinkRepository::new(&mut conn);

        let stored = repo
            .insert(NewDrink {
                title: "Latte".to_string(),
                recipe: recipe_json(),
            })
            .unwrap();
        assert_eq!(stored.title, "Latte");

        let all = repo.all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, stored.id);
    }

    #[test]
    fn duplicate_title_is_rejected() {
        let database = Database::new_in_memory();
        database.init_schema().unwrap();
        let mut conn = database.get_conn().unwrap();
        let mut repo = DrinkRepository::new(&mut conn);

        repo.insert(NewDrink {
            title: "Flat White".to_string(),
            recipe: recipe_json(),
        })
        .unwrap();

        let result = repo.insert(NewDrink {
            title: "Flat White".to_string(),
            recipe: recipe_json(),
        });
        assert!(result.is_err());
    }

    #[test]
    fn update_title_and_delete() {
        let database = Database::new_in_memory();
        database.init_schema().unwrap();
        let mut conn = database.get_conn().unwrap();
        let mut repo = DrinkRepository::new(&mut conn);

        let stored = repo
            .insert(NewDrink {
                title: "Mocha".to_string(),
                recipe: recipe_json(),
            })
            .unwrap();

        let updated = repo.update_title(stored.id, "Iced Mocha").unwrap();
        assert_eq!(updated.title, "Iced Mocha");
        assert_eq!(updated.id, stored.id);

        assert_eq!(repo.delete(stored.id).unwrap(), 1);
        assert_eq!(repo.delete(stored.id).unwrap(), 0);
        assert!(repo.find(stored.id).unwrap().is_none());
    }
}
