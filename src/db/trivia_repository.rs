use crate::db::models::{Category, NewQuestion, Question};
use crate::errors::Error;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

/// Repository for managing question and category records in the SQLite database
pub struct TriviaRepository<'a> {
    /// Database connection
    pub conn: &'a mut SqliteConnection,
}

impl<'a> TriviaRepository<'a> {
    /// Creates a new TriviaRepository instance
    ///
    /// # Arguments
    ///
    /// * `conn` - Mutable reference to SQLite database connection
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        TriviaRepository { conn }
    }

    /// Retrieves every question ordered by primary key
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn all_questions(&mut self) -> Result<Vec<Question>, Error> {
        use crate::schema::questions::dsl::*;

        let found = questions.order_by(id.asc()).load::<Question>(self.conn)?;
        Ok(found)
    }

    /// Counts the questions stored across every category
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn count_questions(&mut self) -> Result<i64, Error> {
        use crate::schema::questions::dsl::*;

        let total = questions.count().get_result::<i64>(self.conn)?;
        Ok(total)
    }

    /// Retrieves a single question by primary key, `None` when no row matches
    ///
    /// # Arguments
    ///
    /// * `question_id` - The question id to look up
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn find_question(&mut self, question_id: i32) -> Result<Option<Question>, Error> {
        use crate::schema::questions::dsl::*;

        let found = questions
            .filter(id.eq(question_id))
            .first::<Question>(self.conn)
            .optional()?;
        Ok(found)
    }

    /// Inserts a new question record
    ///
    /// # Arguments
    ///
    /// * `new_question` - Question text, answer, category reference and difficulty
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn insert_question(&mut self, new_question: NewQuestion) -> Result<(), Error> {
        use crate::schema::questions::dsl::*;

        diesel::insert_into(questions)
            .values(&new_question)
            .execute(self.conn)?;
        Ok(())
    }

    /// Deletes a question by primary key
    ///
    /// # Arguments
    ///
    /// * `question_id` - The question id to delete
    ///
    /// # Returns
    ///
    /// The number of rows removed (0 when the id was unknown)
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn delete_question(&mut self, question_id: i32) -> Result<usize, Error> {
        use crate::schema::questions::dsl::*;

        let removed = diesel::delete(questions.filter(id.eq(question_id))).execute(self.conn)?;
        Ok(removed)
    }

    /// Retrieves every category ordered by primary key
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn all_categories(&mut self) -> Result<Vec<Category>, Error> {
        use crate::schema::categories::dsl::*;

        let found = categories.order_by(id.asc()).load::<Category>(self.conn)?;
        Ok(found)
    }

    /// Inserts a category with the given label
    ///
    /// # Arguments
    ///
    /// * `label` - The category label to store
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn insert_category(&mut self, label: &str) -> Result<(), Error> {
        use crate::schema::categories::dsl::*;

        diesel::insert_into(categories)
            .values(type_.eq(label))
            .execute(self.conn)?;
        Ok(())
    }
}
