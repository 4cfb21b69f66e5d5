use crate::api::errors::{bad_request, not_found, ApiError};
use crate::constants::{ALL_CATEGORIES_ID, QUESTIONS_PER_PAGE};
use crate::core::{filter_by_category, page_window, search_by_substring, select_random_excluding};
use crate::db::{Category, Database, NewQuestion, Question, TriviaRepository};
use axum::extract::{Extension, Path, Query};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Page selector shared by the question listing endpoints
#[derive(Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<usize>,
}

/// Create-or-search payload accepted by POST /questions; the handler branches
/// on which fields are present
#[derive(Deserialize)]
pub struct QuestionPayload {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub category: Option<i32>,
    #[serde(default)]
    pub difficulty: Option<i32>,
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Represents the request payload for playing a quiz round
#[derive(Deserialize)]
pub struct QuizRequest {
    pub quiz_category: QuizCategory,
    #[serde(default)]
    pub previous_questions: Vec<i32>,
}

/// Category selector inside a quiz request; id 0 plays every category
#[derive(Deserialize)]
pub struct QuizCategory {
    pub id: i32,
}

/// Category id to label map
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub categories: BTreeMap<i32, String>,
}

/// One page of questions with listing context
#[derive(Serialize)]
pub struct QuestionListResponse {
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: i64,
    pub categories: BTreeMap<i32, String>,
    #[serde(rename = "currentCategory")]
    pub current_category: String,
}

/// One page of search matches
#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// Listing returned after creating a question
#[derive(Serialize)]
pub struct CreatedQuestionResponse {
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: i64,
    #[serde(rename = "currentCategory")]
    pub current_category: String,
}

/// One page of questions scoped to a category
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: i64,
    #[serde(rename = "currentCategory")]
    pub current_category: i32,
}

/// Acknowledgement returned after deleting a question
#[derive(Serialize)]
pub struct DeleteQuestionResponse {
    pub success: bool,
    pub question_deleted: i32,
}

/// Quiz round response carrying the selected question
#[derive(Serialize)]
pub struct QuizResponse {
    pub question: Question,
}

fn category_map(categories: Vec<Category>) -> BTreeMap<i32, String> {
    categories
        .into_iter()
        .map(|category| (category.id, category.type_))
        .collect()
}

/// Lists every category as an id to label map
#[axum::debug_handler]
pub async fn get_categories(
    Extension(database): Extension<Database>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let mut conn = database.get_conn()?;
    let mut repo = TriviaRepository::new(&mut conn);

    let categories = category_map(repo.all_categories()?);

    Ok(Json(CategoriesResponse { categories }))
}

/// Lists one page of questions together with the category map
///
/// A page window past the end of the collection is reported as not-found.
#[axum::debug_handler]
pub async fn get_questions(
    Extension(database): Extension<Database>,
    Query(query): Query<PageQuery>,
) -> Result<Json<QuestionListResponse>, ApiError> {
    let page = query.page.unwrap_or(1);

    let mut conn = database.get_conn()?;
    let mut repo = TriviaRepository::new(&mut conn);

    let all = repo.all_questions()?;
    let questions = page_window(&all, page, QUESTIONS_PER_PAGE);
    if questions.is_empty() {
        return Err(not_found());
    }

    let total_questions = repo.count_questions()?;
    let categories = category_map(repo.all_categories()?);

    Ok(Json(QuestionListResponse {
        questions,
        total_questions,
        categories,
        current_category: String::new(),
    }))
}

/// Deletes a question by id
#[axum::debug_handler]
pub async fn delete_question(
    Extension(database): Extension<Database>,
    Path(question_id): Path<i32>,
) -> Result<Json<DeleteQuestionResponse>, ApiError> {
    let mut conn = database.get_conn()?;
    let mut repo = TriviaRepository::new(&mut conn);

    let removed = repo.delete_question(question_id)?;
    if removed == 0 {
        return Err(not_found());
    }

    Ok(Json(DeleteQuestionResponse {
        success: true,
        question_deleted: question_id,
    }))
}

/// Searches questions or creates one, branching on the payload shape
///
/// A payload carrying `searchTerm` runs a case-insensitive substring search
/// and returns a page of matches, succeeding even when nothing matches. A
/// payload carrying all of question/answer/category/difficulty inserts the
/// question and returns the refreshed listing. Anything else is a bad
/// request.
#[axum::debug_handler]
pub async fn post_questions(
    Extension(database): Extension<Database>,
    Query(query): Query<PageQuery>,
    body: Option<Json<QuestionPayload>>,
) -> Result<Response, ApiError> {
    let Json(payload) = body.ok_or_else(bad_request)?;
    let page = query.page.unwrap_or(1);

    let mut conn = database.get_conn()?;
    let mut repo = TriviaRepository::new(&mut conn);

    if let Some(term) = payload.search_term.as_deref().filter(|term| !term.is_empty()) {
        let all = repo.all_questions()?;
        let matches = search_by_substring(&all, term);
        let total_questions = matches.len();
        let questions = page_window(&matches, page, QUESTIONS_PER_PAGE);

        return Ok(Json(SearchResponse {
            success: true,
            questions,
            total_questions,
        })
        .into_response());
    }

    match (
        payload.question,
        payload.answer,
        payload.category,
        payload.difficulty,
    ) {
        (Some(question), Some(answer), Some(category), Some(difficulty))
            if !question.is_empty() && !answer.is_empty() =>
        {
            repo.insert_question(NewQuestion {
                question,
                answer,
                category,
                difficulty,
            })?;

            let all = repo.all_questions()?;
            let questions = page_window(&all, page, QUESTIONS_PER_PAGE);
            let total_questions = repo.count_questions()?;

            Ok(Json(CreatedQuestionResponse {
                questions,
                total_questions,
                current_category: "none".to_string(),
            })
            .into_response())
        }
        _ => Err(bad_request()),
    }
}

/// Lists one page of questions belonging to a category
///
/// An empty page is reported as not-found. `totalQuestions` counts the whole
/// table, not the filtered set.
#[axum::debug_handler]
pub async fn get_questions_by_category(
    Extension(database): Extension<Database>,
    Path(category_id): Path<i32>,
    Query(query): Query<PageQuery>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let page = query.page.unwrap_or(1);

    let mut conn = database.get_conn()?;
    let mut repo = TriviaRepository::new(&mut conn);

    let all = repo.all_questions()?;
    let filtered = filter_by_category(&all, category_id);
    let questions = page_window(&filtered, page, QUESTIONS_PER_PAGE);
    if questions.is_empty() {
        return Err(not_found());
    }

    let total_questions = repo.count_questions()?;

    Ok(Json(CategoryQuestionsResponse {
        questions,
        total_questions,
        current_category: category_id,
    }))
}

/// Serves one quiz round: a random question from the requested category that
/// has not been played yet
///
/// Category id 0 draws from every category. An exhausted candidate pool ends
/// the round as a bad-request.
#[axum::debug_handler]
pub async fn play_quiz(
    Extension(database): Extension<Database>,
    body: Option<Json<QuizRequest>>,
) -> Result<Json<QuizResponse>, ApiError> {
    let Json(payload) = body.ok_or_else(bad_request)?;

    let mut conn = database.get_conn()?;
    let mut repo = TriviaRepository::new(&mut conn);

    let all = repo.all_questions()?;
    let candidates = if payload.quiz_category.id == ALL_CATEGORIES_ID {
        all
    } else {
        filter_by_category(&all, payload.quiz_category.id)
    };

    let question =
        select_random_excluding(&candidates, &payload.previous_questions).ok_or_else(bad_request)?;

    Ok(Json(QuizResponse { question }))
}
