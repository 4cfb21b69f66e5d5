/// Number of questions returned per listing page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Category id the quiz client sends to play across every category
pub const ALL_CATEGORIES_ID: i32 = 0;

/// Port the HTTP server listens on when neither CLI nor config overrides it
pub const DEFAULT_PORT: u16 = 8000;

/// SQLite database file used when neither CLI, env nor config overrides it
pub const DEFAULT_DATABASE_PATH: &str = "quizbar.db";

/// Category labels seeded into an empty database
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];
