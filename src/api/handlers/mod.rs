mod drinks;
mod trivia;

pub use drinks::*;
pub use trivia::*;
