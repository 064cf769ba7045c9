pub mod contact;
pub mod content;
pub mod diagnostics;
pub mod seeding;
