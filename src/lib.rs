pub mod advice;
pub mod config;
pub mod history;
pub mod prefecture;
pub mod rank;
pub mod reverse;
pub mod score;
pub mod subject;
