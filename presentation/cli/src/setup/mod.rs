pub mod dependency_injection;
pub mod prompt;
pub mod runner;
