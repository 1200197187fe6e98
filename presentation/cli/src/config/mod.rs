pub mod app_config;
pub mod openai_config;
pub mod paths_config;
pub mod run_config;
pub mod validation_config;
