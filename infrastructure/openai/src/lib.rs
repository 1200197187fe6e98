pub mod client;
pub mod relevance_judge;
pub mod rule_author;
pub mod rule_judge;
pub mod web_searcher;

pub use client::{ModelSettings, OpenAIClient};
pub use relevance_judge::RelevanceJudgeOpenAI;
pub use rule_author::RuleAuthorOpenAI;
pub use rule_judge::RuleJudgeOpenAI;
pub use web_searcher::WebSearcherOpenAI;
