// command line interface

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "rulegen",
    about = "Generate and judge RSL rules for JetBrains framework inspections"
)]
pub struct Cli {
    /// directory holding the input sheet, outputs and the key file (default: current dir)
    #[arg(long, env = "RULEGEN_BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    /// input sheet (default: <base>/c_input.csv)
    #[arg(long, short, env = "RULEGEN_INPUT")]
    pub input: Option<PathBuf>,

    /// output sheet (default: <base>/sample_output_with_rules.csv)
    #[arg(long, short, env = "RULEGEN_OUTPUT")]
    pub output: Option<PathBuf>,

    /// RSL built-in function catalogue (default: <base>/builtinfs.json)
    #[arg(long, env = "RULEGEN_BUILTINS")]
    pub builtins: Option<PathBuf>,

    /// extracted annotations file (default: <base>/extracted_annotations.json)
    #[arg(long, env = "RULEGEN_ANNOTATIONS")]
    pub annotations: Option<PathBuf>,

    /// per-row URL validation reports (default: <base>/url_reports)
    #[arg(long, env = "RULEGEN_REPORTS_DIR")]
    pub reports_dir: Option<PathBuf>,

    /// existing .txt rule examples (default: <base>/../artifact-submission/rules)
    #[arg(long, env = "RULEGEN_RULES_DIR")]
    pub rules_dir: Option<PathBuf>,

    /// stop after this many rows with a topic
    #[arg(long, short = 'n', env = "RULEGEN_MAX_ROWS")]
    pub max_rows: Option<usize>,

    /// pause between rows, in seconds
    #[arg(long, env = "RULEGEN_ROW_DELAY_SECS", default_value_t = 2)]
    pub row_delay_secs: u64,

    /// pause between pipeline stages, in milliseconds
    #[arg(long, env = "RULEGEN_STAGE_DELAY_MS", default_value_t = 500)]
    pub stage_delay_ms: u64,

    /// model writing and describing rules
    #[arg(long, env = "RULEGEN_RULE_MODEL", default_value = "gpt-5")]
    pub rule_model: String,

    /// model running the web search tool
    #[arg(long, env = "RULEGEN_SEARCH_MODEL", default_value = "gpt-5")]
    pub search_model: String,

    /// model judging generated rules
    #[arg(long, env = "RULEGEN_EVALUATION_MODEL", default_value = "gpt-5")]
    pub evaluation_model: String,

    /// model adjudicating borderline page relevance
    #[arg(long, env = "RULEGEN_RELEVANCE_MODEL", default_value = "gpt-5")]
    pub relevance_model: String,

    /// reasoning effort sent with every request (minimal, low, medium, high)
    #[arg(long, env = "RULEGEN_REASONING_EFFORT", default_value = "high")]
    pub reasoning_effort: String,

    /// timeout of a single model request, in seconds
    #[arg(long, env = "RULEGEN_REQUEST_TIMEOUT_SECS", default_value_t = 600)]
    pub request_timeout_secs: u64,

    /// alternative API base url
    #[arg(long, env = "OPENAI_BASE_URL")]
    pub openai_base_url: Option<String>,

    /// number of validated pages kept per row
    #[arg(long, env = "RULEGEN_MAX_URLS", default_value_t = 2)]
    pub max_urls: usize,

    /// minimum relevance score for a page to count as validated
    #[arg(long, env = "RULEGEN_MIN_RELEVANCE", default_value_t = 0.30)]
    pub min_relevance: f64,

    /// timeout for downloading a candidate page, in seconds
    #[arg(long, env = "RULEGEN_URL_TIMEOUT_SECS", default_value_t = 15)]
    pub url_timeout_secs: u64,

    /// do not ask the model about pages with a borderline score
    #[arg(long, env = "RULEGEN_NO_LLM_VALIDATION")]
    pub no_llm_validation: bool,
}
