use std::sync::Arc;

use logger::TracingLogger;
use openai::{
    ModelSettings, OpenAIClient, RelevanceJudgeOpenAI, RuleAuthorOpenAI, RuleJudgeOpenAI,
    WebSearcherOpenAI,
};
use storage::annotation::repository::JsonAnnotationRepository;
use storage::inspection::repository::CsvInspectionRepository;
use storage::rule::repository::FsRuleContextRepository;
use storage::web::repository::FsUrlReportRepository;
use web::ReqwestPageFetcher;

use business::application::inspection::process_row::ProcessRowUseCaseImpl;
use business::application::inspection::run_batch::RunBatchUseCaseImpl;
use business::application::web::search_pages::SearchWebPagesUseCaseImpl;
use business::application::web::validate_urls::ValidateUrlsUseCaseImpl;
use business::domain::annotation::catalog::AnnotationCatalog;
use business::domain::annotation::repository::AnnotationRepository;
use business::domain::inspection::use_cases::run_batch::RunBatchUseCase;
use business::domain::rule::model::RuleContext;
use business::domain::rule::repository::RuleContextRepository;

use crate::config::app_config::AppConfig;
use crate::setup::prompt::StdinPrompt;

pub struct DependencyContainer {
    pub run_batch: Arc<dyn RunBatchUseCase>,
}

impl DependencyContainer {
    pub async fn new(config: &AppConfig, api_key: String) -> anyhow::Result<Self> {
        let paths = &config.paths;
        let openai_config = &config.openai;

        // Storage adapters
        let inspection_repository = Arc::new(CsvInspectionRepository::new(
            paths.input.clone(),
            paths.output.clone(),
        ));
        let annotation_repository = Arc::new(JsonAnnotationRepository::new(
            paths.annotations.clone(),
        ));
        let report_repository = Arc::new(FsUrlReportRepository::new(paths.reports_dir.clone()));
        let context_repository =
            FsRuleContextRepository::new(paths.builtins.clone(), paths.rules_dir.clone());

        // RSL knowledge shared by every prompt
        let context = Arc::new(RuleContext::new(
            context_repository.load_builtins().await?,
            context_repository.load_examples().await?,
        ));
        tracing::info!(
            builtins = context.builtins.len(),
            examples = context.examples.len(),
            "Loaded rule context"
        );

        let catalog = match annotation_repository.load().await {
            Ok(records) => Arc::new(AnnotationCatalog::with_records(records)),
            Err(e) => {
                tracing::warn!(error = %e, "Could not load saved annotations; starting fresh");
                Arc::new(AnnotationCatalog::new())
            }
        };

        // OpenAI adapters
        let mut client = OpenAIClient::new(api_key, openai_config.request_timeout);
        if let Some(base_url) = &openai_config.base_url {
            client = client.with_base_url(base_url);
        }
        let client = Arc::new(client);
        let effort = openai_config.reasoning_effort.as_str();

        let author = Arc::new(RuleAuthorOpenAI::new(
            client.clone(),
            ModelSettings::new(&openai_config.rule_model, effort, "medium"),
        ));
        let judge = Arc::new(RuleJudgeOpenAI::new(
            client.clone(),
            ModelSettings::new(&openai_config.evaluation_model, effort, "low"),
        ));
        let relevance_judge = Arc::new(RelevanceJudgeOpenAI::new(
            client.clone(),
            ModelSettings::new(&openai_config.relevance_model, effort, "low"),
        ));
        let searcher = Arc::new(WebSearcherOpenAI::new(client, &openai_config.search_model));
        let fetcher = Arc::new(ReqwestPageFetcher::new(config.validation.url_timeout));

        // Web use cases
        let search_use_case = Arc::new(SearchWebPagesUseCaseImpl {
            catalog: catalog.clone(),
            searcher,
            pages_kept: config.validation.max_urls,
            logger: Arc::new(TracingLogger::new("web")),
        });
        let validate_use_case = Arc::new(ValidateUrlsUseCaseImpl {
            fetcher,
            judge: relevance_judge,
            reports: report_repository,
            settings: config.validation.settings(),
            logger: Arc::new(TracingLogger::new("web")),
        });

        // Inspection use cases
        let process_row_use_case = Arc::new(ProcessRowUseCaseImpl {
            author,
            judge,
            search: search_use_case,
            validate: validate_use_case,
            context,
            stage_delay: config.run.stage_delay,
            logger: Arc::new(TracingLogger::new("rule")),
        });
        let run_batch = Arc::new(RunBatchUseCaseImpl {
            repository: inspection_repository,
            annotations: annotation_repository,
            catalog,
            process_row: process_row_use_case,
            prompt: Arc::new(StdinPrompt),
            row_delay: config.run.row_delay,
            logger: Arc::new(TracingLogger::new("batch")),
        });

        Ok(Self { run_batch })
    }
}
