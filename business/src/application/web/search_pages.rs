use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::annotation::catalog::AnnotationCatalog;
use crate::domain::logger::Logger;
use crate::domain::web::links::{fallback_pages, filter_excluded_lines};
use crate::domain::web::search_query::build_search_candidates;
use crate::domain::web::services::{SearchRequest, WebSearchService};
use crate::domain::web::use_cases::search_pages::{
    SearchOutcome, SearchWebPagesParams, SearchWebPagesUseCase,
};

const MAX_QUERIES: usize = 10;
const MAX_PROMPT_ANNOTATIONS: usize = 5;

pub struct SearchWebPagesUseCaseImpl {
    pub catalog: Arc<AnnotationCatalog>,
    pub searcher: Arc<dyn WebSearchService>,
    pub pages_kept: usize,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchWebPagesUseCase for SearchWebPagesUseCaseImpl {
    async fn execute(&self, params: SearchWebPagesParams) -> SearchOutcome {
        let record = self.catalog.extract_and_store(params.row_index, &params.row);
        let queries = build_search_candidates(&record);

        self.logger.debug(&format!(
            "Searching the web with {} queries and {} annotations",
            queries.len(),
            record.annotation_count()
        ));

        let request = SearchRequest {
            row: params.row.clone(),
            annotations: record
                .annotations
                .all
                .iter()
                .take(MAX_PROMPT_ANNOTATIONS)
                .cloned()
                .collect(),
            queries: queries.into_iter().take(MAX_QUERIES).collect(),
            pages_kept: self.pages_kept,
        };

        let pages = match self.searcher.search(&request).await {
            Ok(text) => filter_excluded_lines(&text),
            Err(error) => {
                self.logger.warn(&format!(
                    "Web search failed ({}), falling back to curated pages",
                    error
                ));
                fallback_pages(&params.row.framework)
            }
        };

        SearchOutcome { pages, record }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::inspection::model::InspectionRow;
    use crate::domain::web::errors::WebError;
    use mockall::mock;

    mock! {
        pub Searcher {}

        #[async_trait]
        impl WebSearchService for Searcher {
            async fn search(&self, request: &SearchRequest) -> Result<String, WebError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn cdi_row() -> InspectionRow {
        InspectionRow {
            framework: "CDI".to_string(),
            topic: "Ambiguous @Inject dependency".to_string(),
            description: "Two beans match the @Inject point without a @Named qualifier".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn should_drop_jetbrains_lines_from_search_result() {
        let mut searcher = MockSearcher::new();
        searcher
            .expect_search()
            .withf(|request| {
                request.annotations == vec!["@Inject", "@Named"]
                    && request.queries[0] == "@Inject AND cdi ambiguous"
                    && request.pages_kept == 2
            })
            .returning(|_| {
                Ok("1. https://www.jetbrains.com/help/idea/cdi.html\n2. https://www.baeldung.com/java-ee-cdi".to_string())
            });

        let catalog = Arc::new(AnnotationCatalog::new());
        let use_case = SearchWebPagesUseCaseImpl {
            catalog: catalog.clone(),
            searcher: Arc::new(searcher),
            pages_kept: 2,
            logger: mock_logger(),
        };

        let outcome = use_case
            .execute(SearchWebPagesParams {
                row: cdi_row(),
                row_index: 4,
            })
            .await;

        assert_eq!(outcome.pages, "2. https://www.baeldung.com/java-ee-cdi");
        assert_eq!(outcome.record.row_index, 4);
        assert_eq!(catalog.annotations_for_row(4), vec!["@Inject", "@Named"]);
    }

    #[tokio::test]
    async fn should_fall_back_to_curated_pages_when_search_fails() {
        let mut searcher = MockSearcher::new();
        searcher
            .expect_search()
            .returning(|_| Err(WebError::SearchFailed("quota".to_string())));

        let use_case = SearchWebPagesUseCaseImpl {
            catalog: Arc::new(AnnotationCatalog::new()),
            searcher: Arc::new(searcher),
            pages_kept: 2,
            logger: mock_logger(),
        };

        let outcome = use_case
            .execute(SearchWebPagesParams {
                row: cdi_row(),
                row_index: 0,
            })
            .await;

        assert!(outcome
            .pages
            .starts_with("1. https://jakarta.ee/specifications/cdi/4.1/jakarta-cdi-spec-4.1"));
        assert_eq!(outcome.pages.lines().count(), 2);
    }
}
