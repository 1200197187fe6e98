pub mod application {
    pub mod inspection {
        pub mod process_row;
        pub mod run_batch;
    }
    pub mod web {
        pub mod search_pages;
        pub mod validate_urls;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod annotation {
        pub mod catalog;
        pub mod extractor;
        pub mod model;
        pub mod repository;
    }
    pub mod inspection {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod process_row;
            pub mod run_batch;
        }
    }
    pub mod rule {
        pub mod errors;
        pub mod grammar;
        pub mod model;
        pub mod repository;
        pub mod services;
    }
    pub mod web {
        pub mod errors;
        pub mod links;
        pub mod model;
        pub mod relevance;
        pub mod repository;
        pub mod search_query;
        pub mod services;
        pub mod use_cases {
            pub mod search_pages;
            pub mod validate_urls;
        }
    }
}
