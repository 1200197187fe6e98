pub mod fetcher;
pub mod html;

pub use fetcher::ReqwestPageFetcher;
