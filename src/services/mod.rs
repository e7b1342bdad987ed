pub mod checkpoint_store;
pub mod classifier;
pub mod content_fetcher;
pub mod page_enumerator;
pub mod verdict_parser;

pub use checkpoint_store::CheckpointStore;
pub use classifier::Classifier;
pub use content_fetcher::ContentFetcher;
pub use page_enumerator::{PageEnumerator, PAGE_SIZE};
