pub mod page;
pub mod record;
pub mod verdict;

pub use page::{ContentListing, PageDescriptor, Workspace};
pub use record::ScanRecord;
pub use verdict::{PageOutcome, Verdict};
