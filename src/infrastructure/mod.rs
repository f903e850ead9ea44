mod clients;
mod scrapers;
mod storage;

pub use clients::page::{HttpPageFetcher, Page, PageFetcher};
pub use scrapers::{squad_table::extract_stats, Selectors};
pub use storage::SheetFormat;
