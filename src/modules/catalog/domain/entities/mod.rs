pub mod catalog_config;
pub mod display_record;
pub mod listing_page;

pub use catalog_config::CatalogConfig;
pub use display_record::DisplayRecord;
pub use listing_page::{ListingPage, NamedResource};
