pub mod listing_params;

pub use listing_params::ListingParams;
