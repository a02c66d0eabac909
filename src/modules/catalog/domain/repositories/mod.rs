pub mod catalog_repo;

pub use catalog_repo::CatalogRepository;

#[cfg(test)]
pub use catalog_repo::MockCatalogRepository;
