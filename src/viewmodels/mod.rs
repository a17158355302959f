pub mod catalog_viewmodel;
pub mod admin_viewmodel;

pub use catalog_viewmodel::CatalogViewModel;
pub use admin_viewmodel::AdminViewModel;
