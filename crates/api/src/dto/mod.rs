//! Transport representations and the entity <-> DTO mapping.
//!
//! Mapping is plain field copying through `From` impls. Reference cycles
//! between categories and products are cut here: a product DTO carries only
//! its category id, never the category itself.

pub mod category;
pub mod product;

pub use category::CategoryDto;
pub use product::ProductDto;
