pub mod postgres;
pub mod product_repository;
