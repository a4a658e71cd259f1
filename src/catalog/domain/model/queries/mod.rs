pub mod list_products_query;
