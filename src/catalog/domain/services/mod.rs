pub mod product_query_service;
