pub mod product_page_resource;
