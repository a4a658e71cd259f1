pub mod product_rest_controller;
