pub mod product_table;
