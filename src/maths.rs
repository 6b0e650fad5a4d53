pub mod products;
pub mod vector;
