pub mod classification;
pub mod common;
pub mod product;
