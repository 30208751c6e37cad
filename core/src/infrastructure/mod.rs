pub mod history;
pub mod llm;
pub mod product_lookup;
