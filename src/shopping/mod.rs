pub mod aggregate;
pub mod export;

pub use aggregate::{aggregate, generate_shopping_list};
pub use export::{format_shopping_list, write_plan_json, write_shopping_list_csv};
