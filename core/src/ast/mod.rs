pub mod builders;

mod conditions;
mod query;
mod steps;
mod values;

pub use conditions::Condition;
pub use query::Query;
pub use steps::{HasFilter, Labels, SearchSpec, SortOrder, Step};
pub use values::Value;
