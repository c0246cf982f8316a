pub mod filter;
pub mod quick;
pub mod session;
pub mod types;

pub use session::{SearchSession, SortOrder};
pub use types::{CriteriaForm, SearchCriteria, TypeFilter};
