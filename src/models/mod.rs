pub mod age_group;
pub mod common;
pub mod lookup;
pub mod member;
pub mod report;

pub use age_group::*;
pub use common::*;
pub use lookup::*;
pub use member::*;
pub use report::*;
