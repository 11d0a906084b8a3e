pub mod lookup_service;
pub mod member_service;
pub mod report_service;

pub use lookup_service::*;
pub use member_service::*;
pub use report_service::*;
