pub mod age_groups;
pub mod disability_types;
pub mod gender_types;
pub mod members;
pub mod payment_methods;

pub use age_groups as age_group_entity;
pub use disability_types as disability_type_entity;
pub use gender_types as gender_type_entity;
pub use members as member_entity;
pub use payment_methods as payment_method_entity;
