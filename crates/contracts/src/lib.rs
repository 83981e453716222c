pub mod companies;
pub mod domain;
pub mod shared;
