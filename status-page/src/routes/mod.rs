pub mod build_info;
pub mod health;
pub mod page;
