pub mod payload;
pub mod show;
