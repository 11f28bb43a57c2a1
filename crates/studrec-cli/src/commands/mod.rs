pub mod add;
pub mod edit;
pub mod remove;
pub mod show;
