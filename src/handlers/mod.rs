pub mod homepage;
pub mod quiz;
