pub mod client;
pub mod cost;
pub mod opportunity;
pub mod roi;
