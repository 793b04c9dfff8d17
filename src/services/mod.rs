pub mod client_service;
pub mod cost_model;
pub mod opportunity_ranker;
pub mod roi_model;
