pub mod answer_service;
pub mod catalog;
