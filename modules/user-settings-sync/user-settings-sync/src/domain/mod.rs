pub mod backend;
pub mod error;
pub mod fields;
pub mod reducer;
pub mod service;
pub mod ticket;
