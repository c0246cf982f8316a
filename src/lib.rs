//! Rental listing search, transaction lookup and a small local store.

pub mod config;
pub mod display;
pub mod listings;
pub mod models;
pub mod search;
pub mod session;
pub mod storage;
pub mod transactions;
