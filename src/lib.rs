//! Al Rehman Biryani backend: menu, daig orders, reviews, branches, and
//! contact inquiries over REST, backed by MongoDB with hardcoded seed data
//! served whenever the store is empty or unavailable.

pub mod api;
pub mod config;
pub mod schemas;
pub mod seed;
pub mod storage;
