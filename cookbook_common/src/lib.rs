//! Common building blocks shared by the cookbook crates.

pub mod id;
