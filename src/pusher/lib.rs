pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod hash;
pub mod metadata;
pub mod precheck;
pub mod solution;
pub mod sync;
pub mod tree;
