//! Startup configuration read from the environment.

pub mod corpus;

pub use corpus::CardCorpus;
