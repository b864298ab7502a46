pub mod aggregator;
pub mod config;
pub mod hf_client;
pub mod prompt_builder;
pub mod story;
pub mod validator;
