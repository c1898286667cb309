pub mod client;
pub mod error;
pub mod http;

pub use client::ApiWorker;
pub use http::BoardApi;
