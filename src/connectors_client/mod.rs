pub mod api;
mod backend;
mod client;
pub mod helpers;
pub mod models;

pub use backend::{ConnectorsApi, SourceCatalog};
pub use client::ConnectorsClient;
