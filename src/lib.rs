pub mod completion;
pub mod config;
pub mod error;
pub mod handlers;
pub mod quiz;
pub mod routes;
pub mod state;
pub mod translate;
