pub mod config;
pub mod error;
pub mod filters;
pub mod fixture;
pub mod history;
pub mod models;
pub mod ports;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
pub mod view;
