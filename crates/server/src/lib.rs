pub mod auth;
pub mod config;
pub mod health;
pub mod location;
pub mod openapi;
pub mod rest;
pub mod state;
pub mod telemetry;
