pub mod app;
pub mod config;
pub mod console;
pub mod db;
pub mod dto;
pub mod entity;
pub mod error;
pub mod filter;
pub mod media;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
