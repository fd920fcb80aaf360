pub mod config;
pub mod engine;
pub mod geoip;
pub mod models;
pub mod storage;
