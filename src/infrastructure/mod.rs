pub mod chat;
pub mod config;
pub mod http;
pub mod kv;
pub mod sources;
