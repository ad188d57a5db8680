pub mod rules;
pub mod server;
