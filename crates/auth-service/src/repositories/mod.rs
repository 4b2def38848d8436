//! Storage layer. Everything is in-memory; nothing survives a restart.

pub mod clients;

pub use clients::ClientRepository;
