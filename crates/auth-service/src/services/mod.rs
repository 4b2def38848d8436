//! Business logic layer.

pub mod auth_gateway;
pub mod client_service;
pub mod session_manager;
pub mod timeout_registry;

pub use auth_gateway::AuthGateway;
pub use client_service::ClientService;
pub use session_manager::SessionManager;
pub use timeout_registry::TimeoutRegistry;
