// Submodules
pub mod common;  // Query parsing shared by handlers
pub mod health;  // Health check endpoint
pub mod random;  // Random number statistics

// Re-exports
pub use health::health_check;
pub use random::{get_random_mean, random_mean};
