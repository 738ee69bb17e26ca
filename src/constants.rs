//! Constants used throughout the application
//!
//! This module centralizes file names, defaults and user-facing messages.

// Files and directories
pub const APP_DIR_NAME: &str = "order-store";
pub const LOCAL_CONFIG_FILE: &str = "order-store.toml";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "order-store.log";

// Database defaults
pub const DATABASE_FILE_NAME: &str = "orders.db";
pub const IN_MEMORY_DATABASE_URL: &str = "sqlite::memory:";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const MAX_CONNECTIONS_LIMIT: u32 = 100;

// Logging defaults
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Messages
pub const CONFIG_GENERATED: &str = "✅ Configuration file generated";
pub const ERROR_ORDER_NOT_FOUND: &str = "❌ Order not found";
