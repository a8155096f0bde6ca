//! Concrete implementations of the ports.

mod config_store_toml;
mod console_reporter;
mod dialoguer_prompt;
mod filesystem;
mod memory_config_store;
mod secrets_http;

pub use config_store_toml::{CONFIG_FILE_NAME, TomlConfigStore};
pub use console_reporter::ConsoleReporter;
pub use dialoguer_prompt::DialoguerPrompt;
pub use filesystem::FilesystemStore;
pub use memory_config_store::MemoryConfigStore;
pub use secrets_http::HttpSecretsUploader;
