pub mod configs;
pub mod configure;
pub mod deploy;
