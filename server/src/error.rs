//! Startup failures for the server binary.

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("invalid {var} value: {value}")]
    InvalidEnv { var: &'static str, value: String },
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
