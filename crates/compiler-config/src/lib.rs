pub mod error;
pub mod settings;
pub mod validator;

pub use error::ConfigError;
pub use settings::CompilerSettings;
