//! Configuration for the refactoring swarm
//!
//! Settings come from the process environment, optionally seeded from a `.env`
//! file. The API credential is not part of [`SwarmConfig`]: it is read through a
//! [`CredentialSource`] at registry initialization time.

mod credential;
mod env_loader;
mod logging_config;
mod model;

pub use credential::{CredentialSource, EnvCredentials, StaticCredentials};
pub use env_loader::{load_dotenv, load_from_env, load_from_lookup};
pub use logging_config::{LogFormat, LoggingConfig};
pub use model::{
    DEFAULT_CREDENTIAL_VAR, DEFAULT_LOG_FILE, DEFAULT_MODEL, SwarmConfig,
};
