// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use settings::{AuthSettings, DatabaseSettings, ServerSettings, Settings};

/// Loads the application configuration from the `config.toml` file.
///
/// Values can be overridden through the environment with a `LIBRIS__`
/// prefix and `__` as the section separator, e.g.
/// `LIBRIS__AUTH__JWT_SECRET` overrides `[auth] jwt_secret`.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`
        .add_source(config::File::with_name("config.toml"))
        .add_source(config::Environment::with_prefix("LIBRIS").separator("__"))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Settings` struct
    let settings = builder.try_deserialize::<Settings>()?;
    settings.validate()?;

    Ok(settings)
}
