//! Markdown Ninja webapp composition root
//!
//! Owns the state the webapp shares between its components and hands it out
//! explicitly instead of through globals.

use ninja_common::{Config, ConfigState, CountryBlocklist, CountryIndex, Location, Result};

/// Context created once at bootstrap and passed to whoever needs it
#[derive(Debug, Default)]
pub struct AppContext {
    config: ConfigState,
    countries: CountryIndex,
    blocked_countries: CountryBlocklist,
}

impl AppContext {
    /// Create a context with no configuration yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context, its configuration and its country blocklist from the environment
    pub fn bootstrap(location: &Location) -> Self {
        let mut ctx = Self::new();
        ctx.config.create_from_env(location);
        ctx.blocked_countries = CountryBlocklist::from_env();
        ctx
    }

    pub fn with_blocked_countries(mut self, blocked_countries: CountryBlocklist) -> Self {
        self.blocked_countries = blocked_countries;
        self
    }

    pub fn create_config(&mut self, env: Option<&str>, location: &Location) -> &Config {
        self.config.create(env, location)
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get()
    }

    pub fn country_name(&self, code: &str) -> &'static str {
        self.countries.name(code)
    }

    pub fn is_country_blocked(&self, code: &str) -> bool {
        self.blocked_countries.is_blocked(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ninja_common::Error;
    use serial_test::serial;

    #[test]
    fn test_new_context_has_no_config() {
        let ctx = AppContext::new();
        assert_eq!(ctx.config(), Err(Error::NotInitialized));
    }

    #[test]
    fn test_create_config() {
        let mut ctx = AppContext::new();
        ctx.create_config(Some("dev"), &Location::new("http:", "localhost:8080"));

        let config = ctx.config().unwrap();
        assert_eq!(config.sites_port, ":4000");
        assert_eq!(config.oidc_redirect_uri, "http://localhost:8080/auth");
    }

    #[test]
    fn test_contexts_are_independent() {
        let mut first = AppContext::new();
        let second = AppContext::new();
        first.create_config(None, &Location::new("https:", "markdown.ninja"));

        assert!(first.config().is_ok());
        assert!(second.config().is_err());
    }

    #[test]
    fn test_country_name() {
        let ctx = AppContext::new();
        assert_eq!(ctx.country_name("DE"), "Germany");
        assert_eq!(ctx.country_name("ZZ"), "Unknown");
    }

    #[test]
    fn test_no_country_blocked_by_default() {
        let ctx = AppContext::new();
        assert!(!ctx.is_country_blocked("KP"));
    }

    #[test]
    fn test_with_blocked_countries() {
        let ctx = AppContext::new().with_blocked_countries(CountryBlocklist::parse("KP"));
        assert!(ctx.is_country_blocked("KP"));
        assert!(ctx.is_country_blocked("kp"));
        assert!(!ctx.is_country_blocked("FR"));
    }

    #[test]
    #[serial]
    fn test_bootstrap_reads_env() {
        std::env::set_var("VITE_ENV", "dev");
        std::env::set_var("BLOCKED_COUNTRIES", "ru");
        let ctx = AppContext::bootstrap(&Location::new("https:", "markdown.ninja"));
        std::env::remove_var("VITE_ENV");
        std::env::remove_var("BLOCKED_COUNTRIES");

        let config = ctx.config().unwrap();
        assert_eq!(config.env, "dev");
        assert_eq!(config.sites_port, ":4000");
        assert!(ctx.is_country_blocked("RU"));
    }
}
