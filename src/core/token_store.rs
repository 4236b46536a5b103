// src/core/token_store.rs
//! Where views read the bearer token from. The token itself is written by an
//! external login flow.

pub const TOKEN_ENV_VAR: &str = "JOBBY_JWT_TOKEN";

pub trait TokenStore: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// Reads the token from the process environment
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvTokenStore;

impl TokenStore for EnvTokenStore {
    fn bearer_token(&self) -> Option<String> {
        std::env::var(TOKEN_ENV_VAR).ok().filter(|t| !t.is_empty())
    }
}

/// A token captured up front, e.g. from a request cookie
#[derive(Debug, Default, Clone)]
pub struct StaticToken(pub Option<String>);

impl TokenStore for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        self.0.clone()
    }
}
