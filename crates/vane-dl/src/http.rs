use std::{
    sync::{LazyLock, RwLock},
    time::Duration,
};

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use ureq::{http::Response, Agent, Body};
use vane_core::Credentials;

use crate::error::FetchError;

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub user_agent: String,
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("vane/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn build(&self) -> Agent {
        Agent::config_builder()
            .timeout_global(self.timeout)
            .user_agent(&self.user_agent)
            .build()
            .into()
    }
}

struct SharedClient {
    agent: Agent,
    config: ClientConfig,
}

static SHARED_CLIENT_STATE: LazyLock<RwLock<SharedClient>> = LazyLock::new(|| {
    let config = ClientConfig::default();
    let agent = config.build();

    RwLock::new(SharedClient { agent, config })
});

/// Replaces the shared HTTP client configuration and rebuilds the agent.
pub fn configure_http_client<F>(updater: F)
where
    F: FnOnce(&mut ClientConfig),
{
    let mut state = SHARED_CLIENT_STATE.write().unwrap();
    let mut new_config = state.config.clone();
    updater(&mut new_config);
    state.agent = new_config.build();
    state.config = new_config;
}

pub struct Http;

impl Http {
    /// GET `url` through the shared agent, with Basic auth when
    /// credentials are present.
    pub fn get(url: &str, credentials: Option<&Credentials>) -> Result<Response<Body>, FetchError> {
        let agent = SHARED_CLIENT_STATE.read().unwrap().agent.clone();
        let mut req = agent.get(url);

        if let Some(credentials) = credentials {
            req = req.header("Authorization", &basic_auth(credentials));
        }

        req.call().map_err(FetchError::from)
    }
}

fn basic_auth(credentials: &Credentials) -> String {
    let raw = format!("{}:{}", credentials.username, credentials.token);
    format!("Basic {}", BASE64.encode(raw))
}
