extern crate log;
extern crate reqwest;
extern crate serde;

use super::error::{network_error, Operate, Result};
use crate::config::{
    http::{TIMEOUT, USER_AGENT, VERBOSE},
    Config,
};
use log::info;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct Login<'a> {
    email: &'a str,
    password: &'a str,
}
#[derive(Deserialize)]
struct Token {
    access_token: String,
}

pub struct Session {
    pub(super) client: Client,
    pub(super) auth_url: String,
    pub(super) solution_url: String,
    pub(super) token: Option<String>,
}
impl Session {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Session {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .timeout(TIMEOUT)
                .connection_verbose(VERBOSE)
                .build()
                .map_err(network_error(Operate::BuildClient))?,
            auth_url: config.auth_url.clone(),
            solution_url: config.solution_url.clone(),
            token: None,
        })
    }
    /// Builds the client and logs in with the system account.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let mut ret = Self::new(config)?;
        ret.authenticate(&config.email, &config.password).await?;
        Ok(ret)
    }
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub async fn authenticate(&mut self, email: &str, password: &str) -> Result<String> {
        let err = network_error(Operate::Login);
        let token = self
            .client
            .post(format!("{}/auth/login", self.auth_url))
            .json(&Login { email, password })
            .send()
            .await
            .map_err(&err)?
            .error_for_status()
            .map_err(&err)?
            .json::<Token>()
            .await
            .map_err(&err)?
            .access_token;
        info!("Logged in as {}", email);
        self.token = Some(token.clone());
        Ok(token)
    }
}
