use super::{fetch, Method, RemoteClient};
use crate::config::WrkConfig;
use crate::error::{Result, WrkError};
use crate::model::Member;
use reqwest::blocking::Client;
use serde_json::Value;
use std::cell::OnceCell;

/// Trello REST client. Credentials are checked per request, so commands that
/// never reach the network work without any configured.
pub struct HttpClient {
    http: Client,
    base_url: String,
    app_key: Option<String>,
    token: Option<String>,
    me: OnceCell<String>,
}

impl HttpClient {
    pub fn new(config: &WrkConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("wrk/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(WrkError::Http)?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            app_key: config.app_key.clone(),
            token: config.token.clone(),
            me: OnceCell::new(),
        })
    }

    fn credentials(&self) -> Result<(&str, &str)> {
        match (self.app_key.as_deref(), self.token.as_deref()) {
            (Some(key), Some(token)) => Ok((key, token)),
            _ => Err(WrkError::Config(
                "no Trello credentials; set WRK_APP_KEY and WRK_TOKEN or add app_key/token to config.json"
                    .to_string(),
            )),
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl RemoteClient for HttpClient {
    fn call(&self, method: Method, path: &str, params: &[(&str, &str)]) -> Result<Value> {
        let (key, token) = self.credentials()?;
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        tracing::debug!(%method, %url, "trello request");

        let response = self
            .http
            .request(method.into(), &url)
            .query(&[("key", key), ("token", token)])
            .query(params)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "trello request failed");
            return Err(WrkError::Remote {
                status: status.as_u16(),
                body,
            });
        }
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }

    fn my_member_id(&self) -> Result<String> {
        if let Some(id) = self.me.get() {
            return Ok(id.clone());
        }
        let me: Member = fetch(self, Method::Get, "members/me", &[("fields", "id,username")])?;
        Ok(self.me.get_or_init(|| me.id).clone())
    }
}
