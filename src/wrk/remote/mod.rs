//! # Remote Client
//!
//! Commands talk to Trello through [`RemoteClient`]: one HTTP verb, a path
//! relative to the API root, and query parameters. Responses come back as JSON
//! values and are decoded into the records in [`crate::model`] with [`fetch`].
//!
//! - [`http::HttpClient`]: the real client (blocking reqwest)
//! - `mock::RecordingClient`: records calls and replays canned bodies (tests)

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

pub mod http;
#[cfg(any(test, feature = "test_utils"))]
pub mod mock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

pub trait RemoteClient {
    /// Issues one request and returns the decoded JSON body (`Null` when empty).
    fn call(&self, method: Method, path: &str, params: &[(&str, &str)]) -> Result<Value>;

    /// Id of the member whose token is in use.
    fn my_member_id(&self) -> Result<String>;
}

/// Issues a request and decodes the body into `T`.
pub fn fetch<T, C>(client: &C, method: Method, path: &str, params: &[(&str, &str)]) -> Result<T>
where
    T: DeserializeOwned,
    C: RemoteClient + ?Sized,
{
    let body = client.call(method, path, params)?;
    Ok(serde_json::from_value(body)?)
}
