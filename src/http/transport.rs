use anyhow::Result;
use serde::de::DeserializeOwned;
use std::future::Future;

/// Performs a GET and hands back the decoded body.
///
/// Base URL joining, headers, auth and timeouts all belong to the
/// implementation; callers pass a complete URL.
pub trait Transport {
    fn get<R>(&self, url: &str) -> impl Future<Output = Result<R>> + Send
    where
        R: DeserializeOwned + Send;
}
