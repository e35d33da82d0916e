// src/core/net.rs
// Blocking HTTP GET (reqwest). The pipeline is single-threaded, so no runtime.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};

use crate::config::consts;

/// Client with a fixed per-request timeout and our User-Agent.
pub fn client(timeout: Duration) -> reqwest::Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(consts::USER_AGENT));
    headers.insert(ACCEPT, HeaderValue::from_static("application/xml, text/xml"));

    Client::builder()
        .timeout(timeout)
        .default_headers(headers)
        .build()
}

/// GET `url` and return the body. Non-2xx is an error.
pub fn http_get(client: &Client, url: &str) -> reqwest::Result<String> {
    client.get(url).send()?.error_for_status()?.text()
}
