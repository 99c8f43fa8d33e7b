/*
 * SPDX-License-Identifier: MIT
 *
 * Permission is hereby granted, free of charge, to any person obtaining a
 * copy of this software and associated documentation files (the "Software"),
 * to deal in the Software without restriction, including without limitation
 * the rights to use, copy, modify, merge, publish, distribute, sublicense,
 * and/or sell copies of the Software, and to permit persons to whom the
 * Software is furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in
 * all copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL
 * THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
 * FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
 * DEALINGS IN THE SOFTWARE.
 */
use std::time::Duration;

use reqwest::{
    blocking::Client as HttpClient, blocking::ClientBuilder as HttpClientBuilder,
    header::HeaderValue, header::ACCEPT, header::CONTENT_TYPE, Method, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::model::extended_error;
pub use crate::RedfishError;

/// Entry point of the Redfish resource graph; all `@odata.id` paths hang off it.
pub const REDFISH_SERVICE_ROOT: &str = "/redfish/v1";
const SESSIONS_PATH: &str = "/redfish/v1/SessionService/Sessions";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug)]
pub struct RedfishClientBuilder {
    timeout: Duration,
    accept_invalid_certs: bool,
}

impl RedfishClientBuilder {
    /// Prevents the client from accepting self signed certificates
    /// and other invalid certificates.
    ///
    /// By default self signed certificates will be accepted, since BMCs
    /// usually use those.
    pub fn reject_invalid_certs(mut self) -> RedfishClientBuilder {
        self.accept_invalid_certs = false;
        self
    }

    /// Overwrites the timeout that will be applied to every request
    pub fn timeout(mut self, timeout: Duration) -> RedfishClientBuilder {
        self.timeout = timeout;
        self
    }

    pub fn build(&self) -> Result<RedfishClient, RedfishError> {
        let http_client = HttpClientBuilder::new()
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .timeout(self.timeout)
            .build()
            .map_err(RedfishError::ClientBuild)?;
        Ok(RedfishClient { http_client })
    }
}

/// The endpoint a session is opened against
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Endpoint {
    /// Hostname or IP address of BMC
    pub host: String,
    /// BMC port. If absent the default HTTPS port 443 will be used
    pub port: Option<u16>,
    /// BMC username
    pub user: String,
    /// BMC password
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct RedfishClient {
    http_client: HttpClient,
}

impl RedfishClient {
    pub fn builder() -> RedfishClientBuilder {
        RedfishClientBuilder {
            timeout: DEFAULT_TIMEOUT,
            // BMCs often have a self-signed cert, so usually this has to be true
            accept_invalid_certs: true,
        }
    }

    /// Open an authenticated Redfish session against a BMC.
    pub fn login(&self, endpoint: &Endpoint) -> Result<Session, RedfishError> {
        let base_url = match endpoint.port {
            Some(p) => format!("https://{}:{}", endpoint.host, p),
            None => format!("https://{}", endpoint.host),
        };
        self.login_at(&base_url, &endpoint.user, &endpoint.password)
    }

    /// Session login against an explicit base URL, e.g. `https://10.0.0.2`.
    /// The resulting `Session` logs itself out when dropped.
    pub fn login_at(
        &self,
        base_url: &str,
        user: &str,
        password: &str,
    ) -> Result<Session, RedfishError> {
        let url = format!("{base_url}{SESSIONS_PATH}");
        let body = serde_json::json!({"UserName": user, "Password": password});
        debug!("TX POST {url}");
        let response = self
            .http_client
            .post(&url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(&body)
            .send()
            .map_err(|e| {
                debug!("Session login network error: {e}");
                RedfishError::AuthFailed
            })?;
        let status_code = response.status();
        if !status_code.is_success() {
            debug!("Session login rejected with {status_code}");
            return Err(RedfishError::AuthFailed);
        }
        let token = match response.headers().get("X-Auth-Token") {
            Some(t) => t.to_str().unwrap_or_default().to_string(),
            None => {
                debug!("Session login response carried no X-Auth-Token header");
                return Err(RedfishError::AuthFailed);
            }
        };
        // Session resource URI, needed to tear the session down again.
        // Prefer the Location header, fall back to the body's @odata.id.
        let mut session_uri = response
            .headers()
            .get("Location")
            .and_then(|l| l.to_str().ok())
            .map(|l| l.to_string());
        if session_uri.is_none() {
            if let Ok(v) = response.json::<serde_json::Value>() {
                session_uri = v
                    .get("@odata.id")
                    .and_then(|id| id.as_str())
                    .map(|id| id.to_string());
            }
        }
        debug!("Opened Redfish session {}", session_uri.as_deref().unwrap_or("<unknown>"));
        Ok(Session {
            http_client: self.http_client.clone(),
            base_url: base_url.to_string(),
            token,
            session_uri,
        })
    }
}

/// An authenticated Redfish session against a single BMC.
///
/// One session is established per operation, used serially, and released on
/// every exit path: dropping the session issues a best-effort DELETE of the
/// session resource. Use [`Session::logout`] when the outcome matters.
#[derive(Debug)]
pub struct Session {
    http_client: HttpClient,
    base_url: String,
    token: String,
    session_uri: Option<String>,
}

impl Session {
    /// Fetch a resource by its `@odata.id` path and deserialize it.
    pub fn get<T>(&self, path: &str) -> Result<T, RedfishError>
    where
        T: DeserializeOwned + ::std::fmt::Debug,
    {
        let url = self.url(path);
        let (_status_code, body) = self.req::<()>(Method::GET, path, None)?;
        let body = body.ok_or_else(|| RedfishError::NoContent { url: url.clone() })?;
        let body_text = body.to_string();
        serde_json::from_value(body).map_err(|e| RedfishError::JsonDeserializeError {
            url,
            body: body_text,
            source: e,
        })
    }

    /// POST to an action target. Returns the status code and the response
    /// body, if any; the caller distinguishes 200/204 from 202.
    pub fn post<B>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(StatusCode, Option<serde_json::Value>), RedfishError>
    where
        B: Serialize + ::std::fmt::Debug,
    {
        self.req(Method::POST, path, Some(body))
    }

    pub fn delete(&self, path: &str) -> Result<StatusCode, RedfishError> {
        let (status_code, _body) = self.req::<()>(Method::DELETE, path, None)?;
        Ok(status_code)
    }

    /// Tear the session down now instead of on drop, surfacing any error.
    pub fn logout(mut self) -> Result<(), RedfishError> {
        match self.session_uri.take() {
            Some(uri) => self.delete(&uri).map(|_status_code| ()),
            None => Ok(()),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // All session HTTP requests happen from here.
    fn req<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(StatusCode, Option<serde_json::Value>), RedfishError>
    where
        B: Serialize + ::std::fmt::Debug,
    {
        let url = self.url(path);
        let body_enc = match body {
            Some(b) => Some(serde_json::to_string(b).map_err(|e| {
                RedfishError::JsonSerializeError {
                    url: url.clone(),
                    object_debug: format!("{b:?}"),
                    source: e,
                }
            })?),
            None => None,
        };
        debug!("TX {} {} {}", method, url, body_enc.as_deref().unwrap_or_default());

        let mut req_b = match method {
            Method::GET => self.http_client.get(&url),
            Method::POST => self.http_client.post(&url),
            Method::DELETE => self.http_client.delete(&url),
            _ => unreachable!("Only GET, POST and DELETE http methods are used."),
        };
        req_b = req_b
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header("X-Auth-Token", &self.token);
        if let Some(b) = body_enc {
            req_b = req_b.body(b);
        }
        let response = req_b.send().map_err(|e| RedfishError::NetworkError {
            url: url.clone(),
            source: e,
        })?;
        let status_code = response.status();
        // read the body even if not status 2XX, because BMCs give useful error messages as JSON
        let response_body = response.text().map_err(|e| RedfishError::NetworkError {
            url: url.clone(),
            source: e,
        })?;
        let mut res = None;
        if !response_body.is_empty() {
            debug!("RX {status_code} {response_body}");
            match serde_json::from_str(&response_body) {
                Ok(v) => res = Some(v),
                Err(e) => {
                    if status_code.is_success() {
                        return Err(RedfishError::JsonDeserializeError {
                            url,
                            body: response_body,
                            source: e,
                        });
                    }
                    // keep the unparseable error body as detail text below
                    res = Some(serde_json::Value::String(response_body));
                }
            }
        } else {
            debug!("RX {status_code}");
        }

        if !status_code.is_success() {
            return Err(RedfishError::HttpErrorCode {
                url,
                status_code,
                detail: extended_error(res.as_ref()),
            });
        }
        Ok((status_code, res))
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let Some(uri) = self.session_uri.take() else {
            return;
        };
        match self.delete(&uri) {
            Ok(_) => debug!("Logged out Redfish session {uri}"),
            Err(e) => debug!("Failed logging out Redfish session {uri}: {e}"),
        }
    }
}
