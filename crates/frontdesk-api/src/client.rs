// Async HTTP client for the hotel back-office REST API.
//
// Resource base: {backend}{api_path}/  (api_path defaults to /api)
// Probe: GET {backend}/

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::transport::TransportConfig;

// ── Error response shape ─────────────────────────────────────────────

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the rooms, guests, and bookings resources.
///
/// Resource operations live next to their wire types in `rooms`,
/// `guests`, and `bookings`; this module owns URL handling and the
/// shared request/response plumbing.
#[derive(Debug, Clone)]
pub struct HotelClient {
    http: reqwest::Client,
    root_url: Url,
    api_url: Url,
}

impl HotelClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a backend URL, an API path prefix, and transport config.
    pub fn new(base_url: &str, api_path: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(base_url, api_path, http)
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(
        base_url: &str,
        api_path: &str,
        http: reqwest::Client,
    ) -> Result<Self, Error> {
        let (root_url, api_url) = Self::normalize_urls(base_url, api_path)?;
        Ok(Self {
            http,
            root_url,
            api_url,
        })
    }

    /// Split the configured backend into the probe root and the resource base.
    ///
    /// `https://host/` + `/api` gives `https://host/` and `https://host/api/`.
    /// A backend URL that already ends with the API path is accepted too.
    fn normalize_urls(raw: &str, api_path: &str) -> Result<(Url, Url), Error> {
        let mut url = Url::parse(raw)?;
        let api_path = api_path.trim_matches('/');

        let mut path = url.path().trim_end_matches('/').to_owned();
        if !api_path.is_empty() && path.ends_with(&format!("/{api_path}")) {
            path.truncate(path.len() - api_path.len() - 1);
        }

        url.set_path(&format!("{path}/"));
        let root = url.clone();

        if api_path.is_empty() {
            return Ok((root, url));
        }
        url.set_path(&format!("{path}/{api_path}/"));
        Ok((root, url))
    }

    /// Backend root, as probed by [`HotelClient::probe`].
    pub fn root_url(&self) -> &Url {
        &self.root_url
    }

    /// Base URL that resource paths are joined onto.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.api_url.join(path)?)
    }

    // ── HTTP verbs ───────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        Self::handle_response(resp).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("POST {url}");

        let resp = self.http.post(url).json(body).send().await?;
        Self::handle_response(resp).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(path)?;
        debug!("PUT {url}");

        let resp = self.http.put(url).json(body).send().await?;
        Self::handle_response(resp).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), Error> {
        let url = self.url(path)?;
        debug!("DELETE {url}");

        let resp = self.http.delete(url).send().await?;
        Self::handle_empty(resp).await
    }

    // ── Connectivity ─────────────────────────────────────────────────

    /// Check that the backend host answers at all.
    ///
    /// Independent of any resource: a plain `GET` on the backend root.
    pub async fn probe(&self) -> Result<(), Error> {
        let url = self.root_url.clone();
        debug!("GET {url} (probe)");

        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Unreachable {
                status: status.as_u16(),
            })
        }
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                let preview: String = body.chars().take(200).collect();
                Error::Deserialization {
                    message: format!("{e} (body preview: {preview:?})"),
                    body,
                }
            })
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn handle_empty(resp: reqwest::Response) -> Result<(), Error> {
        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::parse_error(status, resp).await)
        }
    }

    async fn parse_error(status: reqwest::StatusCode, resp: reqwest::Response) -> Error {
        let raw = resp.text().await.unwrap_or_default();

        let message = serde_json::from_str::<ErrorResponse>(&raw)
            .ok()
            .and_then(|err| err.message.or(err.error))
            .unwrap_or_else(|| {
                if raw.trim().is_empty() {
                    status.to_string()
                } else {
                    raw
                }
            });

        Error::Api {
            status: status.as_u16(),
            message,
        }
    }
}
