use std::future::Future;

use reqwest::{header, redirect::Policy, Client};

use crate::error::{CommandError, Result};
use crate::file_checkout::CheckoutRequest;
use crate::session::Session;

const DEFAULT_USER_AGENT: &str = concat!("spo-cli/", env!("CARGO_PKG_VERSION"));

/// SharePoint returns a compact JSON body without OData metadata with this header.
const ODATA_ACCEPT: &str = "application/json;odata=nometadata";

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub user_agent: String,
    pub max_redirects: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: 10,
        }
    }
}

/// Expose a configured HTTP client shared by the commands and integration tests.
pub fn build_http_client(config: &ClientConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(config.user_agent.as_str())
        .redirect(Policy::limited(config.max_redirects))
        .build()?;

    Ok(client)
}

/// Issues the single outbound call a command needs.
pub trait Transport {
    fn post(
        &self,
        request: &CheckoutRequest,
        session: &Session,
    ) -> impl Future<Output = std::result::Result<(), CommandError>> + Send;
}

/// Transport talking to SharePoint Online over HTTPS.
#[derive(Clone)]
pub struct SpoClient {
    client: Client,
}

impl SpoClient {
    pub fn new() -> Result<Self> {
        Self::with_config(&ClientConfig::default())
    }

    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        Ok(Self::with_client(build_http_client(config)?))
    }

    /// Construct a transport from a pre-configured HTTP client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for SpoClient {
    fn post(
        &self,
        request: &CheckoutRequest,
        session: &Session,
    ) -> impl Future<Output = std::result::Result<(), CommandError>> + Send {
        let mut builder = self
            .client
            .request(request.method().clone(), request.url())
            .header(header::ACCEPT, ODATA_ACCEPT)
            .body("");
        if let Some(token) = session.access_token() {
            builder = builder.bearer_auth(token);
        }

        async move {
            let response = builder
                .send()
                .await
                .map_err(|err| CommandError::new(err.to_string()))?;

            let status = response.status();
            if status.is_success() {
                tracing::debug!(%status, "request succeeded");
                return Ok(());
            }

            let body = response
                .text()
                .await
                .map_err(|err| CommandError::new(err.to_string()))?;
            tracing::debug!(%status, "request rejected");

            if body.is_empty() {
                Err(CommandError::new(status.to_string()))
            } else {
                Err(CommandError::new(body))
            }
        }
    }
}
