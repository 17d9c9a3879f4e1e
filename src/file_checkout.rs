use std::io::Write;

use futures::future::{AbortRegistration, Abortable, Aborted};
use reqwest::Method;

use crate::cli::FileCheckoutOptions;
use crate::client::Transport;
use crate::error::{Error, Result};
use crate::session::Session;
use crate::utils::{encode_path_component, server_relative_path};

/// The single REST call issued by a checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    url: String,
    method: Method,
}

impl CheckoutRequest {
    /// Build the absolute checkout URL; `id` wins over `fileUrl`.
    pub fn from_options(options: &FileCheckoutOptions) -> Result<Self> {
        let web_url = options.web_url.as_deref().ok_or(Error::MissingWebUrl)?;

        let target = match (options.id.as_deref(), options.file_url.as_deref()) {
            (Some(id), _) => format!("GetFileById('{id}')"),
            (None, Some(file_url)) => {
                let path = server_relative_path(web_url, file_url);
                format!(
                    "GetFileByServerRelativeUrl('{}')",
                    encode_path_component(&path)
                )
            }
            (None, None) => return Err(Error::MissingFileReference),
        };

        Ok(Self {
            url: format!(
                "{}/_api/web/{target}/checkout",
                web_url.trim_end_matches('/')
            ),
            method: Method::POST,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn method(&self) -> &Method {
        &self.method
    }
}

/// Locks a SharePoint file for editing by the signed-in user.
pub struct FileCheckoutCommand<T> {
    transport: T,
}

impl<T: Transport> FileCheckoutCommand<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Check out the file described by already validated `options`.
    ///
    /// Writes a single `DONE` line to `out` on success when `--debug` or
    /// `--verbose` is set. Failures reported by SharePoint are returned as
    /// [`Error::Command`] with the response payload untouched. Aborting the
    /// handle paired with `cancel` resolves to [`Error::Cancelled`].
    pub async fn action<W: Write>(
        &self,
        session: &Session,
        options: &FileCheckoutOptions,
        cancel: AbortRegistration,
        out: &mut W,
    ) -> Result<()> {
        if !session.is_connected() {
            return Err(Error::NotConnected);
        }

        let request = CheckoutRequest::from_options(options)?;
        tracing::debug!(url = request.url(), method = %request.method(), "checking out file");

        match Abortable::new(self.transport.post(&request, session), cancel).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                tracing::debug!(error = %err, "checkout rejected");
                return Err(err.into());
            }
            Err(Aborted) => return Err(Error::Cancelled),
        }

        if options.reports_progress() {
            writeln!(out, "DONE")?;
        }

        Ok(())
    }
}
