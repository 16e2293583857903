//! HTTP record source

use super::types::{decode_folders, FolderSource};
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use crate::types::FolderRef;
use async_trait::async_trait;
use tracing::debug;
use url::Url;

/// Record source fetching a JSON document of folders over HTTP
#[derive(Debug)]
pub struct HttpSource {
    url: Url,
    client: HttpClient,
}

impl HttpSource {
    /// Create a source for `url` with the given client settings
    pub fn new(url: &str, config: HttpClientConfig) -> Result<Self> {
        let url = Url::parse(url)?;
        let client = HttpClient::with_config(config)?;
        Ok(Self { url, client })
    }
}

#[async_trait]
impl FolderSource for HttpSource {
    fn name(&self) -> &str {
        self.url.as_str()
    }

    async fn fetch_all(&self) -> Result<Vec<FolderRef>> {
        let response = self.client.get(self.url.as_str()).await?;
        let body = response.bytes().await?;

        let folders = decode_folders(&body)?;
        debug!(url = %self.url, count = folders.len(), "Fetched folders over HTTP");
        Ok(folders)
    }
}
