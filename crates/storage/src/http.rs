use async_trait::async_trait;
use std::time::Duration;
use url::Url;

use crate::repository::{QuestionSource, StorageError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetches the bank document over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: Url,
    client: reqwest::Client,
}

impl HttpSource {
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl QuestionSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>, StorageError> {
        let response = self
            .client
            .get(self.url.clone())
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StorageError::HttpStatus(response.status()));
        }

        Ok(response.bytes().await?.to_vec())
    }

    fn describe(&self) -> String {
        format!("url {}", self.url)
    }
}
