use std::sync::Arc;

use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::JoinSet;

use crate::artwork::thumbnail::{Rgb, Thumbnail, ThumbnailBounds};
use crate::shutdown::ShutdownHandle;
use crate::ui::gallery::ArtworkIntent;

#[derive(Debug, Error)]
pub enum ArtworkError {
    #[error("Request for '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("'{url}' returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to decode '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: image::ImageError,
    },
}

/// Shared parameters for every artwork request of one grid.
#[derive(Clone)]
pub struct ArtworkLoader {
    client: reqwest::Client,
    bounds: ThumbnailBounds,
    background: Rgb,
}

impl ArtworkLoader {
    pub fn new(client: reqwest::Client, bounds: ThumbnailBounds, background: Rgb) -> Self {
        Self {
            client,
            bounds,
            background,
        }
    }

    pub async fn fetch(&self, url: &str) -> Result<Thumbnail, ArtworkError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ArtworkError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ArtworkError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| ArtworkError::Request {
                url: url.to_string(),
                source,
            })?;

        Thumbnail::from_png(&bytes, self.bounds, self.background).map_err(|source| {
            ArtworkError::Decode {
                url: url.to_string(),
                source,
            }
        })
    }

    /// Starts one download per URL into `tasks`.
    ///
    /// Each task reports `Loaded` or `Failed` and stops early on teardown.
    pub fn spawn_all<F>(
        &self,
        tasks: &mut JoinSet<()>,
        runtime: &Handle,
        urls: Vec<String>,
        shutdown: &ShutdownHandle,
        emit: F,
    ) where
        F: Fn(ArtworkIntent) + Clone + Send + 'static,
    {
        for url in urls {
            let loader = self.clone();
            let shutdown = shutdown.clone();
            let emit = emit.clone();
            tasks.spawn_on(
                async move {
                    let result = tokio::select! {
                        result = loader.fetch(&url) => result,
                        _ = shutdown.wait() => return,
                    };
                    match result {
                        Ok(thumbnail) => emit(ArtworkIntent::Loaded {
                            url,
                            thumbnail: Arc::new(thumbnail),
                        }),
                        Err(err) => {
                            tracing::debug!(error = %err, "Artwork unavailable");
                            emit(ArtworkIntent::Failed { url });
                        }
                    }
                },
                runtime,
            );
        }
    }
}
