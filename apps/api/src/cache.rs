use redis::AsyncCommands;
use tracing::{debug, warn};

use crate::analysis::report::AnalysisReport;
use crate::errors::AppError;

const KEY_PREFIX: &str = "resumescan";
const PROBE_VALUE: &str = "ok";
const PROBE_TTL_SECS: u64 = 60;

/// Redis-backed cache of analysis reports, keyed by the SHA-256 of the upload.
#[derive(Clone)]
pub struct AnalysisCache {
    client: redis::Client,
    ttl_secs: u64,
}

impl AnalysisCache {
    pub fn new(client: redis::Client, ttl_secs: u64) -> Self {
        Self { client, ttl_secs }
    }

    /// Returns the cached report for `content_hash`. Unreadable entries count as misses.
    pub async fn get(&self, content_hash: &str) -> Result<Option<AnalysisReport>, AppError> {
        let mut con = self.client.get_multiplexed_async_connection().await?;
        let raw: Option<String> = con.get(analysis_key(content_hash)).await?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(report) => {
                debug!("Cache hit for {content_hash}");
                Ok(Some(report))
            }
            Err(e) => {
                warn!("Discarding unreadable cache entry for {content_hash}: {e}");
                Ok(None)
            }
        }
    }

    pub async fn put(&self, content_hash: &str, report: &AnalysisReport) -> Result<(), AppError> {
        let json = serde_json::to_string(report).map_err(anyhow::Error::from)?;
        let mut con = self.client.get_multiplexed_async_connection().await?;
        con.set_ex::<_, _, ()>(analysis_key(content_hash), json, self.ttl_secs)
            .await?;
        Ok(())
    }

    /// Write-then-read round trip on a probe key.
    pub async fn probe(&self) -> Result<bool, AppError> {
        let key = probe_key();
        let mut con = self.client.get_multiplexed_async_connection().await?;
        con.set_ex::<_, _, ()>(&key, PROBE_VALUE, PROBE_TTL_SECS)
            .await?;
        let value: Option<String> = con.get(&key).await?;
        Ok(value.as_deref() == Some(PROBE_VALUE))
    }
}

fn analysis_key(content_hash: &str) -> String {
    format!("{KEY_PREFIX}:analysis:{content_hash}")
}

fn probe_key() -> String {
    format!("{KEY_PREFIX}:probe")
}
