use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};
use url::Url;

use crate::error::ClearError;
use crate::executor::Outcome;
use crate::response::ClearResponse;

/// Sends the single DELETE and classifies the reply.
///
/// Only 200 counts as success; its body must carry both `deletedCount` and `message`.
pub(crate) async fn execute(client: &Client, endpoint: &str) -> Result<Outcome> {
    let url = Url::parse(endpoint)
        .with_context(|| format!("Invalid drive API endpoint: {}", endpoint))?;

    debug!(%url, "sending DELETE");
    let response = client
        .delete(url)
        .send()
        .await
        .map_err(ClearError::from)?;

    let status = response.status();
    debug!(%status, "drive API responded");
    let body = response.text().await.map_err(ClearError::from)?;
    let parsed = ClearResponse::parse(status.as_u16(), &body).inspect_err(|e| {
        warn!(%status, error = %e, "unparsable response body");
    })?;

    if status == StatusCode::OK {
        Ok(Outcome::Cleared {
            deleted_count: parsed.deleted_count()?,
            message: parsed.message()?.to_string(),
        })
    } else {
        let error = parsed.error()?.map(str::to_string);
        warn!(%status, ?error, "drive API rejected the clear request");
        Ok(Outcome::Rejected { error })
    }
}
