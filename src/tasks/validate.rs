use tracing::{info, instrument};

use crate::client::{WorkflowClient, WorkflowError, WorkflowRequest};

/// Check whether the workflow service accepts `credential`.
///
/// A 401 means the key is invalid and yields `Ok(false)`. Every other failure
/// is returned unchanged for the caller to report.
#[instrument(skip_all)]
pub async fn validate_key(client: &WorkflowClient, credential: &str) -> Result<bool, WorkflowError> {
    match client
        .run_workflow(&WorkflowRequest::probe(), Some(credential))
        .await
    {
        Ok(_) => Ok(true),
        Err(err) if err.is_unauthorized() => {
            info!("API key rejected");
            Ok(false)
        }
        Err(err) => Err(err),
    }
}
