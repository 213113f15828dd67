use crate::api::{HaClient, ServiceCall};
use crate::cli::output::print_outcome;
use crate::error::AppError;

/// Invoke a service and report `Success` or `Failure` on stderr.
///
/// A non-2xx answer is an ordinary `Failure`; only transport errors are `Err`.
pub async fn handle(client: &HaClient<'_>, call: &ServiceCall) -> Result<bool, AppError> {
    let success = client.call_service(call).await?;
    print_outcome(success);
    Ok(success)
}
