//! The list fetch cycle.
//!
//! A cycle emits `FetchStarted`, then `ResultsReceived` or `FetchFailed`
//! (or neither when the body carried no `results`), and always ends with
//! `FetchFinished`.

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::api::ApiClient;
use crate::shutdown::ShutdownHandle;
use crate::ui::list::ListIntent;

/// Runs one fetch cycle, reporting progress through `emit`.
pub async fn run_fetch<F>(client: &ApiClient, emit: F)
where
    F: FnMut(ListIntent),
{
    // Fires on success, failure, panic and cancellation alike.
    let mut guard = scopeguard::guard(emit, |mut emit| emit(ListIntent::FetchFinished));
    let emit: &mut F = &mut guard;

    emit(ListIntent::FetchStarted);

    match client.fetch_page().await {
        Ok(Some(results)) => {
            tracing::info!(count = results.len(), "Fetched Pokémon list");
            emit(ListIntent::ResultsReceived(results));
        }
        Ok(None) => {
            tracing::warn!(
                url = client.list_url(),
                "List response has no results field; keeping current content"
            );
        }
        Err(err) => {
            tracing::error!(kind = err.error_type(), error = %err, "Error fetching data");
            emit(ListIntent::FetchFailed {
                message: err.user_message().to_string(),
            });
        }
    }
}

/// Spawns the fetch cycle on `runtime`, cancelled when `shutdown` fires.
///
/// Cancellation still emits `FetchFinished`; by then the receiving side is
/// gone and the send is dropped.
pub fn spawn_fetch<F>(
    runtime: &Handle,
    client: ApiClient,
    shutdown: ShutdownHandle,
    emit: F,
) -> JoinHandle<()>
where
    F: FnMut(ListIntent) + Send + 'static,
{
    runtime.spawn(async move {
        tokio::select! {
            _ = run_fetch(&client, emit) => {}
            _ = shutdown.wait() => {
                tracing::debug!("List fetch cancelled by teardown");
            }
        }
    })
}
