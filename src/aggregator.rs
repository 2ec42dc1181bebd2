//! # Chunked Aggregation
//!
//! Splits an ordered request list into fixed-size chunks, dispatches one
//! aggregate call per chunk with every chunk in flight at once, and
//! reassembles the results positionally.
//!
//! The join is all-or-nothing: the first failing chunk fails the whole
//! gather and no partial result is returned. Chunks may complete in any
//! order; the output order is always chunk order followed by within-chunk
//! order, i.e. the original request order.

use alloy::primitives::Bytes;
use futures::future::try_join_all;
use std::future::Future;
use tracing::{debug, instrument};

use crate::error::{SnapshotError, SnapshotResult};
use crate::ledger::PositionLedger;
use crate::requests::PositionRequest;

/// Scatter `items` in chunks of `chunk_size` through `dispatch` and gather
/// the flattened results in input order.
///
/// `dispatch` receives the chunk index and the chunk. Each chunk must yield
/// exactly one result per item, otherwise the gather fails with
/// [`SnapshotError::InvalidResponse`].
pub async fn dispatch_chunked<'a, T, R, F, Fut>(
    items: &'a [T],
    chunk_size: usize,
    dispatch: F,
) -> SnapshotResult<Vec<R>>
where
    F: Fn(usize, &'a [T]) -> Fut,
    Fut: Future<Output = SnapshotResult<Vec<R>>>,
{
    if chunk_size == 0 {
        return Err(SnapshotError::config_error(
            "chunk_size must be greater than zero",
        ));
    }

    let in_flight = items.chunks(chunk_size).enumerate().map(|(index, chunk)| {
        let expected = chunk.len();
        let pending = dispatch(index, chunk);
        async move {
            let results = pending.await?;
            if results.len() != expected {
                return Err(SnapshotError::invalid_response(
                    "returnData",
                    format!(
                        "chunk {index} returned {} results for {expected} calls",
                        results.len()
                    ),
                ));
            }
            debug!(chunk = index, size = expected, "Chunk completed");
            Ok(results)
        }
    });

    let gathered = try_join_all(in_flight).await?;
    Ok(gathered.into_iter().flatten().collect())
}

/// Execute every request through the ledger's aggregate call, `chunk_size`
/// requests per call, returning raw payloads in request order.
#[instrument(skip(ledger, requests), fields(requests = requests.len()))]
pub async fn aggregate_chunked<L>(
    ledger: &L,
    requests: &[PositionRequest],
    chunk_size: usize,
) -> SnapshotResult<Vec<Bytes>>
where
    L: PositionLedger + ?Sized,
{
    dispatch_chunked(requests, chunk_size, |index, chunk| {
        let calls = chunk.iter().map(|request| request.call.clone()).collect();
        debug!(
            chunk = index,
            first_position = chunk.first().map(|r| r.position_id),
            size = chunk.len(),
            "Dispatching aggregate call"
        );
        ledger.aggregate(calls)
    })
    .await
}
