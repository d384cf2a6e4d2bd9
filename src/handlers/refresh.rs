use serde::Serialize;
use std::sync::Arc;
use tokio::time::interval;
use tracing::{error, info, warn};

use crate::schedule::build_snapshot;
use crate::schedule::window::DateWindow;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct RefreshOutcome {
    pub sequence: u64,
    pub committed: bool,
    pub rows: usize,
}

/// Runs one fetch-to-snapshot cycle for the configured location.
///
/// A failed fetch commits nothing, so the board keeps showing the last good
/// snapshot.
pub async fn refresh_board(state: &AppState) -> RefreshOutcome {
    let sequence = state.store.begin();
    let now = state.clock.now();
    let window = DateWindow::at(&now);
    let location = &state.config.location;

    let rows = match state
        .source
        .fetch(&location.business_id, &window.dates())
        .await
    {
        Ok(rows) => rows,
        Err(e) => {
            error!(
                location = %location.code,
                sequence,
                error = %e,
                "Failed to fetch appointments"
            );
            return RefreshOutcome {
                sequence,
                committed: false,
                rows: 0,
            };
        }
    };

    let row_count = rows.len();
    let snapshot = build_snapshot(&rows, window, sequence, now.to_utc());
    let (today, tomorrow) = (snapshot.today.len(), snapshot.tomorrow.len());

    let committed = state.store.commit(&location.code, snapshot).await;
    if committed {
        info!(
            location = %location.code,
            sequence,
            rows = row_count,
            today,
            tomorrow,
            "Board refreshed"
        );
    } else {
        warn!(
            location = %location.code,
            sequence,
            "Discarding response from a superseded refresh"
        );
    }

    RefreshOutcome {
        sequence,
        committed,
        rows: row_count,
    }
}

/// Refreshes on a fixed period, starting right away for the initial load.
pub fn spawn_refresher(state: Arc<AppState>) {
    tokio::spawn(async move {
        let mut ticker = interval(state.config.refresh_interval);
        info!(
            location = %state.config.location.code,
            every_secs = state.config.refresh_interval.as_secs(),
            "Starting board refresher"
        );

        loop {
            ticker.tick().await;
            refresh_board(&state).await;
        }
    });
}
