use chrono::DateTime;
use chrono_tz::Tz;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::interval;
use tracing::debug;

use crate::schedule::window::local_now;

/// Wall clock as shown on the board.
///
/// The displayed time only moves on ticks, like the clock on the screen.
/// `now()` is exact for a live clock and is what refresh cycles use.
#[derive(Clone)]
pub struct Clock {
    tick: watch::Receiver<DateTime<Tz>>,
    live: bool,
}

impl Clock {
    /// A clock that never advances.
    pub fn frozen(at: DateTime<Tz>) -> Self {
        let (_tx, tick) = watch::channel(at);
        Clock { tick, live: false }
    }

    pub fn displayed(&self) -> DateTime<Tz> {
        *self.tick.borrow()
    }

    pub fn now(&self) -> DateTime<Tz> {
        if self.live {
            local_now()
        } else {
            self.displayed()
        }
    }
}

/// Starts the ticking clock. Must be called from inside the runtime.
pub fn spawn_clock(period: Duration) -> Clock {
    let (tx, tick) = watch::channel(local_now());

    tokio::spawn(async move {
        let mut ticker = interval(period);
        // first tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let now = local_now();
            debug!(now = %now, "Clock tick");
            if tx.send(now).is_err() {
                break;
            }
        }
    });

    Clock { tick, live: true }
}
