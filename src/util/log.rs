use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};
use std::time::Instant;

use anyhow::Result;
use tracing_subscriber::fmt::time::OffsetTime;

pub static LAST_LOG: LazyLock<Mutex<HashMap<String, Instant>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Returns true if the call site `loc` has not logged within the last `seconds`, and records
/// the current time for it if so.
pub fn should_log_at(loc: String, seconds: u64) -> bool {
    let Ok(mut last_log) = LAST_LOG.lock() else {
        return true;
    };
    if last_log
        .get(&loc)
        .is_none_or(|then| then.elapsed().as_secs() >= seconds)
    {
        last_log.insert(loc, Instant::now());
        true
    } else {
        false
    }
}

/// Logs a warning at most once every `$seconds` per call site. Collision code runs every tick,
/// so plain `warn!` would flood the log.
#[macro_export]
macro_rules! warn_every_seconds {
    ($seconds:expr, $($args:expr),+) => {
        if $crate::util::log::should_log_at($crate::util::assert::current_location!(), $seconds) {
            $crate::core::prelude::warn!($($args),+);
        }
    }
}
#[allow(unused_imports)]
pub use warn_every_seconds;

/// Installs a stderr `tracing` subscriber with microsecond timestamps and source locations.
///
/// Intended for binaries and tests that embed this crate; the library itself never installs a
/// subscriber. Fails if a global subscriber is already set.
pub fn setup_log() -> Result<()> {
    let timer = OffsetTime::new(
        time::UtcOffset::UTC,
        time::macros::format_description!("[hour]:[minute]:[second].[subsecond digits:6]"),
    );
    tracing_subscriber::fmt()
        .event_format(
            tracing_subscriber::fmt::format()
                .with_target(false)
                .with_source_location(true)
                .with_timer(timer),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}
