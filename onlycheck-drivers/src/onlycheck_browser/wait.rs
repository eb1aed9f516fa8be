use std::time::Duration;

/// Bounded-polling policy for explicit waits.
///
/// Every explicit wait in the workspace is a loop of cheap lookups
/// separated by the poll interval, abandoned once the timeout elapses.
/// Expiry is reported as a value, never as an error; the caller decides
/// whether absence is fatal.
#[derive(Debug, Clone, Copy)]
pub struct WaitSpec {
    pub timeout: Duration,
    pub interval: Duration,
}

impl Default for WaitSpec {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(20),
            interval: Duration::from_millis(250),
        }
    }
}
