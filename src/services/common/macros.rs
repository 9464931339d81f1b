/// Logs a best-effort feature that failed and is now running degraded.
///
/// Every optional capability (signal subscription, tray registration, icon
/// lookup, metadata fetches) reports through this single structured log
/// point so degraded sessions can be filtered with `feature=...`.
///
/// # Example
/// ```ignore
/// match proxy.receive_track_change().await {
///     Ok(stream) => Some(stream),
///     Err(err) => {
///         degraded!("track-change", err);
///         None
///     }
/// }
/// ```
#[macro_export]
macro_rules! degraded {
    ($feature:expr, $err:expr) => {
        ::tracing::warn!(
            feature = $feature,
            error = %$err,
            "Feature unavailable, continuing degraded"
        )
    };
}

/// Unwraps a best-effort result, logging a degraded feature on failure.
#[macro_export]
macro_rules! unwrap_or_degraded {
    ($result:expr, $feature:expr, $default:expr) => {
        match $result {
            Ok(value) => value,
            Err(err) => {
                $crate::degraded!($feature, err);
                $default
            }
        }
    };
}
