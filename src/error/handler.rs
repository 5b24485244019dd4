//! Pluggable error sink.
//!
//! The embedding application decides what happens when a component detects
//! misuse: log it, count it, halt the system. It does so by installing a
//! plain function pointer; there is at most one callback per process.

use super::Error;
use std::sync::RwLock;

/// Signature of an installed error callback.
pub type ErrorCallback = fn(&Error);

static CALLBACK: RwLock<Option<ErrorCallback>> = RwLock::new(None);

/// Installs `callback`, replacing any previous one.
pub fn set_callback(callback: ErrorCallback) {
    #[cfg(feature = "tracing")]
    tracing::debug!("error callback installed");
    *CALLBACK.write().unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(callback);
}

/// Removes the installed callback, if any.
pub fn clear_callback() {
    #[cfg(feature = "tracing")]
    tracing::debug!("error callback cleared");
    *CALLBACK.write().unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
}

/// Returns `true` if a callback is installed.
pub fn has_callback() -> bool {
    CALLBACK
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .is_some()
}

pub(crate) fn notify(err: &Error) {
    #[cfg(feature = "tracing")]
    tracing::warn!(error = %err, "etl error raised");

    // Copy the pointer out so the callback may itself touch the handler.
    let callback = *CALLBACK.read().unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(callback) = callback {
        callback(err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{raise, OptionalError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    static SEEN: AtomicUsize = AtomicUsize::new(0);

    fn count(err: &Error) {
        if matches!(err, Error::Optional(OptionalError::Invalid)) {
            SEEN.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_callback_receives_raised_errors() {
        set_callback(count);
        assert!(has_callback());
        let before = SEEN.load(Ordering::SeqCst);
        raise(OptionalError::Invalid);
        assert!(SEEN.load(Ordering::SeqCst) > before);
        clear_callback();
    }
}
