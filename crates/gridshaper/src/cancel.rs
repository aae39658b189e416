//! Cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{BlueprintError, Result};

/// Shared cancellation flag.
///
/// Clones observe the same flag. Long-running stages call
/// [`CancelToken::check`] at safe points and bail out with
/// [`BlueprintError::Cancelled`].
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
  flag: Arc<AtomicBool>,
}

impl CancelToken {
  pub fn new() -> Self {
    Self::default()
  }

  /// Request cancellation. Idempotent.
  pub fn cancel(&self) {
    self.flag.store(true, Ordering::Relaxed);
  }

  #[inline]
  pub fn is_cancelled(&self) -> bool {
    self.flag.load(Ordering::Relaxed)
  }

  /// `Err(Cancelled)` once cancellation was requested.
  #[inline]
  pub fn check(&self) -> Result<()> {
    if self.is_cancelled() {
      #[cfg(feature = "tracing")]
      tracing::info!("generation cancelled");
      return Err(BlueprintError::Cancelled);
    }
    Ok(())
  }
}
