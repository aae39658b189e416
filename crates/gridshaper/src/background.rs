//! Off-thread blueprint generation.
//!
//! ```text
//! Caller                         rayon worker
//! ┌───────────┐
//! │ start()   │──── mesh, settings ───►┌────────────────┐
//! └───────────┘                        │ GridShaper::   │
//!                                      │   generate()   │
//! ┌───────────┐                        └───────┬────────┘
//! │ poll()    │◄──── Result<Blueprint> ────────┘
//! └───────────┘
//! ```
//!
//! One generation runs at a time. `restart` cancels the running one and
//! starts over with new settings; the stale result is never delivered.

use std::sync::Arc;

use crossbeam_channel::{self as channel, Receiver, TryRecvError};

use crate::cancel::CancelToken;
use crate::config::{GeneratorSettings, PrefabIds};
use crate::error::Result;
use crate::shaper::{Blueprint, GridShaper};
use crate::types::TriangleMesh;

/// Non-blocking wrapper around [`GridShaper`].
pub struct BackgroundGenerator {
	receiver: Option<Receiver<Result<Blueprint>>>,
	cancel: CancelToken,
	prefabs: Option<PrefabIds>,
}

impl BackgroundGenerator {
	pub fn new() -> Self {
		Self {
			receiver: None,
			cancel: CancelToken::new(),
			prefabs: None,
		}
	}

	/// Use custom external ids for every generation started from now on.
	pub fn with_prefabs(mut self, prefabs: PrefabIds) -> Self {
		self.prefabs = Some(prefabs);
		self
	}

	/// Check if a generation is running or its result is unclaimed.
	pub fn is_busy(&self) -> bool {
		self.receiver.is_some()
	}

	/// Start generating on the rayon pool.
	///
	/// Returns `true` if started, `false` if already busy.
	pub fn start(&mut self, mesh: Arc<TriangleMesh>, settings: GeneratorSettings) -> bool {
		if self.is_busy() {
			return false;
		}

		let (sender, receiver) = channel::bounded(1);
		self.receiver = Some(receiver);
		self.cancel = CancelToken::new();

		let cancel = self.cancel.clone();
		let prefabs = self.prefabs.clone();
		rayon::spawn(move || {
			let shaper = GridShaper::new(&mesh);
			let shaper = match prefabs {
				Some(ids) => shaper.with_prefabs(ids),
				None => shaper,
			};
			let result = shaper.generate(&settings, &cancel);
			// Receiver dropped = cancelled
			let _ = sender.send(result);
		});

		true
	}

	/// Cancel whatever is running and start again.
	pub fn restart(&mut self, mesh: Arc<TriangleMesh>, settings: GeneratorSettings) {
		self.cancel();
		self.start(mesh, settings);
	}

	/// Poll for the result (non-blocking).
	///
	/// Returns `Some(result)` once, when the generation finished.
	pub fn poll(&mut self) -> Option<Result<Blueprint>> {
		let receiver = self.receiver.as_ref()?;

		match receiver.try_recv() {
			Ok(result) => {
				self.receiver = None;
				Some(result)
			}
			Err(TryRecvError::Empty) => None,
			Err(TryRecvError::Disconnected) => {
				self.receiver = None;
				None
			}
		}
	}

	/// Signal the running generation and forget its result.
	pub fn cancel(&mut self) {
		self.cancel.cancel();
		self.receiver = None;
	}
}

impl Default for BackgroundGenerator {
	fn default() -> Self {
		Self::new()
	}
}

impl Drop for BackgroundGenerator {
	fn drop(&mut self) {
		self.cancel.cancel();
	}
}
