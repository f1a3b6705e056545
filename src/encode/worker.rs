//! Background thread that reads and encodes selected icons.
//!
//! Reading a resource may touch the filesystem, so the picker hands the work
//! to this worker and polls for the result, keeping the UI thread free to
//! process input (including a cancel) in the meantime.

use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread;
use std::time::Duration;

use super::{EncodeError, SelectionResult, encode};
use crate::catalog::Icon;

enum EncodeCommand {
	/// Encode an icon on behalf of request `id`.
	Encode { id: u64, icon: Icon },
	/// Stop the worker thread.
	Shutdown,
}

/// Outcome of one encode request.
#[derive(Debug)]
pub struct EncodeResult {
	/// Identifier of the request this result belongs to.
	pub id: u64,
	pub outcome: Result<SelectionResult, EncodeError>,
}

/// Handle to the encoder thread.
pub struct EncodeWorker {
	tx: Sender<EncodeCommand>,
	rx: Receiver<EncodeResult>,
}

impl EncodeWorker {
	/// Start the worker thread.
	pub fn spawn() -> io::Result<Self> {
		let (command_tx, command_rx) = mpsc::channel();
		let (result_tx, result_rx) = mpsc::channel();

		thread::Builder::new()
			.name("icon-encoder".into())
			.spawn(move || worker_loop(command_rx, result_tx))?;

		Ok(Self {
			tx: command_tx,
			rx: result_rx,
		})
	}

	/// Queue `icon` for encoding under request `id`.
	pub fn submit(&self, id: u64, icon: Icon) -> Result<(), EncodeError> {
		self.tx
			.send(EncodeCommand::Encode { id, icon })
			.map_err(|_| EncodeError::WorkerUnavailable)
	}

	/// Take a finished result without blocking.
	pub fn try_recv(&self) -> Result<EncodeResult, TryRecvError> {
		self.rx.try_recv()
	}

	/// Wait up to `timeout` for the next finished result.
	pub fn recv_timeout(&self, timeout: Duration) -> Result<EncodeResult, RecvTimeoutError> {
		self.rx.recv_timeout(timeout)
	}
}

impl Drop for EncodeWorker {
	fn drop(&mut self) {
		let _ = self.tx.send(EncodeCommand::Shutdown);
	}
}

fn worker_loop(command_rx: Receiver<EncodeCommand>, result_tx: Sender<EncodeResult>) {
	while let Ok(command) = command_rx.recv() {
		let (id, icon) = match command {
			EncodeCommand::Encode { id, icon } => match drain_to_latest(&command_rx, id, icon) {
				Some(latest) => latest,
				None => break,
			},
			EncodeCommand::Shutdown => break,
		};

		let outcome = encode(&icon);
		if let Err(err) = &outcome {
			log::warn!("encoding request {id} failed: {err}");
		}
		if result_tx.send(EncodeResult { id, outcome }).is_err() {
			break;
		}
	}
}

/// Skip requests superseded while the worker was busy.
///
/// Returns `None` when a shutdown was queued behind the request.
fn drain_to_latest(rx: &Receiver<EncodeCommand>, mut id: u64, mut icon: Icon) -> Option<(u64, Icon)> {
	loop {
		match rx.try_recv() {
			Ok(EncodeCommand::Encode {
				id: newer_id,
				icon: newer_icon,
			}) => {
				log::trace!("encode request {id} superseded by {newer_id}");
				id = newer_id;
				icon = newer_icon;
			}
			Ok(EncodeCommand::Shutdown) => return None,
			Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return Some((id, icon)),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use super::*;
	use crate::catalog::IconResource;

	const TIMEOUT: Duration = Duration::from_secs(5);

	#[test]
	fn encodes_off_thread() {
		let worker = EncodeWorker::spawn().expect("spawn");
		let icon = Icon::new("Shield.svg", IconResource::Embedded(b"<svg/>"));
		worker.submit(7, icon).expect("submit");

		let result = worker.recv_timeout(TIMEOUT).expect("result");
		assert_eq!(result.id, 7);
		let selection = result.outcome.expect("encoded");
		assert_eq!(selection.data_uri, "data:image/svg+xml;base64,PHN2Zy8+");
	}

	#[test]
	fn read_failures_come_back_as_results() {
		let worker = EncodeWorker::spawn().expect("spawn");
		let icon = Icon::new(
			"Missing.svg",
			IconResource::File(PathBuf::from("/no/such/dir/Missing.svg")),
		);
		worker.submit(1, icon).expect("submit");

		let result = worker.recv_timeout(TIMEOUT).expect("result");
		assert!(matches!(result.outcome, Err(EncodeError::Read { .. })));
	}

	#[test]
	fn latest_request_is_always_answered() {
		let worker = EncodeWorker::spawn().expect("spawn");
		for id in 1..=5 {
			let icon = Icon::new(&format!("icon{id}.svg"), IconResource::Embedded(b"<svg/>"));
			worker.submit(id, icon).expect("submit");
		}

		let mut last = None;
		while let Ok(result) = worker.recv_timeout(Duration::from_millis(500)) {
			last = Some(result.id);
			if result.id == 5 {
				break;
			}
		}
		assert_eq!(last, Some(5));
	}
}
