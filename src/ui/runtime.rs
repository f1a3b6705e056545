use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use ratatui::crossterm::execute;

use super::App;
use super::config::UiOptions;
use super::host::PickerOutcome;
use crate::catalog::AssetIndex;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Open a picker over `index` in the terminal and run it until the user
/// selects an icon or cancels.
pub fn run(index: Arc<AssetIndex>, options: UiOptions) -> Result<PickerOutcome> {
	let mut app = App::new(index, options).context("failed to start the icon encoder")?;
	app.run()
}

impl<'a> App<'a> {
	/// Pump the terminal event loop until the picker closes.
	pub fn run(&mut self) -> Result<PickerOutcome> {
		let mut terminal = ratatui::init();
		let setup = execute!(stdout(), EnableMouseCapture)
			.map_err(anyhow::Error::from)
			.and_then(|()| terminal.clear().map_err(anyhow::Error::from));

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(INPUT_POLL)? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let result = match setup {
			Ok(()) => self.event_loop(&mut terminal, &event_rx),
			Err(err) => Err(err.context("failed to prepare the terminal")),
		};

		let _ = execute!(stdout(), DisableMouseCapture);
		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}

	fn event_loop(
		&mut self,
		terminal: &mut DefaultTerminal,
		event_rx: &mpsc::Receiver<Event>,
	) -> Result<PickerOutcome> {
		let mut pending_events = VecDeque::new();

		loop {
			// Input first: a keystroke always lands before the next filter chunk.
			loop {
				match event_rx.try_recv() {
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						return Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			while let Some(event) = pending_events.pop_front() {
				match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => {}
				}
			}

			self.pump_filter();
			self.pump_encode();
			if self.is_busy() {
				self.throbber_state.calc_next();
			}

			if let Some(outcome) = self.take_outcome() {
				return Ok(outcome);
			}

			terminal.draw(|frame| self.draw(frame))?;

			if !self.picker.search().is_pending() {
				thread::sleep(FRAME_INTERVAL);
			}
		}
	}
}

#[cfg(test)]
mod tests;
