//! A tracing layer that records events for assertions

use std::sync::{Arc, Mutex};
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

/// Captured log lines, formatted as `[LEVEL] message`
#[derive(Debug, Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<String>>>);

impl CapturedLogs {
	pub fn lines(&self) -> Vec<String> {
		self.0.lock().map(|logs| logs.clone()).unwrap_or_default()
	}

	pub fn contains(&self, level: &str, message: &str) -> bool {
		self.lines()
			.iter()
			.any(|line| line.contains(&format!("[{}]", level)) && line.contains(message))
	}
}

struct LogCapture {
	logs: CapturedLogs,
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for LogCapture {
	fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
		struct MessageVisitor {
			message: String,
		}

		impl tracing::field::Visit for MessageVisitor {
			fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
				if field.name() == "message" {
					self.message = format!("{:?}", value);
				}
			}
		}

		let mut visitor = MessageVisitor {
			message: String::new(),
		};
		event.record(&mut visitor);

		if let Ok(mut logs) = self.logs.0.lock() {
			logs.push(format!("[{}] {}", event.metadata().level(), visitor.message));
		}
	}
}

/// Capture events on the current thread until the guard is dropped
pub fn capture() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
	let logs = CapturedLogs::default();
	let layer = LogCapture { logs: logs.clone() };
	let guard = tracing_subscriber::registry().with(layer).set_default();
	(logs, guard)
}
