//! Sinks for the human-readable narration a device emits.
//!
//! Every event dispatched to a device produces exactly one narration line,
//! naming either the action taken or the reason it was refused.

use tracing::info;
use uuid::Uuid;

/// Consumer of narration lines.
pub trait Narrator {
    fn narrate(&mut self, line: &str);
}

impl<N: Narrator + ?Sized> Narrator for &mut N {
    fn narrate(&mut self, line: &str) {
        (**self).narrate(line)
    }
}

impl<N: Narrator + ?Sized> Narrator for Box<N> {
    fn narrate(&mut self, line: &str) {
        (**self).narrate(line)
    }
}

/// Emits each line as a `tracing` info event tagged with the device id.
#[derive(Debug, Clone, Default)]
pub struct TracingNarrator {
    device_id: Option<Uuid>,
}

impl TracingNarrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_device(device_id: Uuid) -> Self {
        Self {
            device_id: Some(device_id),
        }
    }
}

impl Narrator for TracingNarrator {
    fn narrate(&mut self, line: &str) {
        match self.device_id {
            Some(id) => info!(device_id = %id, "{line}"),
            None => info!("{line}"),
        }
    }
}

/// Keeps every line in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingNarrator {
    lines: Vec<String>,
}

impl RecordingNarrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Narrator for RecordingNarrator {
    fn narrate(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Silent;

impl Narrator for Silent {
    fn narrate(&mut self, _line: &str) {}
}
