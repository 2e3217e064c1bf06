use crate::events::Event;

/// Reporter aggregates events and produces human or JSON output.
pub struct Reporter {
    events: Vec<Event>,
    json_mode: bool,
}

impl Reporter {
    pub fn new(json_mode: bool) -> Self {
        Self {
            events: Vec::new(),
            json_mode,
        }
    }

    pub fn record(&mut self, event: Event) {
        if self.json_mode {
            // Emit JSON line to stdout
            if let Ok(line) = serde_json::to_string(&event) {
                println!("{}", line);
            }
        }
        self.events.push(event);
    }

    /// Human-readable one-line summary of the run.
    pub fn summary(&self) -> String {
        let mut accepted = 0;
        let mut rejected = 0;
        let mut denied = 0;
        for event in &self.events {
            match event {
                Event::CandidateAccepted { .. } => accepted += 1,
                Event::CandidateRejected { .. } => rejected += 1,
                Event::ExtensionDenied { .. } => denied += 1,
                _ => {}
            }
        }
        format!(
            "{} accepted, {} rejected, {} denied by allowlist",
            accepted, rejected, denied
        )
    }
}
