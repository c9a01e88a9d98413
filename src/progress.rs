//! Progress and Collector — the external-collaborator contracts for
//! telemetry and duplicate reporting. These are the only "logging" surface
//! this crate has: the progress/telemetry sink and the duplicate collector
//! are the caller's responsibility, not the mapper's.

/// Stage-ordered progress sink. `prepare` calls `started`/`add`/`done` for
/// each stage in order: `SPLIT`, `SORT`, `DETECT`, `RESOLVE (n collisions)`,
/// `DEDUPLICATE`.
pub trait Progress {
    fn started(&self, stage: &str);
    fn add(&self, n: u64);
    fn done(&self);
}

/// A `Progress` that does nothing — the default when the caller has no
/// telemetry sink to wire up.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl Progress for NoopProgress {
    fn started(&self, _stage: &str) {}
    fn add(&self, _n: u64) {}
    fn done(&self) {}
}

/// A `Progress` test double that records every call, for asserting stage
/// order and counts in tests.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    events: std::sync::Mutex<Vec<ProgressEvent>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Started(String),
    Add(u64),
    Done,
}

impl RecordingProgress {
    pub fn new() -> Self {
        RecordingProgress::default()
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }

    /// The stage names, in the order `started` was called for each.
    pub fn stages(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ProgressEvent::Started(s) => Some(s),
                _ => None,
            })
            .collect()
    }
}

impl Progress for RecordingProgress {
    fn started(&self, stage: &str) {
        self.events
            .lock()
            .unwrap()
            .push(ProgressEvent::Started(stage.to_string()));
    }

    fn add(&self, n: u64) {
        self.events.lock().unwrap().push(ProgressEvent::Add(n));
    }

    fn done(&self) {
        self.events.lock().unwrap().push(ProgressEvent::Done);
    }
}

/// Structured report of a detected duplicate `(input_id, group)` pair.
pub trait Collector<InputId> {
    fn duplicate(&self, input_id: &InputId, internal_id: u64, group_name: &str);
}

/// A `Collector` that discards every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCollector;

impl<InputId> Collector<InputId> for NoopCollector {
    fn duplicate(&self, _input_id: &InputId, _internal_id: u64, _group_name: &str) {}
}

/// A `Collector` test double that records every report, for asserting
/// duplicate-detection behavior.
#[derive(Debug, Default)]
pub struct VecCollector<InputId> {
    reports: std::sync::Mutex<Vec<(InputId, u64, String)>>,
}

impl<InputId: Clone> VecCollector<InputId> {
    pub fn new() -> Self {
        VecCollector {
            reports: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn reports(&self) -> Vec<(InputId, u64, String)> {
        self.reports.lock().unwrap().clone()
    }
}

impl<InputId: Clone> Collector<InputId> for VecCollector<InputId> {
    fn duplicate(&self, input_id: &InputId, internal_id: u64, group_name: &str) {
        self.reports
            .lock()
            .unwrap()
            .push((input_id.clone(), internal_id, group_name.to_string()));
    }
}
