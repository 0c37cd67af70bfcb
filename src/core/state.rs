use std::fmt;

/// Linear run stages. The orchestrator only ever moves forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    ArgCheck,
    Scaffold,
    DiscoveryScan,
    Extract,
    Decision,
    EnrichmentScan,
    ReportEmit,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::ArgCheck => "argument check",
            Stage::Scaffold => "scaffold",
            Stage::DiscoveryScan => "discovery scan",
            Stage::Extract => "port extraction",
            Stage::Decision => "decision",
            Stage::EnrichmentScan => "enrichment scan",
            Stage::ReportEmit => "report",
            Stage::Done => "done",
        };
        f.write_str(label)
    }
}

pub struct RunState {
    pub name: String,
    pub target: String,
    pub stage: Stage,
}

impl RunState {
    pub fn new(name: &str, target: &str) -> Self {
        Self {
            name: name.to_string(),
            target: target.to_string(),
            stage: Stage::ArgCheck,
        }
    }

    pub fn advance(&mut self, next: Stage) {
        tracing::info!("stage: {} -> {}", self.stage, next);
        self.stage = next;
    }
}
