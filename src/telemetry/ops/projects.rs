use tracing::Span;
use tracing::info_span;

use crate::output::types::Op;
use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Projects;

#[derive(Copy, Clone, Debug)]
pub enum Phase { List }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self { Phase::List => "list" } }
    fn span(&self) -> Span { match self { Phase::List => info_span!("list") } }
}

impl OpMarker for Projects {
    const OP: Op = Op::Projects;
    type Phase = Phase;
    fn root_span() -> Span { info_span!("projects") }
}
