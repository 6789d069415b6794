use tracing::Span;
use tracing::info_span;

use crate::output::types::Op;
use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Show;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Mount, Reveal, Unmount }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::Mount => "mount",
        Phase::Reveal => "reveal",
        Phase::Unmount => "unmount",
    }}
    fn span(&self) -> Span { match self {
        Phase::Mount => info_span!("mount"),
        Phase::Reveal => info_span!("reveal"),
        Phase::Unmount => info_span!("unmount"),
    }}
}

impl OpMarker for Show {
    const OP: Op = Op::Show;
    type Phase = Phase;
    fn root_span() -> Span { info_span!("show") }
}
