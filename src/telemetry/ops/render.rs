use tracing::Span;
use tracing::info_span;

use crate::output::types::Op;
use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Render;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Plan, Load, Write }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self { Phase::Plan => "plan", Phase::Load => "load", Phase::Write => "write" } }
    fn span(&self) -> Span { match self { Phase::Plan => info_span!("plan"), Phase::Load => info_span!("load"), Phase::Write => info_span!("write") } }
}

impl OpMarker for Render {
    const OP: Op = Op::Render;
    type Phase = Phase;
    fn root_span() -> Span { info_span!("render") }
}
