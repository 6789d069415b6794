use tracing::Span;
use tracing::info_span;

use crate::output::types::Op;
use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Page;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Load, Reveal }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self { Phase::Load => "load", Phase::Reveal => "reveal" } }
    fn span(&self) -> Span { match self { Phase::Load => info_span!("load"), Phase::Reveal => info_span!("reveal") } }
}

impl OpMarker for Page {
    const OP: Op = Op::Page;
    type Phase = Phase;
    fn root_span() -> Span { info_span!("page") }
}
