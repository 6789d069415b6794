use tracing::Span;
use tracing::info_span;

use crate::output::types::Op;
use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Posts;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Fetch, Parse }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::Fetch => "fetch",
        Phase::Parse => "parse",
    }}
    fn span(&self) -> Span { match self {
        Phase::Fetch => info_span!("fetch"),
        Phase::Parse => info_span!("parse"),
    }}
}

impl OpMarker for Posts {
    const OP: Op = Op::Posts;
    type Phase = Phase;
    fn root_span() -> Span { info_span!("posts") }
}
