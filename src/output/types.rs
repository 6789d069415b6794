use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::feed::window::Window;

pub const SCHEMA_VERSION: &str = "portfolio.v1";

/// Command an envelope belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Op {
    Page,
    Posts,
    Projects,
    Render,
    Show,
}

impl Op {
    pub fn as_str(&self) -> &'static str {
        match self {
            Op::Page => "page",
            Op::Posts => "posts",
            Op::Projects => "projects",
            Op::Render => "render",
            Op::Show => "show",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Where the posts came from and how long the run took.
#[derive(Debug, Clone, Serialize, Default)]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u128>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<Window>,
}

impl Meta {
    pub fn feed(feed_url: &str, window: Window) -> Self {
        Meta { feed_url: Some(feed_url.to_string()), window: Some(window), ..Meta::default() }
    }

    pub fn with_duration_ms(mut self, ms: u128) -> Self {
        self.duration_ms = Some(ms);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    pub schema_version: &'static str,
    pub time: DateTime<Utc>,
    pub request_id: Uuid,
    pub op: Op,
    pub apply: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl Envelope {
    fn new(op: Op, apply: bool, plan: Option<Value>, result: Option<Value>, meta: Option<Meta>) -> Self {
        Envelope { schema_version: SCHEMA_VERSION, time: Utc::now(), request_id: Uuid::new_v4(), op, apply, plan, result, meta }
    }

    pub fn plan<T: Serialize>(op: Op, plan: &T, meta: Option<Meta>) -> Result<Self, serde_json::Error> {
        Ok(Envelope::new(op, false, Some(serde_json::to_value(plan)?), None, meta))
    }

    pub fn result<T: Serialize>(op: Op, result: &T, meta: Option<Meta>) -> Result<Self, serde_json::Error> {
        Ok(Envelope::new(op, true, None, Some(serde_json::to_value(result)?), meta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plan_envelope_names_op_and_schema() {
        let env = Envelope::plan(Op::Render, &json!({"out": "dist/index.html"}), None).unwrap();
        let v = serde_json::to_value(&env).unwrap();
        assert_eq!(v["schema_version"], "portfolio.v1");
        assert_eq!(v["op"], "render");
        assert_eq!(v["apply"], false);
        assert_eq!(v["plan"]["out"], "dist/index.html");
        assert!(v.get("result").is_none());
        assert!(v.get("meta").is_none());
    }

    #[test]
    fn result_envelope_carries_feed_meta() {
        let meta = Meta::feed("https://timpepper.dev/blog/posts/feed/rss.xml", Window::Last(5)).with_duration_ms(12);
        let env = Envelope::result(Op::Posts, &json!({"items": []}), Some(meta)).unwrap();
        let v = serde_json::to_value(&env).unwrap();
        assert_eq!(v["op"], "posts");
        assert_eq!(v["apply"], true);
        assert_eq!(v["meta"]["feed_url"], "https://timpepper.dev/blog/posts/feed/rss.xml");
        assert_eq!(v["meta"]["window"], json!({"from": "last", "n": 5}));
        assert_eq!(v["meta"]["duration_ms"], 12);
        assert!(v.get("plan").is_none());
    }

    #[test]
    fn op_display_matches_wire_name() {
        for op in [Op::Page, Op::Posts, Op::Projects, Op::Render, Op::Show] {
            assert_eq!(serde_json::to_value(op).unwrap(), op.to_string());
        }
    }
}
