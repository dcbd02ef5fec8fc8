//! Merging of caller-supplied native query fragments with a compiled filter.

use crate::error::CompileError;
use compiler_config::settings::ViewParamKeys;
use planner::{all_of, query::ast::node::QueryNode};
use serde_json::{Map, Value as JsonValue};
use tracing::{debug, info};

/// Out-of-band request parameters recognized by the merger.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewParams {
    pub filter: Option<String>,
    pub query: Option<String>,
    pub native_only: bool,
    pub aggregations: Option<String>,
}

/// Final filter and scoring query after merging.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedQuery {
    pub filter: QueryNode,
    pub query: QueryNode,
    pub aggregations: Option<Map<String, JsonValue>>,
}

impl ViewParams {
    /// Picks the recognized keys out of a raw parameter map. Keys match
    /// case-insensitively; unrecognized keys are ignored.
    pub fn from_map<'a, I>(params: I, keys: &ViewParamKeys) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let mut view = ViewParams::default();
        for (key, value) in params {
            if key.eq_ignore_ascii_case(&keys.filter) {
                view.filter = Some(value.clone());
            } else if key.eq_ignore_ascii_case(&keys.query) {
                view.query = Some(value.clone());
            } else if key.eq_ignore_ascii_case(&keys.native_only) {
                view.native_only = value.trim().eq_ignore_ascii_case("true");
            } else if key.eq_ignore_ascii_case(&keys.aggregations) {
                view.aggregations = Some(value.clone());
            }
        }
        view
    }

    pub fn is_empty(&self) -> bool {
        self == &ViewParams::default()
    }

    pub fn merge(&self, compiled: QueryNode) -> Result<MergedQuery, CompileError> {
        let mut compiled = compiled;
        if self.native_only {
            info!("Native-only requested, discarding the compiled filter");
            compiled = QueryNode::MatchAll;
        }

        let filter = match &self.filter {
            Some(fragment) => {
                let wrapped = QueryNode::Wrapper(fragment.clone());
                if compiled.is_match_all() {
                    wrapped
                } else {
                    debug!("Combining compiled filter with native filter fragment");
                    all_of!(compiled, wrapped)
                }
            }
            None => compiled,
        };

        let query = match &self.query {
            Some(fragment) => QueryNode::Wrapper(fragment.clone()),
            None => QueryNode::MatchAll,
        };

        let aggregations = self
            .aggregations
            .as_deref()
            .map(parse_aggregations)
            .transpose()?;

        Ok(MergedQuery {
            filter,
            query,
            aggregations,
        })
    }
}

impl MergedQuery {
    /// Query and filter as a single node.
    pub fn combined(&self) -> QueryNode {
        match (self.query.is_match_all(), self.filter.is_match_all()) {
            (true, _) => self.filter.clone(),
            (false, true) => self.query.clone(),
            (false, false) => all_of!(self.query.clone(), self.filter.clone()),
        }
    }
}

fn parse_aggregations(raw: &str) -> Result<Map<String, JsonValue>, CompileError> {
    if let Some(map) = parse_object(raw) {
        return Ok(map);
    }

    let decoded = urlencoding::decode(raw).map_err(|err| CompileError::ViewParam {
        key: "aggregations".to_string(),
        reason: err.to_string(),
    })?;
    parse_object(&decoded).ok_or_else(|| CompileError::ViewParam {
        key: "aggregations".to_string(),
        reason: "expected a JSON object of aggregation definitions".to_string(),
    })
}

fn parse_object(raw: &str) -> Option<Map<String, JsonValue>> {
    match serde_json::from_str::<JsonValue>(raw) {
        Ok(JsonValue::Object(map)) => Some(map),
        _ => None,
    }
}
