//! End-to-end encoding of a search request: capability split, filter
//! compilation and view-parameter merge.

use crate::{
    capabilities::Capabilities,
    compiler::FilterCompiler,
    error::CompileError,
    query::QueryCompiler,
    view_params::ViewParams,
};
use compiler_config::settings::CompilerSettings;
use filter_syntax::ast::filter::Filter;
use model::core::schema::AttributeSchema;
use planner::query::ast::node::QueryNode;
use serde_json::{Map, Value as JsonValue};
use std::collections::HashMap;
use tracing::{debug, warn};

/// A search request as received from the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub filter: Option<Filter>,
    pub view_params: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EncodedQuery {
    pub filter: QueryNode,
    pub query: QueryNode,
    pub aggregations: Option<Map<String, JsonValue>>,
    /// Whether the backend evaluates the whole filter.
    pub fully_supported: bool,
    /// Part of the filter the caller must evaluate on returned documents.
    pub post_filter: Option<Filter>,
}

pub struct QueryEncoder<'a, S: AttributeSchema + ?Sized> {
    compiler: QueryCompiler<'a, S>,
    capabilities: Capabilities,
}

impl<'a, S: AttributeSchema + ?Sized> QueryEncoder<'a, S> {
    pub fn new(schema: &'a S, settings: CompilerSettings) -> Self {
        let capabilities = Capabilities::from_settings(&settings.capabilities);
        Self {
            compiler: QueryCompiler::new(schema, settings),
            capabilities,
        }
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn encode(&self, query: &Query) -> Result<EncodedQuery, CompileError> {
        let (native, post_filter, fully_supported) = match &query.filter {
            None => (None, None, true),
            Some(filter) => {
                let (native, post) = self.capabilities.split(filter);
                let fully_supported = post.is_none();
                if !fully_supported {
                    warn!("Filter is not fully supported, a post-filter is required: {filter}");
                }
                (native, post, fully_supported)
            }
        };

        let compiled = self.compiler.compile_optional(native.as_ref())?;
        let view = ViewParams::from_map(&query.view_params, &self.compiler.settings().view_params);
        if !view.is_empty() {
            debug!("Merging view parameters into the compiled query");
        }
        let merged = view.merge(compiled)?;

        Ok(EncodedQuery {
            filter: merged.filter,
            query: merged.query,
            aggregations: merged.aggregations,
            fully_supported,
            post_filter,
        })
    }
}
