//! Filter kinds the document-search backend executes natively.

use compiler_config::settings::CapabilitySettings;
use filter_syntax::ast::{
    filter::Filter,
    kind::{FilterCapabilities, FilterKind},
};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    supported: FilterCapabilities,
}

impl Capabilities {
    pub fn new(supported: FilterCapabilities) -> Self {
        Self { supported }
    }

    /// Logical, comparison, null, between, id, include/exclude, like, the
    /// bbox/intersects/disjoint/within/contains/dwithin/beyond spatial
    /// operators, and the concrete temporal operators.
    pub fn document_store() -> Self {
        let unsupported = FilterCapabilities::PROPERTY_IS_NIL
            | FilterCapabilities::CROSSES
            | FilterCapabilities::EQUALS
            | FilterCapabilities::OVERLAPS
            | FilterCapabilities::TOUCHES
            | FilterCapabilities::ANY_INTERACTS
            | FilterCapabilities::MEETS
            | FilterCapabilities::MET_BY
            | FilterCapabilities::OVERLAPPED_BY
            | FilterCapabilities::TOVERLAPS;
        Self::new(FilterCapabilities::all() - unsupported)
    }

    /// Default set minus the configured exclusions.
    pub fn from_settings(settings: &CapabilitySettings) -> Self {
        let mut supported = Self::document_store().supported;
        for name in &settings.exclude {
            match name.parse::<FilterKind>() {
                Ok(kind) => supported = supported.without(kind),
                Err(err) => warn!("Ignoring capability exclusion: {err}"),
            }
        }
        Self::new(supported)
    }

    pub fn supports(&self) -> FilterCapabilities {
        self.supported
    }

    pub fn supports_kind(&self, kind: FilterKind) -> bool {
        self.supported.supports(kind)
    }

    /// Every kind in the tree, including logical children, is supported.
    pub fn fully_supports(&self, filter: &Filter) -> bool {
        self.supports_kind(filter.kind())
            && filter
                .children()
                .into_iter()
                .all(|child| self.fully_supports(child))
    }

    /// Splits a filter into the part the backend can run and the remainder
    /// that must be evaluated by the caller. Only a top-level `And` is
    /// partitioned.
    pub fn split(&self, filter: &Filter) -> (Option<Filter>, Option<Filter>) {
        if self.fully_supports(filter) {
            return (Some(filter.clone()), None);
        }

        match filter {
            Filter::And(children) if self.supports_kind(FilterKind::And) => {
                let (pre, post): (Vec<Filter>, Vec<Filter>) = children
                    .iter()
                    .cloned()
                    .partition(|child| self.fully_supports(child));
                debug!(
                    "Split conjunction into {} native and {} post-filter parts",
                    pre.len(),
                    post.len()
                );
                (conjoin(pre), conjoin(post))
            }
            _ => (None, Some(filter.clone())),
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::document_store()
    }
}

fn conjoin(mut filters: Vec<Filter>) -> Option<Filter> {
    match filters.len() {
        0 => None,
        1 => filters.pop(),
        _ => Some(Filter::And(filters)),
    }
}
