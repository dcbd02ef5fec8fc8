use crate::error::SyntaxError;
use bitflags::bitflags;
use std::{fmt, str::FromStr};

/// Closed set of filter and operator kinds a backend may declare support for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum FilterKind {
    Include,
    Exclude,
    Id,
    And,
    Or,
    Not,
    PropertyIsNull,
    PropertyIsNil,
    EqualTo,
    NotEqualTo,
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
    Between,
    Like,
    BBox,
    Intersects,
    Disjoint,
    Within,
    Contains,
    Crosses,
    Equals,
    Overlaps,
    Touches,
    DWithin,
    Beyond,
    After,
    Before,
    Begins,
    BegunBy,
    Ends,
    EndedBy,
    During,
    TContains,
    TEquals,
    AnyInteracts,
    Meets,
    MetBy,
    OverlappedBy,
    TOverlaps,
}

bitflags! {
    /// A set of [`FilterKind`]s.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FilterCapabilities: u64 {
        const INCLUDE = 1 << FilterKind::Include as u64;
        const EXCLUDE = 1 << FilterKind::Exclude as u64;
        const ID = 1 << FilterKind::Id as u64;
        const AND = 1 << FilterKind::And as u64;
        const OR = 1 << FilterKind::Or as u64;
        const NOT = 1 << FilterKind::Not as u64;
        const PROPERTY_IS_NULL = 1 << FilterKind::PropertyIsNull as u64;
        const PROPERTY_IS_NIL = 1 << FilterKind::PropertyIsNil as u64;
        const EQUAL_TO = 1 << FilterKind::EqualTo as u64;
        const NOT_EQUAL_TO = 1 << FilterKind::NotEqualTo as u64;
        const GREATER_THAN = 1 << FilterKind::GreaterThan as u64;
        const GREATER_THAN_OR_EQUAL_TO = 1 << FilterKind::GreaterThanOrEqualTo as u64;
        const LESS_THAN = 1 << FilterKind::LessThan as u64;
        const LESS_THAN_OR_EQUAL_TO = 1 << FilterKind::LessThanOrEqualTo as u64;
        const BETWEEN = 1 << FilterKind::Between as u64;
        const LIKE = 1 << FilterKind::Like as u64;
        const BBOX = 1 << FilterKind::BBox as u64;
        const INTERSECTS = 1 << FilterKind::Intersects as u64;
        const DISJOINT = 1 << FilterKind::Disjoint as u64;
        const WITHIN = 1 << FilterKind::Within as u64;
        const CONTAINS = 1 << FilterKind::Contains as u64;
        const CROSSES = 1 << FilterKind::Crosses as u64;
        const EQUALS = 1 << FilterKind::Equals as u64;
        const OVERLAPS = 1 << FilterKind::Overlaps as u64;
        const TOUCHES = 1 << FilterKind::Touches as u64;
        const DWITHIN = 1 << FilterKind::DWithin as u64;
        const BEYOND = 1 << FilterKind::Beyond as u64;
        const AFTER = 1 << FilterKind::After as u64;
        const BEFORE = 1 << FilterKind::Before as u64;
        const BEGINS = 1 << FilterKind::Begins as u64;
        const BEGUN_BY = 1 << FilterKind::BegunBy as u64;
        const ENDS = 1 << FilterKind::Ends as u64;
        const ENDED_BY = 1 << FilterKind::EndedBy as u64;
        const DURING = 1 << FilterKind::During as u64;
        const TCONTAINS = 1 << FilterKind::TContains as u64;
        const TEQUALS = 1 << FilterKind::TEquals as u64;
        const ANY_INTERACTS = 1 << FilterKind::AnyInteracts as u64;
        const MEETS = 1 << FilterKind::Meets as u64;
        const MET_BY = 1 << FilterKind::MetBy as u64;
        const OVERLAPPED_BY = 1 << FilterKind::OverlappedBy as u64;
        const TOVERLAPS = 1 << FilterKind::TOverlaps as u64;
    }
}

impl FilterKind {
    pub const ALL: [FilterKind; 41] = [
        FilterKind::Include,
        FilterKind::Exclude,
        FilterKind::Id,
        FilterKind::And,
        FilterKind::Or,
        FilterKind::Not,
        FilterKind::PropertyIsNull,
        FilterKind::PropertyIsNil,
        FilterKind::EqualTo,
        FilterKind::NotEqualTo,
        FilterKind::GreaterThan,
        FilterKind::GreaterThanOrEqualTo,
        FilterKind::LessThan,
        FilterKind::LessThanOrEqualTo,
        FilterKind::Between,
        FilterKind::Like,
        FilterKind::BBox,
        FilterKind::Intersects,
        FilterKind::Disjoint,
        FilterKind::Within,
        FilterKind::Contains,
        FilterKind::Crosses,
        FilterKind::Equals,
        FilterKind::Overlaps,
        FilterKind::Touches,
        FilterKind::DWithin,
        FilterKind::Beyond,
        FilterKind::After,
        FilterKind::Before,
        FilterKind::Begins,
        FilterKind::BegunBy,
        FilterKind::Ends,
        FilterKind::EndedBy,
        FilterKind::During,
        FilterKind::TContains,
        FilterKind::TEquals,
        FilterKind::AnyInteracts,
        FilterKind::Meets,
        FilterKind::MetBy,
        FilterKind::OverlappedBy,
        FilterKind::TOverlaps,
    ];

    pub fn flag(self) -> FilterCapabilities {
        FilterCapabilities::from_bits_retain(1 << self as u64)
    }

    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Include => "Include",
            FilterKind::Exclude => "Exclude",
            FilterKind::Id => "Id",
            FilterKind::And => "And",
            FilterKind::Or => "Or",
            FilterKind::Not => "Not",
            FilterKind::PropertyIsNull => "PropertyIsNull",
            FilterKind::PropertyIsNil => "PropertyIsNil",
            FilterKind::EqualTo => "EqualTo",
            FilterKind::NotEqualTo => "NotEqualTo",
            FilterKind::GreaterThan => "GreaterThan",
            FilterKind::GreaterThanOrEqualTo => "GreaterThanOrEqualTo",
            FilterKind::LessThan => "LessThan",
            FilterKind::LessThanOrEqualTo => "LessThanOrEqualTo",
            FilterKind::Between => "Between",
            FilterKind::Like => "Like",
            FilterKind::BBox => "BBox",
            FilterKind::Intersects => "Intersects",
            FilterKind::Disjoint => "Disjoint",
            FilterKind::Within => "Within",
            FilterKind::Contains => "Contains",
            FilterKind::Crosses => "Crosses",
            FilterKind::Equals => "Equals",
            FilterKind::Overlaps => "Overlaps",
            FilterKind::Touches => "Touches",
            FilterKind::DWithin => "DWithin",
            FilterKind::Beyond => "Beyond",
            FilterKind::After => "After",
            FilterKind::Before => "Before",
            FilterKind::Begins => "Begins",
            FilterKind::BegunBy => "BegunBy",
            FilterKind::Ends => "Ends",
            FilterKind::EndedBy => "EndedBy",
            FilterKind::During => "During",
            FilterKind::TContains => "TContains",
            FilterKind::TEquals => "TEquals",
            FilterKind::AnyInteracts => "AnyInteracts",
            FilterKind::Meets => "Meets",
            FilterKind::MetBy => "MetBy",
            FilterKind::OverlappedBy => "OverlappedBy",
            FilterKind::TOverlaps => "TOverlaps",
        }
    }

    pub fn is_logical(self) -> bool {
        matches!(self, FilterKind::And | FilterKind::Or | FilterKind::Not)
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for FilterKind {
    type Err = SyntaxError;

    /// Accepts `EqualTo`, `equal_to`, `EQUALTO` and similar spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.replace(['_', '-'], "").to_ascii_lowercase();
        FilterKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().to_ascii_lowercase() == normalized)
            .ok_or_else(|| SyntaxError::UnknownFilterKind(s.to_string()))
    }
}

impl FilterCapabilities {
    pub fn supports(&self, kind: FilterKind) -> bool {
        self.contains(kind.flag())
    }

    pub fn with(self, kind: FilterKind) -> Self {
        self | kind.flag()
    }

    pub fn without(self, kind: FilterKind) -> Self {
        self - kind.flag()
    }

    pub fn kinds(&self) -> Vec<FilterKind> {
        FilterKind::ALL
            .iter()
            .copied()
            .filter(|kind| self.supports(*kind))
            .collect()
    }
}

impl FromIterator<FilterKind> for FilterCapabilities {
    fn from_iter<I: IntoIterator<Item = FilterKind>>(iter: I) -> Self {
        iter.into_iter()
            .fold(FilterCapabilities::empty(), |caps, kind| caps.with(kind))
    }
}
