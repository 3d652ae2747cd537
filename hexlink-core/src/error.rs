//! Error types for the hexlink graph engine.
//!
//! Every public error enum is paired with a stable, machine-readable code so
//! the CLI and logs can report failures without matching on message text.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::WeightedGraph`] construction, mutation or
/// queries.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A graph must contain at least one vertex.
    #[error("a graph needs at least one vertex")]
    EmptyGraph,
    /// The weight storage for this many vertices cannot be sized or
    /// allocated.
    #[error("cannot allocate weight storage for {vertex_count} vertices")]
    TooManyVertices {
        /// The rejected vertex count.
        vertex_count: usize,
    },
    /// `set_weight` was called with identical endpoints.
    #[error("cannot set a weight between vertex {vertex} and itself")]
    SelfLoop {
        /// The vertex passed as both endpoints.
        vertex: usize,
    },
    /// An endpoint fell outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    InvalidVertex {
        /// The offending vertex index.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A graph must contain at least one vertex.
        EmptyGraph => EmptyGraph => "GRAPH_EMPTY",
        /// The weight storage cannot be sized or allocated.
        TooManyVertices => TooManyVertices { .. } => "GRAPH_TOO_MANY_VERTICES",
        /// `set_weight` was called with identical endpoints.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// An endpoint fell outside the vertex range.
        InvalidVertex => InvalidVertex { .. } => "GRAPH_INVALID_VERTEX",
    }
}

/// An error produced while loading a graph from an edge list.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LoadError {
    /// The edge-list file could not be opened.
    #[error("failed to open edge list `{path}`: {source}")]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The edge-list source could not be read to the end.
    #[error("failed to read edge list: {source}")]
    Read {
        /// Underlying read failure.
        #[source]
        source: io::Error,
    },
    /// The source did not start with a vertex count.
    #[error("edge list does not start with a vertex count")]
    MissingVertexCount,
    /// A record could not be applied to the graph.
    #[error(transparent)]
    Graph {
        /// The graph error raised while applying the record.
        #[from]
        source: GraphError,
    },
}

define_error_codes! {
    /// Stable codes describing [`LoadError`] variants.
    enum LoadErrorCode for LoadError {
        /// The edge-list file could not be opened.
        Open => Open { .. } => "LOAD_OPEN",
        /// The edge-list source could not be read.
        Read => Read { .. } => "LOAD_READ",
        /// The source did not start with a vertex count.
        MissingVertexCount => MissingVertexCount => "LOAD_MISSING_VERTEX_COUNT",
        /// A record could not be applied to the graph.
        Graph => Graph { .. } => "LOAD_GRAPH",
    }
}

impl LoadError {
    /// Retrieve the inner [`GraphErrorCode`] when a record was rejected by
    /// the graph.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph { source } => Some(source.code()),
            _ => None,
        }
    }
}

/// An error produced by [`crate::RandomGraphBuilder`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GenerateError {
    /// Edge density was outside `[0, 1]` or not a number.
    #[error("edge density must lie in [0, 1] (got {density})")]
    EdgeDensityOutOfRange {
        /// The rejected density.
        density: f64,
    },
    /// The weight range was empty or started below zero.
    #[error("weight range must satisfy zero <= min <= max (got {min}..={max})")]
    InvalidWeightRange {
        /// Rendered lower bound.
        min: String,
        /// Rendered upper bound.
        max: String,
    },
    /// The disconnected sentinel lies inside the weight range, so sampled
    /// edges could read as missing.
    #[error("disconnected sentinel {sentinel} lies inside the weight range")]
    SentinelInWeightRange {
        /// Rendered sentinel.
        sentinel: String,
    },
    /// The edge budget cannot hold a spanning tree.
    #[error("edge budget {budget} is below the {required} edges a connected graph needs")]
    InsufficientEdgeBudget {
        /// Number of edges the density allows.
        budget: usize,
        /// Number of edges a spanning tree needs.
        required: usize,
    },
    /// The graph itself rejected the configuration.
    #[error(transparent)]
    Graph {
        /// The underlying graph error.
        #[from]
        source: GraphError,
    },
}

define_error_codes! {
    /// Stable codes describing [`GenerateError`] variants.
    enum GenerateErrorCode for GenerateError {
        /// Edge density was outside `[0, 1]`.
        EdgeDensityOutOfRange => EdgeDensityOutOfRange { .. } => "GENERATE_EDGE_DENSITY_OUT_OF_RANGE",
        /// The weight range was empty or started below zero.
        InvalidWeightRange => InvalidWeightRange { .. } => "GENERATE_INVALID_WEIGHT_RANGE",
        /// The sentinel lies inside the weight range.
        SentinelInWeightRange => SentinelInWeightRange { .. } => "GENERATE_SENTINEL_IN_WEIGHT_RANGE",
        /// The edge budget cannot hold a spanning tree.
        InsufficientEdgeBudget => InsufficientEdgeBudget { .. } => "GENERATE_INSUFFICIENT_EDGE_BUDGET",
        /// The graph itself rejected the configuration.
        Graph => Graph { .. } => "GENERATE_GRAPH",
    }
}

/// Convenient alias for results returned by graph operations.
pub type Result<T> = core::result::Result<T, GraphError>;
