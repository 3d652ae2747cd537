//! Hexlink graph engine.
//!
//! An undirected weighted graph with compact triangular storage, breadth-first
//! connectivity queries and a lazily rebuilt spanning forest that makes
//! repeated queries cheap between mutations. Graphs can be built directly,
//! loaded from an edge list, or drawn at random with a fixed edge density.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod connectivity;
mod edge_list;
mod error;
mod generate;
mod graph;
mod mst;
mod weight;

#[cfg(test)]
mod test_utils;

pub use crate::{
    connectivity::SearchStrategy,
    error::{
        GenerateError, GenerateErrorCode, GraphError, GraphErrorCode, LoadError, LoadErrorCode,
        Result,
    },
    generate::RandomGraphBuilder,
    graph::{Row, WeightedGraph},
    mst::kruskal_spanning_forest,
    weight::Weight,
};
