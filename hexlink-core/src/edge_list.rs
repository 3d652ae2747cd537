//! Plain-text edge-list loading.
//!
//! The format is a vertex count followed by `source target weight` records.
//! Tokens are separated by ASCII whitespace, so line breaks carry no meaning.
//!
//! ```text
//! 4
//! 0 1 7
//! 1 2 3
//! ```

use std::{
    fmt,
    fs::File,
    io::{self, Read, Write},
    path::Path,
    str::FromStr,
};

use tracing::{debug, instrument};

use crate::{error::LoadError, graph::WeightedGraph, weight::Weight};

impl<W: Weight + FromStr> WeightedGraph<W> {
    /// Loads a graph from the edge-list file at `path`.
    ///
    /// # Errors
    /// Returns [`LoadError::Open`] when the file cannot be opened, otherwise
    /// the errors documented on [`WeightedGraph::from_edge_list_reader`].
    #[instrument(
        name = "core.load_edge_list",
        err,
        skip(path, disconnected),
        fields(path = %path.as_ref().display()),
    )]
    pub fn from_edge_list(path: impl AsRef<Path>, disconnected: W) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_edge_list_reader(io::BufReader::new(file), disconnected)
    }

    /// Loads a graph from an edge list held by any reader.
    ///
    /// Reading stops without error at the first record that does not parse
    /// as two vertex indices and a weight, including a trailing partial
    /// record or a token holding invalid UTF-8. Tokens are separated by
    /// ASCII whitespace.
    ///
    /// # Errors
    /// Returns [`LoadError::Read`] when the reader fails,
    /// [`LoadError::MissingVertexCount`] when the first token is absent or
    /// not a count, and [`LoadError::Graph`] when the count is zero or a
    /// record names an out-of-range vertex or a self loop.
    ///
    /// # Examples
    /// ```
    /// use hexlink_core::WeightedGraph;
    ///
    /// let source = "3\n0 1 5\n1 2 0\n";
    /// let graph = WeightedGraph::<i64>::from_edge_list_reader(source.as_bytes(), -1)?;
    /// assert_eq!(graph.vertex_count(), 3);
    /// assert_eq!(graph.weight(2, 1)?, 0);
    /// assert_eq!(graph.edge_count(), 2);
    /// # Ok::<(), hexlink_core::LoadError>(())
    /// ```
    pub fn from_edge_list_reader(mut reader: impl Read, disconnected: W) -> Result<Self, LoadError> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|source| LoadError::Read { source })?;

        // A token that is not UTF-8 ends the stream like any other bad token.
        let mut tokens = bytes
            .split(u8::is_ascii_whitespace)
            .filter(|token| !token.is_empty())
            .map_while(|token| std::str::from_utf8(token).ok());
        let vertex_count = tokens
            .next()
            .and_then(|token| token.parse::<usize>().ok())
            .ok_or(LoadError::MissingVertexCount)?;
        let mut graph = Self::new(vertex_count, disconnected)?;

        let mut records = 0_usize;
        while let Some((a, b, weight)) = next_record::<W>(&mut tokens) {
            graph.set_weight(a, b, weight)?;
            records += 1;
        }

        debug!(vertex_count, records, "edge list loaded");
        Ok(graph)
    }
}

impl<W: Weight + fmt::Display> WeightedGraph<W> {
    /// Writes the graph in the edge-list format accepted by
    /// [`WeightedGraph::from_edge_list_reader`], one connected pair per line
    /// with the lower index first.
    ///
    /// # Errors
    /// Returns any error raised by `writer`.
    ///
    /// # Examples
    /// ```
    /// use hexlink_core::WeightedGraph;
    ///
    /// let mut graph = WeightedGraph::new(3, -1_i64)?;
    /// graph.set_weight(2, 0, 4)?;
    /// let mut out = Vec::new();
    /// graph.write_edge_list(&mut out)?;
    /// assert_eq!(out, b"3\n0 2 4\n");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn write_edge_list(&self, mut writer: impl Write) -> io::Result<()> {
        writeln!(writer, "{}", self.vertex_count())?;
        for (a, b, weight) in self.edges() {
            writeln!(writer, "{a} {b} {weight}")?;
        }
        Ok(())
    }
}

fn next_record<'t, W: FromStr>(
    tokens: &mut impl Iterator<Item = &'t str>,
) -> Option<(usize, usize, W)> {
    let a = tokens.next()?.parse().ok()?;
    let b = tokens.next()?.parse().ok()?;
    let weight = tokens.next()?.parse().ok()?;
    Some((a, b, weight))
}
