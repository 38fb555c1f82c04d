use std::hash::Hash;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::weight::Weight;

const MAX_ELEMENTS_DISPLAYED: usize = 20;

/// Node identifiers. Anything cheap to copy, hash, and print will do.
pub trait Node: Copy + Clone + std::fmt::Debug + PartialEq + Eq + Hash {}

impl Node for char {}
impl Node for u16 {}
impl Node for u32 {}
impl Node for u64 {}
impl Node for usize {}

#[derive(Debug, Error)]
pub enum GraphError<N, W>
where
    N: Node,
    W: Weight,
{
    #[error("negative weight {weight} on edge {from:?} -> {to:?}")]
    NegativeWeight { from: N, to: N, weight: W },
}

/// A directed graph stored as an adjacency map: node → (neighbour → weight).
///
/// Every node of the graph appears as a key, including nodes without
/// outgoing edges. Inserting an edge inserts both endpoints; inserting an
/// existing edge overwrites its weight.
///
/// ```
/// use textbook::graph::Graph;
///
/// let mut g = Graph::new();
/// g.insert_edge('A', 'B', 1u64)?;
/// g.insert_edge('B', 'C', 2u64)?;
/// assert_eq!(g.node_count(), 3);
/// assert_eq!(g.weight(&'A', &'B'), Some(1));
/// # Ok::<(), textbook::graph::GraphError<char, u64>>(())
/// ```
#[derive(Clone, Default)]
pub struct Graph<N, W>
where
    N: Node,
    W: Weight,
{
    adjacency: FxHashMap<N, FxHashMap<N, W>>,
}

impl<N, W> Graph<N, W>
where
    N: Node,
    W: Weight,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            adjacency: FxHashMap::default(),
        }
    }

    /// Builds a graph from `(from, to, weight)` triples.
    pub fn from_edges<I>(edges: I) -> Result<Self, GraphError<N, W>>
    where
        I: IntoIterator<Item = (N, N, W)>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.insert_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Adds a node without edges. No-op if the node already exists.
    pub fn insert_node(&mut self, n: N) {
        self.adjacency.entry(n).or_default();
    }

    /// Adds the edge `from → to`, inserting both endpoints as nodes.
    ///
    /// Weights must be non-negative; shortest-path distances are undefined
    /// otherwise.
    pub fn insert_edge(&mut self, from: N, to: N, weight: W) -> Result<(), GraphError<N, W>> {
        if weight < W::zero() {
            return Err(GraphError::NegativeWeight { from, to, weight });
        }
        self.link(from, to, weight);
        Ok(())
    }

    /// Inserts an edge known to carry a valid weight.
    fn link(&mut self, from: N, to: N, weight: W) {
        self.adjacency.entry(from).or_default().insert(to, weight);
        self.adjacency.entry(to).or_default();
    }

    #[must_use]
    pub fn contains(&self, n: &N) -> bool {
        self.adjacency.contains_key(n)
    }

    #[must_use]
    pub fn weight(&self, from: &N, to: &N) -> Option<W> {
        self.adjacency.get(from)?.get(to).copied()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|row| row.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = N> + '_ {
        self.adjacency.keys().copied()
    }

    /// The neighbours of `n` with their edge weights.
    ///
    /// Empty for nodes without outgoing edges and for nodes the graph does
    /// not contain.
    pub fn neighbours(&self, n: &N) -> impl Iterator<Item = (N, W)> + '_ {
        self.adjacency
            .get(n)
            .into_iter()
            .flatten()
            .map(|(&to, &weight)| (to, weight))
    }

    pub fn edges(&self) -> impl Iterator<Item = (N, N, W)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(&from, row)| row.iter().map(move |(&to, &weight)| (from, to, weight)))
    }
}

impl<N, W> std::fmt::Display for Graph<N, W>
where
    N: Node,
    W: Weight,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "Graph({} nodes, {} edges):",
            self.node_count(),
            self.edge_count()
        )?;
        for (from, row) in self.adjacency.iter().take(MAX_ELEMENTS_DISPLAYED) {
            write!(f, "  {from:?}:")?;
            for (to, weight) in row.iter().take(MAX_ELEMENTS_DISPLAYED) {
                write!(f, " {to:?}={weight}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl<N, W> std::fmt::Debug for Graph<N, W>
where
    N: Node,
    W: Weight,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Graph{{{} nodes, {} edges}}",
            self.node_count(),
            self.edge_count()
        )
    }
}

#[derive(Debug, Error)]
pub enum GraphParseError {
    #[error("line {line}: expected `NODE` or `FROM TO WEIGHT`, found {found} fields")]
    MalformedLine { line: usize, found: usize },
    #[error("line {line}: node names are single characters, found '{token}'")]
    InvalidNode { line: usize, token: String },
    #[error("line {line}: invalid weight '{token}': {e}")]
    InvalidWeight {
        line: usize,
        token: String,
        e: std::num::ParseIntError,
    },
    #[error("I/O error when loading '{p}': {e}")]
    IOError {
        p: std::path::PathBuf,
        e: std::io::Error,
    },
}

fn parse_node(token: &str, line: usize) -> Result<char, GraphParseError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(GraphParseError::InvalidNode {
            line,
            token: token.to_string(),
        }),
    }
}

/// Parses the line-oriented graph format.
///
/// One item per line: `A B 3` adds the edge `A → B` with weight 3, a lone
/// `D` declares an isolated node. Blank lines and `#` comments are skipped.
impl std::convert::TryFrom<&str> for Graph<char, u64> {
    type Error = GraphParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut graph = Graph::new();

        for (i, raw) in s.lines().enumerate() {
            let line = i + 1;
            let text = raw.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = text.split_whitespace().collect();
            match fields.as_slice() {
                [node] => {
                    graph.insert_node(parse_node(node, line)?);
                }
                [from, to, weight] => {
                    let from = parse_node(from, line)?;
                    let to = parse_node(to, line)?;
                    let weight =
                        weight
                            .parse::<u64>()
                            .map_err(|e| GraphParseError::InvalidWeight {
                                line,
                                token: (*weight).to_string(),
                                e,
                            })?;
                    // u64 weights cannot be negative, skip insert_edge's check
                    graph.link(from, to, weight);
                }
                fields => {
                    return Err(GraphParseError::MalformedLine {
                        line,
                        found: fields.len(),
                    });
                }
            }
        }

        Ok(graph)
    }
}

impl std::convert::TryFrom<&std::path::Path> for Graph<char, u64> {
    type Error = GraphParseError;

    fn try_from(p: &std::path::Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(p).map_err(|e| GraphParseError::IOError {
            p: p.to_path_buf(),
            e,
        })?;
        Graph::try_from(text.as_str())
    }
}

impl Graph<u32, u64> {
    /// Builds a random directed graph with nodes `0..num_nodes`.
    ///
    /// Every node gets up to `out_degree` outgoing edges with weights drawn
    /// uniformly from `0..=max_weight`. Self-loops are skipped, so actual
    /// out-degrees may be smaller.
    pub fn random<R: rand::Rng>(
        r: &mut R,
        num_nodes: u16,
        out_degree: u16,
        max_weight: u64,
    ) -> Self {
        let mut graph = Self::new();
        for n in 0..u32::from(num_nodes) {
            graph.insert_node(n);
        }

        for from in 0..u32::from(num_nodes) {
            for _ in 0..out_degree {
                let to = r.random_range(0..u32::from(num_nodes));
                if to == from {
                    continue;
                }
                let weight = r.random_range(0..=max_weight);
                graph.link(from, to, weight);
            }
        }

        graph
    }
}
