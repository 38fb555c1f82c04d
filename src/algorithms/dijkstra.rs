//! Single-source shortest distances over non-negative edge weights.

use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::graph::Graph;
use crate::graph::Node;
use crate::weight::Weight;

/// Distance from the source to every node of the graph.
///
/// Unreachable nodes sit at `W::max_value()`, the table's infinity.
#[derive(Clone, PartialEq, Eq)]
pub struct Distances<N, W>
where
    N: Node,
    W: Weight,
{
    source: N,
    table: FxHashMap<N, W>,
}

impl<N, W> Distances<N, W>
where
    N: Node,
    W: Weight,
{
    #[must_use]
    pub fn source(&self) -> N {
        self.source
    }

    /// The distance to `n`, or `None` if the graph never contained it.
    #[must_use]
    pub fn get(&self, n: &N) -> Option<W> {
        self.table.get(n).copied()
    }

    #[must_use]
    pub fn is_reachable(&self, n: &N) -> bool {
        self.get(n).is_some_and(|d| d.finite())
    }

    pub fn iter(&self) -> impl Iterator<Item = (N, W)> + '_ {
        self.table.iter().map(|(&n, &d)| (n, d))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Panics for nodes the graph never contained, like indexing a map.
impl<N, W> std::ops::Index<&N> for Distances<N, W>
where
    N: Node,
    W: Weight,
{
    type Output = W;

    fn index(&self, n: &N) -> &W {
        &self.table[n]
    }
}

/// One `node: distance` row per line, nearest first, `∞` when unreachable.
impl<N, W> std::fmt::Display for Distances<N, W>
where
    N: Node + Ord,
    W: Weight,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut rows: Vec<(N, W)> = self.iter().collect();
        rows.sort_by_key(|&(n, d)| (d, n));

        for (node, distance) in rows {
            if distance.finite() {
                writeln!(f, "{node:?}: {distance}")?;
            } else {
                writeln!(f, "{node:?}: ∞")?;
            }
        }

        Ok(())
    }
}

impl<N, W> std::fmt::Debug for Distances<N, W>
where
    N: Node,
    W: Weight,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Distances{{{} nodes from {:?}}}", self.len(), self.source)
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum DijkstraError<N>
where
    N: Node,
{
    // The field is not called `source` so that thiserror does not take it
    // for an error cause and bound it with std::error::Error.
    #[error("source node {node:?} is not in the graph")]
    UnknownSource { node: N },
}

/// Computes shortest distances by linear-scan Dijkstra.
///
/// Returns the minimum total edge weight from `source` to every node of the
/// graph. Ties between equally-close candidates break arbitrarily, which
/// never changes the resulting distances.
///
/// Selection scans the whole unvisited set each round, so a run costs
/// O(V²). Fine for classroom-sized graphs; [`dijkstra_with_heap`] is the
/// O((V+E) log V) variant.
///
/// ```
/// use textbook::algorithms::dijkstra::dijkstra;
/// use textbook::graph::Graph;
///
/// let g = Graph::from_edges([('A', 'B', 1u64), ('B', 'C', 2u64)])?;
/// let distances = dijkstra(&g, 'A')?;
/// assert_eq!(distances[&'C'], 3);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn dijkstra<N, W>(graph: &Graph<N, W>, source: N) -> Result<Distances<N, W>, DijkstraError<N>>
where
    N: Node,
    W: Weight,
{
    if !graph.contains(&source) {
        return Err(DijkstraError::UnknownSource { node: source });
    }

    // Every node of the graph gets a table entry, so indexing is total.
    let mut table: FxHashMap<N, W> = graph.nodes().map(|n| (n, W::max_value())).collect();
    table.insert(source, W::zero());

    let mut unvisited: FxHashSet<N> = graph.nodes().collect();

    loop {
        let Some(&current) = unvisited.iter().min_by_key(|n| table[*n]) else {
            break;
        };

        let d = table[&current];
        if !d.finite() {
            // Every remaining node is unreachable.
            log::debug!("early exit with {} unreachable nodes", unvisited.len());
            break;
        }

        for (neighbour, weight) in graph.neighbours(&current) {
            if !unvisited.contains(&neighbour) {
                continue;
            }
            let candidate = d.saturating_add(&weight);
            if candidate < table[&neighbour] {
                table.insert(neighbour, candidate);
            }
        }

        unvisited.remove(&current);
    }

    let distances = Distances { source, table };
    verify_distances(graph, &distances);
    Ok(distances)
}

/// Priority-queue Dijkstra. Same distances as [`dijkstra`], O((V+E) log V).
///
/// Instead of re-ranking nodes in place the heap accumulates stale entries;
/// any entry worse than the already-settled distance is skipped on pop.
pub fn dijkstra_with_heap<N, W>(
    graph: &Graph<N, W>,
    source: N,
) -> Result<Distances<N, W>, DijkstraError<N>>
where
    N: Node,
    W: Weight,
{
    if !graph.contains(&source) {
        return Err(DijkstraError::UnknownSource { node: source });
    }

    let mut table: FxHashMap<N, W> = graph.nodes().map(|n| (n, W::max_value())).collect();
    table.insert(source, W::zero());

    let mut open = BinaryHeap::new();
    open.push(HeapEntry {
        distance: W::zero(),
        node: source,
    });

    while let Some(HeapEntry { distance, node }) = open.pop() {
        if distance > table[&node] {
            // Stale entry, the node was settled through a better path.
            continue;
        }

        for (neighbour, weight) in graph.neighbours(&node) {
            let candidate = distance.saturating_add(&weight);
            if candidate < table[&neighbour] {
                table.insert(neighbour, candidate);
                open.push(HeapEntry {
                    distance: candidate,
                    node: neighbour,
                });
            }
        }
    }

    let distances = Distances { source, table };
    verify_distances(graph, &distances);
    Ok(distances)
}

/// A heap entry: a tentative distance and the node it reaches.
///
/// Only the distance ranks entries; the node tags along.
#[derive(Debug)]
struct HeapEntry<N, W> {
    distance: W,
    node: N,
}

/// PartialEq is forwarded to the distance's PartialEq
impl<N, W: Weight> PartialEq for HeapEntry<N, W> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.distance.eq(&other.distance)
    }
}
impl<N, W: Weight> Eq for HeapEntry<N, W> {}

/// PartialOrd is forwarded to Ord::cmp
impl<N, W: Weight> PartialOrd for HeapEntry<N, W> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
/// Ord is reversed so that `BinaryHeap`, a max-heap, pops the nearest node.
impl<N, W: Weight> Ord for HeapEntry<N, W> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.distance.cmp(&self.distance)
    }
}

/// Checks that no edge can relax the finished table any further.
#[cfg(feature = "verify")]
#[inline(always)]
fn verify_distances<N, W>(graph: &Graph<N, W>, distances: &Distances<N, W>)
where
    N: Node,
    W: Weight,
{
    debug_assert!(distances[&distances.source()] == W::zero());

    for (from, to, weight) in graph.edges() {
        let d = distances[&from];
        if d.finite() {
            debug_assert!(
                distances[&to] <= d.saturating_add(&weight),
                "edge {from:?} -> {to:?} is still relaxable",
            );
        }
    }
}
#[cfg(not(feature = "verify"))]
#[inline(always)]
fn verify_distances<N, W>(_graph: &Graph<N, W>, _distances: &Distances<N, W>)
where
    N: Node,
    W: Weight,
{
    // All good... (hopefully)
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;
    use crate::float_weight::FloatWeight;

    #[test]
    fn solves_the_diamond_graph() {
        let g = Graph::from_edges([
            ('A', 'B', 1u64),
            ('A', 'C', 4),
            ('B', 'C', 2),
            ('B', 'D', 5),
            ('C', 'D', 1),
        ])
        .unwrap();

        let distances = dijkstra(&g, 'A').unwrap();
        assert_eq!(distances.source(), 'A');
        for (node, want) in [('A', 0), ('B', 1), ('C', 3), ('D', 4)] {
            assert_eq!(distances[&node], want, "wrong distance to {node:?}");
        }

        assert_eq!(distances, dijkstra_with_heap(&g, 'A').unwrap());
    }

    #[test]
    fn a_single_node_maps_to_zero() {
        let mut g = Graph::<char, u64>::new();
        g.insert_node('A');

        let distances = dijkstra(&g, 'A').unwrap();
        assert_eq!(distances.len(), 1);
        assert_eq!(distances[&'A'], 0);
    }

    #[test]
    fn unreachable_nodes_stay_at_infinity() {
        let mut g = Graph::from_edges([('A', 'B', 2u64)]).unwrap();
        g.insert_node('C');

        let distances = dijkstra(&g, 'A').unwrap();
        assert_eq!(distances[&'B'], 2);
        assert_eq!(distances[&'C'], u64::MAX);
        assert!(distances.is_reachable(&'B'));
        assert!(!distances.is_reachable(&'C'));

        // Nodes the graph never contained are not in the table at all.
        assert_eq!(distances.get(&'Z'), None);
        assert!(!distances.is_reachable(&'Z'));
    }

    #[test]
    fn edges_into_the_source_change_nothing() {
        let g = Graph::from_edges([('B', 'A', 7u64), ('A', 'C', 1)]).unwrap();

        let distances = dijkstra(&g, 'A').unwrap();
        assert_eq!(distances[&'A'], 0);
        assert_eq!(distances[&'C'], 1);
        assert!(!distances.is_reachable(&'B'));
    }

    #[test]
    fn rejects_a_source_outside_the_graph() {
        let g = Graph::from_edges([('A', 'B', 1u64)]).unwrap();

        assert_eq!(
            dijkstra(&g, 'Z').unwrap_err(),
            DijkstraError::UnknownSource { node: 'Z' }
        );
        assert_eq!(
            dijkstra_with_heap(&g, 'Z').unwrap_err(),
            DijkstraError::UnknownSource { node: 'Z' }
        );
    }

    #[test]
    fn the_unknown_source_error_boxes_and_displays() {
        let g = Graph::from_edges([('A', 'B', 1u64)]).unwrap();

        // `?` in callers relies on this conversion.
        let e: Box<dyn std::error::Error> = dijkstra(&g, 'Z').unwrap_err().into();
        assert_eq!(e.to_string(), "source node 'Z' is not in the graph");
    }

    #[test]
    fn prefers_cheap_detours_over_direct_edges() {
        let g = Graph::from_edges([
            ('S', 'G', 10u64),
            ('S', 'A', 1),
            ('A', 'B', 1),
            ('B', 'G', 1),
        ])
        .unwrap();

        let distances = dijkstra(&g, 'S').unwrap();
        assert_eq!(distances[&'G'], 3);
    }

    #[test]
    fn works_with_float_weights() {
        let g = Graph::from_edges([
            ('A', 'B', FloatWeight::new(0.5f64)),
            ('B', 'C', FloatWeight::new(0.25)),
        ])
        .unwrap();

        let distances = dijkstra(&g, 'A').unwrap();
        assert_eq!(distances[&'C'], FloatWeight::new(0.75));
    }

    #[test]
    fn displays_rows_nearest_first() {
        let mut g = Graph::from_edges([('A', 'B', 2u64)]).unwrap();
        g.insert_node('C');

        let distances = dijkstra(&g, 'A').unwrap();
        assert_eq!(
            distances.to_string(),
            indoc! {"
                'A': 0
                'B': 2
                'C': ∞
            "}
        );
    }

    #[test]
    fn both_variants_agree_on_random_graphs() {
        for seed in 0..8 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let g = Graph::random(&mut rng, 60, 4, 50);

            assert_eq!(
                dijkstra(&g, 0).unwrap(),
                dijkstra_with_heap(&g, 0).unwrap(),
                "diverged on seed {seed}",
            );
        }
    }

    #[test]
    fn solves_graphs_loaded_from_disk() {
        use std::path::PathBuf;

        // Solve two-paths.graph (://data/graphs/two-paths.graph)
        let g = Graph::try_from(PathBuf::from("data/graphs/two-paths.graph").as_path()).unwrap();

        let distances = dijkstra(&g, 'S').unwrap();
        assert_eq!(distances[&'G'], 3);

        // The long way round wins over the direct edge.
        assert_eq!(g.weight(&'S', &'G'), Some(10));
    }

    #[test]
    fn leaves_islands_from_the_fixture_at_infinity() {
        use std::path::PathBuf;

        let g = Graph::try_from(PathBuf::from("data/graphs/islands.graph").as_path()).unwrap();

        let distances = dijkstra(&g, 'A').unwrap();
        assert!(distances.is_reachable(&'C'));
        assert!(!distances.is_reachable(&'X'));
        assert!(!distances.is_reachable(&'Y'));
    }
}
