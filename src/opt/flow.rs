//! A minimum-cost-flow solver.
//!
//! Successive shortest paths over a residual network: supplies are wired
//! to a super source and demands to a super sink, then flow is pushed
//! along Bellman-Ford shortest paths until every unit of supply is
//! routed. Bellman-Ford rather than Dijkstra because retention arcs carry
//! negative costs; the caching network is a forward-in-time DAG, so the
//! residual stays free of negative cycles as long as every augmentation
//! follows a shortest path.
//!
//! The solver is a capability, not the owned logic: any correct
//! minimum-cost-flow algorithm behind this interface satisfies the
//! `McfOpt` contract.

/// Outcome of a [`MinCostFlow::solve`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FlowStatus {
    /// All supply was routed at minimum cost.
    Optimal,
    /// The network cannot carry the requested supply.
    Infeasible,
}

/// One directed arc in the residual network.
///
/// Arcs are stored in pairs: arc `i` and its reverse `i ^ 1`. Pushing
/// flow decrements `cap` on one and increments it on the other.
#[derive(Debug)]
struct FlowArc {
    to: usize,
    cap: i64,
    cost: i64,
}

/// A minimum-cost-flow problem over nodes `0..n`.
#[derive(Debug)]
pub(crate) struct MinCostFlow {
    adjacency: Vec<Vec<usize>>,
    arcs: Vec<FlowArc>,
    supplies: Vec<i64>,
    total_cost: i64,
}

impl MinCostFlow {
    /// Create an empty network over `num_nodes` nodes.
    pub fn new(num_nodes: usize) -> Self {
        MinCostFlow {
            adjacency: vec![Vec::new(); num_nodes],
            arcs: Vec::new(),
            supplies: vec![0; num_nodes],
            total_cost: 0,
        }
    }

    /// Add a directed arc with the given capacity and per-unit cost.
    pub fn add_arc(&mut self, from: usize, to: usize, capacity: i64, cost: i64) {
        let idx = self.arcs.len();
        self.arcs.push(FlowArc {
            to,
            cap: capacity,
            cost,
        });
        self.arcs.push(FlowArc {
            to: from,
            cap: 0,
            cost: -cost,
        });
        self.adjacency[from].push(idx);
        self.adjacency[to].push(idx + 1);
    }

    /// Set a node's supply (positive) or demand (negative).
    pub fn set_supply(&mut self, node: usize, supply: i64) {
        self.supplies[node] = supply;
    }

    /// Route all supply to all demand at minimum total cost.
    pub fn solve(&mut self) -> FlowStatus {
        let n = self.supplies.len();
        let source = n;
        let sink = n + 1;
        self.adjacency.push(Vec::new());
        self.adjacency.push(Vec::new());

        let mut required = 0;
        for node in 0..n {
            let supply = self.supplies[node];
            if supply > 0 {
                required += supply;
                self.add_arc(source, node, supply, 0);
            } else if supply < 0 {
                self.add_arc(node, sink, -supply, 0);
            }
        }

        let mut shipped = 0;
        while shipped < required {
            let Some((path, dist)) = self.shortest_path(source, sink) else {
                return FlowStatus::Infeasible;
            };

            let mut bottleneck = required - shipped;
            for &arc in &path {
                bottleneck = bottleneck.min(self.arcs[arc].cap);
            }
            for &arc in &path {
                self.arcs[arc].cap -= bottleneck;
                self.arcs[arc ^ 1].cap += bottleneck;
            }

            self.total_cost += bottleneck * dist;
            shipped += bottleneck;
        }

        FlowStatus::Optimal
    }

    /// Total cost of the flow routed so far.
    pub fn total_cost(&self) -> i64 {
        self.total_cost
    }

    /// Bellman-Ford over the residual network.
    ///
    /// Returns the arcs of a shortest `source → sink` path and its cost,
    /// or `None` when the sink is unreachable.
    fn shortest_path(&self, source: usize, sink: usize) -> Option<(Vec<usize>, i64)> {
        let n = self.adjacency.len();
        let mut dist = vec![i64::MAX; n];
        let mut parent: Vec<Option<usize>> = vec![None; n];
        dist[source] = 0;

        for _ in 0..n {
            let mut changed = false;
            for node in 0..n {
                if dist[node] == i64::MAX {
                    continue;
                }
                for &arc_idx in &self.adjacency[node] {
                    let arc = &self.arcs[arc_idx];
                    if arc.cap > 0 && dist[node] + arc.cost < dist[arc.to] {
                        dist[arc.to] = dist[node] + arc.cost;
                        parent[arc.to] = Some(arc_idx);
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }

        if dist[sink] == i64::MAX {
            return None;
        }

        let mut path = Vec::new();
        let mut node = sink;
        while node != source {
            let arc_idx = parent[node]?;
            path.push(arc_idx);
            // The paired reverse arc points back at this arc's tail.
            node = self.arcs[arc_idx ^ 1].to;
        }
        Some((path, dist[sink]))
    }
}
