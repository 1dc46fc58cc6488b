//! SPDX-FileCopyrightText: © 2025 Cory Parent <goedelsoup+orasi@goedelsoup.io>
//! SPDX-License-Identifier: Apache-2.0
//!

//! Topological ordering for the telemetry pipeline graph
//!
//! Produces the forward topological order used by the lifecycle driver
//! (sources first), or a cycle error listing the offending components.
//! Listings are capped: when the cyclic components hold more than ten
//! nodes in total, only the counts are reported.

use std::collections::HashMap;

use petgraph::algo::{tarjan_scc, toposort};
use petgraph::graph::{DiGraph, NodeIndex};

use crate::error::{GraphError, GraphResult};

use super::node::{Node, NodeId};

/// Largest cyclic-component listing spelled out node by node
const MAX_LISTED_NODES: usize = 10;

/// Topologically sort the component graph
///
/// The returned order places every node before its successors. On a cycle,
/// the error message carries the `topo: no topological ordering` prefix
/// with either the component listing or the node-count summary.
pub(crate) fn sort(
    nodes: &HashMap<NodeId, Node>,
    edges: &[(NodeId, NodeId)],
) -> GraphResult<Vec<NodeId>> {
    let mut graph: DiGraph<NodeId, ()> = DiGraph::with_capacity(nodes.len(), edges.len());
    let mut indices: HashMap<NodeId, NodeIndex> = HashMap::with_capacity(nodes.len());

    let mut ids: Vec<NodeId> = nodes.keys().copied().collect();
    ids.sort();
    for id in ids {
        indices.insert(id, graph.add_node(id));
    }
    for (from, to) in edges {
        let from = *indices
            .get(from)
            .ok_or_else(|| GraphError::internal(format!("edge references unknown node {from}")))?;
        let to = *indices
            .get(to)
            .ok_or_else(|| GraphError::internal(format!("edge references unknown node {to}")))?;
        graph.add_edge(from, to, ());
    }

    match toposort(&graph, None) {
        Ok(order) => Ok(order.into_iter().map(|ix| graph[ix]).collect()),
        Err(_) => Err(cycle_error(nodes, &graph)),
    }
}

fn cycle_error(nodes: &HashMap<NodeId, Node>, graph: &DiGraph<NodeId, ()>) -> GraphError {
    let cyclic: Vec<Vec<NodeIndex>> = tarjan_scc(graph)
        .into_iter()
        .filter(|scc| scc.len() > 1 || graph.find_edge(scc[0], scc[0]).is_some())
        .collect();

    let total: usize = cyclic.iter().map(|scc| scc.len()).sum();
    if total > MAX_LISTED_NODES {
        return GraphError::cycle(format!(
            "{total} nodes in {} cyclic components",
            cyclic.len()
        ));
    }

    let listings: Vec<String> = cyclic
        .iter()
        .map(|scc| {
            let names: Vec<String> = scc
                .iter()
                .filter_map(|ix| nodes.get(&graph[*ix]))
                .map(Node::describe)
                .collect();
            format!("[{}]", names.join(", "))
        })
        .collect();
    GraphError::cycle(format!("cyclic components: {}", listings.join(" ")))
}
