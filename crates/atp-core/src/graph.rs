//! Read-only graph views derived from a validated plan.
//!
//! A [`Plan`] already is the graph: node identifiers are the keys of
//! `nodes` and each node's `dependencies` are its inbound edges. This module
//! derives the shapes a presentation layer wants (edge list, reverse
//! adjacency, status counts, an ordering) without mutating the plan.
//!
//! Cycles are tolerated. [`PlanGraph::topological_order`] reports them by
//! returning `None`; they are never a validation issue.

use std::collections::VecDeque;

use indexmap::IndexMap;
use serde::Serialize;

use crate::models::{NodeStatus, Plan};

/// A directed edge from a prerequisite node to the node depending on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge<'a> {
    /// `"<source>-><target>"`
    pub id: String,
    /// The dependency
    pub source: &'a str,
    /// The dependent node
    pub target: &'a str,
    /// The dependent node is currently claimed by a worker
    pub active: bool,
}

/// Adjacency view over a validated plan.
#[derive(Debug, Clone)]
pub struct PlanGraph<'a> {
    plan: &'a Plan,
    dependents: IndexMap<&'a str, Vec<&'a str>>,
}

impl<'a> PlanGraph<'a> {
    pub fn new(plan: &'a Plan) -> Self {
        let mut dependents: IndexMap<&str, Vec<&str>> = plan
            .nodes
            .keys()
            .map(|id| (id.as_str(), Vec::new()))
            .collect();

        for (id, node) in &plan.nodes {
            for dep in &node.dependencies {
                if let Some(targets) = dependents.get_mut(dep.as_str()) {
                    targets.push(id.as_str());
                }
            }
        }

        Self { plan, dependents }
    }

    pub fn plan(&self) -> &'a Plan {
        self.plan
    }

    /// Every dependency edge, in document order of the dependent node and
    /// then of its `dependencies` array.
    pub fn edges(&self) -> Vec<Edge<'a>> {
        self.plan
            .nodes
            .iter()
            .flat_map(|(id, node)| {
                node.dependencies.iter().map(move |dep| Edge {
                    id: format!("{dep}->{id}"),
                    source: dep.as_str(),
                    target: id.as_str(),
                    active: node.status == NodeStatus::Claimed,
                })
            })
            .collect()
    }

    /// Identifiers the given node depends on.
    pub fn dependencies_of(&self, id: &str) -> &'a [String] {
        self.plan
            .node(id)
            .map(|node| node.dependencies.as_slice())
            .unwrap_or_default()
    }

    /// Identifiers of the nodes that depend on the given node.
    pub fn dependents_of(&self, id: &str) -> &[&'a str] {
        self.dependents
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Nodes without dependencies.
    pub fn roots(&self) -> Vec<&'a str> {
        self.plan
            .nodes
            .iter()
            .filter(|(_, node)| node.dependencies.is_empty())
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Number of nodes in each status, in canonical status order. Statuses
    /// with no nodes are included with a zero count.
    pub fn status_counts(&self) -> Vec<(NodeStatus, usize)> {
        NodeStatus::ALL
            .iter()
            .map(|&status| {
                let count = self
                    .plan
                    .nodes
                    .values()
                    .filter(|node| node.status == status)
                    .count();
                (status, count)
            })
            .collect()
    }

    /// Dependencies-first ordering of every node (Kahn's algorithm, ties
    /// broken by document order). `None` if the dependency relation has a
    /// cycle.
    pub fn topological_order(&self) -> Option<Vec<&'a str>> {
        let mut in_degree: IndexMap<&str, usize> = self
            .plan
            .nodes
            .iter()
            // One unit per `dependencies` entry, matching `dependents_of`.
            .map(|(id, node)| (id.as_str(), node.dependencies.len()))
            .collect();

        let mut queue: VecDeque<&str> = in_degree
            .iter()
            .filter(|(_, &degree)| degree == 0)
            .map(|(&id, _)| id)
            .collect();

        let mut order = Vec::with_capacity(self.plan.len());
        while let Some(id) = queue.pop_front() {
            order.push(id);
            for &dependent in self.dependents_of(id) {
                if let Some(degree) = in_degree.get_mut(dependent) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(dependent);
                    }
                }
            }
        }

        (order.len() == self.plan.len()).then_some(order)
    }
}
