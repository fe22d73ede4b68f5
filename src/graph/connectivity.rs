use std::collections::VecDeque;

use super::*;

pub trait Connectivity: AdjacencyList {
    /// Returns the connected components of the graph; each component lists its nodes in
    /// BFS order and components appear in the order of their smallest node.
    fn connected_components(&self) -> Vec<Vec<Node>>;

    /// Returns the subgraph induced by the largest connected component (ties are broken
    /// towards the component containing the smallest node) together with the mapper
    /// translating its ids back into ids of `self`.
    fn largest_connected_component(&self) -> (CsrGraph, NodeMapper);
}

impl<G> Connectivity for G
where
    G: AdjacencyList,
{
    fn connected_components(&self) -> Vec<Vec<Node>> {
        let mut visited = vec![false; self.len()];
        let mut queue = VecDeque::new();
        let mut components = Vec::new();

        for start in self.vertices() {
            if visited[start as usize] {
                continue;
            }

            let mut component = Vec::new();
            visited[start as usize] = true;
            queue.push_back(start);

            while let Some(u) = queue.pop_front() {
                component.push(u);
                for &v in self.neighbors_of(u) {
                    if !visited[v as usize] {
                        visited[v as usize] = true;
                        queue.push_back(v);
                    }
                }
            }

            components.push(component);
        }

        components
    }

    fn largest_connected_component(&self) -> (CsrGraph, NodeMapper) {
        let components = self.connected_components();
        let Some(largest) = components
            .iter()
            .rev()
            .max_by_key(|c| c.len())
            .map(|c| {
                let mut nodes = c.clone();
                nodes.sort_unstable();
                nodes
            })
        else {
            return (CsrGraph::new(0), NodeMapper::default());
        };

        self.induced_subgraph(&largest)
    }
}
