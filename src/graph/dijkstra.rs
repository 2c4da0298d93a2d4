use super::{Element, IndexedGraph};
use crate::path::Path;

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Single-source shortest path from the graph's start slot to its goal slot.
///
/// Returns `None` when the goal is unreachable over the connection edges; the caller then
/// falls back to grid synthesis. Ties between equally cheap frontier entries pop in an
/// unspecified order.
pub(crate) fn dijkstra_search(graph: &IndexedGraph) -> Option<Path> {
    let start = graph.start();
    let goal = graph.goal();

    // visited[i] = (best cost so far, predecessor)
    let mut visited: Vec<Option<(f64, usize)>> = vec![None; graph.len()];
    let mut next = BinaryHeap::new();
    next.push(Element(start, 0.0));
    visited[start] = Some((0.0, start));

    while let Some(Element(current, current_cost)) = next.pop() {
        if current == goal {
            break;
        }
        let (best_cost, _) = visited[current]?; // pushed entries are always visited
        match current_cost.total_cmp(&best_cost) {
            Ordering::Greater => continue, // stale entry, a cheaper one was processed already
            Ordering::Equal => {}
            Ordering::Less => panic!("Binary Heap failed"),
        }

        for &(other, weight) in graph.neighbors(current) {
            let other_cost = current_cost + weight;

            let mut needs_visit = true;
            if let Some((prev_cost, prev_id)) = visited[other].as_mut() {
                if *prev_cost > other_cost {
                    *prev_cost = other_cost;
                    *prev_id = current;
                } else {
                    needs_visit = false;
                }
            } else {
                visited[other] = Some((other_cost, current));
            }

            if needs_visit {
                next.push(Element(other, other_cost));
            }
        }
    }

    let (goal_cost, _) = visited[goal]?;

    let steps = {
        let mut steps = vec![];
        let mut current = goal;

        while current != start {
            steps.push(graph[current].clone());
            let (_, prev) = visited[current]?;
            current = prev;
        }
        steps.push(graph[start].clone());
        steps.reverse();
        steps
    };

    Some(Path::new(steps, goal_cost))
}
