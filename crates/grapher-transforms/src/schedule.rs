//! Execution order for transform definitions.
//!
//! A definition depends on every other definition whose slug it reads. Definitions are scheduled
//! in topological order, breaking ties by declaration order, so the result is deterministic for a
//! given set of definitions. A definition that reads its own slug reads the column already in the
//! store; that is not a dependency.

use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Schedule {
    /// Indices into the scheduled nodes, in execution order.
    pub order: Vec<usize>,
    /// Nodes that sit on (or depend on) a cycle, with the slugs of the cycle they reach.
    pub cycles: Vec<(usize, Vec<String>)>,
}

/// `nodes[i]` is `(slug, input slugs)` for the i-th definition in declaration order.
pub(crate) fn schedule(nodes: &[(&str, Vec<&str>)]) -> Schedule {
    let mut producers: HashMap<&str, Vec<usize>> = HashMap::new();
    for (idx, (slug, _)) in nodes.iter().enumerate() {
        producers.entry(*slug).or_default().push(idx);
    }

    let mut precedents: Vec<Vec<usize>> = Vec::with_capacity(nodes.len());
    for (idx, (_, inputs)) in nodes.iter().enumerate() {
        let mut deps: Vec<usize> = inputs
            .iter()
            .filter_map(|input| producers.get(input))
            .flatten()
            .copied()
            .filter(|&dep| dep != idx)
            .collect();
        deps.sort_unstable();
        deps.dedup();
        precedents.push(deps);
    }

    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
    for (idx, deps) in precedents.iter().enumerate() {
        for &dep in deps {
            dependents[dep].push(idx);
        }
    }

    let mut in_degree: Vec<usize> = precedents.iter().map(Vec::len).collect();
    let mut ready: BTreeSet<usize> = in_degree
        .iter()
        .enumerate()
        .filter_map(|(idx, &deg)| (deg == 0).then_some(idx))
        .collect();

    let mut order = Vec::with_capacity(nodes.len());
    while let Some(idx) = ready.pop_first() {
        order.push(idx);
        for &dep in &dependents[idx] {
            in_degree[dep] = in_degree[dep].saturating_sub(1);
            if in_degree[dep] == 0 {
                ready.insert(dep);
            }
        }
    }

    let cycles = (0..nodes.len())
        .filter(|&idx| in_degree[idx] > 0)
        .map(|idx| (idx, reachable_cycle(idx, &precedents, &in_degree, nodes)))
        .collect();

    Schedule { order, cycles }
}

// Every unscheduled node has at least one unscheduled precedent, so following them from `start`
// must eventually revisit a node.
fn reachable_cycle(
    start: usize,
    precedents: &[Vec<usize>],
    in_degree: &[usize],
    nodes: &[(&str, Vec<&str>)],
) -> Vec<String> {
    let mut path: Vec<usize> = Vec::new();
    let mut position: HashMap<usize, usize> = HashMap::new();
    let mut current = start;

    loop {
        if let Some(&pos) = position.get(&current) {
            return path[pos..]
                .iter()
                .chain(std::iter::once(&current))
                .map(|&idx| nodes[idx].0.to_owned())
                .collect();
        }
        position.insert(current, path.len());
        path.push(current);

        match precedents[current]
            .iter()
            .copied()
            .find(|&dep| in_degree[dep] > 0)
        {
            Some(next) => current = next,
            None => return path.iter().map(|&idx| nodes[idx].0.to_owned()).collect(),
        }
    }
}
