//! Optimality locks: found costs equal the true minimum.
//!
//! Covers the admissible-heuristic case (Manhattan on grids) and the
//! zero-heuristic uniform-cost mode, and checks the two agree on the same
//! underlying graph.

use lock_tests::fixtures::{reference_grid, reference_search};
use wayfarer_search::{run_search, shortest_path};
use wayfarer_worlds::grid::UniformGrid;
use wayfarer_worlds::network::Network;
use wayfarer_worlds::risk::RiskGrid;

#[test]
fn uniform_grid_minimum_steps() {
    let grid = UniformGrid::new(4, 4);
    let result = shortest_path(&grid.pos(0, 0), &grid.pos(3, 3)).expect("open grid");
    assert_eq!(result.cost, 6);

    // Every returned step is a unit move between adjacent open cells.
    for pair in result.path.windows(2) {
        let dx = pair[0].x.abs_diff(pair[1].x);
        let dy = pair[0].y.abs_diff(pair[1].y);
        assert_eq!(dx + dy, 1, "non-adjacent cells in path");
    }
}

#[test]
fn reference_grid_minimum_total_risk() {
    let grid = reference_grid();
    let report = reference_search(&grid);
    let result = report.result.expect("reference grid is connected");
    assert_eq!(result.cost, 40);
}

/// Rebuild a risk grid as an explicit network (one node per cell, edge
/// weight = entry risk of the destination cell).
fn network_of(grid: &RiskGrid) -> Network {
    let (w, h) = (grid.width(), grid.height());
    let mut net = Network::new();
    for _ in 0..w * h {
        net.add_node();
    }
    let id = |x: u32, y: u32| (y * w + x) as usize;
    for y in 0..h {
        for x in 0..w {
            if x + 1 < w {
                net.add_edge(id(x, y), id(x + 1, y), grid.risk_at(x + 1, y));
                net.add_edge(id(x + 1, y), id(x, y), grid.risk_at(x, y));
            }
            if y + 1 < h {
                net.add_edge(id(x, y), id(x, y + 1), grid.risk_at(x, y + 1));
                net.add_edge(id(x, y + 1), id(x, y), grid.risk_at(x, y));
            }
        }
    }
    net
}

#[test]
fn zero_heuristic_mode_agrees_with_manhattan_heuristic() {
    let grid = reference_grid();
    let net = network_of(&grid);

    let astar = reference_search(&grid);
    let goal = (grid.width() * grid.height() - 1) as usize;
    let dijkstra = run_search(&net.node(0), &net.node(goal));

    let astar_cost = astar.result.as_ref().expect("connected").cost;
    let dijkstra_cost = dijkstra.result.as_ref().expect("connected").cost;
    assert_eq!(astar_cost, dijkstra_cost, "both modes find the minimum");

    // A consistent heuristic never expands more nodes than uniform-cost
    // search on the same graph.
    assert!(
        astar.stats.expansions <= dijkstra.stats.expansions,
        "heuristic expanded {} nodes, uniform-cost {}",
        astar.stats.expansions,
        dijkstra.stats.expansions
    );
}

#[test]
fn weighted_network_prefers_long_cheap_route() {
    // Direct edge costs 100; the four-hop route costs 4.
    let mut net = Network::new();
    for _ in 0..5 {
        net.add_node();
    }
    net.add_edge(0, 4, 100);
    for i in 0..4 {
        net.add_edge(i, i + 1, 1);
    }

    let result = shortest_path(&net.node(0), &net.node(4)).expect("connected");
    assert_eq!(result.cost, 4);
    assert_eq!(
        result.path.iter().map(|n| n.id).collect::<Vec<_>>(),
        vec![0, 1, 2, 3, 4]
    );
}
