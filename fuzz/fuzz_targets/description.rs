#![no_main]

use graphkit::description::GraphDescription;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(description) = GraphDescription::from_json_str(input) else {
        return;
    };
    let Ok(graph) = description.build() else {
        return;
    };

    let _ = graph.has_cycle();
    let _ = graph.connected_components();
    let _ = graph.topological_sort_kahn();
    let _ = graph.kruskal();
    let _ = graph.floyd_warshall();
    if let Some(first) = graph.vertices().next().cloned() {
        let _ = graph.bfs(&first);
        let _ = graph.dfs(&first);
        let _ = graph.bellman_ford(&first);
        let _ = graph.dijkstra(&first);
        let _ = graph.prim(&first);
    }
});
