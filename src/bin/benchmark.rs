use std::time::{Duration, Instant};
use path_engine::algorithm::{SearchSettings, ShortestPathAlgorithm, ThruNodes};
use path_engine::graph::generators::{grid_network, GeneratedNetwork};
use path_engine::graph::{Mode, NetworkView};
use path_engine::{Dijkstra, LabelCorrecting, SearchBuffers};

// Time the label-correcting engine over every origin with one reused buffer set
fn benchmark_label_correcting(
    engine: &LabelCorrecting<f64>,
    generated: &GeneratedNetwork,
    origins: &[usize],
) -> path_engine::Result<Duration> {
    let network = &generated.network;
    let mut buffers = SearchBuffers::new(network.node_count());
    let mut scans = 0;

    let start = Instant::now();
    for &origin in origins {
        scans += engine.run(network, origin, &mut buffers)?.scans;
    }
    let duration = start.elapsed();

    println!("  - LabelCorrecting: {} origins, {} scans in {:?}", origins.len(), scans, duration);
    Ok(duration)
}

fn benchmark_dijkstra(
    dijkstra: &Dijkstra<f64>,
    generated: &GeneratedNetwork,
    origins: &[usize],
) -> path_engine::Result<Duration> {
    let start = Instant::now();
    let mut reachable = 0;
    for &origin in origins {
        let result = dijkstra.compute_shortest_paths(&generated.network, origin)?;
        reachable += result.distances.iter().filter(|d| d.is_some()).count();
    }
    let duration = start.elapsed();

    println!(
        "  - Dijkstra: {} origins, {} reachable labels in {:?}",
        origins.len(),
        reachable,
        duration
    );
    Ok(duration)
}

fn main() -> path_engine::Result<()> {
    env_logger::init();

    // Grid side lengths; zones grow with the grid
    let grid_sizes = vec![20, 50, 100, 200];
    let mode = std::env::args().nth(1).map_or(Ok(Mode::All), |m| m.parse::<Mode>())?;

    println!("=====================================================");
    println!("Benchmark: LabelCorrecting vs Dijkstra (mode {})", mode);
    println!("=====================================================");

    let mut results = Vec::new();

    for &side in &grid_sizes {
        let zones = side * side / 20;
        let generated = grid_network(side, side, zones, 42)?;
        println!(
            "\nGrid {}x{} with {} zones: {} nodes, {} links",
            side,
            side,
            zones,
            generated.network.node_count(),
            generated.network.link_count()
        );

        let settings = SearchSettings {
            mode: mode.clone(),
            thru_nodes: ThruNodes::from_first_thru_node(generated.first_thru_node()),
            ..SearchSettings::default()
        };
        let engine = LabelCorrecting::with_settings(settings.clone());
        let dijkstra = Dijkstra::with_settings(settings);

        let origins: Vec<usize> = (0..zones).collect();
        let lc_time = benchmark_label_correcting(&engine, &generated, &origins)?;
        let dijkstra_time = benchmark_dijkstra(&dijkstra, &generated, &origins)?;

        let speedup = dijkstra_time.as_secs_f64() / lc_time.as_secs_f64().max(f64::EPSILON);
        println!("Speedup - LabelCorrecting vs Dijkstra: {:.2}x", speedup);
        results.push((generated.network.node_count(), zones, lc_time, dijkstra_time, speedup));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<8} | {:<15} | {:<15} | {:<10}",
        "Nodes", "Zones", "LC (ms)", "Dijkstra (ms)", "SpeedUp"
    );
    println!("-----------------------------------------------------");

    for (nodes, zones, lc_time, dijkstra_time, speedup) in &results {
        println!(
            "{:<10} | {:<8} | {:<15} | {:<15} | {:<10.2}",
            nodes,
            zones,
            lc_time.as_millis(),
            dijkstra_time.as_millis(),
            speedup
        );
    }

    Ok(())
}
