use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use path_engine::algorithm::ThruNodes;
use path_engine::graph::generators::grid_network;
use path_engine::graph::{Mode, NetworkView};
use path_engine::{LabelCorrecting, SearchBuffers};

fn per_origin(c: &mut Criterion) {
    let mut group = c.benchmark_group("label_correcting");

    for side in [30usize, 80] {
        let generated = grid_network(side, side, side, 7).expect("generated grid");
        let network = &generated.network;
        let mut buffers = SearchBuffers::new(network.node_count());

        for mode in [Mode::All, Mode::Token("auto".to_string())] {
            let engine = LabelCorrecting::new()
                .with_mode(mode.clone())
                .with_thru_nodes(ThruNodes::from_first_thru_node(generated.first_thru_node()));
            group.bench_with_input(BenchmarkId::new(format!("grid_{}", mode), side), &side, |b, _| {
                b.iter(|| engine.run(network, black_box(0), &mut buffers).expect("search"))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, per_origin);
criterion_main!(benches);
