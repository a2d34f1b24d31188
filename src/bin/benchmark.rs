//! Performance benchmark comparing neighbor detection strategies and step cost

use std::time::Instant;
use hex_life::domain::{GrowthRule, Hexagon, Layout, NeighborTable, Neighborhood, adjacency};
use rand::{Rng, SeedableRng, rngs::StdRng};

const WINDOW: u32 = 4000;

fn seeded_grid(layers: u32) -> Vec<Hexagon> {
    let mut rng = StdRng::seed_from_u64(0xBEE);
    let mut hexagons = Layout::Spiral.generate(WINDOW, WINDOW, layers);
    for hex in &mut hexagons {
        hex.set_alive(rng.random_bool(0.2));
    }
    hexagons
}

fn benchmark_table(hexagons: &[Hexagon], neighborhood: Neighborhood) -> (NeighborTable, f64) {
    let start = Instant::now();
    let table = NeighborTable::build(hexagons, neighborhood);
    (table, start.elapsed().as_secs_f64() * 1000.0)
}

fn benchmark_step(hexagons: &[Hexagon], table: &NeighborTable, iterations: u32) -> f64 {
    let mut grid = hexagons.to_vec();

    let start = Instant::now();
    for _ in 0..iterations {
        adjacency::step(&mut grid, table, &GrowthRule);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Hex Growth Performance Benchmark ===\n");

    let layer_counts = [5, 10, 20, 40, 80, 160];
    let iterations = 20;

    println!("{:>8} {:>10} {:>14} {:>14} {:>12} {:>12}",
        "Layers", "Cells", "Radius build", "Axial build", "Step/Radius", "Step/Axial");
    println!("{:-<76}", "");

    for layers in layer_counts {
        let hexagons = seeded_grid(layers);

        // Radius adjacency is quadratic; skip it once it dominates the run
        let (radius_str, radius_step_str) = if hexagons.len() <= 20_000 {
            let (table, ms) = benchmark_table(&hexagons, Neighborhood::Radius);
            let step_ms = benchmark_step(&hexagons, &table, iterations);
            (format!("{:>12.2}ms", ms), format!("{:>10.3}ms", step_ms))
        } else {
            (format!("{:>14}", "-"), format!("{:>12}", "-"))
        };

        let (table, axial_ms) = benchmark_table(&hexagons, Neighborhood::Axial);
        let axial_step_ms = benchmark_step(&hexagons, &table, iterations);

        println!(
            "{:>8} {:>10} {} {:>12.2}ms {} {:>10.3}ms",
            layers,
            hexagons.len(),
            radius_str,
            axial_ms,
            radius_step_str,
            axial_step_ms
        );
    }
}
