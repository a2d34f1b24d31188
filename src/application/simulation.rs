use rand::Rng;
use tracing::debug;

use crate::domain::{
    Hexagon, Layout, NeighborTable, Neighborhood, Rule, adjacency, default_rule,
};

/// Layer count used when nothing else is configured
pub const DEFAULT_LAYERS: u32 = 5;

/// GridSimulation orchestrates the board.
/// It owns the hexagons and everything needed to rebuild them; the frame loop
/// drives it one operation at a time.
pub struct GridSimulation {
    size: (u32, u32),
    layers: u32,
    layout: Layout,
    neighborhood: Neighborhood,
    hexagons: Vec<Hexagon>,
    neighbors: NeighborTable,
    rule: Box<dyn Rule>,
    pub is_running: bool,
    pub generation: u64,
}

impl GridSimulation {
    /// Create a paused spiral grid filling a `width × height` window
    pub fn new(width: u32, height: u32, layers: u32) -> Self {
        let mut sim = Self {
            size: (width, height),
            layers: layers.max(1),
            layout: Layout::default(),
            neighborhood: Neighborhood::default(),
            hexagons: Vec::new(),
            neighbors: NeighborTable::default(),
            rule: default_rule(),
            is_running: false,
            generation: 0,
        };
        sim.regenerate();
        sim
    }

    /// Use a different tiling (builder pattern)
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self.regenerate();
        self
    }

    /// Use a different neighbor detection (builder pattern)
    pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.set_neighborhood(neighborhood);
        self
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    pub fn hexagons(&self) -> &[Hexagon] {
        &self.hexagons
    }

    pub fn layers(&self) -> u32 {
        self.layers
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn neighborhood(&self) -> Neighborhood {
        self.neighborhood
    }

    pub fn size(&self) -> (u32, u32) {
        self.size
    }

    pub fn rule(&self) -> &dyn Rule {
        self.rule.as_ref()
    }

    pub fn alive_count(&self) -> usize {
        self.hexagons.iter().filter(|h| h.is_alive()).count()
    }

    /// Rebuild hexagons and adjacency from scratch; all cells start dead
    fn regenerate(&mut self) {
        let (width, height) = self.size;
        self.hexagons = self.layout.generate(width, height, self.layers);
        self.neighbors = NeighborTable::build(&self.hexagons, self.neighborhood);
        self.generation = 0;

        debug!(
            width,
            height,
            layers = self.layers,
            layout = self.layout.name(),
            hexagons = self.hexagons.len(),
            "regenerated grid"
        );
    }

    /// Flip every hexagon whose inscribed circle holds `position`.
    /// Returns how many hexagons were toggled.
    pub fn toggle_at(&mut self, position: (f64, f64)) -> usize {
        let mut toggled = 0;
        for hex in self.hexagons.iter_mut().filter(|h| h.contains(position)) {
            hex.toggle();
            toggled += 1;
        }
        toggled
    }

    /// Change the layer count (at least 1) and regenerate
    pub fn set_layers(&mut self, layers: u32) {
        self.layers = layers.max(1);
        self.regenerate();
    }

    pub fn increase_layers(&mut self) {
        self.set_layers(self.layers.saturating_add(1));
    }

    pub fn decrease_layers(&mut self) {
        self.set_layers(self.layers.saturating_sub(1));
    }

    /// Switch to the other tiling and regenerate
    pub fn cycle_layout(&mut self) {
        self.layout = self.layout.next();
        self.regenerate();
    }

    /// Switch neighbor detection; geometry and cell states are kept
    pub fn cycle_neighborhood(&mut self) {
        self.set_neighborhood(self.neighborhood.next());
    }

    fn set_neighborhood(&mut self, neighborhood: Neighborhood) {
        self.neighborhood = neighborhood;
        self.neighbors = NeighborTable::build(&self.hexagons, neighborhood);
        debug!(neighborhood = neighborhood.name(), "rebuilt neighbor table");
    }

    /// Follow the window size; a changed size regenerates the grid
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.size != (width, height) {
            self.size = (width, height);
            self.regenerate();
        }
    }

    /// Apply the rule once, in place and in grid order.
    /// Returns the number of cells that changed.
    pub fn step(&mut self) -> usize {
        let changed = adjacency::step(&mut self.hexagons, &self.neighbors, self.rule.as_ref());
        self.generation += 1;
        changed
    }

    /// Advance one frame: steps only while running
    pub fn tick(&mut self) -> usize {
        if self.is_running { self.step() } else { 0 }
    }

    /// Toggle play/pause state
    pub fn toggle_running(&mut self) {
        self.is_running = !self.is_running;
    }

    /// Kill every cell, keeping the geometry
    pub fn reset(&mut self) {
        self.hexagons.iter_mut().for_each(|h| h.set_alive(false));
        self.generation = 0;
    }

    /// Bring each cell to life with probability `density`
    pub fn randomize(&mut self, rng: &mut impl Rng, density: f64) {
        let density = density.clamp(0.0, 1.0);
        self.hexagons
            .iter_mut()
            .for_each(|h| h.set_alive(rng.random_bool(density)));
        self.generation = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layout::hexagon_count;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn alive_flags(sim: &GridSimulation) -> Vec<bool> {
        sim.hexagons().iter().map(Hexagon::is_alive).collect()
    }

    #[test]
    fn test_single_layer_scenario() {
        let sim = GridSimulation::new(800, 800, 1);
        assert_eq!(sim.hexagons().len(), 1);
        assert_eq!(sim.hexagons()[0].center(), (400.0, 400.0));
    }

    #[test]
    fn test_three_layer_spiral_scenario() {
        let sim = GridSimulation::new(800, 800, 3);
        assert_eq!(sim.hexagons().len(), 19);
    }

    #[test]
    fn test_toggle_at_center() {
        let mut sim = GridSimulation::new(800, 800, 3);
        assert_eq!(sim.toggle_at((400.0, 400.0)), 1);
        assert!(sim.hexagons()[0].is_alive());
        assert_eq!(sim.alive_count(), 1);

        sim.toggle_at((400.0, 400.0));
        assert_eq!(sim.alive_count(), 0);
    }

    #[test]
    fn test_toggle_outside_is_noop() {
        let mut sim = GridSimulation::new(800, 800, 3);
        assert_eq!(sim.toggle_at((2.0, 2.0)), 0);
        assert_eq!(sim.alive_count(), 0);
    }

    #[test]
    fn test_lone_seed_scenario() {
        let mut sim = GridSimulation::new(800, 800, 3);
        sim.toggle_at((400.0, 400.0));
        sim.step();
        assert!(alive_flags(&sim)[0]);
        assert_eq!(sim.alive_count(), 1);
        assert_eq!(sim.generation, 1);
    }

    #[test]
    fn test_three_seeds_fill_common_neighbor() {
        let mut sim = GridSimulation::new(800, 800, 3);
        // ring 1 of the spiral: indices 1..=6, every other one surrounds the center
        let centers: Vec<_> = [1, 3, 5].iter().map(|&i| sim.hexagons()[i].center()).collect();
        for center in centers {
            sim.toggle_at(center);
        }
        assert!(!sim.hexagons()[0].is_alive());

        sim.step();

        assert!(sim.hexagons()[0].is_alive());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut sim = GridSimulation::new(800, 800, 4);
        sim.randomize(&mut StdRng::seed_from_u64(1), 0.5);
        let geometry: Vec<_> = sim.hexagons().iter().map(|h| *h.points()).collect();

        sim.reset();
        let once = alive_flags(&sim);
        sim.reset();

        assert_eq!(alive_flags(&sim), once);
        assert!(once.iter().all(|alive| !alive));
        let after: Vec<_> = sim.hexagons().iter().map(|h| *h.points()).collect();
        assert_eq!(geometry, after);
    }

    #[test]
    fn test_step_never_kills() {
        let mut sim = GridSimulation::new(800, 800, 6);
        sim.randomize(&mut StdRng::seed_from_u64(99), 0.3);
        let before = alive_flags(&sim);

        sim.step();

        for (was, now) in before.iter().zip(alive_flags(&sim)) {
            assert!(!was || now);
        }
    }

    #[test]
    fn test_set_layers_clamps_and_regenerates() {
        let mut sim = GridSimulation::new(800, 800, 3);
        sim.toggle_at((400.0, 400.0));

        sim.set_layers(0);
        assert_eq!(sim.layers(), 1);
        assert_eq!(sim.hexagons().len(), 1);
        assert_eq!(sim.alive_count(), 0);

        sim.decrease_layers();
        assert_eq!(sim.layers(), 1);

        sim.increase_layers();
        sim.increase_layers();
        assert_eq!(sim.layers(), 3);
        assert_eq!(sim.hexagons().len(), hexagon_count(3));
    }

    #[test]
    fn test_tick_only_steps_when_running() {
        let mut sim = GridSimulation::new(800, 800, 3);
        sim.tick();
        assert_eq!(sim.generation, 0);

        sim.toggle_running();
        sim.tick();
        assert_eq!(sim.generation, 1);
    }

    #[test]
    fn test_cycle_layout_regenerates() {
        let mut sim = GridSimulation::new(800, 800, 4);
        let spiral = sim.hexagons().to_vec();
        sim.cycle_layout();
        assert_eq!(sim.layout(), Layout::Rectangle);
        assert_eq!(sim.hexagons().len(), spiral.len());
        assert_ne!(sim.hexagons(), spiral.as_slice());
    }

    #[test]
    fn test_cycle_neighborhood_keeps_cells() {
        let mut sim = GridSimulation::new(800, 800, 4);
        sim.toggle_at((400.0, 400.0));
        sim.cycle_neighborhood();
        assert_eq!(sim.neighborhood(), Neighborhood::Axial);
        assert_eq!(sim.alive_count(), 1);
    }

    #[test]
    fn test_resize_regenerates_on_change_only() {
        let mut sim = GridSimulation::new(800, 800, 2);
        sim.toggle_at((400.0, 400.0));

        sim.resize(800, 800);
        assert_eq!(sim.alive_count(), 1);

        sim.resize(1000, 600);
        assert_eq!(sim.size(), (1000, 600));
        assert_eq!(sim.alive_count(), 0);
        let (x, y) = sim.hexagons()[0].center();
        assert!((x - 500.0).abs() < 1.0 && (y - 300.0).abs() < 1.0);
    }

    #[test]
    fn test_degenerate_window_is_empty_and_safe() {
        let mut sim = GridSimulation::new(0, 0, 3);
        assert!(sim.hexagons().is_empty());
        assert_eq!(sim.toggle_at((0.0, 0.0)), 0);
        assert_eq!(sim.step(), 0);
        sim.reset();
    }

    #[test]
    fn test_births_cascade_in_spiral_order() {
        let mut sim = GridSimulation::new(800, 800, 2);
        // alternating ring cells around the center
        let centers: Vec<_> = [2, 4, 6].iter().map(|&i| sim.hexagons()[i].center()).collect();
        for center in centers {
            sim.toggle_at(center);
        }

        let changed = sim.step();

        // the center is born first and completes every remaining ring cell
        assert_eq!(changed, 4);
        assert_eq!(sim.alive_count(), 7);
    }

    #[test]
    fn test_huge_layer_count_is_empty_not_a_panic() {
        let mut sim = GridSimulation::new(800, 800, 1).with_layout(Layout::Rectangle);
        sim.set_layers(u32::MAX);
        assert_eq!(sim.layers(), u32::MAX);
        assert!(sim.hexagons().is_empty());
        assert_eq!(sim.step(), 0);

        sim.increase_layers();
        assert_eq!(sim.layers(), u32::MAX);

        sim.cycle_layout();
        assert!(sim.hexagons().is_empty());

        sim.set_layers(2);
        assert_eq!(sim.hexagons().len(), hexagon_count(2));
    }
}
