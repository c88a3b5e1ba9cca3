use crate::sim::Simulation;
use super::surface::Surface;

/// Draw one frame: clear, every line up to its current tip, then every
/// live particle on top.
pub fn draw_frame(sim: &Simulation, surface: &mut dyn Surface) {
    surface.clear(sim.width(), sim.height());

    let color = sim.params.line_color;
    for line in sim.lines() {
        line.draw(surface, sim.particle(line.start).position, color);
    }

    for (_, particle) in sim.live_particles() {
        particle.draw(surface);
    }
}
