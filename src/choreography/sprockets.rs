use crate::config::SPROCKET_HOLE_UNIT;

pub fn hole_count(viewport_width: f64, panel_count: usize) -> usize {
    let total_width = viewport_width.max(0.0) * panel_count as f64;
    (total_width / SPROCKET_HOLE_UNIT).ceil() as usize
}
