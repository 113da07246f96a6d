//! Decorative motion: background blobs, cursor trail, click bursts, and
//! entrance-stagger timing

use crate::theme::{self, Palette};
use eframe::egui;
use std::time::Instant;

/// Per-frame lerp factor pulling the trail toward the pointer.
const TRAIL_LERP: f32 = 0.1;
const TRAIL_RADIUS: f32 = 9.0;

/// Seconds a click burst stays alive.
const BURST_LIFETIME: f32 = 0.45;

/// Entrance stagger: first block starts after this delay, each following
/// block a step later, every block fading in over one second.
const STAGGER_DELAY: f32 = 0.2;
const STAGGER_STEP: f32 = 0.2;
const STAGGER_RISE: f32 = 30.0;

struct Burst {
    center: egui::Pos2,
    started: Instant,
}

/// Mutable state behind the decorative layers. All of it is cosmetic;
/// nothing here is persisted or observable outside the painter.
#[derive(Default)]
pub struct Effects {
    trail: Option<egui::Pos2>,
    bursts: Vec<Burst>,
}

impl Effects {
    /// Ease the trail toward the pointer. The first observed position
    /// snaps; afterwards the trail closes a fixed fraction of the gap
    /// per frame.
    pub fn advance_trail(&mut self, pointer: Option<egui::Pos2>) -> Option<egui::Pos2> {
        if let Some(target) = pointer {
            let next = match self.trail {
                Some(current) => current + (target - current) * TRAIL_LERP,
                None => target,
            };
            self.trail = Some(next);
        }
        self.trail
    }

    pub fn spawn_burst(&mut self, center: egui::Pos2) {
        self.bursts.push(Burst {
            center,
            started: Instant::now(),
        });
    }

    pub fn prune_bursts(&mut self) {
        self.bursts
            .retain(|b| b.started.elapsed().as_secs_f32() < BURST_LIFETIME);
    }

    #[cfg(test)]
    fn burst_count(&self) -> usize {
        self.bursts.len()
    }

    /// Paint trail and bursts on the given (foreground) painter.
    pub fn paint_pointer_decor(&self, painter: &egui::Painter, pal: &Palette) {
        if let Some(pos) = self.trail {
            painter.circle_filled(pos, TRAIL_RADIUS, pal.trail);
            painter.circle_filled(pos, TRAIL_RADIUS * 0.45, theme::faded(pal.accent_light, 0.4));
        }
        for burst in &self.bursts {
            let t = (burst.started.elapsed().as_secs_f32() / BURST_LIFETIME).clamp(0.0, 1.0);
            let eased = ease_out_cubic(t);
            let radius = 8.0 + 32.0 * eased;
            let stroke = egui::Stroke::new(2.0, theme::faded(pal.burst, 1.0 - t));
            painter.circle_stroke(burst.center, radius, stroke);
        }
    }
}

/// Classic cubic ease-out over [0, 1].
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Entrance animation for the `index`-th content block, `elapsed` seconds
/// after the page switch. Returns (alpha, upward offset in points).
pub fn stagger(elapsed: f32, index: usize) -> (f32, f32) {
    let delay = STAGGER_DELAY + STAGGER_STEP * index as f32;
    let t = (elapsed - delay).clamp(0.0, 1.0);
    let eased = ease_out_cubic(t);
    (eased, STAGGER_RISE * (1.0 - eased))
}

/// Slow sine bob for the background blobs, phase-shifted per blob.
fn blob_bob(time: f64, phase: f32) -> f32 {
    let period = 10.0_f32;
    10.0 + 10.0 * ((time as f32) * std::f32::consts::TAU / period + phase).sin()
}

/// Paint the three background blobs into the content rect.
pub fn paint_blobs(painter: &egui::Painter, rect: egui::Rect, pal: &Palette, time: f64) {
    let anchors = [
        (egui::pos2(0.18, 0.22), 0.30, 0.0),
        (egui::pos2(0.85, 0.35), 0.24, 2.1),
        (egui::pos2(0.55, 0.95), 0.36, 4.2),
    ];
    for (i, &(anchor, radius_frac, phase)) in anchors.iter().enumerate() {
        let center = egui::pos2(
            rect.left() + rect.width() * anchor.x,
            rect.top() + rect.height() * anchor.y + blob_bob(time, phase),
        );
        painter.circle_filled(center, rect.width() * radius_frac, pal.blobs[i]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn trail_snaps_to_first_pointer_position() {
        let mut effects = Effects::default();
        assert_eq!(effects.advance_trail(None), None);
        let pos = effects.advance_trail(Some(egui::pos2(100.0, 50.0))).unwrap();
        assert_eq!(pos, egui::pos2(100.0, 50.0));
    }

    #[test]
    fn trail_converges_on_stationary_pointer() {
        let mut effects = Effects::default();
        effects.advance_trail(Some(egui::pos2(0.0, 0.0)));
        let target = egui::pos2(400.0, 300.0);
        let mut pos = egui::pos2(0.0, 0.0);
        for _ in 0..200 {
            pos = effects.advance_trail(Some(target)).unwrap();
        }
        assert!(pos.distance(target) < 0.5);
    }

    #[test]
    fn trail_keeps_last_position_without_pointer() {
        let mut effects = Effects::default();
        effects.advance_trail(Some(egui::pos2(10.0, 10.0)));
        let held = effects.advance_trail(None).unwrap();
        assert_eq!(held, egui::pos2(10.0, 10.0));
    }

    #[test]
    fn ease_out_cubic_bounds() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        let mid = ease_out_cubic(0.5);
        assert!(mid > 0.5 && mid < 1.0);
    }

    #[test]
    fn stagger_starts_hidden_and_settles_visible() {
        let (alpha, offset) = stagger(0.0, 0);
        assert_eq!(alpha, 0.0);
        assert_eq!(offset, STAGGER_RISE);

        let (alpha, offset) = stagger(10.0, 3);
        assert_eq!(alpha, 1.0);
        assert_eq!(offset, 0.0);
    }

    #[test]
    fn later_blocks_lag_earlier_ones() {
        let (first, _) = stagger(0.7, 0);
        let (second, _) = stagger(0.7, 1);
        let (third, _) = stagger(0.7, 2);
        assert!(first > second);
        assert!(second > third);
    }

    #[test]
    fn bursts_expire_after_lifetime() {
        let mut effects = Effects::default();
        effects.spawn_burst(egui::pos2(5.0, 5.0));
        effects.bursts[0].started = Instant::now() - Duration::from_secs(2);
        effects.spawn_burst(egui::pos2(6.0, 6.0));

        effects.prune_bursts();
        assert_eq!(effects.burst_count(), 1);
    }
}
