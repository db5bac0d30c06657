//! Confetti particles thrown when a registration succeeds
//!
//! Particles are pure data: the page renders each one as a fixed-position
//! `div.confetti` running the `fall` keyframes, and the flow removes it once
//! its delay plus fall duration has elapsed.

const MIN_SIZE_PX: f64 = 4.0;
const SIZE_SPREAD_PX: f64 = 8.0;
const MIN_DURATION_S: f64 = 2.0;
const DURATION_SPREAD_S: f64 = 2.0;
const MAX_DELAY_S: f64 = 0.5;

/// Colour that needs an outline to stay visible on a light background
const WHITE: &str = "#ffffff";
const OUTLINE: &str = "1px solid #1a1a1a";

/// Size of the visible area particles are scattered over
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiParticle {
    pub id: u64,
    pub x_px: f64,
    /// Starts above the viewport so particles fall into view
    pub y_px: f64,
    pub size_px: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub color: String,
}

impl ConfettiParticle {
    /// Builds one particle, drawing every random property from `random`
    /// which must yield values in `[0, 1)`.
    pub fn random(
        id: u64,
        viewport: Viewport,
        palette: &[String],
        random: &mut dyn FnMut() -> f64,
    ) -> Self {
        let x_px = random() * viewport.width;
        let y_px = random() * viewport.height - viewport.height;
        let size_px = random() * SIZE_SPREAD_PX + MIN_SIZE_PX;
        let duration_s = random() * DURATION_SPREAD_S + MIN_DURATION_S;
        let delay_s = random() * MAX_DELAY_S;

        let index = ((random() * palette.len() as f64) as usize).min(palette.len().saturating_sub(1));
        let color = palette.get(index).cloned().unwrap_or_else(|| WHITE.to_string());

        Self {
            id,
            x_px,
            y_px,
            size_px,
            duration_s,
            delay_s,
            color,
        }
    }

    /// `count` particles with consecutive ids starting at `first_id`
    pub fn batch(
        first_id: u64,
        count: usize,
        viewport: Viewport,
        palette: &[String],
        random: &mut dyn FnMut() -> f64,
    ) -> Vec<Self> {
        (0..count as u64)
            .map(|offset| Self::random(first_id + offset, viewport, palette, random))
            .collect()
    }

    /// Time from insertion until the fall animation has finished
    pub fn lifetime_ms(&self) -> u32 {
        ((self.duration_s + self.delay_s) * 1000.0).ceil() as u32
    }

    pub fn needs_outline(&self) -> bool {
        self.color.eq_ignore_ascii_case(WHITE)
    }

    /// Inline style for the particle element. Timings are written at full
    /// precision so the animation never outlasts `lifetime_ms`.
    pub fn style(&self) -> String {
        let mut style = format!(
            "position: fixed; left: {:.1}px; top: {:.1}px; width: {:.1}px; height: {:.1}px; \
             background-color: {}; border-radius: 50%; pointer-events: none; \
             animation: fall {}s linear {}s forwards; z-index: 9999;",
            self.x_px,
            self.y_px,
            self.size_px,
            self.size_px,
            self.color,
            self.duration_s,
            self.delay_s
        );
        if self.needs_outline() {
            style.push_str(&format!(" border: {};", OUTLINE));
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Vec<String> {
        vec![
            "#c41e3a".to_string(),
            "#ffffff".to_string(),
            "#1a1a1a".to_string(),
        ]
    }

    /// Deterministic sequence walking through [0, 1)
    fn stepper() -> impl FnMut() -> f64 {
        let mut n = 0u32;
        move || {
            n = (n + 7) % 100;
            n as f64 / 100.0
        }
    }

    const VIEWPORT: Viewport = Viewport {
        width: 1280.0,
        height: 720.0,
    };

    #[test]
    fn test_batch_properties_stay_in_range() {
        let palette = palette();
        let mut random = stepper();
        let particles = ConfettiParticle::batch(10, 30, VIEWPORT, &palette, &mut random);

        assert_eq!(particles.len(), 30);
        assert_eq!(particles.first().map(|p| p.id), Some(10));
        assert_eq!(particles.last().map(|p| p.id), Some(39));

        for p in &particles {
            assert!(p.x_px >= 0.0 && p.x_px < VIEWPORT.width);
            assert!(p.y_px >= -VIEWPORT.height && p.y_px < 0.0);
            assert!(p.size_px >= 4.0 && p.size_px < 12.0);
            assert!(p.duration_s >= 2.0 && p.duration_s < 4.0);
            assert!(p.delay_s >= 0.0 && p.delay_s < 0.5);
            assert!(palette.contains(&p.color));
            assert!(p.lifetime_ms() <= 4500);
        }
    }

    #[test]
    fn test_upper_bound_random_still_picks_a_color() {
        let palette = palette();
        let mut almost_one = || 0.999_999;
        let particle = ConfettiParticle::random(0, VIEWPORT, &palette, &mut almost_one);
        assert_eq!(particle.color, "#1a1a1a");
    }

    #[test]
    fn test_white_particles_get_an_outline() {
        let palette = palette();
        // 0.5 selects the middle colour
        let mut half = || 0.5;
        let particle = ConfettiParticle::random(0, VIEWPORT, &palette, &mut half);
        assert_eq!(particle.color, "#ffffff");
        assert!(particle.needs_outline());
        assert!(particle.style().contains("border: 1px solid #1a1a1a;"));

        let mut zero = || 0.0;
        let red = ConfettiParticle::random(1, VIEWPORT, &palette, &mut zero);
        assert!(!red.style().contains("border:"));
        assert!(red.style().contains("animation: fall 2s linear 0s forwards;"));
    }

    #[test]
    fn test_styled_animation_ends_within_lifetime() {
        let particle = ConfettiParticle {
            id: 0,
            x_px: 0.0,
            y_px: 0.0,
            size_px: 4.0,
            duration_s: 2.998,
            delay_s: 0.4991,
            color: "#c41e3a".to_string(),
        };
        let style = particle.style();
        assert!(style.contains("animation: fall 2.998s linear 0.4991s forwards;"));

        let timings: Vec<f64> = style
            .split("animation: fall ")
            .nth(1)
            .unwrap()
            .split_whitespace()
            .filter_map(|t| t.strip_suffix('s'))
            .map(|t| t.parse().unwrap())
            .collect();
        assert_eq!(timings.len(), 2);
        let animation_ms = (timings[0] + timings[1]) * 1000.0;
        assert!(animation_ms <= particle.lifetime_ms() as f64);
    }

    #[test]
    fn test_lifetime_rounds_up() {
        let particle = ConfettiParticle {
            id: 0,
            x_px: 0.0,
            y_px: 0.0,
            size_px: 4.0,
            duration_s: 2.3333,
            delay_s: 0.1,
            color: "#c41e3a".to_string(),
        };
        assert_eq!(particle.lifetime_ms(), 2434);
    }
}
