// Pure model behind the `GravityText` component: ambient float, pointer
// repulsion, scatter-in and per-letter styling math, plus the explicit
// per-instance `TextMotion` state the component drives from its effects.
// Browser-free on purpose so every formula is testable host-side.

/// Ambient clock period in milliseconds.
pub const TICK_MS: u32 = 50;
/// Amplitude of the idle floating oscillation.
pub const FLOAT_AMPLITUDE: f64 = 0.004;
/// Shortest pointer distance used as a repulsion denominator.
pub const MIN_POINTER_DISTANCE: f64 = 0.1;
/// Vertical scatter amplitude before the first reveal.
pub const SCATTER_AMPLITUDE: f64 = 30.0;
/// Default pointer-repulsion strength.
pub const DEFAULT_INTENSITY: f64 = 0.08;
/// Settle transition for letter 0, in seconds.
pub const SETTLE_BASE_SECS: f64 = 0.5;
/// Extra settle time added per letter index, in seconds.
pub const SETTLE_STAGGER_SECS: f64 = 0.03;

/// Pointer position normalized to the component's bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
    pub hovering: bool,
}

impl PointerState {
    pub fn idle() -> Self {
        Self {
            x: 0.5,
            y: 0.5,
            hovering: false,
        }
    }
}

/// Everything the renderer needs for one letter on one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterFrame {
    /// Hover + float, rendered in em.
    pub offset_x: f64,
    pub offset_y: f64,
    /// Pre-reveal vertical scatter, rendered in px.
    pub scatter_y: f64,
    pub opacity: f64,
    pub hue_near: f64,
    pub hue_far: f64,
    /// Glow alpha in [0, 1]; zero for whitespace or when not hovering.
    pub glow: f64,
    /// Staggered transition duration in seconds.
    pub settle_secs: f64,
}

/// The indexed letter sequence rendered for a text. Recomputed from scratch
/// whenever the text changes, so a shorter string yields a shorter list and
/// empty text yields no letters.
pub fn letters(text: &str) -> Vec<(usize, char)> {
    text.chars().enumerate().collect()
}

/// Idle floating offset, bounded by `FLOAT_AMPLITUDE` in both axes.
pub fn float_offset(tick: u64, index: usize) -> (f64, f64) {
    let t = tick as f64 * 0.05;
    let i = index as f64;
    (
        (t + i * 0.3).sin() * FLOAT_AMPLITUDE,
        (t + i * 0.2).cos() * FLOAT_AMPLITUDE,
    )
}

/// Fractional horizontal position proxy for a letter. The denominator is
/// clamped so empty text never divides by zero.
pub fn letter_position(index: usize, total: usize) -> f64 {
    index as f64 / total.max(1) as f64
}

/// Inverse-distance-weighted pointer displacement. Zero unless hovering.
pub fn hover_offset(
    index: usize,
    total: usize,
    pointer: PointerState,
    intensity: f64,
) -> (f64, f64) {
    if !pointer.hovering {
        return (0.0, 0.0);
    }
    let dist_x = letter_position(index, total) - pointer.x;
    let dist_y = 0.5 - pointer.y;
    let distance = (dist_x * dist_x + dist_y * dist_y).sqrt();
    let denom = distance.max(MIN_POINTER_DISTANCE);
    (dist_x * intensity / denom, dist_y * intensity / denom)
}

/// Vertical offset of a not-yet-revealed letter.
pub fn scatter_offset(index: usize) -> f64 {
    (index as f64 * 0.3).cos() * SCATTER_AMPLITUDE
}

/// Gradient hues for one letter, sweeping purple-to-cyan across the word.
pub fn letter_hues(index: usize, total: usize) -> (f64, f64) {
    let t = letter_position(index, total);
    (280.0 + t * 20.0, 180.0 + t * 20.0)
}

/// Glow alpha for one letter while hovering, clamped to [0, 1].
pub fn glow_alpha(index: usize, total: usize, pointer: PointerState) -> f64 {
    if !pointer.hovering {
        return 0.0;
    }
    let dist_x = letter_position(index, total) - pointer.x;
    let dist_y = 0.5 - pointer.y;
    let distance = (dist_x * dist_x + dist_y * dist_y).sqrt();
    (1.0 - distance).clamp(0.0, 1.0)
}

/// Staggered per-letter transition duration producing the cascading settle.
pub fn settle_secs(index: usize) -> f64 {
    SETTLE_BASE_SECS + index as f64 * SETTLE_STAGGER_SECS
}

/// Rendering switches mirrored from the component props.
#[derive(Debug, Clone, Copy)]
pub struct MotionOptions {
    pub intensity: f64,
    pub animate_on_hover: bool,
    pub colorful: bool,
    pub glow_effect: bool,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            intensity: DEFAULT_INTENSITY,
            animate_on_hover: true,
            colorful: true,
            glow_effect: true,
        }
    }
}

/// Per-instance animation state. One of these lives for each mounted text
/// component; the ambient interval advances it, pointer events mutate it,
/// and the unmount path stops it exactly once.
#[derive(Debug, Clone)]
pub struct TextMotion {
    tick: u64,
    pointer: PointerState,
    settled: bool,
    stopped: bool,
}

impl TextMotion {
    /// `settle_immediately` skips the scatter-in phase (no scroll trigger).
    pub fn new(settle_immediately: bool) -> Self {
        Self {
            tick: 0,
            pointer: PointerState::idle(),
            settled: settle_immediately,
            stopped: false,
        }
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn settled(&self) -> bool {
        self.settled
    }

    /// Advance the ambient clock. Ignored after `stop`.
    pub fn advance(&mut self) {
        if !self.stopped {
            self.tick = self.tick.wrapping_add(1);
        }
    }

    pub fn pointer_entered(&mut self) {
        self.pointer.hovering = true;
    }

    pub fn pointer_left(&mut self) {
        self.pointer.hovering = false;
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer.x = x.clamp(0.0, 1.0);
        self.pointer.y = y.clamp(0.0, 1.0);
    }

    /// Latch the scatter-in as finished. Never un-settles.
    pub fn reveal(&mut self) {
        self.settled = true;
    }

    /// Mark the instance torn down. Returns true only the first time, so a
    /// double-unmount bug shows up in tests as a second `true`.
    pub fn stop(&mut self) -> bool {
        !std::mem::replace(&mut self.stopped, true)
    }

    pub fn stopped(&self) -> bool {
        self.stopped
    }

    /// Compute one letter's frame. Whitespace keeps its slot in the index
    /// math but never glows.
    pub fn frame(&self, ch: char, index: usize, total: usize, opts: &MotionOptions) -> LetterFrame {
        let (float_x, float_y) = float_offset(self.tick, index);
        let (move_x, move_y) = if opts.animate_on_hover {
            hover_offset(index, total, self.pointer, opts.intensity)
        } else {
            (0.0, 0.0)
        };
        let (scatter_y, opacity) = if self.settled {
            (0.0, 1.0)
        } else {
            (scatter_offset(index), 0.0)
        };
        let (hue_near, hue_far) = letter_hues(index, total);
        let glow = if opts.glow_effect && !ch.is_whitespace() {
            glow_alpha(index, total, self.pointer)
        } else {
            0.0
        };
        LetterFrame {
            offset_x: move_x + float_x,
            offset_y: move_y + float_y,
            scatter_y,
            opacity,
            hue_near,
            hue_far,
            glow,
            settle_secs: settle_secs(index),
        }
    }
}
