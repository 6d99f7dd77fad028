// Pure model behind the `ScrollReveal` component: the visibility latch and
// the hidden/revealed style presets. Kept free of browser types so the
// reveal semantics can be tested host-side.

/// Tracks whether an observed element should currently count as visible.
///
/// With `fire_once` set, the first intersection latches: later exits never
/// un-reveal. Without it, visibility simply mirrors the intersection state.
#[derive(Debug, Clone)]
pub struct ViewLatch {
    fire_once: bool,
    in_view: bool,
    has_fired: bool,
}

impl ViewLatch {
    pub fn new(fire_once: bool) -> Self {
        Self {
            fire_once,
            in_view: false,
            has_fired: false,
        }
    }

    /// Feed one intersection notification. Returns true when the visible
    /// output changed, so callers only re-render on real transitions.
    pub fn update(&mut self, intersecting: bool) -> bool {
        let before = self.visible();
        self.in_view = intersecting;
        if intersecting {
            self.has_fired = true;
        }
        self.visible() != before
    }

    pub fn visible(&self) -> bool {
        if self.fire_once {
            self.has_fired || self.in_view
        } else {
            self.in_view
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAnimation {
    FadeUp,
    FadeDown,
    FadeLeft,
    FadeRight,
    ZoomIn,
    ZoomOut,
    Flip,
    Rotate,
}

/// Transform an element rests at once revealed.
pub const REVEALED_TRANSFORM: &str = "translate(0, 0) scale(1) rotate(0)";

impl RevealAnimation {
    /// Transform applied while the element is still hidden.
    pub fn hidden_transform(self) -> &'static str {
        match self {
            RevealAnimation::FadeUp => "translateY(10vh)",
            RevealAnimation::FadeDown => "translateY(-10vh)",
            RevealAnimation::FadeLeft => "translateX(10vw)",
            RevealAnimation::FadeRight => "translateX(-10vw)",
            RevealAnimation::ZoomIn => "scale(0.95)",
            RevealAnimation::ZoomOut => "scale(1.05)",
            RevealAnimation::Flip => "rotateY(90deg)",
            RevealAnimation::Rotate => "rotate(180deg)",
        }
    }
}

/// Inline style for the wrapper element in either state. The transition is
/// always present so leaving the viewport (when `once` is off) animates the
/// element back to its hidden preset.
pub fn reveal_style(
    animation: RevealAnimation,
    revealed: bool,
    delay_ms: u32,
    duration_ms: u32,
) -> String {
    let (transform, opacity) = if revealed {
        (REVEALED_TRANSFORM, 1)
    } else {
        (animation.hidden_transform(), 0)
    };
    format!(
        "opacity: {opacity}; transform: {transform}; \
         transition: transform {duration_ms}ms ease-out {delay_ms}ms, \
         opacity {duration_ms}ms ease-out {delay_ms}ms; \
         will-change: transform, opacity;"
    )
}
