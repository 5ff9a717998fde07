use raylib::prelude::*;
use tracing::info;

use crate::constants::*;

const INFO_BLUE: Color = Color::new(59, 130, 246, 255);
const SUCCESS_GREEN: Color = Color::new(16, 185, 129, 255);
const ERROR_RED: Color = Color::new(239, 68, 68, 255);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    fn color(self) -> Color {
        match self {
            ToastKind::Info => INFO_BLUE,
            ToastKind::Success => SUCCESS_GREEN,
            ToastKind::Error => ERROR_RED,
        }
    }
}

fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

pub struct Toast {
    message: String,
    kind: ToastKind,
    age: f32,
}

impl Toast {
    fn lifetime() -> f32 {
        TOAST_SLIDE_DURATION + TOAST_DISPLAY_DURATION + TOAST_SLIDE_DURATION
    }

    fn expired(&self) -> bool {
        self.age >= Self::lifetime()
    }

    /// How far off the right edge the toast sits: 1.0 fully off screen,
    /// 0.0 at its resting position. Eased at both ends.
    fn offscreen_fraction(&self) -> f32 {
        if self.age < TOAST_SLIDE_DURATION {
            1.0 - smoothstep(self.age / TOAST_SLIDE_DURATION)
        } else if self.age < TOAST_SLIDE_DURATION + TOAST_DISPLAY_DURATION {
            0.0
        } else {
            let out = self.age - TOAST_SLIDE_DURATION - TOAST_DISPLAY_DURATION;
            smoothstep(out / TOAST_SLIDE_DURATION)
        }
    }
}

/// Transient notifications stacked in the top-right corner. Each toast
/// slides in, rests for a fixed period, slides back out, and is dropped.
pub struct ToastStack {
    toasts: Vec<Toast>,
}

impl ToastStack {
    pub fn new() -> Self {
        Self { toasts: Vec::new() }
    }

    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) {
        let message = message.into();
        info!(kind = ?kind, "{message}");
        self.toasts.push(Toast {
            message,
            kind,
            age: 0.0,
        });
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn tick(&mut self, dt: f32) {
        for toast in &mut self.toasts {
            toast.age += dt;
        }
        self.toasts.retain(|toast| !toast.expired());
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let screen_width = d.get_screen_width() as f32;
        for (i, toast) in self.toasts.iter().enumerate() {
            let resting_x = screen_width - TOAST_WIDTH - TOAST_MARGIN;
            // Sliding covers the box plus the margin so nothing peeks in.
            let offset = toast.offscreen_fraction() * (TOAST_WIDTH + TOAST_MARGIN);
            let rect = Rectangle::new(
                resting_x + offset,
                TOAST_MARGIN + i as f32 * (TOAST_HEIGHT + TOAST_MARGIN * 0.5),
                TOAST_WIDTH,
                TOAST_HEIGHT,
            );
            d.draw_rectangle_rounded(rect, 0.3, 8, toast.kind.color());
            d.draw_text(
                &toast.message,
                (rect.x + 14.0) as i32,
                (rect.y + (TOAST_HEIGHT - TOAST_FONT_SIZE as f32) * 0.5) as i32,
                TOAST_FONT_SIZE,
                Color::WHITE,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast_at(age: f32) -> Toast {
        Toast {
            message: String::new(),
            kind: ToastKind::Info,
            age,
        }
    }

    #[test]
    fn starts_fully_off_screen() {
        assert_eq!(toast_at(0.0).offscreen_fraction(), 1.0);
    }

    #[test]
    fn rests_on_screen_after_sliding_in() {
        assert_eq!(toast_at(TOAST_SLIDE_DURATION).offscreen_fraction(), 0.0);
        assert_eq!(toast_at(TOAST_SLIDE_DURATION + 2.0).offscreen_fraction(), 0.0);
    }

    #[test]
    fn slides_back_out_at_the_end_of_its_display_period() {
        let leaving = toast_at(TOAST_SLIDE_DURATION + TOAST_DISPLAY_DURATION + 0.15);
        let fraction = leaving.offscreen_fraction();
        assert!(fraction > 0.0 && fraction < 1.0);
        assert!(toast_at(Toast::lifetime()).offscreen_fraction() >= 1.0 - 0.001);
    }

    #[test]
    fn expires_after_slide_in_display_and_slide_out() {
        assert!(!toast_at(Toast::lifetime() - 0.01).expired());
        assert!(toast_at(Toast::lifetime()).expired());
    }

    #[test]
    fn stack_drops_expired_toasts() {
        let mut stack = ToastStack::new();
        stack.push("first", ToastKind::Info);
        stack.tick(2.0);
        stack.push("second", ToastKind::Error);
        assert_eq!(stack.len(), 2);

        // First expires, second is mid-display.
        stack.tick(Toast::lifetime() - 2.0);
        assert_eq!(stack.len(), 1);

        stack.tick(Toast::lifetime());
        assert!(stack.is_empty());
    }
}
