use raylib::prelude::*;

use crate::carousel::Carousel;
use crate::constants::*;
use crate::slide::Slide;

// Hit area of an indicator dot, wider than the dot itself.
const INDICATOR_HIT_RADIUS: f32 = INDICATOR_RADIUS * 2.0;

pub fn prev_control_rect(region: Rectangle) -> Rectangle {
    Rectangle::new(
        region.x + PANEL_PADDING,
        region.y + (region.height - CONTROL_HEIGHT) * 0.5,
        CONTROL_WIDTH,
        CONTROL_HEIGHT,
    )
}

pub fn next_control_rect(region: Rectangle) -> Rectangle {
    Rectangle::new(
        region.x + region.width - CONTROL_WIDTH - PANEL_PADDING,
        region.y + (region.height - CONTROL_HEIGHT) * 0.5,
        CONTROL_WIDTH,
        CONTROL_HEIGHT,
    )
}

pub fn indicator_centers(region: Rectangle, count: usize) -> Vec<Vector2> {
    if count == 0 {
        return Vec::new();
    }
    let row_width = (count - 1) as f32 * INDICATOR_SPACING;
    let first_x = region.x + (region.width - row_width) * 0.5;
    let y = region.y + region.height - INDICATOR_MARGIN;
    (0..count)
        .map(|i| Vector2::new(first_x + i as f32 * INDICATOR_SPACING, y))
        .collect()
}

pub fn indicator_hit(region: Rectangle, count: usize, point: Vector2) -> Option<usize> {
    indicator_centers(region, count)
        .iter()
        .position(|center| {
            let dx = point.x - center.x;
            let dy = point.y - center.y;
            dx * dx + dy * dy <= INDICATOR_HIT_RADIUS * INDICATOR_HIT_RADIUS
        })
}

/// One carousel on screen: its slides, its controller, and the window region
/// it currently occupies. Regions are reassigned every frame so the layout
/// follows window resizes.
pub struct CarouselPanel {
    label: String,
    slides: Vec<Slide>,
    carousel: Carousel,
    region: Rectangle,
    hovered: bool,
}

impl CarouselPanel {
    pub fn new(label: String, slides: Vec<Slide>) -> Self {
        let carousel = Carousel::new(slides.len());
        Self {
            label,
            slides,
            carousel,
            region: Rectangle::new(0.0, 0.0, 0.0, 0.0),
            hovered: false,
        }
    }

    pub fn set_region(&mut self, region: Rectangle) {
        self.region = region;
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    // A single slide leaves nothing to navigate, so no controls are wired.
    fn controls_wired(&self) -> bool {
        self.carousel.slide_count() > 1
    }

    /// Map this frame's mouse state onto controller triggers: hover edges,
    /// control and indicator clicks, and drag begin/end.
    pub fn handle_input(&mut self, rl: &RaylibHandle) {
        let mouse = rl.get_mouse_position();
        let inside = rl.is_cursor_on_screen() && self.region.check_collision_point_rec(mouse);

        if inside != self.hovered {
            if inside {
                self.carousel.pointer_entered();
            } else {
                self.carousel.pointer_left();
            }
            self.hovered = inside;
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) && inside {
            if self.controls_wired()
                && prev_control_rect(self.region).check_collision_point_rec(mouse)
            {
                self.carousel.handle_previous();
            } else if self.controls_wired()
                && next_control_rect(self.region).check_collision_point_rec(mouse)
            {
                self.carousel.handle_next();
            } else {
                match indicator_hit(self.region, self.carousel.slide_count(), mouse) {
                    Some(index) if self.controls_wired() => {
                        self.carousel.handle_indicator(index);
                    }
                    _ => self.carousel.swipe_started(mouse.x),
                }
            }
        }

        // The gesture ends wherever the button comes up, even outside the
        // region; the tracker ignores releases with no matching press.
        if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
            self.carousel.swipe_ended(mouse.x);
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.carousel.tick(dt);
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let region = self.region;
        d.draw_rectangle_rec(region, Color::new(18, 18, 18, 255));
        d.draw_rectangle_lines_ex(region, 1.0, Color::DARKGRAY);

        for (i, slide) in self.slides.iter().enumerate() {
            if self.carousel.slide_is_active(i) {
                slide.draw(d, region);
            }
        }

        d.draw_text(
            &self.label,
            (region.x + 10.0) as i32,
            (region.y + 8.0) as i32,
            LABEL_FONT_SIZE,
            Color::RAYWHITE,
        );

        // Slide counter, with a hint while the auto-advance is paused.
        let mut counter = format!(
            "{}/{}",
            self.carousel.current() + 1,
            self.carousel.slide_count()
        );
        if !self.carousel.auto_advance_active() {
            counter.push_str("  (paused)");
        }
        let counter_width = d.measure_text(&counter, LABEL_FONT_SIZE);
        d.draw_text(
            &counter,
            (region.x + region.width - counter_width as f32 - 10.0) as i32,
            (region.y + 8.0) as i32,
            LABEL_FONT_SIZE,
            Color::LIGHTGRAY,
        );

        if self.controls_wired() {
            draw_control(d, prev_control_rect(region), "<");
            draw_control(d, next_control_rect(region), ">");

            for (i, center) in indicator_centers(region, self.carousel.slide_count())
                .into_iter()
                .enumerate()
            {
                if self.carousel.indicator_is_active(i) {
                    d.draw_circle_v(center, INDICATOR_RADIUS, Color::RAYWHITE);
                } else {
                    d.draw_circle_lines(
                        center.x as i32,
                        center.y as i32,
                        INDICATOR_RADIUS,
                        Color::LIGHTGRAY,
                    );
                }
            }
        }
    }
}

fn draw_control(d: &mut RaylibDrawHandle, rect: Rectangle, glyph: &str) {
    d.draw_rectangle_rounded(rect, 0.4, 8, Color::new(0, 0, 0, 140));
    let font_size = (CONTROL_HEIGHT * 0.5) as i32;
    let glyph_width = d.measure_text(glyph, font_size);
    d.draw_text(
        glyph,
        (rect.x + (rect.width - glyph_width as f32) * 0.5) as i32,
        (rect.y + (rect.height - font_size as f32) * 0.5) as i32,
        font_size,
        Color::RAYWHITE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> Rectangle {
        Rectangle::new(12.0, 12.0, 1000.0, 500.0)
    }

    fn contains(outer: Rectangle, inner: Rectangle) -> bool {
        inner.x >= outer.x
            && inner.y >= outer.y
            && inner.x + inner.width <= outer.x + outer.width
            && inner.y + inner.height <= outer.y + outer.height
    }

    #[test]
    fn controls_sit_inside_the_region() {
        assert!(contains(region(), prev_control_rect(region())));
        assert!(contains(region(), next_control_rect(region())));
    }

    #[test]
    fn controls_do_not_overlap() {
        let prev = prev_control_rect(region());
        let next = next_control_rect(region());
        assert!(prev.x + prev.width < next.x);
    }

    #[test]
    fn indicators_are_centered_and_evenly_spaced() {
        let centers = indicator_centers(region(), 5);
        assert_eq!(centers.len(), 5);
        let row = region();
        let mid = row.x + row.width * 0.5;
        assert!((centers[2].x - mid).abs() < 0.001);
        for pair in centers.windows(2) {
            assert!((pair[1].x - pair[0].x - INDICATOR_SPACING).abs() < 0.001);
        }
    }

    #[test]
    fn indicator_hit_finds_the_nearest_dot() {
        let centers = indicator_centers(region(), 3);
        for (i, center) in centers.iter().enumerate() {
            assert_eq!(indicator_hit(region(), 3, *center), Some(i));
        }
        let far = Vector2::new(region().x + 1.0, region().y + 1.0);
        assert_eq!(indicator_hit(region(), 3, far), None);
    }

    #[test]
    fn no_indicators_no_hits() {
        assert!(indicator_centers(region(), 0).is_empty());
        assert_eq!(
            indicator_hit(region(), 0, Vector2::new(500.0, 500.0)),
            None
        );
    }
}
