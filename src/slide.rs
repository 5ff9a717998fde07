use raylib::prelude::*;

pub struct Slide {
    texture: Texture2D,
}

impl Slide {
    pub fn new(texture: Texture2D) -> Self {
        Self { texture }
    }

    // Largest scale that fits the texture inside `dest` without cropping.
    fn fit_scale(&self, dest: Rectangle) -> f32 {
        let tex_width = self.texture.width() as f32;
        let tex_height = self.texture.height() as f32;
        (dest.width / tex_width).min(dest.height / tex_height)
    }

    /// Draw the slide letterboxed and centered inside `dest`.
    pub fn draw(&self, d: &mut RaylibDrawHandle, dest: Rectangle) {
        let tex_width = self.texture.width() as f32;
        let tex_height = self.texture.height() as f32;

        let scale = self.fit_scale(dest);
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        let draw_pos = Vector2::new(
            dest.x + (dest.width - scaled_width) * 0.5,
            dest.y + (dest.height - scaled_height) * 0.5,
        );

        d.draw_texture_pro(
            &self.texture,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(draw_pos.x, draw_pos.y, scaled_width, scaled_height),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}
