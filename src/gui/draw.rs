use super::{App, Config};
use eframe::egui::{
    load::SizedTexture, Button, ColorImage, Image, RichText, Stroke, TextureFilter,
    TextureOptions, TextureWrapMode, Ui,
};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(Config::TEXT_COLOR)
            .size(Config::TEXT_SIZE)
    }

    fn new_button(text: &str) -> Button {
        Button::new(Self::new_text(text))
            .fill(Config::BUTTON_FILL_COLOR)
            .stroke(Stroke::new(
                Config::BUTTON_STROKE_WIDTH,
                Config::BUTTON_STROKE_COLOR,
            ))
    }

    fn draw_controls(&mut self, ui: &mut Ui) {
        let text = if self.is_paused { "Play" } else { "Pause" };
        if ui.add(Self::new_button(text)).clicked() {
            self.is_paused = !self.is_paused;
        }

        ui.add_enabled(self.is_paused, |ui: &mut Ui| {
            let response = ui.add(Self::new_button("Next step"));
            if response.clicked() {
                self.do_one_step = true;
            }
            response
        });

        if ui.add(Self::new_button("Randomize")).clicked() {
            self.randomize_field();
        }

        if ui.add(Self::new_button("Clear")).clicked() {
            self.clear_field();
        }

        let rule = self.field.rule();
        ui.label(Self::new_text(&format!(
            "Rule: B{}/S{}..{}",
            rule.birth_threshold(),
            rule.survival_min(),
            rule.survival_max()
        )));

        ui.label(Self::new_text(&format!("Generation: {}", self.generation)));

        ui.label(Self::new_text(&format!(
            "FPS: {:3}",
            self.fps_limiter.fps().round() as u32
        )));
    }

    fn draw_field(&mut self, ui: &mut Ui) {
        let (w, h) = self.field.size();
        // alive cells are drawn black, dead cells white
        let gray = self
            .field
            .cells()
            .iter()
            .map(|&alive| if alive { 0x00 } else { 0xff })
            .collect::<Vec<_>>();

        let ci = ColorImage::from_gray([w, h], &gray);
        let texture_options = TextureOptions {
            magnification: TextureFilter::Nearest,
            minification: TextureFilter::Linear,
            wrap_mode: TextureWrapMode::ClampToEdge,
            ..Default::default()
        };
        self.texture.set(ci, texture_options);

        // one texel per cell, blown up to the cell size in points so that
        // pixel coordinates inside the rect map to cells by plain division
        let size = [
            (w * Config::CELL_WIDTH_PX) as f32,
            (h * Config::CELL_HEIGHT_PX) as f32,
        ];
        let image = Image::from_texture(SizedTexture::new(self.texture.id(), size));
        let response = ui.add(image);
        self.field_rect.replace(response.rect);
    }

    pub(super) fn draw(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.group(|ui| {
                ui.set_width(Config::CONTROL_PANEL_WIDTH);
                ui.vertical(|ui| {
                    self.draw_controls(ui);
                });
            });

            self.draw_field(ui);
        });
    }
}
