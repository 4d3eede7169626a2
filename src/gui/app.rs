use super::{Config, FpsLimiter};
use crate::{pixel_to_cell, Error, LifeField};
use eframe::egui::{
    CentralPanel, Color32, ColorImage, Context, Frame, Key, Margin, Rect, TextureHandle,
    TextureOptions,
};

pub struct App {
    pub(super) field: LifeField,         // The automaton being simulated.
    pub(super) is_paused: bool,          // Flag indicating whether the simulation is paused.
    pub(super) do_one_step: bool,        // Do one step and pause.
    pub(super) generation: u64,          // Current generation number.
    pub(super) texture: TextureHandle,   // Texture handle of the field.
    pub(super) field_rect: Option<Rect>, // Part of the window displaying the field.
    pub(super) fps_limiter: FpsLimiter,  // Limits the frame rate to a certain value.
}

impl App {
    pub fn new(ctx: &Context) -> Result<Self, Error> {
        let field = LifeField::random(
            Config::COLUMNS,
            Config::ROWS,
            Config::RULE,
            None,
            Config::FILL_RATE,
        )?;
        Ok(Self {
            field,
            is_paused: false,
            do_one_step: false,
            generation: 0,
            texture: ctx.load_texture("life field", ColorImage::default(), TextureOptions::default()),
            field_rect: None,
            fps_limiter: FpsLimiter::default(),
        })
    }

    pub(super) fn randomize_field(&mut self) {
        if let Err(err) = self.field.randomize(None, Config::FILL_RATE) {
            log::error!("failed to randomize the field: {err}");
        }
        self.generation = 0;
    }

    pub(super) fn clear_field(&mut self) {
        let (w, h) = self.field.size();
        for y in 0..h {
            for x in 0..w {
                self.field.set(x, y, false);
            }
        }
        self.generation = 0;
    }

    fn update_field(&mut self) {
        if self.is_paused && !self.do_one_step {
            return;
        }
        self.field.step();
        self.generation += 1;
        self.do_one_step = false;
    }

    fn handle_input(&mut self, ctx: &Context, field_rect: Rect) {
        ctx.input(|input| {
            if input.pointer.primary_pressed() {
                if let Some(pos) = input.pointer.latest_pos() {
                    if field_rect.contains(pos) {
                        let px = (pos.x - field_rect.left()) as i64;
                        let py = (pos.y - field_rect.top()) as i64;
                        let (col, row) =
                            pixel_to_cell(px, py, Config::CELL_WIDTH_PX, Config::CELL_HEIGHT_PX);
                        self.toggle_at(col, row);
                    }
                }
            }
            if input.key_pressed(Key::Space) {
                self.do_one_step = true;
            }
            if input.key_pressed(Key::P) {
                self.is_paused = !self.is_paused;
            }
        });
    }

    fn toggle_at(&mut self, col: i64, row: i64) {
        match (usize::try_from(col), usize::try_from(row)) {
            (Ok(x), Ok(y)) => {
                if let Err(err) = self.field.toggle(x, y) {
                    log::debug!("ignoring click: {err}");
                }
            }
            _ => log::debug!("ignoring click at cell ({col}, {row}) outside the field"),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                ctx.request_repaint();

                if let Some(field_rect) = self.field_rect {
                    self.handle_input(ctx, field_rect);
                }

                self.draw(ui);

                self.update_field();
            });

        self.fps_limiter.delay();
    }
}
