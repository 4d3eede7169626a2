use crate::Rule;
use eframe::egui::Color32;

pub struct Config;

impl Config {
    /// Logical field area in pixels, split into fixed-size cells.
    pub const FIELD_WIDTH_PX: usize = 800;
    pub const FIELD_HEIGHT_PX: usize = 600;
    pub const CELL_WIDTH_PX: usize = 10;
    pub const CELL_HEIGHT_PX: usize = 10;

    pub const COLUMNS: usize = Self::FIELD_WIDTH_PX / Self::CELL_WIDTH_PX;
    pub const ROWS: usize = Self::FIELD_HEIGHT_PX / Self::CELL_HEIGHT_PX;

    pub const RULE: Rule = Rule::LIFE;
    pub const FILL_RATE: f64 = 0.5;

    pub const MAX_FPS: f64 = 60.;

    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 200.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;
}
