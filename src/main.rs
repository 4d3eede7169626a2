#![warn(clippy::all)]

fn main() {
    use eframe::egui::{vec2, ViewportBuilder};
    use lifegrid::Config;

    env_logger::init();

    let rule = Config::RULE;
    log::info!(
        "starting a {}x{} field, rule B{}/S{}..{}",
        Config::COLUMNS,
        Config::ROWS,
        rule.birth_threshold(),
        rule.survival_min(),
        rule.survival_max(),
    );

    let inner_size = vec2(
        Config::FIELD_WIDTH_PX as f32 + Config::CONTROL_PANEL_WIDTH + Config::FRAME_MARGIN * 3.,
        Config::FIELD_HEIGHT_PX as f32 + Config::FRAME_MARGIN * 2.,
    );
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(inner_size)
            .with_min_inner_size(inner_size),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |cc| Ok(Box::new(lifegrid::App::new(&cc.egui_ctx)?))),
    )
    .unwrap();
}
