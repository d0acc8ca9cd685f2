use eframe::egui;

use season_watch::state::AppState;
use season_watch::ui::panels;
use season_watch::weather::OpenWeatherMap;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SeasonWatchApp {
    pub state: AppState,
    weather: OpenWeatherMap,
}

impl Default for SeasonWatchApp {
    fn default() -> Self {
        let state = AppState::default();
        let weather = OpenWeatherMap::new(&state.config);
        Self { state, weather }
    }
}

impl eframe::App for SeasonWatchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: city, key, submit ----
        egui::SidePanel::left("control_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state, &self.weather);
            });

        // ---- Central panel: results ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::central_panel(ui, &self.state);
        });
    }
}
