use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::{AppState, Outcome};
use crate::ui::{plot, tables};
use crate::weather::TemperatureSource;

// ---------------------------------------------------------------------------
// Left side panel – city, API key, submit
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState, source: &dyn TemperatureSource) {
    ui.heading("Weather check");
    ui.separator();

    // Clone what we need so we can mutate state inside the closures.
    let Some(cities) = state.dataset.as_ref().map(|ds| ds.cities().to_vec()) else {
        ui.label("No dataset loaded.");
        if ui.button("Open CSV…").clicked() {
            open_file_dialog(state);
        }
        return;
    };

    ui.strong("City");
    let current = state.selected_city.clone().unwrap_or_default();
    egui::ComboBox::from_id_salt("city")
        .selected_text(&current)
        .show_ui(ui, |ui: &mut Ui| {
            for city in &cities {
                if ui.selectable_label(current == *city, city).clicked() {
                    state.select_city(city.clone());
                }
            }
        });

    ui.add_space(8.0);
    ui.strong("OpenWeatherMap API key");
    ui.add(
        egui::TextEdit::singleline(&mut state.api_key)
            .password(true)
            .hint_text("paste key"),
    );

    ui.add_space(8.0);
    ui.label(format!(
        "Season: {}   Year: {}",
        state.config.season, state.config.year
    ));

    ui.add_space(8.0);
    if ui
        .add_enabled(state.selected_city.is_some(), egui::Button::new("Submit"))
        .clicked()
    {
        state.submit(source);
    }
}

// ---------------------------------------------------------------------------
// Central panel – results
// ---------------------------------------------------------------------------

/// Render the outcome of the last submit plus the raw data preview.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a CSV file to begin  (File → Open…)");
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            match &state.outcome {
                None => {
                    ui.label("Select a city, enter an API key and press Submit.");
                }
                Some(Outcome::FetchFailed { city, error }) => {
                    ui.label(
                        RichText::new(format!("Could not get the current weather for {city}."))
                            .color(Color32::RED),
                    );
                    if let Some(message) = &error.message {
                        ui.strong(message);
                    }
                    ui.monospace(&error.payload);
                }
                Some(Outcome::AnalysisFailed {
                    city,
                    reading,
                    error,
                }) => {
                    ui.label(format!("Current temperature in {city}: {reading}°C."));
                    ui.label(RichText::new(error.to_string()).color(Color32::RED));
                }
                Some(Outcome::Report(report)) => {
                    ui.label(report.reading_line());
                    let answer = RichText::new(report.anomaly_answer()).strong();
                    ui.label(if report.verdict.is_anomaly {
                        answer.color(Color32::RED)
                    } else {
                        answer
                    });
                    ui.separator();

                    for line in report.summary_lines() {
                        ui.label(line);
                    }
                    ui.separator();

                    plot::season_plot(ui, &report.chart, state.palette.color_for(&report.season));
                    ui.separator();

                    ui.strong(format!("Seasonal profile of {}", report.city));
                    tables::profile_table(ui, &report.profile, &state.palette);
                }
            }

            ui.add_space(12.0);
            egui::CollapsingHeader::new(format!("Loaded data ({} rows)", dataset.len()))
                .id_salt("dataset_preview")
                .default_open(false)
                .show(ui, |ui: &mut Ui| {
                    tables::dataset_table(ui, dataset);
                });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} rows loaded, {} cities",
                ds.len(),
                ds.cities().len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open temperature history")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows for cities {:?}",
                    dataset.len(),
                    dataset.cities()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
