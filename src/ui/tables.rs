use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::analysis::profile::SeasonalProfile;
use crate::color::SeasonPalette;
use crate::data::model::TemperatureDataset;

const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Season profile
// ---------------------------------------------------------------------------

/// Mean and σ per season, winter first.
pub fn profile_table(ui: &mut Ui, profile: &SeasonalProfile, palette: &SeasonPalette) {
    ui.push_id("profile_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .column(Column::auto().at_least(90.0))
            .column(Column::auto().at_least(140.0))
            .column(Column::auto().at_least(140.0))
            .column(Column::remainder())
            .header(20.0, |mut header| {
                header.col(|ui| {
                    ui.strong("Season");
                });
                header.col(|ui| {
                    ui.strong("Mean temperature");
                });
                header.col(|ui| {
                    ui.strong("Standard deviation");
                });
                header.col(|ui| {
                    ui.strong("Days");
                });
            })
            .body(|mut body| {
                for (season, stats) in profile.in_calendar_order() {
                    body.row(ROW_HEIGHT, |mut row| {
                        row.col(|ui| {
                            ui.label(RichText::new(season).color(palette.color_for(season)));
                        });
                        row.col(|ui| {
                            ui.label(format!("{:.2}", stats.mean));
                        });
                        row.col(|ui| {
                            ui.label(format!("{:.2}", stats.std_dev));
                        });
                        row.col(|ui| {
                            ui.label(stats.count.to_string());
                        });
                    });
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Raw rows
// ---------------------------------------------------------------------------

/// Every loaded row, virtualised so large files stay responsive.
pub fn dataset_table(ui: &mut Ui, dataset: &TemperatureDataset) {
    let records = dataset.records();
    ui.push_id("dataset_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .max_scroll_height(300.0)
            .column(Column::auto().at_least(120.0))
            .column(Column::auto().at_least(100.0))
            .column(Column::auto().at_least(80.0))
            .column(Column::remainder())
            .header(20.0, |mut header| {
                for title in ["City", "Timestamp", "Season", "Temperature"] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, records.len(), |mut row| {
                    let rec = &records[row.index()];
                    row.col(|ui| {
                        ui.label(&rec.city);
                    });
                    row.col(|ui| {
                        ui.label(&rec.timestamp);
                    });
                    row.col(|ui| {
                        ui.label(&rec.season);
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.2}", rec.temperature));
                    });
                });
            });
    });
}
