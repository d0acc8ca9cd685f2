use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{HLine, Legend, Line, LineStyle, Plot, PlotPoints, Polygon};

use crate::analysis::chart::SeasonChart;

const BAND_FILL: Color32 = Color32::from_rgba_premultiplied(0, 77, 0, 77);
const BOUND_COLOR: Color32 = Color32::from_rgb(220, 50, 47);

// ---------------------------------------------------------------------------
// Seasonal time-series plot
// ---------------------------------------------------------------------------

/// Render the readings of one (city, season, year) view with the seasonal
/// mean, the ±σ bounds and the band between them.
pub fn season_plot(ui: &mut Ui, chart: &SeasonChart, line_color: Color32) {
    ui.strong(&chart.title);

    if chart.points.is_empty() {
        ui.label("No readings for this season and year.");
    }

    let bounds = chart.bounds;
    let tick_chart = chart.clone();
    let hover_chart = chart.clone();

    Plot::new("season_plot")
        .legend(Legend::default())
        .height(360.0)
        .x_axis_label("Date")
        .y_axis_label("Temperature, °C")
        .x_axis_formatter(move |mark, _range| {
            tick_chart
                .label_at(mark.value)
                .unwrap_or_default()
                .to_string()
        })
        .label_formatter(move |name, value| {
            let date = hover_chart.label_at(value.x.round()).unwrap_or_default();
            if name.is_empty() {
                format!("{date}\n{:.1}°C", value.y)
            } else {
                format!("{name}\n{date}\n{:.1}°C", value.y)
            }
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            if let (Some(first), Some(last)) = (chart.points.first(), chart.points.last()) {
                let band = PlotPoints::from(vec![
                    [first[0], bounds.lower],
                    [last[0], bounds.lower],
                    [last[0], bounds.upper],
                    [first[0], bounds.upper],
                ]);
                plot_ui.polygon(
                    Polygon::new(band)
                        .name("Mean ± σ")
                        .fill_color(BAND_FILL)
                        .stroke(Stroke::NONE),
                );
            }

            plot_ui.hline(
                HLine::new(bounds.mean)
                    .name("Mean")
                    .color(Color32::BLUE)
                    .style(LineStyle::dashed_loose()),
            );
            plot_ui.hline(HLine::new(bounds.lower).name("Lower bound").color(BOUND_COLOR));
            plot_ui.hline(HLine::new(bounds.upper).name("Upper bound").color(BOUND_COLOR));

            let points = PlotPoints::from(chart.points.clone());
            plot_ui.line(
                Line::new(points)
                    .name("Temperature")
                    .color(line_color)
                    .width(1.5),
            );
        });
}
