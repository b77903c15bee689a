use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use isa_atmosphere::{sample_profile, Atmo, AtmosphereModel};

const TOP: f64 = 90_000.0; // plot a little past the clamp
const STEP: f64 = 250.0;

fn main() -> eframe::Result {
    pretty_env_logger::init();

    let model = AtmosphereModel::default();
    let profile = sample_profile(&model, 0.0, TOP, STEP).unwrap_or_default();

    let app = IsaViz { profile };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("Standard Atmosphere", options, Box::new(|_| Ok(Box::new(app))))
}

struct IsaViz {
    profile: Vec<Atmo>,
}

impl IsaViz {
    /// One property-vs-altitude panel, altitude on the vertical axis.
    fn panel(
        &self,
        ui: &mut egui::Ui,
        id: &str,
        label: &str,
        x_label: &str,
        size: egui::Vec2,
        f: fn(&Atmo) -> f64,
    ) {
        ui.vertical(|ui| {
            ui.label(label);
            let points: PlotPoints = self.profile.iter()
                .map(|s| [f(s), s.altitude / 1000.0])
                .collect();
            Plot::new(id)
                .width(size.x)
                .height(size.y)
                .x_axis_label(x_label)
                .y_axis_label("Altitude (km)")
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new(label, points));
                });
        });
    }
}

impl eframe::App for IsaViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("International Standard Atmosphere (0-85 km)");
            if let (Some(first), Some(last)) = (self.profile.first(), self.profile.last()) {
                ui.label(format!(
                    "Sea level: {:.2} K, {:.0} Pa  |  {:.0} km: {:.2} K, {:.4} Pa  |  {} samples",
                    first.temperature,
                    first.pressure,
                    last.altitude / 1000.0,
                    last.temperature,
                    last.pressure,
                    self.profile.len(),
                ));
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half = egui::vec2(available.x / 2.0 - 8.0, available.y / 2.0 - 8.0);

            ui.horizontal(|ui| {
                self.panel(ui, "temperature", "Temperature", "K", half, |s| s.temperature);
                self.panel(ui, "pressure", "Pressure", "kPa", half, |s| s.pressure / 1000.0);
            });

            ui.horizontal(|ui| {
                self.panel(ui, "density", "Density", "kg/m^3", half, |s| s.density);
                self.panel(ui, "sound", "Speed of Sound", "m/s", half, |s| s.sound_speed);
            });
        });
    }
}
