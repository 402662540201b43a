use chrono::{DateTime, Local};
use std::path::Path;

use crate::error::Result;
use crate::spectrum::Spectrum;

/// Initial window size in logical pixels
#[cfg(feature = "gui")]
pub const WINDOW_SIZE: [f32; 2] = [1000.0, 500.0];

/// (frequency, dB) pairs for plotting. Bins with zero magnitude have no
/// finite level and are left out.
pub fn plot_points(spectrum: &Spectrum) -> Vec<[f64; 2]> {
    spectrum
        .frequencies
        .iter()
        .zip(spectrum.magnitudes_db())
        .filter(|(_, db)| db.is_finite())
        .map(|(&f, db)| [f, db])
        .collect()
}

pub fn window_title(path: &Path, captured: Option<DateTime<Local>>) -> String {
    match captured {
        Some(time) => format!(
            "{} ({})",
            path.display(),
            time.format("%Y-%m-%d %H:%M:%S")
        ),
        None => path.display().to_string(),
    }
}

/// Open the spectrum window and block until it is closed
#[cfg(feature = "gui")]
pub fn show(title: String, spectrum: &Spectrum) -> Result<()> {
    use eframe::egui;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_title(&title),
        ..Default::default()
    };

    let app = gui::SpectrumApp::new(title, plot_points(spectrum));
    eframe::run_native(
        "iq-spectrum",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| crate::error::Error::Window(e.to_string()))
}

#[cfg(not(feature = "gui"))]
pub fn show(title: String, _spectrum: &Spectrum) -> Result<()> {
    log::warn!("Built without the `gui` feature; not plotting {}", title);
    Ok(())
}

#[cfg(feature = "gui")]
mod gui {
    use eframe::egui;
    use egui_plot::{Legend, Line, Plot, PlotPoints};

    pub struct SpectrumApp {
        title: String,
        points: Vec<[f64; 2]>,
    }

    impl SpectrumApp {
        pub fn new(title: String, points: Vec<[f64; 2]>) -> Self {
            Self { title, points }
        }
    }

    impl eframe::App for SpectrumApp {
        fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.heading(&self.title);

                Plot::new("spectrum")
                    .x_axis_label("Frequency (Hz)")
                    .y_axis_label("Amplitude (dB)")
                    .legend(Legend::default())
                    .show(ui, |plot_ui| {
                        let points = PlotPoints::from(self.points.clone());
                        plot_ui.line(Line::new("Spectrum", points).color(egui::Color32::BLUE));
                    });
            });
        }
    }
}
