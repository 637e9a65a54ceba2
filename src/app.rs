//! App shell: top bar, About window, screenshot export and the eframe entry
//! point. The canvas widget does the actual interaction and painting; this
//! module is chrome around it.

use eframe::egui;
use egui::ViewportCommand;
use image::{Rgba, RgbaImage};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::canvas::ParagramCanvas;
use crate::color_scheme::ColorScheme;
use crate::config::ParagramConfig;
use crate::geometry;
use crate::persistence::{self, SettingsSerde};

const ABOUT_TEXT: &str = "Paragram lets you place three arbitrary points on the canvas. \
As you place them, a marker with the point's coordinates appears at each location.\n\n\
Once three points are set, the parallelogram spanned by them is drawn (the fourth \
corner is derived from the other three), together with a circle that has the same \
area as the parallelogram, centered at the quadrilateral's center of mass.\n\n\
Drag any point to reshape the figures; the shapes and their areas update live. \
Reset clears the canvas so three new points can be chosen.";

/// Main application state.
pub struct ParagramApp {
    canvas: ParagramCanvas,
    color_scheme: ColorScheme,
    heading: Option<String>,
    settings_path: Option<PathBuf>,
    show_about: bool,
    /// Apply the color scheme's visuals on the next frame.
    scheme_dirty: bool,
    request_window_shot: bool,
    /// Most recent viewport screenshot, retained after a Save PNG.
    pub last_viewport_capture: Option<Arc<egui::ColorImage>>,
}

impl ParagramApp {
    /// Build the app from a config, loading persisted settings when a
    /// settings file exists.
    pub fn new(cfg: ParagramConfig) -> Self {
        let mut cfg = cfg;
        if let Some(path) = cfg.settings_path.clone() {
            if path.exists() {
                match persistence::load_settings(&path) {
                    Ok(settings) => settings.apply_to(&mut cfg),
                    Err(e) => {
                        warn!("failed to load settings from {}: {e}", path.display());
                    }
                }
            }
        }
        Self {
            canvas: ParagramCanvas::from_config(&cfg),
            color_scheme: cfg.color_scheme.clone(),
            heading: cfg.heading.clone(),
            settings_path: cfg.settings_path.clone(),
            show_about: false,
            scheme_dirty: true,
            request_window_shot: false,
            last_viewport_capture: None,
        }
    }

    pub fn canvas(&self) -> &ParagramCanvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut ParagramCanvas {
        &mut self.canvas
    }

    /// Clear the selection and redraw an empty canvas on the next frame.
    pub fn reset(&mut self) {
        self.canvas.reset();
    }

    /// Write the current settings to the configured settings file.
    fn persist_settings(&self) {
        let Some(path) = &self.settings_path else {
            return;
        };
        let settings = SettingsSerde {
            color_scheme: (&self.color_scheme).into(),
            marker_radius: self.canvas.marker_radius(),
            hit_radius: self.canvas.hit_radius(),
            label_font_size: self.canvas.label_font_size(),
        };
        if let Err(e) = persistence::save_settings(path, &settings) {
            error!("failed to save settings to {}: {e}", path.display());
        }
    }

    /// One-line interaction hint / readout for the top bar.
    fn status_line(&self) -> String {
        let selection = self.canvas.selection();
        match selection.full_points() {
            None => match selection.len() {
                0 => "Click anywhere to place the first point".to_string(),
                1 => "Click to place the second point".to_string(),
                _ => "Click to place the third point".to_string(),
            },
            Some([p1, p2, p3]) => {
                let area = geometry::parallelogram_area(p1, p2, p3);
                let radius = geometry::equal_area_radius(area);
                match selection.dragging_index() {
                    Some(index) => format!(
                        "Dragging P{}: area {:.1} px², circle radius {:.1} px",
                        index + 1,
                        area,
                        radius
                    ),
                    None => format!(
                        "Drag a point to reshape. Area {:.1} px², circle radius {:.1} px",
                        area, radius
                    ),
                }
            }
        }
    }

    /// Collect a completed viewport screenshot (if any) and offer to save it
    /// as PNG via a file dialog.
    fn handle_screenshot_events(&mut self, ctx: &egui::Context) {
        let Some(image_arc) = ctx.input(|i| {
            i.events.iter().rev().find_map(|e| {
                if let egui::Event::Screenshot { image, .. } = e {
                    Some(image.clone())
                } else {
                    None
                }
            })
        }) else {
            return;
        };
        self.last_viewport_capture = Some(image_arc.clone());
        let default_name = format!("paragram_{}.png", chrono::Local::now().format("%Y%m%d_%H%M%S"));
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name(&default_name)
            .save_file()
        {
            let egui::ColorImage { size: [w, h], pixels, .. } = &*image_arc;
            let mut out = RgbaImage::new(*w as u32, *h as u32);
            for y in 0..*h {
                for x in 0..*w {
                    let p = pixels[y * *w + x];
                    out.put_pixel(x as u32, y as u32, Rgba([p.r(), p.g(), p.b(), p.a()]));
                }
            }
            match out.save(&path) {
                Ok(()) => info!("saved screenshot to {}", path.display()),
                Err(e) => error!("failed to save screenshot: {e}"),
            }
        }
    }
}

impl eframe::App for ParagramApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.scheme_dirty {
            self.color_scheme.apply(ctx);
            self.scheme_dirty = false;
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(heading) = &self.heading {
                    ui.heading(heading);
                    ui.separator();
                }
                if ui.button("Reset").clicked() {
                    self.canvas.reset();
                }
                if ui.button("About").clicked() {
                    self.show_about = !self.show_about;
                }
                if ui
                    .button("Save PNG")
                    .on_hover_text("Take a viewport screenshot")
                    .clicked()
                {
                    self.request_window_shot = true;
                }
                ui.separator();
                ui.label("Theme:");
                let mut selected = self.color_scheme.clone();
                egui::ComboBox::from_id_salt("color_scheme")
                    .selected_text(selected.label())
                    .show_ui(ui, |ui| {
                        for scheme in ColorScheme::all() {
                            ui.selectable_value(&mut selected, scheme.clone(), scheme.label());
                        }
                    });
                if selected != self.color_scheme {
                    self.color_scheme = selected;
                    self.scheme_dirty = true;
                    self.persist_settings();
                }
                ui.separator();
                ui.label(self.status_line());
            });
        });

        if self.show_about {
            egui::Window::new("About")
                .open(&mut self.show_about)
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.set_max_width(420.0);
                    ui.label(ABOUT_TEXT);
                });
        }

        let colors = self.color_scheme.canvas_colors();
        egui::CentralPanel::default().show(ctx, |ui| {
            self.canvas.show(ui, &colors);
        });

        // Perform deferred window screenshot (after the UI is drawn). The
        // result arrives on a later frame as Event::Screenshot.
        if self.request_window_shot {
            self.request_window_shot = false;
            ctx.send_viewport_cmd(ViewportCommand::Screenshot(Default::default()));
        }
        self.handle_screenshot_events(ctx);
    }
}

/// Launch the app in a native window.
///
/// Builds a [`ParagramApp`] from `cfg`, opens a native window and enters the
/// eframe event loop. The call blocks until the window is closed.
pub fn run_paragram(mut cfg: ParagramConfig) -> eframe::Result<()> {
    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Set a reasonable default window size if one is not provided by config.
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(1100.0, 800.0));
    }

    let app = ParagramApp::new(cfg);
    eframe::run_native(&title, opts, Box::new(|_cc| Ok(Box::new(app))))
}
