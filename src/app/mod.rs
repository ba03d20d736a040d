use std::sync::mpsc::{self, Receiver};
use std::thread;

use eframe::egui::{self, Context, Pos2, RichText, Visuals};
use glam::Vec3;
use log::{error, info};
use rand::rngs::StdRng;

use crate::auth::AuthGate;
use crate::catalog::{Catalog, CatalogSource, load_catalog};
use crate::filter::FilterState;
use crate::galaxy::palette::{BRAND_PURPLE, SPACE_BLACK};
use crate::galaxy::Galaxy;
use crate::selection::SelectionState;

use self::scene::OrbitCamera;

mod render_utils;
mod scene;
mod ui;

#[derive(Clone, Debug)]
pub struct LaunchOptions {
    pub source: CatalogSource,
    pub seed: Option<u64>,
    pub wallet_hint: String,
}

pub struct GalaxyApp {
    launch: LaunchOptions,
    state: AppState,
}

enum AppState {
    Loading {
        rx: Receiver<Result<Catalog, String>>,
    },
    Ready(Box<ViewModel>),
    Error(String),
}

struct ViewModel {
    catalog: Catalog,
    auth: AuthGate,
    login_input: String,
    login_error: Option<String>,
    filter: FilterState,
    search_input: String,
    selection: SelectionState,
    camera: OrbitCamera,
    rng: StdRng,
    galaxy_dirty: bool,
    layout_revision: u64,
    scene: Option<SceneCache>,
    stars: Vec<Vec3>,
}

struct SceneCache {
    galaxy: Galaxy,
    view_scratch: ViewScratch,
}

#[derive(Default)]
struct ViewScratch {
    projected: Vec<Option<ProjectedNode>>,
    draw_order: Vec<usize>,
}

#[derive(Clone, Copy, Debug)]
struct ProjectedNode {
    center: Pos2,
    radius: f32,
    depth: f32,
}

impl GalaxyApp {
    pub fn new(cc: &eframe::CreationContext<'_>, launch: LaunchOptions) -> Self {
        cc.egui_ctx.set_visuals(galaxy_visuals());
        let state = Self::start_load(launch.source.clone());
        Self { launch, state }
    }

    fn spawn_load(source: CatalogSource) -> Receiver<Result<Catalog, String>> {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            info!("loading project catalog from {}", source.describe());
            let result = load_catalog(&source).map_err(|error| format!("{error:#}"));
            let _ = tx.send(result);
        });

        rx
    }

    fn start_load(source: CatalogSource) -> AppState {
        AppState::Loading {
            rx: Self::spawn_load(source),
        }
    }
}

fn galaxy_visuals() -> Visuals {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = SPACE_BLACK;
    visuals.window_fill = SPACE_BLACK;
    visuals.extreme_bg_color = egui::Color32::from_rgb(12, 10, 20);
    visuals.hyperlink_color = BRAND_PURPLE;
    visuals.selection.bg_fill = BRAND_PURPLE;
    visuals
}

impl eframe::App for GalaxyApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;

        match &mut self.state {
            AppState::Loading { rx } => {
                if let Ok(result) = rx.try_recv() {
                    transition = Some(match result {
                        Ok(catalog) => {
                            AppState::Ready(Box::new(ViewModel::new(catalog, &self.launch)))
                        }
                        Err(message) => {
                            error!("catalog load failed: {message}");
                            AppState::Error(message)
                        }
                    });
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(ui.available_height() * 0.4);
                        ui.label(RichText::new("Initializing Link...").color(BRAND_PURPLE).size(18.0));
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
                ctx.request_repaint();
            }
            AppState::Error(message) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load the project catalog");
                    ui.add_space(6.0);
                    ui.label(message.as_str());
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        transition = Some(Self::start_load(self.launch.source.clone()));
                    }
                });
            }
            AppState::Ready(model) => model.show(ctx),
        }

        if let Some(next_state) = transition {
            self.state = next_state;
        }
    }
}
