use eframe::egui::{self, Align, Color32, Context, Layout, RichText};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::auth::AuthGate;
use crate::catalog::Catalog;
use crate::filter::FilterState;
use crate::galaxy::palette::{BRAND_PURPLE, DEFI_GREEN};
use crate::selection::SelectionState;

use super::super::render_utils::draw_brand_mark;
use super::super::scene::OrbitCamera;
use super::super::{LaunchOptions, ViewModel};

impl ViewModel {
    pub(in crate::app) fn new(catalog: Catalog, launch: &LaunchOptions) -> Self {
        let mut rng = match launch.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let stars = Self::default_starfield(&mut rng);

        Self {
            catalog,
            auth: AuthGate::default(),
            login_input: launch.wallet_hint.clone(),
            login_error: None,
            filter: FilterState::default(),
            search_input: String::new(),
            selection: SelectionState::default(),
            camera: OrbitCamera::default(),
            rng,
            galaxy_dirty: true,
            layout_revision: 0,
            scene: None,
            stars,
        }
    }

    pub(in crate::app) fn show(&mut self, ctx: &Context) {
        if !self.auth.is_authenticated() {
            self.draw_login(ctx);
            return;
        }

        if self.galaxy_dirty {
            self.rebuild_galaxy();
        }

        let mut logout_requested = false;
        let mut reshuffle_requested = false;
        let galaxy_text = self.visible_galaxy_text();
        let wallet = self.auth.session().map(|session| session.address.clone());

        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    draw_brand_mark(ui, 18.0);
                    ui.add_space(6.0);
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new("MONAD ODYSSEY")
                                .strong()
                                .size(22.0)
                                .color(Color32::WHITE),
                        );
                        ui.label(RichText::new("ECOSYSTEM DISCOVERY").small().color(BRAND_PURPLE));
                    });

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.button("Log out").clicked() {
                            logout_requested = true;
                        }
                        if let Some(address) = &wallet {
                            ui.label(RichText::new(address.short()).monospace())
                                .on_hover_text(address.to_string());
                            ui.label(RichText::new("●").color(DEFI_GREEN));
                        }
                        ui.separator();
                        if ui.button("Reshuffle").clicked() {
                            reshuffle_requested = true;
                        }
                        if let Some(text) = &galaxy_text {
                            ui.label(text.as_str());
                        }
                    });
                });
                ui.add_space(6.0);
            });

        egui::TopBottomPanel::top("filter_bar")
            .resizable(false)
            .show(ctx, |ui| self.draw_filter_bar(ui));

        egui::TopBottomPanel::bottom("footer")
            .resizable(false)
            .show(ctx, |ui| self.draw_footer(ui));

        if self.selection.selected().is_some() {
            egui::SidePanel::right("details")
                .resizable(true)
                .default_width(380.0)
                .show(ctx, |ui| self.draw_details(ui));
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.draw_scene(ui));

        if reshuffle_requested {
            self.galaxy_dirty = true;
        }
        if logout_requested {
            self.logout();
        }
    }

    pub(in crate::app) fn logout(&mut self) {
        self.auth.logout();
        self.selection.clear();
        self.login_error = None;
    }

    fn visible_galaxy_text(&self) -> Option<String> {
        self.scene.as_ref().map(|cache| {
            format!(
                "{} of {} projects / {} links",
                cache.galaxy.nodes.len(),
                self.catalog.len(),
                cache.galaxy.edges.len()
            )
        })
    }
}
