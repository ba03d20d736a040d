use eframe::egui::{self, Align, Button, Color32, Layout, RichText, Stroke, Ui};

use crate::catalog::CategoryFilter;
use crate::galaxy::palette::BRAND_PURPLE;

use super::super::ViewModel;

const SOURCE_URL: &str = "https://github.com/portdeveloper/monad-ecosystem";

impl ViewModel {
    pub(in crate::app) fn draw_filter_bar(&mut self, ui: &mut Ui) {
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            let search_width = ui.available_width().min(640.0);
            let search_response = ui.add(
                egui::TextEdit::singleline(&mut self.search_input)
                    .hint_text("Search the Monadverse...")
                    .desired_width(search_width),
            );
            if search_response.changed() && self.filter.set_search_term(&self.search_input) {
                self.galaxy_dirty = true;
            }

            ui.add_space(8.0);
            ui.horizontal_wrapped(|ui| {
                for choice in CategoryFilter::choices() {
                    let active = self.filter.category() == choice;
                    let text = RichText::new(choice.label().to_uppercase()).strong().color(if active {
                        Color32::WHITE
                    } else {
                        Color32::from_gray(160)
                    });
                    let button = if active {
                        Button::new(text)
                            .fill(BRAND_PURPLE)
                            .stroke(Stroke::new(1.0, BRAND_PURPLE))
                    } else {
                        Button::new(text)
                            .fill(Color32::from_black_alpha(100))
                            .stroke(Stroke::new(1.0, Color32::from_gray(60)))
                    };

                    if ui.add(button).clicked() && self.filter.set_category(choice) {
                        self.galaxy_dirty = true;
                    }
                }
            });
        });
        ui.add_space(8.0);
    }

    pub(in crate::app) fn draw_footer(&mut self, ui: &mut Ui) {
        let spotlight = self.catalog.spotlight().cloned();

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new("⚡ SMART SUGGESTION").small().strong().color(BRAND_PURPLE));
                match &spotlight {
                    Some(project) => {
                        ui.horizontal_wrapped(|ui| {
                            ui.label("Based on trending activity,");
                            if ui.link(RichText::new(project.name.as_str()).strong()).clicked() {
                                self.selection.select(project.clone());
                            }
                            let sector = project
                                .category
                                .map_or("wider", |category| category.label());
                            ui.label(format!("is gaining traction in the {sector} sector."));
                        });
                    }
                    None => {
                        ui.label("The catalog is empty.");
                    }
                }
            });

            ui.with_layout(Layout::right_to_left(Align::Max), |ui| {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(format!("V {} // MAINNET READY", env!("CARGO_PKG_VERSION")))
                            .small()
                            .monospace()
                            .color(Color32::from_gray(120)),
                    );
                    ui.hyperlink_to(RichText::new("Open Source ↗").small(), SOURCE_URL);
                    ui.label(
                        RichText::new(format!("catalog: {}", self.catalog.source().describe()))
                            .small()
                            .color(Color32::from_gray(90)),
                    );
                });
            });
        });
        ui.add_space(6.0);
    }
}
