use eframe::egui::{self, Align, Color32, Layout, Margin, RichText, Ui};

use crate::catalog::Category;
use crate::galaxy::palette::{BRAND_DARK, BRAND_PURPLE, DEFI_GREEN};

use super::super::ViewModel;

const DEFAULT_BLURB: &str = "Explore this innovative project on the Monad blockchain. \
Connect your wallet to interact with the protocol directly.";

fn badge_colors(category: Option<Category>) -> (Color32, Color32) {
    match category {
        Some(Category::DeFi) => (
            Color32::from_rgb(0x14, 0x53, 0x2d),
            Color32::from_rgb(0x86, 0xef, 0xac),
        ),
        Some(Category::Nft) => (
            Color32::from_rgb(0x83, 0x18, 0x43),
            Color32::from_rgb(0xf9, 0xa8, 0xd4),
        ),
        _ => (
            Color32::from_rgb(0x31, 0x2e, 0x81),
            Color32::from_rgb(0xa5, 0xb4, 0xfc),
        ),
    }
}

fn stat_tile(ui: &mut Ui, label: &str, value: &str, color: Color32) {
    egui::Frame::new()
        .fill(Color32::from_white_alpha(8))
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(label.to_uppercase()).small().color(Color32::from_gray(120)));
            ui.label(RichText::new(value).monospace().color(color));
        });
}

impl ViewModel {
    pub(in crate::app) fn draw_details(&mut self, ui: &mut Ui) {
        let Some(project) = self.selection.selected().cloned() else {
            return;
        };

        ui.add_space(8.0);
        ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
            if ui.button("✕").on_hover_text("Close").clicked() {
                self.selection.clear();
            }
        });
        ui.add_space(12.0);

        let (badge_fill, badge_text) = badge_colors(project.category);
        let badge_label = project.category.map_or("Project", |category| category.label());
        egui::Frame::new()
            .fill(badge_fill)
            .inner_margin(Margin::symmetric(8, 3))
            .show(ui, |ui| {
                ui.label(RichText::new(badge_label.to_uppercase()).small().strong().color(badge_text));
            });

        ui.add_space(10.0);
        ui.label(RichText::new(project.name.as_str()).size(30.0).strong().color(Color32::WHITE));
        ui.add_space(8.0);
        ui.label(
            RichText::new(project.description.as_deref().unwrap_or(DEFAULT_BLURB))
                .color(Color32::from_gray(160)),
        );

        ui.add_space(16.0);
        egui::Frame::new()
            .fill(BRAND_DARK)
            .stroke(egui::Stroke::new(1.0, BRAND_PURPLE))
            .inner_margin(Margin::same(12))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.hyperlink_to(
                        RichText::new("LAUNCH APP ↗").strong().size(16.0),
                        project.url.as_str(),
                    );
                    ui.small(project.url.as_str());
                });
            });

        ui.add_space(16.0);
        ui.columns(2, |columns| {
            stat_tile(&mut columns[0], "Status", "Active", DEFI_GREEN);
            stat_tile(&mut columns[1], "Chain", "Monad", BRAND_PURPLE);
        });
    }
}
