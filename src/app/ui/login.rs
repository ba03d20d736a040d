use eframe::egui::{self, Color32, Context, Key, RichText};

use crate::galaxy::palette::{BRAND_PURPLE, SPACE_BLACK};

use super::super::ViewModel;
use super::super::render_utils::draw_brand_mark;

impl ViewModel {
    pub(in crate::app) fn draw_login(&mut self, ctx: &Context) {
        let mut connect_requested = false;

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(SPACE_BLACK))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space((ui.available_height() * 0.22).max(24.0));
                    draw_brand_mark(ui, 40.0);
                    ui.add_space(24.0);
                    ui.label(
                        RichText::new("MONAD ODYSSEY")
                            .size(36.0)
                            .strong()
                            .color(Color32::WHITE),
                    );
                    ui.label(
                        RichText::new("Enter the portal to discover the ecosystem.")
                            .color(Color32::from_gray(150)),
                    );
                    ui.add_space(24.0);

                    let field = ui.add(
                        egui::TextEdit::singleline(&mut self.login_input)
                            .hint_text("0x… wallet address")
                            .desired_width(360.0),
                    );
                    if field.changed() {
                        self.login_error = None;
                    }
                    if field.lost_focus() && ui.input(|input| input.key_pressed(Key::Enter)) {
                        connect_requested = true;
                    }

                    ui.add_space(10.0);
                    let button = egui::Button::new(
                        RichText::new("Connect Wallet")
                            .size(18.0)
                            .strong()
                            .color(Color32::BLACK),
                    )
                    .fill(Color32::WHITE)
                    .min_size(egui::vec2(360.0, 44.0));
                    if ui.add(button).clicked() {
                        connect_requested = true;
                    }

                    if let Some(message) = &self.login_error {
                        ui.add_space(6.0);
                        ui.label(RichText::new(message.as_str()).color(Color32::from_rgb(248, 113, 113)));
                    }

                    ui.add_space(18.0);
                    ui.label(
                        RichText::new("Powered by Privy • Secure Access")
                            .small()
                            .monospace()
                            .color(BRAND_PURPLE.gamma_multiply(0.6)),
                    );
                });
            });

        if connect_requested {
            self.connect_wallet();
        }
    }

    pub(in crate::app) fn connect_wallet(&mut self) {
        match self.auth.login(&self.login_input) {
            Ok(_) => {
                self.login_error = None;
                self.galaxy_dirty = true;
            }
            Err(error) => self.login_error = Some(error.to_string()),
        }
    }
}
