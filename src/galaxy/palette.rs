use eframe::egui::Color32;

use crate::catalog::Category;

pub const BRAND_PURPLE: Color32 = Color32::from_rgb(0x83, 0x6e, 0xf9);
pub const BRAND_DARK: Color32 = Color32::from_rgb(0x20, 0x00, 0x52);
pub const BRAND_LIGHT: Color32 = Color32::from_rgb(0xd9, 0xd1, 0xfa);
pub const SPACE_BLACK: Color32 = Color32::from_rgb(0x05, 0x05, 0x05);

pub const DEFI_GREEN: Color32 = Color32::from_rgb(0x4a, 0xde, 0x80);
pub const NFT_PINK: Color32 = Color32::from_rgb(0xf4, 0x72, 0xb6);
pub const GAMING_YELLOW: Color32 = Color32::from_rgb(0xfa, 0xcc, 0x15);
pub const INFRASTRUCTURE_BLUE: Color32 = Color32::from_rgb(0x60, 0xa5, 0xfa);
pub const WALLET_VIOLET: Color32 = Color32::from_rgb(0xa7, 0x8b, 0xfa);

pub fn category_color(category: Option<Category>) -> Color32 {
    match category {
        Some(Category::DeFi) => DEFI_GREEN,
        Some(Category::Nft) => NFT_PINK,
        Some(Category::Gaming) => GAMING_YELLOW,
        Some(Category::Infrastructure) => INFRASTRUCTURE_BLUE,
        Some(Category::Wallet) => WALLET_VIOLET,
        Some(Category::Social) | None => BRAND_PURPLE,
    }
}
