//! Static Configuration
//!
//! The page has no runtime configuration; everything it needs is fixed here.

use log::LevelFilter;

/// Menu data file, relative to the page
pub const MENU_URL: &str = "menu.json";

/// localStorage key holding the serialized cart
pub const CART_STORAGE_KEY: &str = "restaurantCart";

/// Currency label printed after every price
pub const CURRENCY: &str = "грн";

/// Category value that disables category filtering
pub const ALL_CATEGORIES: &str = "all";

/// Category filter buttons (value, label)
pub const CATEGORIES: &[(&str, &str)] = &[
    (ALL_CATEGORIES, "Усі"),
    ("soup", "Перші страви"),
    ("main", "Основні страви"),
    ("salad", "Салати"),
    ("dessert", "Десерти"),
    ("drinks", "Напої"),
];

/// First and last bookable hour (inclusive)
pub const OPENING_HOUR: u32 = 10;
pub const CLOSING_HOUR: u32 = 22;

/// Optional leading "+" followed by 10 to 12 digits
pub const PHONE_PATTERN: &str = r"^\+?[0-9]{10,12}$";

/// Class marking an image as lightbox-enabled
pub const GALLERY_ITEM_CLASS: &str = "gallery-item";

/// Gallery images (src, alt)
pub const GALLERY_IMAGES: &[(&str, &str)] = &[
    ("images/gallery/hall.jpg", "Зала ресторану"),
    ("images/gallery/terrace.jpg", "Літня тераса"),
    ("images/gallery/kitchen.jpg", "Відкрита кухня"),
    ("images/gallery/bar.jpg", "Барна стійка"),
    ("images/gallery/dessert.jpg", "Десерти від шефа"),
    ("images/gallery/evening.jpg", "Вечір у ресторані"),
];

pub const LOG_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Info
};
