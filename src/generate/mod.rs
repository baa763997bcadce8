/// The app's quote library and background palettes.
pub mod catalog;
/// Launcher, adaptive, splash and favicon images.
pub mod icons;
/// Store-listing screenshots, feature graphic and quote cards.
pub mod store_listing;
