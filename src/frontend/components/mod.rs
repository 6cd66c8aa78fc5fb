//! Reusable UI components for the Ramsha landing page

mod feature_card;
mod feature_gallery;
mod footer;
mod hero;
mod nav;

pub use feature_card::FeatureCard;
pub use feature_gallery::FeatureGallery;
pub use footer::Footer;
pub use hero::HomepageHeader;
pub use nav::Nav;
