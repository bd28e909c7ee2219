mod event_card;
mod header;
mod hero_section;
mod page_background;
mod surface_card;

pub use event_card::EventCard;
pub use header::Header;
pub use hero_section::HeroSection;
pub use page_background::PageBackground;
pub use surface_card::SurfaceCard;
