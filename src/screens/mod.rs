mod create_event;
mod event_detail;
mod home;
mod my_events;

pub use create_event::CreateEventScreen;
pub use event_detail::EventDetailScreen;
pub use home::HomeScreen;
pub use my_events::MyEventsScreen;
