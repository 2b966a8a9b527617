//! Built-in widgets

pub mod notification_banner;
pub mod skip_link;

pub use notification_banner::NotificationBanner;
pub use skip_link::SkipLink;
