//! Domain services for Wildfire Watch.
//!
//! Services contain pure business logic that operates on domain models.

pub mod map;
pub mod notification;

pub use map::{frame, project, MapFrame, MapMarker};
pub use notification::{derive, NotificationDraft, NotificationType};
