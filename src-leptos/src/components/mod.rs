//! Reusable UI components

mod button;
mod form_field;
mod list_status;
mod modal;
mod nav_card;
mod notification;
mod page_header;
mod select;
mod sidebar;

pub use button::{Button, ButtonVariant};
pub use form_field::{field_error, text_binding, CheckboxField, SelectField, TextAreaField, TextField};
pub use list_status::ListStatus;
pub use modal::Modal;
pub use nav_card::NavCard;
pub use notification::NotificationBanner;
pub use page_header::{PageHeader, QuickFilter};
pub use select::Select;
pub use sidebar::Sidebar;
