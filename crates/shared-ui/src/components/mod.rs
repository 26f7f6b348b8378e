// Standalone components (no primitives)
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod skeleton;
pub mod stat_tile;
pub mod tab_bar;
pub mod textarea;

// Primitive wrappers
pub mod alert_dialog;
pub mod toast;

pub use alert_dialog::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use skeleton::*;
pub use stat_tile::*;
pub use tab_bar::*;
pub use textarea::*;
pub use toast::*;
