pub mod absence_form;
pub mod absence_list;
pub mod class_view;
pub mod dashboard;
pub mod home;
pub mod tab_nav;

pub use class_view::ClassView;
pub use dashboard::Dashboard;
pub use home::Home;
pub use tab_nav::TabNav;
