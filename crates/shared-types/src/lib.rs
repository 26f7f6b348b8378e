pub mod error;
pub mod feature_flags;

// Absence tracking domain
pub mod absence;
pub mod classe;

pub use error::*;
pub use feature_flags::*;

pub use absence::*;
pub use classe::*;
