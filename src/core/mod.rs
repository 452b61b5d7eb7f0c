pub mod activity;
pub mod anim;
pub mod constants;
pub mod field;
pub mod labels;
pub mod transcript;

pub use activity::*;
pub use anim::*;
pub use constants::*;
pub use field::*;
pub use labels::*;
pub use transcript::*;
