pub mod composer;
pub mod header;
pub mod hints;
pub mod join;
pub mod quit_menu;
pub mod transcript;

pub use composer::Composer;
pub use header::Header;
pub use hints::Hints;
pub use join::JoinView;
pub use quit_menu::QuitMenuPopup;
pub use transcript::Transcript;
