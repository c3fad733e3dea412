pub mod impl_gui;
pub mod preview;
pub mod state;
