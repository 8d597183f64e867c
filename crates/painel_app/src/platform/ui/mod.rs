pub mod constants;
pub mod html;
pub mod render;
pub mod terminal;
pub mod widgets;
