pub mod html;
pub mod text;
