pub mod about_us;
pub mod chat_area;
pub mod input_bar;
pub mod sidebar;
