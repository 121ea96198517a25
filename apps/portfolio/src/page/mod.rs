// Portfolio page: static profile content and the HTML renderer.

pub mod handlers;
pub mod profile;
pub mod render;
