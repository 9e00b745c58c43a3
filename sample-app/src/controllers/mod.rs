pub mod home;

pub use home::{ActionResult, ErrorViewModel, HomeController};
