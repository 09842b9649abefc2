pub mod detail;
pub mod list;

pub use detail::{LoadingMode, UserDetailView};
pub use list::render_list;
