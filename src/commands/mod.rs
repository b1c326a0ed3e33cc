pub mod list;
pub mod passthrough;

pub use list::handle_list;
pub use passthrough::handle_passthrough;
