pub mod delete;
pub mod list;
pub mod show;

pub use delete::handle_delete;
pub use list::handle_list;
pub use show::handle_show;
