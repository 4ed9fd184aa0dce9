pub mod error;
pub mod home;
pub mod listing_edit;
pub mod listing_index;
pub mod listing_new;
pub mod listing_show;
pub mod login;

pub use error::error_page;
pub use home::home_page;
pub use listing_edit::listing_edit_page;
pub use listing_index::listing_index_page;
pub use listing_new::listing_new_page;
pub use listing_show::listing_show_page;
pub use login::login_page;
