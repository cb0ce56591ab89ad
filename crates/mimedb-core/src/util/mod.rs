pub mod path;
pub mod media_type;

pub use path::extension_of;
pub use media_type::bare_type;
