pub mod errors;
pub mod ffi;
pub mod settings;
pub mod value;

pub use errors::ArgumentError;
pub use settings::{WebField, WebSettings, WebSettingsBuilder};
pub use value::SettingValue;
