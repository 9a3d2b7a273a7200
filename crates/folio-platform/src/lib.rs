pub mod browser;
pub mod paths;

pub use browser::open_external;
pub use paths::{config_dir, config_file, data_dir, ensure_dirs, log_dir};
