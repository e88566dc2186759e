pub mod files;
pub mod settings;
pub mod store;

pub use files::{
    atomic_write, config_file, ensure_app_dir, init_local_app_dir, log_file, read_file,
    storage_file,
};
pub use settings::{load_settings, save_settings, AppSettings};
pub use store::LocalStore;
