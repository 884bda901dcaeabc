mod config_io;

pub use config_io::{config_dir, config_path, load_config, load_config_from, save_config_to};
