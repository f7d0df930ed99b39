use std::env::current_dir;
use std::path::PathBuf;


/// Returns the default configuration file path, which is at
/// `{current directory}/data/configuration.toml`.
pub(crate) fn get_default_configuration_file_path() -> PathBuf {
    let base_directory = current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let configuration_file_path = base_directory.join("data/configuration.toml");

    dunce::canonicalize(&configuration_file_path).unwrap_or(configuration_file_path)
}
