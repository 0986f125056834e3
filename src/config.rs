use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use tracing::{info, warn};

/// File the application reads when `DICTIONARY_FILE_PATH` is unset or blank.
pub const DEFAULT_DICTIONARY_PATH: &str = "dictionary_2025S1.txt";

pub struct Config {
    pub dictionary_path: PathBuf,
}

pub fn load_config() -> Config {
    info!("Loading configuration");

    // Load environment variables
    dotenv().ok();

    let dictionary_path = dictionary_path_from(env::var("DICTIONARY_FILE_PATH").ok());

    Config { dictionary_path }
}

/// Unset and blank values both fall back to the default file
fn dictionary_path_from(value: Option<String>) -> PathBuf {
    match value {
        Some(path) if !path.trim().is_empty() => PathBuf::from(path),
        Some(_) => {
            warn!(
                "DICTIONARY_FILE_PATH is blank, using {}",
                DEFAULT_DICTIONARY_PATH
            );
            PathBuf::from(DEFAULT_DICTIONARY_PATH)
        }
        None => PathBuf::from(DEFAULT_DICTIONARY_PATH),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dictionary_path() {
        let path = dictionary_path_from(None);
        assert_eq!(path, PathBuf::from("dictionary_2025S1.txt"));
    }

    #[test]
    fn test_custom_dictionary_path() {
        let path = dictionary_path_from(Some("./data/words.txt".to_string()));
        assert_eq!(path, PathBuf::from("./data/words.txt"));
    }

    #[test]
    fn test_blank_dictionary_path_uses_default() {
        assert_eq!(
            dictionary_path_from(Some(String::new())),
            PathBuf::from(DEFAULT_DICTIONARY_PATH)
        );
        assert_eq!(
            dictionary_path_from(Some("  \t".to_string())),
            PathBuf::from(DEFAULT_DICTIONARY_PATH)
        );
    }
}
