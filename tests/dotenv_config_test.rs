//! Loading connector credentials from a `.env` file.

use std::io::Write;

use advantage::prelude::*;

#[test]
fn config_from_dotenv_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "AC_KEY=dotenv-key").unwrap();
    writeln!(file, "AC_ENDPOINT=https://advantage.example.test").unwrap();

    dotenvy::from_path_override(file.path()).unwrap();

    let config = AdvantageConfig::from_env().unwrap();
    let client = AdvantageClient::with_config(config).unwrap();
    assert!(client.is_configured());
    assert_eq!(client.endpoint(), "https://advantage.example.test");
}
