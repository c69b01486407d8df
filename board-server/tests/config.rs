use board_server::config::{ServerConfig, DEFAULT_DB_PORT, DEFAULT_HTTP_PORT};
use std::collections::HashMap;
use std::path::PathBuf;

fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
    let env: HashMap<String, String> =
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    ServerConfig::from_lookup(|k| env.get(k).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let c = config_from(&[]);
    assert_eq!(c.db_host, "localhost");
    assert_eq!(c.db_port, DEFAULT_DB_PORT);
    assert_eq!(c.db_name, "postgres");
    assert_eq!(c.db_user, "postgres");
    assert_eq!(c.db_password, "");
    assert_eq!(c.port, DEFAULT_HTTP_PORT);
    assert_eq!(c.messages_csv, None);
    assert_eq!(c.bind_addr().unwrap().to_string(), "0.0.0.0:5000");
}

#[test]
fn reads_rds_variables() {
    let c = config_from(&[
        ("RDS_HOSTNAME", "database"),
        ("RDS_PORT", "6543"),
        ("RDS_DB_NAME", "board"),
        ("RDS_USERNAME", "board_user"),
        ("RDS_PASSWORD", "pw"),
        ("PORT", "8010"),
        ("BIND_HOST", "127.0.0.1"),
        ("MESSAGES_CSV", "/messages.csv"),
    ]);
    assert_eq!(c.db_host, "database");
    assert_eq!(c.db_port, 6543);
    assert_eq!(c.db_name, "board");
    assert_eq!(c.db_user, "board_user");
    assert_eq!(c.db_password, "pw");
    assert_eq!(c.messages_csv, Some(PathBuf::from("/messages.csv")));
    assert_eq!(c.bind_addr().unwrap().to_string(), "127.0.0.1:8010");

    let opts = c.connect_options();
    assert_eq!(opts.get_host(), "database");
    assert_eq!(opts.get_port(), 6543);
    assert_eq!(opts.get_database(), Some("board"));
    assert_eq!(opts.get_username(), "board_user");
}

// porta non numerica o variabile vuota: si torna al default
#[test]
fn bad_or_empty_values_fall_back() {
    let c = config_from(&[("RDS_PORT", "abc"), ("PORT", ""), ("RDS_USERNAME", "")]);
    assert_eq!(c.db_port, DEFAULT_DB_PORT);
    assert_eq!(c.port, DEFAULT_HTTP_PORT);
    assert_eq!(c.db_user, "postgres");
}

#[test]
fn invalid_bind_host_is_an_error() {
    let c = config_from(&[("BIND_HOST", "not a host")]);
    assert!(c.bind_addr().is_err());
}
