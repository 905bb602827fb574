pub mod admin;
pub mod auth;
pub mod cart;
pub mod logging;
pub mod products;
pub mod profile;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};
use std::path::PathBuf;

pub const ARG_API_URL: &str = "api-url";
pub const ARG_SESSION_FILE: &str = "session-file";
pub const ARG_CART_FILE: &str = "cart-file";
pub const ARG_CATALOG: &str = "catalog";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("maryema")
        .about("Storefront client for the maryema shop")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_API_URL)
                .long("api-url")
                .help("Base URL of the shop API")
                .default_value("http://127.0.0.1:8000")
                .env("MARYEMA_API_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_SESSION_FILE)
                .long("session-file")
                .help("File holding the session cookies")
                .default_value(".maryema/session.json")
                .env("MARYEMA_SESSION_FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new(ARG_CART_FILE)
                .long("cart-file")
                .help("File holding the local cart")
                .default_value(".maryema/cart.json")
                .env("MARYEMA_CART_FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new(ARG_CATALOG)
                .long("catalog")
                .help("Product catalog JSON (defaults to the embedded catalog)")
                .env("MARYEMA_CATALOG")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .subcommand(auth::login())
        .subcommand(auth::register())
        .subcommand(auth::logout())
        .subcommand(profile::profile())
        .subcommand(profile::password())
        .subcommand(products::products())
        .subcommand(cart::cart())
        .subcommand(admin::admin());

    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "maryema");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Storefront client for the maryema shop".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_globals_default() {
        temp_env::with_vars(
            [
                ("MARYEMA_API_URL", None::<&str>),
                ("MARYEMA_SESSION_FILE", None),
                ("MARYEMA_CART_FILE", None),
            ],
            || {
                let command = new();
                let matches = command.get_matches_from(vec!["maryema", "logout"]);

                assert_eq!(
                    matches.get_one::<String>(ARG_API_URL).cloned(),
                    Some("http://127.0.0.1:8000".to_string())
                );
                assert_eq!(
                    matches.get_one::<PathBuf>(ARG_SESSION_FILE).cloned(),
                    Some(PathBuf::from(".maryema/session.json"))
                );
                assert_eq!(
                    matches.get_one::<PathBuf>(ARG_CART_FILE).cloned(),
                    Some(PathBuf::from(".maryema/cart.json"))
                );
                assert!(matches.get_one::<PathBuf>(ARG_CATALOG).is_none());
            },
        );
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("MARYEMA_API_URL", Some("https://shop.example.com")),
                ("MARYEMA_SESSION_FILE", Some("/tmp/maryema-session.json")),
                ("MARYEMA_LOG_LEVEL", Some("info")),
            ],
            || {
                let command = new();
                let matches = command.get_matches_from(vec!["maryema", "logout"]);

                assert_eq!(
                    matches.get_one::<String>(ARG_API_URL).cloned(),
                    Some("https://shop.example.com".to_string())
                );
                assert_eq!(
                    matches.get_one::<PathBuf>(ARG_SESSION_FILE).cloned(),
                    Some(PathBuf::from("/tmp/maryema-session.json"))
                );
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("MARYEMA_LOG_LEVEL", Some(level))], || {
                let command = new();
                let matches = command.get_matches_from(vec!["maryema", "logout"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        for index in 0..5 {
            temp_env::with_vars([("MARYEMA_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["maryema".to_string(), "logout".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    let v = format!("-{}", "v".repeat(index));
                    args.push(v);
                }

                let command = new();
                let matches = command.get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_subcommand_required() {
        let command = new();
        let result = command.try_get_matches_from(vec!["maryema"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_login_requires_credentials() {
        temp_env::with_vars(
            [
                ("MARYEMA_USERNAME", None::<&str>),
                ("MARYEMA_PASSWORD", None),
            ],
            || {
                let command = new();
                let result = command.try_get_matches_from(vec!["maryema", "login"]);
                assert_eq!(
                    result.map_err(|e| e.kind()),
                    Err(clap::error::ErrorKind::MissingRequiredArgument)
                );
            },
        );
    }

    #[test]
    fn test_products_list_filters() {
        let command = new();
        let matches = command.get_matches_from(vec![
            "maryema",
            "products",
            "list",
            "--division",
            "clothes",
            "--division",
            "accessories",
            "--category",
            "dresses",
            "--min-price",
            "100",
            "--max-price",
            "250",
            "--search",
            "krip",
        ]);

        let (_, matches) = matches.subcommand().unwrap();
        let (_, matches) = matches.subcommand().unwrap();

        let divisions: Vec<&String> = matches.get_many::<String>("division").unwrap().collect();
        assert_eq!(divisions, ["clothes", "accessories"]);
        assert_eq!(matches.get_one::<u32>("min-price").copied(), Some(100));
        assert_eq!(matches.get_one::<u32>("max-price").copied(), Some(250));
        assert_eq!(
            matches.get_one::<String>("search").cloned(),
            Some("krip".to_string())
        );
    }

    #[test]
    fn test_cart_add_defaults_quantity() {
        let command = new();
        let matches = command.get_matches_from(vec![
            "maryema", "cart", "add", "esdal", "--color", "black", "--size", "M",
        ]);

        let (_, matches) = matches.subcommand().unwrap();
        let (name, matches) = matches.subcommand().unwrap();

        assert_eq!(name, cart::CMD_CART_ADD);
        assert_eq!(
            matches.get_one::<String>("slug").cloned(),
            Some("esdal".to_string())
        );
        assert_eq!(matches.get_one::<u32>("quantity").copied(), Some(1));
    }

    #[test]
    fn test_admin_customers_page() {
        let command = new();
        let matches =
            command.get_matches_from(vec!["maryema", "admin", "customers", "--page", "3"]);

        let (_, matches) = matches.subcommand().unwrap();
        let (_, matches) = matches.subcommand().unwrap();

        assert_eq!(matches.get_one::<u32>("page").copied(), Some(3));
    }
}
