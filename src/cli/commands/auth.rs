use clap::{Arg, Command};

pub const CMD_LOGIN: &str = "login";
pub const CMD_REGISTER: &str = "register";
pub const CMD_LOGOUT: &str = "logout";

#[must_use]
pub fn login() -> Command {
    Command::new(CMD_LOGIN)
        .about("Log in and store the session cookies")
        .arg(
            Arg::new("username")
                .short('u')
                .long("username")
                .help("Account username")
                .env("MARYEMA_USERNAME")
                .required(true),
        )
        .arg(
            Arg::new("password")
                .short('p')
                .long("password")
                .help("Account password")
                .env("MARYEMA_PASSWORD")
                .hide_env_values(true)
                .required(true),
        )
}

#[must_use]
pub fn register() -> Command {
    Command::new(CMD_REGISTER)
        .about("Create a new account")
        .arg(
            Arg::new("username")
                .short('u')
                .long("username")
                .help("Account username")
                .required(true),
        )
        .arg(
            Arg::new("email")
                .short('e')
                .long("email")
                .help("Account email address")
                .required(true),
        )
        .arg(
            Arg::new("first-name")
                .long("first-name")
                .help("First name")
                .default_value(""),
        )
        .arg(
            Arg::new("last-name")
                .long("last-name")
                .help("Last name")
                .default_value(""),
        )
        .arg(
            Arg::new("phone-number")
                .long("phone-number")
                .help("Phone number")
                .default_value(""),
        )
        .arg(
            Arg::new("password")
                .short('p')
                .long("password")
                .help("Account password")
                .env("MARYEMA_PASSWORD")
                .hide_env_values(true)
                .required(true),
        )
        .arg(
            Arg::new("confirm-password")
                .long("confirm-password")
                .help("Password confirmation")
                .env("MARYEMA_CONFIRM_PASSWORD")
                .hide_env_values(true)
                .required(true),
        )
}

#[must_use]
pub fn logout() -> Command {
    Command::new(CMD_LOGOUT).about("Log out and clear the stored session")
}
