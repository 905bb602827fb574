use clap::{Arg, Command};

pub const CMD_PROFILE: &str = "profile";
pub const CMD_PROFILE_SHOW: &str = "show";
pub const CMD_PROFILE_UPDATE: &str = "update";
pub const CMD_PROFILE_DELETE: &str = "delete";
pub const CMD_PASSWORD: &str = "password";

#[must_use]
pub fn profile() -> Command {
    Command::new(CMD_PROFILE)
        .about("Manage the account profile")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new(CMD_PROFILE_SHOW).about("Show the current profile"))
        .subcommand(
            Command::new(CMD_PROFILE_UPDATE)
                .about("Update profile fields")
                .arg(
                    Arg::new("username")
                        .short('u')
                        .long("username")
                        .help("New username"),
                )
                .arg(
                    Arg::new("first-name")
                        .long("first-name")
                        .help("New first name"),
                )
                .arg(
                    Arg::new("last-name")
                        .long("last-name")
                        .help("New last name"),
                )
                .arg(
                    Arg::new("email")
                        .short('e')
                        .long("email")
                        .help("New email address"),
                )
                .arg(
                    Arg::new("phone-number")
                        .long("phone-number")
                        .help("New phone number"),
                ),
        )
        .subcommand(
            Command::new(CMD_PROFILE_DELETE)
                .about("Delete the account (requires the current password)")
                .arg(
                    Arg::new("password")
                        .short('p')
                        .long("password")
                        .help("Current password")
                        .env("MARYEMA_PASSWORD")
                        .hide_env_values(true)
                        .required(true),
                ),
        )
}

#[must_use]
pub fn password() -> Command {
    Command::new(CMD_PASSWORD)
        .about("Change the account password")
        .arg(
            Arg::new("old-password")
                .long("old-password")
                .help("Current password")
                .env("MARYEMA_OLD_PASSWORD")
                .hide_env_values(true)
                .required(true),
        )
        .arg(
            Arg::new("new-password")
                .long("new-password")
                .help("New password")
                .env("MARYEMA_NEW_PASSWORD")
                .hide_env_values(true)
                .required(true),
        )
        .arg(
            Arg::new("confirm-password")
                .long("confirm-password")
                .help("New password confirmation")
                .env("MARYEMA_CONFIRM_PASSWORD")
                .hide_env_values(true)
                .required(true),
        )
}
