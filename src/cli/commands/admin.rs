use clap::{Arg, Command};

pub const CMD_ADMIN: &str = "admin";
pub const CMD_ADMIN_CUSTOMERS: &str = "customers";

#[must_use]
pub fn admin() -> Command {
    Command::new(CMD_ADMIN)
        .about("Staff-only shop administration")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(CMD_ADMIN_CUSTOMERS)
                .about("List registered customers")
                .arg(
                    Arg::new("page")
                        .short('p')
                        .long("page")
                        .help("Result page, starting at 1")
                        .default_value("1")
                        .value_parser(clap::value_parser!(u32)),
                ),
        )
}
