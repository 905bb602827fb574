use clap::{Arg, Command};

pub const CMD_CART: &str = "cart";
pub const CMD_CART_SHOW: &str = "show";
pub const CMD_CART_ADD: &str = "add";
pub const CMD_CART_REMOVE: &str = "remove";
pub const CMD_CART_CLEAR: &str = "clear";

#[must_use]
pub fn cart() -> Command {
    Command::new(CMD_CART)
        .about("Manage the local cart")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new(CMD_CART_SHOW).about("Show cart lines and the total"))
        .subcommand(
            Command::new(CMD_CART_ADD)
                .about("Add a product variant to the cart")
                .arg(Arg::new("slug").help("Product slug").required(true))
                .arg(
                    Arg::new("color")
                        .short('c')
                        .long("color")
                        .help("Variant color")
                        .required(true),
                )
                .arg(
                    Arg::new("size")
                        .short('s')
                        .long("size")
                        .help("Variant size")
                        .required(true),
                )
                .arg(
                    Arg::new("quantity")
                        .short('q')
                        .long("quantity")
                        .help("Quantity to add")
                        .default_value("1")
                        .value_parser(clap::value_parser!(u32)),
                ),
        )
        .subcommand(
            Command::new(CMD_CART_REMOVE)
                .about("Remove a cart line by id")
                .arg(
                    Arg::new("id")
                        .help("Line id (a unique prefix is accepted)")
                        .required(true),
                ),
        )
        .subcommand(Command::new(CMD_CART_CLEAR).about("Remove every cart line"))
}
