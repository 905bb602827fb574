use clap::{Arg, ArgAction, Command};

pub const CMD_PRODUCTS: &str = "products";
pub const CMD_PRODUCTS_LIST: &str = "list";
pub const CMD_PRODUCTS_SHOW: &str = "show";

#[must_use]
pub fn products() -> Command {
    Command::new(CMD_PRODUCTS)
        .about("Browse the product catalog")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(CMD_PRODUCTS_LIST)
                .about("List products, optionally filtered")
                .arg(
                    Arg::new("division")
                        .short('d')
                        .long("division")
                        .help("Division filter; repeatable")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("category")
                        .short('c')
                        .long("category")
                        .help("Category filter ('all' matches everything)"),
                )
                .arg(
                    Arg::new("min-price")
                        .long("min-price")
                        .help("Lowest variant price to include")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    Arg::new("max-price")
                        .long("max-price")
                        .help("Highest variant price to include")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    Arg::new("search")
                        .short('s')
                        .long("search")
                        .help("Case-insensitive search over name and tags"),
                ),
        )
        .subcommand(
            Command::new(CMD_PRODUCTS_SHOW)
                .about("Show one product with its variants")
                .arg(Arg::new("slug").help("Product slug").required(true)),
        )
}
