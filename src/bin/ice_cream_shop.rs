use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;

use ice_cream_shop::logging;
use ice_cream_shop::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "ice-cream-shop", version, about = "Serve one ice cream order")]
struct Cli {
    /// TOML file with the shop name and default order
    #[arg(long)]
    config: Option<PathBuf>,

    /// Shop name, only used when the shop is first opened
    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    flavor: Option<String>,

    /// Topping to add (syrup, sprinkles); repeat to stack toppings
    #[arg(long = "topping")]
    toppings: Vec<String>,

    /// Where to eat it (shop, park, beach)
    #[arg(long)]
    place: Option<String>,

    /// List flavors, toppings and places, then exit
    #[arg(long)]
    menu: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[arg(long)]
    no_color: bool,
}

impl Cli {
    /// Command line values take precedence over the config file.
    fn merge_order(&self, mut order: OrderConfig) -> OrderConfig {
        if let Some(flavor) = &self.flavor {
            order.flavor = flavor.clone();
        }
        if !self.toppings.is_empty() {
            order.toppings = self.toppings.clone();
        }
        if let Some(place) = &self.place {
            order.place = place.clone();
        }
        order
    }
}

fn print_menu(shop: &Shop) {
    println!("{}", shop.name().bold());
    println!("  {}", "Flavors:".cyan());
    for name in FlavorCatalog::names() {
        println!("    {}", name);
    }
    println!("  {}", "Toppings:".cyan());
    for kind in ToppingKind::ALL {
        if let Ok(phrase) = kind.phrase() {
            println!("    {:<10} {}", kind.key(), phrase);
        }
    }
    println!("  {}", "Places:".cyan());
    for place in Place::ALL {
        if let Ok(phrase) = place.select_place() {
            println!("    {:<10} {}", place.key(), phrase);
        }
    }
}

/// Serves one order. Returns the printed line, or `None` when nothing was
/// served: the menu was shown or the order was rejected. Setup failures are
/// the only errors.
fn run(cli: &Cli) -> anyhow::Result<Option<String>> {
    let config = ShopConfig::load_or_default(cli.config.as_deref())
        .context("could not set up the shop")?;

    let registry = ShopRegistry::new();
    let shop = registry.get_instance(cli.name.as_deref().unwrap_or(&config.name));

    if cli.menu {
        print_menu(shop);
        return Ok(None);
    }

    let served = Order::from_config(&cli.merge_order(config.order))
        .and_then(|order| serve_order(shop, &order));

    match served {
        Ok(line) => Ok(Some(line)),
        Err(err) if err.is_order_error() => {
            tracing::debug!(error = ?err, "order rejected");
            eprintln!("{}", err.to_string().red());
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    logging::init(cli.verbose, !cli.no_color);

    run(&cli)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> Cli {
        let argv = std::iter::once("ice-cream-shop").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_no_flags_keeps_config_order() {
        let cli = parse(&[]);
        let config = OrderConfig {
            flavor: "vanilla".into(),
            toppings: vec!["sprinkles".into()],
            place: "park".into(),
        };
        assert_eq!(cli.merge_order(config.clone()), config);
    }

    #[test]
    fn test_flavor_and_place_override_config() {
        let cli = parse(&["--flavor", "strawberry", "--place", "shop"]);
        let merged = cli.merge_order(OrderConfig::default());
        assert_eq!(merged.flavor, "strawberry");
        assert_eq!(merged.place, "shop");
        assert_eq!(merged.toppings, vec!["syrup"]);
    }

    #[test]
    fn test_toppings_replace_config_toppings() {
        let cli = parse(&["--topping", "sprinkles", "--topping", "sprinkles"]);
        let merged = cli.merge_order(OrderConfig::default());
        assert_eq!(merged.toppings, vec!["sprinkles", "sprinkles"]);
    }

    #[test]
    fn test_verbose_counts() {
        assert_eq!(parse(&[]).verbose, 0);
        assert_eq!(parse(&["-vv"]).verbose, 2);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let args = ["ice-cream-shop", "--sauce", "caramel"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn test_run_without_flags_serves_canonical_line() {
        let served = run(&parse(&[])).unwrap();
        assert_eq!(
            served.as_deref(),
            Some("Serving chocolate with chocolate syrup with  at the beach.")
        );
    }

    #[test]
    fn test_run_stacks_toppings_in_flag_order() {
        let cli = parse(&[
            "--topping",
            "sprinkles",
            "--topping",
            "syrup",
            "--place",
            "park",
        ]);
        let served = run(&cli).unwrap().unwrap();
        assert_eq!(
            served,
            "Serving chocolate with chocolate sprinkles with chocolate syrup with  in the park."
        );
    }

    #[test]
    fn test_run_order_errors_are_not_failures() {
        assert_eq!(run(&parse(&["--flavor", "mint"])).unwrap(), None);
        assert_eq!(run(&parse(&["--topping", "caramel"])).unwrap(), None);
        assert_eq!(run(&parse(&["--place", "moon"])).unwrap(), None);
    }

    #[test]
    fn test_run_config_error_fails() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "name = ").unwrap();
        let path = file.path().to_str().unwrap();

        let err = run(&parse(&["--config", path])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ShopError>(),
            Some(ShopError::Config { .. })
        ));
    }

    #[test]
    fn test_run_uses_config_order() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "name = \"Gelato Corner\"\n[order]\nflavor = \"vanilla\"").unwrap();
        let path = file.path().to_str().unwrap();

        let served = run(&parse(&["--config", path, "--name", "Frosty Bites"])).unwrap();
        assert_eq!(
            served.as_deref(),
            Some("Serving vanilla with chocolate syrup with  at the beach.")
        );
    }

    #[test]
    fn test_run_menu_serves_nothing() {
        assert_eq!(run(&parse(&["--menu"])).unwrap(), None);
    }
}
