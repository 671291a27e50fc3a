//! # Terminal Shell
//!
//! A line-oriented renderer for the storefront: prints product tiles, the
//! cart badge and the cart panel, and turns typed lines into commands.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin line ──► Command::from_str ──► Shell::execute ──► commands::*   │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                        render_* ──► stdout, then drain the toast outbox │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use cosmic_core::{CartTotals, Product, ProductId};
use thiserror::Error;
use tracing::warn;

use crate::commands::{cart, config, product};
use crate::commands::cart::CartResponse;
use crate::notify::{LogNotifier, Notifier, Outbox};
use crate::state::{CartState, CatalogState, ConfigState};

const HELP: &str = "\
Commands:
  catalog            show all products
  add <id>           add a product to the cart
  inc <id>           increase quantity by one
  dec <id>           decrease quantity by one
  remove <id>        remove a line from the cart
  cart [--json]      show the cart
  checkout           show the order summary
  config             show the current configuration
  help               show this message
  quit               leave the store";

// =============================================================================
// Command Parsing
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Catalog,
    Add(ProductId),
    Increment(ProductId),
    Decrement(ProductId),
    Remove(ProductId),
    Cart { json: bool },
    Checkout,
    Config,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command `{0}`")]
    Unknown(String),

    #[error("`{0}` needs a product id")]
    MissingId(String),

    #[error("`{0}` is not a product id")]
    InvalidId(String),

    #[error("Unexpected argument `{0}`")]
    UnexpectedArgument(String),
}

fn parse_id(verb: &str, raw: Option<&str>) -> Result<ProductId, ParseCommandError> {
    let raw = raw.ok_or_else(|| ParseCommandError::MissingId(verb.to_string()))?;
    raw.parse::<u32>()
        .map(ProductId::new)
        .map_err(|_| ParseCommandError::InvalidId(raw.to_string()))
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words
            .next()
            .ok_or(ParseCommandError::Empty)?
            .to_ascii_lowercase();

        let command = match verb.as_str() {
            "catalog" | "products" => Command::Catalog,
            "add" => Command::Add(parse_id(&verb, words.next())?),
            "inc" | "+" => Command::Increment(parse_id(&verb, words.next())?),
            "dec" | "-" => Command::Decrement(parse_id(&verb, words.next())?),
            "remove" | "rm" => Command::Remove(parse_id(&verb, words.next())?),
            "cart" => match words.next() {
                None => Command::Cart { json: false },
                Some("--json") => Command::Cart { json: true },
                Some(other) => return Err(ParseCommandError::UnexpectedArgument(other.to_string())),
            },
            "checkout" => Command::Checkout,
            "config" => Command::Config,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(ParseCommandError::Unknown(verb.clone())),
        };

        if let Some(extra) = words.next() {
            return Err(ParseCommandError::UnexpectedArgument(extra.to_string()));
        }

        Ok(command)
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Store name plus the cart badge. The badge is hidden while the cart is empty.
pub fn render_header(config: &ConfigState, totals: &CartTotals) -> String {
    if totals.total_items > 0 {
        format!("✨ {}  [cart: {}]", config.store_name, totals.total_items)
    } else {
        format!("✨ {}  [cart]", config.store_name)
    }
}

/// One line per product tile.
pub fn render_catalog(config: &ConfigState, products: &[Product]) -> String {
    let mut out = String::new();
    for p in products {
        let _ = writeln!(
            out,
            "  [{:>3}] {:<24} {:>12}  ({})",
            p.id.get(),
            p.name,
            config.format_price(p.price),
            p.category
        );
    }
    out
}

/// The cart panel: lines with the unit price captured when the line was
/// created, their +/- controls, the line total and the cart total.
pub fn render_cart(config: &ConfigState, response: &CartResponse) -> String {
    if response.items.is_empty() {
        return "  Your cart is empty\n".to_string();
    }

    let mut out = String::new();
    for item in &response.items {
        let dec = if item.can_decrement() { "[-]" } else { "[ ]" };
        let _ = writeln!(
            out,
            "  [{:>3}] {:<24} {:>12}  {} x{} [+]  {:>12}",
            item.id.get(),
            item.name,
            config.format_price(item.price),
            dec,
            item.quantity,
            config.format_price(item.line_total())
        );
    }
    let _ = writeln!(
        out,
        "  Total ({} items): {}",
        response.totals.total_items,
        config.format_price(response.totals.total_price)
    );
    out
}

// =============================================================================
// Shell
// =============================================================================

/// One shopper session driven from a terminal.
pub struct Shell {
    config: ConfigState,
    catalog: CatalogState,
    cart: CartState,
    outbox: Outbox,
}

impl Shell {
    pub fn new(config: ConfigState, catalog: CatalogState, cart: CartState) -> Self {
        Shell {
            config,
            catalog,
            cart,
            outbox: Outbox::new(),
        }
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    /// Reads commands until `quit` or end of input.
    ///
    /// A line that is not valid UTF-8 is reported and skipped like any other
    /// unparsable line. Only real read/write failures end the session early.
    pub fn run<R, W>(&mut self, mut input: R, out: &mut W) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(out, "{}", render_header(&self.config, &self.cart.cart().totals()))?;
        self.execute(Command::Catalog, out)?;
        writeln!(out, "Type `help` for commands.")?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(err) => {
                    warn!(error = %err, "input line is not valid UTF-8");
                    writeln!(out, "Not a command. Type `help` for commands.")?;
                    continue;
                }
            };
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command, out)?,
                Err(err) => {
                    warn!(input = %line.trim(), error = %err, "unparsed command");
                    writeln!(out, "{}. Type `help` for commands.", err)?;
                }
            }

            for note in self.outbox.drain() {
                writeln!(out, "  » {}: {}", note.title, note.description)?;
            }
        }

        Ok(())
    }

    /// Runs one command and writes what the shopper should see.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<()> {
        let notifier: &dyn Notifier = if self.config.notifications_enabled {
            &self.outbox
        } else {
            &LogNotifier
        };

        match command {
            Command::Catalog => {
                let products = product::list_products(&self.catalog);
                write!(out, "{}", render_catalog(&self.config, &products))?;
            }
            Command::Add(id) => {
                match cart::add_to_cart(&self.catalog, &mut self.cart, notifier, id) {
                    Ok(response) => {
                        if let Some(item) = self.cart.cart().get(response.product_id) {
                            if response.new_line {
                                writeln!(out, "  {} added", item.name)?;
                            } else {
                                writeln!(out, "  {} now x{}", item.name, response.quantity)?;
                            }
                        }
                        self.write_badge(&response.cart.totals, out)?
                    }
                    Err(err) => writeln!(out, "  {}", err.message)?,
                }
            }
            Command::Increment(id) => {
                let response = cart::update_cart_item(&mut self.cart, id, 1);
                write!(out, "{}", render_cart(&self.config, &response))?;
            }
            Command::Decrement(id) => {
                let response = cart::update_cart_item(&mut self.cart, id, -1);
                write!(out, "{}", render_cart(&self.config, &response))?;
            }
            Command::Remove(id) => {
                let response = cart::remove_from_cart(&mut self.cart, id);
                write!(out, "{}", render_cart(&self.config, &response))?;
            }
            Command::Cart { json: false } => {
                let response = cart::get_cart(&self.cart);
                write!(out, "{}", render_cart(&self.config, &response))?;
            }
            Command::Cart { json: true } => {
                serde_json::to_writer_pretty(&mut *out, &cart::get_cart(&self.cart))?;
                writeln!(out)?;
            }
            Command::Checkout => match cart::checkout(&self.cart) {
                Ok(summary) => writeln!(
                    out,
                    "  Order summary: {} items, {}. Thank you for visiting {}!",
                    summary.total_items,
                    self.config.format_price(summary.total_price),
                    self.config.store_name
                )?,
                Err(err) => writeln!(out, "  {}", err.message)?,
            },
            Command::Config => {
                serde_json::to_writer_pretty(&mut *out, &config::get_config(&self.config))?;
                writeln!(out)?;
            }
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => {}
        }

        Ok(())
    }

    fn write_badge<W: Write>(&self, totals: &CartTotals, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", render_header(&self.config, totals))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cosmic_core::Catalog;
    use std::io::Cursor;

    fn shell(config: ConfigState) -> Shell {
        Shell::new(config, CatalogState::new(Catalog::sample()), CartState::new())
    }

    fn run_script(shell: &mut Shell, script: &str) -> String {
        let mut out = Vec::new();
        shell.run(Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("catalog".parse(), Ok(Command::Catalog));
        assert_eq!("ADD 3".parse(), Ok(Command::Add(ProductId::new(3))));
        assert_eq!("+ 1".parse(), Ok(Command::Increment(ProductId::new(1))));
        assert_eq!("dec 1".parse(), Ok(Command::Decrement(ProductId::new(1))));
        assert_eq!("rm 2".parse(), Ok(Command::Remove(ProductId::new(2))));
        assert_eq!("cart".parse(), Ok(Command::Cart { json: false }));
        assert_eq!("cart --json".parse(), Ok(Command::Cart { json: true }));
        assert_eq!("  quit  ".parse(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(ParseCommandError::Empty));
        assert_eq!(
            "buy 1".parse::<Command>(),
            Err(ParseCommandError::Unknown("buy".to_string()))
        );
        assert_eq!(
            "add".parse::<Command>(),
            Err(ParseCommandError::MissingId("add".to_string()))
        );
        assert_eq!(
            "add one".parse::<Command>(),
            Err(ParseCommandError::InvalidId("one".to_string()))
        );
        assert_eq!(
            "add -1".parse::<Command>(),
            Err(ParseCommandError::InvalidId("-1".to_string()))
        );
        assert_eq!(
            "add 1 2".parse::<Command>(),
            Err(ParseCommandError::UnexpectedArgument("2".to_string()))
        );
    }

    #[test]
    fn test_header_badge_hidden_when_empty() {
        let config = ConfigState::default();
        let empty = CartTotals {
            line_count: 0,
            total_items: 0,
            total_price: cosmic_core::Money::zero(),
        };
        assert_eq!(render_header(&config, &empty), "✨ Cosmic Store  [cart]");

        let three = CartTotals {
            total_items: 3,
            ..empty
        };
        assert_eq!(render_header(&config, &three), "✨ Cosmic Store  [cart: 3]");
    }

    #[test]
    fn test_render_cart_marks_disabled_decrement() {
        let config = ConfigState::default();
        let mut state = CartState::new();
        let catalog = Catalog::sample();
        let essence = catalog.get(ProductId::new(1)).unwrap();
        let dream = catalog.get(ProductId::new(2)).unwrap();
        state.cart_mut().add(essence);
        state.cart_mut().add(essence);
        state.cart_mut().add(dream);

        let text = render_cart(&config, &cart::get_cart(&state));
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].contains("Cosmic Essence") && lines[0].contains("[-] x2"));
        assert!(lines[0].contains("2,999 ₽") && lines[0].contains("5,998 ₽"));
        assert!(lines[1].contains("Lunar Dream") && lines[1].contains("[ ] x1"));
        assert!(lines[2].contains("Total (3 items): 7,897 ₽"));
    }

    #[test]
    fn test_render_empty_cart() {
        let text = render_cart(&ConfigState::default(), &cart::get_cart(&CartState::new()));
        assert_eq!(text, "  Your cart is empty\n");
    }

    #[test]
    fn test_scripted_session() {
        let mut shell = shell(ConfigState::default());
        let output = run_script(
            &mut shell,
            "add 1\nadd 1\nadd 2\ndec 2\nremove 99\ncart\ncheckout\nquit\nadd 3\n",
        );

        assert!(output.contains("Galaxy Spirit"));
        assert!(output.contains("» Added to cart: Cosmic Essence has been added to your cart"));
        assert!(output.contains("[cart: 3]"));
        assert!(output.contains("Total (3 items): 7,897 ₽"));
        assert!(output.contains("Order summary: 3 items, 7,897 ₽"));

        // Input after `quit` is ignored.
        assert!(shell.cart().cart().get(ProductId::new(3)).is_none());
        assert_eq!(shell.cart().cart().totals().total_items, 3);
    }

    #[test]
    fn test_unknown_product_and_bad_input() {
        let mut shell = shell(ConfigState::default());
        let output = run_script(&mut shell, "add 42\nfly away\ncheckout\n");

        assert!(output.contains("Product not found: 42"));
        assert!(output.contains("Unknown command `fly`"));
        assert!(output.contains("Cart is empty"));
        assert!(!output.contains("»"));
    }

    #[test]
    fn test_invalid_utf8_line_skipped() {
        let mut shell = shell(ConfigState::default());
        let mut out = Vec::new();
        let input: &[u8] = b"add 1\n\xff\xfe\nadd 2\ncart\n";

        shell.run(input, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.contains("Not a command"));
        assert!(output.contains("Total (2 items): 4,898 ₽"));
        assert_eq!(shell.cart().cart().len(), 2);
    }

    #[test]
    fn test_add_reports_new_line_or_quantity() {
        let mut shell = shell(ConfigState::default());
        let output = run_script(&mut shell, "add 1\nadd 1\n");

        assert!(output.contains("  Cosmic Essence added\n"));
        assert!(output.contains("  Cosmic Essence now x2\n"));
    }

    #[test]
    fn test_notifications_disabled() {
        let config = ConfigState {
            notifications_enabled: false,
            ..ConfigState::default()
        };
        let mut shell = shell(config);
        let output = run_script(&mut shell, "add 4\n");

        assert!(!output.contains("»"));
        assert!(output.contains("[cart: 1]"));
    }

    #[test]
    fn test_cart_json_output() {
        let mut shell = shell(ConfigState::default());
        let mut out = Vec::new();
        shell.execute(Command::Add(ProductId::new(5)), &mut out).unwrap();

        let mut json_out = Vec::new();
        shell.execute(Command::Cart { json: true }, &mut json_out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json_out).unwrap();

        assert_eq!(value["items"][0]["name"], "Nebula Touch");
        assert_eq!(value["totals"]["totalPrice"], 2799);
    }
}
