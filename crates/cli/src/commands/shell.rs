//! Interactive shopping session.
//!
//! One session owns one [`AppState`] for its whole lifetime, so the basket
//! and catalog parameters persist from command to command until `quit`.

use std::io::Write;
use std::str::FromStr;

use corner_shop_core::{ProductId, SortOrder};
use corner_shop_storefront::api::Product;
use corner_shop_storefront::error::{AppError, Result};
use corner_shop_storefront::routes::Route;
use corner_shop_storefront::state::AppState;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use crate::render;

const HELP: &str = "\
Commands:
  list                      Show the current listing page
  search <text>             Search products (empty text clears the search)
  category <slug>|all       Filter by category
  categories                List categories
  sort <field> [asc|desc]   Sort server-side; 'sort none' clears
  page <n> | next | prev    Change page
  show <id>                 Product details
  add <id>                  Add one unit to the basket
  remove <id>               Remove a product from the basket
  qty <id> <n>              Set quantity (0 or less removes)
  basket                    Show the basket
  go <path>                 Open /, /cart or /product/<id>
  help                      Show this help
  quit                      Leave the shop";

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Help,
    Quit,
    List,
    Search(String),
    Category(Option<String>),
    Categories,
    Sort(Option<(String, SortOrder)>),
    Page(u32),
    Next,
    Prev,
    Show(ProductId),
    Add(ProductId),
    Remove(ProductId),
    Qty(ProductId, i64),
    Basket,
    Go(Route),
}

impl FromStr for ShellCommand {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let args: Vec<&str> = rest.split_whitespace().collect();

        let command = match (word.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("help" | "?", _) => Self::Help,
            ("quit" | "exit", _) => Self::Quit,
            ("list" | "ls", []) => Self::List,
            ("search", _) => Self::Search(rest.to_string()),
            ("category", [key]) if key.eq_ignore_ascii_case("all") => Self::Category(None),
            ("category", [_, ..]) => Self::Category(Some(rest.to_string())),
            ("categories", []) => Self::Categories,
            ("sort", [field]) if field.eq_ignore_ascii_case("none") => Self::Sort(None),
            ("sort", [field]) => Self::Sort(Some(((*field).to_string(), SortOrder::Asc))),
            ("sort", [field, order]) => {
                let order = order
                    .parse::<SortOrder>()
                    .map_err(|e| AppError::InvalidInput(e.to_string()))?;
                Self::Sort(Some(((*field).to_string(), order)))
            }
            ("page", [n]) => Self::Page(parse_arg(n, "page")?),
            ("next", []) => Self::Next,
            ("prev", []) => Self::Prev,
            ("show", [id]) => Self::Show(parse_arg(id, "product id")?),
            ("add", [id]) => Self::Add(parse_arg(id, "product id")?),
            ("remove" | "rm", [id]) => Self::Remove(parse_arg(id, "product id")?),
            ("qty", [id, n]) => Self::Qty(parse_arg(id, "product id")?, parse_arg(n, "quantity")?),
            ("basket" | "cart", []) => Self::Basket,
            ("go", [path]) => Self::Go(
                Route::parse(path)
                    .ok_or_else(|| AppError::NotFound(format!("no page at {path}")))?,
            ),
            _ => {
                return Err(AppError::InvalidInput(format!(
                    "unrecognized command '{line}' (type 'help')"
                )));
            }
        };

        Ok(command)
    }
}

fn parse_arg<T: FromStr>(raw: &str, what: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| AppError::InvalidInput(format!("invalid {what}: '{raw}'")))
}

/// Run a session reading commands from `input` until `quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails. Mistyped
/// commands are reported to the user and the session continues.
pub async fn run<R, W>(state: &AppState, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    writeln!(out, "Welcome to Corner Shop. Type 'help' for commands.")?;
    prompt(out)?;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            prompt(out)?;
            continue;
        }

        match line.parse::<ShellCommand>() {
            Ok(ShellCommand::Quit) => break,
            Ok(command) => {
                debug!(?command, "Running session command");
                match execute(state, command, out).await {
                    Ok(()) => {}
                    Err(e) if e.is_user_error() => writeln!(out, "{e}")?,
                    Err(e) => return Err(e),
                }
            }
            Err(e) => writeln!(out, "{e}")?,
        }

        prompt(out)?;
    }

    writeln!(out, "Bye.")?;
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

/// Execute one command against the session state.
///
/// # Errors
///
/// Returns a user error for unknown categories or products, or an I/O error
/// if writing output fails.
pub async fn execute<W: Write>(
    state: &AppState,
    command: ShellCommand,
    out: &mut W,
) -> Result<()> {
    let catalog = state.catalog();

    match command {
        ShellCommand::Help => writeln!(out, "{HELP}")?,
        ShellCommand::Quit => {}
        ShellCommand::List => refresh_listing(state, out).await?,
        ShellCommand::Search(query) => {
            catalog.update(|s| {
                s.set_search_query(query);
                s.set_current_page(1);
            });
            refresh_listing(state, out).await?;
        }
        ShellCommand::Category(None) => {
            catalog.update(|s| {
                s.set_selected_category(None);
                s.set_current_page(1);
            });
            refresh_listing(state, out).await?;
        }
        ShellCommand::Category(Some(key)) => {
            if catalog.read().all_categories().is_empty() {
                catalog.fetch_categories().await;
            }
            let category = catalog
                .read()
                .find_category(&key)
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("category '{key}'")))?;
            catalog.update(|s| {
                s.set_selected_category(Some(category));
                s.set_current_page(1);
            });
            refresh_listing(state, out).await?;
        }
        ShellCommand::Categories => {
            catalog.fetch_categories().await;
            render::categories(out, &catalog.read())?;
        }
        ShellCommand::Sort(sort) => {
            let (field, order) = sort.unwrap_or_default();
            catalog.update(|s| {
                s.set_sort_option(field);
                s.set_sort_order(order);
            });
            refresh_listing(state, out).await?;
        }
        ShellCommand::Page(page) => {
            catalog.set_current_page(page);
            refresh_listing(state, out).await?;
        }
        ShellCommand::Next => {
            let (page, last) = {
                let s = catalog.read();
                (s.current_page(), s.total_pages())
            };
            if page >= last {
                writeln!(out, "Already on the last page.")?;
            } else {
                catalog.set_current_page(page + 1);
                refresh_listing(state, out).await?;
            }
        }
        ShellCommand::Prev => {
            let page = catalog.read().current_page();
            if page <= 1 {
                writeln!(out, "Already on the first page.")?;
            } else {
                catalog.set_current_page(page - 1);
                refresh_listing(state, out).await?;
            }
        }
        ShellCommand::Show(id) => show_product(state, id, out).await?,
        ShellCommand::Add(id) => {
            let product = resolve_product(state, id).await?;
            let quantity = state.update_basket(|b| {
                b.add(&product);
                b.get(id).map_or(1, |item| item.quantity())
            });
            writeln!(out, "Added {} (quantity {quantity}).", product.title)?;
        }
        ShellCommand::Remove(id) => {
            state.update_basket(|b| b.remove(id));
            render::basket(out, &state.basket())?;
        }
        ShellCommand::Qty(id, quantity) => {
            state.update_basket(|b| b.update_quantity(id, quantity));
            render::basket(out, &state.basket())?;
        }
        ShellCommand::Basket | ShellCommand::Go(Route::Cart) => {
            render::basket(out, &state.basket())?;
        }
        ShellCommand::Go(Route::Home) => {
            catalog.fetch_categories().await;
            refresh_listing(state, out).await?;
        }
        ShellCommand::Go(Route::ProductDetails { id }) => show_product(state, id, out).await?,
    }

    Ok(())
}

/// Fetch the current listing page and print it.
async fn refresh_listing<W: Write>(state: &AppState, out: &mut W) -> Result<()> {
    state.catalog().fetch_products().await;
    render::listing(out, &state.catalog().read())?;
    Ok(())
}

/// Load a product into the detail slot and print it.
async fn show_product<W: Write>(state: &AppState, id: ProductId, out: &mut W) -> Result<()> {
    state.catalog().fetch_product_by_id(id).await;
    let current = state.catalog().read().current_product().cloned();

    match current {
        Some(product) => render::product(out, &product)?,
        None => return Err(AppError::NotFound(format!("product {id}"))),
    }
    Ok(())
}

/// Find a product to add: the detail product, then the listing, then the API.
async fn resolve_product(state: &AppState, id: ProductId) -> Result<Product> {
    {
        let catalog = state.catalog().read();
        let known = catalog
            .current_product()
            .filter(|p| p.id == id)
            .or_else(|| catalog.all_products().iter().find(|p| p.id == id));
        if let Some(product) = known {
            return Ok(product.clone());
        }
    }

    // Fetched directly so a failed lookup leaves the detail product alone.
    state.catalog().client().get_product(id).await.map_err(|e| {
        warn!(product_id = %id, error = %e, "Cannot add unknown product to basket");
        AppError::NotFound(format!("product {id}"))
    })
}
