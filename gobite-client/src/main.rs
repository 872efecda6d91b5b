use anyhow::{Context, bail};
use gobite_client::cart::format_money;
use gobite_client::{
    Config, Countdown, CountdownOutcome, OtpFlow, RedbStorage, SessionStore, load_dotenv,
    setup_environment, submit_order,
};
use shared::catalog;
use shared::models::{LineConfig, LineId, Order, ServingStyle};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

const USAGE: &str = "\
Usage: gobite <command> [args]

Commands:
  menu [category]                                   list the menu
  cart                                              show the cart and totals
  history                                           list past orders
  table <restaurant> <table>                        bind this session to a table
  login <name> <phone> <code>                       sign in with the demo code
  logout                                            sign out and forget cart/history
  add <item-id> [qty] [dining|takeaway] [notes]     add to cart
  qty <line-id> <n>                                 set a line's quantity (0 removes)
  remove <line-id>                                  remove a line
  clear                                             empty the cart
  checkout                                          place the order";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, work dir, logging)
    load_dotenv();
    let config = Config::from_env();
    setup_environment(&config).context("Failed to prepare working directory")?;

    // 2. Session
    let storage = RedbStorage::open(config.db_path())
        .with_context(|| format!("Failed to open {}", config.db_path().display()))?;
    let mut store = SessionStore::load(Arc::new(storage));

    // 3. Command
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    run(&config, &mut store, &args).await
}

async fn run(config: &Config, store: &mut SessionStore, args: &[&str]) -> anyhow::Result<()> {
    match args {
        ["menu"] => print_menu(catalog::ALL_CATEGORIES),
        ["menu", category] => print_menu(category),
        ["cart"] => print_cart(store),
        ["history"] => print_history(store),
        ["table", restaurant, table] => {
            if !catalog::is_known_table(table) {
                bail!("Unknown table {table}");
            }
            store.set_session_info(*restaurant, *table)?;
            println!("Seated at {table} ({restaurant})");
        }
        ["login", name, phone, code] => {
            let cancel = CancellationToken::new();
            let mut flow = OtpFlow::new(config.otp_code.clone(), config.otp_delay());
            flow.send_code(name, phone, &cancel).await?;
            let identity = flow.verify(code, &cancel).await?;
            store.login(identity)?;
            println!("Welcome, {name}");
        }
        ["logout"] => {
            store.logout()?;
            println!("Signed out");
        }
        ["add", item_id, rest @ ..] => add(store, item_id, rest)?,
        ["qty", line_id, quantity] => {
            let quantity: i64 = quantity.parse().context("Quantity must be a number")?;
            store.update_quantity(&LineId::from(*line_id), quantity)?;
            print_cart(store);
        }
        ["remove", line_id] => {
            store.remove_from_cart(&LineId::from(*line_id))?;
            print_cart(store);
        }
        ["clear"] => {
            store.clear_cart()?;
            println!("Cart cleared");
        }
        ["checkout"] => checkout(config, store).await?,
        _ => println!("{USAGE}"),
    }
    Ok(())
}

fn add(store: &mut SessionStore, item_id: &str, rest: &[&str]) -> anyhow::Result<()> {
    let item = catalog::find_item(item_id).with_context(|| format!("No menu item {item_id}"))?;

    let quantity: u32 = match rest.first() {
        Some(q) => q.parse().context("Quantity must be a number")?,
        None => 1,
    };
    let style = match rest.get(1) {
        Some(s) => s.parse::<ServingStyle>().map_err(anyhow::Error::msg)?,
        None => ServingStyle::default(),
    };
    let mut config = LineConfig::new(style);
    if rest.len() > 2 {
        config = config.with_instructions(rest[2..].join(" "));
    }

    let line_id = store.add_to_cart(&item, quantity, &config)?;
    println!("Added {} x{} [{}]", item.name, quantity, line_id);
    Ok(())
}

async fn checkout(config: &Config, store: &mut SessionStore) -> anyhow::Result<()> {
    let cancel = CancellationToken::new();
    let order = submit_order(store, config.checkout_delay(), &cancel).await?;
    print_order(&order);

    let countdown = Countdown::start(config.redirect_countdown_secs);
    if countdown.finished().await == CountdownOutcome::Elapsed {
        print_history(store);
    }
    Ok(())
}

// ========================================================================
// Output
// ========================================================================

fn print_menu(category: &str) {
    println!("{}", catalog::HOTEL_NAME);
    for item in catalog::items_in_category(category) {
        let popular = if item.popular { " *" } else { "" };
        println!(
            "  [{:>2}] {:<28} {:>8}  {}{}",
            item.id,
            item.name,
            format_money(item.price),
            item.category,
            popular
        );
    }
}

fn print_cart(store: &SessionStore) {
    if let Some(table) = store.table_number() {
        println!("Table {table}");
    }
    if store.cart().is_empty() {
        println!("Cart is empty");
        return;
    }
    for line in store.cart() {
        println!(
            "  {} x{:<3} {:<28} {:<9} {:>8}",
            line.line_id,
            line.quantity,
            line.item.name,
            line.serving_style,
            format_money(line.line_total())
        );
        if !line.instructions.is_empty() {
            println!("      note: {}", line.instructions);
        }
    }
    let totals = store.totals();
    println!("  Subtotal {:>10}", format_money(totals.subtotal));
    println!("  Tax      {:>10}", format_money(totals.tax));
    println!("  Total    {:>10}", format_money(totals.total));
}

fn print_order(order: &Order) {
    println!(
        "Order #{} placed: {} items, {}",
        order.id,
        order.item_count(),
        format_money(order.total)
    );
}

fn print_history(store: &SessionStore) {
    if store.orders().is_empty() {
        println!("No orders yet");
        return;
    }
    for order in store.orders() {
        println!(
            "#{} {} {:<9} table {:<5} {:>3} items {:>9}",
            order.id,
            order.created_at.format("%Y-%m-%d %H:%M"),
            order.status,
            order.table_number.as_deref().unwrap_or("-"),
            order.item_count(),
            format_money(order.total)
        );
    }
}
