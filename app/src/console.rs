// app/src/console.rs

//! Text console adapter: an interactive menu loop over the ledger core.
//! All mutation rules live in the core; this module only prompts, prints
//! and persists.

use std::io::{self, BufRead, Write};

use stockbook::{parse_price, parse_quantity, Ledger, LedgerError, NewProduct};
use tracing::info;

use crate::state::AppState;

type Prompter = io::Lines<io::StdinLock<'static>>;

/// Runs the menu loop until the user exits or stdin closes.
pub fn run(app_state: &AppState) -> anyhow::Result<()> {
  info!("Console adapter starting.");
  let mut lines = io::stdin().lock().lines();

  println!("Welcome to the Stockbook inventory manager!");
  loop {
    print_menu();
    let Some(choice) = prompt(&mut lines, "Enter your choice (1-4): ")? else {
      break;
    };
    match choice.trim() {
      "1" => print!("{}", render_inventory_table(&app_state.ledger.read())),
      "2" => {
        if !purchase_flow(app_state, &mut lines)? {
          break;
        }
      }
      "3" => {
        if !sale_flow(app_state, &mut lines)? {
          break;
        }
      }
      "4" => {
        println!("Thank you for using Stockbook!");
        break;
      }
      other => println!("Invalid choice '{}'. Please enter 1-4.", other),
    }
  }

  info!("Console adapter stopped.");
  Ok(())
}

fn print_menu() {
  println!();
  println!("{}", "=".repeat(50));
  println!("          STOCKBOOK INVENTORY MANAGER");
  println!("{}", "=".repeat(50));
  println!("1. View Inventory");
  println!("2. Record Purchase");
  println!("3. Record Sale");
  println!("4. Exit");
  println!("{}", "-".repeat(50));
}

/// Prints `label` and reads one line. `Ok(None)` means stdin closed.
fn prompt(lines: &mut Prompter, label: &str) -> io::Result<Option<String>> {
  print!("{}", label);
  io::stdout().flush()?;
  match lines.next() {
    Some(line) => Ok(Some(line?)),
    None => {
      println!();
      Ok(None)
    }
  }
}

/// The interactive purchase flow. Returns `Ok(false)` when stdin closed.
fn purchase_flow(app_state: &AppState, lines: &mut Prompter) -> anyhow::Result<bool> {
  println!();
  println!("--- Record Purchase ---");
  let Some(product_id) = prompt(lines, "Product ID: ")? else {
    return Ok(false);
  };
  let product_id = product_id.trim().to_string();
  if product_id.is_empty() {
    println!("Product ID must not be empty.");
    return Ok(true);
  }

  // Peek at the record so the prompts match the existing/new branch; the
  // core re-checks under the write lock when the purchase is applied.
  let existing = {
    let ledger = app_state.ledger.read();
    ledger.get(&product_id).map(|record| (record.name.clone(), record.unit.clone()))
  };

  let result = if let Some((name, unit)) = existing {
    println!("Existing product: {}", name);
    let Some(raw_quantity) = prompt(lines, &format!("Quantity to purchase ({}): ", unit))? else {
      return Ok(false);
    };
    apply_purchase(app_state, &product_id, None, &raw_quantity)
  } else {
    println!("New product - please enter its details:");
    let Some(name) = prompt(lines, "Product name: ")? else {
      return Ok(false);
    };
    let Some(unit) = prompt(lines, "Measuring unit (e.g. kg, pcs, liters): ")? else {
      return Ok(false);
    };
    let Some(raw_price) = prompt(lines, "Price per unit: $")? else {
      return Ok(false);
    };
    let Some(raw_quantity) = prompt(lines, &format!("Purchase quantity ({}): ", unit.trim()))? else {
      return Ok(false);
    };

    parse_price("price", &raw_price).and_then(|price| {
      let details = NewProduct {
        name: name.trim().to_string(),
        unit: unit.trim().to_string(),
        price,
      };
      apply_purchase(app_state, &product_id, Some(details), &raw_quantity)
    })
  };

  match result {
    Ok(message) => {
      println!("{}", message);
      println!("Purchase recorded successfully!");
    }
    Err(err) => println!("Error: {}", err),
  }
  Ok(true)
}

/// The interactive sale flow. Returns `Ok(false)` when stdin closed.
fn sale_flow(app_state: &AppState, lines: &mut Prompter) -> anyhow::Result<bool> {
  println!();
  println!("--- Record Sale ---");

  {
    let ledger = app_state.ledger.read();
    if ledger.is_empty() {
      println!("No products in inventory to sell.");
      return Ok(true);
    }
  }

  let Some(product_id) = prompt(lines, "Product ID to sell: ")? else {
    return Ok(false);
  };
  let product_id = product_id.trim().to_string();

  // Show availability before asking for the amount, like a sales desk would.
  {
    let ledger = app_state.ledger.read();
    match ledger.get(&product_id) {
      Some(record) => {
        println!("Product: {}", record.name);
        println!("Available quantity: {} {}", record.quantity, record.unit);
        println!("Price per unit: ${:.2}", record.price);
      }
      None => {
        println!("Product not found in inventory.");
        return Ok(true);
      }
    }
  }

  let Some(raw_quantity) = prompt(lines, "Quantity to sell: ")? else {
    return Ok(false);
  };

  let result = parse_quantity("quantity", &raw_quantity).and_then(|quantity| {
    let mut ledger = app_state.ledger.write();
    let outcome = ledger.record_sale(&product_id, quantity)?;
    app_state.store.save(&ledger)?;
    Ok(outcome)
  });

  match result {
    Ok(outcome) => {
      println!("Sale recorded successfully!");
      println!("{}", outcome);
      if !outcome.removed {
        println!("Remaining quantity: {} {}", outcome.remaining, outcome.unit);
      }
    }
    Err(err) => println!("Error: {}", err),
  }
  Ok(true)
}

fn apply_purchase(
  app_state: &AppState,
  product_id: &str,
  details: Option<NewProduct>,
  raw_quantity: &str,
) -> Result<String, LedgerError> {
  let quantity = parse_quantity("quantity", raw_quantity)?;
  let mut ledger = app_state.ledger.write();
  let outcome = ledger.record_purchase(product_id, details, quantity)?;
  app_state.store.save(&ledger)?;
  Ok(outcome.to_string())
}

/// Fixed-width inventory table with count and value footer.
fn render_inventory_table(ledger: &Ledger) -> String {
  let mut out = String::new();
  out.push('\n');
  out.push_str(&"=".repeat(80));
  out.push('\n');
  out.push_str("                              TOTAL INVENTORY\n");
  out.push_str(&"=".repeat(80));
  out.push('\n');

  if ledger.is_empty() {
    out.push_str("No products in inventory.\n");
    return out;
  }

  out.push_str(&format!(
    "{:<10} {:<24} {:<10} {:<12} {:<10}\n",
    "ID", "Product Name", "Unit", "Price", "Quantity"
  ));
  out.push_str(&"-".repeat(80));
  out.push('\n');

  for (product_id, record) in ledger.products() {
    out.push_str(&format!(
      "{:<10} {:<24} {:<10} ${:<11.2} {:<10}\n",
      product_id, record.name, record.unit, record.price, record.quantity
    ));
  }

  out.push_str(&"-".repeat(80));
  out.push('\n');
  out.push_str(&format!("Total Products: {}\n", ledger.len()));
  out.push_str(&format!("Total Value: ${:.2}\n", ledger.total_value()));
  out
}
