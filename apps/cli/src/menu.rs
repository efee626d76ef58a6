//! # Interactive Menu
//!
//! ```text
//! 1. Create sale
//! 2. Print sales report
//! 3. Update sale discount
//! 4. Delete sale
//! 5. Exit
//! ```
//!
//! Every action ends back at the menu. Failures are printed as a `=> `
//! line and never end the session; only option 5, an empty line or end of
//! input does.

use std::io::{self, BufRead, Write};

use bookledger_core::validation::{
    validate_discount, validate_quantity, validate_sale_date, validate_selection,
};
use bookledger_core::{LedgerError, NewSale, SaleReport, ValidationError};
use bookledger_db::Database;
use tracing::info;

use crate::console::Console;
use crate::error::user_message;
use crate::report;

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateSale,
    PrintReport,
    UpdateDiscount,
    DeleteSale,
    Exit,
}

impl MenuChoice {
    /// Parses the option typed at the menu prompt. Empty input exits.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input.trim() {
            "1" => Ok(MenuChoice::CreateSale),
            "2" => Ok(MenuChoice::PrintReport),
            "3" => Ok(MenuChoice::UpdateDiscount),
            "4" => Ok(MenuChoice::DeleteSale),
            "" | "5" => Ok(MenuChoice::Exit),
            _ => Err(ValidationError::OutOfRange {
                field: "option".to_string(),
                min: 1,
                max: 5,
            }),
        }
    }
}

/// Runs the menu loop until the user exits.
///
/// Only I/O errors on the console end the loop early.
pub async fn run_menu<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    loop {
        print_menu(console)?;
        let input = console.read_line("Choose an option (Enter to exit): ")?;

        let choice = match MenuChoice::parse(&input) {
            Ok(choice) => choice,
            Err(err) => {
                console.notify(format_args!("Error: {err}"))?;
                continue;
            }
        };

        match choice {
            MenuChoice::CreateSale => create_sale(db, console).await?,
            MenuChoice::PrintReport => print_report(db, console).await?,
            MenuChoice::UpdateDiscount => update_discount(db, console).await?,
            MenuChoice::DeleteSale => delete_sale(db, console).await?,
            MenuChoice::Exit => {
                console.notify("Goodbye!")?;
                return Ok(());
            }
        }
    }
}

fn print_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    console.say("")?;
    console.say(format_args!("{:*^30}", " Bookstore Sales "))?;
    console.say("1. Create sale")?;
    console.say("2. Print sales report")?;
    console.say("3. Update sale discount")?;
    console.say("4. Delete sale")?;
    console.say("5. Exit")?;
    console.say("*".repeat(30))
}

async fn create_sale<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let date = console.read_line("Sale date (YYYY-MM-DD): ")?;
    if let Err(err) = validate_sale_date(&date) {
        return console.notify(user_message(&LedgerError::from(err)));
    }

    let member_id = console.read_line("Member ID: ")?;
    let book_id = console.read_line("Book ID: ")?;

    let Some(quantity) = console.read_validated("Quantity: ", "quantity", validate_quantity)?
    else {
        return console.notify("Sale cancelled");
    };
    let Some(discount) =
        console.read_validated("Discount amount: ", "discount", validate_discount)?
    else {
        return console.notify("Sale cancelled");
    };

    let new_sale = NewSale::new(date, member_id, book_id, quantity, discount);
    match db.sales().create_sale(&new_sale).await {
        Ok(sale) => {
            info!(sale_id = sale.id, "Sale created from menu");
            console.notify(format_args!("Sale recorded! (total: {})", sale.total()))
        }
        Err(err) => console.notify(user_message(&err)),
    }
}

async fn print_report<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    match db.sales().list_sales().await {
        Ok(rows) => report::write_report(console.output(), &rows),
        Err(err) => console.notify(user_message(&err)),
    }
}

async fn update_discount<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(target) = select_sale(db, console, "update").await? else {
        return Ok(());
    };

    let Some(discount) =
        console.read_validated("New discount amount: ", "discount", validate_discount)?
    else {
        return console.notify("Update cancelled");
    };

    match db.sales().update_discount(target.sale_id, discount).await {
        Ok(sale) => console.notify(format_args!(
            "Sale #{} updated! (total: {})",
            sale.id,
            sale.total()
        )),
        Err(err) => console.notify(user_message(&err)),
    }
}

async fn delete_sale<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let Some(target) = select_sale(db, console, "delete").await? else {
        return Ok(());
    };

    match db.sales().delete_sale(target.sale_id).await {
        Ok(()) => console.notify(format_args!("Sale #{} deleted", target.sale_id)),
        Err(err) => console.notify(user_message(&err)),
    }
}

/// Lists the sales and asks for a 1-based position. `None` when there is
/// nothing to choose, the user cancels, or the choice is invalid.
async fn select_sale<R: BufRead, W: Write>(
    db: &Database,
    console: &mut Console<R, W>,
    action: &str,
) -> io::Result<Option<SaleReport>> {
    let rows = match db.sales().list_sales().await {
        Ok(rows) => rows,
        Err(err) => {
            console.notify(user_message(&err))?;
            return Ok(None);
        }
    };

    if rows.is_empty() {
        console.notify(format_args!("No sales to {action}"))?;
        return Ok(None);
    }

    report::write_sale_list(console.output(), &rows)?;
    let input = console.read_line(&format!(
        "Choose the sale to {action} (number, Enter to cancel): "
    ))?;
    if input.is_empty() {
        return Ok(None);
    }

    match validate_selection(&input, rows.len()) {
        Ok(index) => Ok(rows.into_iter().nth(index)),
        Err(err) => {
            console.notify(user_message(&LedgerError::from(err)))?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookledger_db::DbConfig;

    async fn seeded_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    async fn run_script(db: &Database, script: &str) -> String {
        let mut console = Console::new(script.as_bytes(), Vec::new());
        run_menu(db, &mut console).await.unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(MenuChoice::parse("1").unwrap(), MenuChoice::CreateSale);
        assert_eq!(MenuChoice::parse(" 2 ").unwrap(), MenuChoice::PrintReport);
        assert_eq!(MenuChoice::parse("3").unwrap(), MenuChoice::UpdateDiscount);
        assert_eq!(MenuChoice::parse("4").unwrap(), MenuChoice::DeleteSale);
        assert_eq!(MenuChoice::parse("5").unwrap(), MenuChoice::Exit);
        assert_eq!(MenuChoice::parse("").unwrap(), MenuChoice::Exit);
        assert!(MenuChoice::parse("6").is_err());
        assert!(MenuChoice::parse("one").is_err());
    }

    #[tokio::test]
    async fn test_end_of_input_exits() {
        let db = seeded_db().await;
        let out = run_script(&db, "").await;
        assert!(out.contains("=> Goodbye!"));
    }

    #[tokio::test]
    async fn test_invalid_utf8_input_does_not_end_session() {
        let db = seeded_db().await;
        let script: &[u8] = b"1\n2024-02-01\nM\xff01\nB001\n1\n0\n\xff\n2\n5\n";
        let mut console = Console::new(script, Vec::new());

        run_menu(&db, &mut console).await.unwrap();
        let out = String::from_utf8(console.into_output()).unwrap();

        assert!(out.contains("=> Error: Member not found: M\u{FFFD}01"));
        assert!(out.contains("=> Error: option must be between 1 and 5"));
        assert!(out.contains("Sales Report"));
        assert!(out.contains("=> Goodbye!"));
        assert_eq!(db.sales().count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_invalid_option_keeps_looping() {
        let db = seeded_db().await;
        let out = run_script(&db, "9\n5\n").await;
        assert!(out.contains("=> Error: option must be between 1 and 5"));
        assert!(out.contains("=> Goodbye!"));
    }

    #[tokio::test]
    async fn test_create_sale_flow() {
        let db = seeded_db().await;
        let out = run_script(&db, "1\n2024-02-01\nM001\nB001\n3\n50\n\n").await;

        assert!(out.contains("=> Sale recorded! (total: 1,750)"));
        assert_eq!(db.sales().count().await.unwrap(), 6);
        let book = db.books().get_by_id("B001").await.unwrap().unwrap();
        assert_eq!(book.stock, 47);
    }

    #[tokio::test]
    async fn test_create_sale_reprompts_bad_quantity() {
        let db = seeded_db().await;
        let out = run_script(&db, "1\n2024-02-01\nM001\nB001\nabc\n-1\n2\n0\n\n").await;

        assert!(out.contains("quantity must be a whole number"));
        assert!(out.contains("quantity must be positive"));
        assert!(out.contains("=> Sale recorded! (total: 1,200)"));
    }

    #[tokio::test]
    async fn test_create_sale_bad_date_aborts() {
        let db = seeded_db().await;
        let out = run_script(&db, "1\n2024-2-1\n\n").await;

        assert!(out.contains("date has invalid format"));
        assert!(!out.contains("Member ID: "));
        assert_eq!(db.sales().count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_create_sale_empty_quantity_cancels() {
        let db = seeded_db().await;
        let out = run_script(&db, "1\n2024-02-01\nM001\nB001\n\n\n").await;

        assert!(out.contains("=> Sale cancelled"));
        assert_eq!(db.sales().count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_create_sale_insufficient_stock() {
        let db = seeded_db().await;
        let out = run_script(&db, "1\n2024-02-01\nM001\nB003\n21\n0\n\n").await;

        assert!(out.contains("20 remaining"));
        assert_eq!(db.sales().count().await.unwrap(), 5);
        let book = db.books().get_by_id("B003").await.unwrap().unwrap();
        assert_eq!(book.stock, 20);
    }

    #[tokio::test]
    async fn test_create_sale_unknown_member() {
        let db = seeded_db().await;
        let out = run_script(&db, "1\n2024-02-01\nM999\nB001\n1\n0\n\n").await;

        assert!(out.contains("=> Error: Member not found: M999"));
        assert_eq!(db.sales().count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_print_report() {
        let db = seeded_db().await;
        let out = run_script(&db, "2\n\n").await;

        assert!(out.contains("Sales Report"));
        assert!(out.contains("Member: Alice"));
        assert!(out.contains("Sale total: 2,250"));
        assert_eq!(out.matches("Sale total:").count(), 5);
    }

    #[tokio::test]
    async fn test_update_discount_flow() {
        let db = seeded_db().await;
        let out = run_script(&db, "3\n1\n0\n\n").await;

        assert!(out.contains("1. Sale #1 - member: Alice - date: 2024-01-15"));
        assert!(out.contains("=> Sale #1 updated! (total: 1,200)"));

        let sale = db.sales().get_by_id(1).await.unwrap().unwrap();
        assert_eq!(sale.discount, 0);
        assert_eq!(sale.total, 1200);
    }

    #[tokio::test]
    async fn test_delete_sale_flow() {
        let db = seeded_db().await;
        let out = run_script(&db, "4\n2\n\n").await;

        assert!(out.contains("=> Sale #2 deleted"));
        assert!(db.sales().get_by_id(2).await.unwrap().is_none());
        assert_eq!(db.sales().count().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_invalid_selection_changes_nothing() {
        let db = seeded_db().await;
        let out = run_script(&db, "4\n7\n\n").await;

        assert!(out.contains("selection must be between 1 and 5"));
        assert_eq!(db.sales().count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_empty_selection_cancels() {
        let db = seeded_db().await;
        let out = run_script(&db, "3\n\n").await;

        assert!(!out.contains("updated!"));
        let sale = db.sales().get_by_id(1).await.unwrap().unwrap();
        assert_eq!(sale.discount, 100);
    }

    #[tokio::test]
    async fn test_empty_ledger_messages() {
        let db = Database::new(DbConfig::in_memory().seed_sample_data(false))
            .await
            .unwrap();
        let out = run_script(&db, "3\n4\n2\n\n").await;

        assert!(out.contains("=> No sales to update"));
        assert!(out.contains("=> No sales to delete"));
        assert!(out.contains("No sales recorded yet."));
    }
}
