//! Text rendering for the sales report and the numbered sale picker.

use std::io::{self, Write};

use bookledger_core::SaleReport;

const HEAVY_RULE: &str = "==================================================";
const LIGHT_RULE: &str = "--------------------------------------------------";

/// Writes the full sales report, one block per sale in ascending id order.
pub fn write_report<W: Write>(out: &mut W, rows: &[SaleReport]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{:=^50}", " Sales Report ")?;

    if rows.is_empty() {
        writeln!(out, "No sales recorded yet.")?;
        return writeln!(out, "{HEAVY_RULE}");
    }

    for row in rows {
        writeln!(out)?;
        writeln!(out, "Sale #{}", row.sale_id)?;
        writeln!(out, "Date: {}", row.date)?;
        writeln!(out, "Member: {}", row.member_name)?;
        writeln!(out, "Book: {}", row.book_title)?;
        writeln!(out, "{LIGHT_RULE}")?;
        writeln!(
            out,
            "{:>12}{:>8}{:>14}{:>16}",
            "Unit price", "Qty", "Discount", "Total"
        )?;
        writeln!(
            out,
            "{:>12}{:>8}{:>14}{:>16}",
            row.unit_price(),
            row.quantity,
            row.discount(),
            row.total()
        )?;
        writeln!(out, "{LIGHT_RULE}")?;
        writeln!(out, "Sale total: {}", row.total())?;
        writeln!(out, "{HEAVY_RULE}")?;
    }

    Ok(())
}

/// Writes the `N. Sale #<id> - member: <name> - date: <date>` picker list.
pub fn write_sale_list<W: Write>(out: &mut W, rows: &[SaleReport]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{:=^50}", " Sales ")?;
    for (index, row) in rows.iter().enumerate() {
        writeln!(
            out,
            "{}. Sale #{} - member: {} - date: {}",
            index + 1,
            row.sale_id,
            row.member_name,
            row.date
        )?;
    }
    writeln!(out, "{HEAVY_RULE}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(sale_id: i64, member: &str, total: i64) -> SaleReport {
        SaleReport {
            sale_id,
            date: "2024-01-19".to_string(),
            member_name: member.to_string(),
            book_title: "Machine Learning Guide".to_string(),
            unit_price: 1200,
            quantity: 2,
            discount: 150,
            total,
        }
    }

    fn render(rows: &[SaleReport], f: fn(&mut Vec<u8>, &[SaleReport]) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out, rows).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_block() {
        let text = render(&[row(5, "Bob", 2250)], write_report);

        assert!(text.contains("Sales Report"));
        assert!(text.contains("Sale #5"));
        assert!(text.contains("Member: Bob"));
        assert!(text.contains("Book: Machine Learning Guide"));
        assert!(text.contains("Sale total: 2,250"));

        let figures = text
            .lines()
            .find(|line| line.trim_start().starts_with("1,200"))
            .unwrap();
        assert_eq!(
            figures.split_whitespace().collect::<Vec<_>>(),
            vec!["1,200", "2", "150", "2,250"]
        );
    }

    #[test]
    fn test_report_keeps_row_order() {
        let text = render(&[row(1, "Alice", 1100), row(3, "Cathy", 600)], write_report);
        let first = text.find("Sale #1").unwrap();
        let second = text.find("Sale #3").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_empty_report() {
        let text = render(&[], write_report);
        assert!(text.contains("No sales recorded yet."));
        assert!(!text.contains("Sale #"));
    }

    #[test]
    fn test_sale_list_numbering() {
        let text = render(&[row(2, "Bob", 750), row(4, "Cathy", 600)], write_sale_list);
        assert!(text.contains("1. Sale #2 - member: Bob - date: 2024-01-19"));
        assert!(text.contains("2. Sale #4 - member: Cathy - date: 2024-01-19"));
    }
}
