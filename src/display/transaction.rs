//! Transaction display formatting

use crate::models::Transaction;

use super::{render_table, DisplayOptions};

/// Amount with a leading "+" for income and "-" for expenses
pub fn format_signed_amount(txn: &Transaction, opts: &DisplayOptions) -> String {
    let signed = txn.signed_amount();
    if signed.is_negative() {
        opts.money(signed)
    } else {
        format!("+{}", opts.money(signed))
    }
}

/// Format transactions as a register table
pub fn format_transaction_table(transactions: &[&Transaction], opts: &DisplayOptions) -> String {
    if transactions.is_empty() {
        return "No transactions found. Try adjusting your filters or add a new transaction."
            .to_string();
    }

    render_table(
        &["ID", "Date", "Description", "Category", "Amount"],
        transactions.iter().map(|txn| {
            vec![
                txn.id.to_string(),
                opts.date(txn.date),
                txn.description.clone(),
                txn.category.name.clone(),
                format_signed_amount(txn, opts),
            ]
        }),
    )
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, opts: &DisplayOptions) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", opts.date(txn.date)));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!("Category:    {}\n", txn.category.name));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Amount:      {}\n", format_signed_amount(txn, opts)));

    output
}
