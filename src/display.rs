use crate::models::{Property, Transaction};
use crate::transactions::TransactionLookup;
use chrono::{DateTime, NaiveDate, Utc};

/// Group digits in threes: `1890000` becomes `1,890,000`
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn format_naira(amount: u64) -> String {
    format!("₦{}", format_number(amount))
}

pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%-d %B %Y, %H:%M").to_string()
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

/// `bank_transfer` reads as `BANK TRANSFER`; only the first underscore is replaced
pub fn format_payment_method(method: &str) -> String {
    method.replacen('_', " ", 1).to_uppercase()
}

pub fn property_card(index: usize, property: &Property) -> String {
    let badge = if property.verified { " ✔ verified" } else { "" };
    let availability = if property.available {
        "Available now"
    } else {
        "Currently let"
    };

    let mut lines = vec![
        format!(
            "{}. {} ({}/year){}",
            index,
            property.title,
            format_naira(property.price),
            badge
        ),
        format!("   {}", property.location),
        format!(
            "   {} bed, {} bath, {} m², {}",
            property.bedrooms, property.bathrooms, property.area, property.property_type
        ),
    ];
    if !property.amenities.is_empty() {
        lines.push(format!("   Amenities: {}", property.amenities.join(", ")));
    }
    lines.push(format!("   {} · ID: {}", availability, property.id));

    to_block(lines)
}

pub fn property_list(properties: &[Property]) -> String {
    if properties.is_empty() {
        return "No properties found. Try adjusting your search criteria or browse all properties.\n"
            .to_string();
    }

    properties
        .iter()
        .enumerate()
        .map(|(i, p)| property_card(i + 1, p))
        .collect::<Vec<_>>()
        .join("\n")
}

fn transaction_detail(transaction: &Transaction, property: Option<&Property>) -> String {
    let mut lines = vec![
        "Transaction Details".to_string(),
        format!("ID: {}", transaction.id),
        String::new(),
        format!("Property:       {}", transaction.property_title),
        format!("                {}", transaction.property_address),
        format!(
            "Lease:          {} ({} - {})",
            transaction.duration,
            format_date(&transaction.start_date),
            format_date(&transaction.end_date)
        ),
        format!("Amount:         {}", format_naira(transaction.amount)),
        format!(
            "                Rent: {} + Fee: {}",
            format_naira(transaction.rent_amount),
            format_naira(transaction.service_fee)
        ),
        format!(
            "Status:         {} (escrow: {})",
            transaction.status, transaction.escrow_status
        ),
        format!(
            "Payment method: {}",
            format_payment_method(&transaction.payment_method)
        ),
        format!("Date:           {}", format_datetime(&transaction.date)),
        format!("Counterparty:   {}", transaction.counterparty),
        format!("Type:           {}", transaction.kind),
    ];

    if let Some(property) = property {
        lines.push(String::new());
        lines.push(format!("Property Details (listing #{})", property.id));
        if let Some(description) = &property.description {
            lines.push(format!("Description:    {}", description));
        }
        lines.push(format!("Amenities:      {}", property.amenities.join(", ")));
    }

    let mut actions = vec!["download receipt", "report issue"];
    if transaction.can_cancel() {
        actions.push("cancel transaction");
    }
    lines.push(String::new());
    lines.push(format!("Actions:        {}", actions.join(", ")));

    to_block(lines)
}

/// Join lines into a block that ends with a newline
fn to_block(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn transaction_lookup(lookup: &TransactionLookup) -> String {
    match lookup {
        TransactionLookup::Found {
            transaction,
            property,
        } => transaction_detail(transaction, property.as_ref()),
        TransactionLookup::NotFound { id } => format!(
            "Transaction Not Found\nThe transaction with ID \"{}\" could not be found.\n",
            id
        ),
    }
}
