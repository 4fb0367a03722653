//! Slash commands accepted by the input line.

use std::path::PathBuf;

use sage_core::backend::types::ShippingDetails;

/// A parsed slash command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Quit,
    /// Clear the panel.
    Clear,
    /// Open the panel history overlay.
    History,
    /// Show the cart in the panel.
    Cart,
    /// Export orders to PDF.
    Export,
    Login {
        email: String,
        password: String,
    },
    Signup {
        email: String,
        username: String,
        password: String,
    },
    Checkout {
        shipping: ShippingDetails,
    },
    TryOn {
        product_id: String,
        image_path: PathBuf,
    },
}

/// One-line usage summary for `/help` and parse errors.
pub const HELP: &str = "\
/cart - show your cart
/checkout <name>, <address>, <city>, <zip>[, <email>] - place the order
/export - download your orders as PDF
/login <email> <password>
/signup <email> <username> <password>
/tryon <product-id> <image-path> - virtual try-on with your photo
/clear - clear the panel
/history - restore a previous panel view
/quit - exit";

/// Parses a slash command. `text` must start with '/'.
pub fn parse(text: &str) -> Result<Command, String> {
    let text = text.trim();
    let (name, rest) = match text.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (text, ""),
    };

    match name {
        "/help" => Ok(Command::Help),
        "/quit" | "/exit" => Ok(Command::Quit),
        "/clear" => Ok(Command::Clear),
        "/history" => Ok(Command::History),
        "/cart" => Ok(Command::Cart),
        "/export" => Ok(Command::Export),
        "/login" => match rest.split_whitespace().collect::<Vec<_>>()[..] {
            [email, password] => Ok(Command::Login {
                email: email.to_string(),
                password: password.to_string(),
            }),
            _ => Err("Usage: /login <email> <password>".to_string()),
        },
        "/signup" => match rest.split_whitespace().collect::<Vec<_>>()[..] {
            [email, username, password] => Ok(Command::Signup {
                email: email.to_string(),
                username: username.to_string(),
                password: password.to_string(),
            }),
            _ => Err("Usage: /signup <email> <username> <password>".to_string()),
        },
        "/checkout" => parse_checkout(rest),
        "/tryon" => match rest.split_whitespace().collect::<Vec<_>>()[..] {
            [product_id, path] => Ok(Command::TryOn {
                product_id: product_id.to_string(),
                image_path: PathBuf::from(path),
            }),
            _ => Err("Usage: /tryon <product-id> <image-path>".to_string()),
        },
        other => Err(format!("Unknown command {other}. /help lists commands.")),
    }
}

/// Shipping details arrive comma-separated: name, address, city, zip[, email].
fn parse_checkout(rest: &str) -> Result<Command, String> {
    let parts: Vec<&str> = rest.split(',').map(str::trim).collect();
    match parts[..] {
        [name, address, city, zip] | [name, address, city, zip, _]
            if name.is_empty() || address.is_empty() || city.is_empty() || zip.is_empty() =>
        {
            Err("Usage: /checkout <name>, <address>, <city>, <zip>[, <email>]".to_string())
        }
        [name, address, city, zip] => Ok(Command::Checkout {
            shipping: ShippingDetails {
                name: name.to_string(),
                address: address.to_string(),
                city: city.to_string(),
                zip: zip.to_string(),
                email: derived_email(name),
            },
        }),
        [name, address, city, zip, email] => Ok(Command::Checkout {
            shipping: ShippingDetails {
                name: name.to_string(),
                address: address.to_string(),
                city: city.to_string(),
                zip: zip.to_string(),
                email: email.to_string(),
            },
        }),
        _ => Err("Usage: /checkout <name>, <address>, <city>, <zip>[, <email>]".to_string()),
    }
}

/// Placeholder confirmation address when the user gave none.
fn derived_email(name: &str) -> String {
    format!(
        "{}@email.com",
        name.to_lowercase().split_whitespace().collect::<Vec<_>>().join(".")
    )
}
