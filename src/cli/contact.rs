//! Contact form and newsletter CLI command handlers

use crate::api::models::ContactMessage;
use crate::api::PortfolioClient;
use crate::cli::commands::ContactArgs;
use crate::error::{FolioError, Result};

/// Handle `folio contact`
pub async fn handle_contact(client: &PortfolioClient, args: ContactArgs) -> Result<()> {
    let message = ContactMessage {
        name: required("name", &args.name)?,
        email: required_email(&args.email)?,
        subject: required("subject", &args.subject)?,
        message: required("message", &args.message)?,
    };

    let ack = client.send_contact_message(&message).await?;
    println!("{}", or_default(&ack.message, "Message sent."));
    Ok(())
}

/// Handle `folio subscribe`
pub async fn handle_subscribe(client: &PortfolioClient, email: &str) -> Result<()> {
    let email = required_email(email)?;
    let ack = client.subscribe_newsletter(&email).await?;
    println!("{}", or_default(&ack.message, "Subscribed."));
    Ok(())
}

fn required(field: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FolioError::InvalidInput(format!("--{} cannot be empty", field)));
    }
    Ok(value.to_string())
}

/// Shallow shape check; the backend does the real validation
fn required_email(value: &str) -> Result<String> {
    let email = required("email", value)?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(email),
        _ => Err(FolioError::InvalidInput(format!(
            "'{}' is not a valid email address",
            email
        ))),
    }
}

fn or_default<'a>(message: &'a str, fallback: &'a str) -> &'a str {
    if message.trim().is_empty() {
        fallback
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields() {
        assert_eq!(required("name", "  Jane ").unwrap(), "Jane");
        assert!(required("name", "   ").is_err());
    }

    #[test]
    fn test_email_shape() {
        assert!(required_email("jane@example.com").is_ok());
        assert!(required_email("jane").is_err());
        assert!(required_email("@example.com").is_err());
        assert!(required_email("jane@localhost").is_err());
    }
}
