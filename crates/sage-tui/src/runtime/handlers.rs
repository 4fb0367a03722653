//! Effect handler implementations.
//!
//! Pure async functions: take the backend client, do the I/O, and return the
//! `UiEvent` the runtime feeds back through the inbox. No state access here.

use std::path::PathBuf;

use sage_core::backend::BackendClient;
use sage_core::backend::types::ShippingDetails;
use tracing::warn;

use crate::events::{BackendEvent, CartAction, UiEvent};

pub async fn send_chat(client: BackendClient, message: String) -> UiEvent {
    let result = client.chat(&message).await;
    if let Err(error) = &result {
        warn!(%error, "chat request failed");
    }
    UiEvent::Backend(BackendEvent::ChatCompleted { result })
}

pub async fn add_to_cart(
    client: BackendClient,
    product_id: String,
    product_name: String,
    price: f64,
    image: String,
    quantity: u32,
) -> UiEvent {
    let result = client
        .cart_add(&product_id, &product_name, price, &image, quantity)
        .await
        .map_err(|error| error.to_string());
    UiEvent::Backend(BackendEvent::CartUpdated {
        action: CartAction::Added,
        result,
    })
}

pub async fn remove_from_cart(client: BackendClient, product_id: String) -> UiEvent {
    let result = client
        .cart_remove(&product_id)
        .await
        .map_err(|error| error.to_string());
    UiEvent::Backend(BackendEvent::CartUpdated {
        action: CartAction::Removed,
        result,
    })
}

pub async fn fetch_cart(client: BackendClient) -> UiEvent {
    let result = client.cart().await.map_err(|error| error.to_string());
    UiEvent::Backend(BackendEvent::CartUpdated {
        action: CartAction::Viewed,
        result,
    })
}

pub async fn checkout(client: BackendClient, shipping: ShippingDetails) -> UiEvent {
    let result = client
        .checkout(&shipping)
        .await
        .map_err(|error| error.to_string());
    UiEvent::Backend(BackendEvent::CheckoutCompleted { result })
}

/// Downloads the PDF export, writes it under `export_dir`, and optionally
/// opens it with the system viewer.
pub async fn export_pdf(client: BackendClient, export_dir: PathBuf, open_after: bool) -> UiEvent {
    let result = async {
        let bytes = client.export_pdf().await.map_err(|error| error.to_string())?;
        tokio::fs::create_dir_all(&export_dir)
            .await
            .map_err(|error| format!("Could not create {}: {error}", export_dir.display()))?;
        let path = export_dir.join(format!(
            "orders_{}.pdf",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        ));
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|error| format!("Could not write {}: {error}", path.display()))?;
        if open_after && let Err(error) = open::that(&path) {
            warn!(%error, "could not open exported pdf");
        }
        Ok(path)
    }
    .await;
    UiEvent::Backend(BackendEvent::ExportCompleted { result })
}

pub async fn login(client: BackendClient, email: String, password: String) -> UiEvent {
    let result = client
        .login(&email, &password)
        .await
        .map_err(|error| error.to_string());
    UiEvent::Backend(BackendEvent::LoggedIn { result })
}

pub async fn signup(
    client: BackendClient,
    email: String,
    username: String,
    password: String,
) -> UiEvent {
    let result = client
        .signup(&email, &username, &password)
        .await
        .map_err(|error| error.to_string());
    UiEvent::Backend(BackendEvent::LoggedIn { result })
}

/// Uploads the photo, saves the rendered result next to the exports, and
/// reports the saved path.
pub async fn virtual_tryon(
    client: BackendClient,
    product_id: String,
    image_path: PathBuf,
    export_dir: PathBuf,
) -> UiEvent {
    let result = async {
        let image = tokio::fs::read(&image_path)
            .await
            .map_err(|error| format!("Could not read {}: {error}", image_path.display()))?;
        let file_name = image_path
            .file_name()
            .map_or_else(|| "photo.png".to_string(), |name| name.to_string_lossy().to_string());
        let rendered = client
            .virtual_tryon(&product_id, image, &file_name)
            .await
            .map_err(|error| error.to_string())?;

        tokio::fs::create_dir_all(&export_dir)
            .await
            .map_err(|error| format!("Could not create {}: {error}", export_dir.display()))?;
        let path = export_dir.join(format!(
            "tryon_{}.png",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        ));
        tokio::fs::write(&path, rendered)
            .await
            .map_err(|error| format!("Could not write {}: {error}", path.display()))?;
        Ok(path)
    }
    .await;
    UiEvent::Backend(BackendEvent::TryOnCompleted { product_id, result })
}
