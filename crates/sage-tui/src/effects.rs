//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations). This
//! keeps the reducer pure: it mutates state and returns effects, never
//! performs I/O itself.

use std::path::PathBuf;

use sage_core::backend::types::ShippingDetails;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Send a chat message to the agent.
    SendChat { message: String },

    /// Add a product to the cart.
    AddToCart {
        product_id: String,
        product_name: String,
        price: f64,
        image: String,
        quantity: u32,
    },

    /// Remove a product from the cart.
    RemoveFromCart { product_id: String },

    /// Fetch the current cart contents.
    FetchCart,

    /// Place an order.
    Checkout { shipping: ShippingDetails },

    /// Export the session's orders as a PDF.
    ExportPdf,

    /// Exchange credentials for a token.
    Login { email: String, password: String },

    /// Create an account.
    Signup {
        email: String,
        username: String,
        password: String,
    },

    /// Upload a photo for the virtual try-on flow.
    VirtualTryOn {
        product_id: String,
        image_path: PathBuf,
    },
}
