//! Cart route handlers.
//!
//! The cart lives in the visitor's session (slot `grubzap-cart`). Every
//! mutation is a plain form post: load the cart, change it, write it back,
//! queue a flash message, and 303 back to the page that posted.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Response},
};
use grubzap_core::catalog::find_item;
use grubzap_core::{Cart, CartItem, MenuItemId};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::middleware::PageContext;
use crate::models::Flash;
use crate::routes::{ReturnTo, redirect_back, usd};
use crate::state::AppState;
use crate::storage;

/// Cart line display data for templates.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub id: MenuItemId,
    pub name: String,
    pub image: String,
    pub price: String,
    pub quantity: u32,
    pub line_total: String,
}

impl From<&CartItem> for CartItemView {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            image: item.image.clone(),
            price: usd(item.unit_price()),
            quantity: item.quantity.get(),
            line_total: usd(item.line_total()),
        }
    }
}

/// Cart display data for templates.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub tax: String,
    pub delivery_fee: String,
    pub total: String,
    pub item_count: u32,
}

impl CartView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let totals = cart.totals();
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            subtotal: usd(totals.subtotal),
            tax: usd(totals.tax),
            delivery_fee: usd(totals.delivery_fee),
            total: usd(totals.total),
            item_count: cart.item_count(),
        }
    }
}

/// Form data for the per-line cart actions.
#[derive(Debug, Deserialize)]
pub struct CartItemForm {
    pub item_id: String,
    pub return_to: Option<String>,
}

impl CartItemForm {
    fn item_id(&self) -> Result<MenuItemId> {
        self.item_id
            .trim()
            .parse()
            .map_err(|_| AppError::BadRequest(format!("invalid item id: {}", self.item_id)))
    }
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub page: PageContext,
    pub cart: CartView,
}

/// Cart count badge fragment.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Display the cart page.
#[instrument(skip(session, page))]
pub async fn show(session: Session, page: PageContext) -> Result<impl IntoResponse> {
    let cart = storage::load_cart(&session).await?;
    Ok(CartShowTemplate {
        page,
        cart: CartView::from(&cart),
    })
}

/// Add a menu item, or bump its quantity if it is already in the cart.
///
/// # Errors
///
/// Returns 400 for a malformed id and 404 for an id not on the menu.
#[instrument(skip(state, session, form), fields(item_id = %form.item_id))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CartItemForm>,
) -> Result<Response> {
    let id = form.item_id()?;
    let item = find_item(&state.content().menu, id)
        .ok_or_else(|| AppError::NotFound(format!("menu item {id}")))?;

    let mut cart = storage::load_cart(&session).await?;
    cart.add(item.to_cart_item());
    storage::save_cart(&session, &cart).await?;

    let id_str = id.to_string();
    add_breadcrumb("cart", "Added item", Some(&[("item_id", id_str.as_str())]));
    tracing::debug!(lines = cart.line_count(), "Item added to cart");

    let flash = Flash::success("Added to cart")
        .with_description(format!("{} has been added to your cart", item.name));
    storage::set_flash(&session, &flash).await?;

    Ok(redirect_back(form.return_to.as_deref(), "/cart"))
}

/// Increase a line's quantity by one.
#[instrument(skip(session, form), fields(item_id = %form.item_id))]
pub async fn increment(session: Session, Form(form): Form<CartItemForm>) -> Result<Response> {
    let id = form.item_id()?;
    let mut cart = storage::load_cart(&session).await?;
    if cart.increment(id) {
        storage::save_cart(&session, &cart).await?;
    }
    Ok(redirect_back(form.return_to.as_deref(), "/cart"))
}

/// Decrease a line's quantity by one. A line at quantity 1 stays as it is;
/// use remove to drop it.
#[instrument(skip(session, form), fields(item_id = %form.item_id))]
pub async fn decrement(session: Session, Form(form): Form<CartItemForm>) -> Result<Response> {
    let id = form.item_id()?;
    let mut cart = storage::load_cart(&session).await?;
    if cart.decrement(id) {
        storage::save_cart(&session, &cart).await?;
    }
    Ok(redirect_back(form.return_to.as_deref(), "/cart"))
}

/// Drop a line from the cart.
#[instrument(skip(session, form), fields(item_id = %form.item_id))]
pub async fn remove(session: Session, Form(form): Form<CartItemForm>) -> Result<Response> {
    let id = form.item_id()?;
    let mut cart = storage::load_cart(&session).await?;

    if cart.remove(id).is_some() {
        storage::save_cart(&session, &cart).await?;
        let id_str = id.to_string();
        add_breadcrumb("cart", "Removed item", Some(&[("item_id", id_str.as_str())]));
        let flash =
            Flash::success("Item removed from cart").with_description("Your cart has been updated");
        storage::set_flash(&session, &flash).await?;
    }

    Ok(redirect_back(form.return_to.as_deref(), "/cart"))
}

/// Empty the cart and delete its slot.
#[instrument(skip(session, form))]
pub async fn clear(session: Session, Form(form): Form<ReturnTo>) -> Result<Response> {
    storage::clear_cart(&session).await?;
    add_breadcrumb("cart", "Cleared cart", None);

    let flash =
        Flash::success("Cart cleared").with_description("All items have been removed from your cart");
    storage::set_flash(&session, &flash).await?;

    Ok(redirect_back(form.return_to.as_deref(), "/cart"))
}

/// Cart badge fragment.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<impl IntoResponse> {
    let cart = storage::load_cart(&session).await?;
    Ok(CartCountTemplate {
        count: cart.item_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_view_formats_totals() {
        let mut cart = Cart::new();
        let item = CartItem::new(MenuItemId::new(1), "Spicy Chicken Burger", "$10.99", "");
        cart.add(item.clone());
        cart.add(item);

        let view = CartView::from(&cart);
        assert_eq!(view.item_count, 2);
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.subtotal, "$21.98");
        assert_eq!(view.tax, "$1.76");
        assert_eq!(view.delivery_fee, "$3.99");
        assert_eq!(view.total, "$27.73");
    }

    #[test]
    fn test_empty_cart_view_has_no_delivery_fee() {
        let view = CartView::from(&Cart::new());
        assert!(view.is_empty());
        assert_eq!(view.delivery_fee, "$0.00");
        assert_eq!(view.total, "$0.00");
    }
}
