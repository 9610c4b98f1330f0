// src/views/guest.rs

use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    models::catalog::{Category, Product, Sweetness},
    services::{cart::Cart, OrderService},
};

/// The guest ordering screen: browse the menu, fill a cart, place an order.
pub struct GuestOrderView {
    order_service: OrderService,

    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub cart: Cart,
    pub selected_category: Option<i64>,
    pub search_query: String,
    pub note: String,

    // Product waiting for a sweetness choice, and the level picked so far.
    pub pending_option: Option<Product>,
    pub sweetness_choice: Sweetness,

    pub current_queue: Option<i64>,
    pub show_success: bool,
}

impl GuestOrderView {
    pub fn new(order_service: OrderService) -> Self {
        Self {
            order_service,
            categories: Vec::new(),
            products: Vec::new(),
            cart: Cart::new(),
            selected_category: None,
            search_query: String::new(),
            note: String::new(),
            pending_option: None,
            sweetness_choice: Sweetness::default(),
            current_queue: None,
            show_success: false,
        }
    }

    pub async fn load(&mut self) {
        let (categories, products) = self.order_service.load_menu().await;

        match categories {
            Ok(categories) => self.categories = categories,
            Err(e) => {
                e.report("Loading categories");
            }
        }
        match products {
            Ok(products) => self.products = products,
            Err(e) => {
                e.report("Loading products");
            }
        }
    }

    pub fn select_category(&mut self, category_id: Option<i64>) {
        self.selected_category = category_id;
    }

    pub fn filtered_products(&self) -> Vec<&Product> {
        let query = self.search_query.to_lowercase();
        self.products
            .iter()
            .filter(|p| self.selected_category.is_none_or(|id| p.category_id == Some(id)))
            .filter(|p| p.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Tapping a product: drinks with adjustable sweetness ask first.
    pub fn choose_product(&mut self, product: &Product) {
        if product.has_sweetness {
            self.pending_option = Some(product.clone());
            self.sweetness_choice = Sweetness::default();
        } else {
            self.cart.add(product, None);
        }
    }

    pub fn select_sweetness(&mut self, level: Sweetness) {
        self.sweetness_choice = level;
    }

    pub fn confirm_option(&mut self) {
        if let Some(product) = self.pending_option.take() {
            self.cart.add(&product, Some(self.sweetness_choice));
        }
    }

    pub fn cancel_option(&mut self) {
        self.pending_option = None;
    }

    pub fn update_quantity(&mut self, index: usize, delta: i32) {
        self.cart.update_quantity(index, delta);
    }

    pub fn cart_total(&self) -> Decimal {
        self.cart.total()
    }

    pub fn cart_count(&self) -> u32 {
        self.cart.count()
    }

    /// Sends the cart. An empty cart does nothing and returns `Ok(None)`.
    /// On failure the cart and note are left as they were.
    pub async fn submit_order(&mut self) -> Result<Option<i64>, AppError> {
        if self.cart.is_empty() {
            return Ok(None);
        }

        match self.order_service.place_order(&self.cart, &self.note).await {
            Ok(queue) => {
                self.current_queue = Some(queue);
                self.show_success = true;
                self.cart.clear();
                self.note.clear();
                Ok(Some(queue))
            }
            // Whatever went wrong, the guest only sees "try again".
            Err(AppError::OrderRejected) => Err(AppError::OrderRejected),
            Err(e) => {
                e.report("Placing order");
                Err(AppError::OrderRejected)
            }
        }
    }

    pub fn dismiss_success(&mut self) {
        self.show_success = false;
    }
}
