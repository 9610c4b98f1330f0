// src/views/admin.rs

use std::collections::{BTreeMap, BTreeSet};

use chrono::{FixedOffset, NaiveDate};
use rust_decimal::Decimal;

use crate::{
    common::error::{AppError, ErrorOutcome},
    models::{
        catalog::{Category, Product, ProductForm},
        orders::Order,
        sales::{CategoryStat, DailySales, HistoryStats},
    },
    services::{
        dashboard_service::{self, DashboardSnapshot, DeleteTarget},
        AuthService, DashboardService,
    },
    views::Navigation,
};

/// An order plus the client-only "note expanded" toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    pub order: Order,
    pub show_note: bool,
}

/// Replaces the order list with `fresh`, carrying `show_note` over by order id.
pub fn merge_orders(previous: &[OrderRow], fresh: Vec<Order>) -> Vec<OrderRow> {
    fresh
        .into_iter()
        .map(|order| {
            let show_note = previous
                .iter()
                .find(|row| row.order.id == order.id)
                .is_some_and(|row| row.show_note);
            OrderRow { order, show_note }
        })
        .collect()
}

pub struct AdminDashboard {
    dashboard_service: DashboardService,
    auth_service: AuthService,
    utc_offset: FixedOffset,

    // Mirrors of the last successful reads
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub orders: Vec<OrderRow>,
    pub daily_sales: Vec<DailySales>,

    // Forms
    pub new_category_name: String,
    pub product_form: ProductForm,

    // Panels
    pub show_stats: bool,
    pub show_history_stats: bool,
    pub expanded_dates: BTreeSet<NaiveDate>,
    pub pending_delete: Option<DeleteTarget>,
}

impl AdminDashboard {
    pub fn new(
        dashboard_service: DashboardService,
        auth_service: AuthService,
        utc_offset: FixedOffset,
    ) -> Self {
        Self {
            dashboard_service,
            auth_service,
            utc_offset,
            categories: Vec::new(),
            products: Vec::new(),
            orders: Vec::new(),
            daily_sales: Vec::new(),
            new_category_name: String::new(),
            product_form: ProductForm::default(),
            show_stats: false,
            show_history_stats: false,
            expanded_dates: BTreeSet::new(),
            pending_delete: None,
        }
    }

    /// Handle for the background poller.
    pub fn service(&self) -> DashboardService {
        self.dashboard_service.clone()
    }

    pub async fn refresh(&mut self) -> Navigation {
        let snapshot = self.dashboard_service.fetch_snapshot().await;
        self.apply(snapshot)
    }

    /// Folds one refresh into the view. Lists whose read failed keep their old
    /// contents; a rejected token sends the admin back to the login screen.
    pub fn apply(&mut self, snapshot: DashboardSnapshot) -> Navigation {
        let mut signed_out = false;
        let mut check = |result: Result<(), AppError>, context: &str| {
            if let Err(e) = result {
                signed_out |= e.is_unauthorized();
                e.report(context);
            }
        };

        check(
            snapshot.categories.map(|c| self.categories = c),
            "Refreshing categories",
        );
        check(
            snapshot.products.map(|p| self.products = p),
            "Refreshing products",
        );
        check(
            snapshot
                .orders
                .map(|o| self.orders = merge_orders(&self.orders, o)),
            "Refreshing orders",
        );
        check(
            snapshot.daily_sales.map(|s| self.daily_sales = s),
            "Refreshing daily sales",
        );

        if signed_out {
            Navigation::Login
        } else {
            Navigation::Stay
        }
    }

    // --- Derived values ---

    pub fn today(&self) -> NaiveDate {
        dashboard_service::today(self.utc_offset)
    }

    pub fn today_total(&self) -> Decimal {
        dashboard_service::sales_total_on(&self.daily_sales, self.today())
    }

    pub fn today_orders(&self) -> Vec<&Order> {
        dashboard_service::orders_on(
            self.orders.iter().map(|row| &row.order),
            self.today(),
            self.utc_offset,
        )
    }

    /// Sales history by local day, newest first.
    pub fn orders_by_date(&self) -> Vec<(NaiveDate, Vec<&Order>)> {
        dashboard_service::orders_by_date(self.orders.iter().map(|row| &row.order), self.utc_offset)
    }

    pub fn today_category_stats(&self) -> BTreeMap<String, u32> {
        dashboard_service::category_counts(&self.today_orders(), &self.products)
    }

    pub fn history_stats(&self) -> HistoryStats {
        dashboard_service::history_stats(&self.daily_sales)
    }

    pub fn day_stats(&self, date: NaiveDate) -> BTreeMap<String, CategoryStat> {
        dashboard_service::day_stats(
            self.orders.iter().map(|row| &row.order),
            &self.products,
            date,
            self.utc_offset,
        )
    }

    // --- Panel toggles ---

    pub fn toggle_note(&mut self, order_id: i64) {
        if let Some(row) = self.orders.iter_mut().find(|row| row.order.id == order_id) {
            row.show_note = !row.show_note;
        }
    }

    pub fn toggle_date(&mut self, date: NaiveDate) {
        if !self.expanded_dates.remove(&date) {
            self.expanded_dates.insert(date);
        }
    }

    pub fn toggle_stats(&mut self) {
        self.show_stats = !self.show_stats;
    }

    pub fn toggle_history_stats(&mut self) {
        self.show_history_stats = !self.show_history_stats;
    }

    // --- Mutations ---

    pub fn request_delete(&mut self, target: DeleteTarget) -> String {
        let message = target.confirmation_message();
        self.pending_delete = Some(target);
        message
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub async fn confirm_delete(&mut self) -> Navigation {
        let Some(target) = self.pending_delete.take() else {
            return Navigation::Stay;
        };
        let result = self.dashboard_service.delete(&target).await;
        if result.is_ok() {
            tracing::info!("Deleted {:?}", target);
        }
        self.after_mutation(result, "Deleting").await
    }

    pub async fn add_category(&mut self) -> Navigation {
        let name = self.new_category_name.trim().to_string();
        if name.is_empty() {
            return Navigation::Stay;
        }
        let result = self.dashboard_service.create_category(&name).await;
        self.new_category_name.clear();
        self.after_mutation(result, "Adding category").await
    }

    /// Invalid forms come back as `Err` without touching the backend.
    pub async fn add_product(&mut self) -> Result<Navigation, AppError> {
        let payload = self.product_form.to_payload()?;
        let result = self.dashboard_service.create_product(&payload).await;
        self.product_form = self.product_form.reset_keeping_category();
        Ok(self.after_mutation(result, "Adding product").await)
    }

    pub fn logout(&mut self) -> Navigation {
        if let Err(e) = self.auth_service.logout() {
            e.report("Signing out");
        }
        Navigation::Login
    }

    // Every write is followed by a reload, unless the session is gone.
    async fn after_mutation(&mut self, result: Result<(), AppError>, context: &str) -> Navigation {
        if let Err(e) = result {
            if e.report(context) == ErrorOutcome::RedirectToLogin {
                return Navigation::Login;
            }
        }
        self.refresh().await
    }
}
