// src/services/dashboard_service.rs

use std::collections::BTreeMap;

use chrono::{FixedOffset, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::{
    api::{CatalogRepository, OrderRepository, SalesRepository},
    common::error::AppError,
    models::{
        catalog::{Category, NewProduct, Product},
        orders::Order,
        sales::{CategoryStat, DailySales, HistoryStats},
    },
};

/// Bucket for items whose product no longer exists in the catalog.
pub const UNCATEGORIZED: &str = "Others";

// The four reads of one refresh tick. Each result stands on its own, so a
// failing endpoint does not hide the others.
#[derive(Debug)]
pub struct DashboardSnapshot {
    pub categories: Result<Vec<Category>, AppError>,
    pub products: Result<Vec<Product>, AppError>,
    pub orders: Result<Vec<Order>, AppError>,
    pub daily_sales: Result<Vec<DailySales>, AppError>,
}

#[derive(Clone)]
pub struct DashboardService {
    catalog_repo: CatalogRepository,
    order_repo: OrderRepository,
    sales_repo: SalesRepository,
}

impl DashboardService {
    pub fn new(
        catalog_repo: CatalogRepository,
        order_repo: OrderRepository,
        sales_repo: SalesRepository,
    ) -> Self {
        Self {
            catalog_repo,
            order_repo,
            sales_repo,
        }
    }

    /// Runs the four reads concurrently and returns once all of them are done.
    pub async fn fetch_snapshot(&self) -> DashboardSnapshot {
        let (categories, products, orders, daily_sales) = tokio::join!(
            self.catalog_repo.list_categories(),
            self.catalog_repo.list_products(),
            self.order_repo.list_orders(),
            self.sales_repo.daily_sales(),
        );

        DashboardSnapshot {
            categories,
            products,
            orders,
            daily_sales,
        }
    }

    // --- Mutations ---

    pub async fn create_category(&self, name: &str) -> Result<(), AppError> {
        self.catalog_repo.create_category(name).await
    }

    pub async fn create_product(&self, product: &NewProduct) -> Result<(), AppError> {
        self.catalog_repo.create_product(product).await
    }

    pub async fn delete(&self, target: &DeleteTarget) -> Result<(), AppError> {
        match target {
            DeleteTarget::Category { id, .. } => self.catalog_repo.delete_category(*id).await,
            DeleteTarget::Product { id, .. } => self.catalog_repo.delete_product(*id).await,
            DeleteTarget::Order { id } => self.order_repo.delete_order(*id).await,
        }
    }
}

/// Something the admin asked to delete, pending confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Category { id: i64, name: String },
    Product { id: i64, name: String },
    Order { id: i64 },
}

impl DeleteTarget {
    pub fn confirmation_message(&self) -> String {
        match self {
            DeleteTarget::Category { name, .. } => format!("Delete category '{}'?", name),
            DeleteTarget::Product { name, .. } => format!("Delete menu item '{}'?", name),
            DeleteTarget::Order { id } => format!("Delete order Queue #{}?", id),
        }
    }
}

// --- Aggregates ---
// Everything below is recomputed from the last fetched lists on demand.

pub fn today(offset: FixedOffset) -> NaiveDate {
    Utc::now().with_timezone(&offset).date_naive()
}

pub fn sales_total_on(daily_sales: &[DailySales], date: NaiveDate) -> Decimal {
    daily_sales
        .iter()
        .find(|row| row.date() == Some(date))
        .map(|row| row.total)
        .unwrap_or(Decimal::ZERO)
}

pub fn orders_on<'a>(
    orders: impl IntoIterator<Item = &'a Order>,
    date: NaiveDate,
    offset: FixedOffset,
) -> Vec<&'a Order> {
    orders
        .into_iter()
        .filter(|order| order.local_date(offset) == Some(date))
        .collect()
}

/// Orders bucketed by local calendar day, newest day first. Undated orders are skipped.
pub fn orders_by_date<'a>(
    orders: impl IntoIterator<Item = &'a Order>,
    offset: FixedOffset,
) -> Vec<(NaiveDate, Vec<&'a Order>)> {
    let mut grouped: BTreeMap<NaiveDate, Vec<&'a Order>> = BTreeMap::new();
    for order in orders {
        if let Some(date) = order.local_date(offset) {
            grouped.entry(date).or_default().push(order);
        }
    }
    grouped.into_iter().rev().collect()
}

fn category_of<'a>(item_name: &str, products: &'a [Product]) -> &'a str {
    products
        .iter()
        .find(|p| p.name == item_name)
        .and_then(|p| p.category_name.as_deref())
        .unwrap_or(UNCATEGORIZED)
}

/// Items sold per category. Category comes from the product with the same name.
pub fn category_counts(orders: &[&Order], products: &[Product]) -> BTreeMap<String, u32> {
    let mut stats = BTreeMap::new();
    for item in orders.iter().flat_map(|o| o.items()) {
        *stats
            .entry(category_of(&item.name, products).to_string())
            .or_insert(0) += item.count();
    }
    stats
}

pub fn day_stats<'a>(
    orders: impl IntoIterator<Item = &'a Order>,
    products: &[Product],
    date: NaiveDate,
    offset: FixedOffset,
) -> BTreeMap<String, CategoryStat> {
    let mut stats: BTreeMap<String, CategoryStat> = BTreeMap::new();
    let on_day = orders
        .into_iter()
        .filter(|order| order.local_date(offset) == Some(date));
    for order in on_day {
        for item in order.items() {
            let entry = stats
                .entry(category_of(&item.name, products).to_string())
                .or_default();
            entry.count += item.count();
            entry.total += item.line_total();
        }
    }
    stats
}

pub fn history_stats(daily_sales: &[DailySales]) -> HistoryStats {
    if daily_sales.is_empty() {
        return HistoryStats::default();
    }

    let total: Decimal = daily_sales.iter().map(|d| d.total).sum();
    let max = daily_sales
        .iter()
        .map(|d| d.total)
        .max()
        .unwrap_or(Decimal::ZERO);
    let avg = (total / Decimal::from(daily_sales.len()))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    HistoryStats { total, avg, max }
}
