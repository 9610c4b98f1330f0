// src/services/cart.rs

use rust_decimal::Decimal;

use crate::models::{
    catalog::{Product, Sweetness},
    orders::OrderLine,
};

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
    pub sweetness: Option<Sweetness>,
}

impl CartLine {
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }

    fn matches(&self, product_id: i64, sweetness: Option<Sweetness>) -> bool {
        self.product.id == product_id && self.sweetness == sweetness
    }
}

/// The guest's basket. A line is identified by product id *and* sweetness,
/// so the same drink at two sweetness levels takes two lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, product: &Product, sweetness: Option<Sweetness>) {
        match self
            .lines
            .iter_mut()
            .find(|line| line.matches(product.id, sweetness))
        {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
                sweetness,
            }),
        }
    }

    /// Changes the quantity of the line at `index`; lines that drop to zero go away.
    pub fn update_quantity(&mut self, index: usize, delta: i32) {
        let Some(line) = self.lines.get_mut(index) else {
            return;
        };
        let updated = i64::from(line.quantity) + i64::from(delta);
        if updated <= 0 {
            self.lines.remove(index);
        } else {
            line.quantity = u32::try_from(updated).unwrap_or(u32::MAX);
        }
    }

    pub fn total(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn to_order_lines(&self) -> Vec<OrderLine> {
        self.lines
            .iter()
            .map(|line| OrderLine {
                id: line.product.id,
                name: line.product.name.clone(),
                price: line.product.price,
                category_id: line.product.category_id,
                category_name: line.product.category_name.clone(),
                has_sweetness: line.product.has_sweetness,
                icon: line.product.icon.clone(),
                quantity: line.quantity,
                sweetness: line.sweetness,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: i64) -> Product {
        Product {
            id,
            name: format!("Drink {}", id),
            price: Decimal::from(price),
            category_id: Some(1),
            category_name: Some("Coffee".into()),
            has_sweetness: true,
            icon: None,
        }
    }

    #[test]
    fn same_product_and_sweetness_bumps_quantity() {
        let mut cart = Cart::new();
        let latte = product(1, 50);
        cart.add(&latte, Some(Sweetness::Normal));
        cart.add(&latte, Some(Sweetness::Normal));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn different_sweetness_makes_separate_lines() {
        let mut cart = Cart::new();
        let latte = product(1, 50);
        cart.add(&latte, Some(Sweetness::Low));
        cart.add(&latte, Some(Sweetness::High));
        cart.add(&latte, None);

        assert_eq!(cart.lines().len(), 3);
        assert!(cart.lines().iter().all(|l| l.quantity == 1));
    }

    #[test]
    fn decrementing_to_zero_removes_the_line() {
        let mut cart = Cart::new();
        cart.add(&product(1, 50), None);
        cart.add(&product(2, 40), None);

        cart.update_quantity(0, -1);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].product.id, 2);
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut cart = Cart::new();
        cart.add(&product(1, 50), None);
        cart.update_quantity(5, -1);
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn total_is_price_times_quantity_summed() {
        let mut cart = Cart::new();
        let latte = product(1, 55);
        let tea = product(2, 35);
        cart.add(&latte, Some(Sweetness::Normal));
        cart.add(&latte, Some(Sweetness::Normal));
        cart.add(&tea, None);
        cart.update_quantity(1, 2);

        // 55 * 2 + 35 * 3
        assert_eq!(cart.total(), Decimal::from(215));
        assert_eq!(cart.count(), 5);
    }

    #[test]
    fn order_lines_carry_quantity_and_sweetness() {
        let mut cart = Cart::new();
        cart.add(&product(4, 60), Some(Sweetness::Low));
        let lines = cart.to_order_lines();

        let json = serde_json::to_value(&lines).unwrap();
        assert_eq!(json[0]["id"], 4);
        assert_eq!(json[0]["quantity"], 1);
        assert_eq!(json[0]["sweetness"], "หวานน้อย");
        assert_eq!(json[0]["price"], serde_json::json!(60.0));
    }
}
