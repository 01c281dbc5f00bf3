//! Shared in-memory collaborator fakes for service tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use vraxia_commerce::cart::Coupon;
use vraxia_commerce::catalog::{OptionGroup, Product};
use vraxia_commerce::money::{Currency, Money};
use vraxia_commerce::order::{Order, OrderDraft, OrderStatus, PaymentProvider, ShippingInfo};
use vraxia_commerce::{OrderId, ProductId, UserId};
use vraxia_storefront::collab::{
    Catalog, Coupons, Identity, OrderFilter, OrderRepository, StatusNotifier,
};
use vraxia_storefront::StorefrontError;

/// Catalog backed by a fixed product map.
pub struct FakeCatalog {
    products: HashMap<String, Product>,
}

impl FakeCatalog {
    pub fn with_demo_products() -> Self {
        let coat = Product::new(
            "1",
            "Structured Linen Chore Coat",
            Money::from_decimal(185.0, Currency::USD),
        )
        .with_image("https://img.example/coat.jpg")
        .with_option(OptionGroup::swatch("Color", [("Sand", "#E5E0D6"), ("Olive", "#566246")]))
        .with_option(OptionGroup::text("Size", ["S", "M", "L", "XL"]));

        let trainer = Product::new(
            "2",
            "Minimalist Leather Trainer",
            Money::from_decimal(210.0, Currency::USD),
        )
        .with_image("https://img.example/trainer.jpg");

        let candle = Product::new("3", "Cedar Candle", Money::from_decimal(40.0, Currency::USD));

        let mut products = HashMap::new();
        for p in [coat, trainer, candle] {
            products.insert(p.id.as_str().to_string(), p);
        }
        Self { products }
    }
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn product(&self, id: &ProductId) -> Result<Option<Product>, StorefrontError> {
        Ok(self.products.get(id.as_str()).cloned())
    }
}

/// Coupon source backed by a fixed list.
pub struct FakeCoupons {
    coupons: Vec<Coupon>,
}

impl FakeCoupons {
    pub fn with_demo_coupons() -> Self {
        Self {
            coupons: vec![
                Coupon::new("SUMMER20", 20.0, Utc.with_ymd_and_hms(2099, 9, 30, 0, 0, 0).unwrap())
                    .with_usage_limit(100)
                    .with_times_used(45),
                Coupon::new("VRAXIA5", 5.0, Utc.with_ymd_and_hms(2099, 12, 31, 0, 0, 0).unwrap()),
                Coupon::new("BYGONE10", 10.0, Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()),
                Coupon::new("SPENT15", 15.0, Utc.with_ymd_and_hms(2099, 1, 1, 0, 0, 0).unwrap())
                    .with_usage_limit(10)
                    .with_times_used(10),
            ],
        }
    }
}

#[async_trait]
impl Coupons for FakeCoupons {
    async fn coupon(&self, code: &str) -> Result<Option<Coupon>, StorefrontError> {
        Ok(self.coupons.iter().find(|c| c.code == code).cloned())
    }
}

/// Order repository backed by a vector, newest first.
#[derive(Default)]
pub struct FakeOrderRepository {
    orders: Mutex<Vec<Order>>,
}

impl FakeOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a pending order directly, bypassing checkout.
    pub fn seed(&self, user: &str, total: f64, status: OrderStatus) -> OrderId {
        let mut order = Order::from_draft(
            OrderId::generate(),
            OrderDraft {
                user_id: UserId::new(user),
                items: Vec::new(),
                shipping: demo_shipping(),
                payment_provider: PaymentProvider::Stripe,
                payment_reference: "pay_seed".into(),
                total: Money::from_decimal(total, Currency::USD),
            },
        );
        order.status = status;
        let id = order.id.clone();
        self.orders.lock().unwrap().insert(0, order);
        id
    }
}

#[async_trait]
impl OrderRepository for FakeOrderRepository {
    async fn create(&self, draft: OrderDraft) -> Result<Order, StorefrontError> {
        let order = Order::from_draft(OrderId::generate(), draft);
        self.orders.lock().unwrap().insert(0, order.clone());
        Ok(order)
    }

    async fn find(&self, id: &OrderId) -> Result<Option<Order>, StorefrontError> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| &o.id == id)
            .cloned())
    }

    async fn update_status(
        &self,
        id: &OrderId,
        status: OrderStatus,
    ) -> Result<Order, StorefrontError> {
        let mut orders = self.orders.lock().unwrap();
        let order = orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| StorefrontError::OrderNotFound(id.to_string()))?;
        order.status = status;
        order.updated_at = Utc::now();
        Ok(order.clone())
    }

    async fn list(&self, filter: &OrderFilter) -> Result<Vec<Order>, StorefrontError> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .filter(|o| filter.matches(o))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &OrderId) -> Result<(), StorefrontError> {
        self.orders.lock().unwrap().retain(|o| &o.id != id);
        Ok(())
    }
}

/// Identity collaborator with a fixed answer.
pub struct FakeIdentity {
    user: Option<UserId>,
}

impl FakeIdentity {
    pub fn authenticated(user: &str) -> Self {
        Self {
            user: Some(UserId::new(user)),
        }
    }

    pub fn anonymous() -> Self {
        Self { user: None }
    }
}

#[async_trait]
impl Identity for FakeIdentity {
    async fn current_user(&self) -> Result<Option<UserId>, StorefrontError> {
        Ok(self.user.clone())
    }
}

/// Notifier that records every status-change event.
#[derive(Default)]
pub struct RecordingNotifier {
    pub events: Mutex<Vec<(OrderId, OrderStatus)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorded(&self) -> Vec<(OrderId, OrderStatus)> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatusNotifier for RecordingNotifier {
    async fn status_changed(&self, order: &Order) -> Result<(), StorefrontError> {
        self.events
            .lock()
            .unwrap()
            .push((order.id.clone(), order.status));
        Ok(())
    }
}

/// Shipping details used across tests.
pub fn demo_shipping() -> ShippingInfo {
    ShippingInfo {
        full_name: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        phone: "+44 20 7946 0000".into(),
        country: "UK".into(),
        city: "London".into(),
        address: "12 Analytical Row".into(),
    }
}
