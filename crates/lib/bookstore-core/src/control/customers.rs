use std::fmt;

use bookstore_store::models::{Book, Customer, CustomerEntry, Order, OrderEntry};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::debug;

use super::{BookstoreControlPlane, ControlError, Lookup, NotFound, matches_fragment, require_arg};

/// Orders placed by one customer, in table order.
///
/// Serializes as a map from order id to order record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderHistory {
    pub customer_id: String,
    pub orders: Vec<OrderEntry>,
}

impl OrderHistory {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.orders.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    #[must_use]
    pub fn get(&self, order_id: &str) -> Option<&Order> {
        self.orders
            .iter()
            .find(|entry| entry.order_id == order_id)
            .map(|entry| &entry.order)
    }
}

impl Serialize for OrderHistory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.orders.iter().map(|entry| (&entry.order_id, &entry.order)))
    }
}

/// Total of the stored order line prices for one customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendingSummary {
    /// The name fragment the caller supplied, echoed in the message.
    pub customer_name: String,
    pub customer_id: String,
    pub order_count: usize,
    pub total: Decimal,
}

impl fmt::Display for SpendingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut total = self
            .total
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        total.rescale(2);
        write!(
            f,
            "Customer '{}' has spent ${total} in total.",
            self.customer_name
        )
    }
}

/// An order joined with its book and customer.
///
/// A reference that does not resolve serializes as an empty object.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OrderDetails {
    pub order_id: String,
    pub order: Order,
    #[serde(serialize_with = "empty_when_missing")]
    pub book: Option<Book>,
    #[serde(serialize_with = "empty_when_missing")]
    pub customer: Option<Customer>,
}

#[allow(clippy::ref_option)]
fn empty_when_missing<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(record) => record.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

impl BookstoreControlPlane {
    /// Finds the first customer whose name contains `name`, ignoring case.
    ///
    /// # Errors
    /// Returns `ControlError::InvalidInput` if `name` is blank.
    pub fn find_customer_by_name(&self, name: &str) -> Result<Lookup<CustomerEntry>, ControlError> {
        let name = require_arg("name", name)?;
        let found = self
            .resolve_customer(name)
            .map(|(customer_id, customer)| CustomerEntry::new(customer_id, customer.clone()));
        debug!(name, found = found.is_some(), "find_customer_by_name");

        Ok(found.map_or_else(
            || {
                Lookup::NotFound(NotFound::CustomerName {
                    name: name.to_string(),
                })
            },
            Lookup::Found,
        ))
    }

    /// Lists the orders of the first customer matching `customer_name`.
    ///
    /// # Errors
    /// Returns `ControlError::InvalidInput` if `customer_name` is blank.
    pub fn find_orders_by_customer(
        &self,
        customer_name: &str,
    ) -> Result<Lookup<OrderHistory>, ControlError> {
        let customer_name = require_arg("customer_name", customer_name)?;
        let Some((customer_id, _)) = self.resolve_customer(customer_name) else {
            return Ok(Lookup::NotFound(NotFound::CustomerName {
                name: customer_name.to_string(),
            }));
        };

        let orders: Vec<OrderEntry> = self
            .data
            .orders
            .filter(|order| order.customer_id == customer_id)
            .map(|(order_id, order)| OrderEntry::new(order_id, order.clone()))
            .collect();
        debug!(customer_name, customer_id, count = orders.len(), "find_orders_by_customer");

        if orders.is_empty() {
            return Ok(Lookup::NotFound(NotFound::OrdersForCustomer {
                customer_name: customer_name.to_string(),
            }));
        }
        Ok(Lookup::Found(OrderHistory {
            customer_id: customer_id.to_string(),
            orders,
        }))
    }

    /// Sums the stored line prices of every order placed by the first
    /// customer matching `customer_name`.
    ///
    /// A matched customer with no orders yields a zero total, not a
    /// not-found.
    ///
    /// # Errors
    /// Returns `ControlError::InvalidInput` if `customer_name` is blank.
    pub fn total_spent_by_customer(
        &self,
        customer_name: &str,
    ) -> Result<Lookup<SpendingSummary>, ControlError> {
        let customer_name = require_arg("customer_name", customer_name)?;
        let Some((customer_id, _)) = self.resolve_customer(customer_name) else {
            return Ok(Lookup::NotFound(NotFound::CustomerName {
                name: customer_name.to_string(),
            }));
        };

        let (order_count, total) = self
            .data
            .orders
            .filter(|order| order.customer_id == customer_id)
            .fold((0_usize, Decimal::ZERO), |(count, total), (_, order)| {
                (count + 1, total + order.price)
            });
        debug!(customer_name, customer_id, order_count, %total, "total_spent_by_customer");

        Ok(Lookup::Found(SpendingSummary {
            customer_name: customer_name.to_string(),
            customer_id: customer_id.to_string(),
            order_count,
            total,
        }))
    }

    /// Fetches an order by exact id and joins its book and customer.
    ///
    /// # Errors
    /// Returns `ControlError::InvalidInput` if `order_id` is blank.
    pub fn get_order_details(&self, order_id: &str) -> Result<Lookup<OrderDetails>, ControlError> {
        let order_id = require_arg("order_id", order_id)?;
        let Some(order) = self.data.orders.get(order_id) else {
            return Ok(Lookup::NotFound(NotFound::OrderId {
                order_id: order_id.to_string(),
            }));
        };

        let book = self.data.books.get(&order.book_id).cloned();
        let customer = self.data.customers.get(&order.customer_id).cloned();
        if book.is_none() || customer.is_none() {
            debug!(order_id, "get_order_details: dangling reference");
        }

        Ok(Lookup::Found(OrderDetails {
            order_id: order_id.to_string(),
            order: order.clone(),
            book,
            customer,
        }))
    }

    fn resolve_customer(&self, name: &str) -> Option<(&str, &Customer)> {
        let fragment = name.to_lowercase();
        self.data
            .customers
            .find(|customer| matches_fragment(&customer.name, &fragment))
    }
}
