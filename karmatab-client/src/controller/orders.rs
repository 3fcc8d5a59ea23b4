//! Order list with status filter chips

use shared::models::{Order, OrderStatus};
use shared::FilterOp;

use super::ListController;
use crate::gateway::orders_query;

/// Filter chip on the orders screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderFilter {
    #[default]
    All,
    Paid,
    Pending,
}

impl OrderFilter {
    pub const ALL: [OrderFilter; 3] = [Self::All, Self::Paid, Self::Pending];

    pub const fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Paid => "Paid",
            Self::Pending => "Pending",
        }
    }

    /// Status sent to the store, `None` for every order
    pub const fn status(&self) -> Option<OrderStatus> {
        match self {
            Self::All => None,
            Self::Paid => Some(OrderStatus::Paid),
            Self::Pending => Some(OrderStatus::Pending),
        }
    }

    fn from_status(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Paid => Self::Paid,
            OrderStatus::Pending => Self::Pending,
            OrderStatus::Unknown => Self::All,
        }
    }
}

pub type OrdersController = ListController<Order>;

impl ListController<Order> {
    /// Filter currently applied to the store query
    pub fn filter(&self) -> OrderFilter {
        self.request
            .filters
            .iter()
            .find(|f| f.column == "status" && f.op == FilterOp::ILike)
            .map(|f| OrderFilter::from_status(OrderStatus::parse(&f.value)))
            .unwrap_or_default()
    }

    /// Switch filter chips; reloads only when the filter actually changes
    pub async fn set_filter(&mut self, filter: OrderFilter) -> bool {
        if filter == self.filter() {
            return false;
        }
        tracing::debug!(filter = filter.label(), "Order filter changed");
        self.request = orders_query(filter.status());
        self.load().await;
        true
    }
}
