//! Status enums for various entities.

use serde::{Deserialize, Serialize};

/// Stock status of a product in a seller's storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "stock_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    #[default]
    Available,
    OutOfStock,
}

impl StockStatus {
    /// The other status. Toggling twice is the identity.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Available => Self::OutOfStock,
            Self::OutOfStock => Self::Available,
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::OutOfStock => write!(f, "out_of_stock"),
        }
    }
}

impl std::str::FromStr for StockStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Self::Available),
            "out_of_stock" => Ok(Self::OutOfStock),
            _ => Err(format!("invalid stock status: {s}")),
        }
    }
}

/// Lifecycle status of an order.
///
/// The intended progression is confirmed → packed → shipped → delivered,
/// with cancellation from any non-terminal state. The update endpoint does
/// not restrict the transition graph (see DESIGN.md), so this type only
/// guarantees closure over the five states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "order_status", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Confirmed,
    Packed,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// All order statuses, in lifecycle order.
    pub const ALL: [Self; 5] = [
        Self::Confirmed,
        Self::Packed,
        Self::Shipped,
        Self::Delivered,
        Self::Cancelled,
    ];

    /// Whether this status ends the order lifecycle.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Confirmed => write!(f, "confirmed"),
            Self::Packed => write!(f, "packed"),
            Self::Shipped => write!(f, "shipped"),
            Self::Delivered => write!(f, "delivered"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confirmed" => Ok(Self::Confirmed),
            "packed" => Ok(Self::Packed),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Kind of a seller notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "notification_kind", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    NewOrder,
    StockAlert,
    PaymentSettlement,
    General,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NewOrder => write!(f, "new_order"),
            Self::StockAlert => write!(f, "stock_alert"),
            Self::PaymentSettlement => write!(f, "payment_settlement"),
            Self::General => write!(f, "general"),
        }
    }
}

impl std::str::FromStr for NotificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new_order" => Ok(Self::NewOrder),
            "stock_alert" => Ok(Self::StockAlert),
            "payment_settlement" => Ok(Self::PaymentSettlement),
            "general" => Ok(Self::General),
            _ => Err(format!("invalid notification kind: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_status_toggle_twice_is_identity() {
        for status in [StockStatus::Available, StockStatus::OutOfStock] {
            assert_ne!(status.toggled(), status);
            assert_eq!(status.toggled().toggled(), status);
        }
    }

    #[test]
    fn test_order_status_closed_over_five_states() {
        assert_eq!(OrderStatus::ALL.len(), 5);
        for status in OrderStatus::ALL {
            let parsed: OrderStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!("returned".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_order_status_terminal_states() {
        assert!(OrderStatus::Delivered.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::Confirmed.is_terminal());
        assert!(!OrderStatus::Packed.is_terminal());
        assert!(!OrderStatus::Shipped.is_terminal());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&StockStatus::OutOfStock).unwrap();
        assert_eq!(json, "\"out_of_stock\"");

        let status: OrderStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, OrderStatus::Cancelled);

        let kind: NotificationKind = serde_json::from_str("\"payment_settlement\"").unwrap();
        assert_eq!(kind, NotificationKind::PaymentSettlement);
    }

    #[test]
    fn test_display_from_str_roundtrip() {
        for kind in [
            NotificationKind::NewOrder,
            NotificationKind::StockAlert,
            NotificationKind::PaymentSettlement,
            NotificationKind::General,
        ] {
            let parsed: NotificationKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }
}
