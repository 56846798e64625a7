use serde::{Deserialize, Serialize};
use std::fmt;

/// Статус заказа. Новые заказы всегда создаются со статусом `New`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "новый")]
    New,
    #[serde(rename = "в обработке")]
    InProgress,
    #[serde(rename = "завершён")]
    Completed,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::New => "новый",
            OrderStatus::InProgress => "в обработке",
            OrderStatus::Completed => "завершён",
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::New,
            OrderStatus::InProgress,
            OrderStatus::Completed,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.label() == label.trim())
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
