use serde::{Deserialize, Serialize};
use std::fmt;

/// Способ оплаты заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "наличные")]
    Cash,
    #[serde(rename = "карта")]
    Card,
    #[serde(rename = "перевод")]
    Transfer,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "наличные",
            PaymentMethod::Card => "карта",
            PaymentMethod::Transfer => "перевод",
        }
    }

    pub fn all() -> Vec<PaymentMethod> {
        vec![PaymentMethod::Cash, PaymentMethod::Card, PaymentMethod::Transfer]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.label() == label.trim())
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
