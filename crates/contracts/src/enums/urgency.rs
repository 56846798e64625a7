use serde::{Deserialize, Serialize};
use std::fmt;

/// Срочность заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Urgency {
    #[default]
    #[serde(rename = "обычный")]
    Normal,
    #[serde(rename = "срочный")]
    Urgent,
    #[serde(rename = "очень срочно")]
    VeryUrgent,
}

impl Urgency {
    /// Значение, которое хранится в БД и приходит из формы
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Normal => "обычный",
            Urgency::Urgent => "срочный",
            Urgency::VeryUrgent => "очень срочно",
        }
    }

    pub fn all() -> Vec<Urgency> {
        vec![Urgency::Normal, Urgency::Urgent, Urgency::VeryUrgent]
    }

    /// Парсинг из строки
    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|u| u.label() == label.trim())
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_parse_back() {
        for u in Urgency::all() {
            assert_eq!(Urgency::from_label(u.label()), Some(u));
        }
        assert_eq!(Urgency::from_label(" срочный "), Some(Urgency::Urgent));
        assert_eq!(Urgency::from_label("вчера"), None);
    }

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&Urgency::VeryUrgent).unwrap();
        assert_eq!(json, "\"очень срочно\"");
    }
}
