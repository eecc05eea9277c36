// src/domain/columns.rs
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::offer::OfferField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub label: &'static str,
    pub field: OfferField,
    pub visible_by_default: bool,
}

const fn column(label: &'static str, field: OfferField, visible_by_default: bool) -> Column {
    Column {
        label,
        field,
        visible_by_default,
    }
}

/// Table and export columns, in display order.
pub const COLUMNS: [Column; 14] = [
    column("Дата", OfferField::Date, true),
    column("Землище", OfferField::Location, true),
    column("Име", OfferField::Name, false),
    column("Телефон", OfferField::Phone, false),
    column("Имейл", OfferField::Email, false),
    column("Местност", OfferField::LandPlace, true),
    column("№ имот", OfferField::LandId, true),
    column("Дка", OfferField::Area, true),
    column("Обраб. дка", OfferField::CultivableArea, true),
    column("Цена/дка", OfferField::PricePerDecare, true),
    column("Категория", OfferField::Category, true),
    column("Аренда", OfferField::Rent, true),
    column("Договор до", OfferField::ContractUntil, true),
    column("Коментар", OfferField::Comment, true),
];

/// Columns holding personal data, left out of the buyer export.
pub const PERSONAL_LABELS: [&str; 3] = ["Име", "Телефон", "Имейл"];

pub fn column_by_label(label: &str) -> Option<&'static Column> {
    COLUMNS.iter().find(|c| c.label == label)
}

/// Label -> visible, persisted as a plain JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnVisibility(BTreeMap<String, bool>);

impl Default for ColumnVisibility {
    fn default() -> Self {
        Self(
            COLUMNS
                .iter()
                .map(|c| (c.label.to_string(), c.visible_by_default))
                .collect(),
        )
    }
}

impl ColumnVisibility {
    /// Every known column is hidden unless its label is in `checked`.
    pub fn from_checked<'a>(checked: impl IntoIterator<Item = &'a str>) -> Self {
        let checked: Vec<&str> = checked.into_iter().collect();
        Self(
            COLUMNS
                .iter()
                .map(|c| (c.label.to_string(), checked.contains(&c.label)))
                .collect(),
        )
    }

    /// Labels missing from a stored map fall back to their default.
    pub fn is_visible(&self, label: &str) -> bool {
        match self.0.get(label) {
            Some(visible) => *visible,
            None => column_by_label(label).is_some_and(|c| c.visible_by_default),
        }
    }

    pub fn visible_columns(&self) -> impl Iterator<Item = &'static Column> + '_ {
        COLUMNS.iter().filter(|c| self.is_visible(c.label))
    }
}
