// src/domain/offer.rs
use serde::{Deserialize, Serialize};

use crate::auth::Identity;
use crate::domain::decimal::{display_decimal, normalize_decimal};
use crate::forms::FormData;

/// One land-lease offer as it is persisted.
///
/// Stored as camelCase JSON with `_id` and `_createdBy`, the layout existing
/// offer data already uses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Offer {
    pub date: String,
    pub location: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub land_place: String,
    pub land_id: String,
    pub area: String,
    pub cultivable_area: String,
    pub price_per_decare: String,
    pub category: String,
    pub rent: String,
    pub contract_until: String,
    pub comment: String,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdBy")]
    pub created_by: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OfferField {
    Date,
    Location,
    Name,
    Phone,
    Email,
    LandPlace,
    LandId,
    Area,
    CultivableArea,
    PricePerDecare,
    Category,
    Rent,
    ContractUntil,
    Comment,
    Id,
    CreatedBy,
}

impl OfferField {
    pub const ALL: [OfferField; 16] = [
        OfferField::Date,
        OfferField::Location,
        OfferField::Name,
        OfferField::Phone,
        OfferField::Email,
        OfferField::LandPlace,
        OfferField::LandId,
        OfferField::Area,
        OfferField::CultivableArea,
        OfferField::PricePerDecare,
        OfferField::Category,
        OfferField::Rent,
        OfferField::ContractUntil,
        OfferField::Comment,
        OfferField::Id,
        OfferField::CreatedBy,
    ];

    /// Fields stored in canonical decimal form.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            OfferField::Area
                | OfferField::CultivableArea
                | OfferField::PricePerDecare
                | OfferField::Rent
        )
    }
}

impl Offer {
    pub fn get(&self, field: OfferField) -> &str {
        match field {
            OfferField::Date => &self.date,
            OfferField::Location => &self.location,
            OfferField::Name => &self.name,
            OfferField::Phone => &self.phone,
            OfferField::Email => &self.email,
            OfferField::LandPlace => &self.land_place,
            OfferField::LandId => &self.land_id,
            OfferField::Area => &self.area,
            OfferField::CultivableArea => &self.cultivable_area,
            OfferField::PricePerDecare => &self.price_per_decare,
            OfferField::Category => &self.category,
            OfferField::Rent => &self.rent,
            OfferField::ContractUntil => &self.contract_until,
            OfferField::Comment => &self.comment,
            OfferField::Id => &self.id,
            OfferField::CreatedBy => &self.created_by,
        }
    }

    /// Value as shown in the table and in exports.
    pub fn display(&self, field: OfferField) -> String {
        let raw = self.get(field);
        if field.is_numeric() {
            display_decimal(raw)
        } else {
            raw.to_string()
        }
    }

    /// Build a stored record from a submitted add-form.
    pub fn from_form(form: &OfferForm, id: String, created_by: &Identity) -> Self {
        Self {
            date: form.date.clone(),
            location: form.location.trim().to_string(),
            name: form.name.trim().to_string(),
            phone: form.phone.trim().to_string(),
            email: form.email.trim().to_string(),
            land_place: form.land_place.trim().to_string(),
            land_id: form.land_id.trim().to_string(),
            area: normalize_decimal(&form.area),
            cultivable_area: normalize_decimal(&form.cultivable_area),
            price_per_decare: normalize_decimal(&form.price_per_decare),
            category: form.category.trim().to_string(),
            rent: normalize_decimal(&form.rent),
            contract_until: form.contract_until.trim().to_string(),
            comment: form.comment.trim().to_string(),
            id,
            created_by: created_by.as_str().to_string(),
        }
    }
}

/// Raw add-form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OfferForm {
    pub date: String,
    pub location: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub land_place: String,
    pub land_id: String,
    pub area: String,
    pub cultivable_area: String,
    pub price_per_decare: String,
    pub category: String,
    pub rent: String,
    pub contract_until: String,
    pub comment: String,
}

impl OfferForm {
    pub fn from_form_data(data: &FormData) -> Self {
        Self {
            date: data.get("date").to_string(),
            location: data.get("location").to_string(),
            name: data.get("name").to_string(),
            phone: data.get("phone").to_string(),
            email: data.get("email").to_string(),
            land_place: data.get("landPlace").to_string(),
            land_id: data.get("landId").to_string(),
            area: data.get("area").to_string(),
            cultivable_area: data.get("cultivableArea").to_string(),
            price_per_decare: data.get("pricePerDecare").to_string(),
            category: data.get("category").to_string(),
            rent: data.get("rent").to_string(),
            contract_until: data.get("contractUntil").to_string(),
            comment: data.get("comment").to_string(),
        }
    }
}
