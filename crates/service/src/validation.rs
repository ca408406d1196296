//! Creation payload schema. Every rule runs before any persistence attempt
//! and all violations are collected into field-addressable messages.

use std::fmt;
use std::str::FromStr;

use models::shelter::ShelterType;
use serde::{Deserialize, Serialize};

pub const MSG_NAME_REQUIRED: &str = "Nome do abrigo é obrigatório";
pub const MSG_TYPE_REQUIRED: &str = "Escolha uma opção";
pub const MSG_STREET_REQUIRED: &str = "Nome da rua/avenida é obrigatória";
pub const MSG_NUMBER_REQUIRED: &str = "Número é obrigatório";
pub const MSG_DISTRICT_REQUIRED: &str = "Bairro é obrigatório";
pub const MSG_CITY_REQUIRED: &str = "Cidade é obrigatória";
pub const MSG_STATE_UF: &str = "Informe apenas a UF";

/// Inbound creation payload, camelCase on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelterInput {
    pub name: String,
    #[serde(rename = "type")]
    pub shelter_type: String,
    pub address: AddressInput,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInput {
    pub street: String,
    pub number: String,
    pub district: String,
    #[serde(default)]
    pub reference_point: String,
    pub city: String,
    pub state: String,
}

/// One violated rule, addressed by field path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn push(&mut self, field: &'static str, message: &'static str) {
        self.0.push(FieldError { field, message });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

/// Payload that passed the schema: trimmed fields, parsed type.
#[derive(Debug, Clone)]
pub struct ValidatedShelter {
    pub name: String,
    pub shelter_type: ShelterType,
    pub address: ValidatedAddress,
}

#[derive(Debug, Clone)]
pub struct ValidatedAddress {
    pub street: String,
    pub number: String,
    pub district: String,
    pub city: String,
    pub reference_point: Option<String>,
    pub state: String,
}

fn required(value: &str, field: &'static str, message: &'static str, errors: &mut ValidationErrors) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(field, message);
    }
    trimmed.to_string()
}

/// Apply the schema to a raw payload. Collects every violation instead of
/// stopping at the first one.
pub fn validate_shelter(input: &ShelterInput) -> Result<ValidatedShelter, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let name = required(&input.name, "name", MSG_NAME_REQUIRED, &mut errors);

    // The form constrains type to a fixed selection; server-side both the
    // empty case and an out-of-range value get the selection message.
    let type_trimmed = input.shelter_type.trim();
    let shelter_type = if type_trimmed.is_empty() {
        errors.push("type", MSG_TYPE_REQUIRED);
        None
    } else {
        match ShelterType::from_str(type_trimmed) {
            Ok(t) => Some(t),
            Err(_) => {
                errors.push("type", MSG_TYPE_REQUIRED);
                None
            }
        }
    };

    let street = required(&input.address.street, "address.street", MSG_STREET_REQUIRED, &mut errors);
    let number = required(&input.address.number, "address.number", MSG_NUMBER_REQUIRED, &mut errors);
    let district =
        required(&input.address.district, "address.district", MSG_DISTRICT_REQUIRED, &mut errors);
    let city = required(&input.address.city, "address.city", MSG_CITY_REQUIRED, &mut errors);

    let reference_point = {
        let trimmed = input.address.reference_point.trim();
        if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
    };

    let state = input.address.state.trim().to_string();
    if state.chars().count() != 2 {
        errors.push("address.state", MSG_STATE_UF);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let shelter_type = shelter_type.ok_or_else(ValidationErrors::default)?;
    Ok(ValidatedShelter {
        name,
        shelter_type,
        address: ValidatedAddress { street, number, district, city, reference_point, state },
    })
}
