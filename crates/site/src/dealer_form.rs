//! Create-dealer form model and the record it produces.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::Dealer;

pub const DEALER_TYPES: [&str; 2] = ["DLR", "DGP"];
const NEW_DEALER_TYPE: &str = "Basic";
const NEW_DEALER_MENU_SET: &str = "Full Set";
const NEW_DEALER_STATUS: &str = "Active";
const REQUIRED_FIELDS: [(DealerField, &str); 3] = [
    (DealerField::Code, "Dealer code"),
    (DealerField::Name, "Dealer name"),
    (DealerField::Email, "Representative email"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Values entered in the create-dealer modal.
pub struct DealerForm {
    /// Selected edition code, one of [`DEALER_TYPES`].
    pub dealer_type: String,
    pub code: String,
    pub name: String,
    pub postal_code: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub random_password: bool,
    pub website: String,
}

impl Default for DealerForm {
    fn default() -> Self {
        Self {
            dealer_type: DEALER_TYPES[0].to_string(),
            code: String::new(),
            name: String::new(),
            postal_code: String::new(),
            address: String::new(),
            email: String::new(),
            phone: String::new(),
            random_password: true,
            website: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Free-text inputs of the form.
pub enum DealerField {
    Code,
    Name,
    PostalCode,
    Address,
    Email,
    Phone,
    Website,
}

impl DealerField {
    pub fn value(self, form: &DealerForm) -> &str {
        match self {
            Self::Code => &form.code,
            Self::Name => &form.name,
            Self::PostalCode => &form.postal_code,
            Self::Address => &form.address,
            Self::Email => &form.email,
            Self::Phone => &form.phone,
            Self::Website => &form.website,
        }
    }

    pub fn set(self, form: &mut DealerForm, value: String) {
        let slot = match self {
            Self::Code => &mut form.code,
            Self::Name => &mut form.name,
            Self::PostalCode => &mut form.postal_code,
            Self::Address => &mut form.address,
            Self::Email => &mut form.email,
            Self::Phone => &mut form.phone,
            Self::Website => &mut form.website,
        };
        *slot = value;
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DealerFormError {
    #[error("please fill in the required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

impl DealerForm {
    pub fn is_required(field: DealerField) -> bool {
        REQUIRED_FIELDS.iter().any(|(required, _)| *required == field)
    }

    /// Labels of required fields left blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        REQUIRED_FIELDS
            .into_iter()
            .filter(|(field, _)| field.value(self).trim().is_empty())
            .map(|(_, label)| label)
            .collect()
    }

    pub fn validate(&self) -> Result<(), DealerFormError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DealerFormError::MissingFields(missing))
        }
    }

    /// Builds the table record for a validated form.
    ///
    /// The id continues after the highest id in `existing`, counting branch rows, since parents
    /// and children share one selection id space.
    pub fn into_dealer(
        self,
        existing: &[Dealer],
        creation_time: String,
    ) -> Result<Dealer, DealerFormError> {
        self.validate()?;
        let code = self.code.trim().to_string();
        Ok(Dealer {
            id: next_dealer_id(existing),
            email: account_email(&code),
            code,
            name: self.name.trim().to_string(),
            edition: self.dealer_type,
            dealer_type: NEW_DEALER_TYPE.to_string(),
            side_menu_set: NEW_DEALER_MENU_SET.to_string(),
            active: NEW_DEALER_STATUS.to_string(),
            creation_time,
            region: String::new(),
            total_sales: 0,
            last_updated: "just now".to_string(),
            status: NEW_DEALER_STATUS.to_string(),
            sub_rows: Vec::new(),
        })
    }
}

/// `max(id) + 1` over every dealer and branch; `1` for an empty list.
pub fn next_dealer_id(existing: &[Dealer]) -> u64 {
    existing
        .iter()
        .flat_map(|dealer| {
            std::iter::once(dealer.id).chain(dealer.sub_rows.iter().map(|branch| branch.id))
        })
        .max()
        .map_or(1, |max| max + 1)
}

/// Account email derived from the dealer code.
pub fn account_email(code: &str) -> String {
    format!("{}@example.com", code.to_lowercase().replace(' ', ""))
}

/// `YYYY.MM.DD`, the format used by the creation-time column.
pub fn creation_stamp(year: u32, month: u32, day: u32) -> String {
    format!("{year:04}.{month:02}.{day:02}")
}

/// Today's date from the browser clock.
pub fn today_stamp() -> String {
    let now = js_sys::Date::new_0();
    creation_stamp(now.get_full_year(), now.get_month() + 1, now.get_date())
}

/// Prepends the dealer built from `form` to `dealers`.
pub fn add_dealer(
    dealers: &mut Vec<Dealer>,
    form: DealerForm,
    creation_time: String,
) -> Result<u64, DealerFormError> {
    let dealer = form.into_dealer(dealers, creation_time)?;
    let id = dealer.id;
    dealers.insert(0, dealer);
    Ok(id)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn dealer(id: u64, branches: &[u64]) -> Dealer {
        Dealer {
            id,
            code: format!("C{id}"),
            name: format!("Dealer {id}"),
            edition: "DLR".into(),
            dealer_type: "Standard".into(),
            side_menu_set: "SSC".into(),
            active: "Active".into(),
            creation_time: "2024.01.01".into(),
            email: String::new(),
            region: String::new(),
            total_sales: 0,
            last_updated: String::new(),
            status: "Active".into(),
            sub_rows: branches.iter().map(|branch| dealer(*branch, &[])).collect(),
        }
    }

    fn filled_form() -> DealerForm {
        DealerForm {
            code: "A11 AD 50501".into(),
            name: "Harbor Motors".into(),
            email: "owner@harbor.example".into(),
            ..DealerForm::default()
        }
    }

    #[test]
    fn blank_form_reports_every_required_field() {
        let err = DealerForm::default().validate().expect_err("blank form");
        assert_eq!(
            err,
            DealerFormError::MissingFields(vec![
                "Dealer code",
                "Dealer name",
                "Representative email"
            ])
        );
        assert_eq!(
            err.to_string(),
            "please fill in the required fields: Dealer code, Dealer name, Representative email"
        );
    }

    #[test]
    fn whitespace_only_values_count_as_missing() {
        let form = DealerForm {
            name: "   ".into(),
            ..filled_form()
        };
        assert_eq!(form.missing_fields(), vec!["Dealer name"]);
    }

    #[test]
    fn new_dealer_is_prepended_with_defaults() {
        let mut dealers = vec![dealer(1, &[]), dealer(7, &[])];
        let id = add_dealer(&mut dealers, filled_form(), creation_stamp(2026, 3, 9)).expect("valid");

        assert_eq!(id, 8);
        let created = &dealers[0];
        assert_eq!(created.id, 8);
        assert_eq!(created.active, "Active");
        assert_eq!(created.side_menu_set, "Full Set");
        assert_eq!(created.edition, "DLR");
        assert_eq!(created.email, "a11ad50501@example.com");
        assert_eq!(created.creation_time, "2026.03.09");
        assert_eq!(dealers.len(), 3);
    }

    #[test]
    fn fields_read_back_what_was_set() {
        let mut form = DealerForm::default();
        DealerField::Phone.set(&mut form, "010-1234-5678".into());
        assert_eq!(DealerField::Phone.value(&form), "010-1234-5678");
        assert_eq!(DealerField::Website.value(&form), "");
        assert!(DealerForm::is_required(DealerField::Email));
        assert!(!DealerForm::is_required(DealerField::Phone));
    }

    #[test]
    fn next_id_accounts_for_branch_rows() {
        assert_eq!(next_dealer_id(&[]), 1);
        assert_eq!(next_dealer_id(&[dealer(3, &[301, 302])]), 303);
    }

    #[test]
    fn invalid_form_leaves_dealers_untouched() {
        let mut dealers = vec![dealer(1, &[])];
        assert!(add_dealer(&mut dealers, DealerForm::default(), String::new()).is_err());
        assert_eq!(dealers.len(), 1);
    }
}
