use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How often a bill repeats.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Recurrence {
    #[default]
    Single,
    Monthly,
    Yearly,
}

impl Recurrence {
    pub const ALL: [Recurrence; 3] = [Recurrence::Single, Recurrence::Monthly, Recurrence::Yearly];

    /// Form code used as the `<option>` value.
    pub fn code(&self) -> &'static str {
        match self {
            Recurrence::Single => "U",
            Recurrence::Monthly => "M",
            Recurrence::Yearly => "A",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Recurrence::Single => "Single",
            Recurrence::Monthly => "Monthly",
            Recurrence::Yearly => "Yearly",
        }
    }

    pub fn from_code(code: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|r| r.code() == code)
            .unwrap_or_default()
    }
}

/// Which conditional date field a status asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusDate {
    Payment,
    Cancel,
    Scheduled,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum BillStatus {
    #[default]
    Open,
    Paid,
    Scheduled,
    Canceled,
}

impl BillStatus {
    pub const ALL: [BillStatus; 4] = [
        BillStatus::Open,
        BillStatus::Paid,
        BillStatus::Scheduled,
        BillStatus::Canceled,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            BillStatus::Open => "D",
            BillStatus::Paid => "P",
            BillStatus::Scheduled => "S",
            BillStatus::Canceled => "C",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BillStatus::Open => "Open",
            BillStatus::Paid => "Paid",
            BillStatus::Scheduled => "Scheduled",
            BillStatus::Canceled => "Canceled",
        }
    }

    pub fn from_code(code: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.code() == code)
            .unwrap_or_default()
    }

    /// The date field that must be filled in (and is shown) for this status.
    pub fn required_date(&self) -> Option<StatusDate> {
        match self {
            BillStatus::Open => None,
            BillStatus::Paid => Some(StatusDate::Payment),
            BillStatus::Scheduled => Some(StatusDate::Scheduled),
            BillStatus::Canceled => Some(StatusDate::Cancel),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    Pix,
    Transfer,
    BankSlip,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Pix,
        PaymentMethod::Transfer,
        PaymentMethod::BankSlip,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethod::Pix => "P",
            PaymentMethod::Transfer => "T",
            PaymentMethod::BankSlip => "B",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Pix => "Pix",
            PaymentMethod::Transfer => "Transfer",
            PaymentMethod::BankSlip => "Bank slip",
        }
    }

    pub fn from_code(code: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|m| m.code() == code)
            .unwrap_or_default()
    }
}

/// Form values exactly as read from the browser, keyed by input name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawBillForm {
    pub description: String,
    pub id_category: String,
    pub value: String,
    pub due_date: String,
    pub recurrence: String,
    pub status: String,
    pub payment_method: String,
    pub payment_date: String,
    pub cancel_date: String,
    pub scheduled_date: String,
    pub surcharge: String,
    pub discount: String,
    pub notes: String,
}

/// A payable expense being entered, before any save.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BillDraft {
    pub description: String,
    pub category_id: i32,
    pub value: Option<Decimal>,
    pub due_date: Option<NaiveDate>,
    pub recurrence: Recurrence,
    pub status: BillStatus,
    pub payment_method: PaymentMethod,
    pub payment_date: Option<NaiveDate>,
    pub cancel_date: Option<NaiveDate>,
    pub scheduled_date: Option<NaiveDate>,
    pub surcharge: Option<Decimal>,
    pub discount: Option<Decimal>,
    pub notes: String,
}

fn non_blank(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    non_blank(raw).and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

/// Smallest magnitude a `Decimal` can hold.
const TINY: Decimal = Decimal::from_parts(1, 0, 0, false, 28);

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let s = non_blank(raw)?;
    let number = s.parse::<f64>().ok().filter(|n| !n.is_nan());

    // A nonzero number that rounds to zero would lose its sign.
    let exact = Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
        .filter(|d| !d.is_zero() || number.is_none_or(|n| n == 0.0));
    if exact.is_some() {
        return exact;
    }

    // Outside Decimal's range or precision: keep the sign and saturate.
    let number = number?;
    let approx = Decimal::from_f64(number).filter(|d| d.is_zero() == (number == 0.0));
    Some(approx.unwrap_or_else(|| {
        let magnitude = if number.abs() < 1.0 { TINY } else { Decimal::MAX };
        if number.is_sign_negative() {
            -magnitude
        } else {
            magnitude
        }
    }))
}

impl From<&RawBillForm> for BillDraft {
    fn from(raw: &RawBillForm) -> Self {
        Self {
            description: raw.description.trim().to_string(),
            category_id: non_blank(&raw.id_category)
                .and_then(|s| s.parse::<i32>().ok())
                .unwrap_or(0),
            value: parse_decimal(&raw.value),
            due_date: parse_date(&raw.due_date),
            recurrence: Recurrence::from_code(raw.recurrence.trim()),
            status: BillStatus::from_code(raw.status.trim()),
            payment_method: PaymentMethod::from_code(raw.payment_method.trim()),
            payment_date: parse_date(&raw.payment_date),
            cancel_date: parse_date(&raw.cancel_date),
            scheduled_date: parse_date(&raw.scheduled_date),
            surcharge: parse_decimal(&raw.surcharge),
            discount: parse_decimal(&raw.discount),
            notes: raw.notes.clone(),
        }
    }
}

impl BillDraft {
    /// Date currently entered for one of the status-dependent fields.
    pub fn status_date(&self, field: StatusDate) -> Option<NaiveDate> {
        match field {
            StatusDate::Payment => self.payment_date,
            StatusDate::Cancel => self.cancel_date,
            StatusDate::Scheduled => self.scheduled_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_form() -> RawBillForm {
        RawBillForm {
            description: " Energy bill ".to_string(),
            id_category: "1".to_string(),
            value: "10.50".to_string(),
            due_date: "2024-01-01".to_string(),
            recurrence: "M".to_string(),
            status: "P".to_string(),
            payment_method: "B".to_string(),
            payment_date: "2024-01-02".to_string(),
            surcharge: "0".to_string(),
            discount: "1.25".to_string(),
            notes: "pay after the 10th".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_full_form() {
        let draft = BillDraft::from(&raw_form());

        assert_eq!(draft.description, "Energy bill");
        assert_eq!(draft.category_id, 1);
        assert_eq!(draft.value, Some(Decimal::new(1050, 2)));
        assert_eq!(draft.due_date, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(draft.recurrence, Recurrence::Monthly);
        assert_eq!(draft.status, BillStatus::Paid);
        assert_eq!(draft.payment_method, PaymentMethod::BankSlip);
        assert_eq!(draft.payment_date, NaiveDate::from_ymd_opt(2024, 1, 2));
        assert_eq!(draft.cancel_date, None);
        assert_eq!(draft.surcharge, Some(Decimal::ZERO));
        assert_eq!(draft.discount, Some(Decimal::new(125, 2)));
    }

    #[test]
    fn test_parse_blank_form_uses_defaults() {
        let draft = BillDraft::from(&RawBillForm::default());

        assert_eq!(draft.category_id, 0);
        assert_eq!(draft.value, None);
        assert_eq!(draft.due_date, None);
        assert_eq!(draft.recurrence, Recurrence::Single);
        assert_eq!(draft.status, BillStatus::Open);
        assert_eq!(draft.payment_method, PaymentMethod::Pix);
        assert_eq!(draft.surcharge, None);
    }

    #[test]
    fn test_parse_garbage_numbers_are_absent() {
        let raw = RawBillForm {
            id_category: "abc".to_string(),
            value: "ten".to_string(),
            due_date: "01/01/2024".to_string(),
            surcharge: "-".to_string(),
            ..Default::default()
        };
        let draft = BillDraft::from(&raw);

        assert_eq!(draft.category_id, 0);
        assert_eq!(draft.value, None);
        assert_eq!(draft.due_date, None);
        assert_eq!(draft.surcharge, None);
    }

    #[test]
    fn test_parse_out_of_range_numbers_keep_their_sign() {
        for huge_negative in ["-1e40", "-99999999999999999999999999999", "-1e308"] {
            let raw = RawBillForm {
                surcharge: huge_negative.to_string(),
                discount: huge_negative.to_string(),
                ..Default::default()
            };
            let draft = BillDraft::from(&raw);
            assert_eq!(draft.surcharge, Some(Decimal::MIN), "{}", huge_negative);
            assert_eq!(draft.discount, Some(Decimal::MIN), "{}", huge_negative);
        }

        let raw = RawBillForm {
            value: "1e40".to_string(),
            ..Default::default()
        };
        assert_eq!(BillDraft::from(&raw).value, Some(Decimal::MAX));
    }

    #[test]
    fn test_parse_scientific_and_tiny_numbers() {
        let raw = RawBillForm {
            value: "1.5e2".to_string(),
            surcharge: "-1e-40".to_string(),
            ..Default::default()
        };
        let draft = BillDraft::from(&raw);

        assert_eq!(draft.value, Some(Decimal::new(150, 0)));
        assert!(draft.surcharge.is_some_and(|s| s < Decimal::ZERO));
    }

    #[test]
    fn test_unknown_codes_fall_back_to_default() {
        assert_eq!(BillStatus::from_code("X"), BillStatus::Open);
        assert_eq!(Recurrence::from_code(""), Recurrence::Single);
        assert_eq!(PaymentMethod::from_code("Z"), PaymentMethod::Pix);
    }

    #[test]
    fn test_codes_round_trip() {
        for status in BillStatus::ALL {
            assert_eq!(BillStatus::from_code(status.code()), status);
        }
        for recurrence in Recurrence::ALL {
            assert_eq!(Recurrence::from_code(recurrence.code()), recurrence);
        }
        for method in PaymentMethod::ALL {
            assert_eq!(PaymentMethod::from_code(method.code()), method);
        }
    }

    #[test]
    fn test_required_date_per_status() {
        assert_eq!(BillStatus::Open.required_date(), None);
        assert_eq!(BillStatus::Paid.required_date(), Some(StatusDate::Payment));
        assert_eq!(BillStatus::Canceled.required_date(), Some(StatusDate::Cancel));
        assert_eq!(
            BillStatus::Scheduled.required_date(),
            Some(StatusDate::Scheduled)
        );
    }

    #[test]
    fn test_draft_serializes_money_as_string() {
        let draft = BillDraft::from(&raw_form());
        let json = serde_json::to_value(&draft).expect("draft should serialize");

        assert_eq!(json["value"], "10.50");
        assert_eq!(json["due_date"], "2024-01-01");
        assert_eq!(json["status"], "Paid");
    }
}
