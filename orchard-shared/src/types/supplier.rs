use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::{ActualAmount, LedgerEvent, PlannedAmount, RowId, Session, UserId};

/// A vendor the farm buys inputs from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct Supplier {
    pub id: RowId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Supplier {
    pub fn new(session: &Session, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: session.user_id,
            created_at: Utc::now(),
            name: name.into(),
            contact_name: None,
            phone: None,
            email: None,
        }
    }
}

/// A purchase invoice from a supplier. Purchases are the debit side of the
/// supplier ledger.
///
/// `total` is always `subtotal + tax`; the constructor and
/// [`SupplierPurchase::set_amounts`] keep the identity, the backend does not
/// enforce it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct SupplierPurchase {
    pub id: RowId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub supplier_id: RowId,
    pub purchased_on: Option<NaiveDate>,
    pub description: String,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl SupplierPurchase {
    pub fn new(
        session: &Session,
        supplier_id: RowId,
        purchased_on: NaiveDate,
        description: impl Into<String>,
        subtotal: Decimal,
        tax: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: session.user_id,
            created_at: Utc::now(),
            supplier_id,
            purchased_on: Some(purchased_on),
            description: description.into(),
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }

    pub fn set_amounts(&mut self, subtotal: Decimal, tax: Decimal) {
        self.subtotal = subtotal;
        self.tax = tax;
        self.total = subtotal + tax;
    }
}

/// A payment made to a supplier. Payments are the credit side of the
/// supplier ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, sqlx::FromRow)]
pub struct SupplierPayment {
    pub id: RowId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub supplier_id: RowId,
    pub paid_on: Option<NaiveDate>,
    pub amount: Decimal,
    pub method: Option<String>,
    pub reference: Option<String>,
}

impl SupplierPayment {
    pub fn new(session: &Session, supplier_id: RowId, paid_on: NaiveDate, amount: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: session.user_id,
            created_at: Utc::now(),
            supplier_id,
            paid_on: Some(paid_on),
            amount,
            method: None,
            reference: None,
        }
    }
}

impl From<&SupplierPurchase> for LedgerEvent {
    fn from(purchase: &SupplierPurchase) -> Self {
        LedgerEvent {
            id: purchase.id,
            date: purchase.purchased_on,
            amount: purchase.total,
            label: purchase.description.clone(),
        }
    }
}

impl From<&SupplierPayment> for LedgerEvent {
    fn from(payment: &SupplierPayment) -> Self {
        let label = match &payment.reference {
            Some(reference) => format!("Payment {reference}"),
            None => "Payment".to_string(),
        };
        LedgerEvent {
            id: payment.id,
            date: payment.paid_on,
            amount: payment.amount,
            label,
        }
    }
}

/// For the outstanding-balance view, purchases are "planned" spend keyed by
/// supplier and carry the default alert threshold.
impl From<&SupplierPurchase> for PlannedAmount {
    fn from(purchase: &SupplierPurchase) -> Self {
        PlannedAmount::new(purchase.supplier_id.to_string(), purchase.total)
    }
}

impl From<&SupplierPayment> for ActualAmount {
    fn from(payment: &SupplierPayment) -> Self {
        ActualAmount {
            category: payment.supplier_id.to_string(),
            date: payment.paid_on,
            amount: payment.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    fn session() -> Session {
        Session::new(Uuid::new_v4())
    }

    #[test]
    fn test_purchase_total_is_subtotal_plus_tax() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let mut purchase =
            SupplierPurchase::new(&session(), Uuid::new_v4(), date, "Fertilizer", dec(1000), dec(160));
        assert_eq!(purchase.total, dec(1160));

        purchase.set_amounts(dec(500), dec(80));
        assert_eq!(purchase.total, dec(580));
    }

    #[test]
    fn test_purchase_converts_to_ledger_debit() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let purchase =
            SupplierPurchase::new(&session(), Uuid::new_v4(), date, "Fertilizer", dec(1000), dec(0));
        let event = LedgerEvent::from(&purchase);
        assert_eq!(event.id, purchase.id);
        assert_eq!(event.date, Some(date));
        assert_eq!(event.amount, dec(1000));
        assert_eq!(event.label, "Fertilizer");
    }

    #[test]
    fn test_payment_label_includes_reference() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let mut payment = SupplierPayment::new(&session(), Uuid::new_v4(), date, dec(400));
        assert_eq!(LedgerEvent::from(&payment).label, "Payment");

        payment.reference = Some("TR-77".to_string());
        assert_eq!(LedgerEvent::from(&payment).label, "Payment TR-77");
    }

    #[test]
    fn test_supplier_keyed_variance_inputs() {
        let supplier_id = Uuid::new_v4();
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let purchase =
            SupplierPurchase::new(&session(), supplier_id, date, "Crates", dec(300), dec(0));
        let payment = SupplierPayment::new(&session(), supplier_id, date, dec(100));

        assert_eq!(PlannedAmount::from(&purchase).category, supplier_id.to_string());
        assert_eq!(ActualAmount::from(&payment).category, supplier_id.to_string());
    }
}
