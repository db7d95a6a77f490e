//! Running-balance ledger over two kinds of dated movements.
use chrono::NaiveDate;
use orchard_shared::types::{EntryKind, Ledger, LedgerEntry, LedgerEvent};
use rust_decimal::Decimal;
use tracing::warn;

/// Builds a chronologically ordered ledger with running balances.
///
/// Debits and credits are merged (debits first, each list in its own order),
/// then stably sorted by date, so events sharing a date keep their arrival
/// order. Walking the sequence from zero, a debit adds its amount and a
/// credit subtracts it.
///
/// Events without a date or with a negative amount cannot be placed; they are
/// collected in [`Ledger::skipped`] and the rest is processed normally.
/// Duplicate ids are not merged.
///
/// # Arguments
///
/// * `debits` - Movements that increase the balance (purchases, planned lines)
/// * `credits` - Movements that decrease the balance (payments, actual spend)
///
/// # Returns
///
/// The ledger; its final balance equals `sum(debits) - sum(credits)` over the
/// events that were not skipped.
pub fn build_ledger(debits: &[LedgerEvent], credits: &[LedgerEvent]) -> Ledger {
    let tagged = debits
        .iter()
        .map(|event| (EntryKind::Debit, event))
        .chain(credits.iter().map(|event| (EntryKind::Credit, event)));

    let mut skipped = Vec::new();
    let mut placed: Vec<(NaiveDate, EntryKind, &LedgerEvent)> =
        Vec::with_capacity(debits.len() + credits.len());
    for (kind, event) in tagged {
        match event.date {
            Some(_) if event.amount < Decimal::ZERO => {
                warn!(id = %event.id, amount = %event.amount, "Skipping ledger event with negative amount");
                skipped.push(event.clone());
            }
            Some(date) => placed.push((date, kind, event)),
            None => {
                warn!(id = %event.id, label = %event.label, "Skipping ledger event without a usable date");
                skipped.push(event.clone());
            }
        }
    }

    placed.sort_by_key(|(date, _, _)| *date);

    let mut balance = Decimal::ZERO;
    let entries = placed
        .into_iter()
        .map(|(date, kind, event)| {
            balance = match kind {
                EntryKind::Debit => balance + event.amount,
                EntryKind::Credit => balance - event.amount,
            };
            LedgerEntry {
                id: event.id,
                date,
                kind,
                amount: event.amount,
                label: event.label.clone(),
                balance,
            }
        })
        .collect();

    Ledger { entries, skipped }
}
