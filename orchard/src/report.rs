//! Plain-text rendering of reports for the terminal.
use std::fmt;

use orchard_shared::types::{EntryKind, MasterDataItem, VarianceReport};

use crate::dashboard::{DashboardReport, SupplierAccount};

/// Supplier ledgers as text tables.
pub struct AccountsView<'a>(pub &'a [SupplierAccount]);

impl fmt::Display for AccountsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No suppliers found.");
        }
        for account in self.0 {
            writeln!(f, "{} ({})", account.supplier.name, account.supplier.id)?;
            if account.ledger.is_empty() {
                writeln!(f, "  No ledger entries.")?;
            }
            for entry in &account.ledger.entries {
                let sign = match entry.kind {
                    EntryKind::Debit => '+',
                    EntryKind::Credit => '-',
                };
                writeln!(
                    f,
                    "  {}  {}{:>12}  {:>12}  {}",
                    entry.date, sign, entry.amount, entry.balance, entry.label
                )?;
            }
            for skipped in &account.ledger.skipped {
                writeln!(f, "  skipped {} ({}): no usable date or amount", skipped.id, skipped.label)?;
            }
            writeln!(f, "  Outstanding: {}", account.ledger.balance())?;
        }
        Ok(())
    }
}

/// Planned vs actual per category as a text table.
pub struct VarianceView<'a>(pub &'a VarianceReport);

impl fmt::Display for VarianceView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        if let Some(window) = report.window {
            writeln!(f, "Period {} to {}", window.start, window.end)?;
        }
        if report.is_empty() {
            return writeln!(f, "No budgets for this period.");
        }
        writeln!(
            f,
            "{:<20} {:>12} {:>12} {:>12} {:>8}",
            "category", "planned", "actual", "variance", "used %"
        )?;
        for row in &report.categories {
            writeln!(
                f,
                "{:<20} {:>12} {:>12} {:>12} {:>8}{}",
                row.category,
                row.planned,
                row.actual,
                row.variance,
                row.percentage,
                if row.alerting { "  ALERT" } else { "" }
            )?;
        }
        writeln!(
            f,
            "{:<20} {:>12} {:>12}",
            "total",
            report.total_planned(),
            report.total_actual()
        )
    }
}

/// Pick-list values, one per line.
pub struct MasterDataView<'a>(pub &'a [MasterDataItem]);

impl fmt::Display for MasterDataView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No master data.");
        }
        for item in self.0 {
            writeln!(f, "{:<20} {:<24} {}", item.kind, item.value, item.id)?;
        }
        Ok(())
    }
}

pub struct DashboardView<'a>(pub &'a DashboardReport);

impl fmt::Display for DashboardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(f, "Dashboard for {}", report.today)?;

        let finances = &report.finances;
        writeln!(f, "\nFinances")?;
        if finances.is_empty() {
            writeln!(f, "  No transactions.")?;
        } else {
            writeln!(
                f,
                "  income {}  expenses {}  net {}",
                finances.total_income, finances.total_expense, finances.net
            )?;
            for month in &finances.by_month {
                writeln!(
                    f,
                    "  {}  income {:>10}  expenses {:>10}  net {:>10}",
                    month.month, month.income, month.expense, month.net
                )?;
            }
            for share in &finances.expenses_by_category {
                writeln!(f, "  {:<16} {:>10}  {:>6}%", share.category, share.amount, share.share)?;
            }
        }

        let harvest = &report.harvest;
        writeln!(f, "\nHarvest")?;
        if harvest.records == 0 {
            writeln!(f, "  No harvest records.")?;
        } else {
            writeln!(
                f,
                "  {} kg over {} pickings (avg {} kg)",
                harvest.total_kg, harvest.records, harvest.average_kg
            )?;
            for block in &harvest.by_block {
                let name = block.name.as_deref().unwrap_or("unknown block");
                match block.kg_per_tree {
                    Some(per_tree) => writeln!(f, "  {:<16} {:>10} kg  {} kg/tree", name, block.total_kg, per_tree)?,
                    None => writeln!(f, "  {:<16} {:>10} kg", name, block.total_kg)?,
                }
            }
        }

        writeln!(f, "\nInventory (stock value {})", report.stock.total_value)?;
        if report.stock.low_stock.is_empty() {
            writeln!(f, "  Nothing to reorder.")?;
        }
        for item in &report.stock.low_stock {
            writeln!(
                f,
                "  reorder {:<20} {} {} (level {})",
                item.name, item.quantity, item.unit, item.reorder_level
            )?;
        }

        writeln!(f, "\nEquipment due for service")?;
        if report.equipment_due.is_empty() {
            writeln!(f, "  None.")?;
        }
        for machine in &report.equipment_due {
            if let Some(next) = machine.next_service_on {
                writeln!(f, "  {:<20} due {}", machine.name, next)?;
            }
        }

        writeln!(f, "\nTreatments")?;
        if report.treatments.is_empty() {
            writeln!(f, "  No treatments.")?;
        }
        for cost in &report.treatments {
            writeln!(
                f,
                "  {:<20} {} treatments  {:>10}  last {}",
                cost.field_name.as_deref().unwrap_or("unknown field"),
                cost.treatments,
                cost.total_cost,
                cost.last_treated_on
            )?;
        }

        writeln!(f, "\nUpcoming")?;
        if report.upcoming.is_empty() {
            writeln!(f, "  Nothing scheduled.")?;
        }
        for event in &report.upcoming {
            writeln!(f, "  {}  {} ({})", event.starts_on, event.title, event.kind)?;
        }

        writeln!(f, "\nSupplier balances")?;
        if report.supplier_balances.is_empty() {
            writeln!(f, "  No purchases.")?;
        }
        for named in &report.supplier_balances {
            let balance = &named.balance;
            writeln!(
                f,
                "  {:<20} purchased {:>10}  paid {:>10}  outstanding {:>10}",
                named.name.as_deref().unwrap_or("unknown supplier"),
                balance.purchased,
                balance.paid,
                balance.outstanding
            )?;
        }
        Ok(())
    }
}
