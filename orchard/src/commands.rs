//! Command handlers behind the CLI. Each returns the text to print.
use chrono::NaiveDate;
use orchard_repository::MIGRATOR;
use orchard_shared::types::{DateWindow, MasterDataItem, RowId};
use orchard_store::CancelToken;
use serde::Serialize;
use tracing::info;

use crate::bookkeeping::{self, NewPayment, NewPurchase};
use crate::config::Dependencies;
use crate::dashboard::{budget_view, dashboard_report, supplier_accounts};
use crate::errors::AppError;
use crate::report::{AccountsView, DashboardView, MasterDataView, VarianceView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn render<T: Serialize>(
    value: &T,
    format: OutputFormat,
    text: impl FnOnce(&T) -> String,
) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(text(value)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)? + "\n"),
    }
}

/// Applies pending migrations to the configured database.
pub async fn migrate(deps: &Dependencies) -> Result<String, AppError> {
    let pool = deps.require_pool()?;
    MIGRATOR.run(pool).await?;
    info!("Migrations applied");
    Ok("Migrations applied.\n".to_string())
}

/// Running ledger and outstanding balance of one supplier, or all of them.
pub async fn supplier_ledger(
    deps: &Dependencies,
    supplier: Option<RowId>,
    format: OutputFormat,
    cancel: &CancelToken,
) -> Result<String, AppError> {
    let accounts = supplier_accounts(&deps.stores, supplier, cancel).await?;
    if let (Some(id), true) = (supplier, accounts.is_empty()) {
        return Err(AppError::usage(format!("No supplier with id {id}")));
    }
    render(&accounts, format, |accounts| AccountsView(accounts).to_string())
}

/// Planned vs actual per budget category between `start` and `end`, both
/// inclusive.
pub async fn budget(
    deps: &Dependencies,
    start: NaiveDate,
    end: NaiveDate,
    format: OutputFormat,
    cancel: &CancelToken,
) -> Result<String, AppError> {
    if start > end {
        return Err(AppError::usage(format!("--start {start} is after --end {end}")));
    }
    let report = budget_view(&deps.stores, DateWindow::new(start, end), cancel).await?;
    render(&report, format, |report| VarianceView(report).to_string())
}

pub async fn dashboard(
    deps: &Dependencies,
    today: NaiveDate,
    format: OutputFormat,
    cancel: &CancelToken,
) -> Result<String, AppError> {
    let report = dashboard_report(&deps.stores, today, cancel).await?;
    render(&report, format, |report| DashboardView(report).to_string())
}

/// Lists pick-list values, optionally for one `kind`.
pub async fn master_data_list(
    deps: &Dependencies,
    kind: Option<&str>,
    format: OutputFormat,
    cancel: &CancelToken,
) -> Result<String, AppError> {
    let items = bookkeeping::master_data_items(&deps.stores, kind, cancel).await?;
    render(&items, format, |items| MasterDataView(items).to_string())
}

pub async fn master_data_add(
    deps: &Dependencies,
    kind: &str,
    value: &str,
    format: OutputFormat,
    cancel: &CancelToken,
) -> Result<String, AppError> {
    let item = bookkeeping::add_master_data(&deps.stores, &deps.session, kind, value, cancel).await?;
    render(&item, format, |item: &MasterDataItem| {
        format!("Added {} {:?} ({})\n", item.kind, item.value, item.id)
    })
}

pub async fn master_data_delete(
    deps: &Dependencies,
    id: RowId,
    format: OutputFormat,
    cancel: &CancelToken,
) -> Result<String, AppError> {
    let item = bookkeeping::delete_master_data(&deps.stores, id, cancel).await?;
    render(&item, format, |item: &MasterDataItem| {
        format!("Deleted {} {:?} ({})\n", item.kind, item.value, item.id)
    })
}

/// Records a purchase and prints the supplier's account as it stands after it.
pub async fn record_purchase(
    deps: &Dependencies,
    purchase: NewPurchase,
    format: OutputFormat,
    cancel: &CancelToken,
) -> Result<String, AppError> {
    let account = bookkeeping::record_purchase(&deps.stores, &deps.session, purchase, cancel).await?;
    render(&account, format, |account| AccountsView(std::slice::from_ref(account)).to_string())
}

/// Records a payment and prints the supplier's account as it stands after it.
pub async fn record_payment(
    deps: &Dependencies,
    payment: NewPayment,
    format: OutputFormat,
    cancel: &CancelToken,
) -> Result<String, AppError> {
    let account = bookkeeping::record_payment(&deps.stores, &deps.session, payment, cancel).await?;
    render(&account, format, |account| AccountsView(std::slice::from_ref(account)).to_string())
}
