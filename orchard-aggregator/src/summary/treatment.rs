use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use orchard_shared::types::{Field, PestTreatment, RowId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Spray cost and last treatment date of one field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldTreatmentCost {
    pub field_id: RowId,
    pub field_name: Option<String>,
    pub treatments: usize,
    pub total_cost: Decimal,
    pub last_treated_on: NaiveDate,
}

/// Treatment count and cost per field, most expensive first.
pub fn treatment_costs(treatments: &[PestTreatment], fields: &[Field]) -> Vec<FieldTreatmentCost> {
    let names: HashMap<RowId, &str> = fields
        .iter()
        .map(|field| (field.id, field.name.as_str()))
        .collect();

    let mut per_field: BTreeMap<RowId, FieldTreatmentCost> = BTreeMap::new();
    for treatment in treatments {
        per_field
            .entry(treatment.field_id)
            .and_modify(|cost| {
                cost.treatments += 1;
                cost.total_cost += treatment.cost;
                cost.last_treated_on = cost.last_treated_on.max(treatment.treated_on);
            })
            .or_insert_with(|| FieldTreatmentCost {
                field_id: treatment.field_id,
                field_name: names.get(&treatment.field_id).map(|name| name.to_string()),
                treatments: 1,
                total_cost: treatment.cost,
                last_treated_on: treatment.treated_on,
            });
    }

    let mut costs: Vec<FieldTreatmentCost> = per_field.into_values().collect();
    costs.sort_by(|a, b| b.total_cost.cmp(&a.total_cost));
    costs
}
