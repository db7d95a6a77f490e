use chrono::NaiveDate;
use orchard_shared::types::Equipment;

/// Machines whose next service date is on or before `today`, most overdue
/// first.
pub fn equipment_due(equipment: &[Equipment], today: NaiveDate) -> Vec<Equipment> {
    let mut due: Vec<Equipment> = equipment
        .iter()
        .filter(|machine| machine.service_due(today))
        .cloned()
        .collect();
    due.sort_by_key(|machine| machine.next_service_on);
    due
}

#[cfg(test)]
mod tests {
    use super::*;
    use orchard_shared::types::{EquipmentStatus, Session};
    use uuid::Uuid;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn machine(name: &str, next: Option<NaiveDate>) -> Equipment {
        let mut machine = Equipment::new(&Session::new(Uuid::nil()), name, "tractor");
        machine.next_service_on = next;
        machine
    }

    #[test]
    fn test_due_equipment_sorted_by_next_service() {
        let mut retired = machine("old", Some(day(1, 1)));
        retired.status = EquipmentStatus::Retired;
        let equipment = vec![
            machine("sprayer", Some(day(3, 1))),
            machine("tractor", Some(day(2, 1))),
            machine("mower", Some(day(3, 2))),
            machine("trailer", None),
            retired,
        ];

        let due = equipment_due(&equipment, day(3, 1));

        let names: Vec<&str> = due.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["tractor", "sprayer"]);
    }
}
