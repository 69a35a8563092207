use cd_inventory::{CdRecord, DeleteOutcome, Inventory, InventoryFile};
use proptest::prelude::*;
use tempfile::TempDir;

fn record() -> impl Strategy<Value = CdRecord> {
    (any::<i64>(), any::<String>(), any::<String>())
        .prop_map(|(id, title, artist)| CdRecord { id, title, artist })
}

/// Records drawn from a handful of IDs so duplicates are common.
fn crowded_record() -> impl Strategy<Value = CdRecord> {
    (-3i64..3, "[a-z]{0,4}", "[a-z]{0,4}")
        .prop_map(|(id, title, artist)| CdRecord { id, title, artist })
}

proptest! {
    #[test]
    fn save_then_load_returns_same_records_in_order(
        records in prop::collection::vec(record(), 0..40)
    ) {
        let dir = TempDir::new().unwrap();
        let file = InventoryFile::new(dir.path().join("CDInventory.dat"));
        let inv = Inventory::from_records(records.clone());

        file.save(&inv).unwrap();
        let loaded = file.load().unwrap();

        prop_assert_eq!(loaded.records(), records.as_slice());
    }

    #[test]
    fn add_appends_exactly_one_record(
        records in prop::collection::vec(record(), 0..20),
        new in record(),
    ) {
        let mut inv = Inventory::from_records(records.clone());
        inv.add(&new.id.to_string(), &new.title, &new.artist).unwrap();

        let mut expected = records;
        expected.push(new);
        prop_assert_eq!(inv.records(), expected.as_slice());
    }

    #[test]
    fn delete_removes_the_earliest_match_only(
        records in prop::collection::vec(crowded_record(), 0..20),
        target in -4i64..4,
    ) {
        let mut inv = Inventory::from_records(records.clone());
        let outcome = inv.delete(&target.to_string()).unwrap();

        let mut expected = records;
        match expected.iter().position(|r| r.id == target) {
            Some(idx) => {
                expected.remove(idx);
                prop_assert_eq!(outcome, DeleteOutcome::Found);
            }
            None => prop_assert_eq!(outcome, DeleteOutcome::NotFound),
        }
        prop_assert_eq!(inv.records(), expected.as_slice());
    }
}
