//! Conversion of driver insert results into domain receipts.

use mongodb::bson::Bson;
use mongodb::results::InsertManyResult;

use crate::domain::InsertReceipt;

fn storage_id_text(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Build an [`InsertReceipt`] from an acknowledged `insert_many`.
pub(crate) fn receipt_from_insert_many(result: &InsertManyResult) -> InsertReceipt {
    let inserted_ids = result
        .inserted_ids
        .iter()
        .map(|(index, id)| (*index, storage_id_text(id)))
        .collect::<std::collections::BTreeMap<_, _>>();
    InsertReceipt {
        acknowledged: true,
        inserted_count: inserted_ids.len() as u64,
        inserted_ids,
    }
}
