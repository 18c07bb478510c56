use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};

const COLLECTIONS: [&str; 6] = [
    "services",
    "daily-data",
    "users",
    "mastery",
    "courses",
    "kanban",
];

/// One entity table: auto-increment identity over schemaless rows.
#[derive(Default)]
pub struct Collection {
    next_id: i64,
    rows: BTreeMap<i64, Value>,
}

impl Collection {
    pub fn insert(&mut self, mut record: Map<String, Value>) -> Value {
        self.next_id += 1;
        record.insert("id".to_string(), json!(self.next_id));
        let record = Value::Object(record);
        self.rows.insert(self.next_id, record.clone());
        record
    }

    /// Insert, or replace when the record carries an id that already exists.
    pub fn upsert(&mut self, record: Map<String, Value>) -> Value {
        match record.get("id").and_then(Value::as_i64) {
            Some(id) if self.rows.contains_key(&id) => {
                let record = Value::Object(record);
                self.rows.insert(id, record.clone());
                record
            }
            _ => self.insert(record),
        }
    }
}

#[derive(Default)]
pub struct Store {
    collections: BTreeMap<String, Collection>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let mut store = Store::default();
    for name in COLLECTIONS {
        store
            .collections
            .insert(name.to_string(), Collection::default());
    }
    let db: Db = Arc::new(RwLock::new(store));
    Router::new()
        .route("/api/daily-data/bulk", post(bulk_upsert))
        .route("/api/{collection}", get(list_records).post(create_record))
        .route(
            "/api/{collection}/{id}",
            get(get_record).put(update_record).delete(delete_record),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

type Reply = (StatusCode, Json<Value>);

fn ok(data: impl Serialize) -> Reply {
    (StatusCode::OK, Json(json!({"success": true, "data": data})))
}

fn created(data: impl Serialize) -> Reply {
    (
        StatusCode::CREATED,
        Json(json!({"success": true, "data": data})),
    )
}

fn failure(status: StatusCode, error: &str) -> Reply {
    (status, Json(json!({"success": false, "error": error})))
}

async fn list_records(State(db): State<Db>, Path(collection): Path<String>) -> Reply {
    let store = db.read().await;
    match store.collections.get(&collection) {
        Some(table) => ok(table.rows.values().cloned().collect::<Vec<_>>()),
        None => failure(StatusCode::NOT_FOUND, "unknown collection"),
    }
}

async fn create_record(
    State(db): State<Db>,
    Path(collection): Path<String>,
    Json(record): Json<Map<String, Value>>,
) -> Reply {
    let mut store = db.write().await;
    match store.collections.get_mut(&collection) {
        Some(table) => created(table.insert(record)),
        None => failure(StatusCode::NOT_FOUND, "unknown collection"),
    }
}

async fn get_record(State(db): State<Db>, Path((collection, id)): Path<(String, i64)>) -> Reply {
    let store = db.read().await;
    let Some(table) = store.collections.get(&collection) else {
        return failure(StatusCode::NOT_FOUND, "unknown collection");
    };
    match table.rows.get(&id) {
        Some(row) => ok(row),
        None => failure(StatusCode::NOT_FOUND, "record not found"),
    }
}

async fn update_record(
    State(db): State<Db>,
    Path((collection, id)): Path<(String, i64)>,
    Json(mut record): Json<Map<String, Value>>,
) -> Reply {
    let mut store = db.write().await;
    let Some(table) = store.collections.get_mut(&collection) else {
        return failure(StatusCode::NOT_FOUND, "unknown collection");
    };
    if !table.rows.contains_key(&id) {
        return failure(StatusCode::NOT_FOUND, "record not found");
    }
    record.insert("id".to_string(), json!(id));
    let record = Value::Object(record);
    table.rows.insert(id, record.clone());
    ok(record)
}

async fn delete_record(State(db): State<Db>, Path((collection, id)): Path<(String, i64)>) -> Reply {
    let mut store = db.write().await;
    let Some(table) = store.collections.get_mut(&collection) else {
        return failure(StatusCode::NOT_FOUND, "unknown collection");
    };
    match table.rows.remove(&id) {
        Some(_) => ok(true),
        None => failure(StatusCode::NOT_FOUND, "record not found"),
    }
}

async fn bulk_upsert(State(db): State<Db>, Json(body): Json<Value>) -> Reply {
    let Some(rows) = body.get("data").and_then(Value::as_array) else {
        return failure(StatusCode::BAD_REQUEST, "missing data array");
    };
    let mut store = db.write().await;
    let Some(table) = store.collections.get_mut("daily-data") else {
        return failure(StatusCode::INTERNAL_SERVER_ERROR, "store not seeded");
    };
    let mut count = 0;
    for row in rows {
        let Some(record) = row.as_object() else {
            return failure(StatusCode::BAD_REQUEST, "data entries must be objects");
        };
        table.upsert(record.clone());
        count += 1;
    }
    (StatusCode::OK, Json(json!({"success": true, "count": count})))
}
