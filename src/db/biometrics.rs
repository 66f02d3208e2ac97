use serde_json::Value;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::models::biometrics::BiometricDocument;

/// Append a document to the `heartrate` collection. No deduplication
/// and no schema validation; the row id is the storage identifier.
pub async fn insert_document(
    pool: &PgPool,
    doc: &BiometricDocument,
) -> Result<Uuid, sqlx::Error> {
    let row = sqlx::query(
        r#"
        INSERT INTO heartrate (doc)
        VALUES ($1)
        RETURNING id
        "#,
    )
    .bind(Json(doc))
    .fetch_one(pool)
    .await?;

    row.try_get("id")
}

/// Most recent documents first, ordered by the stored `timestamp`
/// string. ISO-8601 strings in a uniform format sort chronologically.
pub async fn fetch_recent(pool: &PgPool, limit: i64) -> Result<Vec<Value>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT doc
        FROM heartrate
        ORDER BY doc->>'timestamp' DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| row.try_get::<Json<Value>, _>("doc").map(|json| json.0))
        .collect()
}

/// Documents in store-native order, paired with their storage ids.
pub async fn fetch_unordered(
    pool: &PgPool,
    limit: i64,
) -> Result<Vec<(Uuid, BiometricDocument)>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, doc
        FROM heartrate
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| {
            let id: Uuid = row.try_get("id")?;
            let doc: Json<BiometricDocument> = row.try_get("doc")?;
            Ok((id, doc.0))
        })
        .collect()
}

/// Equality filter on `dataType` plus a lower bound on the
/// `timestamp` string, ascending. Served by the expression index on
/// (doc->>'dataType', doc->>'timestamp').
pub async fn fetch_filtered(
    pool: &PgPool,
    data_type: &str,
    since_iso: &str,
) -> Result<Vec<Value>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT doc
        FROM heartrate
        WHERE doc->>'dataType' = $1
          AND doc->>'timestamp' >= $2
        ORDER BY doc->>'timestamp' ASC
        "#,
    )
    .bind(data_type)
    .bind(since_iso)
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| row.try_get::<Json<Value>, _>("doc").map(|json| json.0))
        .collect()
}

/// Full count of the collection. Unbounded scan; the collection is
/// expected to stay small and this only backs the debug endpoint.
pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM heartrate")
        .fetch_one(pool)
        .await
}
