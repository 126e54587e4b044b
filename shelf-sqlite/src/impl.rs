//! Remote store trait implementation for the SQLite database.

use crate::Db;
use serde_json::Value;
use shelf_core::{
    models::{Map, merge_document},
    ports::RemoteStore,
};
use sqlx::types::Json;

const UPSERT: &str = r#"
    insert into
        document (collection, key, body)
    values
        ($1, $2, $3)
    on conflict (collection, key)
        do update set body = excluded.body
"#;

impl RemoteStore for Db {
    type Error = sqlx::Error;

    async fn exists(&self, collection: &str) -> Result<bool, Self::Error> {
        let found = sqlx::query_scalar::<_, i64>(
            r#"
            select
                1
            from
                document
            where
                collection = $1
            limit 1
            "#,
        )
        .bind(collection)
        .fetch_optional(&self.reader)
        .await?;

        Ok(found.is_some())
    }

    async fn read(&self, collection: &str) -> Result<Option<Map<String, Value>>, Self::Error> {
        let rows = sqlx::query_as::<_, (String, Json<Value>)>(
            r#"
            select
                key,
                body
            from
                document
            where
                collection = $1
            order by
                key
            "#,
        )
        .bind(collection)
        .fetch_all(&self.reader)
        .await?;

        if rows.is_empty() {
            return Ok(None);
        }

        Ok(Some(
            rows.into_iter()
                .map(|(key, Json(body))| (key, body))
                .collect(),
        ))
    }

    async fn write(&self, collection: &str, key: &str, value: Value) -> Result<(), Self::Error> {
        sqlx::query(UPSERT)
            .bind(collection)
            .bind(key)
            .bind(Json(value))
            .execute(&self.writer)
            .await?;

        Ok(())
    }

    async fn merge(&self, collection: &str, key: &str, partial: Value) -> Result<(), Self::Error> {
        // SQLite's json_patch merges recursively, but a merge only replaces
        // top-level fields, so the document is rewritten here instead.
        let mut tx = self.writer.begin().await?;

        let current = sqlx::query_scalar::<_, Json<Value>>(
            r#"
            select
                body
            from
                document
            where
                collection = $1
            and
                key = $2
            "#,
        )
        .bind(collection)
        .bind(key)
        .fetch_optional(&mut *tx)
        .await?;

        let mut body = current
            .map(|Json(body)| body)
            .unwrap_or_else(|| Value::Object(Default::default()));
        merge_document(&mut body, partial);

        sqlx::query(UPSERT)
            .bind(collection)
            .bind(key)
            .bind(Json(body))
            .execute(&mut *tx)
            .await?;

        tx.commit().await
    }

    async fn delete(&self, collection: &str, key: &str) -> Result<(), Self::Error> {
        sqlx::query(
            r#"
            delete from
                document
            where
                collection = $1
            and
                key = $2
            "#,
        )
        .bind(collection)
        .bind(key)
        .execute(&self.writer)
        .await?;

        Ok(())
    }
}
