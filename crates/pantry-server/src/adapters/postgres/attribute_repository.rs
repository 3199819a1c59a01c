//! PostgreSQL implementation of AttributeRepository
//!
//! Tags and locations live in identically shaped tables; the kind selects
//! the table.

use async_trait::async_trait;
use sqlx::PgPool;

use pantry::{Attribute, AttributeKind, AttributeRepository, DomainError, NewAttribute};

/// PostgreSQL implementation of AttributeRepository
pub struct PgAttributeRepository {
    pool: PgPool,
}

impl PgAttributeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct AttributeRow {
    id: i64,
    name: String,
    color: String,
    emoji: String,
}

impl AttributeRow {
    fn into_attribute(self, kind: AttributeKind) -> Attribute {
        Attribute {
            id: self.id,
            kind,
            name: self.name,
            color: self.color,
            emoji: self.emoji,
        }
    }
}

fn table(kind: AttributeKind) -> &'static str {
    match kind {
        AttributeKind::Tag => "tags",
        AttributeKind::Location => "locations",
    }
}

fn map_sqlx(kind: AttributeKind, e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return DomainError::Conflict(format!(
                "A {} with this name already exists",
                kind
            ));
        }
    }
    DomainError::Repository(e.to_string())
}

#[async_trait]
impl AttributeRepository for PgAttributeRepository {
    async fn find_all(&self, kind: AttributeKind) -> Result<Vec<Attribute>, DomainError> {
        let sql = format!("SELECT id, name, color, emoji FROM {} ORDER BY name", table(kind));
        let rows = sqlx::query_as::<_, AttributeRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx(kind, e))?;

        Ok(rows.into_iter().map(|r| r.into_attribute(kind)).collect())
    }

    async fn find_by_id(
        &self,
        kind: AttributeKind,
        id: i64,
    ) -> Result<Option<Attribute>, DomainError> {
        let sql = format!(
            "SELECT id, name, color, emoji FROM {} WHERE id = $1",
            table(kind)
        );
        let row = sqlx::query_as::<_, AttributeRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx(kind, e))?;

        Ok(row.map(|r| r.into_attribute(kind)))
    }

    async fn find_by_name(
        &self,
        kind: AttributeKind,
        name: &str,
    ) -> Result<Option<Attribute>, DomainError> {
        let sql = format!(
            "SELECT id, name, color, emoji FROM {} WHERE name = $1",
            table(kind)
        );
        let row = sqlx::query_as::<_, AttributeRow>(&sql)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx(kind, e))?;

        Ok(row.map(|r| r.into_attribute(kind)))
    }

    async fn insert(&self, attribute: &NewAttribute) -> Result<Attribute, DomainError> {
        let kind = attribute.kind;
        let sql = format!(
            r#"
            INSERT INTO {} (name, color, emoji)
            VALUES ($1, $2, $3)
            RETURNING id, name, color, emoji
            "#,
            table(kind)
        );
        let row = sqlx::query_as::<_, AttributeRow>(&sql)
            .bind(&attribute.name)
            .bind(&attribute.color)
            .bind(&attribute.emoji)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx(kind, e))?;

        Ok(row.into_attribute(kind))
    }

    async fn update(&self, attribute: &Attribute) -> Result<Attribute, DomainError> {
        let kind = attribute.kind;
        let sql = format!(
            r#"
            UPDATE {}
            SET name = $2, color = $3, emoji = $4
            WHERE id = $1
            RETURNING id, name, color, emoji
            "#,
            table(kind)
        );
        let row = sqlx::query_as::<_, AttributeRow>(&sql)
            .bind(attribute.id)
            .bind(&attribute.name)
            .bind(&attribute.color)
            .bind(&attribute.emoji)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx(kind, e))?
            .ok_or_else(|| DomainError::not_found(kind.label(), attribute.id))?;

        Ok(row.into_attribute(kind))
    }

    async fn delete(&self, kind: AttributeKind, id: i64) -> Result<bool, DomainError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", table(kind));
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx(kind, e))?;

        Ok(result.rows_affected() > 0)
    }
}
