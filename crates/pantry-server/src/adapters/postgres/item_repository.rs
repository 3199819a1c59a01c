//! PostgreSQL implementation of ItemRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;

use pantry::{Attribute, AttributeKind, DomainError, Item, ItemRepository, NewItem};

/// PostgreSQL implementation of ItemRepository
pub struct PgItemRepository {
    pool: PgPool,
}

impl PgItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ItemRow {
    id: i64,
    name: String,
    desired_quantity: i32,
    current_quantity: i32,
    created_at: chrono::DateTime<chrono::Utc>,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl ItemRow {
    fn into_item(self, tags: Vec<Attribute>, locations: Vec<Attribute>) -> Item {
        Item {
            id: self.id,
            name: self.name,
            desired_quantity: self.desired_quantity,
            current_quantity: self.current_quantity,
            tags,
            locations,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Attribute joined with the item it is attached to
#[derive(sqlx::FromRow)]
struct LinkedAttributeRow {
    item_id: i64,
    id: i64,
    name: String,
    color: String,
    emoji: String,
}

fn map_sqlx(e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db) = &e {
        if db.is_unique_violation() {
            return DomainError::Conflict("An item with this name already exists".to_string());
        }
    }
    DomainError::Repository(e.to_string())
}

impl PgItemRepository {
    async fn load_links(
        &self,
        kind: AttributeKind,
        item_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<Attribute>>, DomainError> {
        let sql = match kind {
            AttributeKind::Tag => {
                r#"
                SELECT it.item_id, t.id, t.name, t.color, t.emoji
                FROM tags t
                INNER JOIN item_tags it ON t.id = it.tag_id
                WHERE it.item_id = ANY($1)
                ORDER BY t.name
                "#
            }
            AttributeKind::Location => {
                r#"
                SELECT il.item_id, l.id, l.name, l.color, l.emoji
                FROM locations l
                INNER JOIN item_locations il ON l.id = il.location_id
                WHERE il.item_id = ANY($1)
                ORDER BY l.name
                "#
            }
        };

        let rows = sqlx::query_as::<_, LinkedAttributeRow>(sql)
            .bind(item_ids)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut links: HashMap<i64, Vec<Attribute>> = HashMap::new();
        for row in rows {
            links.entry(row.item_id).or_default().push(Attribute {
                id: row.id,
                kind,
                name: row.name,
                color: row.color,
                emoji: row.emoji,
            });
        }
        Ok(links)
    }

    async fn hydrate(&self, rows: Vec<ItemRow>) -> Result<Vec<Item>, DomainError> {
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        let mut tags = self.load_links(AttributeKind::Tag, &ids).await?;
        let mut locations = self.load_links(AttributeKind::Location, &ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let item_tags = tags.remove(&row.id).unwrap_or_default();
                let item_locations = locations.remove(&row.id).unwrap_or_default();
                row.into_item(item_tags, item_locations)
            })
            .collect())
    }

    async fn hydrate_one(&self, row: Option<ItemRow>) -> Result<Option<Item>, DomainError> {
        match row {
            Some(row) => Ok(self.hydrate(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn find_all(&self) -> Result<Vec<Item>, DomainError> {
        let rows = sqlx::query_as::<_, ItemRow>("SELECT * FROM items ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        self.hydrate(rows).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, DomainError> {
        let row = sqlx::query_as::<_, ItemRow>("SELECT * FROM items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        self.hydrate_one(row).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Item>, DomainError> {
        let row = sqlx::query_as::<_, ItemRow>("SELECT * FROM items WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        self.hydrate_one(row).await
    }

    async fn insert(&self, item: &NewItem) -> Result<Item, DomainError> {
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            INSERT INTO items (name, desired_quantity, current_quantity)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&item.name)
        .bind(item.desired_quantity)
        .bind(item.current_quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.into_item(vec![], vec![]))
    }

    async fn update(&self, item: &Item) -> Result<Item, DomainError> {
        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            UPDATE items
            SET name = $2, desired_quantity = $3, current_quantity = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(item.id)
        .bind(&item.name)
        .bind(item.desired_quantity)
        .bind(item.current_quantity)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::not_found("Item", item.id))?;

        Ok(row.into_item(item.tags.clone(), item.locations.clone()))
    }

    async fn update_quantity(&self, id: i64, new_quantity: i32) -> Result<bool, DomainError> {
        let result = sqlx::query(
            "UPDATE items SET current_quantity = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(new_quantity)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_tags(&self, item_id: i64, tag_ids: &[i64]) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query("DELETE FROM item_tags WHERE item_id = $1")
            .bind(item_id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        sqlx::query(
            r#"
            INSERT INTO item_tags (item_id, tag_id)
            SELECT $1, UNNEST($2::BIGINT[])
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(item_id)
        .bind(tag_ids)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)
    }

    async fn set_locations(&self, item_id: i64, location_ids: &[i64]) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        sqlx::query("DELETE FROM item_locations WHERE item_id = $1")
            .bind(item_id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        sqlx::query(
            r#"
            INSERT INTO item_locations (item_id, location_id)
            SELECT $1, UNNEST($2::BIGINT[])
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(item_id)
        .bind(location_ids)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)
    }
}
