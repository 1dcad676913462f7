use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::CollaboratorError;
use business::domain::item::model::{Item, ItemChanges, ItemFields};
use business::domain::item::repository::{ItemRepository, OrderSpec};
use business::domain::shared::paths::{CollectionPath, DocumentPath};

use super::columns::order_by_clause;
use super::entity::{ItemEntity, price_to_decimal};

const ITEM_COLUMNS: &str =
    "id, owner_id, name, price, sold_units, image_path, image_url, created_at";

pub struct ItemRepositoryPostgres {
    pool: PgPool,
}

impl ItemRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn database_error(context: &str, err: sqlx::Error) -> CollaboratorError {
    tracing::error!("{context}: {err}");
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            CollaboratorError::unavailable("The item store is unreachable")
        }
        _ => CollaboratorError::rejected("The item store refused the request"),
    }
}

/// Document ids are UUIDs; anything else cannot name an existing row.
fn parse_id(path: &DocumentPath) -> Option<Uuid> {
    Uuid::parse_str(path.id().as_str()).ok()
}

#[async_trait]
impl ItemRepository for ItemRepositoryPostgres {
    async fn fetch_collection(
        &self,
        path: &CollectionPath,
        order: &OrderSpec,
    ) -> Result<Vec<Item>, CollaboratorError> {
        let sql = format!(
            "SELECT {ITEM_COLUMNS} FROM items WHERE owner_id = $1 {}",
            order_by_clause(order)
        );
        let entities = sqlx::query_as::<_, ItemEntity>(&sql)
            .bind(path.owner().as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error("Failed to fetch items", e))?;

        entities.into_iter().map(ItemEntity::into_domain).collect()
    }

    async fn fetch_one(&self, path: &DocumentPath) -> Result<Option<Item>, CollaboratorError> {
        let Some(id) = parse_id(path) else {
            return Ok(None);
        };

        let sql = format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = $1 AND owner_id = $2");
        let entity = sqlx::query_as::<_, ItemEntity>(&sql)
            .bind(id)
            .bind(path.owner().as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("Failed to fetch item", e))?;

        entity.map(ItemEntity::into_domain).transpose()
    }

    async fn create(
        &self,
        path: &CollectionPath,
        fields: &ItemFields,
    ) -> Result<Item, CollaboratorError> {
        let sql = format!(
            r#"INSERT INTO items (id, owner_id, name, price, sold_units, image_path, image_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {ITEM_COLUMNS}"#
        );
        let entity = sqlx::query_as::<_, ItemEntity>(&sql)
            .bind(Uuid::new_v4())
            .bind(path.owner().as_str())
            .bind(fields.name())
            .bind(price_to_decimal(fields.price())?)
            .bind(i64::from(fields.sold_units()))
            .bind(fields.image().path.as_str())
            .bind(&fields.image().url)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| database_error("Failed to insert item", e))?;

        entity.into_domain()
    }

    async fn update(
        &self,
        path: &DocumentPath,
        changes: &ItemChanges,
    ) -> Result<(), CollaboratorError> {
        let Some(id) = parse_id(path) else {
            return Err(CollaboratorError::NotFound);
        };
        let price = changes.price.map(price_to_decimal).transpose()?;

        let result = sqlx::query(
            r#"UPDATE items SET
                name = COALESCE($3, name),
                price = COALESCE($4, price),
                sold_units = COALESCE($5, sold_units),
                image_url = COALESCE($6, image_url)
            WHERE id = $1 AND owner_id = $2"#,
        )
        .bind(id)
        .bind(path.owner().as_str())
        .bind(changes.name.as_deref())
        .bind(price)
        .bind(changes.sold_units.map(i64::from))
        .bind(changes.image_url.as_deref())
        .execute(&self.pool)
        .await
        .map_err(|e| database_error("Failed to update item", e))?;

        if result.rows_affected() == 0 {
            return Err(CollaboratorError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, path: &DocumentPath) -> Result<(), CollaboratorError> {
        let Some(id) = parse_id(path) else {
            return Ok(());
        };

        sqlx::query("DELETE FROM items WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(path.owner().as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("Failed to delete item", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shared::value_objects::{ItemId, OwnerId};

    #[test]
    fn should_treat_non_uuid_id_as_missing() {
        let path = DocumentPath::product(&OwnerId::new("uid-1"), &ItemId::from("abc"));

        assert!(parse_id(&path).is_none());
    }

    #[test]
    fn should_parse_uuid_document_id() {
        let id = Uuid::new_v4();
        let path = DocumentPath::product(&OwnerId::new("uid-1"), &ItemId::new(id.to_string()));

        assert_eq!(parse_id(&path), Some(id));
    }

    #[test]
    fn should_report_pool_timeout_as_unavailable() {
        let error = database_error("test", sqlx::Error::PoolTimedOut);

        assert!(matches!(error, CollaboratorError::Unavailable(_)));
    }

    #[test]
    fn should_report_other_failures_as_rejected() {
        let error = database_error("test", sqlx::Error::RowNotFound);

        assert!(matches!(error, CollaboratorError::Rejected(_)));
    }
}
