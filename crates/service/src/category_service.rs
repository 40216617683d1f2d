//! Categories, including the rule that deleting a category moves its posts to
//! [`UNCATEGORIZED`] in the same transaction.
use chrono::Utc;
use sea_orm::{sea_query::Expr, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, TransactionTrait};
use serde::Deserialize;
use tracing::{error, info, instrument};

use models::category::{self, UNCATEGORIZED};
use models::post;
use crate::errors::ServiceError;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategoryInput {
    pub name: String,
}

#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_category(db: &DatabaseConnection, input: CreateCategoryInput) -> Result<category::Model, ServiceError> {
    let created = category::create(db, &input.name).await.map_err(|e| {
        error!(error = %e, "failed to create category");
        e
    })?;
    info!(category_id = created.id, "category_created");
    Ok(created)
}

/// All categories by name.
pub async fn list_categories(db: &DatabaseConnection) -> Result<Vec<category::Model>, ServiceError> {
    Ok(category::Entity::find().order_by_asc(category::Column::Name).all(db).await?)
}

pub async fn get_category(db: &DatabaseConnection, id: i32) -> Result<Option<category::Model>, ServiceError> {
    Ok(category::Entity::find_by_id(id).one(db).await?)
}

/// Reassign referencing posts, then delete the category. Missing ids are a no-op.
///
/// Posts reference a category by [`category::reference_key`], so a post whose
/// `category` holds the category *name* is left untouched.
#[instrument(skip(db))]
pub async fn delete_category(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let txn = db.begin().await?;
    let reassigned = post::Entity::update_many()
        .col_expr(post::Column::Category, Expr::value(UNCATEGORIZED))
        .col_expr(post::Column::UpdatedAt, Expr::value(sea_orm::prelude::DateTimeWithTimeZone::from(Utc::now())))
        .filter(post::Column::Category.eq(category::reference_key(id)))
        .exec(&txn)
        .await
        .map_err(|e| {
            error!(category_id = id, error = %e, "failed to reassign posts");
            ServiceError::from(e)
        })?;
    let deleted = category::Entity::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;
    info!(category_id = id, posts_reassigned = reassigned.rows_affected, deleted = deleted.rows_affected, "category_deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post_service::{create_post, get_post, CreatePostInput};
    use crate::test_support::get_db;

    fn post_in(category: &str) -> CreatePostInput {
        CreatePostInput { title: "t".into(), content: "c".into(), category: category.into(), date: None }
    }

    #[tokio::test]
    async fn delete_reassigns_posts_by_id_string() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let news = create_category(&db, CreateCategoryInput { name: "News".into() }).await?;
        let other = create_category(&db, CreateCategoryInput { name: "Events".into() }).await?;

        let a = create_post(&db, post_in(&news.reference_key())).await?;
        let b = create_post(&db, post_in(&news.reference_key())).await?;
        let c = create_post(&db, post_in(&other.reference_key())).await?;
        let by_name = create_post(&db, post_in("News")).await?;

        delete_category(&db, news.id).await?;

        for id in [a.id, b.id] {
            let p = get_post(&db, id).await?.expect("post kept");
            assert_eq!(p.category, UNCATEGORIZED);
        }
        assert_eq!(get_post(&db, c.id).await?.expect("post").category, other.reference_key());
        assert_eq!(get_post(&db, by_name.id).await?.expect("post").category, "News");
        assert!(get_category(&db, news.id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn delete_is_idempotent() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let cat = create_category(&db, CreateCategoryInput { name: "Tips".into() }).await?;
        delete_category(&db, cat.id).await?;
        delete_category(&db, cat.id).await?;
        delete_category(&db, 12345).await?;
        assert!(list_categories(&db).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn names_are_unique_and_sorted() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        for name in ["Zeta", "Alpha", "Mid"] {
            create_category(&db, CreateCategoryInput { name: name.into() }).await?;
        }
        let names: Vec<_> = list_categories(&db).await?.into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Alpha", "Mid", "Zeta"]);
        assert!(matches!(
            create_category(&db, CreateCategoryInput { name: "Alpha".into() }).await,
            Err(ServiceError::Conflict(_))
        ));
        assert!(matches!(
            create_category(&db, CreateCategoryInput { name: " ".into() }).await,
            Err(ServiceError::Validation(_))
        ));
        Ok(())
    }
}
