//! End-to-end checks of the consistency rules across services.
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};

use models::{category::UNCATEGORIZED, company_profile, running_text};

use crate::category_service::{create_category, delete_category, get_category, list_categories, CreateCategoryInput};
use crate::company_profile_service::{update_company_profile, UpdateCompanyProfileInput};
use crate::post_service::{create_post, get_post, list_posts, CreatePostInput};
use crate::running_text_service::{
    create_running_text, get_active_running_text, list_running_texts, update_running_text, CreateRunningTextInput,
    UpdateRunningTextInput,
};
use crate::test_support::get_db;

async fn active_ids(db: &DatabaseConnection) -> anyhow::Result<Vec<i32>> {
    Ok(running_text::Entity::find()
        .filter(running_text::Column::IsActive.eq(true))
        .all(db)
        .await?
        .into_iter()
        .map(|r| r.id)
        .collect())
}

fn post_in(category: String) -> CreatePostInput {
    CreatePostInput { title: "Launch".into(), content: "We launched".into(), category, date: None }
}

#[tokio::test]
async fn latest_activation_wins() -> anyhow::Result<()> {
    let db = get_db().await?;
    let mut ids = Vec::new();
    for content in ["one", "two", "three"] {
        let row = create_running_text(&db, CreateRunningTextInput { content: content.into(), is_active: true }).await?;
        ids.push(row.id);
        assert_eq!(active_ids(&db).await?, vec![row.id]);
    }
    // Re-activate an older row through update
    update_running_text(&db, ids[0], UpdateRunningTextInput { is_active: Some(true), ..Default::default() }).await?;
    assert_eq!(active_ids(&db).await?, vec![ids[0]]);
    Ok(())
}

#[tokio::test]
async fn second_active_banner_deactivates_first() -> anyhow::Result<()> {
    let db = get_db().await?;
    let a = create_running_text(&db, CreateRunningTextInput { content: "A".into(), is_active: true }).await?;
    create_running_text(&db, CreateRunningTextInput { content: "B".into(), is_active: true }).await?;

    assert_eq!(get_active_running_text(&db).await?.map(|r| r.content), Some("B".to_string()));
    let a_now = running_text::Entity::find_by_id(a.id).one(&db).await?.expect("row A");
    assert!(!a_now.is_active);
    Ok(())
}

#[tokio::test]
async fn deactivating_the_active_row_promotes_nothing() -> anyhow::Result<()> {
    let db = get_db().await?;
    create_running_text(&db, CreateRunningTextInput { content: "other".into(), is_active: false }).await?;
    let active = create_running_text(&db, CreateRunningTextInput { content: "current".into(), is_active: true }).await?;

    update_running_text(&db, active.id, UpdateRunningTextInput { is_active: Some(false), ..Default::default() }).await?;
    assert!(active_ids(&db).await?.is_empty());
    assert!(list_running_texts(&db).await?.iter().all(|r| !r.is_active));
    Ok(())
}

#[tokio::test]
async fn deleting_category_moves_posts_to_uncategorized() -> anyhow::Result<()> {
    let db = get_db().await?;
    let tech = create_category(&db, CreateCategoryInput { name: "Tech".into() }).await?;
    let post = create_post(&db, post_in(tech.reference_key())).await?;

    delete_category(&db, tech.id).await?;

    let posts = list_posts(&db).await?;
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, post.id);
    assert_eq!(posts[0].category, UNCATEGORIZED);
    assert!(get_category(&db, tech.id).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn repeated_category_delete_leaves_state_unchanged() -> anyhow::Result<()> {
    let db = get_db().await?;
    let keep = create_category(&db, CreateCategoryInput { name: "Keep".into() }).await?;
    let gone = create_category(&db, CreateCategoryInput { name: "Gone".into() }).await?;
    let p = create_post(&db, post_in(gone.reference_key())).await?;

    delete_category(&db, gone.id).await?;
    let categories_after_first = list_categories(&db).await?;
    let post_after_first = get_post(&db, p.id).await?;

    delete_category(&db, gone.id).await?;
    assert_eq!(list_categories(&db).await?, categories_after_first);
    assert_eq!(get_post(&db, p.id).await?, post_after_first);
    assert_eq!(categories_after_first, vec![keep]);
    Ok(())
}

#[tokio::test]
async fn profile_is_created_once_then_merged() -> anyhow::Result<()> {
    let db = get_db().await?;
    let created = update_company_profile(&db, UpdateCompanyProfileInput { about_us: Some("X".into()), ..Default::default() }).await?;
    assert_eq!(created.about_us, "X");
    assert_eq!((created.vision.as_str(), created.mission.as_str(), created.contact_info.as_str()), ("", "", ""));

    update_company_profile(&db, UpdateCompanyProfileInput { vision: Some("V1".into()), ..Default::default() }).await?;
    let merged = update_company_profile(&db, UpdateCompanyProfileInput { mission: Some("M2".into()), ..Default::default() }).await?;
    assert_eq!(merged.vision, "V1");
    assert_eq!(merged.mission, "M2");
    assert_eq!(merged.about_us, "X");
    assert_eq!(merged.created_at, created.created_at);
    assert_eq!(company_profile::Entity::find().count(&db).await?, 1);
    Ok(())
}
