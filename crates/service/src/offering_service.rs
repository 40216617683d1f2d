use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use serde::Deserialize;
use tracing::{error, info, instrument};

use models::offering;
use models::types::StringList;
use crate::errors::ServiceError;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateOfferingInput {
    pub name: String,
    pub features: Vec<String>,
    pub whatsapp_link: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateOfferingInput {
    pub name: Option<String>,
    pub features: Option<Vec<String>>,
    pub whatsapp_link: Option<String>,
}

#[instrument(skip(db, input), fields(name = %input.name))]
pub async fn create_offering(db: &DatabaseConnection, input: CreateOfferingInput) -> Result<offering::Model, ServiceError> {
    let created = offering::create(db, &input.name, input.features, &input.whatsapp_link)
        .await
        .map_err(|e| {
            error!(error = %e, "failed to create service");
            e
        })?;
    info!(service_id = created.id, "service_created");
    Ok(created)
}

pub async fn list_offerings(db: &DatabaseConnection) -> Result<Vec<offering::Model>, ServiceError> {
    Ok(offering::Entity::find().order_by_asc(offering::Column::Id).all(db).await?)
}

pub async fn get_offering(db: &DatabaseConnection, id: i32) -> Result<Option<offering::Model>, ServiceError> {
    Ok(offering::Entity::find_by_id(id).one(db).await?)
}

#[instrument(skip(db, input))]
pub async fn update_offering(db: &DatabaseConnection, id: i32, input: UpdateOfferingInput) -> Result<offering::Model, ServiceError> {
    let mut am: offering::ActiveModel = offering::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("service", id))?
        .into();
    if let Some(name) = input.name {
        offering::validate_name(&name)?;
        am.name = Set(name);
    }
    if let Some(features) = input.features {
        offering::validate_features(&features)?;
        am.features = Set(StringList(features));
    }
    if let Some(link) = input.whatsapp_link {
        offering::validate_whatsapp_link(&link)?;
        am.whatsapp_link = Set(link);
    }
    am.updated_at = Set(Utc::now().into());
    let updated = am.update(db).await.map_err(|e| {
        error!(service_id = id, error = %e, "failed to update service");
        ServiceError::from(e)
    })?;
    Ok(updated)
}

pub async fn delete_offering(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
    let res = offering::Entity::delete_by_id(id).exec(db).await?;
    if res.rows_affected == 0 {
        return Err(ServiceError::not_found("service", id));
    }
    info!(service_id = id, "service_deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn input() -> CreateOfferingInput {
        CreateOfferingInput {
            name: "Web development".into(),
            features: vec!["Landing page".into(), "CMS".into()],
            whatsapp_link: "https://wa.me/628111".into(),
        }
    }

    #[tokio::test]
    async fn offering_crud_service() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let s = create_offering(&db, input()).await?;
        assert_eq!(s.features.len(), 2);

        let updated = update_offering(&db, s.id, UpdateOfferingInput { features: Some(vec!["SEO".into()]), ..Default::default() }).await?;
        assert_eq!(updated.features.0, vec!["SEO"]);
        assert_eq!(updated.name, "Web development");

        assert_eq!(list_offerings(&db).await?.len(), 1);
        delete_offering(&db, s.id).await?;
        assert!(get_offering(&db, s.id).await?.is_none());
        assert!(matches!(delete_offering(&db, s.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn offering_validation() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let mut no_features = input();
        no_features.features.clear();
        assert!(matches!(create_offering(&db, no_features).await, Err(ServiceError::Validation(_))));

        let mut bad_link = input();
        bad_link.whatsapp_link = "whatsapp".into();
        assert!(matches!(create_offering(&db, bad_link).await, Err(ServiceError::Validation(_))));

        let s = create_offering(&db, input()).await?;
        assert!(matches!(
            update_offering(&db, s.id, UpdateOfferingInput { features: Some(vec![]), ..Default::default() }).await,
            Err(ServiceError::Validation(_))
        ));
        Ok(())
    }
}
