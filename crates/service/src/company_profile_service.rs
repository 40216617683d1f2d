//! The company profile is a singleton row keyed by [`SINGLETON_ID`]. Reads never
//! create it; the first update does, filling omitted fields with defaults.
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, TransactionTrait};
use serde::Deserialize;
use tracing::{error, info, instrument};

use models::company_profile::{self, SINGLETON_ID};
use models::types::{double_option, validate_http_url, validate_url_list, StringList};
use crate::errors::ServiceError;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCompanyProfileInput {
    pub about_us: Option<String>,
    pub vision: Option<String>,
    pub mission: Option<String>,
    pub contact_info: Option<String>,
    pub documentation_images: Option<Vec<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub proposal_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub legal_doc_url: Option<Option<String>>,
}

impl UpdateCompanyProfileInput {
    fn validate(&self) -> Result<(), ServiceError> {
        if let Some(images) = &self.documentation_images {
            validate_url_list("documentation_images", images)?;
        }
        if let Some(Some(url)) = &self.proposal_url {
            validate_http_url("proposal_url", url)?;
        }
        if let Some(Some(url)) = &self.legal_doc_url {
            validate_http_url("legal_doc_url", url)?;
        }
        Ok(())
    }
}

pub async fn get_company_profile(db: &DatabaseConnection) -> Result<Option<company_profile::Model>, ServiceError> {
    Ok(company_profile::Entity::find_by_id(SINGLETON_ID).one(db).await?)
}

/// Merge the provided fields into the profile, creating it on first use.
#[instrument(skip(db, input))]
pub async fn update_company_profile(
    db: &DatabaseConnection,
    input: UpdateCompanyProfileInput,
) -> Result<company_profile::Model, ServiceError> {
    input.validate()?;
    let now = Utc::now();
    let txn = db.begin().await?;
    let existing = company_profile::Entity::find_by_id(SINGLETON_ID).one(&txn).await?;
    let saved = match existing {
        Some(current) => {
            let mut am: company_profile::ActiveModel = current.into();
            if let Some(v) = input.about_us { am.about_us = Set(v); }
            if let Some(v) = input.vision { am.vision = Set(v); }
            if let Some(v) = input.mission { am.mission = Set(v); }
            if let Some(v) = input.contact_info { am.contact_info = Set(v); }
            if let Some(v) = input.documentation_images { am.documentation_images = Set(StringList(v)); }
            if let Some(v) = input.proposal_url { am.proposal_url = Set(v); }
            if let Some(v) = input.legal_doc_url { am.legal_doc_url = Set(v); }
            am.updated_at = Set(now.into());
            am.update(&txn).await
        }
        None => {
            let am = company_profile::ActiveModel {
                id: Set(SINGLETON_ID),
                about_us: Set(input.about_us.unwrap_or_default()),
                vision: Set(input.vision.unwrap_or_default()),
                mission: Set(input.mission.unwrap_or_default()),
                contact_info: Set(input.contact_info.unwrap_or_default()),
                documentation_images: Set(StringList(input.documentation_images.unwrap_or_default())),
                proposal_url: Set(input.proposal_url.flatten()),
                legal_doc_url: Set(input.legal_doc_url.flatten()),
                created_at: Set(now.into()),
                updated_at: Set(now.into()),
            };
            info!("company_profile_created");
            am.insert(&txn).await
        }
    }
    .map_err(|e| {
        error!(error = %e, "failed to save company profile");
        ServiceError::from(e)
    })?;
    txn.commit().await?;
    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use sea_orm::PaginatorTrait;

    #[tokio::test]
    async fn get_never_creates() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert!(get_company_profile(&db).await?.is_none());
        assert!(get_company_profile(&db).await?.is_none());
        assert_eq!(company_profile::Entity::find().count(&db).await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn first_update_creates_with_defaults() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let p = update_company_profile(&db, UpdateCompanyProfileInput { vision: Some("V".into()), ..Default::default() }).await?;
        assert_eq!(p.id, SINGLETON_ID);
        assert_eq!(p.vision, "V");
        assert_eq!(p.about_us, "");
        assert_eq!(p.mission, "");
        assert_eq!(p.contact_info, "");
        assert!(p.documentation_images.is_empty());
        assert_eq!(p.proposal_url, None);
        assert_eq!(p.legal_doc_url, None);
        assert_eq!(get_company_profile(&db).await?, Some(p));
        Ok(())
    }

    #[tokio::test]
    async fn later_updates_merge_fields() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        update_company_profile(&db, UpdateCompanyProfileInput {
            about_us: Some("A".into()),
            vision: Some("V".into()),
            proposal_url: Some(Some("https://docs.example.com/proposal.pdf".into())),
            ..Default::default()
        })
        .await?;

        let merged = update_company_profile(&db, UpdateCompanyProfileInput { mission: Some("M".into()), ..Default::default() }).await?;
        assert_eq!((merged.about_us.as_str(), merged.vision.as_str(), merged.mission.as_str()), ("A", "V", "M"));
        assert_eq!(merged.proposal_url.as_deref(), Some("https://docs.example.com/proposal.pdf"));

        let patch: UpdateCompanyProfileInput = serde_json::from_str(r#"{"proposal_url": null}"#)?;
        let cleared = update_company_profile(&db, patch).await?;
        assert_eq!(cleared.proposal_url, None);
        assert_eq!(cleared.about_us, "A");

        assert_eq!(company_profile::Entity::find().count(&db).await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn rejects_invalid_urls() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let bad = UpdateCompanyProfileInput { documentation_images: Some(vec!["not-a-url".into()]), ..Default::default() };
        assert!(matches!(update_company_profile(&db, bad).await, Err(ServiceError::Validation(_))));
        assert!(get_company_profile(&db).await?.is_none());
        Ok(())
    }
}
