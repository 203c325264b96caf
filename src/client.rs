use std::collections::HashMap;

use crate::config::ChronaConfig;
use crate::error::{ChronaError, Result};
use crate::rest::ChronaHttpClient;
use crate::types::*;

/// Main Chrona client for interacting with the platform API.
#[derive(Debug, Clone)]
pub struct Chrona {
    /// Base URL for the Chrona API server.
    pub api_url: String,
    /// HTTP client.
    pub http_client: ChronaHttpClient,
}

impl Chrona {
    /// Create a new Chrona client.
    pub fn new(config: ChronaConfig) -> Self {
        let http_client = ChronaHttpClient::new(&config.api_url);
        Self {
            api_url: config.api_url,
            http_client,
        }
    }

    fn require_name(name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(ChronaError::Validation("name must not be empty".into()));
        }
        Ok(())
    }

    // --- Buckets ---

    /// Create a bucket without a retention rule (data never expires).
    pub async fn create_bucket(&self, name: &str, organization: &Organization) -> Result<Bucket> {
        Self::require_name(name)?;
        let request = PostBucketRequest {
            name: name.to_string(),
            org_id: organization.id.clone(),
            retention_rules: Vec::new(),
        };
        self.http_client.post_bucket(&request).await
    }

    /// Create a bucket with a retention rule.
    pub async fn create_bucket_with_retention(
        &self,
        name: &str,
        retention_rule: RetentionRule,
        organization: &Organization,
    ) -> Result<Bucket> {
        Self::require_name(name)?;
        let request = PostBucketRequest {
            name: name.to_string(),
            org_id: organization.id.clone(),
            retention_rules: vec![retention_rule],
        };
        self.http_client.post_bucket(&request).await
    }

    /// Find a bucket by ID. Returns `None` when no bucket exists.
    pub async fn find_bucket_by_id(&self, bucket_id: &str) -> Result<Option<Bucket>> {
        self.http_client.get_bucket(bucket_id).await
    }

    /// Find a bucket by name. Returns `None` when no bucket matches.
    pub async fn find_bucket_by_name(&self, name: &str) -> Result<Option<Bucket>> {
        let response = self.http_client.get_buckets(None, Some(name), None).await?;
        Ok(response.buckets.into_iter().next())
    }

    /// List all buckets.
    pub async fn find_buckets(&self) -> Result<Vec<Bucket>> {
        let response = self.http_client.get_buckets(None, None, None).await?;
        Ok(response.buckets)
    }

    /// List one page of buckets.
    pub async fn find_buckets_paged(&self, options: &FindOptions) -> Result<Page<Bucket>> {
        let response = self
            .http_client
            .get_buckets(None, None, Some(options))
            .await?;
        Ok(Page::new(response.buckets, *options))
    }

    /// List the buckets owned by an organization.
    pub async fn find_buckets_by_organization(
        &self,
        organization: &Organization,
    ) -> Result<Vec<Bucket>> {
        let response = self
            .http_client
            .get_buckets(Some(&organization.id), None, None)
            .await?;
        Ok(response.buckets)
    }

    /// Update a bucket's name and retention rules.
    pub async fn update_bucket(&self, bucket: &Bucket) -> Result<Bucket> {
        self.http_client
            .patch_bucket(&bucket.id, &UpdateBucketRequest::from(bucket))
            .await
    }

    /// Delete a bucket.
    pub async fn delete_bucket(&self, bucket: &Bucket) -> Result<()> {
        self.delete_bucket_by_id(&bucket.id).await
    }

    /// Delete a bucket by ID.
    pub async fn delete_bucket_by_id(&self, bucket_id: &str) -> Result<()> {
        self.http_client.delete_bucket(bucket_id).await
    }

    // --- Bucket operation log ---

    /// Get the full operation log of a bucket, newest first.
    ///
    /// An unknown bucket ID yields an empty list, not an error.
    pub async fn find_bucket_logs(&self, bucket_id: &str) -> Result<Vec<OperationLog>> {
        let response = self.http_client.get_bucket_logs(bucket_id, None).await?;
        Ok(response.unwrap_or_default().logs)
    }

    /// Get one page of a bucket's operation log.
    ///
    /// An unknown bucket ID yields an empty page, not an error.
    pub async fn find_bucket_logs_paged(
        &self,
        bucket_id: &str,
        options: &FindOptions,
    ) -> Result<Page<OperationLog>> {
        let response = self
            .http_client
            .get_bucket_logs(bucket_id, Some(options))
            .await?;
        Ok(Page::new(response.unwrap_or_default().logs, *options))
    }

    // --- Bucket labels ---

    /// List the labels attached to a bucket.
    pub async fn get_bucket_labels(&self, bucket: &Bucket) -> Result<Vec<Label>> {
        let response = self.http_client.get_bucket_labels(&bucket.id).await?;
        Ok(response.labels)
    }

    /// Attach an existing label to a bucket.
    pub async fn add_bucket_label(&self, label: &Label, bucket: &Bucket) -> Result<Label> {
        let response = self
            .http_client
            .post_bucket_label(&bucket.id, &label.id)
            .await?;
        Ok(response.label)
    }

    /// Detach a label from a bucket. The label itself survives.
    pub async fn delete_bucket_label(&self, label: &Label, bucket: &Bucket) -> Result<()> {
        self.http_client
            .delete_bucket_label(&bucket.id, &label.id)
            .await
    }

    // --- Bucket members / owners ---

    /// List the users with member access to a bucket.
    pub async fn get_bucket_members(&self, bucket: &Bucket) -> Result<Vec<ResourceMember>> {
        let response = self.http_client.get_bucket_members(&bucket.id).await?;
        Ok(response.users)
    }

    /// Grant a user member access to a bucket.
    pub async fn add_bucket_member(&self, user: &User, bucket: &Bucket) -> Result<ResourceMember> {
        self.http_client
            .post_bucket_member(&bucket.id, &user.id)
            .await
    }

    /// Revoke a user's member access to a bucket.
    pub async fn delete_bucket_member(&self, user: &User, bucket: &Bucket) -> Result<()> {
        self.http_client
            .delete_bucket_member(&bucket.id, &user.id)
            .await
    }

    /// List the users with owner access to a bucket.
    pub async fn get_bucket_owners(&self, bucket: &Bucket) -> Result<Vec<ResourceMember>> {
        let response = self.http_client.get_bucket_owners(&bucket.id).await?;
        Ok(response.users)
    }

    /// Grant a user owner access to a bucket.
    pub async fn add_bucket_owner(&self, user: &User, bucket: &Bucket) -> Result<ResourceMember> {
        self.http_client
            .post_bucket_owner(&bucket.id, &user.id)
            .await
    }

    /// Revoke a user's owner access to a bucket.
    pub async fn delete_bucket_owner(&self, user: &User, bucket: &Bucket) -> Result<()> {
        self.http_client
            .delete_bucket_owner(&bucket.id, &user.id)
            .await
    }

    // --- Labels ---

    /// Create a label.
    pub async fn create_label(
        &self,
        name: &str,
        properties: HashMap<String, String>,
    ) -> Result<Label> {
        Self::require_name(name)?;
        let request = PostLabelRequest {
            name: name.to_string(),
            properties,
        };
        let response = self.http_client.post_label(&request).await?;
        Ok(response.label)
    }

    /// Find a label by ID. Returns `None` when no label exists.
    pub async fn find_label_by_id(&self, label_id: &str) -> Result<Option<Label>> {
        let response = self.http_client.get_label(label_id).await?;
        Ok(response.map(|r| r.label))
    }

    /// Delete a label, detaching it from all resources.
    pub async fn delete_label(&self, label: &Label) -> Result<()> {
        self.http_client.delete_label(&label.id).await
    }

    // --- Organizations ---

    /// Create an organization.
    pub async fn create_organization(&self, name: &str) -> Result<Organization> {
        Self::require_name(name)?;
        let request = PostOrganizationRequest {
            name: name.to_string(),
        };
        self.http_client.post_organization(&request).await
    }

    /// Find an organization by ID. Returns `None` when no organization exists.
    pub async fn find_organization_by_id(&self, org_id: &str) -> Result<Option<Organization>> {
        self.http_client.get_organization(org_id).await
    }

    /// List all organizations.
    pub async fn find_organizations(&self) -> Result<Vec<Organization>> {
        let response = self.http_client.get_organizations().await?;
        Ok(response.orgs)
    }

    // --- Users ---

    /// Create a user.
    pub async fn create_user(&self, name: &str) -> Result<User> {
        Self::require_name(name)?;
        let request = PostUserRequest {
            name: name.to_string(),
        };
        self.http_client.post_user(&request).await
    }

    /// Find a user by ID. Returns `None` when no user exists.
    pub async fn find_user_by_id(&self, user_id: &str) -> Result<Option<User>> {
        self.http_client.get_user(user_id).await
    }
}
