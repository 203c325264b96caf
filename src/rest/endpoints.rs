use crate::error::Result;
use crate::rest::ChronaHttpClient;
use crate::types::*;

impl ChronaHttpClient {
    // --- Buckets ---

    /// POST /api/v2/buckets - Create a bucket.
    pub async fn post_bucket(&self, request: &PostBucketRequest) -> Result<Bucket> {
        self.post("/api/v2/buckets", request).await
    }

    /// GET /api/v2/buckets/{bucket_id} - Bucket by ID, `None` when unknown.
    pub async fn get_bucket(&self, bucket_id: &str) -> Result<Option<Bucket>> {
        self.get_optional(&format!("/api/v2/buckets/{bucket_id}"), &[])
            .await
    }

    /// GET /api/v2/buckets - List buckets with optional filters and paging.
    pub async fn get_buckets(
        &self,
        org_id: Option<&str>,
        name: Option<&str>,
        options: Option<&FindOptions>,
    ) -> Result<BucketsResponse> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(org_id) = org_id {
            query.push(("orgId", org_id.to_string()));
        }
        if let Some(name) = name {
            query.push(("name", name.to_string()));
        }
        if let Some(options) = options {
            query.extend(options.to_query());
        }
        let query_refs: Vec<(&str, &str)> = query.iter().map(|(k, v)| (*k, v.as_str())).collect();
        self.get("/api/v2/buckets", &query_refs).await
    }

    /// PATCH /api/v2/buckets/{bucket_id} - Update name and retention rules.
    pub async fn patch_bucket(
        &self,
        bucket_id: &str,
        request: &UpdateBucketRequest,
    ) -> Result<Bucket> {
        self.patch(&format!("/api/v2/buckets/{bucket_id}"), request)
            .await
    }

    /// DELETE /api/v2/buckets/{bucket_id} - Delete a bucket.
    pub async fn delete_bucket(&self, bucket_id: &str) -> Result<()> {
        self.delete(&format!("/api/v2/buckets/{bucket_id}")).await
    }

    /// GET /api/v2/buckets/{bucket_id}/logs - Operation log with paging.
    ///
    /// Returns `None` for an unknown bucket; callers surface that as an
    /// empty page.
    pub async fn get_bucket_logs(
        &self,
        bucket_id: &str,
        options: Option<&FindOptions>,
    ) -> Result<Option<OperationLogsResponse>> {
        let query = options.map(FindOptions::to_query).unwrap_or_default();
        let query_refs: Vec<(&str, &str)> = query.iter().map(|(k, v)| (*k, v.as_str())).collect();
        self.get_optional(&format!("/api/v2/buckets/{bucket_id}/logs"), &query_refs)
            .await
    }

    // --- Bucket labels ---

    /// GET /api/v2/buckets/{bucket_id}/labels - Labels attached to a bucket.
    pub async fn get_bucket_labels(&self, bucket_id: &str) -> Result<LabelsResponse> {
        self.get(&format!("/api/v2/buckets/{bucket_id}/labels"), &[])
            .await
    }

    /// POST /api/v2/buckets/{bucket_id}/labels - Attach a label.
    pub async fn post_bucket_label(&self, bucket_id: &str, label_id: &str) -> Result<LabelResponse> {
        let request = AddLabelRequest {
            label_id: label_id.to_string(),
        };
        self.post(&format!("/api/v2/buckets/{bucket_id}/labels"), &request)
            .await
    }

    /// DELETE /api/v2/buckets/{bucket_id}/labels/{label_id} - Detach a label.
    pub async fn delete_bucket_label(&self, bucket_id: &str, label_id: &str) -> Result<()> {
        self.delete(&format!("/api/v2/buckets/{bucket_id}/labels/{label_id}"))
            .await
    }

    // --- Bucket members / owners ---

    /// GET /api/v2/buckets/{bucket_id}/members - Users with member access.
    pub async fn get_bucket_members(&self, bucket_id: &str) -> Result<ResourceMembersResponse> {
        self.get(&format!("/api/v2/buckets/{bucket_id}/members"), &[])
            .await
    }

    /// POST /api/v2/buckets/{bucket_id}/members - Grant member access.
    pub async fn post_bucket_member(
        &self,
        bucket_id: &str,
        user_id: &str,
    ) -> Result<ResourceMember> {
        let request = AddResourceMemberRequest {
            user_id: user_id.to_string(),
        };
        self.post(&format!("/api/v2/buckets/{bucket_id}/members"), &request)
            .await
    }

    /// DELETE /api/v2/buckets/{bucket_id}/members/{user_id} - Revoke member access.
    pub async fn delete_bucket_member(&self, bucket_id: &str, user_id: &str) -> Result<()> {
        self.delete(&format!("/api/v2/buckets/{bucket_id}/members/{user_id}"))
            .await
    }

    /// GET /api/v2/buckets/{bucket_id}/owners - Users with owner access.
    pub async fn get_bucket_owners(&self, bucket_id: &str) -> Result<ResourceMembersResponse> {
        self.get(&format!("/api/v2/buckets/{bucket_id}/owners"), &[])
            .await
    }

    /// POST /api/v2/buckets/{bucket_id}/owners - Grant owner access.
    pub async fn post_bucket_owner(
        &self,
        bucket_id: &str,
        user_id: &str,
    ) -> Result<ResourceMember> {
        let request = AddResourceMemberRequest {
            user_id: user_id.to_string(),
        };
        self.post(&format!("/api/v2/buckets/{bucket_id}/owners"), &request)
            .await
    }

    /// DELETE /api/v2/buckets/{bucket_id}/owners/{user_id} - Revoke owner access.
    pub async fn delete_bucket_owner(&self, bucket_id: &str, user_id: &str) -> Result<()> {
        self.delete(&format!("/api/v2/buckets/{bucket_id}/owners/{user_id}"))
            .await
    }

    // --- Labels ---

    /// POST /api/v2/labels - Create a label.
    pub async fn post_label(&self, request: &PostLabelRequest) -> Result<LabelResponse> {
        self.post("/api/v2/labels", request).await
    }

    /// GET /api/v2/labels/{label_id} - Label by ID, `None` when unknown.
    pub async fn get_label(&self, label_id: &str) -> Result<Option<LabelResponse>> {
        self.get_optional(&format!("/api/v2/labels/{label_id}"), &[])
            .await
    }

    /// DELETE /api/v2/labels/{label_id} - Delete a label.
    pub async fn delete_label(&self, label_id: &str) -> Result<()> {
        self.delete(&format!("/api/v2/labels/{label_id}")).await
    }

    // --- Organizations ---

    /// POST /api/v2/orgs - Create an organization.
    pub async fn post_organization(
        &self,
        request: &PostOrganizationRequest,
    ) -> Result<Organization> {
        self.post("/api/v2/orgs", request).await
    }

    /// GET /api/v2/orgs/{org_id} - Organization by ID, `None` when unknown.
    pub async fn get_organization(&self, org_id: &str) -> Result<Option<Organization>> {
        self.get_optional(&format!("/api/v2/orgs/{org_id}"), &[])
            .await
    }

    /// GET /api/v2/orgs - List organizations.
    pub async fn get_organizations(&self) -> Result<OrganizationsResponse> {
        self.get("/api/v2/orgs", &[]).await
    }

    // --- Users ---

    /// POST /api/v2/users - Create a user.
    pub async fn post_user(&self, request: &PostUserRequest) -> Result<User> {
        self.post("/api/v2/users", request).await
    }

    /// GET /api/v2/users/{user_id} - User by ID, `None` when unknown.
    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        self.get_optional(&format!("/api/v2/users/{user_id}"), &[])
            .await
    }
}
