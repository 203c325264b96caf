//! Integration tests for JSON round-trip serialization of key REST types.
//!
//! Each test constructs a realistic JSON fixture, deserializes it into the
//! Rust type, verifies field values, then re-serializes and deserializes again
//! to confirm the round-trip is lossless.

use chrona::types::*;

// ---------------------------------------------------------------------------
// Bucket / RetentionRule
// ---------------------------------------------------------------------------

#[test]
fn test_bucket_round_trip() {
    let json = r#"{
        "id": "020f755c3c082000",
        "name": "robot sensor",
        "orgId": "02e1f9d1a1580000",
        "organization": "Org One",
        "retentionRules": [
            {"type": "expire", "everySeconds": 3600}
        ],
        "links": {
            "self": "/api/v2/buckets/020f755c3c082000",
            "org": "/api/v2/orgs/02e1f9d1a1580000",
            "logs": "/api/v2/buckets/020f755c3c082000/logs",
            "labels": "/api/v2/buckets/020f755c3c082000/labels"
        }
    }"#;

    let bucket: Bucket = serde_json::from_str(json).unwrap();
    assert_eq!(bucket.id, "020f755c3c082000");
    assert_eq!(bucket.name, "robot sensor");
    assert_eq!(bucket.org_id, "02e1f9d1a1580000");
    assert_eq!(bucket.organization, "Org One");
    assert_eq!(bucket.retention_rules.len(), 1);
    assert_eq!(bucket.retention_rules[0], RetentionRule::expire(3600));
    assert_eq!(bucket.links.len(), 4);
    assert_eq!(
        bucket.links["logs"],
        "/api/v2/buckets/020f755c3c082000/logs"
    );

    // Round-trip
    let serialized = serde_json::to_string(&bucket).unwrap();
    let bucket2: Bucket = serde_json::from_str(&serialized).unwrap();
    assert_eq!(bucket2.id, bucket.id);
    assert_eq!(bucket2.retention_rules, bucket.retention_rules);
}

#[test]
fn test_bucket_without_retention_rules() {
    let json = r#"{
        "id": "020f755c3c082001",
        "name": "no retention",
        "orgId": "02e1f9d1a1580000",
        "organization": "Org One"
    }"#;

    let bucket: Bucket = serde_json::from_str(json).unwrap();
    assert!(bucket.retention_rules.is_empty());
    assert!(bucket.links.is_empty());
}

#[test]
fn test_retention_rule_wire_names() {
    let rule = RetentionRule::expire(1000);
    let serialized = serde_json::to_string(&rule).unwrap();
    assert_eq!(serialized, r#"{"type":"expire","everySeconds":1000}"#);
}

#[test]
fn test_buckets_response_round_trip() {
    let json = r#"{
        "buckets": [
            {
                "id": "a1",
                "name": "one",
                "orgId": "o1",
                "organization": "Org One"
            }
        ]
    }"#;

    let response: BucketsResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.buckets.len(), 1);
    assert_eq!(response.buckets[0].name, "one");

    let empty: BucketsResponse = serde_json::from_str("{}").unwrap();
    assert!(empty.buckets.is_empty());
}

#[test]
fn test_post_bucket_request_omits_empty_rules() {
    let request = PostBucketRequest {
        name: "robot sensor".to_string(),
        org_id: "o1".to_string(),
        retention_rules: Vec::new(),
    };
    let serialized = serde_json::to_string(&request).unwrap();
    assert_eq!(serialized, r#"{"name":"robot sensor","orgId":"o1"}"#);

    let request = PostBucketRequest {
        retention_rules: vec![RetentionRule::expire(3600)],
        ..request
    };
    let serialized = serde_json::to_string(&request).unwrap();
    assert!(serialized.contains(r#""retentionRules""#));
}

// ---------------------------------------------------------------------------
// OperationLog
// ---------------------------------------------------------------------------

#[test]
fn test_operation_log_round_trip() {
    let json = r#"{
        "description": "Bucket Created",
        "time": "2024-06-15T12:30:45Z"
    }"#;

    let entry: OperationLog = serde_json::from_str(json).unwrap();
    assert_eq!(entry.description, "Bucket Created");
    assert_eq!(entry.time.to_rfc3339(), "2024-06-15T12:30:45+00:00");

    let serialized = serde_json::to_string(&entry).unwrap();
    let entry2: OperationLog = serde_json::from_str(&serialized).unwrap();
    assert_eq!(entry2.time, entry.time);
}

#[test]
fn test_operation_logs_response_empty() {
    let response: OperationLogsResponse = serde_json::from_str(r#"{"logs": []}"#).unwrap();
    assert!(response.logs.is_empty());

    let response: OperationLogsResponse = serde_json::from_str("{}").unwrap();
    assert!(response.logs.is_empty());
}

// ---------------------------------------------------------------------------
// Label
// ---------------------------------------------------------------------------

#[test]
fn test_label_round_trip() {
    let json = r#"{
        "id": "l1",
        "name": "Cool Resource",
        "properties": {"color": "green", "location": "west"}
    }"#;

    let label: Label = serde_json::from_str(json).unwrap();
    assert_eq!(label.id, "l1");
    assert_eq!(label.properties["color"], "green");

    let serialized = serde_json::to_string(&label).unwrap();
    let label2: Label = serde_json::from_str(&serialized).unwrap();
    assert_eq!(label2.properties, label.properties);
}

#[test]
fn test_label_response_wrapper() {
    let json = r#"{"label": {"id": "l1", "name": "Cool Resource"}}"#;

    let response: LabelResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.label.id, "l1");
    assert!(response.label.properties.is_empty());
}

// ---------------------------------------------------------------------------
// ResourceMember / UserRole
// ---------------------------------------------------------------------------

#[test]
fn test_resource_member_round_trip() {
    let json = r#"{
        "userId": "u1",
        "userName": "Luke Health",
        "role": "member"
    }"#;

    let member: ResourceMember = serde_json::from_str(json).unwrap();
    assert_eq!(member.user_id, "u1");
    assert_eq!(member.user_name, "Luke Health");
    assert_eq!(member.role, UserRole::Member);

    let serialized = serde_json::to_string(&member).unwrap();
    let member2: ResourceMember = serde_json::from_str(&serialized).unwrap();
    assert_eq!(member2.role, member.role);
}

#[test]
fn test_user_role_serde() {
    assert_eq!(
        serde_json::to_string(&UserRole::Member).unwrap(),
        "\"member\""
    );
    assert_eq!(serde_json::to_string(&UserRole::Owner).unwrap(), "\"owner\"");
    assert_eq!(
        serde_json::from_str::<UserRole>("\"owner\"").unwrap(),
        UserRole::Owner
    );
}

// ---------------------------------------------------------------------------
// Organization / User
// ---------------------------------------------------------------------------

#[test]
fn test_organization_round_trip() {
    let json = r#"{"id": "o1", "name": "Org One"}"#;

    let org: Organization = serde_json::from_str(json).unwrap();
    assert_eq!(org.id, "o1");

    let serialized = serde_json::to_string(&org).unwrap();
    let org2: Organization = serde_json::from_str(&serialized).unwrap();
    assert_eq!(org2.name, org.name);
}

#[test]
fn test_user_round_trip() {
    let json = r#"{"id": "u1", "name": "Luke Health"}"#;

    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.name, "Luke Health");
}

// ---------------------------------------------------------------------------
// FindOptions
// ---------------------------------------------------------------------------

#[test]
fn test_find_options_default() {
    let options = FindOptions::default();
    assert_eq!(options.limit, None);
    assert_eq!(options.offset, 0);
    assert!(options.descending);
}

#[test]
fn test_find_options_round_trip() {
    let json = r#"{"limit": 5, "offset": 10, "descending": false}"#;

    let options: FindOptions = serde_json::from_str(json).unwrap();
    assert_eq!(options.limit, Some(5));
    assert_eq!(options.offset, 10);
    assert!(!options.descending);

    let serialized = serde_json::to_string(&options).unwrap();
    let options2: FindOptions = serde_json::from_str(&serialized).unwrap();
    assert_eq!(options2, options);
}
