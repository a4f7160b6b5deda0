//! Common traits for Cloud Foundry resources

use crate::cf::Resource;

/// Entities that carry a human-readable name
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Common trait for Cloud Foundry resources (organizations, spaces, stacks...)
///
/// Provides a unified interface for resource identification and matching.
pub trait CfResource {
    /// Get the resource GUID
    fn guid(&self) -> &str;

    /// Get the human-readable name
    fn name(&self) -> &str;

    /// Check if the resource matches by name or GUID
    fn matches(&self, input: &str) -> bool {
        self.guid() == input || self.name() == input
    }
}

impl<E: NamedEntity> CfResource for Resource<E> {
    fn guid(&self) -> &str {
        &self.metadata.guid
    }

    fn name(&self) -> &str {
        self.entity.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cf::Metadata;

    struct TestEntity {
        name: String,
    }

    impl NamedEntity for TestEntity {
        fn name(&self) -> &str {
            &self.name
        }
    }

    fn test_resource() -> Resource<TestEntity> {
        Resource {
            metadata: Metadata {
                guid: "guid-123".to_string(),
                url: None,
                created_at: None,
                updated_at: None,
            },
            entity: TestEntity {
                name: "my-resource".to_string(),
            },
        }
    }

    #[test]
    fn test_matches_by_guid() {
        assert!(test_resource().matches("guid-123"));
    }

    #[test]
    fn test_matches_by_name() {
        assert!(test_resource().matches("my-resource"));
    }

    #[test]
    fn test_no_match() {
        assert!(!test_resource().matches("other"));
    }
}
