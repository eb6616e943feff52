//! Resource kinds, their ID prefixes and display names

/// Every resource type the CLI manages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Environment,
    ServiceAccount,
    User,
    IdentityProvider,
    IdentityPool,
    GroupMapping,
    CertificateAuthority,
    KafkaCluster,
    Connector,
    RoleBinding,
    Acl,
}

const ALL: &[ResourceKind] = &[
    ResourceKind::Environment,
    ResourceKind::ServiceAccount,
    ResourceKind::User,
    ResourceKind::IdentityProvider,
    ResourceKind::IdentityPool,
    ResourceKind::GroupMapping,
    ResourceKind::CertificateAuthority,
    ResourceKind::KafkaCluster,
    ResourceKind::Connector,
    ResourceKind::RoleBinding,
    ResourceKind::Acl,
];

impl ResourceKind {
    /// ID prefix (without the trailing hyphen), if the kind has one
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            ResourceKind::Environment => Some("env"),
            ResourceKind::ServiceAccount => Some("sa"),
            ResourceKind::User => Some("u"),
            ResourceKind::IdentityProvider => Some("op"),
            ResourceKind::IdentityPool => Some("pool"),
            ResourceKind::GroupMapping => Some("group"),
            ResourceKind::CertificateAuthority => Some("op"),
            ResourceKind::KafkaCluster => Some("lkc"),
            ResourceKind::Connector => Some("lcc"),
            ResourceKind::RoleBinding => Some("rb"),
            ResourceKind::Acl => None,
        }
    }

    /// Whether `validate_prefixes` enforces the prefix for this kind.
    ///
    /// Group mappings created before the rename still carry `pool-` IDs.
    pub fn enforces_prefix(&self) -> bool {
        !matches!(self, ResourceKind::GroupMapping) && self.prefix().is_some()
    }

    pub fn singular(&self) -> &'static str {
        match self {
            ResourceKind::Environment => "environment",
            ResourceKind::ServiceAccount => "service account",
            ResourceKind::User => "user",
            ResourceKind::IdentityProvider => "identity provider",
            ResourceKind::IdentityPool => "identity pool",
            ResourceKind::GroupMapping => "group mapping",
            ResourceKind::CertificateAuthority => "certificate authority",
            ResourceKind::KafkaCluster => "Kafka cluster",
            ResourceKind::Connector => "connector",
            ResourceKind::RoleBinding => "role binding",
            ResourceKind::Acl => "ACL",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            ResourceKind::Environment => "environments",
            ResourceKind::ServiceAccount => "service accounts",
            ResourceKind::User => "users",
            ResourceKind::IdentityProvider => "identity providers",
            ResourceKind::IdentityPool => "identity pools",
            ResourceKind::GroupMapping => "group mappings",
            ResourceKind::CertificateAuthority => "certificate authorities",
            ResourceKind::KafkaCluster => "Kafka clusters",
            ResourceKind::Connector => "connectors",
            ResourceKind::RoleBinding => "role bindings",
            ResourceKind::Acl => "ACLs",
        }
    }

    /// Singular or plural display name depending on `count`
    pub fn display(&self, count: usize) -> &'static str {
        if count == 1 {
            self.singular()
        } else {
            self.plural()
        }
    }

    /// Command that lists resources of this kind
    pub fn list_command(&self) -> &'static str {
        match self {
            ResourceKind::Environment => "confluent environment list",
            ResourceKind::ServiceAccount => "confluent iam service-account list",
            ResourceKind::User => "confluent iam user list",
            ResourceKind::IdentityProvider => "confluent iam provider list",
            ResourceKind::IdentityPool => "confluent iam pool list",
            ResourceKind::GroupMapping => "confluent iam group-mapping list",
            ResourceKind::CertificateAuthority => "confluent iam certificate-authority list",
            ResourceKind::KafkaCluster => "confluent kafka cluster list",
            ResourceKind::Connector => "confluent connect cluster list",
            ResourceKind::RoleBinding => "confluent iam rbac role-binding list",
            ResourceKind::Acl => "confluent kafka acl list",
        }
    }

    /// Infer the kind of a bare ID from its prefix.
    ///
    /// `op-` is shared by identity providers and certificate authorities;
    /// it resolves to identity provider.
    pub fn from_id(id: &str) -> Option<ResourceKind> {
        let (prefix, rest) = id.split_once('-')?;
        if rest.is_empty() {
            return None;
        }
        ALL.iter()
            .copied()
            .find(|kind| kind.prefix() == Some(prefix))
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.singular())
    }
}
