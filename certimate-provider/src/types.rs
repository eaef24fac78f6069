use serde::{Deserialize, Serialize};

/// Form values of a single variant, keyed by field name.
pub type ConfigMap = serde_json::Map<String, serde_json::Value>;

// ============ Record Kinds ============

/// The three kinds of configuration records edited through the same form engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Credentials for an external provider.
    Access,
    /// A certificate deployment target.
    Deploy,
    /// A notification channel.
    Notify,
}

impl RecordKind {
    /// Returns the persisted collection name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Access => "access",
            Self::Deploy => "deploy",
            Self::Notify => "notify",
        }
    }

    /// Parses a kind from its persisted name.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "access" => Some(Self::Access),
            "deploy" => Some(Self::Deploy),
            "notify" => Some(Self::Notify),
            _ => None,
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============ Capabilities & Usage ============

/// Capability tag declared by a variant descriptor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// Can answer ACME DNS-01 challenges.
    Dns,
    /// Can host (receive) a deployed certificate.
    Hosting,
    /// Is an ACME certificate authority.
    Ca,
    /// Can deliver notifications.
    Notification,
}

/// Context-supplied predicate narrowing which variants are selectable.
///
/// A filter never changes how an already chosen variant is validated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum UsageFilter {
    /// DNS-capable variants only.
    Dns,
    /// Hosting-capable variants only.
    Hosting,
    /// Variants that are DNS- or hosting-capable.
    #[serde(rename = "dns-hosting")]
    DnsOrHosting,
    /// Certificate authorities only.
    Ca,
    /// Notification-capable variants only.
    Notification,
}

impl UsageFilter {
    /// Returns `true` if a descriptor with `capabilities` passes this filter.
    pub fn matches(self, capabilities: &[Capability]) -> bool {
        match self {
            Self::Dns => capabilities.contains(&Capability::Dns),
            Self::Hosting => capabilities.contains(&Capability::Hosting),
            Self::DnsOrHosting => {
                capabilities.contains(&Capability::Dns)
                    || capabilities.contains(&Capability::Hosting)
            }
            Self::Ca => capabilities.contains(&Capability::Ca),
            Self::Notification => capabilities.contains(&Capability::Notification),
        }
    }

    /// Reserve tag given to a record created under this usage.
    pub fn reserve(self) -> Option<Reserve> {
        match self {
            Self::Ca => Some(Reserve::Ca),
            Self::Notification => Some(Reserve::Notification),
            Self::Dns | Self::Hosting | Self::DnsOrHosting => None,
        }
    }

    /// Parses a filter from its kebab-case name.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "dns" => Some(Self::Dns),
            "hosting" => Some(Self::Hosting),
            "dns-hosting" => Some(Self::DnsOrHosting),
            "ca" => Some(Self::Ca),
            "notification" => Some(Self::Notification),
            _ => None,
        }
    }
}

impl std::fmt::Display for UsageFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Dns => "dns",
            Self::Hosting => "hosting",
            Self::DnsOrHosting => "dns-hosting",
            Self::Ca => "ca",
            Self::Notification => "notification",
        };
        f.write_str(s)
    }
}

/// Reserve tag persisted on access records dedicated to a special purpose.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Reserve {
    /// Credential of an ACME certificate authority.
    Ca,
    /// Credential of a notification channel.
    Notification,
}

impl Reserve {
    /// Returns the persisted string of this tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ca => "ca",
            Self::Notification => "notification",
        }
    }

    /// Parses a tag from its persisted string.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ca" => Some(Self::Ca),
            "notification" => Some(Self::Notification),
            _ => None,
        }
    }
}

// ============ Field Schema ============

/// The input type of a field (affects coercion and UI rendering).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Single-line text input.
    Text,
    /// Masked/password input.
    Password,
    /// Multi-line text input.
    Textarea,
    /// Integer input; numeric strings are coerced before range checks.
    Number,
    /// Boolean toggle.
    Switch,
    /// Fixed enumeration of allowed string values.
    Select(&'static [&'static str]),
}

/// Whether a field must carry a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Always required.
    Required,
    /// Never required.
    Optional,
    /// Required only while the sibling `field` holds one of `any_of`.
    RequiredWhen {
        /// Sibling field key.
        field: &'static str,
        /// Sibling values that make this field required.
        any_of: &'static [&'static str],
    },
}

/// Shape constraint checked after coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// No constraint beyond the field type.
    Any,
    /// Inclusive bounds on the number of characters.
    Length {
        /// Minimum character count.
        min: usize,
        /// Maximum character count.
        max: usize,
    },
    /// An absolute `http`/`https` URL with a host.
    Url,
    /// A domain name, optionally with a leading `*.` wildcard label.
    Domain,
    /// A domain name or an IP literal.
    Host,
    /// An email address.
    Email,
    /// A TCP/UDP port (1-65535).
    Port,
    /// Inclusive integer range.
    Range {
        /// Minimum value.
        min: i64,
        /// Maximum value.
        max: i64,
    },
    /// Messenger chat id: absent is valid, zero is invalid, any other integer is valid.
    ChatId,
}

/// Canonical default value of a field for newly created records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    /// No default; the field starts absent.
    None,
    /// String default.
    Str(&'static str),
    /// Integer default.
    Int(i64),
    /// Boolean default.
    Bool(bool),
}

impl FieldDefault {
    /// Converts the default to a JSON value (`None` for no default).
    pub fn to_value(self) -> Option<serde_json::Value> {
        match self {
            Self::None => None,
            Self::Str(s) => Some(serde_json::Value::String(s.to_string())),
            Self::Int(n) => Some(serde_json::Value::from(n)),
            Self::Bool(b) => Some(serde_json::Value::Bool(b)),
        }
    }
}

/// Definition of a single field of a variant configuration.
///
/// Declared in `const` tables; use the constructor functions and chain the
/// modifiers:
///
/// ```rust
/// use certimate_provider::{Constraint, FieldSpec};
///
/// const PORT: FieldSpec = FieldSpec::number("port", "Port")
///     .required()
///     .constraint(Constraint::Port)
///     .default_int(22);
/// assert_eq!(PORT.key, "port");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Machine-readable field key (e.g., `"accessKeyId"`).
    pub key: &'static str,
    /// Human-readable label (e.g., `"AccessKey ID"`).
    pub label: &'static str,
    /// Input type.
    pub field_type: FieldType,
    /// Requiredness rule.
    pub requirement: Requirement,
    /// Shape constraint.
    pub constraint: Constraint,
    /// Default for newly created records.
    pub default: FieldDefault,
    /// Optional placeholder text.
    pub placeholder: Option<&'static str>,
}

impl FieldSpec {
    const fn new(key: &'static str, label: &'static str, field_type: FieldType) -> Self {
        Self {
            key,
            label,
            field_type,
            requirement: Requirement::Optional,
            constraint: Constraint::Any,
            default: FieldDefault::None,
            placeholder: None,
        }
    }

    /// Plain text field.
    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldType::Text)
    }

    /// Masked field.
    pub const fn password(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldType::Password)
    }

    /// Multi-line text field.
    pub const fn textarea(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldType::Textarea)
    }

    /// Integer field.
    pub const fn number(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldType::Number)
    }

    /// Boolean field, defaults to `false`.
    pub const fn switch(key: &'static str, label: &'static str) -> Self {
        Self {
            default: FieldDefault::Bool(false),
            ..Self::new(key, label, FieldType::Switch)
        }
    }

    /// Enumeration field.
    pub const fn select(
        key: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self::new(key, label, FieldType::Select(options))
    }

    /// Marks the field as always required.
    #[must_use]
    pub const fn required(self) -> Self {
        Self {
            requirement: Requirement::Required,
            ..self
        }
    }

    /// Marks the field as required while `field` holds one of `any_of`.
    #[must_use]
    pub const fn required_when(
        self,
        field: &'static str,
        any_of: &'static [&'static str],
    ) -> Self {
        Self {
            requirement: Requirement::RequiredWhen { field, any_of },
            ..self
        }
    }

    /// Sets the shape constraint.
    #[must_use]
    pub const fn constraint(self, constraint: Constraint) -> Self {
        Self { constraint, ..self }
    }

    /// Sets a string default.
    #[must_use]
    pub const fn default_str(self, value: &'static str) -> Self {
        Self {
            default: FieldDefault::Str(value),
            ..self
        }
    }

    /// Sets an integer default.
    #[must_use]
    pub const fn default_int(self, value: i64) -> Self {
        Self {
            default: FieldDefault::Int(value),
            ..self
        }
    }

    /// Sets a boolean default.
    #[must_use]
    pub const fn default_bool(self, value: bool) -> Self {
        Self {
            default: FieldDefault::Bool(value),
            ..self
        }
    }

    /// Sets the placeholder text.
    #[must_use]
    pub const fn placeholder(self, text: &'static str) -> Self {
        Self {
            placeholder: Some(text),
            ..self
        }
    }

    /// Returns the allowed values of a select field.
    pub fn options(&self) -> Option<&'static [&'static str]> {
        match self.field_type {
            FieldType::Select(options) => Some(options),
            _ => None,
        }
    }
}

// ============ Descriptors ============

/// Static description of one variant, used to build picker UIs and to mount
/// the matching sub-form.
///
/// Obtain via [`Variant::descriptor()`](crate::Variant::descriptor) or
/// [`catalog::resolve()`](crate::catalog::resolve).
#[derive(Debug, Clone, Copy)]
pub struct VariantDescriptor<V: 'static> {
    /// Discriminator value.
    pub provider: V,
    /// Human-readable provider name (English fallback of `label_key`).
    pub name: &'static str,
    /// Localization key of the display label.
    pub label_key: &'static str,
    /// Icon reference.
    pub icon: &'static str,
    /// Declared capability tags.
    pub capabilities: &'static [Capability],
    /// Schema of the variant's configuration.
    pub schema: crate::VariantSchema,
}

impl<V> VariantDescriptor<V> {
    /// Returns `true` if this descriptor passes the optional usage filter.
    pub fn is_available(&self, usage: Option<UsageFilter>) -> bool {
        usage.is_none_or(|u| u.matches(self.capabilities))
    }
}
