use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::ProviderError;

/// Primitive or container kind of a [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    /// Named members, each with its own shape.
    Structure,
    /// Homogeneous sequence of `member`.
    List,
    /// Mapping from `key` to `value`.
    Map,
    /// UTF-8 text, optionally restricted to `enum` values.
    #[default]
    String,
    /// 32-bit integer.
    Integer,
    /// 64-bit integer.
    Long,
    /// True or false.
    Boolean,
    /// Double precision float.
    Double,
    /// Single precision float.
    Float,
    /// Point in time.
    Timestamp,
    /// Opaque bytes.
    Blob,
}

/// Structural model describing the value an argument or payload accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Shape {
    /// Kind of value.
    #[serde(rename = "type", default)]
    pub shape_type: ShapeType,

    /// Documentation attached to the shape, possibly containing HTML.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,

    /// Members of a structure.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub members: BTreeMap<String, Shape>,

    /// Required member names of a structure.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    /// Element shape of a list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<Box<Shape>>,

    /// Key shape of a map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Box<Shape>>,

    /// Value shape of a map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Box<Shape>>,

    /// Allowed literal values of an enumerated string.
    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
}

impl Shape {
    /// Creates a shape of the given kind with no members or documentation.
    pub fn new(shape_type: ShapeType) -> Self {
        Self {
            shape_type,
            ..Self::default()
        }
    }

    /// Adds a structure member.
    pub fn with_member(mut self, name: &str, shape: Shape) -> Self {
        self.members.insert(name.to_string(), shape);
        self
    }

    /// Sets the list element shape.
    pub fn with_list_member(mut self, shape: Shape) -> Self {
        self.member = Some(Box::new(shape));
        self
    }

    /// Restricts a string shape to the given values.
    pub fn with_enum(mut self, values: &[&str]) -> Self {
        self.enum_values = values.iter().map(|v| v.to_string()).collect();
        self
    }

    /// Attaches documentation.
    pub fn with_documentation(mut self, documentation: &str) -> Self {
        self.documentation = Some(documentation.to_string());
        self
    }
}

/// Descriptor of a single service operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct OperationModel {
    /// Operation name in the service's naming scheme (e.g. `ListObjects`).
    #[serde(default)]
    pub name: String,

    /// Operation documentation, possibly containing HTML.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,

    /// Request shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<Shape>,

    /// Response shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Shape>,

    /// HTTP method used by the operation, if the protocol is REST-like.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_method: Option<String>,

    /// Request URI template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_uri: Option<String>,
}

/// Service-wide metadata carried by a description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServiceMetadata {
    /// API version string.
    #[serde(default)]
    pub api_version: Option<String>,
    /// Endpoint prefix.
    #[serde(default)]
    pub endpoint_prefix: Option<String>,
    /// Human-facing service identifier.
    #[serde(default)]
    pub service_id: Option<String>,
    /// Wire protocol.
    #[serde(default)]
    pub protocol: Option<String>,
}

/// Complete description of one service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ServiceModel {
    /// Name the service is registered under.
    #[serde(skip)]
    pub service_name: String,

    /// Service-wide metadata.
    #[serde(default)]
    pub metadata: ServiceMetadata,

    /// Operations keyed by operation name.
    #[serde(default)]
    pub operations: HashMap<String, OperationModel>,
}

impl ServiceModel {
    /// Creates an empty description for `service_name`.
    pub fn new(service_name: &str) -> Self {
        Self {
            service_name: service_name.to_string(),
            ..Self::default()
        }
    }

    /// Adds an operation, keyed by its name.
    pub fn with_operation(mut self, operation: OperationModel) -> Self {
        self.operations.insert(operation.name.clone(), operation);
        self
    }

    /// Decodes a JSON service description.
    ///
    /// Operation names are taken from the keys of the `operations` object
    /// when the operation body does not carry one.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Parse` if the document is not a valid description.
    pub fn from_json_str(service_name: &str, content: &str) -> Result<Self, ProviderError> {
        let mut model: ServiceModel =
            serde_json::from_str(content).map_err(|e| ProviderError::Parse {
                location: "string".to_string(),
                details: e.to_string(),
            })?;

        model.service_name = service_name.to_string();
        for (name, operation) in model.operations.iter_mut() {
            if operation.name.is_empty() {
                operation.name = name.clone();
            }
        }

        Ok(model)
    }

    /// Looks up an operation by its service-side name.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::UnknownOperation` if the service does not define it.
    pub fn operation_model(&self, operation: &str) -> Result<&OperationModel, ProviderError> {
        self.operations
            .get(operation)
            .ok_or_else(|| ProviderError::UnknownOperation {
                service_name: self.service_name.clone(),
                operation: operation.to_string(),
            })
    }

    /// Returns all operation names, sorted.
    pub fn operation_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.operations.keys().cloned().collect();
        names.sort();
        names
    }
}
