// ABOUTME: Static endpoint descriptors describing one upstream REST operation each
// ABOUTME: HTTP method, path template, parameter list, body and response schemas, input schema
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 dravr.ai

use std::fmt;

use serde_json::{json, Map, Value};

use crate::schema::{described, FieldKind, SchemaDef};

/// HTTP methods used by the upstream API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// Read
    Get,
    /// Create or custom verb
    Post,
    /// Partial update
    Patch,
    /// Delete
    Delete,
}

impl HttpMethod {
    /// Upper-case method name
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Equivalent `reqwest` method
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a declared parameter goes in the outbound request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    /// Substituted into the URL path template
    Path,
    /// Appended to the query string
    Query,
}

/// A path or query parameter declared by an endpoint
#[derive(Debug)]
pub struct ParamDef {
    /// Argument name (identical to the wire name)
    pub name: &'static str,
    /// Path or query
    pub location: ParamLocation,
    /// Expected JSON type of the argument
    pub kind: FieldKind,
    /// Whether the call fails without it
    pub required: bool,
    /// Free-text description from the upstream documentation
    pub description: &'static str,
}

impl ParamDef {
    /// A required string path parameter
    pub const fn path(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            location: ParamLocation::Path,
            kind: FieldKind::String,
            required: true,
            description,
        }
    }

    /// An optional query parameter
    pub const fn query(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            location: ParamLocation::Query,
            kind,
            required: false,
            description,
        }
    }

    /// A query parameter the call cannot proceed without
    pub const fn required_query(
        name: &'static str,
        kind: FieldKind,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            location: ParamLocation::Query,
            kind,
            required: true,
            description,
        }
    }
}

/// Static metadata for one upstream REST operation
///
/// Descriptors are plain data: the request builder and response decoder
/// interpret them, and the tool layer turns each one into a discoverable tool.
#[derive(Debug)]
pub struct EndpointDescriptor {
    /// Tool name exposed to callers
    pub name: &'static str,
    /// Upstream operation id (e.g. `artifactregistry.projects.locations.repositories.create`)
    pub operation_id: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// HTTP method
    pub method: HttpMethod,
    /// Path template relative to the base URL, with `{param}` placeholders
    pub path: &'static str,
    /// Declared path and query parameters, in declaration order
    pub params: &'static [ParamDef],
    /// Request body schema for write operations
    pub request_body: Option<&'static SchemaDef>,
    /// Schema used to decode a successful response
    pub response: &'static SchemaDef,
}

impl EndpointDescriptor {
    /// Declared path parameters, in declaration order
    pub fn path_params(&self) -> impl Iterator<Item = &ParamDef> {
        self.params
            .iter()
            .filter(|p| p.location == ParamLocation::Path)
    }

    /// Declared query parameters, in declaration order
    pub fn query_params(&self) -> impl Iterator<Item = &ParamDef> {
        self.params
            .iter()
            .filter(|p| p.location == ParamLocation::Query)
    }

    /// Placeholder names appearing in the path template, in order
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.path;
        while let Some(open) = rest.find('{') {
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                break;
            };
            names.push(&after[..close]);
            rest = &after[close + 1..];
        }
        names
    }

    /// Whether the operation sends a JSON body
    pub const fn is_write(&self) -> bool {
        self.request_body.is_some()
    }

    /// JSON Schema for the tool's arguments
    ///
    /// Declared parameters come first, followed by every request-body field.
    /// A body field sharing a name with a parameter is described once, as
    /// the parameter.
    pub fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in self.params {
            properties.insert(
                param.name.to_owned(),
                described(param.kind.json_schema(), param.description),
            );
            if param.required {
                required.push(Value::String(param.name.to_owned()));
            }
        }

        if let Some(body) = self.request_body {
            for field in body.fields {
                if properties.contains_key(field.name) {
                    continue;
                }
                properties.insert(
                    field.name.to_owned(),
                    described(
                        field.kind.json_schema(),
                        &format!("Input parameter: {}", field.description),
                    ),
                );
            }
        }

        let mut schema = json!({
            "type": "object",
            "properties": properties,
        });
        if !required.is_empty() {
            schema["required"] = Value::Array(required);
        }
        schema
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models;

    static CREATE: EndpointDescriptor = EndpointDescriptor {
        name: "repositories_create",
        operation_id: "artifactregistry.projects.locations.repositories.create",
        description: "Creates a repository.",
        method: HttpMethod::Post,
        path: "v1/{parent}/repositories",
        params: &[
            ParamDef::path("parent", "Required. The parent resource."),
            ParamDef::query("repositoryId", FieldKind::String, "The repository id."),
        ],
        request_body: Some(&models::REPOSITORY),
        response: &models::OPERATION,
    };

    static GET_POLICY: EndpointDescriptor = EndpointDescriptor {
        name: "repositories_get_iam_policy",
        operation_id: "artifactregistry.projects.locations.repositories.getIamPolicy",
        description: "Gets the IAM policy for a given resource.",
        method: HttpMethod::Get,
        path: "v1/{resource}:getIamPolicy",
        params: &[ParamDef::path("resource", "The resource.")],
        request_body: None,
        response: &models::POLICY,
    };

    #[test]
    fn placeholders_are_parsed_in_order() {
        assert_eq!(CREATE.placeholders(), ["parent"]);
        assert_eq!(GET_POLICY.placeholders(), ["resource"]);
    }

    #[test]
    fn input_schema_lists_params_then_body_fields() {
        let schema = CREATE.input_schema();
        assert_eq!(schema["required"], json!(["parent"]));

        let props = schema["properties"].as_object().expect("properties");
        let keys: Vec<&str> = props.keys().map(String::as_str).collect();
        assert_eq!(&keys[..2], ["parent", "repositoryId"]);
        assert!(props.contains_key("dockerConfig"));
        assert!(props["format"]["description"]
            .as_str()
            .expect("description")
            .starts_with("Input parameter: "));
        assert_eq!(props["labels"]["type"], "object");
    }

    #[test]
    fn read_endpoints_have_no_body_properties() {
        let schema = GET_POLICY.input_schema();
        assert_eq!(schema["properties"].as_object().map(Map::len), Some(1));
        assert!(!GET_POLICY.is_write());
        assert!(CREATE.is_write());
    }

    #[test]
    fn method_maps_to_reqwest() {
        assert_eq!(HttpMethod::Patch.to_reqwest(), reqwest::Method::PATCH);
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }
}
