// ABOUTME: Schema registry mirroring the Artifact Registry v1 OpenAPI definitions
// ABOUTME: Static field lists used for request-body projection and response decoding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 dravr.ai

//! # Schema Registry
//!
//! One [`SchemaDef`] per upstream definition referenced by the endpoint
//! catalog. Field descriptions are the first sentence of the upstream
//! documentation. Nested definitions are declared before the schemas that
//! embed them.

use crate::schema::{FieldDef, FieldKind, SchemaDef};

const fn field(name: &'static str, kind: FieldKind, description: &'static str) -> FieldDef {
    FieldDef {
        name,
        kind,
        description,
    }
}

pub static PROJECT_SETTINGS: SchemaDef = SchemaDef {
    name: "ProjectSettings",
    fields: &[
        field(
            "legacyRedirectionState",
            FieldKind::String,
            "The redirection state of the legacy repositories in this project.",
        ),
        field("name", FieldKind::String, "The name of the project's settings."),
    ],
};

pub static LOCATION: SchemaDef = SchemaDef {
    name: "Location",
    fields: &[
        field(
            "displayName",
            FieldKind::String,
            "The friendly name for this location, typically a nearby city name.",
        ),
        field("labels", FieldKind::Object, "Cross-service attributes for the location."),
        field("locationId", FieldKind::String, "The canonical id for this location."),
        field(
            "metadata",
            FieldKind::Object,
            "Service-specific metadata. For example the available capacity at the given location.",
        ),
        field(
            "name",
            FieldKind::String,
            "Resource name for the location, which may vary between implementations.",
        ),
    ],
};

pub static LIST_LOCATIONS_RESPONSE: SchemaDef = SchemaDef {
    name: "ListLocationsResponse",
    fields: &[
        field(
            "locations",
            FieldKind::StructArray(&LOCATION),
            "A list of locations that matches the specified filter in the request.",
        ),
        field("nextPageToken", FieldKind::String, "The standard List next-page token."),
    ],
};

pub static VPCSC_CONFIG: SchemaDef = SchemaDef {
    name: "VPCSCConfig",
    fields: &[
        field("name", FieldKind::String, "The name of the project's VPC SC Config."),
        field(
            "vpcscPolicy",
            FieldKind::String,
            "The project per location VPC SC policy that defines the VPC SC behavior for the Remote Repository (Allow/Deny).",
        ),
    ],
};

pub static STATUS: SchemaDef = SchemaDef {
    name: "Status",
    fields: &[
        field(
            "details",
            FieldKind::ObjectArray,
            "A list of messages that carry the error details.",
        ),
        field(
            "message",
            FieldKind::String,
            "A developer-facing error message, which should be in English.",
        ),
        field(
            "code",
            FieldKind::Integer,
            "The status code, which should be an enum value of google.rpc.Code.",
        ),
    ],
};

pub static OPERATION: SchemaDef = SchemaDef {
    name: "Operation",
    fields: &[
        field(
            "name",
            FieldKind::String,
            "The server-assigned name, which is only unique within the same service that originally returns it.",
        ),
        field("response", FieldKind::Object, "The normal, successful response of the operation."),
        field(
            "done",
            FieldKind::Boolean,
            "If the value is `false`, it means the operation is still in progress.",
        ),
        field(
            "error",
            FieldKind::Struct(&STATUS),
            "The `Status` type defines a logical error model that is suitable for different programming environments, including REST APIs and RPC APIs.",
        ),
        field(
            "metadata",
            FieldKind::Object,
            "Service-specific metadata associated with the operation.",
        ),
    ],
};

pub static DOCKER_REPOSITORY_CONFIG: SchemaDef = SchemaDef {
    name: "DockerRepositoryConfig",
    fields: &[
        field(
            "immutableTags",
            FieldKind::Boolean,
            "The repository which enabled this flag prevents all tags from being modified, moved or deleted.",
        ),
    ],
};

pub static DOCKER_REPOSITORY: SchemaDef = SchemaDef {
    name: "DockerRepository",
    fields: &[
        field(
            "publicRepository",
            FieldKind::String,
            "One of the publicly available Docker repositories supported by Artifact Registry.",
        ),
    ],
};

pub static MAVEN_REPOSITORY: SchemaDef = SchemaDef {
    name: "MavenRepository",
    fields: &[
        field(
            "publicRepository",
            FieldKind::String,
            "One of the publicly available Maven repositories supported by Artifact Registry.",
        ),
    ],
};

pub static NPM_REPOSITORY: SchemaDef = SchemaDef {
    name: "NpmRepository",
    fields: &[
        field(
            "publicRepository",
            FieldKind::String,
            "One of the publicly available Npm repositories supported by Artifact Registry.",
        ),
    ],
};

pub static PYTHON_REPOSITORY: SchemaDef = SchemaDef {
    name: "PythonRepository",
    fields: &[
        field(
            "publicRepository",
            FieldKind::String,
            "One of the publicly available Python repositories supported by Artifact Registry.",
        ),
    ],
};

pub static USERNAME_PASSWORD_CREDENTIALS: SchemaDef = SchemaDef {
    name: "UsernamePasswordCredentials",
    fields: &[
        field(
            "passwordSecretVersion",
            FieldKind::String,
            "The Secret Manager key version that holds the password to access the remote repository.",
        ),
        field("username", FieldKind::String, "The username to access the remote repository."),
    ],
};

pub static UPSTREAM_CREDENTIALS: SchemaDef = SchemaDef {
    name: "UpstreamCredentials",
    fields: &[
        field(
            "usernamePasswordCredentials",
            FieldKind::Struct(&USERNAME_PASSWORD_CREDENTIALS),
            "Username and password credentials.",
        ),
    ],
};

pub static YUM_PUBLIC_REPOSITORY: SchemaDef = SchemaDef {
    name: "GoogleDevtoolsArtifactregistryV1RemoteRepositoryConfigYumRepositoryPublicRepository",
    fields: &[
        field("repositoryBase", FieldKind::String, "A common public repository base for Yum."),
        field(
            "repositoryPath",
            FieldKind::String,
            "A custom field to define a path to a specific repository from the base.",
        ),
    ],
};

pub static YUM_REPOSITORY: SchemaDef = SchemaDef {
    name: "YumRepository",
    fields: &[
        field(
            "publicRepository",
            FieldKind::Struct(&YUM_PUBLIC_REPOSITORY),
            "Publicly available Yum repositories constructed from a common repository base and a custom repository path.",
        ),
    ],
};

pub static APT_PUBLIC_REPOSITORY: SchemaDef = SchemaDef {
    name: "GoogleDevtoolsArtifactregistryV1RemoteRepositoryConfigAptRepositoryPublicRepository",
    fields: &[
        field(
            "repositoryPath",
            FieldKind::String,
            "A custom field to define a path to a specific repository from the base.",
        ),
        field("repositoryBase", FieldKind::String, "A common public repository base for Apt."),
    ],
};

pub static APT_REPOSITORY: SchemaDef = SchemaDef {
    name: "AptRepository",
    fields: &[
        field(
            "publicRepository",
            FieldKind::Struct(&APT_PUBLIC_REPOSITORY),
            "Publicly available Apt repositories constructed from a common repository base and a custom repository path.",
        ),
    ],
};

pub static REMOTE_REPOSITORY_CONFIG: SchemaDef = SchemaDef {
    name: "RemoteRepositoryConfig",
    fields: &[
        field(
            "dockerRepository",
            FieldKind::Struct(&DOCKER_REPOSITORY),
            "Configuration for a Docker remote repository.",
        ),
        field(
            "mavenRepository",
            FieldKind::Struct(&MAVEN_REPOSITORY),
            "Configuration for a Maven remote repository.",
        ),
        field(
            "npmRepository",
            FieldKind::Struct(&NPM_REPOSITORY),
            "Configuration for a Npm remote repository.",
        ),
        field(
            "pythonRepository",
            FieldKind::Struct(&PYTHON_REPOSITORY),
            "Configuration for a Python remote repository.",
        ),
        field(
            "upstreamCredentials",
            FieldKind::Struct(&UPSTREAM_CREDENTIALS),
            "The credentials to access the remote repository.",
        ),
        field(
            "yumRepository",
            FieldKind::Struct(&YUM_REPOSITORY),
            "Configuration for a Yum remote repository.",
        ),
        field(
            "aptRepository",
            FieldKind::Struct(&APT_REPOSITORY),
            "Configuration for an Apt remote repository.",
        ),
        field("description", FieldKind::String, "The description of the remote source."),
    ],
};

pub static UPSTREAM_POLICY: SchemaDef = SchemaDef {
    name: "UpstreamPolicy",
    fields: &[
        field(
            "repository",
            FieldKind::String,
            "A reference to the repository resource, for example: `projects/p1/locations/us-central1/repositories/repo1`.",
        ),
        field("id", FieldKind::String, "The user-provided ID of the upstream policy."),
        field(
            "priority",
            FieldKind::Integer,
            "Entries with a greater priority value take precedence in the pull order.",
        ),
    ],
};

pub static VIRTUAL_REPOSITORY_CONFIG: SchemaDef = SchemaDef {
    name: "VirtualRepositoryConfig",
    fields: &[
        field(
            "upstreamPolicies",
            FieldKind::StructArray(&UPSTREAM_POLICY),
            "Policies that configure the upstream artifacts distributed by the Virtual Repository.",
        ),
    ],
};

pub static MAVEN_REPOSITORY_CONFIG: SchemaDef = SchemaDef {
    name: "MavenRepositoryConfig",
    fields: &[
        field(
            "versionPolicy",
            FieldKind::String,
            "Version policy defines the versions that the registry will accept.",
        ),
        field(
            "allowSnapshotOverwrites",
            FieldKind::Boolean,
            "The repository with this flag will allow publishing the same snapshot versions.",
        ),
    ],
};

pub static REPOSITORY: SchemaDef = SchemaDef {
    name: "Repository",
    fields: &[
        field(
            "format",
            FieldKind::String,
            "Optional. The format of packages that are stored in the repository.",
        ),
        field(
            "kmsKeyName",
            FieldKind::String,
            "The Cloud KMS resource name of the customer managed encryption key that's used to encrypt the contents of the Repository.",
        ),
        field(
            "sizeBytes",
            FieldKind::String,
            "Output only. The size, in bytes, of all artifact storage in this repository.",
        ),
        field(
            "updateTime",
            FieldKind::String,
            "Output only. The time when the repository was last updated.",
        ),
        field(
            "cleanupPolicies",
            FieldKind::Object,
            "Optional. Cleanup policies for this repository.",
        ),
        field("mode", FieldKind::String, "Optional. The mode of the repository."),
        field(
            "disallowUnspecifiedMode",
            FieldKind::Boolean,
            "Optional. If this is true, aunspecified repo type will be treated as error.",
        ),
        field(
            "dockerConfig",
            FieldKind::Struct(&DOCKER_REPOSITORY_CONFIG),
            "DockerRepositoryConfig is docker related repository details.",
        ),
        field(
            "createTime",
            FieldKind::String,
            "Output only. The time when the repository was created.",
        ),
        field("labels", FieldKind::Object, "Labels with user-defined metadata."),
        field(
            "satisfiesPzs",
            FieldKind::Boolean,
            "Output only. If set, the repository satisfies physical zone separation.",
        ),
        field(
            "name",
            FieldKind::String,
            "The name of the repository, for example: `projects/p1/locations/us-central1/repositories/repo1`.",
        ),
        field(
            "remoteRepositoryConfig",
            FieldKind::Struct(&REMOTE_REPOSITORY_CONFIG),
            "Remote repository configuration.",
        ),
        field(
            "cleanupPolicyDryRun",
            FieldKind::Boolean,
            "Optional. If true, the cleanup pipeline is prevented from deleting versions in this repository.",
        ),
        field("description", FieldKind::String, "The user-provided description of the repository."),
        field(
            "virtualRepositoryConfig",
            FieldKind::Struct(&VIRTUAL_REPOSITORY_CONFIG),
            "Virtual repository configuration.",
        ),
        field(
            "mavenConfig",
            FieldKind::Struct(&MAVEN_REPOSITORY_CONFIG),
            "MavenRepositoryConfig is maven related repository details.",
        ),
    ],
};

pub static LIST_REPOSITORIES_RESPONSE: SchemaDef = SchemaDef {
    name: "ListRepositoriesResponse",
    fields: &[
        field("repositories", FieldKind::StructArray(&REPOSITORY), "The repositories returned."),
        field(
            "nextPageToken",
            FieldKind::String,
            "The token to retrieve the next page of repositories, or empty if there are no more repositories to return.",
        ),
    ],
};

pub static EXPR: SchemaDef = SchemaDef {
    name: "Expr",
    fields: &[
        field(
            "location",
            FieldKind::String,
            "Optional. String indicating the location of the expression for error reporting, e.g.",
        ),
        field("title", FieldKind::String, "Optional. Title for the expression, i.e."),
        field("description", FieldKind::String, "Optional. Description of the expression."),
        field(
            "expression",
            FieldKind::String,
            "Textual representation of an expression in Common Expression Language syntax.",
        ),
    ],
};

pub static BINDING: SchemaDef = SchemaDef {
    name: "Binding",
    fields: &[
        field(
            "role",
            FieldKind::String,
            "Role that is assigned to the list of `members`, or principals.",
        ),
        field(
            "condition",
            FieldKind::Struct(&EXPR),
            "Represents a textual expression in the Common Expression Language (CEL) syntax.",
        ),
        field(
            "members",
            FieldKind::StringArray,
            "Specifies the principals requesting access for a Google Cloud resource.",
        ),
    ],
};

pub static POLICY: SchemaDef = SchemaDef {
    name: "Policy",
    fields: &[
        field(
            "bindings",
            FieldKind::StructArray(&BINDING),
            "Associates a list of `members`, or principals, with a `role`.",
        ),
        field(
            "etag",
            FieldKind::String,
            "`etag` is used for optimistic concurrency control as a way to help prevent simultaneous updates of a policy from overwriting each other.",
        ),
        field("version", FieldKind::Integer, "Specifies the format of the policy."),
    ],
};

pub static SET_IAM_POLICY_REQUEST: SchemaDef = SchemaDef {
    name: "SetIamPolicyRequest",
    fields: &[
        field(
            "policy",
            FieldKind::Struct(&POLICY),
            "An Identity and Access Management (IAM) policy, which specifies access controls for Google Cloud resources.",
        ),
    ],
};

pub static TEST_IAM_PERMISSIONS_REQUEST: SchemaDef = SchemaDef {
    name: "TestIamPermissionsRequest",
    fields: &[
        field(
            "permissions",
            FieldKind::StringArray,
            "The set of permissions to check for the `resource`.",
        ),
    ],
};

pub static TEST_IAM_PERMISSIONS_RESPONSE: SchemaDef = SchemaDef {
    name: "TestIamPermissionsResponse",
    fields: &[
        field(
            "permissions",
            FieldKind::StringArray,
            "A subset of `TestPermissionsRequest.permissions` that the caller is allowed.",
        ),
    ],
};

pub static HASH: SchemaDef = SchemaDef {
    name: "Hash",
    fields: &[
        field("type", FieldKind::String, "The algorithm used to compute the hash value."),
        field("value", FieldKind::String, "The hash value."),
    ],
};

pub static FILE: SchemaDef = SchemaDef {
    name: "GoogleDevtoolsArtifactregistryV1File",
    fields: &[
        field(
            "owner",
            FieldKind::String,
            "The name of the Package or Version that owns this file, if any.",
        ),
        field("sizeBytes", FieldKind::String, "The size of the File in bytes."),
        field(
            "updateTime",
            FieldKind::String,
            "Output only. The time when the File was last updated.",
        ),
        field("createTime", FieldKind::String, "Output only. The time when the File was created."),
        field(
            "fetchTime",
            FieldKind::String,
            "Output only. The time when the last attempt to refresh the file's data was made.",
        ),
        field("hashes", FieldKind::StructArray(&HASH), "The hashes of the file content."),
        field(
            "name",
            FieldKind::String,
            "The name of the file, for example: \"projects/p1/locations/us-central1/repositories/repo1/files/a%2Fb%2Fc.txt\".",
        ),
    ],
};

pub static LIST_FILES_RESPONSE: SchemaDef = SchemaDef {
    name: "ListFilesResponse",
    fields: &[
        field("files", FieldKind::StructArray(&FILE), "The files returned."),
        field(
            "nextPageToken",
            FieldKind::String,
            "The token to retrieve the next page of files, or empty if there are no more files to return.",
        ),
    ],
};

pub static PACKAGE: SchemaDef = SchemaDef {
    name: "Package",
    fields: &[
        field("createTime", FieldKind::String, "The time when the package was created."),
        field("displayName", FieldKind::String, "The display name of the package."),
        field(
            "name",
            FieldKind::String,
            "The name of the package, for example: `projects/p1/locations/us-central1/repositories/repo1/packages/pkg1`.",
        ),
        field("updateTime", FieldKind::String, "The time when the package was last updated."),
    ],
};

pub static LIST_PACKAGES_RESPONSE: SchemaDef = SchemaDef {
    name: "ListPackagesResponse",
    fields: &[
        field(
            "nextPageToken",
            FieldKind::String,
            "The token to retrieve the next page of packages, or empty if there are no more packages to return.",
        ),
        field("packages", FieldKind::StructArray(&PACKAGE), "The packages returned."),
    ],
};

pub static TAG: SchemaDef = SchemaDef {
    name: "Tag",
    fields: &[
        field(
            "name",
            FieldKind::String,
            "The name of the tag, for example: \"projects/p1/locations/us-central1/repositories/repo1/packages/pkg1/tags/tag1\".",
        ),
        field(
            "version",
            FieldKind::String,
            "The name of the version the tag refers to, for example: \"projects/p1/locations/us-central1/repositories/repo1/packages/pkg1/versions/sha256:5243811\" If the package or version ID parts contain slashes, the slashes are escaped.",
        ),
    ],
};

pub static VERSION: SchemaDef = SchemaDef {
    name: "Version",
    fields: &[
        field(
            "name",
            FieldKind::String,
            "The name of the version, for example: \"projects/p1/locations/us-central1/repositories/repo1/packages/pkg1/versions/art1\".",
        ),
        field("relatedTags", FieldKind::StructArray(&TAG), "Output only. A list of related tags."),
        field("updateTime", FieldKind::String, "The time when the version was last updated."),
        field("createTime", FieldKind::String, "The time when the version was created."),
        field(
            "description",
            FieldKind::String,
            "Optional. Description of the version, as specified in its metadata.",
        ),
        field(
            "metadata",
            FieldKind::Object,
            "Output only. Repository-specific Metadata stored against this version.",
        ),
    ],
};

pub static LIST_VERSIONS_RESPONSE: SchemaDef = SchemaDef {
    name: "ListVersionsResponse",
    fields: &[
        field(
            "nextPageToken",
            FieldKind::String,
            "The token to retrieve the next page of versions, or empty if there are no more versions to return.",
        ),
        field("versions", FieldKind::StructArray(&VERSION), "The versions returned."),
    ],
};

pub static BATCH_DELETE_VERSIONS_REQUEST: SchemaDef = SchemaDef {
    name: "BatchDeleteVersionsRequest",
    fields: &[
        field("names", FieldKind::StringArray, "Required. The names of the versions to delete."),
        field(
            "validateOnly",
            FieldKind::Boolean,
            "If true, the request is performed without deleting data, following AIP-163.",
        ),
    ],
};

pub static LIST_TAGS_RESPONSE: SchemaDef = SchemaDef {
    name: "ListTagsResponse",
    fields: &[
        field(
            "nextPageToken",
            FieldKind::String,
            "The token to retrieve the next page of tags, or empty if there are no more tags to return.",
        ),
        field("tags", FieldKind::StructArray(&TAG), "The tags returned."),
    ],
};

pub static DOCKER_IMAGE: SchemaDef = SchemaDef {
    name: "DockerImage",
    fields: &[
        field("uploadTime", FieldKind::String, "Time the image was uploaded."),
        field("uri", FieldKind::String, "Required. URL to access the image."),
        field("buildTime", FieldKind::String, "The time this image was built."),
        field("imageSizeBytes", FieldKind::String, "Calculated size of the image."),
        field("mediaType", FieldKind::String, "Media type of this image, e.g."),
        field(
            "name",
            FieldKind::String,
            "Required. registry_location, project_id, repository_name and image id forms a unique image name:`projects//locations//repository//dockerImages/`.",
        ),
        field("tags", FieldKind::StringArray, "Tags attached to this image."),
        field(
            "updateTime",
            FieldKind::String,
            "Output only. The time when the docker image was last updated.",
        ),
    ],
};

pub static LIST_DOCKER_IMAGES_RESPONSE: SchemaDef = SchemaDef {
    name: "ListDockerImagesResponse",
    fields: &[
        field("dockerImages", FieldKind::StructArray(&DOCKER_IMAGE), "The docker images returned."),
        field(
            "nextPageToken",
            FieldKind::String,
            "The token to retrieve the next page of artifacts, or empty if there are no more artifacts to return.",
        ),
    ],
};

pub static MAVEN_ARTIFACT: SchemaDef = SchemaDef {
    name: "MavenArtifact",
    fields: &[
        field("updateTime", FieldKind::String, "Output only. Time the artifact was updated."),
        field("version", FieldKind::String, "Version of this artifact."),
        field("artifactId", FieldKind::String, "Artifact ID for the artifact."),
        field("createTime", FieldKind::String, "Output only. Time the artifact was created."),
        field("groupId", FieldKind::String, "Group ID for the artifact."),
        field(
            "name",
            FieldKind::String,
            "Required. registry_location, project_id, repository_name and maven_artifact forms a unique artifact For example, \"projects/test-project/locations/us-west4/repositories/test-repo/mavenArtifacts/ com.google.guava:guava:31.0-jre\", where \"us-west4\" is the registry_location, \"test-project\" is the project_id, \"test-repo\" is the repository_name and \"com.google.guava:guava:31.0-jre\" is the maven artifact.",
        ),
        field("pomUri", FieldKind::String, "Required. URL to access the pom file of the artifact."),
    ],
};

pub static LIST_MAVEN_ARTIFACTS_RESPONSE: SchemaDef = SchemaDef {
    name: "ListMavenArtifactsResponse",
    fields: &[
        field(
            "mavenArtifacts",
            FieldKind::StructArray(&MAVEN_ARTIFACT),
            "The maven artifacts returned.",
        ),
        field(
            "nextPageToken",
            FieldKind::String,
            "The token to retrieve the next page of artifacts, or empty if there are no more artifacts to return.",
        ),
    ],
};

pub static NPM_PACKAGE: SchemaDef = SchemaDef {
    name: "NpmPackage",
    fields: &[
        field("version", FieldKind::String, "Version of this package."),
        field("createTime", FieldKind::String, "Output only. Time the package was created."),
        field(
            "name",
            FieldKind::String,
            "Required. registry_location, project_id, repository_name and npm_package forms a unique package For example, \"projects/test-project/locations/us-west4/repositories/test-repo/npmPackages/ npm_test:1.0.0\", where \"us-west4\" is the registry_location, \"test-project\" is the project_id, \"test-repo\" is the repository_name and npm_test:1.0.0\" is the npm package.",
        ),
        field("packageName", FieldKind::String, "Package for the artifact."),
        field("tags", FieldKind::StringArray, "Tags attached to this package."),
        field("updateTime", FieldKind::String, "Output only. Time the package was updated."),
    ],
};

pub static LIST_NPM_PACKAGES_RESPONSE: SchemaDef = SchemaDef {
    name: "ListNpmPackagesResponse",
    fields: &[
        field("npmPackages", FieldKind::StructArray(&NPM_PACKAGE), "The npm packages returned."),
        field(
            "nextPageToken",
            FieldKind::String,
            "The token to retrieve the next page of artifacts, or empty if there are no more artifacts to return.",
        ),
    ],
};

pub static PYTHON_PACKAGE: SchemaDef = SchemaDef {
    name: "PythonPackage",
    fields: &[
        field(
            "name",
            FieldKind::String,
            "Required. registry_location, project_id, repository_name and python_package forms a unique package name:`projects//locations//repository//pythonPackages/`.",
        ),
        field("packageName", FieldKind::String, "Package for the artifact."),
        field("updateTime", FieldKind::String, "Output only. Time the package was updated."),
        field("uri", FieldKind::String, "Required. URL to access the package."),
        field("version", FieldKind::String, "Version of this package."),
        field("createTime", FieldKind::String, "Output only. Time the package was created."),
    ],
};

pub static LIST_PYTHON_PACKAGES_RESPONSE: SchemaDef = SchemaDef {
    name: "ListPythonPackagesResponse",
    fields: &[
        field(
            "nextPageToken",
            FieldKind::String,
            "The token to retrieve the next page of artifacts, or empty if there are no more artifacts to return.",
        ),
        field(
            "pythonPackages",
            FieldKind::StructArray(&PYTHON_PACKAGE),
            "The python packages returned.",
        ),
    ],
};

pub static IMPORT_APT_ARTIFACTS_GCS_SOURCE: SchemaDef = SchemaDef {
    name: "ImportAptArtifactsGcsSource",
    fields: &[
        field(
            "uris",
            FieldKind::StringArray,
            "Cloud Storage paths URI (e.g., gs://my_bucket//my_object).",
        ),
        field(
            "useWildcards",
            FieldKind::Boolean,
            "Supports URI wildcards for matching multiple objects from a single URI.",
        ),
    ],
};

pub static IMPORT_APT_ARTIFACTS_REQUEST: SchemaDef = SchemaDef {
    name: "ImportAptArtifactsRequest",
    fields: &[
        field(
            "gcsSource",
            FieldKind::Struct(&IMPORT_APT_ARTIFACTS_GCS_SOURCE),
            "Google Cloud Storage location where the artifacts currently reside.",
        ),
    ],
};

pub static IMPORT_YUM_ARTIFACTS_GCS_SOURCE: SchemaDef = SchemaDef {
    name: "ImportYumArtifactsGcsSource",
    fields: &[
        field(
            "uris",
            FieldKind::StringArray,
            "Cloud Storage paths URI (e.g., gs://my_bucket//my_object).",
        ),
        field(
            "useWildcards",
            FieldKind::Boolean,
            "Supports URI wildcards for matching multiple objects from a single URI.",
        ),
    ],
};

pub static IMPORT_YUM_ARTIFACTS_REQUEST: SchemaDef = SchemaDef {
    name: "ImportYumArtifactsRequest",
    fields: &[
        field(
            "gcsSource",
            FieldKind::Struct(&IMPORT_YUM_ARTIFACTS_GCS_SOURCE),
            "Google Cloud Storage location where the artifacts currently reside.",
        ),
    ],
};

pub static IMPORT_GOOGET_ARTIFACTS_GCS_SOURCE: SchemaDef = SchemaDef {
    name: "ImportGoogetArtifactsGcsSource",
    fields: &[
        field(
            "uris",
            FieldKind::StringArray,
            "Cloud Storage paths URI (e.g., `gs://my_bucket/my_object`).",
        ),
        field(
            "useWildcards",
            FieldKind::Boolean,
            "Supports URI wildcards for matching multiple objects from a single URI.",
        ),
    ],
};

pub static IMPORT_GOOGET_ARTIFACTS_REQUEST: SchemaDef = SchemaDef {
    name: "ImportGoogetArtifactsRequest",
    fields: &[
        field(
            "gcsSource",
            FieldKind::Struct(&IMPORT_GOOGET_ARTIFACTS_GCS_SOURCE),
            "Google Cloud Storage location where the artifacts currently reside.",
        ),
    ],
};

pub static UPLOAD_KFP_ARTIFACT_REQUEST: SchemaDef = SchemaDef {
    name: "UploadKfpArtifactRequest",
    fields: &[
        field("tags", FieldKind::StringArray, "Tags to be created with the version."),
        field("description", FieldKind::String, "Description of the package version."),
    ],
};

pub static UPLOAD_KFP_ARTIFACT_MEDIA_RESPONSE: SchemaDef = SchemaDef {
    name: "UploadKfpArtifactMediaResponse",
    fields: &[
        field(
            "operation",
            FieldKind::Struct(&OPERATION),
            "This resource represents a long-running operation that is the result of a network API call.",
        ),
    ],
};

pub static EMPTY: SchemaDef = SchemaDef {
    name: "Empty",
    fields: &[],
};

/// Every registered schema, in declaration order
pub static ALL: &[&SchemaDef] = &[
    &PROJECT_SETTINGS,
    &LOCATION,
    &LIST_LOCATIONS_RESPONSE,
    &VPCSC_CONFIG,
    &STATUS,
    &OPERATION,
    &DOCKER_REPOSITORY_CONFIG,
    &DOCKER_REPOSITORY,
    &MAVEN_REPOSITORY,
    &NPM_REPOSITORY,
    &PYTHON_REPOSITORY,
    &USERNAME_PASSWORD_CREDENTIALS,
    &UPSTREAM_CREDENTIALS,
    &YUM_PUBLIC_REPOSITORY,
    &YUM_REPOSITORY,
    &APT_PUBLIC_REPOSITORY,
    &APT_REPOSITORY,
    &REMOTE_REPOSITORY_CONFIG,
    &UPSTREAM_POLICY,
    &VIRTUAL_REPOSITORY_CONFIG,
    &MAVEN_REPOSITORY_CONFIG,
    &REPOSITORY,
    &LIST_REPOSITORIES_RESPONSE,
    &EXPR,
    &BINDING,
    &POLICY,
    &SET_IAM_POLICY_REQUEST,
    &TEST_IAM_PERMISSIONS_REQUEST,
    &TEST_IAM_PERMISSIONS_RESPONSE,
    &HASH,
    &FILE,
    &LIST_FILES_RESPONSE,
    &PACKAGE,
    &LIST_PACKAGES_RESPONSE,
    &TAG,
    &VERSION,
    &LIST_VERSIONS_RESPONSE,
    &BATCH_DELETE_VERSIONS_REQUEST,
    &LIST_TAGS_RESPONSE,
    &DOCKER_IMAGE,
    &LIST_DOCKER_IMAGES_RESPONSE,
    &MAVEN_ARTIFACT,
    &LIST_MAVEN_ARTIFACTS_RESPONSE,
    &NPM_PACKAGE,
    &LIST_NPM_PACKAGES_RESPONSE,
    &PYTHON_PACKAGE,
    &LIST_PYTHON_PACKAGES_RESPONSE,
    &IMPORT_APT_ARTIFACTS_GCS_SOURCE,
    &IMPORT_APT_ARTIFACTS_REQUEST,
    &IMPORT_YUM_ARTIFACTS_GCS_SOURCE,
    &IMPORT_YUM_ARTIFACTS_REQUEST,
    &IMPORT_GOOGET_ARTIFACTS_GCS_SOURCE,
    &IMPORT_GOOGET_ARTIFACTS_REQUEST,
    &UPLOAD_KFP_ARTIFACT_REQUEST,
    &UPLOAD_KFP_ARTIFACT_MEDIA_RESPONSE,
    &EMPTY,
];

/// Look up a schema by its upstream definition name
pub fn find(name: &str) -> Option<&'static SchemaDef> {
    ALL.iter().copied().find(|s| s.name == name)
}
