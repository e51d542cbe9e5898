// ABOUTME: Endpoint catalog for the Artifact Registry v1 REST API
// ABOUTME: One static descriptor per exposed operation, interpreted by the generic adapter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 dravr.ai

//! # Endpoint Catalog
//!
//! Every exposed operation is a row in [`ENDPOINTS`]. Adding an operation
//! means adding a descriptor here (and any missing schema to
//! [`models`](crate::models)); no handler code is written per endpoint.

use crate::endpoint::{EndpointDescriptor, HttpMethod, ParamDef};
use crate::models;
use crate::schema::FieldKind;

const PAGE_SIZE: ParamDef = ParamDef::query(
    "pageSize",
    FieldKind::Integer,
    "The maximum number of results to return.",
);
const PAGE_TOKEN: ParamDef = ParamDef::query(
    "pageToken",
    FieldKind::String,
    "The next_page_token value returned from a previous list request, if any.",
);
const ORDER_BY: ParamDef = ParamDef::query(
    "orderBy",
    FieldKind::String,
    "The field to order the results by.",
);
const UPDATE_MASK: ParamDef = ParamDef::query(
    "updateMask",
    FieldKind::String,
    "The update mask applies to the resource, as a comma-separated list of field paths.",
);
const VIEW: ParamDef = ParamDef::query(
    "view",
    FieldKind::String,
    "The view that should be returned in the response (BASIC or FULL).",
);

/// Every operation exposed as a tool, in listing order
pub static ENDPOINTS: &[EndpointDescriptor] = &[
    // ------------------------------------------------------------------
    // Project settings, locations, VPC-SC
    // ------------------------------------------------------------------
    EndpointDescriptor {
        name: "get_project_settings",
        operation_id: "artifactregistry.projects.getProjectSettings",
        description: "Retrieves the Settings for the Project.",
        method: HttpMethod::Get,
        path: "v1/{name}",
        params: &[ParamDef::path(
            "name",
            "Required. The name of the projectSettings resource, for example: `projects/p1/projectSettings`.",
        )],
        request_body: None,
        response: &models::PROJECT_SETTINGS,
    },
    EndpointDescriptor {
        name: "update_project_settings",
        operation_id: "artifactregistry.projects.updateProjectSettings",
        description: "Updates the Settings for the Project.",
        method: HttpMethod::Patch,
        path: "v1/{name}",
        params: &[
            ParamDef::path("name", "The name of the project's settings."),
            ParamDef::query(
                "updateMask",
                FieldKind::String,
                "Field mask to support partial updates.",
            ),
        ],
        request_body: Some(&models::PROJECT_SETTINGS),
        response: &models::PROJECT_SETTINGS,
    },
    EndpointDescriptor {
        name: "locations_list",
        operation_id: "artifactregistry.projects.locations.list",
        description: "Lists information about the supported locations for this service.",
        method: HttpMethod::Get,
        path: "v1/{name}/locations",
        params: &[
            ParamDef::path("name", "The resource that owns the locations collection, if applicable."),
            ParamDef::query(
                "filter",
                FieldKind::String,
                "A filter to narrow down results to a preferred subset, such as `displayName=tokyo`.",
            ),
            PAGE_SIZE,
            PAGE_TOKEN,
        ],
        request_body: None,
        response: &models::LIST_LOCATIONS_RESPONSE,
    },
    EndpointDescriptor {
        name: "locations_get",
        operation_id: "artifactregistry.projects.locations.get",
        description: "Gets information about a location.",
        method: HttpMethod::Get,
        path: "v1/{name}",
        params: &[ParamDef::path("name", "Resource name for the location.")],
        request_body: None,
        response: &models::LOCATION,
    },
    EndpointDescriptor {
        name: "get_vpcsc_config",
        operation_id: "artifactregistry.projects.locations.getVpcscConfig",
        description: "Retrieves the VPCSC Config for the Project.",
        method: HttpMethod::Get,
        path: "v1/{name}",
        params: &[ParamDef::path(
            "name",
            "Required. The name of the VPCSCConfig resource, for example: `projects/p1/locations/us-central1/vpcscConfig`.",
        )],
        request_body: None,
        response: &models::VPCSC_CONFIG,
    },
    EndpointDescriptor {
        name: "update_vpcsc_config",
        operation_id: "artifactregistry.projects.locations.updateVpcscConfig",
        description: "Updates the VPCSC Config for the Project.",
        method: HttpMethod::Patch,
        path: "v1/{name}",
        params: &[
            ParamDef::path("name", "The name of the project's VPC SC Config."),
            ParamDef::query(
                "updateMask",
                FieldKind::String,
                "Field mask to support partial updates.",
            ),
        ],
        request_body: Some(&models::VPCSC_CONFIG),
        response: &models::VPCSC_CONFIG,
    },
    EndpointDescriptor {
        name: "operations_get",
        operation_id: "artifactregistry.projects.locations.operations.get",
        description: "Gets the latest state of a long-running operation. Clients can use this method to poll the operation result at intervals as recommended by the API service.",
        method: HttpMethod::Get,
        path: "v1/{name}",
        params: &[ParamDef::path("name", "The name of the operation resource.")],
        request_body: None,
        response: &models::OPERATION,
    },
    // ------------------------------------------------------------------
    // Repositories
    // ------------------------------------------------------------------
    EndpointDescriptor {
        name: "repositories_list",
        operation_id: "artifactregistry.projects.locations.repositories.list",
        description: "Lists repositories.",
        method: HttpMethod::Get,
        path: "v1/{parent}/repositories",
        params: &[
            ParamDef::path(
                "parent",
                "Required. The name of the parent resource whose repositories will be listed.",
            ),
            ParamDef::query(
                "filter",
                FieldKind::String,
                "Optional. An expression for filtering the results of the request. Filter rules are case insensitive. The fields eligible for filtering are: * `name`",
            ),
            ORDER_BY,
            PAGE_SIZE,
            PAGE_TOKEN,
        ],
        request_body: None,
        response: &models::LIST_REPOSITORIES_RESPONSE,
    },
    EndpointDescriptor {
        name: "repositories_get",
        operation_id: "artifactregistry.projects.locations.repositories.get",
        description: "Gets a repository.",
        method: HttpMethod::Get,
        path: "v1/{name}",
        params: &[ParamDef::path(
            "name",
            "Required. The name of the repository to retrieve.",
        )],
        request_body: None,
        response: &models::REPOSITORY,
    },
    EndpointDescriptor {
        name: "repositories_create",
        operation_id: "artifactregistry.projects.locations.repositories.create",
        description: "Creates a repository. The returned Operation will finish once the repository has been created. Its response will be the created Repository.",
        method: HttpMethod::Post,
        path: "v1/{parent}/repositories",
        params: &[
            ParamDef::path(
                "parent",
                "Required. The name of the parent resource where the repository will be created.",
            ),
            ParamDef::query(
                "repositoryId",
                FieldKind::String,
                "Required. The repository id to use for this repository.",
            ),
        ],
        request_body: Some(&models::REPOSITORY),
        response: &models::OPERATION,
    },
    EndpointDescriptor {
        name: "repositories_patch",
        operation_id: "artifactregistry.projects.locations.repositories.patch",
        description: "Updates a repository.",
        method: HttpMethod::Patch,
        path: "v1/{name}",
        params: &[
            ParamDef::path(
                "name",
                "The name of the repository, for example: `projects/p1/locations/us-central1/repositories/repo1`.",
            ),
            UPDATE_MASK,
        ],
        request_body: Some(&models::REPOSITORY),
        response: &models::REPOSITORY,
    },
    EndpointDescriptor {
        name: "repositories_delete",
        operation_id: "artifactregistry.projects.locations.repositories.delete",
        description: "Deletes a repository and all of its contents. The returned Operation will finish once the repository has been deleted. It will not have any Operation metadata and will return a google.protobuf.Empty response.",
        method: HttpMethod::Delete,
        path: "v1/{name}",
        params: &[ParamDef::path(
            "name",
            "Required. The name of the repository to delete.",
        )],
        request_body: None,
        response: &models::OPERATION,
    },
    EndpointDescriptor {
        name: "repositories_get_iam_policy",
        operation_id: "artifactregistry.projects.locations.repositories.getIamPolicy",
        description: "Gets the IAM policy for a given resource.",
        method: HttpMethod::Get,
        path: "v1/{resource}:getIamPolicy",
        params: &[
            ParamDef::path(
                "resource",
                "REQUIRED: The resource for which the policy is being requested.",
            ),
            ParamDef::query(
                "options.requestedPolicyVersion",
                FieldKind::Integer,
                "Optional. The maximum policy version that will be used to format the policy. Valid values are 0, 1, and 3.",
            ),
        ],
        request_body: None,
        response: &models::POLICY,
    },
    EndpointDescriptor {
        name: "repositories_set_iam_policy",
        operation_id: "artifactregistry.projects.locations.repositories.setIamPolicy",
        description: "Updates the IAM policy for a given resource.",
        method: HttpMethod::Post,
        path: "v1/{resource}:setIamPolicy",
        params: &[ParamDef::path(
            "resource",
            "REQUIRED: The resource for which the policy is being specified.",
        )],
        request_body: Some(&models::SET_IAM_POLICY_REQUEST),
        response: &models::POLICY,
    },
    EndpointDescriptor {
        name: "repositories_test_iam_permissions",
        operation_id: "artifactregistry.projects.locations.repositories.testIamPermissions",
        description: "Tests if the caller has a list of permissions on a resource.",
        method: HttpMethod::Post,
        path: "v1/{resource}:testIamPermissions",
        params: &[ParamDef::path(
            "resource",
            "REQUIRED: The resource for which the policy detail is being requested.",
        )],
        request_body: Some(&models::TEST_IAM_PERMISSIONS_REQUEST),
        response: &models::TEST_IAM_PERMISSIONS_RESPONSE,
    },
    // ------------------------------------------------------------------
    // Files
    // ------------------------------------------------------------------
    EndpointDescriptor {
        name: "repositories_files_list",
        operation_id: "artifactregistry.projects.locations.repositories.files.list",
        description: "Lists files.",
        method: HttpMethod::Get,
        path: "v1/{parent}/files",
        params: &[
            ParamDef::path(
                "parent",
                "Required. The name of the repository whose files will be listed. For example: \"projects/p1/locations/us-central1/repositories/repo1",
            ),
            ParamDef::query(
                "filter",
                FieldKind::String,
                "An expression for filtering the results of the request. Filter rules are case insensitive. The fields eligible for filtering are: * `name` * `owner`",
            ),
            ORDER_BY,
            PAGE_SIZE,
            PAGE_TOKEN,
        ],
        request_body: None,
        response: &models::LIST_FILES_RESPONSE,
    },
    EndpointDescriptor {
        name: "repositories_files_get",
        operation_id: "artifactregistry.projects.locations.repositories.files.get",
        description: "Gets a file.",
        method: HttpMethod::Get,
        path: "v1/{name}",
        params: &[ParamDef::path(
            "name",
            "Required. The name of the file to retrieve.",
        )],
        request_body: None,
        response: &models::FILE,
    },
    // ------------------------------------------------------------------
    // Packages, versions, tags
    // ------------------------------------------------------------------
    EndpointDescriptor {
        name: "repositories_packages_list",
        operation_id: "artifactregistry.projects.locations.repositories.packages.list",
        description: "Lists packages.",
        method: HttpMethod::Get,
        path: "v1/{parent}/packages",
        params: &[
            ParamDef::path(
                "parent",
                "Required. The name of the parent resource whose packages will be listed.",
            ),
            ParamDef::query(
                "filter",
                FieldKind::String,
                "Optional. An expression for filtering the results of the request. Filter rules are case insensitive. The fields eligible for filtering are: * `name` * `annotations`",
            ),
            ORDER_BY,
            PAGE_SIZE,
            PAGE_TOKEN,
        ],
        request_body: None,
        response: &models::LIST_PACKAGES_RESPONSE,
    },
    EndpointDescriptor {
        name: "repositories_packages_get",
        operation_id: "artifactregistry.projects.locations.repositories.packages.get",
        description: "Gets a package.",
        method: HttpMethod::Get,
        path: "v1/{name}",
        params: &[ParamDef::path(
            "name",
            "Required. The name of the package to retrieve.",
        )],
        request_body: None,
        response: &models::PACKAGE,
    },
    EndpointDescriptor {
        name: "repositories_packages_delete",
        operation_id: "artifactregistry.projects.locations.repositories.packages.delete",
        description: "Deletes a package and all of its versions and tags. The returned operation will complete once the package has been deleted.",
        method: HttpMethod::Delete,
        path: "v1/{name}",
        params: &[ParamDef::path(
            "name",
            "Required. The name of the package to delete.",
        )],
        request_body: None,
        response: &models::OPERATION,
    },
    EndpointDescriptor {
        name: "repositories_packages_versions_list",
        operation_id: "artifactregistry.projects.locations.repositories.packages.versions.list",
        description: "Lists versions.",
        method: HttpMethod::Get,
        path: "v1/{parent}/versions",
        params: &[
            ParamDef::path(
                "parent",
                "The name of the parent resource whose versions will be listed.",
            ),
            ParamDef::query(
                "filter",
                FieldKind::String,
                "Optional. An expression for filtering the results of the request. Filter rules are case insensitive. The fields eligible for filtering are: * `name` * `annotations`",
            ),
            ORDER_BY,
            PAGE_SIZE,
            PAGE_TOKEN,
            VIEW,
        ],
        request_body: None,
        response: &models::LIST_VERSIONS_RESPONSE,
    },
    EndpointDescriptor {
        name: "repositories_packages_versions_get",
        operation_id: "artifactregistry.projects.locations.repositories.packages.versions.get",
        description: "Gets a version",
        method: HttpMethod::Get,
        path: "v1/{name}",
        params: &[ParamDef::path("name", "The name of the version to retrieve."), VIEW],
        request_body: None,
        response: &models::VERSION,
    },
    EndpointDescriptor {
        name: "repositories_packages_versions_delete",
        operation_id: "artifactregistry.projects.locations.repositories.packages.versions.delete",
        description: "Deletes a version and all of its content. The returned operation will complete once the version has been deleted.",
        method: HttpMethod::Delete,
        path: "v1/{name}",
        params: &[
            ParamDef::path("name", "The name of the version to delete."),
            ParamDef::query(
                "force",
                FieldKind::Boolean,
                "By default, a version that is tagged may not be deleted. If force=true, the version and any tags pointing to the version are deleted.",
            ),
        ],
        request_body: None,
        response: &models::OPERATION,
    },
    EndpointDescriptor {
        name: "repositories_packages_versions_batch_delete",
        operation_id: "artifactregistry.projects.locations.repositories.packages.versions.batchDelete",
        description: "Deletes multiple versions across a repository. The returned operation will complete once the versions have been deleted.",
        method: HttpMethod::Post,
        path: "v1/{parent}/versions:batchDelete",
        params: &[ParamDef::path(
            "parent",
            "The name of the repository holding all requested versions.",
        )],
        request_body: Some(&models::BATCH_DELETE_VERSIONS_REQUEST),
        response: &models::OPERATION,
    },
    EndpointDescriptor {
        name: "repositories_packages_tags_list",
        operation_id: "artifactregistry.projects.locations.repositories.packages.tags.list",
        description: "Lists tags.",
        method: HttpMethod::Get,
        path: "v1/{parent}/tags",
        params: &[
            ParamDef::path(
                "parent",
                "The name of the parent package whose tags will be listed. For example: `projects/p1/locations/us-central1/repositories/repo1/packages/pkg1`.",
            ),
            ParamDef::query(
                "filter",
                FieldKind::String,
                "An expression for filtering the results of the request. Filter rules are case insensitive. The fields eligible for filtering are: * `name` * `version`",
            ),
            PAGE_SIZE,
            PAGE_TOKEN,
        ],
        request_body: None,
        response: &models::LIST_TAGS_RESPONSE,
    },
    EndpointDescriptor {
        name: "repositories_packages_tags_get",
        operation_id: "artifactregistry.projects.locations.repositories.packages.tags.get",
        description: "Gets a tag.",
        method: HttpMethod::Get,
        path: "v1/{name}",
        params: &[ParamDef::path("name", "The name of the tag to retrieve.")],
        request_body: None,
        response: &models::TAG,
    },
    EndpointDescriptor {
        name: "repositories_packages_tags_create",
        operation_id: "artifactregistry.projects.locations.repositories.packages.tags.create",
        description: "Creates a tag.",
        method: HttpMethod::Post,
        path: "v1/{parent}/tags",
        params: &[
            ParamDef::path("parent", "The name of the parent resource where the tag will be created."),
            ParamDef::query("tagId", FieldKind::String, "The tag id to use for this repository."),
        ],
        request_body: Some(&models::TAG),
        response: &models::TAG,
    },
    EndpointDescriptor {
        name: "repositories_packages_tags_patch",
        operation_id: "artifactregistry.projects.locations.repositories.packages.tags.patch",
        description: "Updates a tag.",
        method: HttpMethod::Patch,
        path: "v1/{name}",
        params: &[
            ParamDef::path(
                "name",
                "The name of the tag, for example: \"projects/p1/locations/us-central1/repositories/repo1/packages/pkg1/tags/tag1\".",
            ),
            UPDATE_MASK,
        ],
        request_body: Some(&models::TAG),
        response: &models::TAG,
    },
    EndpointDescriptor {
        name: "repositories_packages_tags_delete",
        operation_id: "artifactregistry.projects.locations.repositories.packages.tags.delete",
        description: "Deletes a tag.",
        method: HttpMethod::Delete,
        path: "v1/{name}",
        params: &[ParamDef::path("name", "The name of the tag to delete.")],
        request_body: None,
        response: &models::EMPTY,
    },
    // ------------------------------------------------------------------
    // Format-specific artifacts
    // ------------------------------------------------------------------
    EndpointDescriptor {
        name: "repositories_docker_images_list",
        operation_id: "artifactregistry.projects.locations.repositories.dockerImages.list",
        description: "Lists docker images.",
        method: HttpMethod::Get,
        path: "v1/{parent}/dockerImages",
        params: &[
            ParamDef::path(
                "parent",
                "Required. The name of the parent resource whose docker images will be listed.",
            ),
            ORDER_BY,
            PAGE_SIZE,
            PAGE_TOKEN,
        ],
        request_body: None,
        response: &models::LIST_DOCKER_IMAGES_RESPONSE,
    },
    EndpointDescriptor {
        name: "repositories_docker_images_get",
        operation_id: "artifactregistry.projects.locations.repositories.dockerImages.get",
        description: "Gets a docker image.",
        method: HttpMethod::Get,
        path: "v1/{name}",
        params: &[ParamDef::path(
            "name",
            "Required. The name of the docker images.",
        )],
        request_body: None,
        response: &models::DOCKER_IMAGE,
    },
    EndpointDescriptor {
        name: "repositories_maven_artifacts_list",
        operation_id: "artifactregistry.projects.locations.repositories.mavenArtifacts.list",
        description: "Lists maven artifacts.",
        method: HttpMethod::Get,
        path: "v1/{parent}/mavenArtifacts",
        params: &[
            ParamDef::path(
                "parent",
                "Required. The name of the parent resource whose maven artifacts will be listed.",
            ),
            PAGE_SIZE,
            PAGE_TOKEN,
        ],
        request_body: None,
        response: &models::LIST_MAVEN_ARTIFACTS_RESPONSE,
    },
    EndpointDescriptor {
        name: "repositories_maven_artifacts_get",
        operation_id: "artifactregistry.projects.locations.repositories.mavenArtifacts.get",
        description: "Gets a maven artifact.",
        method: HttpMethod::Get,
        path: "v1/{name}",
        params: &[ParamDef::path(
            "name",
            "Required. The name of the maven artifact.",
        )],
        request_body: None,
        response: &models::MAVEN_ARTIFACT,
    },
    EndpointDescriptor {
        name: "repositories_npm_packages_list",
        operation_id: "artifactregistry.projects.locations.repositories.npmPackages.list",
        description: "Lists npm packages.",
        method: HttpMethod::Get,
        path: "v1/{parent}/npmPackages",
        params: &[
            ParamDef::path(
                "parent",
                "Required. The name of the parent resource whose npm packages will be listed.",
            ),
            PAGE_SIZE,
            PAGE_TOKEN,
        ],
        request_body: None,
        response: &models::LIST_NPM_PACKAGES_RESPONSE,
    },
    EndpointDescriptor {
        name: "repositories_npm_packages_get",
        operation_id: "artifactregistry.projects.locations.repositories.npmPackages.get",
        description: "Gets a npm package.",
        method: HttpMethod::Get,
        path: "v1/{name}",
        params: &[ParamDef::path(
            "name",
            "Required. The name of the npm package.",
        )],
        request_body: None,
        response: &models::NPM_PACKAGE,
    },
    EndpointDescriptor {
        name: "repositories_python_packages_list",
        operation_id: "artifactregistry.projects.locations.repositories.pythonPackages.list",
        description: "Lists python packages.",
        method: HttpMethod::Get,
        path: "v1/{parent}/pythonPackages",
        params: &[
            ParamDef::path(
                "parent",
                "Required. The name of the parent resource whose python packages will be listed.",
            ),
            PAGE_SIZE,
            PAGE_TOKEN,
        ],
        request_body: None,
        response: &models::LIST_PYTHON_PACKAGES_RESPONSE,
    },
    EndpointDescriptor {
        name: "repositories_python_packages_get",
        operation_id: "artifactregistry.projects.locations.repositories.pythonPackages.get",
        description: "Gets a python package.",
        method: HttpMethod::Get,
        path: "v1/{name}",
        params: &[ParamDef::path(
            "name",
            "Required. The name of the python package.",
        )],
        request_body: None,
        response: &models::PYTHON_PACKAGE,
    },
    EndpointDescriptor {
        name: "repositories_apt_artifacts_import",
        operation_id: "artifactregistry.projects.locations.repositories.aptArtifacts.import",
        description: "Imports Apt artifacts. The returned Operation will complete once the resources are imported. Package, Version, and File resources are created based on the imported artifacts. Imported artifacts that conflict with existing resources are ignored.",
        method: HttpMethod::Post,
        path: "v1/{parent}/aptArtifacts:import",
        params: &[ParamDef::path(
            "parent",
            "The name of the parent resource where the artifacts will be imported.",
        )],
        request_body: Some(&models::IMPORT_APT_ARTIFACTS_REQUEST),
        response: &models::OPERATION,
    },
    EndpointDescriptor {
        name: "repositories_yum_artifacts_import",
        operation_id: "artifactregistry.projects.locations.repositories.yumArtifacts.import",
        description: "Imports Yum (RPM) artifacts. The returned Operation will complete once the resources are imported. Package, Version, and File resources are created based on the imported artifacts. Imported artifacts that conflict with existing resources are ignored.",
        method: HttpMethod::Post,
        path: "v1/{parent}/yumArtifacts:import",
        params: &[ParamDef::path(
            "parent",
            "The name of the parent resource where the artifacts will be imported.",
        )],
        request_body: Some(&models::IMPORT_YUM_ARTIFACTS_REQUEST),
        response: &models::OPERATION,
    },
    EndpointDescriptor {
        name: "repositories_googet_artifacts_import",
        operation_id: "artifactregistry.projects.locations.repositories.googetArtifacts.import",
        description: "Imports GooGet artifacts. The returned Operation will complete once the resources are imported. Package, Version, and File resources are created based on the imported artifacts. Imported artifacts that conflict with existing resources are ignored.",
        method: HttpMethod::Post,
        path: "v1/{parent}/googetArtifacts:import",
        params: &[ParamDef::path(
            "parent",
            "The name of the parent resource where the artifacts will be imported.",
        )],
        request_body: Some(&models::IMPORT_GOOGET_ARTIFACTS_REQUEST),
        response: &models::OPERATION,
    },
    EndpointDescriptor {
        name: "repositories_kfp_artifacts_upload",
        operation_id: "artifactregistry.projects.locations.repositories.kfpArtifacts.upload",
        description: "Directly uploads a KFP artifact. The returned Operation will complete once the resource is uploaded. Package, Version, and File resources will be created based on the uploaded artifact. Uploaded artifacts that conflict with existing resources will be overwritten.",
        method: HttpMethod::Post,
        path: "v1/{parent}/kfpArtifacts:create",
        params: &[ParamDef::path(
            "parent",
            "The resource name of the repository where the KFP artifact will be uploaded.",
        )],
        request_body: Some(&models::UPLOAD_KFP_ARTIFACT_REQUEST),
        response: &models::UPLOAD_KFP_ARTIFACT_MEDIA_RESPONSE,
    },
];

/// Look up an endpoint by tool name
pub fn find(name: &str) -> Option<&'static EndpointDescriptor> {
    ENDPOINTS.iter().find(|e| e.name == name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::endpoint::ParamLocation;

    #[test]
    fn tool_names_are_unique() {
        let mut seen = HashSet::new();
        for endpoint in ENDPOINTS {
            assert!(seen.insert(endpoint.name), "duplicate tool {}", endpoint.name);
        }
    }

    #[test]
    fn tool_names_fit_protocol_limits() {
        for endpoint in ENDPOINTS {
            assert!(endpoint.name.len() <= 64, "{} too long", endpoint.name);
            assert!(endpoint
                .name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c == '_'));
        }
    }

    #[test]
    fn placeholders_match_required_path_params() {
        for endpoint in ENDPOINTS {
            let declared: Vec<&str> = endpoint.path_params().map(|p| p.name).collect();
            assert_eq!(
                endpoint.placeholders(),
                declared,
                "path params of {} out of sync with template",
                endpoint.name
            );
            assert!(endpoint.path_params().all(|p| p.required));
        }
    }

    #[test]
    fn paths_are_versioned_and_relative() {
        for endpoint in ENDPOINTS {
            assert!(endpoint.path.starts_with("v1/"), "{}", endpoint.name);
        }
    }

    #[test]
    fn only_write_methods_carry_bodies() {
        for endpoint in ENDPOINTS {
            if endpoint.is_write() {
                assert!(
                    matches!(endpoint.method, HttpMethod::Post | HttpMethod::Patch),
                    "{} sends a body with {}",
                    endpoint.name,
                    endpoint.method
                );
            }
        }
    }

    #[test]
    fn query_params_are_never_in_path() {
        for endpoint in ENDPOINTS {
            for param in endpoint.query_params() {
                assert_eq!(param.location, ParamLocation::Query);
                assert!(!endpoint.path.contains(&format!("{{{}}}", param.name)));
            }
        }
    }

    #[test]
    fn find_returns_descriptor() {
        let files = find("repositories_files_list").expect("registered");
        assert_eq!(files.path, "v1/{parent}/files");
        assert_eq!(files.response.name, "ListFilesResponse");
        assert!(find("get_v1_parent_files").is_none());
    }
}
