/// Integration tests for the application layer
mod test_utilities;

use pkgdash::prelude::*;
use std::time::Duration;
use test_utilities::mocks::*;

const TIMEOUT: Duration = Duration::from_secs(5);

fn dashboard_use_case(
    provider: MockMetadataProvider,
) -> RenderDashboardUseCase<MockMetadataProvider, MockProgressReporter> {
    RenderDashboardUseCase::new(provider, MockProgressReporter::new(), TIMEOUT, 4)
}

#[tokio::test]
async fn test_render_dashboard_happy_path() {
    let provider = MockMetadataProvider::new()
        .with_record(MockMetadataProvider::simple_record(
            "requests", "2.32.3", "2.32.3",
        ))
        .with_record(MockMetadataProvider::simple_record("idna", "3.10", "3.10"));

    let use_case = dashboard_use_case(provider);
    let response = use_case
        .execute(DashboardRequest::all_installed())
        .await
        .unwrap();

    assert_eq!(response.resolved, 2);
    assert_eq!(response.not_found, 0);
    assert_eq!(response.errors, 0);
    assert!(response.dashboard.contains("✓ requests"));
    assert!(response.dashboard.contains("✓ idna"));
}

#[tokio::test]
async fn test_render_dashboard_explicit_names_in_request_order() {
    let provider = MockMetadataProvider::new()
        .with_record(MockMetadataProvider::simple_record("aaa", "1.0", "1.0"))
        .with_record(MockMetadataProvider::simple_record("zzz", "2.0", "2.0"));

    let use_case = dashboard_use_case(provider);
    let request = DashboardRequest::new(vec!["zzz".to_string(), "aaa".to_string()]);
    let response = use_case.execute(request).await.unwrap();

    let zzz = response.dashboard.find("✓ zzz").unwrap();
    let aaa = response.dashboard.find("✓ aaa").unwrap();
    assert!(zzz < aaa);
}

#[tokio::test]
async fn test_render_dashboard_order_survives_slow_lookups() {
    // The first requested package resolves last; output order must still
    // match the request order.
    let provider = MockMetadataProvider::new()
        .with_record(MockMetadataProvider::simple_record("slow", "1.0", "1.0"))
        .with_record(MockMetadataProvider::simple_record("fast", "1.0", "1.0"))
        .with_resolve_delay("slow", Duration::from_millis(100));

    let use_case = dashboard_use_case(provider);
    let request = DashboardRequest::new(vec!["slow".to_string(), "fast".to_string()]);
    let response = use_case.execute(request).await.unwrap();

    let slow = response.dashboard.find("✓ slow").unwrap();
    let fast = response.dashboard.find("✓ fast").unwrap();
    assert!(slow < fast);
}

#[tokio::test]
async fn test_render_dashboard_not_found_does_not_abort_batch() {
    let provider = MockMetadataProvider::new().with_record(
        MockMetadataProvider::simple_record("requests", "2.32.3", "2.32.3"),
    );

    let use_case = dashboard_use_case(provider);
    let request = DashboardRequest::new(vec![
        "ghost-pkg".to_string(),
        "requests".to_string(),
    ]);
    let response = use_case.execute(request).await.unwrap();

    assert_eq!(response.resolved, 1);
    assert_eq!(response.not_found, 1);
    assert!(response.dashboard.contains("? ghost-pkg"));
    assert!(response.dashboard.contains("✓ requests"));
}

#[tokio::test]
async fn test_render_dashboard_resolver_fault_degrades_to_error_entry() {
    let provider = MockMetadataProvider::new()
        .with_record(MockMetadataProvider::simple_record("idna", "3.10", "3.10"))
        .with_resolve_error("broken", "metadata store exploded");

    let use_case = dashboard_use_case(provider);
    let request = DashboardRequest::new(vec!["broken".to_string(), "idna".to_string()]);
    let response = use_case.execute(request).await.unwrap();

    assert_eq!(response.errors, 1);
    assert_eq!(response.resolved, 1);
    assert!(response
        .dashboard
        .contains("! broken: metadata store exploded"));
    assert!(response.dashboard.contains("✓ idna"));
}

#[tokio::test]
async fn test_render_dashboard_timeout_degrades_to_error_entry() {
    let provider = MockMetadataProvider::new()
        .with_record(MockMetadataProvider::simple_record("snail", "1.0", "1.0"))
        .with_record(MockMetadataProvider::simple_record("quick", "1.0", "1.0"))
        .with_resolve_delay("snail", Duration::from_millis(200));

    let use_case = RenderDashboardUseCase::new(
        provider,
        MockProgressReporter::new(),
        Duration::from_millis(20),
        4,
    );
    let request = DashboardRequest::new(vec!["snail".to_string(), "quick".to_string()]);
    let response = use_case.execute(request).await.unwrap();

    assert_eq!(response.errors, 1);
    assert_eq!(response.resolved, 1);
    assert!(response.dashboard.contains("! snail: metadata lookup timed out"));
    assert!(response.dashboard.contains("✓ quick"));
}

#[tokio::test]
async fn test_render_dashboard_list_failure_is_fatal() {
    let use_case = dashboard_use_case(MockMetadataProvider::with_list_failure());
    let result = use_case.execute(DashboardRequest::all_installed()).await;

    assert!(result.is_err());
    let err = format!("{}", result.unwrap_err());
    assert!(err.contains("unreachable"));
}

#[tokio::test]
async fn test_render_dashboard_empty_environment() {
    let use_case = dashboard_use_case(MockMetadataProvider::new());
    let response = use_case
        .execute(DashboardRequest::all_installed())
        .await
        .unwrap();

    assert_eq!(response.total(), 0);
    assert!(response.dashboard.is_empty());
}

#[tokio::test]
async fn test_render_dashboard_idempotent_for_same_records() {
    let make_provider = || {
        MockMetadataProvider::new()
            .with_record(MockMetadataProvider::simple_record(
                "requests", "2.31.0", "2.32.3",
            ))
            .with_record(MockMetadataProvider::simple_record("idna", "3.10", "3.10"))
    };

    let first = dashboard_use_case(make_provider())
        .execute(DashboardRequest::all_installed())
        .await
        .unwrap();
    let second = dashboard_use_case(make_provider())
        .execute(DashboardRequest::all_installed())
        .await
        .unwrap();

    assert_eq!(first.dashboard, second.dashboard);
}

#[tokio::test]
async fn test_install_packages_all_succeed() {
    let engine = MockPackageEngine::new()
        .with_install("requests", "2.32.3")
        .with_install("idna", "3.10");

    let use_case = InstallPackagesUseCase::new(engine, MockProgressReporter::new());
    let report = use_case
        .execute(&["requests".to_string(), "idna==3.10".to_string()])
        .await
        .unwrap();

    assert!(report.all_succeeded());
    assert_eq!(report.succeeded.len(), 2);
    assert_eq!(report.succeeded[0], ("requests".to_string(), "2.32.3".to_string()));
    assert_eq!(report.succeeded[1], ("idna".to_string(), "3.10".to_string()));
}

#[tokio::test]
async fn test_install_packages_reports_failures_without_aborting() {
    let engine = MockPackageEngine::new()
        .with_install("requests", "2.32.3")
        .with_failure("ghost-pkg", "No release found for ghost-pkg");

    let use_case = InstallPackagesUseCase::new(engine, MockProgressReporter::new());
    let report = use_case
        .execute(&["ghost-pkg".to_string(), "requests".to_string()])
        .await
        .unwrap();

    assert!(!report.all_succeeded());
    assert_eq!(report.succeeded.len(), 1);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, "ghost-pkg");
    assert!(report.failed[0].1.contains("No release found"));
}

#[tokio::test]
async fn test_install_packages_invalid_spec_is_a_failure_entry() {
    let engine = MockPackageEngine::new().with_install("requests", "2.32.3");

    let use_case = InstallPackagesUseCase::new(engine, MockProgressReporter::new());
    let report = use_case
        .execute(&["requests".to_string(), "bad name!".to_string()])
        .await
        .unwrap();

    assert_eq!(report.succeeded.len(), 1);
    assert_eq!(report.failed.len(), 1);
}

#[tokio::test]
async fn test_install_packages_empty_input_is_an_error() {
    let use_case =
        InstallPackagesUseCase::new(MockPackageEngine::new(), MockProgressReporter::new());
    assert!(use_case.execute(&[]).await.is_err());
}

#[tokio::test]
async fn test_remove_package_delegates_to_engine() {
    let engine = MockPackageEngine::new();
    let use_case = RemovePackageUseCase::new(engine, MockProgressReporter::new());

    use_case.execute("requests").await.unwrap();
}

#[tokio::test]
async fn test_remove_package_failure_propagates() {
    let engine = MockPackageEngine::new().with_failure("requests", "not installed");
    let use_case = RemovePackageUseCase::new(engine, MockProgressReporter::new());

    let result = use_case.execute("requests").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_update_package_already_latest() {
    let engine = MockPackageEngine::new().with_update_outcome(
        "requests",
        UpdateOutcome::AlreadyLatest {
            version: "2.32.3".to_string(),
        },
    );
    let reporter = MockProgressReporter::new();
    let use_case = UpdatePackageUseCase::new(engine, reporter);

    let outcome = use_case.execute("requests").await.unwrap();
    assert_eq!(
        outcome,
        UpdateOutcome::AlreadyLatest {
            version: "2.32.3".to_string()
        }
    );
}

#[tokio::test]
async fn test_update_package_upgraded() {
    let engine = MockPackageEngine::new().with_update_outcome(
        "requests",
        UpdateOutcome::Updated {
            from: Some("2.31.0".to_string()),
            to: "2.32.3".to_string(),
        },
    );
    let use_case = UpdatePackageUseCase::new(engine, MockProgressReporter::new());

    let outcome = use_case.execute("requests").await.unwrap();
    assert!(matches!(outcome, UpdateOutcome::Updated { .. }));
}

#[tokio::test]
async fn test_create_venv_reports_activation_instructions() {
    let manager = MockEnvironmentManager::new(std::path::PathBuf::from("/envs"));
    let reporter = MockProgressReporter::new();
    let use_case = CreateVenvUseCase::new(manager, reporter);

    let path = use_case.execute("myenv").await.unwrap();
    assert_eq!(path, std::path::PathBuf::from("/envs/myenv"));
}

#[tokio::test]
async fn test_create_venv_existing_environment_fails() {
    let manager =
        MockEnvironmentManager::new(std::path::PathBuf::from("/envs")).with_existing("myenv");
    let use_case = CreateVenvUseCase::new(manager, MockProgressReporter::new());

    let result = use_case.execute("myenv").await;
    assert!(result.is_err());
}
