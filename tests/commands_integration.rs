//! Integration tests for command orchestration.
//!
//! These tests drive each command through the engine runner with
//! `MockActor` backends and a recording `BufferUi`, checking what is
//! displayed, in which order, and which actor calls were made.

use tempfile::TempDir;

use cfwork::actor::mock::{MockActor, MockOperation};
use cfwork::actor::{ActionError, Application, ApplicationState, Droplet, Outcome, Space};
use cfwork::api::ApiError;
use cfwork::cli::args::SetSpaceIsolationSegmentArgs;
use cfwork::cli::commands::{
    droplet_file_name, CheckRouteCommand, DownloadDropletCommand,
    SetSpaceIsolationSegmentCommand, StartCommand,
};
use cfwork::core::route::{RouteDescriptor, RoutePath};
use cfwork::core::session::Session;
use cfwork::engine::gate::TargetError;
use cfwork::engine::runner::execute_command;
use cfwork::engine::CommandError;
use cfwork::ui::{BufferUi, UiEvent};

// =============================================================================
// Test Fixtures
// =============================================================================

/// Session targeting some-org / some-space as steve.
fn targeted_session() -> Session {
    Session::builder()
        .logged_in_as("steve")
        .organization("some-org-guid", "some-org")
        .space("some-space-guid", "some-space")
        .build()
}

fn org_only_session() -> Session {
    Session::builder()
        .logged_in_as("steve")
        .organization("some-org-guid", "some-org")
        .build()
}

fn app(state: ApplicationState) -> Application {
    Application {
        guid: "some-app-guid".to_string(),
        name: "some-app".to_string(),
        state,
    }
}

fn start_command(actor: &MockActor) -> StartCommand {
    StartCommand::new("some-app", Box::new(actor.clone()), Box::new(actor.clone()))
}

fn is_start(op: &MockOperation) -> bool {
    matches!(op, MockOperation::StartApplication { .. })
}

// =============================================================================
// start
// =============================================================================

mod start {
    use super::*;

    #[tokio::test]
    async fn displays_experimental_notice() {
        let actor = MockActor::new();
        let ui = BufferUi::new();

        execute_command(&start_command(&actor), &targeted_session(), &ui)
            .await
            .unwrap();

        assert!(ui
            .err()
            .starts_with("This command is in EXPERIMENTAL stage and may change without notice"));
    }

    #[tokio::test]
    async fn not_logged_in_returns_error_without_calls() {
        let actor = MockActor::new();
        let ui = BufferUi::new();
        let session = Session::builder().binary_name("faceman").build();

        let err = execute_command(&start_command(&actor), &session, &ui)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CommandError::Target(TargetError::NotLoggedIn {
                binary: "faceman".into()
            })
        );
        assert!(actor.operations().is_empty());
        assert!(ui.err_says_in_order(&["EXPERIMENTAL"]));
    }

    #[tokio::test]
    async fn no_space_targeted_returns_error_without_calls() {
        let actor = MockActor::new();
        let ui = BufferUi::new();

        let err = execute_command(&start_command(&actor), &org_only_session(), &ui)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CommandError::Target(TargetError::NoSpaceTargeted {
                binary: "cfw".into()
            })
        );
        assert!(actor.operations().is_empty());
        assert_eq!(ui.ok_count(), 0);
    }

    #[tokio::test]
    async fn already_started_skips_start() {
        let actor = MockActor::new().application_reply(Outcome::ok(
            app(ApplicationState::Started),
            vec!["get-warning-1", "get-warning-2"],
        ));
        let ui = BufferUi::new();

        execute_command(&start_command(&actor), &targeted_session(), &ui)
            .await
            .unwrap();

        assert_eq!(ui.out_count("Starting"), 0);
        assert_eq!(ui.out(), "OK");
        assert!(ui.err_says_in_order(&[
            "get-warning-1",
            "get-warning-2",
            "App some-app is already started",
        ]));
        assert_eq!(actor.count(is_start), 0);
    }

    #[tokio::test]
    async fn stopped_app_is_started_once() {
        let actor = MockActor::new()
            .application_reply(Outcome::ok(
                app(ApplicationState::Stopped),
                vec!["get-warning-1", "get-warning-2"],
            ))
            .start_reply(Outcome::ok(
                app(ApplicationState::Started),
                vec!["start-warning-1", "start-warning-2"],
            ));
        let ui = BufferUi::new();

        execute_command(&start_command(&actor), &targeted_session(), &ui)
            .await
            .unwrap();

        assert_eq!(
            ui.out(),
            "Starting app some-app in org some-org / space some-space as steve...\nOK"
        );
        assert!(ui.err_says_in_order(&[
            "get-warning-1",
            "get-warning-2",
            "start-warning-1",
            "start-warning-2",
        ]));
        assert_eq!(
            actor.operations(),
            vec![
                MockOperation::GetApplicationByNameAndSpace {
                    app_name: "some-app".into(),
                    space_guid: "some-space-guid".into(),
                },
                MockOperation::StartApplication {
                    app_guid: "some-app-guid".into(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn lookup_not_found_returns_error() {
        let actor = MockActor::new().application_reply(Outcome::err(
            ActionError::ApplicationNotFound {
                name: "some-app".into(),
            },
            vec!["get-warning-1", "get-warning-2"],
        ));
        let ui = BufferUi::new();

        let err = execute_command(&start_command(&actor), &targeted_session(), &ui)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CommandError::Action(ActionError::ApplicationNotFound {
                name: "some-app".into()
            })
        );
        assert_eq!(ui.out_count("Starting"), 0);
        assert_eq!(ui.ok_count(), 0);
        assert!(ui.err_says_in_order(&["get-warning-1", "get-warning-2"]));
        assert_eq!(actor.count(is_start), 0);
    }

    #[tokio::test]
    async fn start_failure_keeps_all_warnings() {
        let actor = MockActor::new()
            .application_reply(Outcome::ok(
                app(ApplicationState::Stopped),
                vec!["get-warning-1", "get-warning-2"],
            ))
            .start_reply(Outcome::err(
                ActionError::Api(ApiError::Status {
                    status: 500,
                    message: "I am an error".into(),
                }),
                vec!["start-warning-1", "start-warning-2"],
            ));
        let ui = BufferUi::new();

        let err = execute_command(&start_command(&actor), &targeted_session(), &ui)
            .await
            .unwrap_err();

        assert!(matches!(err, CommandError::Action(ActionError::Api(_))));
        assert_eq!(ui.out_count("Starting app some-app"), 1);
        assert_eq!(ui.ok_count(), 0);
        assert!(ui.err_says_in_order(&[
            "get-warning-1",
            "get-warning-2",
            "start-warning-1",
            "start-warning-2",
        ]));
    }
}

// =============================================================================
// set-space-isolation-segment
// =============================================================================

mod set_space_isolation_segment {
    use super::*;

    fn command(actor: &MockActor) -> SetSpaceIsolationSegmentCommand {
        SetSpaceIsolationSegmentCommand::new(
            SetSpaceIsolationSegmentArgs {
                space_name: "dev".into(),
                segment_name: "iso".into(),
            },
            Box::new(actor.clone()),
            Box::new(actor.clone()),
        )
    }

    #[tokio::test]
    async fn resolves_space_then_assigns_segment() {
        let actor = MockActor::new()
            .space_reply(Outcome::ok(
                Space {
                    guid: "dev-guid".into(),
                    name: "dev".into(),
                    organization_guid: "some-org-guid".into(),
                },
                vec!["v2-warning"],
            ))
            .assign_reply(Outcome::ok((), vec!["v3-warning"]));
        let ui = BufferUi::new();

        execute_command(&command(&actor), &org_only_session(), &ui)
            .await
            .unwrap();

        assert!(ui.out_says_in_order(&[
            "Updating isolation segment of space dev in org some-org as steve...",
            "OK",
            "In order to move running applications to this isolation segment, they must be restarted.",
        ]));
        assert!(ui.err_says_in_order(&["v2-warning", "v3-warning"]));
        assert_eq!(
            actor.operations(),
            vec![
                MockOperation::GetSpaceByOrganizationAndName {
                    organization_guid: "some-org-guid".into(),
                    space_name: "dev".into(),
                },
                MockOperation::AssignIsolationSegment {
                    segment_name: "iso".into(),
                    space_guid: "dev-guid".into(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn space_lookup_failure_stops_before_assignment() {
        let actor = MockActor::new().space_reply(Outcome::err(
            ActionError::SpaceNotFound { name: "dev".into() },
            vec!["v2-warning"],
        ));
        let ui = BufferUi::new();

        let err = execute_command(&command(&actor), &org_only_session(), &ui)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Space 'dev' not found.");
        assert_eq!(ui.err(), "v2-warning");
        assert_eq!(ui.ok_count(), 0);
        assert_eq!(
            actor.count(|op| matches!(op, MockOperation::AssignIsolationSegment { .. })),
            0
        );
    }

    #[tokio::test]
    async fn assignment_failure_shows_both_warning_sets() {
        let actor = MockActor::new()
            .space_reply(Outcome::ok(Space::default(), vec!["v2-warning"]))
            .assign_reply(Outcome::err(
                ActionError::IsolationSegmentNotFound { name: "iso".into() },
                vec!["v3-warning"],
            ));
        let ui = BufferUi::new();

        let err = execute_command(&command(&actor), &org_only_session(), &ui)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Isolation segment 'iso' not found.");
        assert_eq!(ui.err(), "v2-warning\nv3-warning");
        assert_eq!(ui.out_count("OK"), 0);
        assert_eq!(ui.out_count("restarted"), 0);
    }

    #[tokio::test]
    async fn no_org_targeted() {
        let actor = MockActor::new();
        let ui = BufferUi::new();
        let session = Session::builder().logged_in_as("steve").build();

        let err = execute_command(&command(&actor), &session, &ui)
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "No org targeted, use 'cfw target -o ORG' to target an org."
        );
        assert!(actor.operations().is_empty());
        assert!(ui.out().is_empty());
    }
}

// =============================================================================
// check-route
// =============================================================================

mod check_route {
    use super::*;

    fn host_route() -> RouteDescriptor {
        RouteDescriptor::new(
            "example.com",
            Some("myhost".into()),
            Some(RoutePath::new("foo")),
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn existing_route() {
        let actor = MockActor::new().route_reply(Outcome::ok(true, vec!["route-warning"]));
        let ui = BufferUi::new();
        let command = CheckRouteCommand::new(host_route(), Box::new(actor.clone()));

        execute_command(&command, &org_only_session(), &ui)
            .await
            .unwrap();

        assert_eq!(
            ui.out(),
            "Checking for route...\nRoute 'myhost.example.com/foo' does exist.\nOK"
        );
        assert_eq!(ui.err(), "route-warning");
        assert_eq!(
            actor.operations(),
            vec![MockOperation::CheckRoute {
                route: host_route()
            }]
        );
    }

    #[tokio::test]
    async fn missing_port_route() {
        let actor = MockActor::new().route_reply(Outcome::ok(false, Vec::<String>::new()));
        let ui = BufferUi::new();
        let route = RouteDescriptor::new("example.com", None, None, Some(5000)).unwrap();
        let command = CheckRouteCommand::new(route, Box::new(actor));

        execute_command(&command, &org_only_session(), &ui)
            .await
            .unwrap();

        assert!(ui.out_says_in_order(&["Route 'example.com:5000' does not exist.", "OK"]));
    }

    #[tokio::test]
    async fn domain_not_found() {
        let actor = MockActor::new().route_reply(Outcome::err(
            ActionError::DomainNotFound {
                name: "example.com".into(),
            },
            vec!["domain-warning"],
        ));
        let ui = BufferUi::new();
        let command = CheckRouteCommand::new(host_route(), Box::new(actor));

        let err = execute_command(&command, &org_only_session(), &ui)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Domain 'example.com' not found.");
        assert_eq!(ui.out(), "Checking for route...");
        assert_eq!(ui.err(), "domain-warning");
    }

    #[tokio::test]
    async fn space_not_required() {
        let actor = MockActor::new();
        let ui = BufferUi::new();
        let command = CheckRouteCommand::new(host_route(), Box::new(actor.clone()));

        execute_command(&command, &org_only_session(), &ui)
            .await
            .unwrap();

        assert_eq!(actor.operations().len(), 1);
    }

    #[tokio::test]
    async fn no_org_targeted_returns_error_without_calls() {
        let actor = MockActor::new();
        let ui = BufferUi::new();
        let command = CheckRouteCommand::new(host_route(), Box::new(actor.clone()));
        let session = Session::builder().logged_in_as("steve").build();

        let err = execute_command(&command, &session, &ui)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CommandError::Target(TargetError::NoOrganizationTargeted {
                binary: "cfw".into()
            })
        );
        let checks = actor
            .operations()
            .into_iter()
            .filter(|op| matches!(op, MockOperation::CheckRoute { .. }))
            .count();
        assert_eq!(checks, 0);
        assert_eq!(ui.out_count("Checking for route"), 0);
    }
}

// =============================================================================
// download-droplet
// =============================================================================

mod download_droplet {
    use super::*;

    #[tokio::test]
    async fn saves_droplet_in_directory() {
        let dir = TempDir::new().unwrap();
        let actor = MockActor::new().droplet_reply(Outcome::ok(
            Droplet {
                guid: "droplet-guid".into(),
                bits: b"some-droplet".to_vec(),
            },
            vec!["download-warning"],
        ));
        let ui = BufferUi::new();
        let command = DownloadDropletCommand::new("some-app", dir.path(), Box::new(actor.clone()));

        execute_command(&command, &targeted_session(), &ui)
            .await
            .unwrap();

        let path = dir.path().join(droplet_file_name("droplet-guid"));
        assert_eq!(std::fs::read(&path).unwrap(), b"some-droplet");
        assert!(ui.out_says_in_order(&[
            "Downloading current droplet for app some-app in org some-org / space some-space as steve...",
            "Droplet downloaded successfully at",
            "droplet_droplet-guid.tgz",
            "OK",
        ]));
        assert_eq!(ui.err(), "download-warning");
        assert_eq!(
            actor.operations(),
            vec![MockOperation::DownloadCurrentDroplet {
                app_name: "some-app".into(),
                space_guid: "some-space-guid".into(),
            }]
        );
    }

    #[tokio::test]
    async fn no_current_droplet() {
        let dir = TempDir::new().unwrap();
        let actor = MockActor::new().droplet_reply(Outcome::err(
            ActionError::NoCurrentDroplet {
                app: "some-app".into(),
            },
            Vec::<String>::new(),
        ));
        let ui = BufferUi::new();
        let command = DownloadDropletCommand::new("some-app", dir.path(), Box::new(actor));

        let err = execute_command(&command, &targeted_session(), &ui)
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "App 'some-app' does not have a current droplet."
        );
        assert_eq!(ui.out_count("Downloading current droplet"), 1);
        assert_eq!(ui.ok_count(), 0);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn no_space_targeted_returns_error_without_calls() {
        let dir = TempDir::new().unwrap();
        let actor = MockActor::new();
        let ui = BufferUi::new();
        let command = DownloadDropletCommand::new("some-app", dir.path(), Box::new(actor.clone()));

        let err = execute_command(&command, &org_only_session(), &ui)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CommandError::Target(TargetError::NoSpaceTargeted {
                binary: "cfw".into()
            })
        );
        assert!(actor.operations().is_empty());
        assert_eq!(ui.out_count("Downloading"), 0);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn app_not_found() {
        let dir = TempDir::new().unwrap();
        let actor = MockActor::new().droplet_reply(Outcome::err(
            ActionError::ApplicationNotFound {
                name: "some-app".into(),
            },
            Vec::<String>::new(),
        ));
        let ui = BufferUi::new();
        let command = DownloadDropletCommand::new("some-app", dir.path(), Box::new(actor));

        let err = execute_command(&command, &targeted_session(), &ui)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "App 'some-app' not found");
        assert_eq!(
            ui.out_count("Downloading current droplet for app some-app"),
            1
        );
        assert_eq!(ui.ok_count(), 0);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn droplet_guid_with_path_is_rejected() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("work");
        std::fs::create_dir(&dir).unwrap();
        let actor = MockActor::new().droplet_reply(Outcome::ok(
            Droplet {
                guid: "../escape".into(),
                bits: b"some-droplet".to_vec(),
            },
            Vec::<String>::new(),
        ));
        let ui = BufferUi::new();
        let command = DownloadDropletCommand::new("some-app", &dir, Box::new(actor));

        let err = execute_command(&command, &targeted_session(), &ui)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CommandError::InvalidDropletGuid {
                guid: "../escape".into()
            }
        );
        assert_eq!(ui.ok_count(), 0);
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
        assert_eq!(std::fs::read_dir(root.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn unwritable_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");
        let ui = BufferUi::new();
        let command = DownloadDropletCommand::new("some-app", &missing, Box::new(MockActor::new()));

        let err = execute_command(&command, &targeted_session(), &ui)
            .await
            .unwrap_err();

        assert!(matches!(err, CommandError::Io { .. }));
        assert_eq!(ui.ok_count(), 0);
    }
}

// =============================================================================
// Cross-command properties
// =============================================================================

mod properties {
    use super::*;

    /// No failure banner is ever printed by a command itself.
    #[tokio::test]
    async fn commands_never_print_failed() {
        let actor = MockActor::new().application_reply(Outcome::err(
            ActionError::ApplicationNotFound {
                name: "some-app".into(),
            },
            Vec::<String>::new(),
        ));
        let ui = BufferUi::new();

        let _ = execute_command(&start_command(&actor), &targeted_session(), &ui).await;

        assert!(!ui.events().contains(&UiEvent::Failed));
    }

    /// Duplicate warnings from successive calls are all shown.
    #[tokio::test]
    async fn duplicate_warnings_are_not_merged() {
        let actor = MockActor::new()
            .application_reply(Outcome::ok(app(ApplicationState::Stopped), vec!["same"]))
            .start_reply(Outcome::ok(app(ApplicationState::Started), vec!["same"]));
        let ui = BufferUi::new();

        execute_command(&start_command(&actor), &targeted_session(), &ui)
            .await
            .unwrap();

        let warnings: Vec<_> = ui
            .events()
            .into_iter()
            .filter(|e| matches!(e, UiEvent::Warning(_)))
            .collect();
        assert_eq!(
            warnings,
            vec![
                UiEvent::Warning("same".into()),
                UiEvent::Warning("same".into())
            ]
        );
    }
}
