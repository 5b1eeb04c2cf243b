use parking_lot::Mutex;
use std::path::Path;
use tss_domain::config::ScaffoldConfig;
use tss_domain::outcome::{FailureReason, PipelineResult};
use tss_domain::step::{ProvisioningStep, Stage};
use tss_naming::ProjectName;
use tss_provisioning::{Pipeline, ProvisionError, StepRunner};

/// Records every step it is handed and optionally fails one of them.
#[derive(Default)]
struct RecordingRunner {
    calls: Mutex<Vec<ProvisioningStep>>,
    fail_at: Option<(usize, i32)>,
}

impl RecordingRunner {
    fn failing_at(index: usize, code: i32) -> Self {
        Self { fail_at: Some((index, code)), ..Self::default() }
    }

    fn calls(&self) -> Vec<ProvisioningStep> {
        self.calls.lock().clone()
    }
}

impl StepRunner for RecordingRunner {
    async fn execute(&self, step: &ProvisioningStep) -> Result<(), ProvisionError> {
        let index = {
            let mut calls = self.calls.lock();
            calls.push(step.clone());
            calls.len() - 1
        };

        match self.fail_at {
            Some((at, code)) if at == index => {
                Err(ProvisionError::ExitStatus { command: step.label().to_owned(), code })
            },
            _ => Ok(()),
        }
    }
}

fn name(raw: &str) -> ProjectName {
    ProjectName::parse(raw).expect("valid project name")
}

fn command_args(step: &ProvisioningStep) -> Vec<String> {
    match step {
        ProvisioningStep::Command(spec) => spec.args.clone(),
        ProvisioningStep::CreateDirectory { .. } => Vec::new(),
    }
}

#[tokio::test]
async fn runs_all_five_steps_in_order() {
    let runner = RecordingRunner::default();
    let pipeline =
        Pipeline::new(&runner, Path::new("/work"), &name("valid-name"), ScaffoldConfig::default());

    let result = pipeline.run().await;

    assert_eq!(result, PipelineResult::Succeeded { steps: 5 });
    assert_eq!(result.exit_code(), 0);

    let calls = runner.calls();
    let expected: Vec<ProvisioningStep> = Stage::ALL
        .iter()
        .map(|stage| stage.step(Path::new("/work/valid-name"), &ScaffoldConfig::default()))
        .collect();
    assert_eq!(calls, expected);
    assert_eq!(
        calls[0],
        ProvisioningStep::CreateDirectory { path: "/work/valid-name".into() }
    );
}

#[tokio::test]
async fn default_config_forwards_only_the_bundle_name() {
    let runner = RecordingRunner::default();
    Pipeline::new(&runner, Path::new("/work"), &name("valid-name"), ScaffoldConfig::default())
        .run()
        .await;

    let calls = runner.calls();
    assert_eq!(command_args(&calls[4]), ["--umdname", "myApp"]);
}

#[tokio::test]
async fn webapp_config_forwards_both_flags() {
    let runner = RecordingRunner::default();
    let config = ScaffoldConfig { is_webapp: true, umd_name: "Shop".to_owned() };
    Pipeline::new(&runner, Path::new("/work"), &name("shop"), config).run().await;

    let calls = runner.calls();
    assert_eq!(command_args(&calls[4]), ["--iswebapp", "--umdname", "Shop"]);
}

#[tokio::test]
async fn stops_at_first_failing_step() {
    let runner = RecordingRunner::failing_at(2, 1);
    let pipeline =
        Pipeline::new(&runner, Path::new("/work"), &name("valid-name"), ScaffoldConfig::default());

    let result = pipeline.run().await;

    assert_eq!(runner.calls().len(), 3, "steps after the failure must not run");
    let PipelineResult::Failed(failure) = &result else {
        panic!("expected failure, got {result:?}");
    };
    assert_eq!(failure.index, 2);
    assert_eq!(failure.stage, Stage::InitManifest);
    assert_eq!(failure.command, "npm");
    assert_eq!(failure.reason, FailureReason::ExitStatus(1));
    assert_eq!(result.exit_code(), 1);
}

#[tokio::test]
async fn directory_failure_runs_nothing_else() {
    let runner = RecordingRunner::failing_at(0, 17);
    let result =
        Pipeline::new(&runner, Path::new("/work"), &name("taken"), ScaffoldConfig::default())
            .run()
            .await;

    assert_eq!(runner.calls().len(), 1);
    assert_eq!(result.exit_code(), 17);
}

#[tokio::test]
async fn project_dir_is_base_joined_with_name() {
    let pipeline = Pipeline::new(
        RecordingRunner::default(),
        Path::new("/work"),
        &name("valid-name"),
        ScaffoldConfig::default(),
    );
    assert_eq!(pipeline.project_dir(), Path::new("/work/valid-name"));
}
