use wadb_common::network::interface::InterfaceAddr;
use wadb_core::flow;
use wadb_integration_tests::harness::{
    Answer::{Cancel, Line, No, Pick, Yes},
    FakeRunner, RecordingNotify, ScriptedPrompt, iface,
};

fn interfaces() -> Vec<InterfaceAddr> {
    vec![iface("wlan0", [192, 168, 1, 5]), iface("eth0", [10, 0, 0, 2])]
}

#[tokio::test]
async fn pair_builds_verbatim_target_address() {
    let mut prompt =
        ScriptedPrompt::new(vec![Pick(0), Line("23"), Line("5555"), Line("123456"), No]);
    let runner = FakeRunner::new(vec![Ok("Successfully paired\n")]);
    let mut notify = RecordingNotify::default();

    flow::pair(&mut prompt, &runner, &mut notify, &interfaces(), "adb")
        .await
        .unwrap();

    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].program, "adb");
    assert_eq!(calls[0].args, vec!["pair", "192.168.1.23:5555"]);
    assert_eq!(calls[0].stdin_line.as_deref(), Some("123456"));
    assert!(prompt.exhausted());
}

#[tokio::test]
async fn pair_output_is_trimmed_for_display() {
    let mut prompt =
        ScriptedPrompt::new(vec![Pick(0), Line("23"), Line("5555"), Line("123456"), No]);
    let runner = FakeRunner::new(vec![Ok("Successfully paired\n")]);
    let mut notify = RecordingNotify::default();

    flow::pair(&mut prompt, &runner, &mut notify, &interfaces(), "adb")
        .await
        .unwrap();

    assert_eq!(
        notify.infos,
        vec!["Pairing with 192.168.1.23:5555 ...", "Pair Output: Successfully paired"]
    );
    assert!(notify.errors.is_empty());
}

#[tokio::test]
async fn pair_then_immediate_connect_reprompts_address() {
    let mut prompt = ScriptedPrompt::new(vec![
        Pick(0),
        Line("23"),
        Line("5555"),
        Line("123456"),
        Yes,
        Line("23"),
        Line("37099"),
    ]);
    let runner = FakeRunner::new(vec![
        Ok("Successfully paired\n"),
        Ok("connected to 192.168.1.23:37099\n"),
    ]);
    let mut notify = RecordingNotify::default();

    flow::pair(&mut prompt, &runner, &mut notify, &interfaces(), "adb")
        .await
        .unwrap();

    let calls = runner.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].args, vec!["connect", "192.168.1.23:37099"]);
    assert_eq!(calls[1].stdin_line, None);
    assert!(
        notify
            .infos
            .contains(&"Connect Output: connected to 192.168.1.23:37099".to_string())
    );
    assert!(prompt.exhausted());
}

#[tokio::test]
async fn pair_failure_surfaces_stderr_and_skips_connect_branch() {
    let mut prompt = ScriptedPrompt::new(vec![Pick(0), Line("23"), Line("5555"), Line("123456")]);
    let runner = FakeRunner::new(vec![Err("failed to connect")]);
    let mut notify = RecordingNotify::default();

    let err = flow::pair(&mut prompt, &runner, &mut notify, &interfaces(), "adb")
        .await
        .unwrap_err();

    assert!(err.to_string().contains("failed to connect"));
    // The connect-now confirm was never asked and no second command ran.
    assert_eq!(runner.calls().len(), 1);
    assert!(prompt.exhausted());
    assert_eq!(notify.infos, vec!["Pairing with 192.168.1.23:5555 ..."]);
}

#[tokio::test]
async fn pair_declining_connect_ends_after_pair_result() {
    let mut prompt =
        ScriptedPrompt::new(vec![Pick(1), Line("7"), Line("5555"), Line("654321"), No]);
    let runner = FakeRunner::new(vec![Ok("Successfully paired\n")]);
    let mut notify = RecordingNotify::default();

    flow::pair(&mut prompt, &runner, &mut notify, &interfaces(), "adb")
        .await
        .unwrap();

    assert_eq!(runner.calls().len(), 1);
    assert_eq!(runner.calls()[0].args, vec!["pair", "10.0.0.7:5555"]);
}

#[tokio::test]
async fn pair_cancelled_confirm_counts_as_decline() {
    let mut prompt =
        ScriptedPrompt::new(vec![Pick(0), Line("23"), Line("5555"), Line("123456"), Cancel]);
    let runner = FakeRunner::new(vec![Ok("Successfully paired\n")]);
    let mut notify = RecordingNotify::default();

    flow::pair(&mut prompt, &runner, &mut notify, &interfaces(), "adb")
        .await
        .unwrap();

    assert_eq!(runner.calls().len(), 1);
}

#[tokio::test]
async fn empty_interface_list_aborts_before_any_prompt() {
    let mut prompt = ScriptedPrompt::new(vec![]);
    let runner = FakeRunner::new(vec![]);
    let mut notify = RecordingNotify::default();

    flow::pair(&mut prompt, &runner, &mut notify, &[], "adb")
        .await
        .unwrap();

    assert_eq!(notify.errors, vec!["No active network interfaces found."]);
    assert!(notify.infos.is_empty());
    assert!(runner.calls().is_empty());
}

#[tokio::test]
async fn cancelled_octet_prompt_ends_pair_flow_silently() {
    let mut prompt = ScriptedPrompt::new(vec![Pick(0), Cancel]);
    let runner = FakeRunner::new(vec![]);
    let mut notify = RecordingNotify::default();

    flow::pair(&mut prompt, &runner, &mut notify, &interfaces(), "adb")
        .await
        .unwrap();

    assert!(runner.calls().is_empty());
    assert!(notify.infos.is_empty());
    assert!(notify.errors.is_empty());
    assert!(prompt.exhausted());
}

#[tokio::test]
async fn cancelled_pair_code_prompt_ends_pair_flow_silently() {
    let mut prompt = ScriptedPrompt::new(vec![Pick(0), Line("23"), Line("5555"), Cancel]);
    let runner = FakeRunner::new(vec![]);
    let mut notify = RecordingNotify::default();

    flow::pair(&mut prompt, &runner, &mut notify, &interfaces(), "adb")
        .await
        .unwrap();

    assert!(runner.calls().is_empty());
}

#[tokio::test]
async fn connect_flow_reports_trimmed_output() {
    let mut prompt = ScriptedPrompt::new(vec![Pick(1), Line("7"), Line("5555")]);
    let runner = FakeRunner::new(vec![Ok("connected to 10.0.0.7:5555\n")]);
    let mut notify = RecordingNotify::default();

    flow::connect(&mut prompt, &runner, &mut notify, &interfaces(), "adb")
        .await
        .unwrap();

    assert_eq!(
        notify.infos,
        vec!["Connecting to 10.0.0.7:5555 ...", "Connect Output: connected to 10.0.0.7:5555"]
    );
    assert_eq!(runner.calls()[0].args, vec!["connect", "10.0.0.7:5555"]);
}

#[tokio::test]
async fn connect_flow_failure_is_a_single_error() {
    let mut prompt = ScriptedPrompt::new(vec![Pick(0), Line("23"), Line("5555")]);
    let runner = FakeRunner::new(vec![Err("failed to connect to 192.168.1.23:5555")]);
    let mut notify = RecordingNotify::default();

    let err = flow::connect(&mut prompt, &runner, &mut notify, &interfaces(), "adb")
        .await
        .unwrap_err();

    assert!(err.to_string().contains("failed to connect"));
    assert_eq!(runner.calls().len(), 1);
}

#[tokio::test]
async fn connect_flow_cancelled_interface_pick_is_silent() {
    let mut prompt = ScriptedPrompt::new(vec![Cancel]);
    let runner = FakeRunner::new(vec![]);
    let mut notify = RecordingNotify::default();

    flow::connect(&mut prompt, &runner, &mut notify, &interfaces(), "adb")
        .await
        .unwrap();

    assert!(runner.calls().is_empty());
    assert!(notify.infos.is_empty());
    assert!(notify.errors.is_empty());
}
