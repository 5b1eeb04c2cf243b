#[allow(clippy::unnecessary_wraps)]
fn on_bootstrap_error(err: anyhow::Error) -> anyhow::Result<u8> {
    assert!(err.to_string().contains("runtime"));
    Ok(3)
}

#[tss_runtime::main(current_thread, thread_name = "tss-test", bootstrap_error = on_bootstrap_error)]
async fn entry_with_handler() -> anyhow::Result<u8> {
    tokio::task::yield_now().await;
    Ok(0)
}

#[tss_runtime::main]
async fn entry_without_handler() -> anyhow::Result<u8> {
    Ok(7)
}

#[test]
fn generated_entry_blocks_on_the_body() {
    assert_eq!(entry_with_handler().unwrap(), 0);
}

#[test]
fn entry_without_handler_propagates_with_question_mark() {
    assert_eq!(entry_without_handler().unwrap(), 7);
}

#[test]
fn bootstrap_handler_decides_the_return_value() {
    let code = on_bootstrap_error(anyhow::anyhow!("Failed to initialize runtime")).unwrap();
    assert_eq!(code, 3);
}
