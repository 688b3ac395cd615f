use scatter_rs::telemetry::init_default_tracing;

#[cfg(not(feature = "telemetry"))]
#[test]
fn tracing_init_is_a_no_op_without_the_feature() {
    assert!(!init_default_tracing());
}

#[cfg(feature = "telemetry")]
#[test]
fn tracing_init_installs_a_subscriber_once() {
    // Whether the first call wins depends on what the host already installed;
    // a second call must always report that nothing was done.
    let _ = init_default_tracing();
    assert!(!init_default_tracing());
}
