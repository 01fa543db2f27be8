//! Generation worker tests.

use botboard::generate::{spawn_generate, GenerateOutcome, GeneratePayload};
use std::time::Duration;

#[test]
fn test_worker_reports_failure_for_unreachable_endpoint() {
    let payload = GeneratePayload {
        bot_name: "DemoBot".to_string(),
        bot_token: "123456:ABC".to_string(),
        blocks: Vec::new(),
    };
    // Port 9 (discard) refuses connections; the worker must deliver a
    // failure outcome rather than panic or hang.
    let rx = spawn_generate(
        payload,
        "http://127.0.0.1:9/generate".to_string(),
        std::env::temp_dir(),
    );

    let outcome = rx
        .recv_timeout(Duration::from_secs(30))
        .expect("worker should always deliver an outcome");
    assert!(matches!(outcome, GenerateOutcome::Failed(_)));
}
