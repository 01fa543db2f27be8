//! Block settings shape tests - blank defaults, kind switching, summaries.

use crate::helpers::*;
use botboard::types::{parse_triggers, BlockKind, BlockSettings, ResponseContent};

#[test]
fn test_default_shapes_are_blank_per_kind() {
    for &kind in BlockKind::all() {
        let settings = BlockSettings::default_for(kind);
        assert_eq!(settings.kind(), kind);
        assert_eq!(settings.response(), &ResponseContent::default());
    }

    match BlockSettings::default_for(BlockKind::Command) {
        BlockSettings::Command {
            command,
            only_if_admin,
            ..
        } => {
            assert!(command.is_empty());
            assert!(!only_if_admin);
        }
        other => panic!("unexpected shape: {other:?}"),
    }
}

#[test]
fn test_retarget_chain_preserves_response() {
    let mut settings = command_settings("start", true, "Welcome!");
    if let BlockSettings::Command { response, .. } = &mut settings {
        response.buttons.push(response_button("Docs", "open_docs"));
        response.image_url = Some("https://example.com/logo.png".to_string());
    }

    // Two hops: the response survives, kind fields reset at each hop
    let settings = settings
        .retargeted(BlockKind::Custom)
        .retargeted(BlockKind::AutoReply);

    match settings {
        BlockSettings::AutoReply { triggers, response } => {
            assert!(triggers.is_empty());
            assert_eq!(response.text, "Welcome!");
            assert_eq!(response.image_url.as_deref(), Some("https://example.com/logo.png"));
            assert_eq!(response.buttons.len(), 1);
        }
        other => panic!("unexpected shape: {other:?}"),
    }
}

#[test]
fn test_retarget_back_does_not_resurrect_old_fields() {
    let settings = command_settings("ban", true, "Done");
    let settings = settings
        .retargeted(BlockKind::AutoReply)
        .retargeted(BlockKind::Command);

    match settings {
        BlockSettings::Command {
            command,
            only_if_admin,
            ..
        } => {
            assert!(command.is_empty());
            assert!(!only_if_admin);
        }
        other => panic!("unexpected shape: {other:?}"),
    }
}

#[test]
fn test_summaries() {
    assert_eq!(command_settings("start", false, "").summary(), "/start");
    assert_eq!(command_settings("/start", false, "").summary(), "/start");
    assert_eq!(command_settings("", false, "").summary(), "No command set");
    assert_eq!(
        auto_reply_settings(&["hi", "hello"], "").summary(),
        "hi, hello"
    );
    assert_eq!(auto_reply_settings(&[], "").summary(), "No triggers set");
    assert_eq!(custom_settings("do_thing", "").summary(), "do_thing");
}

#[test]
fn test_malformed_trigger_text_degrades_to_empty_list() {
    assert!(parse_triggers(",,, ,").is_empty());
    assert_eq!(parse_triggers("one"), vec!["one"]);
}
