use error_trail::types::alloc_type::Vec;
use error_trail::types::frame::ANONYMOUS_MESSAGE;
use error_trail::{
    ChainFormatConfig, ChainFormatter, ChainInput, ChainLayout, ChainedError, Frame,
};
use std::io;

fn chain_of(messages: &[&str]) -> ChainedError {
    ChainedError::merge(
        messages
            .iter()
            .map(|m| ChainInput::new(io::Error::other(m.to_string())))
            .collect::<Vec<_>>(),
    )
}

#[test]
fn default_config_joins_frames_in_given_order() {
    let config = ChainFormatConfig::default();
    let frames = [Frame::cause(io::Error::other("outer")), Frame::cause(io::Error::other("inner"))];

    assert_eq!(config.layout, ChainLayout::Inline);
    assert_eq!(config.format_chain(frames.iter()), "outer -> inner");
}

#[test]
fn display_lists_newest_cause_first() {
    let chain = chain_of(&["root", "middle", "top"]);

    assert_eq!(chain.to_string(), "top -> middle -> root");
    assert_eq!(chain.error_chain(), "top -> middle -> root");
}

#[test]
fn alternate_display_is_cascaded() {
    let chain = chain_of(&["root", "top"]);

    assert_eq!(format!("{chain:#}"), "top\n  root");
}

#[test]
fn builder_can_list_oldest_first() {
    let chain = chain_of(&["root", "top"]);

    assert_eq!(chain.fmt().oldest_first(true).to_string(), "root -> top");
}

#[test]
fn builder_can_show_names() {
    let chain = ChainedError::merge([
        ChainInput::new("z".parse::<u8>().unwrap_err()),
        ChainInput::new(io::Error::other("config rejected")),
    ]);

    assert_eq!(
        chain.fmt().show_names(true).to_string(),
        "Error: config rejected -> ParseIntError: invalid digit found in string"
    );
}

#[test]
fn compact_preset_changes_separator() {
    let chain = chain_of(&["root", "middle", "top"]);

    assert_eq!(chain.fmt().compact().to_string(), "top | middle | root");
}

#[test]
fn cascade_indents_each_older_cause() {
    let chain = chain_of(&["root", "middle", "top"]);

    assert_eq!(chain.fmt().cascaded().to_string(), "top\n  middle\n    root");
    assert_eq!(
        chain.fmt().cascaded().oldest_first(true).show_names(true).to_string(),
        "Error: root\n  Error: middle\n    Error: top"
    );
}

#[test]
fn cascaded_config_ignores_inline_separator() {
    let config = ChainFormatConfig { separator: " ~ ".into(), ..ChainFormatConfig::cascaded() };
    let frames = [Frame::cause(io::Error::other("a")), Frame::cause(io::Error::other("b"))];

    assert_eq!(config.format_chain(frames.iter()), "a\n  b");
}

#[test]
fn format_with_configures_builder() {
    let chain = chain_of(&["a", "b"]);

    assert_eq!(chain.format_with(|b| b.with_separator(" <- ")), "b <- a");
}

#[test]
fn custom_formatter_wraps_items() {
    struct Brackets;

    impl ChainFormatter for Brackets {
        fn format_frame(&self, frame: &Frame) -> String {
            format!("[{}]", frame.message())
        }
    }

    let chain = chain_of(&["a", "b"]);
    assert_eq!(chain.error_chain_with(Brackets), "[b] -> [a]");
}

#[test]
fn chain_without_causes_shows_identity() {
    let chain = ChainedError::merge(Vec::<ChainInput>::new());

    assert_eq!(chain.cause_count(), 0);
    assert_eq!(chain.to_string(), ANONYMOUS_MESSAGE);
    assert_eq!(chain.fmt().show_names(true).to_string(), format!("Error: {ANONYMOUS_MESSAGE}"));
}

#[test]
fn bookkeeping_frames_never_render() {
    let chain = ChainedError::from_existing(ChainedError::new_from_operation(
        "map_err",
        [ChainInput::new(io::Error::other("visible"))],
    ));

    assert_eq!(chain.to_string(), "visible");
}
