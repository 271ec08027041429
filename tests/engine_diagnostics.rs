//! Diagnostic coverage for failed title resolution.
//!
//! The global logger can only be installed once per process, so the
//! whole flow lives in a single test.

use logtest::Logger;
use navtitle::{FormatterRegistry, NavigationEvent, PageTitleEngine, TitleRegistry};
use navtitle_common::testing::StaticProvider;
use unic_langid::langid;

struct OrphanView;

fn drain_engine_records(logger: &mut Logger) -> Vec<String> {
    let mut messages = Vec::new();
    while let Some(record) = logger.pop() {
        if record.target() == "navtitle::engine" {
            messages.push(record.args().to_owned());
        }
    }
    messages
}

#[test]
fn failed_resolution_logs_and_leaves_the_title_unset() {
    let mut logger = Logger::start();

    let engine = PageTitleEngine::new(TitleRegistry::new(), FormatterRegistry::new());
    let provider = StaticProvider::new([langid!("en")]);
    let event = NavigationEvent::new::<OrphanView>(Some(langid!("en")));

    assert_eq!(engine.before_enter(&event, &provider), None);

    let records = drain_engine_records(&mut logger);
    assert_eq!(records.len(), 1, "one failure, one diagnostic");
    assert!(records[0].contains("leaving page title unchanged"));
    assert!(records[0].contains("no title metadata"));
    assert!(records[0].contains("OrphanView"));
}
