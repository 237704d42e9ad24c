use std::fs;
use std::io::BufReader;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use gazette_core::{Entry, IssueNumber};
use gazette_engine::{FeedEmitter, RssFeedWriter, FEED_DESCRIPTION, FEED_LANGUAGE, FEED_TITLE};
use rss::Channel;

const BASE_URL: &str = "https://www.resmigazete.gov.tr";

fn fixed_clock_writer(dir: &std::path::Path) -> RssFeedWriter {
    RssFeedWriter::new(BASE_URL, dir, "resmi_gazete.xml")
        .with_clock(Arc::new(|| Utc.with_ymd_and_hms(2026, 8, 30, 14, 30, 0).unwrap()))
}

fn sample_entries() -> Vec<Entry> {
    vec![
        Entry::new(
            "Cumhurbaşkanı Kararı",
            "https://www.resmigazete.gov.tr/eskiler/2026/08/20260830-1.htm",
        ),
        Entry::new(
            "Yönetmelik",
            "https://www.resmigazete.gov.tr/eskiler/2026/08/20260830-2.pdf",
        ),
    ]
}

fn read_channel(path: &std::path::Path) -> Channel {
    let file = fs::File::open(path).expect("open feed");
    Channel::read_from(BufReader::new(file)).expect("parse feed")
}

#[test]
fn feed_carries_channel_metadata() {
    let dir = tempfile::tempdir().expect("tempdir");
    let writer = fixed_clock_writer(dir.path());

    let path = writer
        .emit(&IssueNumber::from("33012"), &sample_entries())
        .expect("emit");
    let channel = read_channel(&path);

    assert_eq!(channel.title(), FEED_TITLE);
    assert_eq!(channel.link(), BASE_URL);
    assert_eq!(channel.description(), FEED_DESCRIPTION);
    assert_eq!(channel.language(), Some(FEED_LANGUAGE));
    assert_eq!(
        channel.last_build_date().map(str::to_string),
        Some(Utc.with_ymd_and_hms(2026, 8, 30, 14, 30, 0).unwrap().to_rfc2822())
    );
}

#[test]
fn feed_identifier_binds_base_url_date_and_issue() {
    let dir = tempfile::tempdir().expect("tempdir");
    let writer = fixed_clock_writer(dir.path());

    let path = writer
        .emit(&IssueNumber::from("33012"), &sample_entries())
        .expect("emit");
    let channel = read_channel(&path);

    let dc = channel.dublin_core_ext().expect("dublin core extension");
    assert_eq!(
        dc.identifiers(),
        ["https://www.resmigazete.gov.tr/2026-08-30/33012".to_string()]
    );
}

#[test]
fn items_use_link_as_guid_and_midnight_pub_date() {
    let dir = tempfile::tempdir().expect("tempdir");
    let writer = fixed_clock_writer(dir.path());
    let entries = sample_entries();

    let path = writer
        .emit(&IssueNumber::from("33012"), &entries)
        .expect("emit");
    let channel = read_channel(&path);

    assert_eq!(channel.items().len(), entries.len());
    let midnight = Utc
        .with_ymd_and_hms(2026, 8, 30, 0, 0, 0)
        .unwrap()
        .to_rfc2822();
    for (item, entry) in channel.items().iter().zip(&entries) {
        let guid = item.guid().expect("guid");
        assert_eq!(guid.value(), entry.link);
        assert!(guid.is_permalink());
        assert_eq!(item.title(), Some(entry.title.as_str()));
        assert_eq!(item.link(), Some(entry.link.as_str()));
        assert_eq!(item.description(), Some(entry.title.as_str()));
        assert_eq!(item.pub_date(), Some(midnight.as_str()));
    }
}

#[test]
fn identical_inputs_produce_identical_documents() {
    let dir = tempfile::tempdir().expect("tempdir");
    let writer = fixed_clock_writer(dir.path());
    let issue = IssueNumber::from("33012");

    let path = writer.emit(&issue, &sample_entries()).expect("first emit");
    let first = fs::read(&path).expect("read first");
    let path = writer.emit(&issue, &sample_entries()).expect("second emit");
    let second = fs::read(&path).expect("read second");

    assert_eq!(first, second);
}

#[test]
fn emit_fully_replaces_a_previous_feed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let writer = fixed_clock_writer(dir.path());

    let path = writer
        .emit(&IssueNumber::from("33011"), &sample_entries())
        .expect("first emit");
    let one_entry = vec![sample_entries().remove(0)];
    writer
        .emit(&IssueNumber::from("33012"), &one_entry)
        .expect("second emit");

    let channel = read_channel(&path);
    assert_eq!(channel.items().len(), 1);
    let dc = channel.dublin_core_ext().expect("dublin core extension");
    assert!(dc.identifiers()[0].ends_with("/33012"));
}
