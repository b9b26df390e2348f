//! Rendered documents.

use chrono::NaiveDate;
use ena_model::{FieldCatalog, FieldDescriptor, FieldRequirement, TabularDataset};
use ena_output::{
    ManifestDocument, RELEASE_FILE, SAMPLES_FILE, SUBMISSION_FILE, build, serialize,
    write_outputs, write_release,
};
use insta::assert_snapshot;
use proptest::prelude::*;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct SampleSet {
    #[serde(rename = "SAMPLE", default)]
    samples: Vec<Sample>,
}

#[derive(Debug, Deserialize)]
struct Sample {
    #[serde(rename = "@alias")]
    alias: String,
    #[serde(rename = "SAMPLE_ATTRIBUTES", default)]
    attributes: Option<Attributes>,
}

#[derive(Debug, Deserialize)]
struct Attributes {
    #[serde(rename = "SAMPLE_ATTRIBUTE", default)]
    items: Vec<Attribute>,
}

#[derive(Debug, Deserialize)]
struct Attribute {
    #[serde(rename = "TAG")]
    tag: String,
    #[serde(rename = "VALUE")]
    value: String,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn catalog() -> FieldCatalog {
    FieldCatalog::from_descriptors(
        "ERC000011",
        None,
        [
            FieldDescriptor::new("collection date", FieldRequirement::Mandatory),
            FieldDescriptor::new("geographic location (latitude)", FieldRequirement::Recommended)
                .with_unit(Some("DD".to_string())),
        ],
    )
}

fn triples(xml: &[u8]) -> Vec<(String, String, String)> {
    let text = std::str::from_utf8(xml).expect("utf-8");
    let set: SampleSet = quick_xml::de::from_str(text).expect("parse sample set");
    set.samples
        .into_iter()
        .flat_map(|sample| {
            let alias = sample.alias;
            sample
                .attributes
                .map(|attrs| attrs.items)
                .unwrap_or_default()
                .into_iter()
                .map(move |attr| (alias.clone(), attr.tag, attr.value))
        })
        .collect()
}

#[test]
fn sample_set_snapshot() {
    let data = TabularDataset::new(
        strings(&[
            "sample alias",
            "sample title",
            "tax id",
            "scientific name",
            "geographic location (latitude)",
            "habitat",
        ]),
        vec![strings(&["s1", "gut", "9606", "Homo sapiens", "46.2", ""])],
    );
    let document = build(&data, &catalog(), "ERC000011", Some("UNIGE"));
    let xml = String::from_utf8(serialize(document.root()).expect("serialize")).expect("utf-8");
    assert_snapshot!(xml, @r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <SAMPLE_SET>
      <SAMPLE alias="s1" center_name="UNIGE">
        <TITLE>gut</TITLE>
        <SAMPLE_NAME>
          <TAXON_ID>9606</TAXON_ID>
          <SCIENTIFIC_NAME>Homo sapiens</SCIENTIFIC_NAME>
        </SAMPLE_NAME>
        <SAMPLE_ATTRIBUTES>
          <SAMPLE_ATTRIBUTE>
            <TAG>ENA-CHECKLIST</TAG>
            <VALUE>ERC000011</VALUE>
          </SAMPLE_ATTRIBUTE>
          <SAMPLE_ATTRIBUTE>
            <TAG>geographic location (latitude)</TAG>
            <VALUE>46.2</VALUE>
            <UNITS>DD</UNITS>
          </SAMPLE_ATTRIBUTE>
        </SAMPLE_ATTRIBUTES>
      </SAMPLE>
    </SAMPLE_SET>
    "#);
}

#[test]
fn manifest_snapshot() {
    let until = NaiveDate::from_ymd_opt(2027, 6, 30).expect("date");
    let manifest = ManifestDocument::add().with_hold(until);
    let xml = String::from_utf8(serialize(&manifest.to_element()).expect("serialize"))
        .expect("utf-8");
    assert_snapshot!(xml, @r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <SUBMISSION>
      <ACTIONS>
        <ACTION>
          <ADD/>
        </ACTION>
        <ACTION>
          <HOLD HoldUntilDate="2027-06-30"/>
        </ACTION>
      </ACTIONS>
    </SUBMISSION>
    "#);
}

#[test]
fn two_rows_end_to_end() {
    let data = TabularDataset::new(
        strings(&["tax id", "sample title", "sample alias", "scientific name", "collection date"]),
        vec![
            strings(&["9606", "first", "s1", "Homo sapiens", "2021-01-01"]),
            strings(&["10090", "second", "s2", "Mus musculus", "2021-01-02"]),
        ],
    );
    let document = build(&data, &catalog(), "ERC000011", None);
    assert_eq!(document.len(), 2);
    assert_eq!(document.aliases().collect::<Vec<_>>(), vec!["s1", "s2"]);

    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("run");
    let paths = write_outputs(&out, &document, &ManifestDocument::add()).expect("write");
    assert_eq!(paths.samples, out.join(SAMPLES_FILE));
    assert_eq!(paths.submission, out.join(SUBMISSION_FILE));

    let bytes = std::fs::read(&paths.samples).expect("read samples");
    assert!(bytes.starts_with(b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    let checklist: Vec<_> = triples(&bytes)
        .into_iter()
        .filter(|(_, tag, _)| tag == "ENA-CHECKLIST")
        .collect();
    assert_eq!(
        checklist,
        vec![
            ("s1".to_string(), "ENA-CHECKLIST".to_string(), "ERC000011".to_string()),
            ("s2".to_string(), "ENA-CHECKLIST".to_string(), "ERC000011".to_string()),
        ]
    );
}

#[test]
fn release_manifest_written_alone() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_release(dir.path(), &ManifestDocument::release("ERS000001")).expect("write");
    assert_eq!(path, dir.path().join(RELEASE_FILE));
    let xml = std::fs::read_to_string(path).expect("read");
    assert!(xml.contains("<MODIFY/>"));
    assert!(xml.contains(r#"<RELEASE target="ERS000001"/>"#));
    assert!(!dir.path().join(SAMPLES_FILE).exists());
}

#[test]
fn release_keeps_add_manifest() {
    let data = TabularDataset::new(
        strings(&["sample alias", "common name", "center name", "habitat"]),
        vec![strings(&["s1", "human", "UNIGE", "soil"])],
    );
    let document = build(&data, &catalog(), "ERC000011", None);
    let dir = tempfile::tempdir().expect("tempdir");
    let paths = write_outputs(dir.path(), &document, &ManifestDocument::add()).expect("write");
    let release =
        write_release(dir.path(), &ManifestDocument::release("ERS000001")).expect("release");
    assert_ne!(release, paths.submission);

    let add = std::fs::read_to_string(&paths.submission).expect("read submission");
    assert!(add.contains("<ADD/>"));
    assert!(!add.contains("RELEASE"));

    let samples = std::fs::read(&paths.samples).expect("read samples");
    let tags: Vec<String> = triples(&samples).into_iter().map(|(_, tag, _)| tag).collect();
    assert_eq!(tags, vec!["ENA-CHECKLIST", "common name", "center name", "habitat"]);
}

fn cell() -> impl Strategy<Value = String> {
    "[A-Za-z0-9<>&'\"]{1,12}".prop_filter("blank marker", |s| !s.eq_ignore_ascii_case("nan"))
}

proptest! {
    #[test]
    fn build_is_deterministic_and_round_trips(
        rows in prop::collection::vec((cell(), cell(), cell()), 1..6)
    ) {
        let headers = strings(&["sample alias", "habitat", "geographic location (latitude)"]);
        let body: Vec<Vec<String>> = rows
            .iter()
            .map(|(a, b, c)| vec![a.clone(), b.clone(), c.clone()])
            .collect();
        let data = TabularDataset::new(headers, body);

        let first = serialize(build(&data, &catalog(), "ERC000011", None).root()).expect("serialize");
        let second = serialize(build(&data, &catalog(), "ERC000011", None).root()).expect("serialize");
        prop_assert_eq!(&first, &second);

        let expected: Vec<(String, String, String)> = rows
            .iter()
            .flat_map(|(alias, habitat, latitude)| {
                [
                    (alias.clone(), "ENA-CHECKLIST".to_string(), "ERC000011".to_string()),
                    (alias.clone(), "habitat".to_string(), habitat.clone()),
                    (alias.clone(), "geographic location (latitude)".to_string(), latitude.clone()),
                ]
            })
            .collect();
        prop_assert_eq!(triples(&first), expected);
    }
}
