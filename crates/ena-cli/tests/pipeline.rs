//! Integration tests for the sample pipeline.

use std::cell::RefCell;
use std::fs;
use std::path::Path;

use ena_checklist::{ChecklistError, ChecklistResolver, ChecklistSource};
use ena_cli::pipeline::{ChecklistOrigin, SampleRunOptions, prepare_release, run_samples};
use ena_validate::MissingFieldsError;

/// Serves one checklist document for any accession and records requests.
struct StaticSource {
    body: String,
    requests: RefCell<Vec<String>>,
}

impl StaticSource {
    fn new(mandatory: &[&str]) -> Self {
        let fields: String = mandatory
            .iter()
            .map(|name| {
                format!(
                    "<FIELD><NAME>{name}</NAME><MANDATORY>mandatory</MANDATORY></FIELD>"
                )
            })
            .collect();
        let body = format!(
            "<CHECKLIST_SET><CHECKLIST accession=\"X\" checklistType=\"Sample\">\
             <DESCRIPTOR><NAME>Test checklist</NAME><FIELD_GROUP>\
             {fields}\
             <FIELD><NAME>sex</NAME><MANDATORY>recommended</MANDATORY></FIELD>\
             <FIELD><NAME>host body temperature</NAME><MANDATORY>optional</MANDATORY>\
             <UNITS><UNIT>ºC</UNIT></UNITS></FIELD>\
             </FIELD_GROUP></DESCRIPTOR></CHECKLIST></CHECKLIST_SET>"
        );
        Self {
            body,
            requests: RefCell::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl ChecklistSource for StaticSource {
    fn fetch(&self, checklist_id: &str) -> ena_checklist::Result<String> {
        self.requests.borrow_mut().push(checklist_id.to_string());
        Ok(self.body.clone())
    }
}

struct FailingSource;

impl ChecklistSource for FailingSource {
    fn fetch(&self, checklist_id: &str) -> ena_checklist::Result<String> {
        Err(ChecklistError::Status {
            checklist_id: checklist_id.to_string(),
            status: 404,
            body: String::new(),
        })
    }
}

fn write_sheet(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("samples.csv");
    fs::write(&path, content).expect("write sheet");
    path
}

const HEADER: &str = "tax id;sample title;sample alias;scientific name;collection date;host body temperature;habitat";

#[test]
fn directive_checklist_is_resolved() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_sheet(
        dir.path(),
        &format!("Checklist=ERC000022\n{HEADER}\n9606;gut;s1;Homo sapiens;2021;37;\n"),
    );
    let source = StaticSource::new(&["collection date"]);
    let resolver = ChecklistResolver::new(&source);
    let mut options = SampleRunOptions::new(&input, dir.path().join("out"));
    options.checklist = Some("ERC000011".to_string());

    let result = run_samples(&options, &resolver).expect("run");
    assert_eq!(source.requests(), vec!["ERC000022"]);
    assert_eq!(result.checklist_id, "ERC000022");
    assert_eq!(result.checklist_origin, ChecklistOrigin::Directive);

    let xml = fs::read_to_string(&result.outputs.samples).expect("read samples");
    assert!(xml.contains("<VALUE>ERC000022</VALUE>"));
}

#[test]
fn argument_then_default_checklist() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_sheet(
        dir.path(),
        &format!("\n{HEADER}\n9606;gut;s1;Homo sapiens;2021;;soil\n"),
    );
    let source = StaticSource::new(&[]);
    let resolver = ChecklistResolver::new(&source);

    let mut options = SampleRunOptions::new(&input, dir.path().join("a"));
    options.checklist = Some("ERC000013".to_string());
    let with_argument = run_samples(&options, &resolver).expect("run");
    assert_eq!(with_argument.checklist_origin, ChecklistOrigin::Argument);

    let options = SampleRunOptions::new(&input, dir.path().join("b"));
    let with_default = run_samples(&options, &resolver).expect("run");
    assert_eq!(with_default.checklist_origin, ChecklistOrigin::Default);

    assert_eq!(source.requests(), vec!["ERC000013", "ERC000011"]);
}

#[test]
fn two_rows_in_order_with_hold() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_sheet(
        dir.path(),
        &format!(
            "\n{HEADER}\n9606;first;s1;Homo sapiens;2021;37;soil\n\
             10090;second;s2;Mus musculus;2022;nan;\n"
        ),
    );
    let source = StaticSource::new(&["collection date"]);
    let resolver = ChecklistResolver::new(&source);
    let mut options = SampleRunOptions::new(&input, dir.path().join("out"));
    options.center = Some("UNIGE".to_string());
    options.hold_until = chrono::NaiveDate::from_ymd_opt(2027, 1, 31);

    let result = run_samples(&options, &resolver).expect("run");
    assert_eq!(result.row_count, 2);
    assert_eq!(result.aliases, vec!["s1", "s2"]);
    assert_eq!(result.report.missing_recommended().collect::<Vec<_>>(), vec!["sex"]);

    let samples = fs::read_to_string(&result.outputs.samples).expect("read samples");
    assert_eq!(samples.matches("<SAMPLE ").count(), 2);
    assert!(samples.find("alias=\"s1\"") < samples.find("alias=\"s2\""));
    assert_eq!(samples.matches("<TAG>ENA-CHECKLIST</TAG>").count(), 2);
    assert_eq!(samples.matches("<TAG>habitat</TAG>").count(), 1);
    assert_eq!(samples.matches("<UNITS>ºC</UNITS>").count(), 1);
    assert!(samples.contains("center_name=\"UNIGE\""));

    let manifest = fs::read_to_string(&result.outputs.submission).expect("read manifest");
    assert!(manifest.contains("<ADD/>"));
    assert!(manifest.contains("<HOLD HoldUntilDate=\"2027-01-31\"/>"));
}

#[test]
fn mapping_renames_before_validation() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_sheet(
        dir.path(),
        "\nSampleID;Organism;tax id;sample title\ns1;Homo sapiens;9606;gut\n",
    );
    let mapping = dir.path().join("mapping.csv");
    fs::write(&mapping, "SampleID;sample alias\nOrganism;scientific name\n").expect("write");
    let source = StaticSource::new(&[]);
    let resolver = ChecklistResolver::new(&source);
    let mut options = SampleRunOptions::new(&input, dir.path().join("out"));
    options.mapping = Some(mapping);

    let result = run_samples(&options, &resolver).expect("run");
    assert_eq!(result.mapped.renamed.len(), 2);
    let samples = fs::read_to_string(&result.outputs.samples).expect("read samples");
    assert!(samples.contains("alias=\"s1\""));
    assert!(samples.contains("<SCIENTIFIC_NAME>Homo sapiens</SCIENTIFIC_NAME>"));
}

#[test]
fn missing_mandatory_field_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_sheet(
        dir.path(),
        "\ntax id;sample title;sample alias;scientific name\n9606;gut;s1;Homo sapiens\n",
    );
    let source = StaticSource::new(&["sex", "collection date"]);
    let resolver = ChecklistResolver::new(&source);
    let out = dir.path().join("out");
    let options = SampleRunOptions::new(&input, &out);

    let err = run_samples(&options, &resolver).unwrap_err();
    let missing = err
        .downcast_ref::<MissingFieldsError>()
        .expect("missing fields error");
    assert_eq!(missing.fields, vec!["sex", "collection date"]);
    assert!(!out.exists());
}

#[test]
fn checklist_failure_aborts_the_run() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_sheet(dir.path(), &format!("\n{HEADER}\n9606;gut;s1;Homo sapiens;2021;;\n"));
    let resolver = ChecklistResolver::new(FailingSource);
    let out = dir.path().join("out");

    let err = run_samples(&SampleRunOptions::new(&input, &out), &resolver).unwrap_err();
    assert!(format!("{err:#}").contains("resolve checklist ERC000011"));
    assert!(!out.exists());
}

#[test]
fn release_manifest_is_written() {
    let dir = tempfile::tempdir().expect("tempdir");
    let plan = prepare_release(dir.path(), Some(" ERS000042 ")).expect("release");
    assert_eq!(plan.accession, "ERS000042");
    assert_eq!(plan.manifest, dir.path().join("release.xml"));
    assert_eq!(plan.samples, None);
    let xml = fs::read_to_string(&plan.manifest).expect("read");
    insta::assert_snapshot!(xml, @r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <SUBMISSION>
      <ACTIONS>
        <ACTION>
          <MODIFY/>
        </ACTION>
        <ACTION>
          <RELEASE target="ERS000042"/>
        </ACTION>
      </ACTIONS>
    </SUBMISSION>
    "#);
}

#[test]
fn release_without_accession_or_receipt_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = prepare_release(dir.path(), Some("  ")).unwrap_err();
    assert!(format!("{err:#}").contains("receipt.xml"));
    assert!(!dir.path().join("release.xml").exists());
}

#[test]
fn release_follows_a_samples_run() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_sheet(dir.path(), &format!("\n{HEADER}\n9606;gut;s1;Homo sapiens;2021;;\n"));
    let resolver = ChecklistResolver::new(StaticSource::new(&["collection date"]));
    let out = dir.path().join("out");
    let run = run_samples(&SampleRunOptions::new(&input, &out), &resolver).expect("run");
    fs::write(
        out.join("receipt.xml"),
        r#"<RECEIPT success="true"><SAMPLE accession="ERS28000001" alias="s1" status="PRIVATE"><EXT_ID accession="SAMEA1" type="biosample"/></SAMPLE></RECEIPT>"#,
    )
    .expect("write receipt");

    let plan = prepare_release(&out, None).expect("release");
    assert_eq!(plan.accession, "ERS28000001");
    assert_eq!(plan.samples.as_deref(), Some(run.outputs.samples.as_path()));
    assert_ne!(plan.manifest, run.outputs.submission);

    let add = fs::read_to_string(&run.outputs.submission).expect("read submission");
    assert!(add.contains("<ADD/>"));
    assert!(!add.contains("RELEASE"));
    let release = fs::read_to_string(&plan.manifest).expect("read release");
    assert!(release.contains(r#"<RELEASE target="ERS28000001"/>"#));
}
