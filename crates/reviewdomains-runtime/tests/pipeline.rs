//! End-to-end pipeline tests: NDJSON on disk → driver → datasets on disk.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use reviewdomains_core::{
    BusinessRecord, Error, HighLevelCategory, LabeledRecord, Result, ReviewRecord, Sentiment,
};
use reviewdomains_ingest::{load_businesses, load_reviews};
use reviewdomains_runtime::{CategoryOutcome, PipelineDriver};
use reviewdomains_store::{
    load_dataset, read_info, DatasetInfo, DatasetWriter, JsonlDatasetWriter,
};

fn write_ndjson(path: &Path, lines: &[&str]) {
    let mut file = std::fs::File::create(path).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
}

fn review(id: &str, business_id: &str, stars: f64, text: &str) -> ReviewRecord {
    ReviewRecord {
        review_id: id.into(),
        business_id: business_id.into(),
        stars,
        text: text.into(),
    }
}

fn business(id: &str, categories: &str) -> BusinessRecord {
    BusinessRecord {
        business_id: id.into(),
        categories: categories.into(),
    }
}

/// Delegates to the JSON-lines writer except for one category directory.
struct FailingWriter {
    fail_on: &'static str,
    panic: bool,
}

impl DatasetWriter for FailingWriter {
    fn save(&self, records: &[LabeledRecord], dir: &Path) -> Result<Option<DatasetInfo>> {
        if dir.ends_with(self.fail_on) {
            if self.panic {
                panic!("writer exploded on {}", self.fail_on);
            }
            return Err(Error::Persist(format!("disk full at {}", dir.display())));
        }
        JsonlDatasetWriter::new().save(records, dir)
    }
}

#[test]
fn test_active_life_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let business_file = dir.path().join("business.json");
    let reviews_file = dir.path().join("review.json");
    let out = dir.path().join("out");

    write_ndjson(
        &business_file,
        &[
            r#"{"business_id":"b1","name":"Climb Gym","categories":"Climbing, Active Life, Gyms"}"#,
            r#"{"business_id":"b2","name":"Taqueria","categories":"Mexican, Restaurants"}"#,
            r#"{"business_id":"b3","name":"Closed","categories":null}"#,
        ],
    );
    write_ndjson(
        &reviews_file,
        &[
            r#"{"review_id":"r1","user_id":"u1","business_id":"b1","stars":1.0,"useful":0,"funny":0,"cool":0,"text":"Dirty <br>mats.","date":"2018-01-01"}"#,
            r#"{"review_id":"r2","user_id":"u2","business_id":"b1","stars":3.0,"useful":1,"funny":0,"cool":0,"text":"Decent routes, see www.gym.example","date":"2018-01-02"}"#,
            r#"{"review_id":"r3","user_id":"u3","business_id":"b1","stars":5.0,"useful":0,"funny":0,"cool":2,"text":"Best gym ever!","date":"2018-01-03"}"#,
            r#"{"review_id":"r4","user_id":"u4","business_id":"b1","stars":2.0,"useful":0,"funny":1,"cool":0,"text":"Crowded &amp; loud","date":"2018-01-04"}"#,
            r#"{"review_id":"r4","user_id":"u4","business_id":"b1","stars":2.0,"useful":0,"funny":1,"cool":0,"text":"Crowded &amp; loud","date":"2018-01-04"}"#,
        ],
    );

    let businesses = load_businesses(&business_file).unwrap();
    let reviews = load_reviews(&reviews_file).unwrap();
    assert_eq!(businesses.len(), 2);
    assert_eq!(reviews.len(), 5);

    let driver = PipelineDriver::new(Arc::new(JsonlDatasetWriter::new()), &out);
    let report = driver.run(&businesses, &reviews);

    let records = load_dataset(&out.join("Active Life")).unwrap();
    assert_eq!(
        records,
        vec![
            LabeledRecord {
                text: "Dirty mats.".into(),
                category: "active_life".into(),
                label: Sentiment::Negative,
            },
            LabeledRecord {
                text: "Decent routes, see [URL]".into(),
                category: "active_life".into(),
                label: Sentiment::Positive,
            },
            LabeledRecord {
                text: "Crowded & loud".into(),
                category: "active_life".into(),
                label: Sentiment::Negative,
            },
        ]
    );

    match report.outcome(HighLevelCategory::ActiveLife).unwrap() {
        CategoryOutcome::Written {
            rows,
            selected,
            duplicates_removed,
            five_star_removed,
            negative,
            positive,
            ..
        } => {
            assert_eq!(*rows, 3);
            assert_eq!(*selected, 5);
            assert_eq!(*duplicates_removed, 1);
            assert_eq!(*five_star_removed, 1);
            assert_eq!((*negative, *positive), (2, 1));
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    // Restaurants has a business but no reviews; everything else has no business.
    assert_eq!(
        report.outcome(HighLevelCategory::Restaurants),
        Some(&CategoryOutcome::NoReviews)
    );
    assert_eq!(
        report.outcome(HighLevelCategory::Shopping),
        Some(&CategoryOutcome::NoBusinesses)
    );
    assert!(!out.join("Restaurants").exists());
    assert!(!out.join("Shopping").exists());
    assert_eq!(report.written().count(), 1);
    assert_eq!(report.failed().count(), 0);
    assert_eq!(report.categories.len(), HighLevelCategory::ALL.len());

    assert_eq!(read_info(&out.join("Active Life")).unwrap().num_rows, 3);
}

#[test]
fn test_all_five_star_category_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let businesses = vec![business("b1", "Pets")];
    let reviews = vec![review("r1", "b1", 5.0, "Perfect"), review("r2", "b1", 5.0, "Wow")];

    let report = PipelineDriver::new(Arc::new(JsonlDatasetWriter::new()), dir.path())
        .with_categories(&[HighLevelCategory::Pets])
        .run(&businesses, &reviews);

    assert_eq!(
        report.outcome(HighLevelCategory::Pets),
        Some(&CategoryOutcome::Empty)
    );
    assert!(!dir.path().join("Pets").exists());
}

#[test]
fn test_failed_category_does_not_stop_others() {
    let dir = tempfile::tempdir().unwrap();
    let businesses = vec![
        business("b1", "Food, Bakeries"),
        business("b2", "Nightlife, Bars"),
        business("b3", "Shopping, Books"),
    ];
    let reviews = vec![
        review("r1", "b1", 4.0, "Good bread"),
        review("r2", "b2", 1.0, "Sticky floors"),
        review("r3", "b3", 3.0, "Nice shelves"),
    ];

    for panic in [false, true] {
        let out = dir.path().join(if panic { "panic" } else { "error" });
        let writer = FailingWriter {
            fail_on: "Nightlife",
            panic,
        };
        let report = PipelineDriver::new(Arc::new(writer), &out).run(&businesses, &reviews);

        let failed: Vec<HighLevelCategory> = report.failed().map(|c| c.category).collect();
        assert_eq!(failed, vec![HighLevelCategory::Nightlife]);
        assert!(report.outcome(HighLevelCategory::Food).unwrap().is_written());
        assert!(report.outcome(HighLevelCategory::Shopping).unwrap().is_written());
        assert_eq!(load_dataset(&out.join("Shopping")).unwrap().len(), 1);
    }
}

#[test]
fn test_parallel_run_matches_sequential() {
    let dir = tempfile::tempdir().unwrap();
    let businesses = vec![
        business("b1", "Food, Restaurants"),
        business("b2", "Hotels & Travel, Hotels"),
        business("b3", "Beauty & Spas, Nail Salons"),
        business("b4", "Automotive, Auto Repair"),
    ];
    let reviews: Vec<ReviewRecord> = (0..40)
        .map(|i| {
            let stars = (i % 5 + 1) as f64;
            review(
                &format!("r{}", i % 35),
                &format!("b{}", i % 4 + 1),
                stars,
                &format!("Review number {} &amp; more", i),
            )
        })
        .collect();

    let seq_out = dir.path().join("seq");
    let par_out = dir.path().join("par");
    let seq = PipelineDriver::new(Arc::new(JsonlDatasetWriter::new()), &seq_out)
        .run(&businesses, &reviews);
    let par = PipelineDriver::new(Arc::new(JsonlDatasetWriter::new()), &par_out)
        .with_jobs(4)
        .run(&businesses, &reviews);

    let seq_order: Vec<HighLevelCategory> = seq.categories.iter().map(|c| c.category).collect();
    let par_order: Vec<HighLevelCategory> = par.categories.iter().map(|c| c.category).collect();
    assert_eq!(seq_order, par_order);
    assert_eq!(seq.total_rows(), par.total_rows());

    for report in seq.written() {
        let name = report.category.as_str();
        assert_eq!(
            load_dataset(&seq_out.join(name)).unwrap(),
            load_dataset(&par_out.join(name)).unwrap()
        );
    }
}

#[test]
fn test_report_serializes_status_tag() {
    let dir = tempfile::tempdir().unwrap();
    let businesses = vec![business("b1", "Education")];
    let reviews = vec![review("r1", "b1", 2.0, "Boring lectures")];

    let report = PipelineDriver::new(Arc::new(JsonlDatasetWriter::new()), dir.path())
        .with_categories(&[HighLevelCategory::Education, HighLevelCategory::Pets])
        .run(&businesses, &reviews);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["categories"][0]["category"], "Education");
    assert_eq!(json["categories"][0]["slug"], "education");
    assert_eq!(json["categories"][0]["status"], "written");
    assert_eq!(json["categories"][0]["rows"], 1);
    assert_eq!(json["categories"][1]["status"], "no_businesses");
    assert!(json["duration_ms"].is_number());
}
