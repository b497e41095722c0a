//! Tests for the three-tier standards resolver

use crate::Result;
use crate::app::models::StandardDefinition;
use crate::app::services::standards::resolver::StandardsResolver;
use crate::app::services::standards::sources::{FileStandardsSource, StandardsSource};
use std::future::Future;
use std::io::Write;
use std::time::Duration;

struct FixedSource(Vec<StandardDefinition>);

impl StandardsSource for FixedSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<StandardDefinition>>> + Send {
        let definitions = self.0.clone();
        async move { Ok(definitions) }
    }

    fn describe(&self) -> String {
        "fixed".to_string()
    }
}

struct StalledSource;

impl StandardsSource for StalledSource {
    fn fetch(&self) -> impl Future<Output = Result<Vec<StandardDefinition>>> + Send {
        async {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(Vec::new())
        }
    }

    fn describe(&self) -> String {
        "stalled".to_string()
    }
}

#[tokio::test]
async fn test_builtin_only_resolution() {
    let snapshot = StandardsResolver::builtin_only().resolve(&[]).await;

    assert_eq!(snapshot.metal("Pb").unwrap().permissible, 10.0);
    assert_eq!(snapshot.parameter("NO3").unwrap().permissible, 45.0);
}

#[tokio::test]
async fn test_external_source_overlays_builtins_per_symbol() {
    let source = FixedSource(vec![StandardDefinition::heavy_metal(
        "Pb", "Lead", 50.0, 0.0, 50.0,
    )]);
    let resolver = StandardsResolver::with_source(source, Duration::from_secs(1));
    let snapshot = resolver.resolve(&[]).await;

    // Only the supplied symbol changes; the rest of the table survives
    assert_eq!(snapshot.metal("Pb").unwrap().permissible, 50.0);
    assert_eq!(snapshot.metal("As").unwrap().permissible, 50.0);
    assert_eq!(snapshot.metals.len(), 9);
}

#[tokio::test]
async fn test_caller_overrides_beat_the_external_tier() {
    let source = FixedSource(vec![StandardDefinition::heavy_metal(
        "Cd", "Cadmium", 10.0, 0.0, 10.0,
    )]);
    let resolver = StandardsResolver::with_source(source, Duration::from_secs(1));
    let overrides = [StandardDefinition::heavy_metal("Cd", "Cadmium", 7.0, 1.0, 7.0)];
    let snapshot = resolver.resolve(&overrides).await;

    assert_eq!(snapshot.metal("Cd").unwrap().permissible, 7.0);
    assert_eq!(snapshot.metal("Cd").unwrap().ideal, 1.0);
}

#[tokio::test]
async fn test_unreachable_file_source_falls_back_to_defaults() {
    let source = FileStandardsSource::new("/nonexistent/standards.json");
    let resolver = StandardsResolver::with_source(source, Duration::from_secs(1));
    let snapshot = resolver.resolve(&[]).await;

    assert_eq!(snapshot.metal("Hg").unwrap().permissible, 2.0);
    assert_eq!(snapshot.metals.len(), 9);
}

#[tokio::test]
async fn test_malformed_document_falls_back_to_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not an array").unwrap();

    let source = FileStandardsSource::new(file.path());
    let resolver = StandardsResolver::with_source(source, Duration::from_secs(1));
    let snapshot = resolver.resolve(&[]).await;

    assert_eq!(snapshot.metals.len(), 9);
    assert_eq!(snapshot.parameters.len(), 15);
}

#[tokio::test]
async fn test_file_source_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"symbol": "Ni", "name": "Nickel", "permissible": 70.0,
             "ideal": 0.0, "max_allowable": 70.0, "category": "heavy_metal"}}]"#
    )
    .unwrap();

    let source = FileStandardsSource::new(file.path());
    let resolver = StandardsResolver::with_source(source, Duration::from_secs(1));
    let snapshot = resolver.resolve(&[]).await;

    assert_eq!(snapshot.metal("Ni").unwrap().permissible, 70.0);
}

#[tokio::test]
async fn test_stalled_source_times_out_to_defaults() {
    let resolver = StandardsResolver::with_source(StalledSource, Duration::from_millis(20));
    let snapshot = resolver.resolve(&[]).await;

    assert_eq!(snapshot.metals.len(), 9);
}
