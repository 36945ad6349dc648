//! Codegen Use Case
//!
//! Orchestrates the pipeline for every manifest:
//! 1. Stat and read the manifest
//! 2. Parse and validate it
//! 3. Resolve asset patterns (concurrently)
//! 4. Build identifiers, deduplicate, render
//! 5. Write the document and notify
//!
//! Manifests run as independent futures joined on the current thread; a
//! failure in one never stops the others.

use std::path::{Path, PathBuf};

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::config::DEFAULT_OUTPUT;
use crate::domain::entities::{
    parse_manifest, DeclarationSet, GeneratedDocument, Identifier, ManifestParse, SkipReason,
};
use crate::domain::ports::{CodegenEvent, CodegenEventSink, EntryKind, FileSystem};
use crate::domain::services::{collect_resolved, AssetResolver};
use crate::error::CodegenError;

use super::result::{CodegenReport, ManifestFailure, ManifestOutcome};

/// Options for a codegen run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenOptions {
    /// Output file relative to each manifest directory
    pub output: PathBuf,
    /// Generate but do not write
    pub dry_run: bool,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            dry_run: false,
        }
    }
}

/// Generate documents for `manifest_paths` without writing anything
pub async fn generate<F: FileSystem>(manifest_paths: &[PathBuf], fs: &F) -> Vec<ManifestOutcome> {
    CodegenUseCase::new(fs, CodegenOptions::default())
        .generate(manifest_paths)
        .await
}

/// Codegen use case, parameterized by its file system port
pub struct CodegenUseCase<F: FileSystem> {
    fs: F,
    options: CodegenOptions,
}

impl<F: FileSystem> CodegenUseCase<F> {
    pub fn new(fs: F, options: CodegenOptions) -> Self {
        Self { fs, options }
    }

    /// Run steps 1-4 for every manifest. Results keep the input order.
    pub async fn generate(&self, manifest_paths: &[PathBuf]) -> Vec<ManifestOutcome> {
        join_all(manifest_paths.iter().map(|path| self.generate_one(path))).await
    }

    /// Run steps 1-4 for one manifest
    pub async fn generate_one(&self, manifest_path: &Path) -> ManifestOutcome {
        let read_failure = |source| {
            ManifestOutcome::Failed(ManifestFailure::new(
                manifest_path,
                None,
                vec![CodegenError::ManifestRead {
                    path: manifest_path.to_path_buf(),
                    source,
                }],
            ))
        };

        match self.fs.stat(manifest_path).await {
            Ok(EntryKind::File) => {}
            Ok(_) => return skipped(manifest_path, SkipReason::NotAFile),
            Err(e) => return read_failure(e),
        }
        let bytes = match self.fs.read(manifest_path).await {
            Ok(bytes) => bytes,
            Err(e) => return read_failure(e),
        };

        let manifest = match parse_manifest(&bytes) {
            ManifestParse::Parsed(manifest) => manifest,
            ManifestParse::Skipped(reason) => return skipped(manifest_path, reason),
        };
        let package = manifest.package_name();
        debug!(
            manifest = %manifest_path.display(),
            package,
            patterns = manifest.asset_patterns().len(),
            "parsed manifest"
        );

        let root = manifest_root(manifest_path);
        let resolver = AssetResolver::new(&self.fs, root);
        let assets = match collect_resolved(resolver.resolve_all(manifest.asset_patterns()).await) {
            Ok(assets) => assets,
            Err(errors) => {
                return ManifestOutcome::Failed(ManifestFailure::new(
                    manifest_path,
                    Some(package),
                    errors.into_iter().map(CodegenError::from).collect(),
                ))
            }
        };

        let mut declarations = DeclarationSet::new();
        for asset in &assets {
            declarations.push(&Identifier::build(
                asset.relative_path(),
                package,
                manifest.is_project(),
            ));
        }
        if declarations.is_empty() {
            return skipped(manifest_path, SkipReason::NoDeclarations);
        }
        debug!(
            package,
            assets = assets.len(),
            declarations = declarations.len(),
            "built declarations"
        );

        ManifestOutcome::Generated(GeneratedDocument::new(
            package,
            manifest_path,
            root.join(&self.options.output),
            declarations,
        ))
    }

    /// Run the whole pipeline, write documents and report through `sink`
    pub async fn execute(
        &self,
        root: &Path,
        manifest_paths: &[PathBuf],
        sink: &dyn CodegenEventSink,
    ) -> CodegenReport {
        sink.on_event(CodegenEvent::Started {
            root: root.to_path_buf(),
            manifest_count: manifest_paths.len(),
        });

        let outcomes = join_all(manifest_paths.iter().map(|path| self.run_one(path, sink))).await;

        let mut report = CodegenReport::new();
        for outcome in outcomes {
            match outcome {
                ManifestOutcome::Generated(doc) => report.generated.push(doc.output_path().to_path_buf()),
                ManifestOutcome::Skipped { manifest, reason } => report.skipped.push((manifest, reason)),
                ManifestOutcome::Failed(failure) => report.failed.push(failure),
            }
        }

        sink.on_event(CodegenEvent::Completed {
            generated: report.generated.len(),
            skipped: report.skipped.len(),
            failed: report.failed.len(),
        });
        report
    }

    async fn run_one(&self, manifest_path: &Path, sink: &dyn CodegenEventSink) -> ManifestOutcome {
        let outcome = match self.generate_one(manifest_path).await {
            ManifestOutcome::Generated(doc) => self.write(doc).await,
            other => other,
        };

        match &outcome {
            ManifestOutcome::Generated(doc) => {
                for collision in doc.collisions() {
                    warn!(
                        package = doc.package_name(),
                        symbol = %collision.symbol,
                        kept = %collision.kept,
                        dropped = %collision.dropped,
                        "symbol collision"
                    );
                    sink.on_event(CodegenEvent::Collision {
                        package: doc.package_name().to_string(),
                        collision: collision.clone(),
                    });
                }
                sink.on_event(CodegenEvent::Generated {
                    package: doc.package_name().to_string(),
                    output: doc.output_path().to_path_buf(),
                    declarations: doc.declarations().len(),
                    written: !self.options.dry_run,
                });
            }
            ManifestOutcome::Skipped { manifest, reason } => {
                debug!(manifest = %manifest.display(), %reason, "skipped manifest");
                sink.on_event(CodegenEvent::Skipped {
                    manifest: manifest.clone(),
                    reason: reason.clone(),
                });
            }
            ManifestOutcome::Failed(failure) => {
                warn!(manifest = %failure.manifest.display(), "codegen failed: {failure}");
                sink.on_event(CodegenEvent::Failed {
                    manifest: failure.manifest.clone(),
                    package: failure.package.clone(),
                    error: failure.to_string(),
                });
            }
        }
        outcome
    }

    async fn write(&self, doc: GeneratedDocument) -> ManifestOutcome {
        if self.options.dry_run {
            return ManifestOutcome::Generated(doc);
        }
        match self.fs.write(doc.output_path(), &doc.content()).await {
            Ok(()) => {
                info!(
                    package = doc.package_name(),
                    output = %doc.output_path().display(),
                    "wrote asset list"
                );
                ManifestOutcome::Generated(doc)
            }
            Err(source) => ManifestOutcome::Failed(ManifestFailure::new(
                doc.manifest_path(),
                Some(doc.package_name()),
                vec![CodegenError::Write {
                    path: doc.output_path().to_path_buf(),
                    source,
                }],
            )),
        }
    }
}

fn skipped(manifest_path: &Path, reason: SkipReason) -> ManifestOutcome {
    ManifestOutcome::Skipped {
        manifest: manifest_path.to_path_buf(),
        reason,
    }
}

/// Directory that holds the manifest; asset patterns are relative to it
fn manifest_root(manifest_path: &Path) -> &Path {
    match manifest_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::NoopEventSink;
    use crate::infrastructure::fs::MemoryFs;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingEventSink {
        events: Arc<Mutex<Vec<CodegenEvent>>>,
    }

    impl CodegenEventSink for RecordingEventSink {
        fn on_event(&self, event: CodegenEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    impl RecordingEventSink {
        fn events(&self) -> Vec<CodegenEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    const PKG_MANIFEST: &str = "name: pkg\nflutter:\n  assets:\n    - assets/logo.png\n";
    const APP_MANIFEST: &str =
        "name: app\nis_project: true\nflutter:\n  assets:\n    - assets/images/\n";

    fn workspace() -> MemoryFs {
        let fs = MemoryFs::new();
        fs.add_file("/ws/pkg/pubspec.yaml", PKG_MANIFEST);
        fs.add_file("/ws/pkg/assets/logo.png", "png");
        fs.add_file("/ws/app/pubspec.yaml", APP_MANIFEST);
        fs.add_file("/ws/app/assets/images/a.png", "a");
        fs.add_file("/ws/app/assets/images/b.png", "b");
        fs.add_file("/ws/app/assets/images/nested/c.png", "c");
        fs
    }

    fn use_case(fs: &MemoryFs) -> CodegenUseCase<&MemoryFs> {
        CodegenUseCase::new(fs, CodegenOptions::default())
    }

    fn document(outcome: &ManifestOutcome) -> &GeneratedDocument {
        outcome
            .document()
            .unwrap_or_else(|| panic!("expected a document, got {outcome:?}"))
    }

    #[tokio::test]
    async fn package_assets_are_prefixed() {
        let fs = workspace();

        let outcome = use_case(&fs)
            .generate_one(Path::new("/ws/pkg/pubspec.yaml"))
            .await;

        let doc = document(&outcome);
        assert_eq!(
            doc.declarations(),
            &["  static const $assets_logo_png = 'package/pkg/assets/logo.png';".to_string()]
        );
        assert_eq!(doc.output_path(), Path::new("/ws/pkg/lib/src/asset_list.dart"));
    }

    #[tokio::test]
    async fn project_directory_assets_are_unprefixed_and_flat() {
        let fs = workspace();

        let outcome = use_case(&fs)
            .generate_one(Path::new("/ws/app/pubspec.yaml"))
            .await;

        assert_eq!(
            document(&outcome).declarations(),
            &[
                "  static const $assets_images_a_png = 'assets/images/a.png';".to_string(),
                "  static const $assets_images_b_png = 'assets/images/b.png';".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn duplicates_across_patterns_appear_once_at_first_position() {
        let fs = MemoryFs::new();
        fs.add_file(
            "/ws/app/pubspec.yaml",
            "name: app\nis_project: true\nflutter:\n  assets:\n    - assets/b.png\n    - assets/\n",
        );
        fs.add_file("/ws/app/assets/a.png", "a");
        fs.add_file("/ws/app/assets/b.png", "b");

        let outcome = use_case(&fs)
            .generate_one(Path::new("/ws/app/pubspec.yaml"))
            .await;

        assert_eq!(
            document(&outcome).declarations(),
            &[
                "  static const $assets_b_png = 'assets/b.png';".to_string(),
                "  static const $assets_a_png = 'assets/a.png';".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn skip_conditions_produce_no_document() {
        let fs = MemoryFs::new();
        fs.add_file("/ws/noname/pubspec.yaml", "name: ''\nflutter:\n  assets:\n    - a.png\n");
        fs.add_file("/ws/noassets/pubspec.yaml", "name: x\nflutter:\n  assets: []\n");
        fs.add_file("/ws/empty/pubspec.yaml", "name: y\nflutter:\n  assets:\n    - assets/\n");
        fs.add_dir("/ws/empty/assets/only_dirs");
        fs.add_dir("/ws/dir/pubspec.yaml");

        let outcomes = use_case(&fs)
            .generate(&[
                PathBuf::from("/ws/noname/pubspec.yaml"),
                PathBuf::from("/ws/noassets/pubspec.yaml"),
                PathBuf::from("/ws/empty/pubspec.yaml"),
                PathBuf::from("/ws/dir/pubspec.yaml"),
            ])
            .await;

        let reasons: Vec<SkipReason> = outcomes
            .into_iter()
            .map(|outcome| match outcome {
                ManifestOutcome::Skipped { reason, .. } => reason,
                other => panic!("expected skip, got {other:?}"),
            })
            .collect();
        assert_eq!(
            reasons,
            vec![
                SkipReason::MissingName,
                SkipReason::NoAssets,
                SkipReason::NoDeclarations,
                SkipReason::NotAFile,
            ]
        );
    }

    #[tokio::test]
    async fn missing_asset_fails_only_its_manifest() {
        let fs = workspace();
        fs.add_file(
            "/ws/broken/pubspec.yaml",
            "name: broken\nflutter:\n  assets:\n    - assets/gone.png\n    - assets/also_gone/\n",
        );
        let sink = RecordingEventSink::default();

        let report = use_case(&fs)
            .execute(
                Path::new("/ws"),
                &[
                    PathBuf::from("/ws/broken/pubspec.yaml"),
                    PathBuf::from("/ws/pkg/pubspec.yaml"),
                ],
                &sink,
            )
            .await;

        assert_eq!(report.generated, vec![PathBuf::from("/ws/pkg/lib/src/asset_list.dart")]);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].package.as_deref(), Some("broken"));
        assert_eq!(report.failed[0].errors.len(), 2);
        assert!(fs.exists("/ws/pkg/lib/src/asset_list.dart"));
        assert!(!fs.exists("/ws/broken/lib/src/asset_list.dart"));
        assert!(!report.is_success());
    }

    #[tokio::test]
    async fn unreadable_manifest_fails_without_package() {
        let fs = MemoryFs::new();

        let outcome = use_case(&fs)
            .generate_one(Path::new("/ws/missing/pubspec.yaml"))
            .await;

        match outcome {
            ManifestOutcome::Failed(failure) => {
                assert!(failure.package.is_none());
                assert!(matches!(failure.errors[0], CodegenError::ManifestRead { .. }));
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn execute_writes_and_notifies() {
        let fs = workspace();
        let sink = RecordingEventSink::default();

        let report = use_case(&fs)
            .execute(
                Path::new("/ws"),
                &[
                    PathBuf::from("/ws/app/pubspec.yaml"),
                    PathBuf::from("/ws/pkg/pubspec.yaml"),
                ],
                &sink,
            )
            .await;

        assert!(report.is_success());
        assert_eq!(report.generated.len(), 2);
        let written = fs.read_file("/ws/pkg/lib/src/asset_list.dart").unwrap();
        assert!(written.starts_with("// GENERATED CODE - DO NOT MODIFY BY HAND\n"));

        let events = sink.events();
        assert_eq!(
            events.first(),
            Some(&CodegenEvent::Started {
                root: PathBuf::from("/ws"),
                manifest_count: 2
            })
        );
        assert!(events.contains(&CodegenEvent::Generated {
            package: "pkg".to_string(),
            output: PathBuf::from("/ws/pkg/lib/src/asset_list.dart"),
            declarations: 1,
            written: true,
        }));
        assert_eq!(
            events.last(),
            Some(&CodegenEvent::Completed {
                generated: 2,
                skipped: 0,
                failed: 0
            })
        );
    }

    #[tokio::test]
    async fn execute_overwrites_previous_output() {
        let fs = workspace();
        fs.add_file("/ws/pkg/lib/src/asset_list.dart", "stale content that is longer");

        use_case(&fs)
            .execute(Path::new("/ws"), &[PathBuf::from("/ws/pkg/pubspec.yaml")], &NoopEventSink)
            .await;

        let written = fs.read_file("/ws/pkg/lib/src/asset_list.dart").unwrap();
        assert!(!written.contains("stale"));
    }

    #[tokio::test]
    async fn write_failure_is_reported_per_manifest() {
        let fs = workspace();
        fs.deny_writes("/ws/pkg/lib/src/asset_list.dart");
        let sink = RecordingEventSink::default();

        let report = use_case(&fs)
            .execute(
                Path::new("/ws"),
                &[
                    PathBuf::from("/ws/pkg/pubspec.yaml"),
                    PathBuf::from("/ws/app/pubspec.yaml"),
                ],
                &sink,
            )
            .await;

        assert_eq!(report.failed.len(), 1);
        assert!(matches!(report.failed[0].errors[0], CodegenError::Write { .. }));
        assert_eq!(report.generated, vec![PathBuf::from("/ws/app/lib/src/asset_list.dart")]);
        assert!(sink.events().iter().any(|e| matches!(
            e,
            CodegenEvent::Failed { package: Some(p), .. } if p == "pkg"
        )));
    }

    #[tokio::test]
    async fn dry_run_writes_nothing() {
        let fs = workspace();
        let sink = RecordingEventSink::default();
        let options = CodegenOptions {
            dry_run: true,
            ..CodegenOptions::default()
        };

        let report = CodegenUseCase::new(&fs, options)
            .execute(Path::new("/ws"), &[PathBuf::from("/ws/pkg/pubspec.yaml")], &sink)
            .await;

        assert_eq!(report.generated.len(), 1);
        assert!(!fs.exists("/ws/pkg/lib/src/asset_list.dart"));
        assert!(sink.events().iter().any(|e| matches!(
            e,
            CodegenEvent::Generated { written: false, .. }
        )));
    }

    #[tokio::test]
    async fn collisions_are_reported() {
        let fs = MemoryFs::new();
        fs.add_file(
            "/ws/app/pubspec.yaml",
            "name: app\nis_project: true\nflutter:\n  assets:\n    - assets/\n",
        );
        fs.add_file("/ws/app/assets/a-b.png", "1");
        fs.add_file("/ws/app/assets/a_b.png", "2");
        let sink = RecordingEventSink::default();

        use_case(&fs)
            .execute(Path::new("/ws"), &[PathBuf::from("/ws/app/pubspec.yaml")], &sink)
            .await;

        let written = fs.read_file("/ws/app/lib/src/asset_list.dart").unwrap();
        assert!(written.contains("'assets/a-b.png'"));
        assert!(!written.contains("'assets/a_b.png'"));
        assert!(sink
            .events()
            .iter()
            .any(|e| matches!(e, CodegenEvent::Collision { package, .. } if package == "app")));
    }

    #[tokio::test]
    async fn custom_output_path() {
        let fs = workspace();
        let options = CodegenOptions {
            output: PathBuf::from("lib/gen/assets.dart"),
            dry_run: false,
        };

        CodegenUseCase::new(&fs, options)
            .execute(Path::new("/ws"), &[PathBuf::from("/ws/pkg/pubspec.yaml")], &NoopEventSink)
            .await;

        assert!(fs.exists("/ws/pkg/lib/gen/assets.dart"));
    }

    #[tokio::test]
    async fn generate_is_deterministic() {
        let fs = workspace();
        let paths = [
            PathBuf::from("/ws/app/pubspec.yaml"),
            PathBuf::from("/ws/pkg/pubspec.yaml"),
        ];

        let first: Vec<String> = generate(&paths, &fs)
            .await
            .iter()
            .map(|o| document(o).content())
            .collect();
        let second: Vec<String> = generate(&paths, &fs)
            .await
            .iter()
            .map(|o| document(o).content())
            .collect();

        assert_eq!(first, second);
    }
}
