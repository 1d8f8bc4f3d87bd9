use assert_fs::prelude::*;
use iconpack::{BuildStats, Config, Error, IconPack, Pipeline};
use std::{
    fmt,
    path::Path,
    sync::{Arc, Mutex},
};
use tracing::{field::Field, Event, Level, Subscriber};
use tracing_subscriber::{
    layer::{Context, SubscriberExt},
    Layer,
};

const SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg"
     width="18" height="18" viewBox="0 0 18 18">
  <defs><linearGradient id="a"/></defs>
  <path fill="url(#a)" d="M9 0 18 9 9 18 0 9z"/>
</svg>
"#;

fn svg_with(body: &str) -> String {
    format!("<svg viewBox=\"0 0 18 18\">{body}</svg>")
}

fn config(root: &Path, output: &Path) -> Config {
    Config::builder()
        .root_dir(root)
        .output_file(output)
        .build()
        .unwrap()
}

fn read_pack(path: &Path) -> IconPack {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

/// Records the message of every WARN event.
#[derive(Clone, Default)]
struct WarnCollector {
    messages: Arc<Mutex<Vec<String>>>,
}

struct MessageVisitor(String);

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for WarnCollector {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            self.messages.lock().unwrap().push(visitor.0);
        }
    }
}

/// Runs a build with a collector installed and returns the warnings it saw.
fn run_collecting_warnings(config: Config) -> (BuildStats, Vec<String>) {
    let collector = WarnCollector::default();
    let subscriber = tracing_subscriber::registry().with(collector.clone());

    let stats = tracing::subscriber::with_default(subscriber, || {
        Pipeline::new(config).unwrap().run().unwrap()
    });

    let messages = collector.messages.lock().unwrap().clone();
    (stats, messages)
}

#[test]
fn test_file_at_root_uses_service_slug() {
    let src = assert_fs::TempDir::new().unwrap();
    let out = assert_fs::TempDir::new().unwrap();
    src.child("07-icon-service-ML Studio +.svg").write_str(SVG).unwrap();

    let output = out.child("pack.json");
    Pipeline::new(config(src.path(), output.path())).unwrap().run().unwrap();

    let pack = read_pack(output.path());
    assert_eq!(pack.prefix, "azure");
    assert_eq!(pack.icons.keys().collect::<Vec<_>>(), vec!["ml-studio"]);
    assert!(pack.icons["ml-studio"].content.starts_with("<defs>"));
    assert!(pack.icons["ml-studio"].content.ends_with("z\"/>"));
}

#[test]
fn test_directories_become_category_path() {
    let src = assert_fs::TempDir::new().unwrap();
    let out = assert_fs::TempDir::new().unwrap();
    src.child("Analytics/Cognitive Services/07-icon-service-ML Studio +.svg")
        .write_str(SVG)
        .unwrap();
    src.child("Compute/10021-icon-service-Virtual Machine.svg")
        .write_str(SVG)
        .unwrap();

    let output = out.child("pack.json");
    let stats = Pipeline::new(config(src.path(), output.path()))
        .unwrap()
        .run()
        .unwrap();

    let pack = read_pack(output.path());
    assert_eq!(
        pack.icons.keys().collect::<Vec<_>>(),
        vec!["analytics-cognitive-services-ml-studio", "compute-virtual-machine"]
    );
    assert_eq!(stats.category_count, 2);

    let groups = pack.categories();
    assert_eq!(groups["analytics"], vec!["cognitive-services-ml-studio"]);
    assert_eq!(groups["compute"], vec!["virtual-machine"]);
}

#[test]
fn test_whitespace_body_produces_no_entry() {
    let src = assert_fs::TempDir::new().unwrap();
    let out = assert_fs::TempDir::new().unwrap();
    src.child("01-icon-service-Blank.svg")
        .write_str("<svg viewBox=\"0 0 18 18\">\n   \n</svg>")
        .unwrap();
    src.child("02-icon-service-Real.svg").write_str(SVG).unwrap();

    let stats = Pipeline::new(config(src.path(), &out.path().join("pack.json")))
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(stats.icon_count, 1);
    assert_eq!(stats.skipped_empty, 1);
    assert_eq!(stats.skipped_malformed, 0);
}

#[test]
fn test_missing_digits_skipped_with_one_warning() {
    let src = assert_fs::TempDir::new().unwrap();
    let out = assert_fs::TempDir::new().unwrap();
    src.child("icon-service-foo.svg").write_str(SVG).unwrap();
    src.child("01-icon-service-bar.svg").write_str(SVG).unwrap();

    let output = out.child("pack.json");
    let stats = Pipeline::new(config(src.path(), output.path()))
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(stats.skipped_malformed, 1);
    assert!(!read_pack(output.path()).icons.contains_key("foo"));
}

#[test]
fn test_empty_root_fails_without_output() {
    let src = assert_fs::TempDir::new().unwrap();
    let out = assert_fs::TempDir::new().unwrap();
    src.child("docs/readme.txt").write_str("nothing here").unwrap();

    let output = out.child("pack.json");
    let err = Pipeline::new(config(src.path(), output.path()))
        .unwrap()
        .run()
        .unwrap_err();

    assert!(matches!(err, Error::NoIcons { .. }));
    assert!(!output.exists());
}

#[test]
fn test_colliding_identifiers_keep_last() {
    let src = assert_fs::TempDir::new().unwrap();
    let out = assert_fs::TempDir::new().unwrap();
    src.child("Analytics/01-icon-service-ML Studio.svg")
        .write_str(&svg_with("<g id=\"first\"/>"))
        .unwrap();
    src.child("Analytics/02-icon-service-ML-Studio+.svg")
        .write_str(&svg_with("<g id=\"second\"/>"))
        .unwrap();

    let output = out.child("pack.json");
    let stats = Pipeline::new(config(src.path(), output.path()))
        .unwrap()
        .run()
        .unwrap();

    let pack = read_pack(output.path());
    assert_eq!(pack.len(), 1);
    assert_eq!(pack.icons["analytics-ml-studio"].content, "<g id=\"second\"/>");
    assert_eq!(stats.overrides, 1);
}

#[test]
fn test_strict_mode_rejects_collisions() {
    let src = assert_fs::TempDir::new().unwrap();
    let out = assert_fs::TempDir::new().unwrap();
    src.child("Analytics/01-icon-service-ML Studio.svg").write_str(SVG).unwrap();
    src.child("Analytics/02-icon-service-ML-Studio+.svg").write_str(SVG).unwrap();

    let output = out.child("pack.json");
    let config = Config::builder()
        .root_dir(src.path())
        .output_file(output.path())
        .strict(true)
        .build()
        .unwrap();

    let err = Pipeline::new(config).unwrap().run().unwrap_err();

    assert!(matches!(err, Error::DuplicateIcon { .. }));
    assert!(!output.exists());
}

#[test]
fn test_unusable_names_contribute_nothing() {
    let src = assert_fs::TempDir::new().unwrap();
    let out = assert_fs::TempDir::new().unwrap();
    src.child("+ + +/01-icon-service-Hidden.svg").write_str(SVG).unwrap();
    src.child("Web/02-icon-service-%%.svg").write_str(SVG).unwrap();
    src.child("Web/03-icon-service-App Service.svg").write_str(SVG).unwrap();

    let output = out.child("pack.json");
    let stats = Pipeline::new(config(src.path(), output.path()))
        .unwrap()
        .run()
        .unwrap();

    let pack = read_pack(output.path());
    assert_eq!(pack.icons.keys().collect::<Vec<_>>(), vec!["web-app-service"]);
    assert_eq!(stats.pruned_dirs, 1);
    assert_eq!(stats.skipped_unnamed, 1);
}

#[test]
fn test_rebuild_is_deterministic() {
    let src = assert_fs::TempDir::new().unwrap();
    let out = assert_fs::TempDir::new().unwrap();
    for (dir, name) in [("Web", "App"), ("AI", "Bot"), ("Web", "CDN"), ("Storage", "Blob")] {
        src.child(format!("{dir}/01-icon-service-{name}.svg"))
            .write_str(SVG)
            .unwrap();
    }

    let output = out.child("pack.json");
    Pipeline::new(config(src.path(), output.path())).unwrap().run().unwrap();
    let first = std::fs::read_to_string(output.path()).unwrap();

    Pipeline::new(config(src.path(), output.path())).unwrap().run().unwrap();
    let second = std::fs::read_to_string(output.path()).unwrap();

    assert_eq!(first, second);
    assert!(first.contains("\n    \"icons\""));
}

#[test]
fn test_missing_digits_warns_exactly_once_naming_file() {
    let src = assert_fs::TempDir::new().unwrap();
    let out = assert_fs::TempDir::new().unwrap();
    src.child("icon-service-foo.svg").write_str(SVG).unwrap();
    src.child("01-icon-service-bar.svg").write_str(SVG).unwrap();

    let (stats, warnings) = run_collecting_warnings(config(src.path(), &out.path().join("p.json")));

    assert_eq!(stats.icon_count, 1);
    assert_eq!(warnings.len(), 1, "{warnings:?}");
    assert!(warnings[0].contains("icon-service-foo.svg"));
}

#[test]
fn test_one_warning_per_malformed_name() {
    let src = assert_fs::TempDir::new().unwrap();
    let out = assert_fs::TempDir::new().unwrap();
    for i in 0..4 {
        src.child(format!("Web/{i:02}-icon-service-Site {i}.svg"))
            .write_str(SVG)
            .unwrap();
    }
    for name in ["foo.svg", "Web/icon-service-bar.svg", "Web/x-icon-service-baz.svg"] {
        src.child(name).write_str(SVG).unwrap();
    }
    src.child("Web/01-icon-service-Blank.svg").write_str("<svg> </svg>").unwrap();
    src.child("Web/02-icon-service-!!.svg").write_str(SVG).unwrap();

    let output = out.child("pack.json");
    let (stats, warnings) = run_collecting_warnings(config(src.path(), output.path()));

    assert_eq!(stats.icon_count, 4);
    assert_eq!(stats.skipped_malformed, 3);
    assert_eq!(warnings.len(), 3, "{warnings:?}");
}

#[test]
fn test_dry_run_adds_no_warning() {
    let src = assert_fs::TempDir::new().unwrap();
    let out = assert_fs::TempDir::new().unwrap();
    src.child("01-icon-service-Foo.svg").write_str(SVG).unwrap();

    let output = out.child("pack.json");
    let config = Config::builder()
        .root_dir(src.path())
        .output_file(output.path())
        .dry_run(true)
        .build()
        .unwrap();

    let (stats, warnings) = run_collecting_warnings(config);

    assert!(!stats.written);
    assert!(warnings.is_empty(), "{warnings:?}");
    assert!(!output.exists());
}
