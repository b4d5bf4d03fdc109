//! Mode/field matrix of the derived descriptor.

use dualpack_config::{
    BuildDescriptor, BuildMode, Concern, PluginStep, ProjectInputs, Transform, RUNTIME_GROUP,
    VENDOR_GROUP,
};

fn derive(mode: BuildMode) -> BuildDescriptor {
    BuildDescriptor::derive(mode, &ProjectInputs::default()).expect("derive descriptor")
}

#[test]
fn every_mode_has_one_entry_with_polyfill_then_app() {
    for mode in BuildMode::ALL {
        let descriptor = derive(mode);
        assert_eq!(descriptor.entries.len(), 1, "{mode}");
        let (_, modules) = descriptor.entries.iter().next().expect("one entry");
        assert_eq!(modules, ["@babel/polyfill", "./src/app.fsproj"], "{mode}");
    }
}

#[test]
fn content_hash_iff_production() {
    for mode in BuildMode::ALL {
        let descriptor = derive(mode);
        assert_eq!(
            descriptor.output.filename_template.has_content_hash(),
            mode.is_production(),
            "{mode}"
        );
    }
}

#[test]
fn style_terminal_step_iff_production() {
    for mode in BuildMode::ALL {
        let descriptor = derive(mode);
        let style = descriptor
            .rules
            .get(Concern::Styling)
            .expect("styling rule");
        let expected = if mode.is_production() {
            Transform::ExtractToFile
        } else {
            Transform::InjectAtRuntime
        };
        assert_eq!(style.terminal(), Some(expected), "{mode}");
    }
}

#[test]
fn two_disjoint_cache_groups_and_minimize_iff_production() {
    let origins = [
        "node_modules/fable-library/Seq.js",
        "src/.fable/fable-library.2.4.0/Types.js",
        "node_modules/react/cjs/react.development.js",
        "src/Main.fs",
    ];

    for mode in BuildMode::ALL {
        let descriptor = derive(mode);
        let policy = &descriptor.optimization;
        let names: Vec<_> = policy.cache_groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, [RUNTIME_GROUP, VENDOR_GROUP]);
        assert_eq!(policy.minimize, mode.is_production());

        for origin in origins {
            let hits = policy
                .cache_groups
                .iter()
                .filter(|g| g.test.matches(origin))
                .count();
            assert!(hits <= 1, "{origin} matched {hits} groups in {mode}");
        }
    }
}

#[test]
fn extraction_present_iff_production_and_precedes_html() {
    for mode in BuildMode::ALL {
        let descriptor = derive(mode);
        let plugins = &descriptor.plugins;
        assert!(plugins.html_index().is_some(), "{mode}");
        match plugins.extraction_index() {
            Some(extraction) => {
                assert!(mode.is_production());
                assert!(extraction < plugins.html_index().unwrap());
            }
            None => assert!(mode.is_development()),
        }
    }
}

#[test]
fn dev_server_iff_development() {
    for mode in BuildMode::ALL {
        let descriptor = derive(mode);
        match &descriptor.dev_server {
            Some(dev) => {
                assert!(mode.is_development());
                assert!(dev.live_reload);
                assert_ne!(dev.port, 0);
            }
            None => assert!(mode.is_production()),
        }
    }
}

#[test]
fn scenario_development_without_flag() {
    let mode = BuildMode::from_args(["dualpack", "describe"]);
    let descriptor = derive(mode);

    assert_eq!(descriptor.mode, BuildMode::Development);
    assert!(descriptor.entries.get("app").is_some());
    assert_eq!(descriptor.output.filename_template.as_str(), "{name}.js");
    assert_eq!(
        descriptor.rules.get(Concern::Styling).unwrap().terminal(),
        Some(Transform::InjectAtRuntime)
    );
    assert_eq!(descriptor.plugins.extraction_index(), None);
    assert!(descriptor.dev_server.is_some());
}

#[test]
fn scenario_production_with_flag() {
    let mode = BuildMode::from_args(["dualpack", "-p", "describe"]);
    let descriptor = derive(mode);

    assert_eq!(descriptor.mode, BuildMode::Production);
    assert!(descriptor.entries.get("demo").is_some());
    assert!(descriptor.entries.get("app").is_none());
    assert_eq!(
        descriptor.output.filename_template.as_str(),
        "{name}.{contentHash}.js"
    );
    assert_eq!(
        descriptor.rules.get(Concern::Styling).unwrap().terminal(),
        Some(Transform::ExtractToFile)
    );
    assert_eq!(
        descriptor.plugins.steps()[0],
        PluginStep::ExtractStyles {
            filename: "styles.css".to_string()
        }
    );
    assert!(descriptor.optimization.minimize);
    assert!(descriptor.dev_server.is_none());
}

#[test]
fn derivation_is_repeatable() {
    for mode in BuildMode::ALL {
        let a = derive(mode).to_json_pretty().unwrap();
        let b = derive(mode).to_json_pretty().unwrap();
        assert_eq!(a, b);
    }
}
