//! Human-readable rendering of a build descriptor.

use console::Term;
use dualpack_config::{BuildDescriptor, PluginStep, Transform};
use owo_colors::{OwoColorize, Stream::Stderr};

/// Render a loader chain in execution order.
///
/// ```
/// use dualpack_config::Transform;
/// use dualpack_cli::ui::format_chain;
///
/// assert_eq!(format_chain(&[Transform::Sass, Transform::Css]), "sass → css");
/// ```
pub fn format_chain(chain: &[Transform]) -> String {
    chain
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// One `(component, summary)` pair per pipeline component.
pub fn component_lines(descriptor: &BuildDescriptor) -> Vec<(String, String)> {
    let mut lines = Vec::new();

    for (name, modules) in descriptor.entries.iter() {
        lines.push(("entry".to_string(), format!("{name} = [{}]", modules.join(", "))));
    }

    let output = &descriptor.output;
    lines.push((
        "output".to_string(),
        format!(
            "{}/{} (assets {}, source maps {})",
            output.directory.display(),
            output.filename_template,
            output.asset_filename_template,
            match output.source_maps {
                dualpack_config::SourceMapMode::External => "external",
                dualpack_config::SourceMapMode::None => "off",
            }
        ),
    ));

    for rule in descriptor.rules.iter() {
        let mut summary = format!(
            "{} [{}]",
            format_chain(&rule.chain),
            rule.extensions().join(", ")
        );
        if let Some(fallback) = rule.fallback {
            summary.push_str(&format!(" (fallback {fallback})"));
        }
        lines.push((format!("rule {}", rule.concern), summary));
    }

    for group in &descriptor.optimization.cache_groups {
        let mut summary = format!("modules under '{}'", group.test.contains);
        for excluded in &group.test.excludes {
            summary.push_str(&format!(" except '{excluded}'"));
        }
        lines.push((format!("chunk {}", group.name), summary));
    }
    lines.push((
        "minimize".to_string(),
        if descriptor.optimization.minimize { "on" } else { "off" }.to_string(),
    ));

    for step in descriptor.plugins.steps() {
        let summary = match step {
            PluginStep::ExtractStyles { filename } => filename.clone(),
            PluginStep::EmitHtml { template, filename } => {
                format!("{} → {}", template.display(), filename.display())
            }
        };
        lines.push((format!("plugin {}", step.kind()), summary));
    }

    if let Some(dev) = &descriptor.dev_server {
        lines.push((
            "dev server".to_string(),
            format!(
                "port {}, serving {}, live reload {}",
                dev.port,
                dev.content_base.display(),
                if dev.live_reload { "on" } else { "off" }
            ),
        ));
    }

    lines
}

/// Print the per-component summary to stderr.
pub fn print_descriptor_summary(descriptor: &BuildDescriptor) {
    let width = Term::stderr().size().1 as usize;

    eprintln!(
        "\n{} ({})",
        "Pipeline Summary".if_supports_color(Stderr, |s| s.bold().underline().to_string()),
        descriptor.mode
    );
    eprintln!("{}", "─".repeat(width.min(80)));

    for (component, summary) in component_lines(descriptor) {
        eprintln!(
            "  {} {} {}",
            "▸".if_supports_color(Stderr, |s| s.blue()),
            component.if_supports_color(Stderr, |s| s.bright_white().bold().to_string()),
            summary.if_supports_color(Stderr, |s| s.dimmed())
        );
    }

    eprintln!("{}", "─".repeat(width.min(80)));
}
