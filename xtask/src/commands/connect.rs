//! Design-tool mapping workflows: validation, export, and instance resolution.

use chrono::{SecondsFormat, Utc};
use design_connect::{
    catalog, mapping_for, render_example, resolve, validate_all, ConnectConfig, ConnectError,
    ConnectMapping, DesignInstance, DesignValue,
};
use serde::Serialize;
use std::path::PathBuf;

use crate::runtime::context::CommandContext;
use crate::runtime::error::{XtaskError, XtaskResult};
use crate::XtaskCommand;

/// `cargo xtask connect ...`
pub struct ConnectCommand;

/// Export serialization format.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ExportFormat {
    #[default]
    Json,
    Yaml,
}

impl ExportFormat {
    fn parse(raw: &str) -> XtaskResult<Self> {
        match raw {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(XtaskError::validation(format!(
                "unsupported export format: {other}"
            ))
            .with_hint("use `json` or `yaml`")),
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Supported `cargo xtask connect` subcommands.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConnectOptions {
    Check,
    Export {
        format: ExportFormat,
        out: Option<PathBuf>,
        strict: bool,
    },
    Resolve {
        component: String,
        instance: DesignInstance,
    },
    Help,
}

impl XtaskCommand for ConnectCommand {
    type Options = ConnectOptions;

    fn parse(args: &[String]) -> XtaskResult<Self::Options> {
        parse_connect_options(args)
    }

    fn run(ctx: &CommandContext, options: Self::Options) -> XtaskResult<()> {
        match options {
            ConnectOptions::Check => connect_check(ctx),
            ConnectOptions::Export {
                format,
                out,
                strict,
            } => connect_export(ctx, format, out, strict),
            ConnectOptions::Resolve {
                component,
                instance,
            } => connect_resolve(ctx, &component, &instance),
            ConnectOptions::Help => {
                print_connect_usage();
                Ok(())
            }
        }
    }
}

fn parse_connect_options(args: &[String]) -> XtaskResult<ConnectOptions> {
    let Some((subcommand, rest)) = args.split_first() else {
        return Ok(ConnectOptions::Check);
    };

    match subcommand.as_str() {
        "check" => match rest.first() {
            None => Ok(ConnectOptions::Check),
            Some(extra) => Err(XtaskError::validation(format!(
                "unexpected argument for `connect check`: {extra}"
            ))),
        },
        "export" => parse_export_options(rest),
        "resolve" => parse_resolve_options(rest),
        "help" | "--help" | "-h" => Ok(ConnectOptions::Help),
        other => Err(XtaskError::validation(format!(
            "unknown connect subcommand: {other}"
        ))),
    }
}

fn parse_export_options(args: &[String]) -> XtaskResult<ConnectOptions> {
    let mut format = ExportFormat::default();
    let mut out = None;
    let mut strict = false;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--format" => {
                let value = iter
                    .next()
                    .ok_or_else(|| XtaskError::validation("`--format` requires a value"))?;
                format = ExportFormat::parse(value)?;
            }
            "--out" => {
                let value = iter
                    .next()
                    .ok_or_else(|| XtaskError::validation("`--out` requires a path"))?;
                out = Some(PathBuf::from(value));
            }
            "--strict" => strict = true,
            other => {
                return Err(XtaskError::validation(format!(
                    "unknown argument for `connect export`: {other}"
                )))
            }
        }
    }

    Ok(ConnectOptions::Export {
        format,
        out,
        strict,
    })
}

fn parse_resolve_options(args: &[String]) -> XtaskResult<ConnectOptions> {
    let Some((component, assignments)) = args.split_first() else {
        return Err(XtaskError::validation("`connect resolve` requires a component name")
            .with_hint("e.g. cargo xtask connect resolve Button Text=Go Type=Primary Icon=No"));
    };

    let mut instance = DesignInstance::new();
    for assignment in assignments {
        let Some((property, value)) = assignment.split_once('=') else {
            return Err(XtaskError::validation(format!(
                "expected `Property=Value`, got `{assignment}`"
            )));
        };
        instance.insert(property.to_string(), DesignValue::parse(value));
    }

    Ok(ConnectOptions::Resolve {
        component: component.clone(),
        instance,
    })
}

pub(crate) fn print_connect_usage() {
    eprintln!(
        "Usage: cargo xtask connect <subcommand>\n\
         \n\
         Subcommands:\n\
           check                              Validate every mapping against its component contract (default)\n\
           export [--format json|yaml] [--out <path>] [--strict]\n\
                                              Write the catalog with node URLs filled from tools/design-connect.toml\n\
           resolve <Component> [Property=Value ...]\n\
                                              Resolve a design instance and print the example snippet\n"
    );
}

fn connect_check(ctx: &CommandContext) -> XtaskResult<()> {
    let mappings = catalog();
    validate_all(&mappings).map_err(|err| {
        XtaskError::from(err).with_operation("connect check")
    })?;
    println!("{} mappings valid", mappings.len());

    let config = ctx.connect_config().load_or_default()?;
    for mapping in &mappings {
        if let Err(err) = config.node_url(mapping) {
            eprintln!("warning: {err}");
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct ExportDocument {
    generated_at: String,
    mappings: Vec<ExportedMapping>,
}

#[derive(Debug, Serialize)]
struct ExportedMapping {
    resolved_node_url: Option<String>,
    #[serde(flatten)]
    mapping: ConnectMapping,
}

fn export_document(
    config: &ConnectConfig,
    mappings: Vec<ConnectMapping>,
    strict: bool,
) -> XtaskResult<ExportDocument> {
    let mut exported = Vec::with_capacity(mappings.len());
    let mut unresolved = Vec::new();

    for mapping in mappings {
        let resolved_node_url = match config.node_url(&mapping) {
            Ok(url) => Some(url),
            Err(err) => {
                unresolved.push(err);
                None
            }
        };
        exported.push(ExportedMapping {
            resolved_node_url,
            mapping,
        });
    }

    if strict && !unresolved.is_empty() {
        return Err(XtaskError::from(ConnectError::Invalid(unresolved))
            .with_operation("connect export")
            .with_hint("fill file_id, file_name, and [nodes] in tools/design-connect.toml"));
    }
    for err in &unresolved {
        eprintln!("warning: {err}");
    }

    Ok(ExportDocument {
        generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        mappings: exported,
    })
}

fn connect_export(
    ctx: &CommandContext,
    format: ExportFormat,
    out: Option<PathBuf>,
    strict: bool,
) -> XtaskResult<()> {
    let mappings = catalog();
    validate_all(&mappings).map_err(|err| {
        XtaskError::from(err).with_operation("connect export")
    })?;

    let loader = ctx.connect_config();
    let config = loader
        .load_or_default()
        .map_err(|err| err.with_path(loader.path()))?;
    let document = export_document(&config, mappings, strict)?;

    let body = match format {
        ExportFormat::Json => serde_json::to_string_pretty(&document)?,
        ExportFormat::Yaml => serde_yaml::to_string(&document)?,
    };
    let path = match out {
        Some(out) => ctx.artifacts().resolve_path(&out),
        None => ctx.artifacts().connect_export(format.extension()),
    };
    ctx.artifacts().write(&path, &body)?;
    println!(
        "exported {} mappings to {}",
        document.mappings.len(),
        path.display()
    );
    Ok(())
}

fn connect_resolve(
    ctx: &CommandContext,
    component: &str,
    instance: &DesignInstance,
) -> XtaskResult<()> {
    let mapping = mapping_for(component).ok_or_else(|| {
        XtaskError::validation(format!("no mapping for component `{component}`"))
            .with_hint("run `cargo xtask connect check` to list mapped components")
    })?;

    let resolved = resolve(&mapping, instance)?;
    let config = ctx.connect_config().load_or_default()?;
    match config.node_url(&mapping) {
        Ok(url) => println!("node: {url}"),
        Err(err) => eprintln!("warning: {err}"),
    }
    println!("{}", render_example(&mapping, &resolved)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::error::XtaskErrorCategory;
    use std::collections::BTreeMap;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn connect_options_default_to_check() {
        assert_eq!(
            parse_connect_options(&[]).expect("parse"),
            ConnectOptions::Check
        );
    }

    #[test]
    fn export_options_accept_format_out_and_strict() {
        assert_eq!(
            parse_connect_options(&args(&[
                "export", "--format", "yaml", "--out", "dist/map.yaml", "--strict"
            ]))
            .expect("parse"),
            ConnectOptions::Export {
                format: ExportFormat::Yaml,
                out: Some(PathBuf::from("dist/map.yaml")),
                strict: true,
            }
        );
        let err = parse_connect_options(&args(&["export", "--format", "xml"]))
            .expect_err("xml is unsupported");
        assert_eq!(err.category, XtaskErrorCategory::Validation);
    }

    #[test]
    fn resolve_options_parse_property_assignments() {
        let parsed = parse_connect_options(&args(&[
            "resolve",
            "Chips",
            "multiSelect=true",
            "Variant=Filled",
        ]))
        .expect("parse");
        assert_eq!(
            parsed,
            ConnectOptions::Resolve {
                component: "Chips".into(),
                instance: BTreeMap::from([
                    ("Variant".to_string(), DesignValue::Text("Filled".into())),
                    ("multiSelect".to_string(), DesignValue::Bool(true)),
                ]),
            }
        );
        assert!(parse_connect_options(&args(&["resolve"])).is_err());
        assert!(parse_connect_options(&args(&["resolve", "Chips", "multiSelect"])).is_err());
    }

    #[test]
    fn export_marks_unresolved_nodes_and_strict_rejects_them() {
        let config = ConnectConfig::default();
        let document = export_document(&config, catalog(), false).expect("lenient export");
        let button = document
            .mappings
            .iter()
            .find(|exported| exported.mapping.component == "Button")
            .expect("button exported");
        assert!(button
            .resolved_node_url
            .as_deref()
            .is_some_and(|url| url.contains("node-id=1-10")));
        assert!(document
            .mappings
            .iter()
            .filter(|exported| exported.mapping.component != "Button")
            .all(|exported| exported.resolved_node_url.is_none()));

        let err = export_document(&config, catalog(), true).expect_err("strict export");
        assert_eq!(err.category, XtaskErrorCategory::Mapping);
    }

    #[test]
    fn export_document_serializes_flattened_mappings() {
        let document = export_document(&ConnectConfig::default(), catalog(), false)
            .expect("export");
        let json = serde_json::to_value(&document).expect("json");
        assert_eq!(json["mappings"][0]["component"], "Button");
        assert_eq!(json["mappings"][0]["props"][0]["binding"]["kind"], "text");
        assert!(json["generated_at"].as_str().is_some_and(|at| at.ends_with('Z')));
    }
}
