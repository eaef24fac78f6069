//! Subcommand handlers.

use std::sync::Arc;

use anyhow::{Context, bail};
use certimate_app::AppState;
use certimate_core::certimate_provider::{AccessProvider, DeployProvider, NotifyProvider, Variant};
use certimate_core::error::CoreError;
use certimate_core::form::{CompositeFormController, FormInit};
use certimate_core::services::{EditSurface, SurfaceProps};
use certimate_core::types::{PersistedRecord, RecordFilter, RecordKind, UsageFilter, ValidationResult};
use clap::Args;
use serde_json::Value;

use crate::{KindArg, UsageArg};

impl From<KindArg> for RecordKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Access => Self::Access,
            KindArg::Deploy => Self::Deploy,
            KindArg::Notify => Self::Notify,
        }
    }
}

impl From<UsageArg> for UsageFilter {
    fn from(usage: UsageArg) -> Self {
        match usage {
            UsageArg::Dns => Self::Dns,
            UsageArg::Hosting => Self::Hosting,
            UsageArg::DnsHosting => Self::DnsOrHosting,
            UsageArg::Ca => Self::Ca,
            UsageArg::Notification => Self::Notification,
        }
    }
}

/// Form input shared by `validate` and `save`.
#[derive(Debug, Args)]
pub(crate) struct RecordArgs {
    kind: KindArg,
    /// Edit the saved record with this id instead of creating one.
    #[arg(long)]
    id: Option<String>,
    /// Provider key, e.g. `aliyun` or `aliyun-cdn`.
    #[arg(long)]
    provider: Option<String>,
    #[arg(long)]
    name: Option<String>,
    /// Id of the access record a deploy / notify record uses.
    #[arg(long)]
    access_id: Option<String>,
    /// Only accept providers usable for this purpose.
    #[arg(long)]
    usage: Option<UsageArg>,
    /// Config fields as a JSON object.
    #[arg(long, value_name = "JSON")]
    config_json: Option<String>,
    /// A single config field, `key=value`; repeatable. Values that parse
    /// as JSON are taken as JSON, anything else as a string.
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
    fields: Vec<(String, Value)>,
}

pub(crate) fn parse_assignment(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in `{raw}`"));
    }
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

/// `providers`: catalog entries of a kind.
pub(crate) fn providers(
    state: &AppState,
    kind: KindArg,
    usage: Option<UsageArg>,
    json: bool,
) -> anyhow::Result<()> {
    let entries = state
        .catalog_service
        .entries(kind.into(), usage.map(Into::into));
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }
    for entry in entries {
        match entry.access_provider {
            Some(access) => println!("{:<24} {}  [access: {}]", entry.key, entry.label, access.key()),
            None => println!("{:<24} {}", entry.key, entry.label),
        }
    }
    Ok(())
}

/// `list`: saved records of a kind, one JSON object per line.
pub(crate) async fn list(
    state: &AppState,
    kind: KindArg,
    provider: Option<String>,
) -> anyhow::Result<()> {
    let filter = provider.map(RecordFilter::provider);
    let records = state.record_service.list(kind.into(), filter.as_ref()).await?;
    for record in records {
        println!("{}", serde_json::to_string(&record)?);
    }
    Ok(())
}

/// `validate`: returns `false` when the form has errors.
pub(crate) async fn validate(state: &AppState, args: &RecordArgs) -> anyhow::Result<bool> {
    match args.kind {
        KindArg::Access => validate_as::<AccessProvider>(state, args).await,
        KindArg::Deploy => validate_as::<DeployProvider>(state, args).await,
        KindArg::Notify => validate_as::<NotifyProvider>(state, args).await,
    }
}

/// `save`: returns `false` when the form has errors.
pub(crate) async fn save(state: &AppState, args: &RecordArgs) -> anyhow::Result<bool> {
    match args.kind {
        KindArg::Access => save_as::<AccessProvider>(state, args).await,
        KindArg::Deploy => save_as::<DeployProvider>(state, args).await,
        KindArg::Notify => save_as::<NotifyProvider>(state, args).await,
    }
}

async fn validate_as<V: Variant>(state: &AppState, args: &RecordArgs) -> anyhow::Result<bool> {
    let usage = args.usage.map(UsageFilter::from);
    let init = match find_record(state, args).await? {
        Some(record) => FormInit::edit(&record).with_usage(usage),
        None => FormInit::add(usage),
    };
    let mut controller =
        CompositeFormController::<V>::new(Arc::clone(&state.ctx.localizer), init);
    apply_args(&mut controller, args)?;

    match controller.validate_all().await {
        Ok(values) => {
            println!("{}", serde_json::to_string_pretty(&values)?);
            Ok(true)
        }
        Err(CoreError::ValidationFailed(errors)) => {
            print_errors(&errors);
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

async fn save_as<V: Variant>(state: &AppState, args: &RecordArgs) -> anyhow::Result<bool> {
    let usage = args.usage.map(UsageFilter::from);
    let props = match find_record(state, args).await? {
        Some(record) => SurfaceProps {
            usage,
            ..SurfaceProps::edit(record)
        },
        None => SurfaceProps::add(usage),
    };

    let surface = EditSurface::<V>::new(Arc::clone(&state.ctx));
    surface.open(props).await?;
    surface
        .edit(|controller| apply_args(controller, args))
        .await??;

    match surface.save().await {
        Ok(record) => {
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(true)
        }
        Err(CoreError::ValidationFailed(errors)) => {
            print_errors(&errors);
            Ok(false)
        }
        Err(e) => Err(e.into()),
    }
}

async fn find_record(
    state: &AppState,
    args: &RecordArgs,
) -> anyhow::Result<Option<PersistedRecord>> {
    let Some(ref id) = args.id else {
        return Ok(None);
    };
    let records = state.record_service.list(args.kind.into(), None).await?;
    let record = records
        .into_iter()
        .find(|r| &r.id == id)
        .with_context(|| format!("no {} record with id {id}", RecordKind::from(args.kind)))?;
    Ok(Some(record))
}

fn apply_args<V: Variant>(
    controller: &mut CompositeFormController<V>,
    args: &RecordArgs,
) -> anyhow::Result<()> {
    if let Some(ref provider) = args.provider
        && !controller.select_provider(provider)
    {
        bail!("provider `{provider}` is unknown or not allowed here");
    }
    if let Some(ref name) = args.name {
        controller.set_name(name.as_str());
    }
    if args.access_id.is_some() {
        controller.set_access_id(args.access_id.clone());
    }

    let mut fields = Vec::new();
    if let Some(ref raw) = args.config_json {
        let Value::Object(map) = serde_json::from_str(raw).context("invalid --config-json")?
        else {
            bail!("--config-json must be a JSON object");
        };
        fields.extend(map);
    }
    fields.extend(args.fields.iter().cloned());

    for (key, value) in fields {
        if !controller.set_config_field(&key, value) {
            bail!("`{key}` is not a field of the selected provider");
        }
    }
    Ok(())
}

fn print_errors(errors: &ValidationResult) {
    for (field, message) in errors.iter() {
        eprintln!("{field}: {message}");
    }
}
