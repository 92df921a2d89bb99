use super::render::{print_config, print_full_post, print_json, print_messages, print_post_list};
use super::setup::{Cli, Commands, PostFields};
use clap::Parser;
use directories::ProjectDirs;
use folio::api::{ConfigAction, FolioApi, FolioPaths, PostFilter};
use folio::config::FolioConfig;
use folio::error::{FolioError, Result};
use folio::model::PostDraft;
use folio::store::fs::FileStorage;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DATA_DIR_ENV: &str = "FOLIO_DATA";

struct AppContext {
    api: FolioApi<FileStorage>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Create { title, fields }) => handle_create(&mut ctx, title.join(" "), fields),
        Some(Commands::List {
            search,
            category,
            json,
        }) => handle_list(&ctx, PostFilter { category, search }, json),
        Some(Commands::View { slug, json }) => handle_view(&ctx, &slug, json),
        Some(Commands::Update { id, title, fields }) => handle_update(&mut ctx, &id, title, fields),
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, &ids),
        Some(Commands::Reset { yes }) => handle_reset(&mut ctx, yes),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, PostFilter::default(), false),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "folio=debug" } else { "folio=warn" };

    // try_init: leave an already installed subscriber in place.
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .try_init();
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let proj_dirs = ProjectDirs::from("com", "folio", "folio")
        .ok_or_else(|| FolioError::Config("Could not determine data dir".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config = FolioConfig::load(&data_dir)?;
    tracing::debug!(data_dir = %data_dir.display(), key = %config.storage_key, "opening store");

    let storage = FileStorage::new(data_dir.clone());
    let api = FolioApi::new(storage, &config, FolioPaths { data_dir });
    Ok(AppContext { api })
}

fn read_content(fields: &PostFields) -> Result<Option<String>> {
    if let Some(path) = &fields.content_file {
        return Ok(Some(std::fs::read_to_string(path)?));
    }
    match fields.content.as_deref() {
        Some("-") => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(Some(buffer))
        }
        Some(content) => Ok(Some(content.to_string())),
        None => Ok(None),
    }
}

/// Overlays the fields given on the command line onto `draft`.
fn apply_fields(mut draft: PostDraft, fields: PostFields) -> Result<PostDraft> {
    if let Some(content) = read_content(&fields)? {
        draft.content = content;
    }
    if let Some(excerpt) = fields.excerpt {
        draft.excerpt = excerpt;
    }
    if let Some(image) = fields.image {
        draft.image = image;
    }
    if let Some(tags) = fields.tags {
        draft.tags = tags;
    }
    Ok(draft)
}

fn handle_create(ctx: &mut AppContext, title: String, fields: PostFields) -> Result<()> {
    let draft = apply_fields(PostDraft::new(title), fields)?;
    let result = ctx.api.create_post(&draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(
    ctx: &mut AppContext,
    id: &str,
    title: Option<String>,
    fields: PostFields,
) -> Result<()> {
    let mut draft = ctx.api.draft_for(id)?;
    if let Some(title) = title {
        draft.title = title;
    }
    let draft = apply_fields(draft, fields)?;
    let result = ctx.api.update_post(id, &draft)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, filter: PostFilter, json: bool) -> Result<()> {
    let result = ctx.api.list_posts(&filter)?;
    if json {
        print_json(&result.listed_posts)?;
    } else {
        print_post_list(&result.listed_posts);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, slug: &str, json: bool) -> Result<()> {
    let result = ctx.api.view_post(slug)?;
    if json {
        print_json(&result.listed_posts)?;
    } else {
        for post in &result.listed_posts {
            print_full_post(post);
        }
    }
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: &[String]) -> Result<()> {
    let result = ctx.api.delete_posts(ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_reset(ctx: &mut AppContext, yes: bool) -> Result<()> {
    if !yes {
        return Err(FolioError::Api(
            "reset replaces every post; re-run with --yes to confirm".into(),
        ));
    }
    let result = ctx.api.reset()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}
